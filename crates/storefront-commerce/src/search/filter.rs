//! Title search filter.
//!
//! Filtering is always computed from the unfiltered baseline, never from a
//! previously filtered list.

use crate::catalog::Product;

/// Trim a raw search term. An empty result means "no filter".
pub fn normalize_term(term: &str) -> &str {
    term.trim()
}

/// Case-insensitive substring match of `term` in `title`.
///
/// `term` must already be normalized; an empty term matches everything.
pub fn title_matches(title: &str, term: &str) -> bool {
    term.is_empty() || title.to_lowercase().contains(&term.to_lowercase())
}

/// Products of `baseline` whose title contains `term`, in baseline order.
///
/// An empty or whitespace-only term yields the whole baseline.
pub fn apply_search(baseline: &[Product], term: &str) -> Vec<Product> {
    let term = normalize_term(term);
    if term.is_empty() {
        return baseline.to_vec();
    }

    baseline
        .iter()
        .filter(|p| title_matches(&p.title, term))
        .cloned()
        .collect()
}
