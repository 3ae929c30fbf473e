//! Search module.
//!
//! Title search over the catalog baseline.

mod filter;

pub use filter::{apply_search, normalize_term, title_matches};
