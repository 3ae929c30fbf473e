//! Storefront error types.
//!
//! Cart operations are total and have no error type; the only failure that
//! crosses into the views is a catalog load failure.

use storefront_data::FetchError;
use thiserror::Error;

/// Errors that can occur while loading the product catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("Catalog request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("Catalog endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The body was not a `{ "products": [...] }` document.
    #[error("Catalog response could not be parsed: {0}")]
    Parse(String),
}

impl From<FetchError> for CatalogError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Status { status, .. } => CatalogError::Status { status },
            FetchError::Decode(msg) => CatalogError::Parse(msg),
            other => CatalogError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_mapping() {
        let err: CatalogError = FetchError::Status {
            status: 500,
            body: "boom".into(),
        }
        .into();
        assert!(matches!(err, CatalogError::Status { status: 500 }));

        let err: CatalogError = FetchError::Decode("eof".into()).into();
        assert!(matches!(err, CatalogError::Parse(_)));

        let err: CatalogError = FetchError::Timeout.into();
        assert!(matches!(err, CatalogError::Transport(_)));
    }
}
