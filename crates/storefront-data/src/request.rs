//! Outgoing GET request.

use std::collections::HashMap;

/// Target and headers of a GET request.
#[derive(Debug, Clone)]
pub(crate) struct GetRequest {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl GetRequest {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Set the Accept header, replacing any earlier value.
    pub(crate) fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.headers.insert("Accept".to_string(), content_type.into());
        self
    }
}
