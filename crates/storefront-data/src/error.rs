//! Errors raised while fetching a remote resource.

use thiserror::Error;

/// Why a fetch did not produce a usable body.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection or I/O failure before a full response arrived.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The URL could not be turned into a request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-2xx status.
    #[error("Server answered {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be decoded.
    #[error("Could not decode body: {0}")]
    Decode(String),

    #[error("Request timed out")]
    Timeout,
}
