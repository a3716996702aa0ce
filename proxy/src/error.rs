//! Error taxonomy for the relay.
//!
//! [`RequestError`] covers everything wrong with what the caller sent and is
//! always detected before any outbound call. [`UpstreamError`] covers the
//! outbound call itself. Neither type knows about HTTP status codes; the
//! server crate decides how to render them.

use thiserror::Error;

/// The inbound payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Body is not JSON, or is JSON but not an object.
    #[error("request body is not a valid JSON object: {0}")]
    MalformedPayload(String),

    /// A required field is absent, null or empty.
    #[error("no '{0}' parameter found in request")]
    MissingField(&'static str),

    /// A field is present but of the wrong JSON type.
    #[error("'{field}' parameter has invalid type: {found}")]
    InvalidFieldType {
        field: &'static str,
        found: String,
    },
}

/// The outbound call to the external API failed at the transport level.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to external API failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("external API did not answer within {0} seconds")]
    Timeout(u64),

    /// Non-2xx answer. The body is logged, never carried here.
    #[error("external API answered with status {status}")]
    Status { status: reqwest::StatusCode },
}
