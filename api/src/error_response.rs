use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chatgpt_proxy::{RequestError, UpstreamError};

/// Everything the ask handler can fail with, rendered as a plain-text body.
#[derive(Debug)]
pub enum ApiError {
    Request(RequestError),
    Upstream(UpstreamError),
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::Request(err)
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::Upstream(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Request(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(UpstreamError::Timeout(_)) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Request(err) => {
                log::warn!("Rejected request: {}", err);
                err.to_string()
            }
            // Already logged by the service that produced it.
            ApiError::Upstream(err) => err.to_string(),
        };
        (status, message).into_response()
    }
}
