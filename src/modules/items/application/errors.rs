use crate::modules::items::core::ports::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

/// Everything an item handler can fail with. Only a lookup miss is
/// distinguishable to the client; every other failure is a bare 500.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("item {0:?} not found")]
    NotFound(String),

    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("malformed record: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to render record: {0}")]
    Render(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "item request failed");
        } else {
            warn!(error = %self, "item request rejected");
        }
        status.into_response()
    }
}
