use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use precis_core::inference::InferenceError;
use serde::Serialize;
use utoipa::ToSchema;

/// Error returned to callers as `{"error": message}` with `status` as the HTTP code.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorServer {
    #[serde(rename = "error")]
    pub message: String,
    #[serde(skip)]
    pub status: u16,
}

impl std::fmt::Display for ErrorServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ErrorServer {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<InferenceError> for ErrorServer {
    fn from(error: InferenceError) -> Self {
        match error {
            InferenceError::Upstream { status, .. } => ErrorServer {
                status,
                message: error.to_string(),
            },
            InferenceError::Transport(_) => ErrorServer {
                status: StatusCode::INTERNAL_SERVER_ERROR.into(),
                message: "Internal server error while processing the summary (check the connection, API URL or token)."
                    .to_string(),
            },
            InferenceError::MissingToken | InferenceError::UnexpectedShape => ErrorServer {
                status: StatusCode::INTERNAL_SERVER_ERROR.into(),
                message: error.to_string(),
            },
        }
    }
}
