use std::sync::Arc;

use axum::{
    extract::{Json, State, rejection::JsonRejection},
    http::StatusCode,
};
use log::{error, warn};
use precis_core::{
    helpers::{
        dto::{SummaryRequest, SummaryResponse},
        text::meets_min_length,
    },
    inference::InferenceError,
};

use crate::{error::ErrorServer, state::ServerState};

#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummaryRequest,
    description = "Summarize text with the hosted model",
    responses(
        (status = 200, description = "Summary", body = SummaryResponse),
        (status = 400, description = "Text missing or too short", body = ErrorServer),
        (status = 500, description = "Missing API token, unreachable or malformed upstream", body = ErrorServer),
    )
)]
#[axum::debug_handler]
pub async fn summarize(
    State(server_state): State<Arc<ServerState>>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ErrorServer> {
    let summarizer = server_state.summarizer();

    if !summarizer.has_token() {
        error!("HUGGING_FACE_API_TOKEN is not configured, refusing to summarize");
        return Err(InferenceError::MissingToken.into());
    }

    let min_text_length = server_state.min_text_length();

    let text = match payload {
        Ok(Json(request)) => request.text,
        Err(rejection) => {
            warn!("Rejected summarize body: {}", rejection);
            None
        }
    };

    let text = text
        .filter(|text| meets_min_length(text, min_text_length))
        .ok_or_else(|| ErrorServer {
            status: StatusCode::BAD_REQUEST.into(),
            message: format!(
                "text too short or missing: at least {} characters are required",
                min_text_length
            ),
        })?;

    let summary = summarizer.summarize(&text).await?;

    Ok(Json(SummaryResponse::summary(summary)))
}
