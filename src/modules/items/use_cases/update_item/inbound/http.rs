use axum::{
    body::Bytes, extract::State, extract::rejection::BytesRejection, http::StatusCode,
    response::Response,
};
use tracing::debug;

use crate::modules::items::application::errors::ApplicationError;
use crate::modules::items::application::record_body::read_record;
use crate::shared::infrastructure::http::json_body::{json_response, to_tab_indented};
use crate::shell::state::AppState;

/// Replaces the last record carrying the posted id and echoes the request.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApplicationError> {
    let record = read_record(body)?;
    let rendered = to_tab_indented(&record).map_err(ApplicationError::Render)?;
    let id = record.id.clone();
    if !state.store.replace(record).await? {
        return Err(ApplicationError::NotFound(id));
    }
    debug!(%id, "item updated");
    Ok(json_response(StatusCode::OK, rendered))
}
