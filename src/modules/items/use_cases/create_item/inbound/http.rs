use axum::{
    body::Bytes, extract::State, extract::rejection::BytesRejection, http::StatusCode,
    response::Response,
};
use tracing::debug;

use crate::modules::items::application::errors::ApplicationError;
use crate::modules::items::application::record_body::read_record;
use crate::shared::infrastructure::http::json_body::{json_response, to_tab_indented};
use crate::shell::state::AppState;

/// Appends the posted record. Existing records with the same id are left alone.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApplicationError> {
    let record = read_record(body)?;
    let rendered = to_tab_indented(&record).map_err(ApplicationError::Render)?;
    let id = record.id.clone();
    state.store.append(record).await?;
    debug!(%id, "item created");
    Ok(json_response(StatusCode::CREATED, rendered))
}
