use axum::{extract::State, http::StatusCode, response::Response};
use tracing::debug;

use crate::modules::items::application::errors::ApplicationError;
use crate::shared::infrastructure::http::json_body::{json_response, to_tab_indented};
use crate::shared::infrastructure::http::query::ItemId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Response, ApplicationError> {
    let Some(record) = state.store.find(&id).await? else {
        return Err(ApplicationError::NotFound(id));
    };
    let body = to_tab_indented(&record).map_err(ApplicationError::Render)?;
    debug!(%id, "item found");
    Ok(json_response(StatusCode::OK, body))
}
