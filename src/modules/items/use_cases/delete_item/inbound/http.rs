use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::modules::items::application::errors::ApplicationError;
use crate::shared::infrastructure::http::query::ItemId;
use crate::shell::state::AppState;

/// Removes one record, the last one carrying the id. Not idempotent: a second
/// call for the same id answers 404.
pub async fn handle(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<StatusCode, ApplicationError> {
    if !state.store.remove(&id).await? {
        return Err(ApplicationError::NotFound(id));
    }
    debug!(%id, "item deleted");
    Ok(StatusCode::OK)
}
