use axum::{Router, extract::DefaultBodyLimit, routing::any};

use crate::modules::items::use_cases::create_item::inbound::http as create_http;
use crate::modules::items::use_cases::delete_item::inbound::http as delete_http;
use crate::modules::items::use_cases::get_item::inbound::http as get_http;
use crate::modules::items::use_cases::update_item::inbound::http as update_http;
use crate::shell::state::AppState;

/// Every path accepts any HTTP method. Request bodies are read in full,
/// without a size cap.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/getitem", any(get_http::handle))
        .route("/createitem", any(create_http::handle))
        .route("/updateitem", any(update_http::handle))
        .route("/deleteitem", any(delete_http::handle))
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
