use axum::Router;
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::trace::TraceLayer;
use tracing::{Span, error, warn};
use tracing_subscriber::{EnvFilter, fmt};

const FALLBACK_FILTER: &str = "info";

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored. An unparseable filter falls back to `info` and is
/// reported once the subscriber is live.
pub fn init(filter: &str) {
    let (env_filter, problem) = env_filter(filter);
    let _ = fmt().with_env_filter(env_filter).with_target(false).try_init();
    if let Some(problem) = problem {
        warn!("{problem}");
    }
}

fn env_filter(filter: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(e) => (
            EnvFilter::new(FALLBACK_FILTER),
            Some(format!(
                "invalid log filter {filter:?} ({e}), falling back to {FALLBACK_FILTER:?}"
            )),
        ),
    }
}

/// Wrap `router` in request tracing. Server errors and failures while
/// streaming a response body are logged through `log_http_failure`.
pub fn with_http_tracing(router: Router) -> Router {
    router.layer(TraceLayer::new_for_http().on_failure(log_http_failure))
}

pub fn log_http_failure(failure: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
    error!(
        %failure,
        latency_ms = latency.as_millis() as u64,
        "http response failed"
    );
}
