use anyhow::Context;

use item_store::shell::config::AppConfig;
use item_store::shell::http::router;
use item_store::shell::state::AppState;
use item_store::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    telemetry::init(&config.log_filter);

    let app = telemetry::with_http_tracing(router(AppState::seeded()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("unable to start listener on {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
