//! Self-hosted server: same router as the Shuttle entry, bound to `bind`
//! from config (`GUSTIX_BIND`, default 127.0.0.1:8000).

use anyhow::Context;
use gustix::{app_with_metrics, telemetry, GustixConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let cfg = GustixConfig::load_default()?;
    let router = app_with_metrics(&cfg)?;

    let listener = tokio::net::TcpListener::bind(&cfg.bind)
        .await
        .with_context(|| format!("binding {}", cfg.bind))?;
    tracing::info!(addr = %cfg.bind, "gustix listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
