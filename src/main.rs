//! GUSTIX Shuttle entrypoint.
//! Boots the Axum HTTP server with the recipe gateway and `/metrics`.
//!
//! For a plain local server without Shuttle, use the `gustix-serve` bin.

use gustix::{app_with_metrics, telemetry, GustixConfig};
use shuttle_axum::ShuttleAxum;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    telemetry::init_tracing();

    let cfg = GustixConfig::load_default()?;
    let router = app_with_metrics(&cfg)?;

    Ok(router.into())
}
