// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod api;
pub mod categories;
pub mod config;
pub mod detail;
pub mod gateway;
pub mod intent;
pub mod listing;
pub mod model;
pub mod pagination;
pub mod provider;
pub mod render;
pub mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;

pub use crate::api::{router, AppState};
pub use crate::config::GustixConfig;
pub use crate::gateway::{FetchError, RecipeGateway};
pub use crate::intent::QueryIntent;

use crate::provider::HttpProvider;

/// Build the gateway the binaries use: HTTP provider + configured policy.
pub fn gateway_from_config(cfg: &GustixConfig) -> anyhow::Result<RecipeGateway> {
    let provider = HttpProvider::build(
        &cfg.provider_base_url,
        cfg.request_timeout(),
        cfg.user_agent.as_deref(),
    )
    .context("building recipe provider client")?;

    tracing::info!(
        base_url = provider.base_url(),
        policy = ?cfg.letter_failure_policy,
        timeout_ms = ?cfg.request_timeout_ms,
        "recipe provider configured"
    );

    Ok(RecipeGateway::new(Arc::new(provider)).with_policy(cfg.letter_failure_policy))
}

/// Full application router (without `/metrics`).
pub fn app(cfg: &GustixConfig) -> anyhow::Result<Router> {
    let gateway = gateway_from_config(cfg)?;
    Ok(router(AppState::new(gateway)))
}

/// Application router plus `/metrics`. The Prometheus recorder is installed
/// on first use and shared afterwards.
pub fn app_with_metrics(cfg: &GustixConfig) -> anyhow::Result<Router> {
    let metrics = telemetry::Metrics::init()?;
    Ok(app(cfg)?.merge(metrics.router()))
}
