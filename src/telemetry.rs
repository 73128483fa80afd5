//! Logging and metrics setup.

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use metrics::{describe_counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::gateway::ALPHABET;

pub const ENV_LOG_FORMAT: &str = "GUSTIX_LOG_FORMAT";

/// Install the tracing subscriber.
///
/// Filter comes from `RUST_LOG` (default `gustix=info,warn`);
/// `GUSTIX_LOG_FORMAT=json` switches to JSON lines. A no-op when the host
/// runtime already installed a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gustix=info,warn"));

    let json = std::env::var(ENV_LOG_FORMAT)
        .ok()
        .is_some_and(|v| v.eq_ignore_ascii_case("json"));

    let res = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
    };

    if res.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

static RECORDER: OnceCell<PrometheusHandle> = OnceCell::new();

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the global Prometheus recorder, or reuse the one this process
    /// already installed. Fails if some other recorder holds the slot.
    pub fn init() -> Result<Self> {
        let handle = RECORDER.get_or_try_init(install)?.clone();
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

fn install() -> Result<PrometheusHandle> {
    // Use default buckets to avoid API differences across crate versions.
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("prometheus: install recorder")?;

    describe_counter!("provider_requests_total", "Outbound provider calls, by path.");
    describe_counter!("provider_errors_total", "Provider transport/parse failures, by path.");
    describe_counter!("gateway_dedup_total", "Duplicate recipes dropped by browse-all.");
    describe_counter!(
        "listing_stale_discarded_total",
        "Listing results discarded because a newer intent superseded them."
    );

    // Static gauge: calls a browse-all makes
    gauge!("gateway_browse_all_calls").set(ALPHABET.count() as f64);

    Ok(handle)
}
