// tests/metrics.rs
mod common;

use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use common::{meals, summary, FakeProvider};
use gustix::api::{self, AppState};
use gustix::gateway::RecipeGateway;
use gustix::provider::Endpoint;
use gustix::telemetry::Metrics;

// App + /metrics in one router; the recorder is process-global.
fn build_app(fake: FakeProvider) -> Router {
    let metrics = Metrics::init().expect("metrics recorder");
    api::router(AppState::new(RecipeGateway::new(Arc::new(fake)))).merge(metrics.router())
}

async fn scrape(app: Router) -> String {
    let resp = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn init_twice_reuses_recorder() {
    assert!(Metrics::init().is_ok());
    assert!(Metrics::init().is_ok());
}

#[tokio::test]
async fn browse_all_shows_up_in_exposition() {
    let fake = FakeProvider::new()
        .reply(
            Endpoint::SearchByFirstLetter('a'),
            meals(vec![summary("1", "Apam balik", "Malaysian", "Dessert")]),
        )
        .reply(
            Endpoint::SearchByFirstLetter('b'),
            meals(vec![summary("1", "Apam balik", "Malaysian", "Dessert")]),
        );
    let app = build_app(fake);

    let r = app
        .clone()
        .oneshot(Request::get("/recipes").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(r.status(), StatusCode::OK);

    let text = scrape(app).await;
    for needle in ["gateway_browse_all_calls", "gateway_dedup_total"] {
        assert!(
            text.contains(needle),
            "metrics exposition missing '{needle}'\n{text}"
        );
    }
}
