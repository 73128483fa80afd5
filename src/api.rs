use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::detail::{video_embed_lenient, VideoEmbed};
use crate::gateway::{FetchError, RecipeGateway, Scope};
use crate::intent::{ListingParams, QueryIntent};
use crate::listing::ListingState;
use crate::model::{Ingredient, RecipeSummary};
use crate::render;

#[derive(Clone)]
pub struct AppState {
    pub gateway: RecipeGateway,
}

impl AppState {
    pub fn new(gateway: RecipeGateway) -> Self {
        Self { gateway }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/recipes", get(recipes))
        .route("/recipe/{id}", get(recipe))
        .route("/search", get(search))
        .route("/api/recipes", get(api_recipes))
        .route("/api/recipe/{id}", get(api_recipe))
        .route("/health", get(|| async { "OK" }))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

fn status_for(e: &FetchError) -> StatusCode {
    match e {
        FetchError::NotFound => StatusCode::NOT_FOUND,
        FetchError::Transport(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Fresh per-request view: the URL is the only carrier of intent and page.
async fn load_listing(gateway: &RecipeGateway, params: &ListingParams) -> ListingState {
    let mut view = ListingState::new();
    let ticket = view.begin(params.intent());
    let result = gateway.fetch_recipes(ticket.intent()).await;
    if let Err(e) = &result {
        tracing::info!(intent = ?ticket.intent(), error = %e, "listing fetch failed");
    }
    view.complete(&ticket, result);
    view.set_page(params.page());
    view
}

async fn home() -> Html<String> {
    Html(render::home_page().into_string())
}

async fn recipes(State(state): State<AppState>, Query(params): Query<ListingParams>) -> Html<String> {
    let view = load_listing(&state.gateway, &params).await;
    Html(render::recipes_page(&view).into_string())
}

async fn recipe(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.gateway.fetch_recipe_detail(&id).await {
        Ok(detail) => {
            let video = video_embed_lenient(detail.video.as_deref());
            Html(render::recipe_page(&detail, video.as_ref()).into_string()).into_response()
        }
        Err(e) => {
            tracing::info!(%id, error = %e, "detail fetch failed");
            let page = render::message_page("Recipe", e.message(Scope::Detail));
            (status_for(&e), Html(page.into_string())).into_response()
        }
    }
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: Option<String>,
}

/// Home search submit. Blank input browses everything.
async fn search(Query(query): Query<SearchQuery>) -> Redirect {
    let target = match query.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => QueryIntent::Search(q.to_string()).to_query(),
        _ => QueryIntent::All.to_query(),
    };
    Redirect::to(&target)
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: &'static str,
}

fn json_error(e: &FetchError, scope: Scope) -> Response {
    (
        status_for(e),
        Json(ErrorBody {
            error: e.kind(),
            message: e.message(scope),
        }),
    )
        .into_response()
}

#[derive(Serialize)]
struct ListingResp {
    intent: QueryIntent,
    page: usize,
    total_pages: usize,
    total: usize,
    recipes: Vec<RecipeSummary>,
}

async fn api_recipes(State(state): State<AppState>, Query(params): Query<ListingParams>) -> Response {
    let view = load_listing(&state.gateway, &params).await;
    if let Some(e) = view.error() {
        return json_error(e, Scope::Listing);
    }
    let page = view.current_page();
    Json(ListingResp {
        intent: view.intent().clone(),
        page: page.number,
        total_pages: page.total_pages,
        total: page.total_items,
        recipes: page.items.to_vec(),
    })
    .into_response()
}

#[derive(Serialize)]
struct DetailResp {
    id: String,
    name: String,
    thumbnail: String,
    instructions: String,
    area: Option<String>,
    category: Option<String>,
    source: Option<String>,
    video: Option<VideoEmbed>,
    ingredients: Vec<Ingredient>,
}

async fn api_recipe(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.gateway.fetch_recipe_detail(&id).await {
        Ok(d) => {
            let video = video_embed_lenient(d.video.as_deref());
            let ingredients = d.ingredients();
            Json(DetailResp {
                id: d.id,
                name: d.name,
                thumbnail: d.thumbnail,
                instructions: d.instructions,
                area: d.area,
                category: d.category,
                source: d.source,
                video,
                ingredients,
            })
            .into_response()
        }
        Err(e) => json_error(&e, Scope::Detail),
    }
}
