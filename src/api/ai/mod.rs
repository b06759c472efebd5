pub mod create;
pub mod search;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the AI-assisted endpoints (mounted at /ai)
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/recipes",
        get(search::ai_search_recipes).post(create::ai_create_recipe),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(search::ai_search_recipes, create::ai_create_recipe),
    components(schemas(
        search::AiSearchResponse,
        create::AiCreateRequest,
        create::AiCreateResponse,
    ))
)]
pub struct ApiDoc;
