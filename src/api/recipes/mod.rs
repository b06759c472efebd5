pub mod create;
pub mod cuisines;
pub mod delete;
pub mod detail;
pub mod reviews;
pub mod search;
pub mod tags;
pub mod types;
pub mod update;

use crate::AppState;
use axum::routing::{delete as del, get, post, put};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the recipe catalog (mounted at /recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search_recipes))
        .route("/detail", get(detail::recipe_detail))
        .route("/create", post(create::create_recipe))
        .route("/update/{id}", put(update::update_recipe))
        .route("/delete/{id}", del(delete::delete_recipe))
        .route("/{id}/reviews", post(reviews::add_review))
        .route("/tags", get(tags::list_tags))
        .route("/cuisines", get(cuisines::list_cuisines))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        search::search_recipes,
        detail::recipe_detail,
        create::create_recipe,
        update::update_recipe,
        delete::delete_recipe,
        reviews::add_review,
        tags::list_tags,
        cuisines::list_cuisines,
    ),
    components(schemas(
        types::RecipeResponse,
        types::SnapshotResponse,
        types::ReviewResponse,
        search::SearchRecipesResponse,
        create::CreateRecipeResponse,
        update::UpdateRecipeResponse,
        delete::DeleteRecipeResponse,
        reviews::AddReviewRequest,
        tags::TagsResponse,
        cuisines::CuisinesResponse,
        crate::models::RecipeDraft,
        crate::models::Ingredient,
    ))
)]
pub struct ApiDoc;
