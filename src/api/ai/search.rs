use axum::extract::{Query, State};
use axum::Json;
use futures::TryStreamExt;
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::ai::{localize, query};
use crate::api::recipes::types::RecipeResponse;
use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::Recipe;
use crate::search::build_criteria;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AiSearchParams {
    /// Natural-language query, any language
    pub q: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiSearchResponse {
    /// Language detected in the query
    pub user_language: String,
    pub recipes: Vec<RecipeResponse>,
    /// Opaque display text in the detected language; not machine-readable
    pub display_text: String,
}

#[utoipa::path(
    get,
    path = "/ai/recipes",
    tag = "ai",
    params(AiSearchParams),
    responses(
        (status = 200, description = "Matching recipes with a localized rendering", body = AiSearchResponse),
        (status = 500, description = "AI or storage failure", body = ErrorResponse)
    )
)]
pub async fn ai_search_recipes(
    State(state): State<AppState>,
    Query(params): Query<AiSearchParams>,
) -> Result<Json<AiSearchResponse>, ApiError> {
    // Live vocabulary, fetched per request.
    let tags = state.db.tag_names().await?;
    let cuisines = state.db.cuisine_names().await?;
    let ingredients = state.db.ingredient_names().await?;

    let translated = query::translate(
        state.llm.as_ref(),
        &params.q,
        &tags,
        &cuisines,
        &ingredients,
    )
    .await?;

    let mut criteria = build_criteria(
        None,
        Some(&translated.tags).filter(|t| !t.is_empty()).map(Vec::as_slice),
        Some(&translated.ingredients)
            .filter(|i| !i.is_empty())
            .map(Vec::as_slice),
    );

    // The builder contract is name/tags/ingredients only; cuisine filtering
    // from the translated query is applied here, against the embedded
    // snapshot name.
    if !translated.cuisines.is_empty() {
        criteria.insert(
            "cuisine.name",
            doc! { "$in": translated.cuisines.clone() },
        );
    }

    let recipes: Vec<Recipe> = state.db.recipes().find(criteria).await?.try_collect().await?;
    let recipes: Vec<RecipeResponse> = recipes.into_iter().map(Into::into).collect();

    let display_text =
        localize::localize(state.llm.as_ref(), &recipes, &translated.user_language).await?;

    Ok(Json(AiSearchResponse {
        user_language: translated.user_language,
        recipes,
        display_text,
    }))
}
