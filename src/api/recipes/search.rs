use axum::extract::{Query, State};
use axum::Json;
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::Recipe;
use crate::search::build_criteria;
use crate::AppState;

use super::types::RecipeResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Case-insensitive substring of the recipe name
    pub name: Option<String>,
    /// Comma-separated tag names; a recipe matches if it carries any of them
    pub tags: Option<String>,
    /// Comma-separated ingredient names; a recipe must contain all of them
    /// (each matched as a case-insensitive substring)
    pub ingredients: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchRecipesResponse {
    pub recipes: Vec<RecipeResponse>,
}

/// Split a comma-separated query value, dropping empty segments.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[utoipa::path(
    get,
    path = "/recipes/search",
    tag = "recipes",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching recipes; all of them when no filter is given", body = SearchRecipesResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchRecipesResponse>, ApiError> {
    let tags = params.tags.as_deref().map(split_list);
    let ingredients = params.ingredients.as_deref().map(split_list);

    let criteria = build_criteria(
        params.name.as_deref(),
        tags.as_deref(),
        ingredients.as_deref(),
    );

    let recipes: Vec<Recipe> = state.db.recipes().find(criteria).await?.try_collect().await?;

    Ok(Json(SearchRecipesResponse {
        recipes: recipes.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list("chicken, yogurt ,,  "),
            vec!["chicken".to_string(), "yogurt".to_string()]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }
}
