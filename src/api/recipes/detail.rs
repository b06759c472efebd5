use axum::extract::{Query, State};
use axum::Json;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::AppState;

use super::types::RecipeResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DetailParams {
    /// Hex recipe id
    pub id: String,
}

#[utoipa::path(
    get,
    path = "/recipes/detail",
    tag = "recipes",
    params(DetailParams),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn recipe_detail(
    State(state): State<AppState>,
    Query(params): Query<DetailParams>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let id = ObjectId::parse_str(&params.id)
        .map_err(|_| ApiError::InvalidIdentifier(format!("Invalid recipe id '{}'", params.id)))?;

    let recipe = state
        .db
        .recipes()
        .find_one(doc! { "_id": id })
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    Ok(Json(recipe.into()))
}
