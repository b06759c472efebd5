use axum::extract::{Path, State};
use axum::Json;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::RecipeDraft;
use crate::validate::validate;
use crate::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UpdateRecipeResponse {
    pub id: String,
}

/// Full replacement: the stored document becomes the freshly validated
/// draft, snapshots re-resolved against the current vocabulary. Existing
/// reviews are preserved.
#[utoipa::path(
    put,
    path = "/recipes/update/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Hex recipe id")),
    request_body = RecipeDraft,
    responses(
        (status = 200, description = "Recipe replaced", body = UpdateRecipeResponse),
        (status = 400, description = "Malformed id or validation failure", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<RecipeDraft>,
) -> Result<Json<UpdateRecipeResponse>, ApiError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::InvalidIdentifier(format!("Invalid recipe id '{id}'")))?;

    let mut recipe = validate(&state.db, &draft).await?;

    let existing = state
        .db
        .recipes()
        .find_one(doc! { "_id": oid })
        .await?
        .ok_or_else(|| ApiError::NotFound("Recipe not found".to_string()))?;

    recipe.id = Some(oid);
    recipe.reviews = existing.reviews;

    let result = state
        .db
        .recipes()
        .replace_one(doc! { "_id": oid }, &recipe)
        .await?;

    if result.matched_count == 0 {
        return Err(ApiError::NotFound("Recipe not found".to_string()));
    }

    Ok(Json(UpdateRecipeResponse { id }))
}
