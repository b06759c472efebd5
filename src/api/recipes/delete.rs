use axum::extract::{Path, State};
use axum::Json;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteRecipeResponse {
    pub id: String,
}

#[utoipa::path(
    delete,
    path = "/recipes/delete/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Hex recipe id")),
    responses(
        (status = 200, description = "Recipe deleted", body = DeleteRecipeResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteRecipeResponse>, ApiError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::InvalidIdentifier(format!("Invalid recipe id '{id}'")))?;

    let result = state.db.recipes().delete_one(doc! { "_id": oid }).await?;

    if result.deleted_count == 0 {
        return Err(ApiError::NotFound("Recipe not found".to_string()));
    }

    Ok(Json(DeleteRecipeResponse { id }))
}
