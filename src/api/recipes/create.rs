use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::RecipeDraft;
use crate::validate::validate;
use crate::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    /// Hex id of the created recipe
    pub id: String,
}

#[utoipa::path(
    post,
    path = "/recipes/create",
    tag = "recipes",
    request_body = RecipeDraft,
    responses(
        (status = 201, description = "Recipe created", body = CreateRecipeResponse),
        (status = 400, description = "Validation failure", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(draft): Json<RecipeDraft>,
) -> Result<(StatusCode, Json<CreateRecipeResponse>), ApiError> {
    let recipe = validate(&state.db, &draft).await?;

    let result = state.db.recipes().insert_one(&recipe).await?;
    let id = result
        .inserted_id
        .as_object_id()
        .map(|id| id.to_hex())
        .ok_or_else(|| ApiError::Unexpected("insert returned a non-ObjectId key".to_string()))?;

    Ok((StatusCode::CREATED, Json(CreateRecipeResponse { id })))
}
