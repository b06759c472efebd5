use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ai::extract;
use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::validate::validate;
use crate::AppState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AiCreateRequest {
    /// Free-text recipe prose
    pub description: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AiCreateResponse {
    /// Hex id of the created recipe
    pub id: String,
}

/// Extract a structured recipe from prose, then run it through the same
/// validation as a manual create. Out-of-vocabulary cuisine or tags in the
/// extractor's output fail validation like any other draft.
#[utoipa::path(
    post,
    path = "/ai/recipes",
    tag = "ai",
    request_body = AiCreateRequest,
    responses(
        (status = 201, description = "Recipe created from description", body = AiCreateResponse),
        (status = 400, description = "Extracted recipe failed validation", body = ErrorResponse),
        (status = 500, description = "AI or storage failure", body = ErrorResponse)
    )
)]
pub async fn ai_create_recipe(
    State(state): State<AppState>,
    Json(request): Json<AiCreateRequest>,
) -> Result<(StatusCode, Json<AiCreateResponse>), ApiError> {
    let cuisines = state.db.cuisine_names().await?;
    let tags = state.db.tag_names().await?;

    let draft = extract::extract(state.llm.as_ref(), &request.description, &cuisines, &tags).await?;

    let recipe = validate(&state.db, &draft).await?;

    let result = state.db.recipes().insert_one(&recipe).await?;
    let id = result
        .inserted_id
        .as_object_id()
        .map(|id| id.to_hex())
        .ok_or_else(|| ApiError::Unexpected("insert returned a non-ObjectId key".to_string()))?;

    Ok((StatusCode::CREATED, Json(AiCreateResponse { id })))
}
