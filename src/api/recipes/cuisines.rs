use axum::extract::State;
use axum::Json;
use futures::TryStreamExt;
use mongodb::bson::doc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::Cuisine;
use crate::AppState;

use super::types::SnapshotResponse;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CuisinesResponse {
    pub cuisines: Vec<SnapshotResponse>,
}

#[utoipa::path(
    get,
    path = "/recipes/cuisines",
    tag = "recipes",
    responses(
        (status = 200, description = "All known cuisines", body = CuisinesResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_cuisines(
    State(state): State<AppState>,
) -> Result<Json<CuisinesResponse>, ApiError> {
    let cuisines: Vec<Cuisine> = state
        .db
        .cuisines()
        .find(doc! {})
        .await?
        .try_collect()
        .await?;

    Ok(Json(CuisinesResponse {
        cuisines: cuisines
            .into_iter()
            .map(|c| SnapshotResponse {
                id: c.id.to_hex(),
                name: c.name,
            })
            .collect(),
    }))
}
