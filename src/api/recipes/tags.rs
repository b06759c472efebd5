use axum::extract::State;
use axum::Json;
use futures::TryStreamExt;
use mongodb::bson::doc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::Tag;
use crate::AppState;

use super::types::SnapshotResponse;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TagsResponse {
    pub tags: Vec<SnapshotResponse>,
}

#[utoipa::path(
    get,
    path = "/recipes/tags",
    tag = "recipes",
    responses(
        (status = 200, description = "All known tags", body = TagsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<TagsResponse>, ApiError> {
    let tags: Vec<Tag> = state.db.tags().find(doc! {}).await?.try_collect().await?;

    Ok(Json(TagsResponse {
        tags: tags
            .into_iter()
            .map(|t| SnapshotResponse {
                id: t.id.to_hex(),
                name: t.name,
            })
            .collect(),
    }))
}
