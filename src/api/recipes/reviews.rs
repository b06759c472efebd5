use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_bson, DateTime};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::error::ApiError;
use crate::models::Review;
use crate::AppState;

use super::types::ReviewResponse;

/// Review payload. `rating` is deliberately unconstrained: any numeric value
/// is appended verbatim, matching the append-only review semantics.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddReviewRequest {
    pub user: String,
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

#[utoipa::path(
    post,
    path = "/recipes/{id}/reviews",
    tag = "recipes",
    params(("id" = String, Path, description = "Hex recipe id")),
    request_body = AddReviewRequest,
    responses(
        (status = 201, description = "Review appended", body = ReviewResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn add_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), ApiError> {
    let oid = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::InvalidIdentifier(format!("Invalid recipe id '{id}'")))?;

    let review = Review {
        id: ObjectId::new(),
        user: request.user,
        rating: request.rating,
        comment: request.comment,
        created_at: DateTime::now(),
    };

    let review_bson =
        to_bson(&review).map_err(|e| ApiError::Unexpected(format!("review encoding: {e}")))?;

    let result = state
        .db
        .recipes()
        .update_one(
            doc! { "_id": oid },
            doc! { "$push": { "reviews": review_bson } },
        )
        .await?;

    if result.matched_count == 0 {
        return Err(ApiError::NotFound("Recipe not found".to_string()));
    }

    Ok((StatusCode::CREATED, Json(review.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Pins the open decision on rating bounds: out-of-range and negative
    // ratings are accepted as-is, not clamped or rejected.
    #[test]
    fn rating_is_unconstrained() {
        let request: AddReviewRequest =
            serde_json::from_str(r#"{"user": "ana", "rating": -40}"#).unwrap();
        assert_eq!(request.rating, -40);

        let request: AddReviewRequest =
            serde_json::from_str(r#"{"user": "ana", "rating": 1000, "comment": "wow"}"#).unwrap();
        assert_eq!(request.rating, 1000);
    }

    #[test]
    fn comment_defaults_to_empty() {
        let request: AddReviewRequest =
            serde_json::from_str(r#"{"user": "ana", "rating": 5}"#).unwrap();
        assert_eq!(request.comment, "");
    }
}
