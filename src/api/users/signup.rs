use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::auth::hash_password;
use crate::db::is_duplicate_key;
use crate::models::User;
use crate::AppState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignupResponse {
    /// Hex id of the created user
    pub id: String,
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body(content = SignupRequest, example = json!({"username": "user", "password": "password"})),
    responses(
        (status = 201, description = "User created", body = SignupResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Username already exists", body = ErrorResponse)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> impl IntoResponse {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "MissingFields".to_string(),
                message: "Username and password are required".to_string(),
            }),
        )
            .into_response();
    }

    let password_hash = match hash_password(&request.password) {
        Ok(h) => h,
        Err(e) => {
            tracing::error!(error = %e, "failed to hash password");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "UnexpectedFailure".to_string(),
                    message: "Internal server error".to_string(),
                }),
            )
                .into_response();
        }
    };

    let user = User {
        id: None,
        username: request.username,
        password_hash,
    };

    match state.db.users().insert_one(&user).await {
        Ok(result) => {
            let id = result
                .inserted_id
                .as_object_id()
                .map(|id| id.to_hex())
                .unwrap_or_default();
            (StatusCode::CREATED, Json(SignupResponse { id })).into_response()
        }
        Err(e) if is_duplicate_key(&e) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Conflict".to_string(),
                message: "Username already exists".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to create user");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "UnexpectedFailure".to_string(),
                    message: "Internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}
