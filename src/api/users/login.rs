use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::auth::{create_session, verify_password};
use crate::AppState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

fn invalid_credentials() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "Unauthorized".to_string(),
            message: "Invalid credentials".to_string(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "users",
    request_body(content = LoginRequest, example = json!({"username": "user", "password": "password"})),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    let user = match state
        .db
        .users()
        .find_one(doc! { "username": &request.username })
        .await
    {
        Ok(Some(u)) => u,
        // Same response for unknown user and bad password.
        Ok(None) => return invalid_credentials(),
        Err(e) => {
            tracing::error!(error = %e, "failed to look up user");
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

    if !verify_password(&request.password, &user.password_hash) {
        return invalid_credentials();
    }

    let user_id = match user.id {
        Some(id) => id,
        None => {
            tracing::error!("stored user has no id");
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

    match create_session(&state.db, user_id).await {
        Ok(token) => (StatusCode::OK, Json(LoginResponse { token })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to create session");
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
