use axum::{Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::ErrorResponse;
use crate::auth::AuthUser;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProtectedResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/protected",
    tag = "users",
    responses(
        (status = 200, description = "Authenticated greeting", body = ProtectedResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn protected(Extension(AuthUser(user)): Extension<AuthUser>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: format!("Hello, {}! Your token is valid.", user.username),
    })
}
