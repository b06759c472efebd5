use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::models::User;
use crate::AppState;

use super::db::get_user_from_token;

/// The authenticated user, inserted into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Middleware that requires a valid bearer token for all requests.
/// Apply this to routes that should be protected by default.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = match request.headers().get(header::AUTHORIZATION) {
        Some(h) => h,
        None => {
            return ApiError::Unauthorized("Missing Authorization header".to_string())
                .into_response()
        }
    };

    let auth_str = match auth_header.to_str() {
        Ok(s) => s,
        Err(_) => {
            return ApiError::Unauthorized("Invalid Authorization header".to_string())
                .into_response()
        }
    };

    let token = match auth_str.strip_prefix("Bearer ") {
        Some(t) => t,
        None => {
            return ApiError::Unauthorized("Invalid Authorization header format".to_string())
                .into_response()
        }
    };

    let user = match get_user_from_token(&state.db, token).await {
        Some(u) => u,
        None => {
            return ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
        }
    };

    request.extensions_mut().insert(AuthUser(user));

    next.run(request).await
}
