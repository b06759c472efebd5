pub mod login;
pub mod protected;
pub mod signup;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Public account routes (mounted at the root)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(signup::signup))
        .route("/login", post(login::login))
}

#[derive(OpenApi)]
#[openapi(
    paths(signup::signup, login::login, protected::protected),
    components(schemas(
        signup::SignupRequest,
        signup::SignupResponse,
        login::LoginRequest,
        login::LoginResponse,
        protected::ProtectedResponse,
    ))
)]
pub struct ApiDoc;
