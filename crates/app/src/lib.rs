//! Vestibule application composition root
//!
//! Composes the public routes and the auth-gated routes into a single
//! application router.

use axum::{middleware, routing::get, Json, Router};
use serde_json::{json, Value};

use vestibule_auth::{require_auth, AuthConfig, SupabaseAuth};

/// Create the main application router with all routes and middleware
pub fn create_app(auth_config: AuthConfig) -> Router {
    // Everything in this sub-router sits behind the auth gate
    let protected = Router::new()
        .route("/v1/me", get(me))
        .layer(middleware::from_fn_with_state(auth_config, require_auth));

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "Vestibule API v0.1.0" }))
        .merge(protected)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Echo the authenticated context back to the caller
async fn me(SupabaseAuth(ctx): SupabaseAuth) -> Json<Value> {
    Json(json!({ "auth": ctx.claims, "token": ctx.token }))
}
