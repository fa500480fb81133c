//! Request-authentication middleware
//!
//! The gate is a single linear pipeline: extract the bearer token from
//! the `Authorization` header, verify it, publish the [`AuthContext`]
//! into the request's extensions, then hand off to the inner handler.
//! A failure at extract or verify short-circuits with a 401 JSON body;
//! nothing is published on failure.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, verify_token};

/// Authenticate a request before it reaches the inner handler.
///
/// Apply with [`axum::middleware::from_fn_with_state`]:
///
/// ```ignore
/// let protected = Router::new()
///     .route("/v1/me", get(me))
///     .layer(middleware::from_fn_with_state(auth_config, require_auth));
/// ```
pub async fn require_auth(
    State(config): State<AuthConfig>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;

    let token = extract_bearer_token(header)?;
    let claims = verify_token(&token, &config)?;

    req.extensions_mut().insert(AuthContext::new(claims, token));

    Ok(next.run(req).await)
}
