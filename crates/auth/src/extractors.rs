//! Axum extractors for the authenticated request context

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::context::AuthContext;
use crate::error::AuthError;

/// Accessor for the [`AuthContext`] published by
/// [`require_auth`](crate::require_auth).
///
/// Only meaningful on routes behind the middleware. On a route the
/// middleware never ran for, extraction rejects with 401.
#[derive(Debug)]
pub struct SupabaseAuth(pub AuthContext);

impl<S> FromRequestParts<S> for SupabaseAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(SupabaseAuth)
            .ok_or(AuthError::MissingToken)
    }
}
