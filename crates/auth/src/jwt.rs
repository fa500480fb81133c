//! JWT verification and token extraction helpers

use axum::http::HeaderValue;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Extract the bearer token from an `Authorization` header value.
///
/// Takes the final space-delimited segment, so both `Bearer <token>` and
/// a bare token are accepted. The scheme word is not inspected beyond
/// rejecting a header that consists of it alone (any case).
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header.to_str().map_err(|_| AuthError::MalformedToken)?;

    if header_str.is_empty() {
        return Err(AuthError::MissingToken);
    }

    let token = header_str.rsplit(' ').next().unwrap_or_default();

    if token.is_empty() || token.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedToken);
    }

    Ok(token.to_string())
}

/// Verify a Supabase JWT against the configured secret.
///
/// Claims come back as an opaque JSON mapping: the provider owns the
/// shape, and unknown fields pass through untouched. Temporal claims are
/// checked when present but none are required. Every failure from the
/// primitive collapses into [`AuthError::InvalidToken`].
pub(crate) fn verify_token(
    token: &str,
    config: &AuthConfig,
) -> Result<Map<String, Value>, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    // `exp` is enforced when the token carries it, but its absence is not
    // an error
    validation.required_spec_claims.clear();

    if let Some(aud) = &config.audience {
        validation.set_audience(&[aud]);
    } else {
        validation.validate_aud = false;
    }

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data =
        decode::<Map<String, Value>>(token, &decoding_key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "JWT verification failed");
            AuthError::InvalidToken
        })?;

    Ok(token_data.claims)
}
