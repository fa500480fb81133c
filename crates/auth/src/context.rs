//! Per-request authentication context

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Verified authentication material for one request.
///
/// Published into the request's extensions by
/// [`require_auth`](crate::require_auth) after the token verifies, and
/// read back by the [`SupabaseAuth`](crate::SupabaseAuth) extractor.
/// Created at most once per request and never mutated; it lives and dies
/// with the request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Decoded claims, exactly as the token carried them
    pub claims: Map<String, Value>,
    /// The raw bearer token the claims were decoded from
    pub token: String,
}

impl AuthContext {
    pub(crate) fn new(claims: Map<String, Value>, token: String) -> Self {
        Self { claims, token }
    }

    /// Deserialize the claims into a caller-known shape.
    ///
    /// [`SupabaseClaims`](crate::SupabaseClaims) covers the standard
    /// provider schema; any type deserializable from a JSON object works.
    pub fn claims_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.claims.clone()))
    }
}
