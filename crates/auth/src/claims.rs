//! JWT claims types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JWT claims from Supabase
///
/// A typed view over the provider-defined payload. Every field is
/// optional: the gate never enforces a shape, and call sites that know
/// the schema opt in via
/// [`AuthContext::claims_as`](crate::AuthContext::claims_as).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupabaseClaims {
    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Subject (user ID)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Audience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// Expires at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    /// Issued at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Role (authenticated user)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Session identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Anonymous sign-in flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    /// Authenticator assurance level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aal: Option<String>,
    /// Email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Provider-specific user metadata sub-mapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<Map<String, Value>>,
    /// Authentication method history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amr: Option<Vec<AmrEntry>>,
    /// Further provider extension fields, forwarded untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry in the `amr` authentication-method history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmrEntry {
    pub method: String,
    pub timestamp: u64,
}
