//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication failure, scoped to a single request.
///
/// Three kinds only, all terminal. Verification failures collapse into
/// [`AuthError::InvalidToken`] whatever the underlying cause (expired,
/// bad signature, malformed encoding, wrong algorithm); the detail goes
/// to the debug log, never to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No usable `Authorization` header on the request
    MissingToken,
    /// Header present, but no extractable token segment
    MalformedToken,
    /// Token extracted, but the verification primitive rejected it
    InvalidToken,
}

impl AuthError {
    /// Client-facing message for the 401 body
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "token is required",
            AuthError::MalformedToken => "token is invalid",
            AuthError::InvalidToken => "jwt is invalid",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.message() }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
