//! Authentication middleware for the Vestibule API
//!
//! Verifies Supabase-issued JWTs on inbound requests and exposes the
//! decoded claims to downstream handlers: a middleware gate
//! ([`require_auth`]) plus an axum extractor ([`SupabaseAuth`]) for
//! reading the published context.

mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod middleware;

pub use claims::{AmrEntry, SupabaseClaims};
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::SupabaseAuth;
pub use middleware::require_auth;
