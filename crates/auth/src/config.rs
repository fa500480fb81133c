//! Authentication configuration

/// Authentication configuration
///
/// Built once at startup and handed to the middleware as state; request
/// handling never reads the environment.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Create a config from an explicit verification secret.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            issuer: None,
            audience: None,
        }
    }

    /// Resolve the verification secret.
    ///
    /// An explicit secret takes precedence over the `SUPABASE_JWT_SECRET`
    /// environment variable; with neither available this is a startup
    /// error, not a per-request 401.
    pub fn resolve(secret: Option<String>) -> Result<Self, anyhow::Error> {
        let jwt_secret = match secret {
            Some(secret) => secret,
            None => std::env::var("SUPABASE_JWT_SECRET").map_err(|_| {
                anyhow::anyhow!("SUPABASE_JWT_SECRET environment variable is required")
            })?,
        };

        Ok(Self::new(jwt_secret))
    }
}
