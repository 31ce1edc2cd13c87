use anyhow::{bail, Context};
use std::env;

/// Verification settings for access tokens issued by the identity service.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Expected `iss` claim
    pub issuer: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            bail!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "faq-backend".to_string());

        Ok(Self { secret_key, issuer })
    }
}
