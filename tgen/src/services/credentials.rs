//! Lookup service credentials from the environment
//!
//! ## Configuration Sources
//! Credentials are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values.
//!
//! ## Keys
//! - `TGEN_LOOKUP_URL`: base URL of the brand lookup service. When absent the
//!   remote lookup is disabled.
//! - `TGEN_LOOKUP_TOKEN`: bearer token sent with every lookup request

use crate::traits::{CredentialSource, LookupCredentials};

/// Credential source backed by environment variables
pub struct RealCredentialSource;

impl RealCredentialSource {
    pub const URL_KEY: &'static str = "TGEN_LOOKUP_URL";
    pub const TOKEN_KEY: &'static str = "TGEN_LOOKUP_TOKEN";

    /// Load variables from a .env file if present.
    ///
    /// Safe to call repeatedly; dotenv never overrides variables that are
    /// already set.
    fn init_env() {
        let _ = dotenv::dotenv();
    }

    /// Build credentials from raw variable values
    pub fn from_values(url: Option<String>, token: Option<String>) -> Option<LookupCredentials> {
        let base_url = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())?;
        Some(LookupCredentials {
            base_url,
            token: token.map(|t| t.trim().to_string()).unwrap_or_default(),
        })
    }
}

#[async_trait::async_trait]
impl CredentialSource for RealCredentialSource {
    async fn lookup_credentials(&self) -> Option<LookupCredentials> {
        Self::init_env();

        Self::from_values(
            std::env::var(Self::URL_KEY).ok(),
            std::env::var(Self::TOKEN_KEY).ok(),
        )
    }
}
