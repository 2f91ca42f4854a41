//! Bearer-token resolution for the Wikimedia API.
//!
//! The token comes from the `OTD_API_TOKEN` environment variable, falling
//! back to the optional config-file field. Resolution happens at startup,
//! before any network call.

use crate::error::{FeedError, FeedResult};
use std::fmt;

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "OTD_API_TOKEN";

/// Resolved API credentials.
#[derive(Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Wrap an already-known token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Resolve the token: `OTD_API_TOKEN` env var first, then the config
    /// fallback. Absence of both is an error.
    pub fn resolve(config_token: Option<&str>) -> FeedResult<Self> {
        Self::resolve_from(std::env::var(TOKEN_ENV_VAR).ok(), config_token)
    }

    fn resolve_from(env_token: Option<String>, config_token: Option<&str>) -> FeedResult<Self> {
        let token = env_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .or_else(|| config_token.map(str::trim).filter(|t| !t.is_empty()));

        match token {
            Some(token) => Ok(Self::new(token)),
            None => Err(FeedError::Credentials(format!(
                "set {TOKEN_ENV_VAR} or the [feed] token config field"
            ))),
        }
    }

    pub fn bearer_token(&self) -> &str {
        &self.token
    }
}

// Keep the token out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_token_wins() {
        let creds =
            Credentials::resolve_from(Some("env-token".to_string()), Some("config-token")).unwrap();
        assert_eq!(creds.bearer_token(), "env-token");
    }

    #[test]
    fn test_config_fallback() {
        let creds = Credentials::resolve_from(None, Some("config-token")).unwrap();
        assert_eq!(creds.bearer_token(), "config-token");
    }

    #[test]
    fn test_blank_env_falls_through() {
        let creds =
            Credentials::resolve_from(Some("   ".to_string()), Some("config-token")).unwrap();
        assert_eq!(creds.bearer_token(), "config-token");
    }

    #[test]
    fn test_missing_both_is_error() {
        let result = Credentials::resolve_from(None, None);
        assert!(matches!(result, Err(FeedError::Credentials(_))));
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new("secret");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
