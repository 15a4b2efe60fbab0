//! Endpoint and credential configuration.

use crate::error::ReportError;

/// Environment variable overriding the backend base URL.
pub const BASE_URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the API key.
pub const SECRET_KEY_VAR: &str = "SUPABASE_KEY";

/// Backend used when `SUPABASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://lvixtpatqrtuwhygtpjx.supabase.co";

/// Resolved connection settings for the RPC call.
///
/// Built once per run and handed to [`crate::run_with_config`], so tests
/// can supply values without touching the process environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend. Trailing `/` characters from `SUPABASE_URL`
    /// are dropped, so `http://host/` and `http://host` reach the same
    /// `http://host/rest/v1/rpc/...` endpoint instead of `http://host//rest/...`.
    pub base_url: String,
    /// API key sent as both `apikey` and bearer token.
    pub secret_key: String,
}

impl Config {
    /// Resolves configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] when the secret key is unset or empty.
    pub fn resolve<F>(lookup: F) -> Result<Self, ReportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let secret_key = lookup(SECRET_KEY_VAR).filter(|key| !key.is_empty()).ok_or_else(|| {
            ReportError::Configuration(format!("{SECRET_KEY_VAR} environment variable is not set"))
        })?;

        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), secret_key })
    }

    /// Resolves configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] when the secret key is unset or empty.
    pub fn from_env() -> Result<Self, ReportError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Full URL of the named stored procedure.
    #[must_use]
    pub fn rpc_url(&self, procedure: &str) -> String {
        format!("{}/rest/v1/rpc/{procedure}", self.base_url)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_default_base_url() {
        let config = Config::resolve(lookup_from(&[("SUPABASE_KEY", "secret")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.secret_key, "secret");
    }

    #[test]
    fn base_url_override_wins() {
        let config = Config::resolve(lookup_from(&[
            ("SUPABASE_URL", "http://localhost:54321/"),
            ("SUPABASE_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:54321");
        assert_eq!(
            config.rpc_url("mark_step_completed"),
            "http://localhost:54321/rest/v1/rpc/mark_step_completed"
        );
    }

    #[test]
    fn every_trailing_slash_is_dropped() {
        let config = Config::resolve(lookup_from(&[
            ("SUPABASE_URL", "https://example.supabase.co//"),
            ("SUPABASE_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(
            config.rpc_url("mark_step_completed"),
            "https://example.supabase.co/rest/v1/rpc/mark_step_completed"
        );
    }

    #[test]
    fn missing_secret_is_a_configuration_error() {
        let err = Config::resolve(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ReportError::Configuration(_)));
        assert!(err.to_string().contains("SUPABASE_KEY"));
    }

    #[test]
    fn empty_secret_is_a_configuration_error() {
        let err = Config::resolve(lookup_from(&[("SUPABASE_KEY", "")])).unwrap_err();
        assert!(matches!(err, ReportError::Configuration(_)));
    }

    #[test]
    fn debug_output_hides_secret() {
        let config = Config::resolve(lookup_from(&[("SUPABASE_KEY", "hunter2")])).unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
