use std::env::vars;

use log::info;
use serde::Deserialize;
use ustr::Ustr;

use crate::error::ConfigError;
use crate::table::DEFAULT_MAX_ROWS;

/// Runtime configuration shared by every API caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Bearer token attached to every admin request when present.
    pub auth_token: Option<String>,
    /// Upper bound on rows rendered by a single table.
    pub max_rows: usize,
}

/// Environment as read by `serde-env`, before defaults are applied.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    api_token: Option<String>,
    table_max_rows: Option<usize>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            auth_token: None,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url.trim_end_matches('/')))
        }
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Reads `API_BASE_URL`, `API_TOKEN` and `TABLE_MAX_ROWS`, falling
    /// back to the build environment's defaults for anything unset.
    pub fn init() -> Result<Self, ConfigError> {
        info!("Loading dashboard configuration from environment variables");

        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            api_base_url,
            api_token,
            table_max_rows,
        } = raw;

        let api_base_url = match api_base_url {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                info!("Using provided API_BASE_URL: {url}");
                url
            }
            Some(url) => return Err(ConfigError::InvalidBaseUrl(url)),
            None => default_base_url().to_owned(),
        };

        let max_rows = match table_max_rows {
            Some(0) => return Err(ConfigError::ZeroMaxRows),
            Some(rows) => rows,
            None => DEFAULT_MAX_ROWS,
        };

        Ok(Self {
            api_base_url,
            auth_token: api_token.filter(|token| !token.is_empty()),
            max_rows,
        })
    }
}

fn default_base_url() -> &'static str {
    if cfg!(target_arch = "wasm32") {
        ""
    } else if cfg!(feature = "env_test") {
        "https://staging.tiffin-admin.in"
    } else if cfg!(feature = "env_nightly") {
        "https://nightly.tiffin-admin.in"
    } else {
        "https://admin.tiffin-admin.in"
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(default_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn test_api_url_appends_prefix() {
        let config = BusinessConfig::new("http://localhost:8080/");
        assert_eq!(config.api_url(), Ustr::from("http://localhost:8080/api"));

        let relative = BusinessConfig::new("");
        assert_eq!(relative.api_url(), Ustr::from("/api"));
    }

    #[test]
    fn test_from_raw_applies_defaults() {
        let raw: RawConfig = from_iter(Vec::<(&str, &str)>::new())
            .expect("empty environment should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("defaults should build");
        assert_eq!(config.max_rows, DEFAULT_MAX_ROWS);
        assert!(config.auth_token().is_none());
        assert_eq!(config.api_base_url, default_base_url());
    }

    #[test]
    fn test_from_raw_reads_values() {
        let raw: RawConfig = from_iter(vec![
            ("API_BASE_URL", "https://example.test"),
            ("API_TOKEN", "secret"),
            ("TABLE_MAX_ROWS", "25"),
        ])
        .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.api_base_url, "https://example.test");
        assert_eq!(config.auth_token(), Some("secret"));
        assert_eq!(config.max_rows, 25);
    }

    #[test]
    fn test_zero_max_rows_is_rejected() {
        let raw: RawConfig =
            from_iter(vec![("TABLE_MAX_ROWS", "0")]).expect("RawConfig should deserialize");

        let err = BusinessConfig::from_raw(raw).expect_err("zero rows must be rejected");
        assert!(err.to_string().contains("TABLE_MAX_ROWS"));
    }

    #[test]
    fn test_base_url_without_scheme_is_rejected() {
        let raw: RawConfig = from_iter(vec![("API_BASE_URL", "admin.example.test")])
            .expect("RawConfig should deserialize");

        assert!(matches!(
            BusinessConfig::from_raw(raw),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let config = BusinessConfig::from_raw(RawConfig {
            api_token: Some(String::new()),
            ..RawConfig::default()
        })
        .expect("config should build");
        assert!(config.auth_token().is_none());
    }
}
