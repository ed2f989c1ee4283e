//! Lightweight configuration loader.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `BIZDIR_*`
//! env vars into a typed [`AppConfig`], and expands `~` and `${VAR}` in
//! the configured records path.

use std::env;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Quiescence window applied to live search input when none is configured.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quiescence window for live search input, in milliseconds.
    pub debounce_ms: u64,
    /// JSON file holding the session's raw records. `~` and environment
    /// variables are expanded. When absent, callers fall back to their
    /// own record source.
    pub records_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            records_file: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment =
            Figment::from(Serialized::defaults(Self::default())).merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        let config = figment.merge(Env::prefixed("BIZDIR_")).extract()?;
        Ok(config)
    }

    /// Expanded records path, if one is configured.
    pub fn records_path(&self) -> Option<PathBuf> {
        self.records_file.as_deref().map(expand_path)
    }
}

/// Expand a user-provided path string:
/// - Expands ${VAR} and $VAR environment variables
/// - Expands a leading '~' to the user's home directory
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path(input: &str) -> PathBuf {
    let expanded_env = shellexpand::env(input).unwrap_or(std::borrow::Cow::Borrowed(input));
    let expanded = shellexpand::tilde(expanded_env.as_ref());
    PathBuf::from(expanded.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_window() {
        let config = AppConfig::default();
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert!(config.records_path().is_none());
    }

    #[test]
    fn records_path_expands_env_vars() {
        env::set_var("BIZDIR_TEST_DATA_DIR", "/tmp/bizdir");
        let config = AppConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            records_file: Some("${BIZDIR_TEST_DATA_DIR}/companies.json".to_string()),
        };
        assert_eq!(
            config.records_path(),
            Some(PathBuf::from("/tmp/bizdir/companies.json"))
        );
    }
}
