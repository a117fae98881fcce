use std::path::PathBuf;

use config::{Config, Environment, Map};
use serde::Deserialize;
use thiserror::Error;

/// Env vars are `PORTFOLIO_<FIELD>`, e.g. `PORTFOLIO_SITE_URL`.
pub const ENV_PREFIX: &str = "PORTFOLIO";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to load site configuration: {0}")]
    Load(String),
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Load(err.to_string())
    }
}

/// Site settings that live outside the Leptos options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public origin, without a trailing slash.
    pub site_url: String,
    /// Where the `rss` binary writes the feed.
    pub feed_path: PathBuf,
    /// Upper bound on contact message length, in characters.
    #[serde(rename = "contact_max_message")]
    pub max_message: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: "https://leul.dev".to_string(),
            feed_path: PathBuf::from("public/rss.xml"),
            max_message: 5000,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Like [`SiteConfig::from_env`], reading `vars` instead of the process
    /// environment.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        let raw: SiteConfig = Config::builder()
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;
        raw.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let url = self.site_url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "PORTFOLIO_SITE_URL",
                value: self.site_url,
            });
        }
        self.site_url = url.to_string();
        if self.max_message == 0 {
            return Err(ConfigError::Invalid {
                var: "PORTFOLIO_CONTACT_MAX_MESSAGE",
                value: self.max_message.to_string(),
            });
        }
        Ok(self)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.site_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_vars(vars(&[
            ("PORTFOLIO_SITE_URL", "https://example.dev/"),
            ("PORTFOLIO_FEED_PATH", "target/site/rss.xml"),
            ("PORTFOLIO_CONTACT_MAX_MESSAGE", "120"),
        ]))
        .unwrap();
        assert_eq!(config.site_url, "https://example.dev");
        assert_eq!(config.feed_path, PathBuf::from("target/site/rss.xml"));
        assert_eq!(config.max_message, 120);
        assert_eq!(config.url("/rss.xml"), "https://example.dev/rss.xml");
    }

    #[test]
    fn test_unrelated_vars_are_ignored() {
        let config = SiteConfig::from_vars(vars(&[
            ("LEPTOS_SITE_ADDR", "0.0.0.0:3000"),
            ("SITE_URL", "not a url"),
        ]))
        .unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            SiteConfig::from_vars(vars(&[("PORTFOLIO_CONTACT_MAX_MESSAGE", "lots")])),
            Err(ConfigError::Load(_))
        ));
        assert_eq!(
            SiteConfig::from_vars(vars(&[("PORTFOLIO_CONTACT_MAX_MESSAGE", "0")])),
            Err(ConfigError::Invalid {
                var: "PORTFOLIO_CONTACT_MAX_MESSAGE",
                value: "0".to_string()
            })
        );
        assert_eq!(
            SiteConfig::from_vars(vars(&[("PORTFOLIO_SITE_URL", "leul.dev")])),
            Err(ConfigError::Invalid {
                var: "PORTFOLIO_SITE_URL",
                value: "leul.dev".to_string()
            })
        );
    }
}
