//! Client configuration
//!
//! Values are read from the environment:
//!
//! | Variable                  | Default                              |
//! |---------------------------|--------------------------------------|
//! | `ABN_LOOKUP_GUID`         | empty (lookups fail with guid required) |
//! | `ABN_LOOKUP_BASE_URL`     | `https://abr.business.gov.au/json/`  |
//! | `ABN_LOOKUP_TIMEOUT_SECS` | `30`                                 |

use std::time::Duration;
use url::Url;

use crate::error::ConfigError;
use crate::messages::MessageOverrides;
use crate::transport::DEFAULT_TIMEOUT;

pub const DEFAULT_BASE_URL: &str = "https://abr.business.gov.au/json/";

pub const GUID_VAR: &str = "ABN_LOOKUP_GUID";
pub const BASE_URL_VAR: &str = "ABN_LOOKUP_BASE_URL";
pub const TIMEOUT_VAR: &str = "ABN_LOOKUP_TIMEOUT_SECS";

/// Fixed endpoint paths, relative to the base URL
pub const ABN_PATH: &str = "AbnDetails.aspx";
pub const ACN_PATH: &str = "AcnDetails.aspx";
pub const NAME_PATH: &str = "MatchingNames.aspx";

#[derive(Debug, Clone)]
pub struct AbnConfig {
    /// Authentication GUID issued by the ABR
    pub guid: String,
    pub base_url: Url,
    pub timeout: Duration,
    pub messages: MessageOverrides,
}

impl AbnConfig {
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
            messages: MessageOverrides::default(),
        }
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(lookup(GUID_VAR).unwrap_or_default());

        if let Some(value) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(&value)?;
        }

        if let Some(value) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    var: TIMEOUT_VAR,
                    value: value.clone(),
                    expected: "a positive number of seconds",
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Override the base URL. A trailing `/` is added so endpoint paths join beneath it.
    pub fn with_base_url(mut self, value: &str) -> Result<Self, ConfigError> {
        let normalized = if value.ends_with('/') {
            value.to_string()
        } else {
            format!("{value}/")
        };
        self.base_url = Url::parse(&normalized).map_err(|source| ConfigError::InvalidBaseUrl {
            value: value.to_string(),
            source,
        })?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_messages(mut self, messages: MessageOverrides) -> Self {
        self.messages = messages;
        self
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_base_url_parses() {
        let url = Url::parse(DEFAULT_BASE_URL).unwrap();
        assert_eq!(default_base_url(), url);
        assert!(url.path().ends_with('/'));
    }

    #[test]
    fn test_defaults() {
        let config = AbnConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.guid, "");
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_reads_variables() {
        let config = AbnConfig::from_lookup(lookup(&[
            (GUID_VAR, "0000-1111"),
            (BASE_URL_VAR, "http://localhost:8080/abr"),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();

        assert_eq!(config.guid, "0000-1111");
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/abr/");
        assert_eq!(
            config.base_url.join(ABN_PATH).unwrap().as_str(),
            "http://localhost:8080/abr/AbnDetails.aspx"
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_timeout() {
        for bad in ["soon", "0", "-3"] {
            let err = AbnConfig::from_lookup(lookup(&[(TIMEOUT_VAR, bad)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == TIMEOUT_VAR));
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let err = AbnConfig::from_lookup(lookup(&[(BASE_URL_VAR, "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }
}
