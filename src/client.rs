//! ABR lookup client
//!
//! Stateless request/response client for the three ABR JSON endpoints. Inputs
//! are checked before any network activity; the HTTP exchange is delegated to
//! an [`HttpTransport`]; the body is unwrapped, decoded and normalized into
//! domain records.

use serde_json::Value;
use std::fmt;
use url::Url;

use crate::config::{AbnConfig, ABN_PATH, ACN_PATH, NAME_PATH};
use crate::envelope::decode_body;
use crate::error::{AbnError, ConfigError, ResponseError, Result};
use crate::messages::{MessageKey, MessageOverrides, Messages};
use crate::models::{BusinessRecord, NameSearchResult};
use crate::normalize::{normalize_entity, normalize_name_search};
use crate::transport::{HttpResponse, HttpTransport, ReqwestTransport};
use crate::validation::validate;

/// Default `maxResults` for name searches
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Successful lookup: normalized data plus the HTTP status it arrived with
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<T> {
    pub status: u16,
    pub data: T,
}

/// ABR lookup client
///
/// Safe to share across tasks; lookups take `&self` and keep no state between calls.
pub struct AbnClient<T = ReqwestTransport> {
    guid: String,
    messages: Messages,
    base_url: Url,
    transport: T,
}

impl AbnClient<ReqwestTransport> {
    /// Client for the public ABR endpoint with default settings
    pub fn new(guid: impl Into<String>) -> std::result::Result<Self, ConfigError> {
        Self::from_config(AbnConfig::new(guid))
    }

    pub fn from_config(config: AbnConfig) -> std::result::Result<Self, ConfigError> {
        let transport = ReqwestTransport::with_timeout(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Client configured from `ABN_LOOKUP_*` environment variables
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::from_config(AbnConfig::from_env()?)
    }
}

impl<T: HttpTransport> AbnClient<T> {
    pub fn with_transport(config: AbnConfig, transport: T) -> Self {
        Self {
            guid: config.guid,
            messages: Messages::with_overrides(config.messages),
            base_url: config.base_url,
            transport,
        }
    }

    /// Reword catalog entries. Empty overrides keep the current wording.
    ///
    /// Configuration-time only: takes `&mut self`, so it cannot race a lookup.
    pub fn set_messages(&mut self, overrides: MessageOverrides) {
        self.messages.merge(overrides);
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Validate an ABN's check digits, reporting failures with this client's wording
    pub fn validate_abn(&self, abn: &str) -> Result<()> {
        validate(abn).map_err(|failure| AbnError::Validation {
            failure,
            message: self.messages.get(failure.key()).to_string(),
        })
    }

    /// Look up business details by ABN
    pub async fn abn_search(&self, abn: &str) -> Result<Lookup<BusinessRecord>> {
        self.require_guid()?;
        self.require(abn, MessageKey::AbnRequired)?;

        let response = self
            .get(ABN_PATH, &[("guid", self.guid.clone()), ("abn", abn.to_string())])
            .await?;
        normalize_response(response, normalize_entity)
    }

    /// Look up business details by ACN
    pub async fn acn_search(&self, acn: &str) -> Result<Lookup<BusinessRecord>> {
        self.require_guid()?;
        self.require(acn, MessageKey::AcnRequired)?;

        let response = self
            .get(ACN_PATH, &[("guid", self.guid.clone()), ("acn", acn.to_string())])
            .await?;
        normalize_response(response, normalize_entity)
    }

    /// Search registered names, returning at most `max_results` rows in upstream order
    pub async fn name_search(
        &self,
        name: &str,
        max_results: u32,
    ) -> Result<Lookup<Vec<NameSearchResult>>> {
        self.require_guid()?;
        self.require(name, MessageKey::NameRequired)?;

        let response = self
            .get(
                NAME_PATH,
                &[
                    ("guid", self.guid.clone()),
                    ("name", name.to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;
        normalize_response(response, normalize_name_search)
    }

    fn require_guid(&self) -> Result<()> {
        self.require(&self.guid, MessageKey::GuidRequired)
    }

    fn require(&self, value: &str, key: MessageKey) -> Result<()> {
        if value.is_empty() {
            return Err(AbnError::Precondition {
                key,
                message: self.messages.get(key).to_string(),
            });
        }
        Ok(())
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<HttpResponse> {
        self.transport
            .get(&self.base_url, path, query)
            .await
            .map_err(|e| {
                tracing::debug!(path, error = %e, "ABR transport failure");
                AbnError::from(e)
            })
    }
}

/// Decode and normalize a body regardless of status; the status travels with the outcome
fn normalize_response<R>(
    response: HttpResponse,
    normalize: fn(&Value) -> std::result::Result<R, ResponseError>,
) -> Result<Lookup<R>> {
    let status = response.status;
    let data = decode_body(&response.body)
        .and_then(|raw| normalize(&raw))
        .map_err(|source| {
            tracing::debug!(status, error = %source, "ABR response rejected");
            AbnError::Response { status, source }
        })?;

    Ok(Lookup { status, data })
}

impl<T> fmt::Debug for AbnClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbnClient")
            .field("guid", &if self.guid.is_empty() { "" } else { "<redacted>" })
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
