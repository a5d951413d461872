//! Message catalog
//!
//! Display strings for every locally-detected error condition. A client owns one
//! catalog; callers can reword entries by merging [`MessageOverrides`] into it.

use serde::{Deserialize, Serialize};

/// The closed set of conditions the catalog has wording for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    GuidRequired,
    AbnRequired,
    AcnRequired,
    NameRequired,
    AbnInvalidLength,
    AbnInvalidFormat,
    AbnInvalid,
}

impl MessageKey {
    pub const ALL: [MessageKey; 7] = [
        MessageKey::GuidRequired,
        MessageKey::AbnRequired,
        MessageKey::AcnRequired,
        MessageKey::NameRequired,
        MessageKey::AbnInvalidLength,
        MessageKey::AbnInvalidFormat,
        MessageKey::AbnInvalid,
    ];
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GuidRequired => write!(f, "guid-required"),
            Self::AbnRequired => write!(f, "abn-required"),
            Self::AcnRequired => write!(f, "acn-required"),
            Self::NameRequired => write!(f, "name-required"),
            Self::AbnInvalidLength => write!(f, "abn-invalid-length"),
            Self::AbnInvalidFormat => write!(f, "abn-invalid-format"),
            Self::AbnInvalid => write!(f, "abn-invalid"),
        }
    }
}

/// Wording for each [`MessageKey`]. Every entry is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Messages {
    guid_required: String,
    abn_required: String,
    acn_required: String,
    name_required: String,
    abn_invalid_length: String,
    abn_invalid_format: String,
    abn_invalid: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            guid_required: "guid is required".to_string(),
            abn_required: "abn is required".to_string(),
            acn_required: "acn is required".to_string(),
            name_required: "name is required".to_string(),
            abn_invalid_length: "abn must be 11 digits".to_string(),
            abn_invalid_format: "abn must be a number".to_string(),
            abn_invalid: "invalid abn".to_string(),
        }
    }
}

impl Messages {
    /// Default catalog with `overrides` merged in
    pub fn with_overrides(overrides: MessageOverrides) -> Self {
        let mut messages = Self::default();
        messages.merge(overrides);
        messages
    }

    pub fn get(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::GuidRequired => &self.guid_required,
            MessageKey::AbnRequired => &self.abn_required,
            MessageKey::AcnRequired => &self.acn_required,
            MessageKey::NameRequired => &self.name_required,
            MessageKey::AbnInvalidLength => &self.abn_invalid_length,
            MessageKey::AbnInvalidFormat => &self.abn_invalid_format,
            MessageKey::AbnInvalid => &self.abn_invalid,
        }
    }

    /// Replace entries with the non-empty values in `overrides`.
    ///
    /// Unset or empty overrides leave the current wording in place.
    pub fn merge(&mut self, overrides: MessageOverrides) {
        replace_non_empty(&mut self.guid_required, overrides.guid_required);
        replace_non_empty(&mut self.abn_required, overrides.abn_required);
        replace_non_empty(&mut self.acn_required, overrides.acn_required);
        replace_non_empty(&mut self.name_required, overrides.name_required);
        replace_non_empty(&mut self.abn_invalid_length, overrides.abn_invalid_length);
        replace_non_empty(&mut self.abn_invalid_format, overrides.abn_invalid_format);
        replace_non_empty(&mut self.abn_invalid, overrides.abn_invalid);
    }
}

fn replace_non_empty(slot: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *slot = value;
    }
}

/// Partial rewording of the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageOverrides {
    pub guid_required: Option<String>,
    pub abn_required: Option<String>,
    pub acn_required: Option<String>,
    pub name_required: Option<String>,
    pub abn_invalid_length: Option<String>,
    pub abn_invalid_format: Option<String>,
    pub abn_invalid: Option<String>,
}

impl MessageOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: MessageKey, text: impl Into<String>) -> Self {
        let slot = match key {
            MessageKey::GuidRequired => &mut self.guid_required,
            MessageKey::AbnRequired => &mut self.abn_required,
            MessageKey::AcnRequired => &mut self.acn_required,
            MessageKey::NameRequired => &mut self.name_required,
            MessageKey::AbnInvalidLength => &mut self.abn_invalid_length,
            MessageKey::AbnInvalidFormat => &mut self.abn_invalid_format,
            MessageKey::AbnInvalid => &mut self.abn_invalid,
        };
        *slot = Some(text.into());
        self
    }
}
