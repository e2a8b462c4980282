//! Blob codec and the shallow merge used by load, import and update.

use crate::error::ParseError;
use crate::models::{SettingsPatch, UserSettings};
use serde::Serialize;
use serde_json::Value;

/// Written next to the settings fields in every persisted or exported blob.
pub const SCHEMA_VERSION: u32 = 1;
const SCHEMA_VERSION_FIELD: &str = "schemaVersion";

#[derive(Serialize)]
struct Versioned<'a> {
    #[serde(rename = "schemaVersion")]
    schema_version: u32,
    #[serde(flatten)]
    settings: &'a UserSettings,
}

/// Overlays `patch` onto `base`, field by field.
///
/// Present fields replace the base field whole; absent fields keep the base
/// value. A patch that sets the default target language to auto-detect keeps
/// the base target instead.
pub fn merge(base: &UserSettings, patch: SettingsPatch) -> UserSettings {
    let mut merged = base.clone();
    if let Some(providers) = patch.providers {
        merged.providers = providers;
    }
    if let Some(default_model) = patch.default_model {
        merged.default_model = default_model;
    }
    if let Some(mut languages) = patch.default_languages {
        if languages.target.is_auto() {
            tracing::warn!(
                "Ignoring auto-detect as default target language, keeping {}",
                base.default_languages.target
            );
            languages.target = base.default_languages.target;
        }
        merged.default_languages = languages;
    }
    if let Some(theme) = patch.theme {
        merged.theme = theme;
    }
    if let Some(auto_save) = patch.auto_save {
        merged.auto_save = auto_save;
    }
    if let Some(notifications) = patch.notifications {
        merged.notifications = notifications;
    }
    merged
}

/// Parses a persisted or imported blob and merges it onto the defaults.
pub fn decode_blob(bytes: &[u8]) -> Result<UserSettings, ParseError> {
    let text = std::str::from_utf8(bytes)?;
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(ParseError::NotAnObject);
    }
    if let Some(raw) = value.get(SCHEMA_VERSION_FIELD) {
        let found = raw
            .as_u64()
            .ok_or_else(|| ParseError::InvalidVersion(raw.to_string()))?;
        let found = u32::try_from(found).unwrap_or(u32::MAX);
        if found > SCHEMA_VERSION {
            return Err(ParseError::UnsupportedVersion {
                found,
                supported: SCHEMA_VERSION,
            });
        }
    }
    let patch: SettingsPatch = serde_json::from_value(value)?;
    let mut settings = merge(&UserSettings::default(), patch);
    if let Some(key) = &settings.default_model {
        settings.default_model = Some(key.realign(&settings.providers));
    }
    Ok(settings)
}

/// Compact form written to storage.
pub fn encode_blob(settings: &UserSettings) -> Result<String, serde_json::Error> {
    serde_json::to_string(&versioned(settings))
}

/// Pretty-printed form offered as a download.
pub fn encode_blob_pretty(settings: &UserSettings) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&versioned(settings))
}

fn versioned(settings: &UserSettings) -> Versioned<'_> {
    Versioned {
        schema_version: SCHEMA_VERSION,
        settings,
    }
}
