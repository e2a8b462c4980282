use super::{LanguageCode, ModelKey, ProviderConfig};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultLanguages {
    pub source: LanguageCode,
    /// Never [`LanguageCode::Auto`].
    pub target: LanguageCode,
}

impl Default for DefaultLanguages {
    fn default() -> Self {
        Self {
            source: LanguageCode::Ja,
            target: LanguageCode::En,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub providers: Vec<ProviderConfig>,
    #[serde(with = "model_key_string")]
    pub default_model: Option<ModelKey>,
    pub default_languages: DefaultLanguages,
    pub theme: Theme,
    pub auto_save: bool,
    pub notifications: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            providers: crate::catalog::default_providers(),
            default_model: ModelKey::parse(crate::catalog::DEFAULT_MODEL),
            default_languages: DefaultLanguages::default(),
            theme: Theme::System,
            auto_save: true,
            notifications: true,
        }
    }
}

impl UserSettings {
    pub fn provider(&self, provider_id: &str) -> Option<&ProviderConfig> {
        self.providers.iter().find(|p| p.id == provider_id)
    }

    pub fn provider_mut(&mut self, provider_id: &str) -> Option<&mut ProviderConfig> {
        self.providers.iter_mut().find(|p| p.id == provider_id)
    }
}

/// A shallow partial of [`UserSettings`].
///
/// Each present field replaces the whole corresponding field of the base.
/// `providers` in particular is swapped wholesale, never merged per provider.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default)]
    pub providers: Option<Vec<ProviderConfig>>,
    #[serde(default, deserialize_with = "model_key_string::deserialize_present")]
    pub default_model: Option<Option<ModelKey>>,
    #[serde(default)]
    pub default_languages: Option<DefaultLanguages>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub auto_save: Option<bool>,
    #[serde(default)]
    pub notifications: Option<bool>,
}

impl SettingsPatch {
    pub fn providers(providers: Vec<ProviderConfig>) -> Self {
        Self {
            providers: Some(providers),
            ..Self::default()
        }
    }

    pub fn default_model(key: Option<ModelKey>) -> Self {
        Self {
            default_model: Some(key),
            ..Self::default()
        }
    }

    pub fn default_languages(languages: DefaultLanguages) -> Self {
        Self {
            default_languages: Some(languages),
            ..Self::default()
        }
    }

    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Self::default()
        }
    }

    pub fn auto_save(enabled: bool) -> Self {
        Self {
            auto_save: Some(enabled),
            ..Self::default()
        }
    }

    pub fn notifications(enabled: bool) -> Self {
        Self {
            notifications: Some(enabled),
            ..Self::default()
        }
    }
}

/// `Option<ModelKey>` as the legacy colon-joined string. `None` is `""`.
/// Null, non-strings and strings that do not split into two non-empty halves
/// read back as `None`.
mod model_key_string {
    use super::*;

    pub fn serialize<S: Serializer>(key: &Option<ModelKey>, s: S) -> Result<S::Ok, S::Error> {
        match key {
            Some(key) => s.collect_str(key),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<ModelKey>, D::Error> {
        let key = match serde_json::Value::deserialize(d)? {
            serde_json::Value::String(raw) => {
                let key = ModelKey::parse(&raw);
                if key.is_none() && !raw.is_empty() {
                    tracing::warn!("Ignoring malformed default model key {:?}", raw);
                }
                key
            }
            serde_json::Value::Null => None,
            other => {
                tracing::warn!("Ignoring non-string default model {}", other);
                None
            }
        };
        Ok(key)
    }

    pub fn deserialize_present<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Option<ModelKey>>, D::Error> {
        deserialize(d).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_serializes_as_joined_string() {
        let settings = UserSettings::default();
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["defaultModel"], "openai:gpt-4o");
        assert_eq!(json["defaultLanguages"]["target"], "en");
        assert_eq!(json["theme"], "system");
        assert_eq!(json["autoSave"], true);
    }

    #[test]
    fn missing_default_model_round_trips_through_empty_string() {
        let settings = UserSettings {
            default_model: None,
            ..UserSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"defaultModel\":\"\""));
        let back: UserSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn malformed_default_model_is_not_a_parse_error() {
        let patch: SettingsPatch = serde_json::from_str(r#"{"defaultModel":"gpt4"}"#).unwrap();
        assert_eq!(patch.default_model, Some(None));
    }

    #[test]
    fn null_or_non_string_default_model_reads_as_none() {
        let patch: SettingsPatch = serde_json::from_str(r#"{"defaultModel":null}"#).unwrap();
        assert_eq!(patch.default_model, Some(None));
        let patch: SettingsPatch =
            serde_json::from_str(r#"{"defaultModel":{"provider":"openai"}}"#).unwrap();
        assert_eq!(patch.default_model, Some(None));
    }

    #[test]
    fn absent_patch_fields_stay_none() {
        let patch: SettingsPatch = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(patch, SettingsPatch::theme(Theme::Dark));
    }
}
