use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelParameters {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: 4096,
            top_p: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    /// Legacy per-provider default flag. `UserSettings::default_model` wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ModelParameters>,
}

impl ModelConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
            is_default: None,
            parameters: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub id: String,
    pub name: String,
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub enabled: bool,
    pub models: Vec<ModelConfig>,
}

impl ProviderConfig {
    pub fn model(&self, model_id: &str) -> Option<&ModelConfig> {
        self.models.iter().find(|m| m.id == model_id)
    }

    pub fn model_mut(&mut self, model_id: &str) -> Option<&mut ModelConfig> {
        self.models.iter_mut().find(|m| m.id == model_id)
    }

    /// A provider is selectable only when switched on and holding a credential.
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}

/// Identifies a model globally. Model ids are only unique within their provider.
///
/// On the wire this is the colon-joined `"<providerId>:<modelId>"` form.
/// [`parse`](Self::parse) splits on the first colon, and
/// [`realign`](Self::realign) moves the split when the provider id itself
/// contains one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelKey {
    pub provider_id: String,
    pub model_id: String,
}

impl ModelKey {
    pub fn new(provider_id: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            model_id: model_id.into(),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let (provider_id, model_id) = raw.split_once(':')?;
        if provider_id.is_empty() || model_id.is_empty() {
            return None;
        }
        Some(Self::new(provider_id, model_id))
    }

    /// Re-reads the joined form against `providers`, so that a key decoded
    /// from `"azure:east:gpt"` lands on provider `azure:east` when only that
    /// reading names an existing provider and model. Keys that already
    /// resolve, and keys no reading resolves, are returned unchanged.
    pub fn realign(&self, providers: &[ProviderConfig]) -> ModelKey {
        let resolves = |key: &ModelKey| {
            providers
                .iter()
                .any(|p| p.id == key.provider_id && p.model(&key.model_id).is_some())
        };
        if resolves(self) {
            return self.clone();
        }
        let joined = self.to_string();
        joined
            .match_indices(':')
            .map(|(at, _)| (&joined[..at], &joined[at + 1..]))
            .filter(|(provider_id, model_id)| !provider_id.is_empty() && !model_id.is_empty())
            .map(|(provider_id, model_id)| Self::new(provider_id, model_id))
            .find(|key| resolves(key))
            .unwrap_or_else(|| self.clone())
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider_id, self.model_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_key_splits_on_first_colon() {
        let key = ModelKey::parse("openrouter:tngtech/r1t2:free").unwrap();
        assert_eq!(key.provider_id, "openrouter");
        assert_eq!(key.model_id, "tngtech/r1t2:free");
        assert_eq!(key.to_string(), "openrouter:tngtech/r1t2:free");
    }

    #[test]
    fn model_key_rejects_partial_strings() {
        assert_eq!(ModelKey::parse(""), None);
        assert_eq!(ModelKey::parse("openai"), None);
        assert_eq!(ModelKey::parse(":gpt-4o"), None);
        assert_eq!(ModelKey::parse("openai:"), None);
    }

    fn provider(id: &str, model_ids: &[&str]) -> ProviderConfig {
        ProviderConfig {
            id: id.into(),
            name: id.into(),
            api_key: String::new(),
            endpoint: None,
            enabled: true,
            models: model_ids.iter().map(|m| ModelConfig::new(*m, *m)).collect(),
        }
    }

    #[test]
    fn realign_moves_split_into_provider_id() {
        let providers = [provider("azure:east", &["gpt"])];
        let parsed = ModelKey::parse("azure:east:gpt").unwrap();
        assert_eq!(parsed.provider_id, "azure");
        assert_eq!(parsed.realign(&providers), ModelKey::new("azure:east", "gpt"));
    }

    #[test]
    fn realign_keeps_resolving_and_dangling_keys() {
        let providers = [
            provider("openrouter", &["tngtech/r1t2:free"]),
            provider("azure:east", &["gpt"]),
        ];
        let resolving = ModelKey::parse("openrouter:tngtech/r1t2:free").unwrap();
        assert_eq!(resolving.realign(&providers), resolving);

        let dangling = ModelKey::parse("azure:west:gpt").unwrap();
        assert_eq!(dangling.realign(&providers), dangling);
    }

    #[test]
    fn optional_model_fields_are_omitted() {
        let json = serde_json::to_value(ModelConfig::new("gpt-4o", "GPT-4o")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "gpt-4o", "name": "GPT-4o", "enabled": true })
        );
    }

    #[test]
    fn usable_requires_enabled_and_key() {
        let mut provider = ProviderConfig {
            id: "openai".into(),
            name: "OpenAI".into(),
            api_key: String::new(),
            endpoint: None,
            enabled: true,
            models: vec![],
        };
        assert!(!provider.is_usable());
        provider.api_key = "sk-test".into();
        assert!(provider.is_usable());
        provider.enabled = false;
        assert!(!provider.is_usable());
    }
}
