//! Scoped edits expressed as patches. Each returns `None` when the named
//! provider or model does not exist, which callers treat as a no-op.

use crate::models::{ModelKey, ProviderConfig, SettingsPatch, UserSettings};

pub fn provider_api_key(settings: &UserSettings, provider_id: &str, key: &str) -> Option<SettingsPatch> {
    edit_provider(settings, provider_id, |p| p.api_key = key.to_string())
}

pub fn provider_enabled(settings: &UserSettings, provider_id: &str, enabled: bool) -> Option<SettingsPatch> {
    edit_provider(settings, provider_id, |p| p.enabled = enabled)
}

/// An empty endpoint clears the override.
pub fn provider_endpoint(settings: &UserSettings, provider_id: &str, endpoint: &str) -> Option<SettingsPatch> {
    let endpoint = endpoint.trim();
    edit_provider(settings, provider_id, |p| {
        p.endpoint = (!endpoint.is_empty()).then(|| endpoint.to_string());
    })
}

pub fn model_enabled(
    settings: &UserSettings,
    provider_id: &str,
    model_id: &str,
    enabled: bool,
) -> Option<SettingsPatch> {
    settings.provider(provider_id)?.model(model_id)?;
    edit_provider(settings, provider_id, |p| {
        if let Some(model) = p.model_mut(model_id) {
            model.enabled = enabled;
        }
    })
}

pub fn default_model(settings: &UserSettings, provider_id: &str, model_id: &str) -> Option<SettingsPatch> {
    settings.provider(provider_id)?.model(model_id)?;
    Some(SettingsPatch::default_model(Some(ModelKey::new(
        provider_id,
        model_id,
    ))))
}

fn edit_provider(
    settings: &UserSettings,
    provider_id: &str,
    edit: impl FnOnce(&mut ProviderConfig),
) -> Option<SettingsPatch> {
    let mut providers = settings.providers.clone();
    let provider = providers.iter_mut().find(|p| p.id == provider_id)?;
    edit(provider);
    Some(SettingsPatch::providers(providers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::merge::merge;

    #[test]
    fn unknown_ids_yield_no_patch() {
        let settings = UserSettings::default();
        assert!(provider_api_key(&settings, "nope", "k").is_none());
        assert!(model_enabled(&settings, "openai", "nope", false).is_none());
        assert!(default_model(&settings, "nope", "gpt-4o").is_none());
    }

    #[test]
    fn edits_touch_only_the_named_provider() {
        let settings = UserSettings::default();
        let patch = provider_api_key(&settings, "claude", "sk-ant").unwrap();
        let next = merge(&settings, patch);
        assert_eq!(next.provider("claude").unwrap().api_key, "sk-ant");
        assert_eq!(next.provider("openai").unwrap().api_key, "");
    }

    #[test]
    fn blank_endpoint_clears_override() {
        let settings = UserSettings::default();
        let set = merge(
            &settings,
            provider_endpoint(&settings, "openai", " https://proxy.local/v1 ").unwrap(),
        );
        assert_eq!(
            set.provider("openai").unwrap().endpoint.as_deref(),
            Some("https://proxy.local/v1")
        );
        let cleared = merge(&set, provider_endpoint(&set, "openai", "").unwrap());
        assert_eq!(cleared.provider("openai").unwrap().endpoint, None);
    }
}
