use crate::models::{ModelKey, UserSettings};

/// One selectable entry in the model picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailableModel {
    pub key: ModelKey,
    pub model_name: String,
    pub provider_id: String,
    pub provider_name: String,
}

/// Models the user can actually translate with, in provider then model order.
///
/// A provider contributes only when it is enabled and has a non-empty key;
/// within it only enabled models are listed.
pub fn resolve_available_models(settings: &UserSettings) -> Vec<AvailableModel> {
    settings
        .providers
        .iter()
        .filter(|provider| provider.is_usable())
        .flat_map(|provider| {
            provider
                .models
                .iter()
                .filter(|model| model.enabled)
                .map(move |model| AvailableModel {
                    key: ModelKey::new(&provider.id, &model.id),
                    model_name: model.name.clone(),
                    provider_id: provider.id.clone(),
                    provider_name: provider.name.clone(),
                })
        })
        .collect()
}

/// The preferred key if it is available, else the first available, else none.
pub fn pick_model(available: &[AvailableModel], preferred: Option<&ModelKey>) -> Option<ModelKey> {
    if let Some(preferred) = preferred {
        if available.iter().any(|m| &m.key == preferred) {
            return Some(preferred.clone());
        }
        tracing::warn!("Model {} is not available, falling back", preferred);
    }
    available.first().map(|m| m.key.clone())
}
