//! Static reference data: supported languages and the seed provider set.

use crate::models::{LanguageCode, ModelConfig, ProviderConfig, TranslationRecord};
use chrono::{DateTime, Utc};

pub const DEFAULT_MODEL: &str = "openai:gpt-4o";

/// Native display name shown in language selectors.
pub fn language_name(code: LanguageCode) -> &'static str {
    match code {
        LanguageCode::Auto => "自動検出",
        LanguageCode::Ja => "日本語",
        LanguageCode::En => "English",
        LanguageCode::Zh => "中文",
        LanguageCode::Ko => "한국어",
        LanguageCode::Es => "Español",
        LanguageCode::Fr => "Français",
        LanguageCode::De => "Deutsch",
    }
}

pub fn default_providers() -> Vec<ProviderConfig> {
    vec![
        provider(
            "openai",
            "OpenAI",
            vec![
                ModelConfig::new("gpt-4o", "GPT-4o"),
                ModelConfig::new("gpt-4o-mini", "GPT-4o mini"),
            ],
        ),
        provider(
            "claude",
            "Anthropic Claude",
            vec![
                ModelConfig::new("claude-3-5-sonnet", "Claude 3.5 Sonnet"),
                ModelConfig::new("claude-3-haiku", "Claude 3 Haiku"),
            ],
        ),
        provider(
            "gemini",
            "Google Gemini",
            vec![
                ModelConfig::new("gemini-1.5-pro", "Gemini 1.5 Pro"),
                ModelConfig::new("gemini-1.5-flash", "Gemini 1.5 Flash"),
            ],
        ),
    ]
}

fn provider(id: &str, name: &str, models: Vec<ModelConfig>) -> ProviderConfig {
    ProviderConfig {
        id: id.to_string(),
        name: name.to_string(),
        api_key: String::new(),
        endpoint: None,
        enabled: true,
        models,
    }
}

/// Records shown on the history page before any translation has run.
pub fn sample_history() -> Vec<TranslationRecord> {
    vec![
        sample(
            "1",
            "こんにちは、世界！",
            "Hello, world!",
            (LanguageCode::Ja, LanguageCode::En),
            "OpenAI GPT-4",
            "2025-06-20T10:30:00Z",
            true,
        ),
        sample(
            "2",
            "人工知能による翻訳技術は急速に発展しています。",
            "Translation technology powered by artificial intelligence is rapidly advancing.",
            (LanguageCode::Ja, LanguageCode::En),
            "Claude 3",
            "2025-06-20T09:15:00Z",
            false,
        ),
        sample(
            "3",
            "Thank you for your help.",
            "ご協力ありがとうございます。",
            (LanguageCode::En, LanguageCode::Ja),
            "Gemini Pro",
            "2025-06-19T16:45:00Z",
            false,
        ),
    ]
}

fn sample(
    id: &str,
    source_text: &str,
    target_text: &str,
    (source_language, target_language): (LanguageCode, LanguageCode),
    ai_model: &str,
    created_at: &str,
    is_favorite: bool,
) -> TranslationRecord {
    TranslationRecord {
        id: id.to_string(),
        source_text: source_text.to_string(),
        target_text: target_text.to_string(),
        source_language,
        target_language,
        ai_model: ai_model.to_string(),
        created_at: DateTime::parse_from_rfc3339(created_at)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_default(),
        is_favorite,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_provider_ids_are_unique() {
        let providers = default_providers();
        let ids: HashSet<_> = providers.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), providers.len());
    }

    #[test]
    fn default_model_exists_in_seed() {
        let (provider_id, model_id) = DEFAULT_MODEL.split_once(':').unwrap();
        let providers = default_providers();
        let provider = providers.iter().find(|p| p.id == provider_id).unwrap();
        assert!(provider.model(model_id).is_some_and(|m| m.enabled));
    }

    #[test]
    fn every_language_has_a_name() {
        for lang in LanguageCode::ALL {
            assert!(!language_name(lang).is_empty());
        }
    }

    #[test]
    fn sample_dates_parse() {
        let history = sample_history();
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|r| r.created_at.timestamp() > 0));
    }
}
