use super::LanguageCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub id: String,
    pub source_text: String,
    pub target_text: String,
    pub source_language: LanguageCode,
    pub target_language: LanguageCode,
    /// Display name of the model that produced the translation.
    pub ai_model: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl TranslationRecord {
    pub fn matches_query(&self, needle_lowercase: &str) -> bool {
        self.source_text.to_lowercase().contains(needle_lowercase)
            || self.target_text.to_lowercase().contains(needle_lowercase)
    }
}
