//! In-memory translation history.

use crate::catalog;
use crate::models::TranslationRecord;
use crate::session::CompletedTranslation;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Case-insensitive substring matched against source and target text.
    pub query: Option<String>,
    pub favorites_only: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistorySort {
    /// Newest first.
    #[default]
    Date,
    /// Model display name, ascending.
    Model,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryStore {
    records: Vec<TranslationRecord>,
}

impl HistoryStore {
    pub fn new(records: Vec<TranslationRecord>) -> Self {
        Self { records }
    }

    /// Store pre-filled with the sample records.
    pub fn with_samples() -> Self {
        Self::new(catalog::sample_history())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn favorite_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_favorite).count()
    }

    pub fn get(&self, id: &str) -> Option<&TranslationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn list(&self, filter: &HistoryFilter, sort: HistorySort) -> Vec<&TranslationRecord> {
        let needle = filter.query.as_deref().map(str::to_lowercase);
        let mut out: Vec<&TranslationRecord> = self
            .records
            .iter()
            .filter(|r| needle.as_deref().is_none_or(|n| r.matches_query(n)))
            .filter(|r| !filter.favorites_only || r.is_favorite)
            .collect();
        match sort {
            HistorySort::Date => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            HistorySort::Model => out.sort_by(|a, b| a.ai_model.cmp(&b.ai_model)),
        }
        out
    }

    /// Appends a record for a finished translation and returns its id.
    pub fn record(&mut self, done: &CompletedTranslation, created_at: DateTime<Utc>) -> String {
        let id = Uuid::now_v7().to_string();
        self.records.push(TranslationRecord {
            id: id.clone(),
            source_text: done.job.source_text.clone(),
            target_text: done.output.clone(),
            source_language: done.job.source_language,
            target_language: done.job.target_language,
            ai_model: done.job.model.model_name.clone(),
            created_at,
            is_favorite: false,
        });
        id
    }

    pub fn toggle_favorite(&mut self, id: &str) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.is_favorite = !record.is_favorite;
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.records.retain(|r| r.id != id);
    }
}
