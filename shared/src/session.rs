//! State behind the translate page.

use crate::error::TranslateError;
use crate::models::{LanguageCode, ModelKey, UserSettings};
use crate::settings::{AvailableModel, pick_model, resolve_available_models};
use std::time::Duration;

/// How long the browser build pretends to think.
pub const MOCK_DELAY: Duration = Duration::from_millis(1500);

/// A snapshot of everything needed to run one translation.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationJob {
    /// Identifies the job; results for any other ticket are ignored.
    pub ticket: u64,
    pub source_text: String,
    pub source_language: LanguageCode,
    pub target_language: LanguageCode,
    pub model: AvailableModel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompletedTranslation {
    pub job: TranslationJob,
    pub output: String,
}

#[allow(async_fn_in_trait)]
pub trait Translator {
    async fn translate(&self, job: &TranslationJob) -> Result<String, TranslateError>;
}

/// Placeholder output: the model's display name plus the untouched source.
pub fn mock_translation(job: &TranslationJob) -> String {
    format!(
        "[{} translation, {} to {}] {}",
        job.model.model_name, job.source_language, job.target_language, job.source_text
    )
}

/// Answers immediately with [`mock_translation`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MockTranslator;

impl Translator for MockTranslator {
    async fn translate(&self, job: &TranslationJob) -> Result<String, TranslateError> {
        Ok(mock_translation(job))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TranslationSession {
    source_text: String,
    target_text: String,
    source_language: LanguageCode,
    target_language: LanguageCode,
    models: Vec<AvailableModel>,
    selected_model: Option<ModelKey>,
    pending: Option<TranslationJob>,
    next_ticket: u64,
}

impl TranslationSession {
    /// Seeds languages and the model choice from `settings`.
    pub fn initialize(settings: &UserSettings) -> Self {
        let models = resolve_available_models(settings);
        let selected_model = pick_model(&models, settings.default_model.as_ref());
        Self {
            source_text: String::new(),
            target_text: String::new(),
            source_language: settings.default_languages.source,
            target_language: settings.default_languages.target,
            models,
            selected_model,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn source_language(&self) -> LanguageCode {
        self.source_language
    }

    pub fn target_language(&self) -> LanguageCode {
        self.target_language
    }

    pub fn models(&self) -> &[AvailableModel] {
        &self.models
    }

    pub fn selected_model(&self) -> Option<&AvailableModel> {
        let key = self.selected_model.as_ref()?;
        self.models.iter().find(|m| &m.key == key)
    }

    pub fn is_translating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_job(&self) -> Option<&TranslationJob> {
        self.pending.as_ref()
    }

    pub fn source_char_count(&self) -> usize {
        self.source_text.chars().count()
    }

    pub fn can_translate(&self) -> bool {
        !self.is_translating() && !self.source_text.trim().is_empty() && self.selected_model().is_some()
    }

    pub fn can_swap(&self) -> bool {
        !self.is_translating() && !self.source_language.is_auto()
    }

    pub fn set_source_text(&mut self, text: impl Into<String>) {
        self.source_text = text.into();
    }

    pub fn clear_source(&mut self) {
        self.source_text.clear();
    }

    pub fn set_source_language(&mut self, language: LanguageCode) {
        self.source_language = language;
    }

    /// Auto-detect is refused as a target.
    pub fn set_target_language(&mut self, language: LanguageCode) -> bool {
        if language.is_auto() {
            return false;
        }
        self.target_language = language;
        true
    }

    /// Only keys from the resolved model list are accepted.
    pub fn select_model(&mut self, key: &ModelKey) -> bool {
        if !self.models.iter().any(|m| &m.key == key) {
            return false;
        }
        self.selected_model = Some(key.clone());
        true
    }

    /// Re-resolves models after a settings change, keeping the current choice
    /// while it stays available.
    pub fn refresh_models(&mut self, settings: &UserSettings) {
        self.models = resolve_available_models(settings);
        let keep = self
            .selected_model
            .as_ref()
            .filter(|key| self.models.iter().any(|m| &m.key == *key))
            .cloned();
        self.selected_model =
            keep.or_else(|| pick_model(&self.models, settings.default_model.as_ref()));
    }

    /// Exchanges languages and texts. Does nothing while the source is
    /// auto-detect or a translation is in flight.
    pub fn swap_languages(&mut self) {
        if !self.can_swap() {
            return;
        }
        std::mem::swap(&mut self.source_language, &mut self.target_language);
        std::mem::swap(&mut self.source_text, &mut self.target_text);
    }

    /// Starts a translation if one can run, clearing the previous output.
    ///
    /// Returns `None` without touching any state while a translation is in
    /// flight, the source is blank, or no model is selected.
    pub fn begin_translation(&mut self) -> Option<TranslationJob> {
        if !self.can_translate() {
            return None;
        }
        let model = self.selected_model()?.clone();
        self.next_ticket += 1;
        let job = TranslationJob {
            ticket: self.next_ticket,
            source_text: self.source_text.clone(),
            source_language: self.source_language,
            target_language: self.target_language,
            model,
        };
        tracing::debug!("Translation {} started with {}", job.ticket, job.model.key);
        self.target_text.clear();
        self.pending = Some(job.clone());
        Some(job)
    }

    /// Settles the in-flight translation. A failure leaves the output empty
    /// and is handed back to the caller.
    pub fn finish_translation(
        &mut self,
        ticket: u64,
        result: Result<String, TranslateError>,
    ) -> Result<Option<CompletedTranslation>, TranslateError> {
        if self.pending.as_ref().map(|job| job.ticket) != Some(ticket) {
            tracing::warn!("Ignoring result for stale translation {}", ticket);
            return Ok(None);
        }
        let Some(job) = self.pending.take() else {
            return Ok(None);
        };
        match result {
            Ok(output) => {
                tracing::debug!("Translation {} finished", ticket);
                self.target_text = output.clone();
                Ok(Some(CompletedTranslation { job, output }))
            }
            Err(e) => {
                tracing::warn!("Translation {} failed: {}", ticket, e);
                self.target_text.clear();
                Err(e)
            }
        }
    }

    /// Runs one translation end to end on `engine`.
    pub async fn translate<T: Translator>(
        &mut self,
        engine: &T,
    ) -> Result<Option<CompletedTranslation>, TranslateError> {
        let Some(job) = self.begin_translation() else {
            return Ok(None);
        };
        let result = engine.translate(&job).await;
        self.finish_translation(job.ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    struct FailingTranslator;

    impl Translator for FailingTranslator {
        async fn translate(&self, _job: &TranslationJob) -> Result<String, TranslateError> {
            Err(TranslateError::Engine("offline".into()))
        }
    }

    fn keyed_settings() -> UserSettings {
        let mut settings = UserSettings::default();
        settings.provider_mut("openai").unwrap().api_key = "sk-test".into();
        settings.provider_mut("claude").unwrap().api_key = "sk-ant".into();
        settings
    }

    #[test]
    fn initialize_selects_default_model() {
        let session = TranslationSession::initialize(&keyed_settings());
        assert_eq!(session.selected_model().unwrap().key.to_string(), "openai:gpt-4o");
        assert_eq!(session.source_language(), LanguageCode::Ja);
        assert_eq!(session.target_language(), LanguageCode::En);
    }

    #[test]
    fn initialize_without_models_selects_none() {
        let session = TranslationSession::initialize(&UserSettings::default());
        assert!(session.selected_model().is_none());
        assert!(session.models().is_empty());
    }

    #[test]
    fn blank_source_does_not_start() {
        let mut session = TranslationSession::initialize(&keyed_settings());
        session.set_source_text("  \n\t");
        assert_eq!(session.begin_translation(), None);
        assert!(!session.is_translating());
    }

    #[test]
    fn second_begin_is_rejected_while_in_flight() {
        let mut session = TranslationSession::initialize(&keyed_settings());
        session.set_source_text("hello");
        let first = session.begin_translation().unwrap();
        assert!(session.is_translating());
        assert_eq!(session.target_text(), "");
        assert_eq!(session.begin_translation(), None);
        assert_eq!(session.pending_job().map(|j| j.ticket), Some(first.ticket));
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut session = TranslationSession::initialize(&keyed_settings());
        session.set_source_text("hello");
        let job = session.begin_translation().unwrap();
        assert_eq!(session.finish_translation(job.ticket + 7, Ok("x".into())), Ok(None));
        assert!(session.is_translating());
    }

    #[test]
    fn failure_resets_and_reports() {
        let mut session = TranslationSession::initialize(&keyed_settings());
        session.set_source_text("hello");
        let result = block_on(session.translate(&FailingTranslator));
        assert_eq!(result, Err(TranslateError::Engine("offline".into())));
        assert!(!session.is_translating());
        assert_eq!(session.target_text(), "");
    }

    #[test]
    fn mock_output_names_model_and_source() {
        let mut session = TranslationSession::initialize(&keyed_settings());
        session.set_source_text("hello");
        let done = block_on(session.translate(&MockTranslator)).unwrap().unwrap();
        assert!(session.target_text().contains("hello"));
        assert!(session.target_text().contains("GPT-4o"));
        assert_eq!(done.output, session.target_text());
        assert!(!session.is_translating());
    }

    #[test]
    fn select_model_rejects_unavailable_keys() {
        let mut session = TranslationSession::initialize(&keyed_settings());
        assert!(!session.select_model(&ModelKey::new("gemini", "gemini-1.5-pro")));
        assert!(session.select_model(&ModelKey::new("claude", "claude-3-haiku")));
        assert_eq!(session.selected_model().unwrap().model_name, "Claude 3 Haiku");
    }

    #[test]
    fn refresh_keeps_choice_or_falls_back() {
        let mut settings = keyed_settings();
        let mut session = TranslationSession::initialize(&settings);
        session.select_model(&ModelKey::new("claude", "claude-3-haiku"));

        session.refresh_models(&settings);
        assert_eq!(session.selected_model().unwrap().key.model_id, "claude-3-haiku");

        settings.provider_mut("claude").unwrap().enabled = false;
        session.refresh_models(&settings);
        assert_eq!(session.selected_model().unwrap().key.to_string(), "openai:gpt-4o");
    }

    #[test]
    fn target_cannot_become_auto() {
        let mut session = TranslationSession::initialize(&keyed_settings());
        assert!(!session.set_target_language(LanguageCode::Auto));
        assert_eq!(session.target_language(), LanguageCode::En);
    }

    #[test]
    fn swap_is_blocked_for_auto_source() {
        let mut session = TranslationSession::initialize(&keyed_settings());
        session.set_source_language(LanguageCode::Auto);
        session.set_source_text("bonjour");
        let before = session.clone();
        session.swap_languages();
        assert_eq!(session, before);
    }

    #[test]
    fn swap_is_blocked_while_translating() {
        let mut session = TranslationSession::initialize(&keyed_settings());
        session.set_source_text("hello");
        let job = session.begin_translation().unwrap();
        assert!(!session.can_swap());
        session.swap_languages();
        assert_eq!(session.source_text(), "hello");
        assert_eq!(session.source_language(), LanguageCode::Ja);

        session.finish_translation(job.ticket, Ok("hi".into())).unwrap();
        assert_eq!(session.source_text(), "hello");
        assert_eq!(session.target_text(), "hi");
        assert!(session.can_swap());
    }

    #[test]
    fn char_count_uses_scalar_values() {
        let mut session = TranslationSession::initialize(&keyed_settings());
        session.set_source_text("こんにちは");
        assert_eq!(session.source_char_count(), 5);
    }
}
