use shared::TranslateError;
use shared::session::{MOCK_DELAY, TranslationJob, Translator, mock_translation};
use std::time::Duration;

/// Mock engine that waits before answering, standing in for a real provider call.
#[derive(Clone, Copy, Debug)]
pub struct DelayedMockTranslator {
    delay: Duration,
}

impl Default for DelayedMockTranslator {
    fn default() -> Self {
        Self { delay: MOCK_DELAY }
    }
}

impl Translator for DelayedMockTranslator {
    async fn translate(&self, job: &TranslationJob) -> Result<String, TranslateError> {
        yew::platform::time::sleep(self.delay).await;
        Ok(mock_translation(job))
    }
}
