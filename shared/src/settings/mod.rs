//! The settings store: live configuration, persistence and dirty tracking.

pub mod availability;
pub mod dirty;
pub mod edits;
pub mod merge;
pub mod storage;

pub use availability::{AvailableModel, pick_model, resolve_available_models};
pub use dirty::DirtyTracker;
pub use merge::{SCHEMA_VERSION, decode_blob, encode_blob, encode_blob_pretty};
pub use storage::{MemoryStorage, SettingsStorage};

use crate::error::{PersistenceError, SettingsError};
use crate::models::{SettingsPatch, UserSettings};

/// Base name of the exported settings file.
pub const EXPORT_FILE_NAME: &str = "ringua-settings.json";

/// Reads the persisted settings, falling back to the defaults when nothing is
/// stored or the stored blob cannot be used.
pub fn load<S: SettingsStorage>(storage: &S) -> UserSettings {
    match storage.read() {
        Ok(Some(blob)) => decode_blob(blob.as_bytes()).unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            UserSettings::default()
        }),
        Ok(None) => UserSettings::default(),
        Err(e) => {
            tracing::warn!("Settings storage unreadable, using defaults: {}", e);
            UserSettings::default()
        }
    }
}

/// Parses an exported blob exactly the way [`load`] parses storage, but
/// reports failures instead of falling back.
pub fn import_blob(bytes: &[u8]) -> Result<UserSettings, SettingsError> {
    Ok(decode_blob(bytes)?)
}

pub fn export_blob(settings: &UserSettings) -> Result<Vec<u8>, SettingsError> {
    encode_blob_pretty(settings)
        .map(String::into_bytes)
        .map_err(|e| SettingsError::Parse(e.into()))
}

#[derive(Clone, Debug, PartialEq)]
pub struct SettingsStore<S> {
    storage: S,
    current: UserSettings,
    tracker: DirtyTracker,
}

impl<S: SettingsStorage> SettingsStore<S> {
    pub fn open(storage: S) -> Self {
        let loaded = load(&storage);
        Self {
            storage,
            current: loaded.clone(),
            tracker: DirtyTracker::new(loaded),
        }
    }

    pub fn current(&self) -> &UserSettings {
        &self.current
    }

    pub fn last_saved(&self) -> &UserSettings {
        self.tracker.last_saved()
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn available_models(&self) -> Vec<AvailableModel> {
        resolve_available_models(&self.current)
    }

    /// Shallow-merges `patch` into the live settings and marks them dirty.
    pub fn update(&mut self, patch: SettingsPatch) -> &UserSettings {
        self.current = merge::merge(&self.current, patch);
        self.tracker.mark_dirty();
        &self.current
    }

    /// Persists the live settings. On failure nothing changes: the previous
    /// blob stays in storage and the settings stay dirty.
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        let blob = encode_blob(&self.current)
            .map_err(|e| PersistenceError::Write(e.to_string()))?;
        if let Err(e) = self.storage.write(&blob) {
            tracing::error!("Failed to save settings: {}", e);
            return Err(e);
        }
        self.tracker.mark_saved(self.current.clone());
        tracing::debug!("Settings saved");
        Ok(())
    }

    /// Reverts the live settings to the last saved snapshot.
    pub fn discard(&mut self) {
        self.current = self.tracker.discard();
    }

    pub fn set_provider_api_key(&mut self, provider_id: &str, key: &str) -> &UserSettings {
        let patch = edits::provider_api_key(&self.current, provider_id, key);
        self.apply_scoped(patch)
    }

    pub fn set_provider_enabled(&mut self, provider_id: &str, enabled: bool) -> &UserSettings {
        let patch = edits::provider_enabled(&self.current, provider_id, enabled);
        self.apply_scoped(patch)
    }

    pub fn set_provider_endpoint(&mut self, provider_id: &str, endpoint: &str) -> &UserSettings {
        let patch = edits::provider_endpoint(&self.current, provider_id, endpoint);
        self.apply_scoped(patch)
    }

    pub fn set_model_enabled(
        &mut self,
        provider_id: &str,
        model_id: &str,
        enabled: bool,
    ) -> &UserSettings {
        let patch = edits::model_enabled(&self.current, provider_id, model_id, enabled);
        self.apply_scoped(patch)
    }

    pub fn set_default_model(&mut self, provider_id: &str, model_id: &str) -> &UserSettings {
        let patch = edits::default_model(&self.current, provider_id, model_id);
        self.apply_scoped(patch)
    }

    pub fn export_blob(&self) -> Result<Vec<u8>, SettingsError> {
        export_blob(&self.current)
    }

    /// Replaces the live settings with an imported blob. The import is not
    /// persisted until [`save`](Self::save); malformed input changes nothing.
    pub fn import_blob(&mut self, bytes: &[u8]) -> Result<&UserSettings, SettingsError> {
        let imported = import_blob(bytes)?;
        self.current = imported;
        self.tracker.mark_dirty();
        Ok(&self.current)
    }

    fn apply_scoped(&mut self, patch: Option<SettingsPatch>) -> &UserSettings {
        match patch {
            Some(patch) => self.update(patch),
            None => &self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModelKey, Theme};

    fn store() -> SettingsStore<MemoryStorage> {
        SettingsStore::open(MemoryStorage::new())
    }

    #[test]
    fn opens_with_defaults_and_clean() {
        let store = store();
        assert_eq!(store.current(), &UserSettings::default());
        assert!(!store.is_dirty());
    }

    #[test]
    fn corrupt_storage_falls_back_to_defaults() {
        let store = SettingsStore::open(MemoryStorage::with_blob("not json"));
        assert_eq!(store.current(), &UserSettings::default());
    }

    #[test]
    fn unreadable_storage_falls_back_to_defaults() {
        let mut storage = MemoryStorage::with_blob(r#"{"theme":"dark"}"#);
        storage.set_fail_reads(true);
        assert_eq!(load(&storage), UserSettings::default());
    }

    #[test]
    fn noop_update_still_marks_dirty() {
        let mut store = store();
        store.update(SettingsPatch::default());
        assert!(store.is_dirty());
        assert_eq!(store.current(), &UserSettings::default());
    }

    #[test]
    fn unknown_scoped_edit_changes_nothing() {
        let mut store = store();
        store.set_model_enabled("openai", "gpt-5", false);
        store.set_provider_api_key("mistral", "k");
        assert!(!store.is_dirty());
        assert_eq!(store.current(), &UserSettings::default());
    }

    #[test]
    fn save_persists_and_reopens() {
        let mut store = store();
        store.update(SettingsPatch::theme(Theme::Dark));
        store.set_provider_api_key("openai", "sk-test");
        store.save().unwrap();
        assert!(!store.is_dirty());
        assert_eq!(store.last_saved(), store.current());

        let reopened = SettingsStore::open(store.storage().clone());
        assert_eq!(reopened.current(), store.current());
    }

    #[test]
    fn failed_save_keeps_state_and_previous_blob() {
        let mut store = store();
        store.update(SettingsPatch::theme(Theme::Light));
        store.save().unwrap();
        let previous = store.storage().blob().map(str::to_owned);

        store.update(SettingsPatch::theme(Theme::Dark));
        store.storage_mut().set_fail_writes(true);
        assert!(matches!(store.save(), Err(PersistenceError::Write(_))));
        assert!(store.is_dirty());
        assert_eq!(store.current().theme, Theme::Dark);
        assert_eq!(store.last_saved().theme, Theme::Light);
        assert_eq!(store.storage().blob().map(str::to_owned), previous);

        store.storage_mut().set_fail_writes(false);
        store.save().unwrap();
        assert!(!store.is_dirty());
    }

    #[test]
    fn discard_restores_snapshot() {
        let mut store = store();
        store.set_default_model("gemini", "gemini-1.5-pro");
        assert_eq!(
            store.current().default_model,
            Some(ModelKey::new("gemini", "gemini-1.5-pro"))
        );
        store.discard();
        assert!(!store.is_dirty());
        assert_eq!(store.current(), &UserSettings::default());
    }

    #[test]
    fn bad_import_leaves_settings_untouched() {
        let mut store = store();
        store.update(SettingsPatch::theme(Theme::Dark));
        let before = store.current().clone();
        assert!(store.import_blob(b"{\"theme\":").is_err());
        assert_eq!(store.current(), &before);
    }

    #[test]
    fn import_replaces_live_settings_and_marks_dirty() {
        let mut source = store();
        source.update(SettingsPatch::notifications(false));
        let blob = source.export_blob().unwrap();

        let mut target = store();
        target.import_blob(&blob).unwrap();
        assert!(target.is_dirty());
        assert!(!target.current().notifications);
        assert!(target.last_saved().notifications);
    }

    #[derive(Debug)]
    struct BlockedStorage;

    impl SettingsStorage for BlockedStorage {
        fn read(&self) -> Result<Option<String>, PersistenceError> {
            Err(PersistenceError::Unavailable("blocked".into()))
        }

        fn write(&mut self, _blob: &str) -> Result<(), PersistenceError> {
            Err(PersistenceError::Unavailable("blocked".into()))
        }
    }

    #[test]
    fn unavailable_storage_opens_on_defaults_and_reports_saves() {
        let mut store = SettingsStore::open(BlockedStorage);
        assert_eq!(store.current(), &UserSettings::default());

        store.update(SettingsPatch::theme(Theme::Dark));
        assert_eq!(
            store.save(),
            Err(PersistenceError::Unavailable("blocked".into()))
        );
        assert!(store.is_dirty());
        assert_eq!(store.current().theme, Theme::Dark);
    }
}
