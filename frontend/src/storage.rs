use shared::PersistenceError;
use shared::settings::SettingsStorage;
use std::fmt::Debug;

const STORAGE_KEY: &str = "ringua-settings";

/// Settings persistence backed by the browser's local storage.
///
/// Disabled or blocked storage surfaces as [`PersistenceError::Unavailable`]
/// on every call, so the app still starts on the defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalStorageBackend {
    key: &'static str,
}

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self { key: STORAGE_KEY }
    }
}

/// Collapses the `window.localStorage` lookup into a single error.
fn available<T, E: Debug>(lookup: Option<Result<Option<T>, E>>) -> Result<T, PersistenceError> {
    match lookup {
        None => Err(PersistenceError::Unavailable("no window".to_string())),
        Some(Err(e)) => Err(PersistenceError::Unavailable(format!("{:?}", e))),
        Some(Ok(None)) => Err(PersistenceError::Unavailable(
            "local storage is disabled".to_string(),
        )),
        Some(Ok(Some(storage))) => Ok(storage),
    }
}

fn local_storage() -> Result<web_sys::Storage, PersistenceError> {
    available(web_sys::window().map(|w| w.local_storage()))
}

impl SettingsStorage for LocalStorageBackend {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        local_storage()?
            .get_item(self.key)
            .map_err(|e| PersistenceError::Read(format!("{:?}", e)))
    }

    fn write(&mut self, blob: &str) -> Result<(), PersistenceError> {
        local_storage()?
            .set_item(self.key, blob)
            .map_err(|e| PersistenceError::Write(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_window_is_unavailable() {
        let lookup: Option<Result<Option<u8>, &str>> = None;
        assert!(matches!(available(lookup), Err(PersistenceError::Unavailable(_))));
    }

    #[test]
    fn blocked_storage_is_unavailable() {
        let denied: Option<Result<Option<u8>, &str>> = Some(Err("SecurityError"));
        assert_eq!(
            available(denied),
            Err(PersistenceError::Unavailable("\"SecurityError\"".to_string()))
        );
        let disabled: Option<Result<Option<u8>, &str>> = Some(Ok(None));
        assert!(matches!(available(disabled), Err(PersistenceError::Unavailable(_))));
    }

    #[test]
    fn present_storage_is_returned() {
        assert_eq!(available::<u8, &str>(Some(Ok(Some(7)))), Ok(7));
    }
}
