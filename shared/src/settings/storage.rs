use crate::error::PersistenceError;

/// Persistence port for the serialized settings blob.
///
/// The browser build backs this with local storage; tests use [`MemoryStorage`].
pub trait SettingsStorage {
    /// `Ok(None)` means nothing has been persisted yet.
    fn read(&self) -> Result<Option<String>, PersistenceError>;
    /// Must leave the previous blob intact when it fails.
    fn write(&mut self, blob: &str) -> Result<(), PersistenceError>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStorage {
    blob: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            ..Self::default()
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Simulates a full quota: every write is rejected until cleared.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        if self.fail_reads {
            return Err(PersistenceError::Read("simulated read failure".into()));
        }
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Write("quota exceeded".into()));
        }
        self.blob = Some(blob.to_string());
        Ok(())
    }
}
