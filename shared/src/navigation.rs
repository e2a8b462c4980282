//! Guards page transitions away from unsaved settings.

use crate::error::PersistenceError;
use crate::settings::{SettingsStorage, SettingsStore};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GuardState<D> {
    #[default]
    Idle,
    PendingConfirmation { destination: D },
}

/// How the user answered the unsaved-changes prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Discard,
    SaveAndGo,
    Cancel,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Attempt<D> {
    /// Navigate now.
    Proceed(D),
    /// Held until the user resolves the prompt.
    Held,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationGuard<D> {
    state: GuardState<D>,
}

impl<D> Default for NavigationGuard<D> {
    fn default() -> Self {
        Self {
            state: GuardState::Idle,
        }
    }
}

impl<D: Clone + std::fmt::Debug> NavigationGuard<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GuardState<D> {
        &self.state
    }

    pub fn pending(&self) -> Option<&D> {
        match &self.state {
            GuardState::PendingConfirmation { destination } => Some(destination),
            GuardState::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending().is_some()
    }

    /// Clean settings pass straight through. Dirty settings hold the
    /// destination; a later attempt replaces the held one.
    pub fn attempt(&mut self, destination: D, dirty: bool) -> Attempt<D> {
        if !dirty {
            return Attempt::Proceed(destination);
        }
        tracing::debug!("Holding navigation to {:?} on unsaved settings", destination);
        self.state = GuardState::PendingConfirmation { destination };
        Attempt::Held
    }

    pub fn attempt_from<S: SettingsStorage>(
        &mut self,
        destination: D,
        store: &SettingsStore<S>,
    ) -> Attempt<D> {
        self.attempt(destination, store.is_dirty())
    }

    /// Applies the user's answer. `Ok(Some(d))` means navigate to `d`.
    ///
    /// A failed save keeps the prompt open with the same destination so the
    /// user can retry or choose differently.
    pub fn resolve<S: SettingsStorage>(
        &mut self,
        resolution: Resolution,
        store: &mut SettingsStore<S>,
    ) -> Result<Option<D>, PersistenceError> {
        let GuardState::PendingConfirmation { destination } = &self.state else {
            return Ok(None);
        };
        let destination = destination.clone();
        match resolution {
            Resolution::Discard => store.discard(),
            Resolution::SaveAndGo => store.save()?,
            Resolution::Cancel => {
                self.state = GuardState::Idle;
                return Ok(None);
            }
        }
        tracing::debug!("Navigation to {:?} released by {:?}", destination, resolution);
        self.state = GuardState::Idle;
        Ok(Some(destination))
    }
}
