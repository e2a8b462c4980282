use crate::models::UserSettings;

/// Tracks whether the live settings have diverged from the last saved snapshot.
///
/// The flag is deliberately coarse: any update marks it, even one that leaves
/// the settings unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct DirtyTracker {
    dirty: bool,
    last_saved: UserSettings,
}

impl DirtyTracker {
    pub fn new(last_saved: UserSettings) -> Self {
        Self {
            dirty: false,
            last_saved,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn last_saved(&self) -> &UserSettings {
        &self.last_saved
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_saved(&mut self, saved: UserSettings) {
        self.last_saved = saved;
        self.dirty = false;
    }

    /// Clears the flag and hands back the snapshot to restore.
    pub fn discard(&mut self) -> UserSettings {
        self.dirty = false;
        self.last_saved.clone()
    }
}
