use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to read settings: {0}")]
    Read(String),
    #[error("Failed to write settings: {0}")]
    Write(String),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed settings data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Settings data must be a JSON object")]
    NotAnObject,
    #[error("Settings data is not valid UTF-8")]
    NotUtf8(#[from] std::str::Utf8Error),
    #[error("Settings schema version {0} is not a version number")]
    InvalidVersion(String),
    #[error("Settings schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Translation engine failed: {0}")]
    Engine(String),
}
