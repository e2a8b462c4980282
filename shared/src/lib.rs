//! Core state for the Ringua translation front-end.
//!
//! Everything in this crate is target independent: the browser adapters
//! (local storage, clipboard, timers) live in the `frontend` crate and plug
//! in through [`settings::SettingsStorage`] and [`session::Translator`].

pub mod catalog;
pub mod error;
pub mod history;
pub mod models;
pub mod navigation;
pub mod session;
pub mod settings;

pub use error::{ParseError, PersistenceError, SettingsError, TranslateError};
