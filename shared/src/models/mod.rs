pub mod history;
pub mod language;
pub mod provider;
pub mod settings;

pub use history::*;
pub use language::*;
pub use provider::*;
pub use settings::*;
