//! Scaffold settings
//!
//! Settings are loaded once at startup and passed down explicitly; no
//! component reads ambient process state.

pub mod settings;

pub use settings::{Settings, SETTINGS_FILE};
