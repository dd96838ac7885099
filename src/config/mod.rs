//! Configuration management for textbin-seal
//!
//! Handles:
//! - Deployment settings (KDF cost, defaults for new snippets)
//! - Locating and reading/writing the settings file

mod settings;
mod storage;

pub use settings::Settings;
pub use storage::{default_config_path, get_config_dir, load_settings, save_settings};
