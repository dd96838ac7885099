//! Inspect and create the settings file

use std::path::Path;

use colored::Colorize;
use textbin_seal::config::{self, Settings};
use textbin_seal::Result;

use super::confirm;

pub fn show(path: &Path, settings: &Settings) -> Result<()> {
    let state = if path.exists() { "" } else { " (not present, defaults)" };
    println!("{} {}{}", "Config file:".cyan().bold(), path.display(), state.dimmed());
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        eprintln!(
            "{} {} already exists.",
            "Warning:".yellow().bold(),
            path.display()
        );
        eprintln!("Changing kdf_iterations makes texts sealed with the old value unreadable.");

        if !confirm("Overwrite with defaults?") {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    config::save_settings(&Settings::default(), path)?;
    eprintln!(
        "{} wrote default settings to {}",
        "Success:".green().bold(),
        path.display().to_string().cyan()
    );
    Ok(())
}
