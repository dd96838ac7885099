//! Decrypt a stored TextBin text

use std::path::PathBuf;

use colored::Colorize;
use secrecy::{ExposeSecret, SecretString};
use textbin_seal::config::Settings;
use textbin_seal::crypto::KdfParams;
use textbin_seal::snippet::{self, SealedText};
use textbin_seal::{Result, SealError};

use super::{confirm, prompt_passphrase, read_input, step, step_done, write_output, StoredText};

pub fn run(input: Option<PathBuf>, output: Option<PathBuf>, settings: &Settings) -> Result<()> {
    let stored = StoredText::parse(&read_input(input.as_deref())?)?;

    if stored.encryption_salt().is_none() {
        eprintln!("{} text is not encrypted", "Note:".yellow().bold());
        return write_output(output.as_deref(), stored.content());
    }

    if !stored.title().is_empty() {
        eprintln!("Opening {}", format!("'{}'", stored.title()).cyan());
    }

    let text = open_interactive(
        &stored,
        &settings.kdf_params(),
        prompt_passphrase,
        || confirm("Try another passphrase?"),
    )?;
    write_output(output.as_deref(), &text)
}

/// Ask for passphrases until one opens `stored` or the user gives up.
///
/// A wrong passphrase fails the same way every time, so only a fresh
/// passphrase from the user triggers another attempt.
pub fn open_interactive<P, R>(
    stored: &StoredText,
    params: &KdfParams,
    mut ask_passphrase: P,
    mut ask_retry: R,
) -> Result<String>
where
    P: FnMut() -> Result<SecretString>,
    R: FnMut() -> bool,
{
    loop {
        let passphrase = ask_passphrase()?;

        step("Deriving key and decrypting...");
        match snippet::open_text(stored, passphrase.expose_secret(), params) {
            Ok(text) => {
                step_done();
                return Ok(text);
            }
            Err(e) if e.is_recoverable() => {
                eprintln!("{}", "failed".red());
                eprintln!("{} wrong passphrase or corrupted data", "Error:".red().bold());
                if !ask_retry() {
                    return Err(SealError::Cancelled);
                }
            }
            Err(e) => {
                eprintln!("{}", "failed".red());
                return Err(e);
            }
        }
    }
}
