//! Show envelope details without a passphrase

use std::path::PathBuf;

use colored::Colorize;
use textbin_seal::config::Settings;
use textbin_seal::crypto::{Envelope, Salt};
use textbin_seal::snippet::SealedText;
use textbin_seal::Result;

use super::{read_input, StoredText};

pub fn run(input: Option<PathBuf>, settings: &Settings) -> Result<()> {
    let stored = StoredText::parse(&read_input(input.as_deref())?)?;

    println!();
    println!("{}", "Envelope".cyan().bold());
    println!("{}", "─".repeat(60).dimmed());

    let Some(salt) = stored.encryption_salt() else {
        println!("Not encrypted ({} bytes of plaintext)", stored.content().len());
        println!("{}", "─".repeat(60).dimmed());
        return Ok(());
    };

    let salt = Salt::from_base64(salt)?;
    let envelope = Envelope::decode(stored.content())?;

    println!("{:<16}{}", "Salt:", hex::encode(salt.as_bytes()));
    println!("{:<16}{}", "IV:", hex::encode(envelope.iv().as_bytes()));
    println!("{:<16}{} bytes", "Ciphertext:", envelope.ciphertext().len());
    println!("{:<16}{} bytes", "Plaintext:", envelope.plaintext_len());
    println!(
        "{:<16}PBKDF2-HMAC-SHA256, {} iterations (local setting)",
        "KDF:",
        settings.kdf_iterations
    );
    println!("{:<16}AES-256-GCM", "Cipher:");
    println!("{}", "─".repeat(60).dimmed());
    println!();

    Ok(())
}
