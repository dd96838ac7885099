//! CLI command implementations
//!
//! Data (JSON payloads, decrypted text) goes to stdout; prompts and
//! status lines go to stderr so output can be piped.

pub mod config;
pub mod inspect;
pub mod open;
pub mod salt;
pub mod seal;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use colored::Colorize;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use textbin_seal::model::{TextData, TextRecord, TextResponse};
use textbin_seal::snippet::SealedText;
use textbin_seal::Result;

/// Ask for a passphrase for new content, with confirmation.
pub fn prompt_new_passphrase(min_len: usize) -> Result<SecretString> {
    eprintln!("{}", "Choose a passphrase".cyan().bold());
    eprintln!("Anyone who opens this text will need it. It cannot be recovered.");
    if min_len > 0 {
        eprintln!("Minimum length: {} characters", min_len);
    }
    eprintln!();

    loop {
        let passphrase = SecretString::new(rpassword::prompt_password("Passphrase: ")?);

        let len = passphrase.expose_secret().chars().count();
        if len == 0 {
            eprintln!("{} Passphrase must not be empty", "Error:".red());
            continue;
        }
        if len < min_len {
            eprintln!(
                "{} Passphrase must be at least {} characters",
                "Error:".red(),
                min_len
            );
            continue;
        }

        let confirm = SecretString::new(rpassword::prompt_password("Confirm passphrase: ")?);

        if passphrase.expose_secret() != confirm.expose_secret() {
            eprintln!("{} Passphrases do not match", "Error:".red());
            continue;
        }

        return Ok(passphrase);
    }
}

/// Ask for the passphrase of existing content.
pub fn prompt_passphrase() -> Result<SecretString> {
    let passphrase = rpassword::prompt_password("Passphrase: ")?;
    Ok(SecretString::new(passphrase))
}

/// Yes/no question on the terminal; anything but yes is no.
///
/// The answer is read from the controlling terminal, not stdin, because
/// stdin may already have been consumed as the command's input.
pub fn confirm(prompt: &str) -> bool {
    eprint!("{} [y/N] ", prompt);
    io::stderr().flush().ok();

    match open_terminal() {
        Ok(mut tty) => read_yes(&mut tty),
        Err(_) => read_yes(&mut io::stdin().lock()),
    }
}

/// Read one line from `reader` and check for a yes.
pub fn read_yes<R: BufRead>(reader: &mut R) -> bool {
    let mut input = String::new();
    if reader.read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(unix)]
fn open_terminal() -> io::Result<BufReader<File>> {
    File::open("/dev/tty").map(BufReader::new)
}

#[cfg(windows)]
fn open_terminal() -> io::Result<BufReader<File>> {
    fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open("CONIN$")
        .map(BufReader::new)
}

#[cfg(not(any(unix, windows)))]
fn open_terminal() -> io::Result<BufReader<File>> {
    Err(io::Error::new(io::ErrorKind::Unsupported, "no terminal"))
}

/// Print a status prefix before slow work, e.g. key derivation.
pub fn step(message: &str) {
    eprint!("{} ", message.cyan());
    io::stderr().flush().ok();
}

pub fn step_done() {
    eprintln!("{}", "done".green());
}

/// Read a whole file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, data: &str) -> Result<()> {
    match path {
        Some(p) => fs::write(p, data)?,
        None => {
            let mut out = io::stdout().lock();
            out.write_all(data.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Any of the JSON shapes a sealed text can arrive in: an API response,
/// a bare record, or a submission payload produced by `seal`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredText {
    Response(TextResponse),
    Record(TextRecord),
    Draft(TextData),
}

impl StoredText {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn title(&self) -> &str {
        match self {
            StoredText::Response(r) => &r.text.title,
            StoredText::Record(r) => &r.title,
            StoredText::Draft(d) => &d.title,
        }
    }
}

impl SealedText for StoredText {
    fn content(&self) -> &str {
        match self {
            StoredText::Response(r) => r.content(),
            StoredText::Record(r) => r.content(),
            StoredText::Draft(d) => d.content(),
        }
    }

    fn encryption_salt(&self) -> Option<&str> {
        match self {
            StoredText::Response(r) => r.encryption_salt(),
            StoredText::Record(r) => r.encryption_salt(),
            StoredText::Draft(d) => d.encryption_salt(),
        }
    }
}
