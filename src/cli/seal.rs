//! Encrypt a snippet into a TextBin submission payload

use std::path::PathBuf;

use colored::Colorize;
use secrecy::ExposeSecret;
use textbin_seal::config::Settings;
use textbin_seal::model::{Expiry, ExpiryUnit, Format, TextData};
use textbin_seal::snippet;
use textbin_seal::Result;

use super::{prompt_new_passphrase, read_input, step, step_done, write_output};

pub struct SealArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub title: String,
    pub format: Option<Format>,
    pub expires_value: Option<u32>,
    pub expires_unit: Option<ExpiryUnit>,
}

pub fn run(args: SealArgs, settings: &Settings) -> Result<()> {
    let expiry = Expiry::new(
        args.expires_value.unwrap_or(settings.default_expiry.value),
        args.expires_unit.unwrap_or(settings.default_expiry.unit),
    )?;
    let format = args.format.unwrap_or(settings.default_format);

    let content = read_input(args.input.as_deref())?;
    let draft = TextData::new(args.title, content)
        .with_format(format)
        .with_expiry(expiry);
    draft.validate()?;

    let passphrase = prompt_new_passphrase(settings.min_passphrase_len)?;
    eprintln!();

    step("Deriving key and encrypting...");
    let sealed = snippet::seal_draft(&draft, passphrase.expose_secret(), &settings.kdf_params())?;
    step_done();

    let mut json = serde_json::to_string_pretty(&sealed)?;
    json.push('\n');
    write_output(args.output.as_deref(), &json)?;

    if let Some(path) = &args.output {
        eprintln!(
            "{} sealed payload written to {}",
            "Success:".green().bold(),
            path.display().to_string().cyan()
        );
    }
    eprintln!(
        "Title {} and expiry {} are sent unencrypted.",
        format!("'{}'", sealed.title).cyan(),
        sealed.expiry().to_string().cyan()
    );

    Ok(())
}
