use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use textbin_seal::config;
use textbin_seal::model::{ExpiryUnit, Format};
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "textbin-seal")]
#[command(version)]
#[command(about = "Encrypt and decrypt TextBin snippets with a passphrase", long_about = None)]
struct Cli {
    /// Settings file (default: <config dir>/textbin/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text into a submission payload (JSON)
    Seal {
        /// Read text from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write the payload here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Title, sent unencrypted
        #[arg(short, long, default_value = "")]
        title: String,

        /// Syntax-highlighting format (python, rust, ...)
        #[arg(short, long)]
        format: Option<Format>,

        /// Expiry amount, 1-31
        #[arg(long)]
        expires_value: Option<u32>,

        /// Expiry unit (seconds, minutes, hours, days, weeks, months, years)
        #[arg(long)]
        expires_unit: Option<ExpiryUnit>,
    },

    /// Decrypt a stored text (API response, record or payload JSON)
    Open {
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write the plaintext here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show salt, IV and sizes of a sealed text without decrypting it
    Inspect {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print a fresh random salt
    Salt,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective settings
    Show,
    /// Write a settings file with defaults
    Init {
        /// Overwrite without asking
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("textbin_seal=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    // Loaded per command so `config init` still works on a broken file.
    let settings = || {
        config::load_settings(Some(&config_path))
            .with_context(|| format!("failed to load settings from {}", config_path.display()))
    };

    match cli.command {
        Commands::Seal {
            input,
            output,
            title,
            format,
            expires_value,
            expires_unit,
        } => cli::seal::run(
            cli::seal::SealArgs {
                input,
                output,
                title,
                format,
                expires_value,
                expires_unit,
            },
            &settings()?,
        )?,
        Commands::Open { input, output } => cli::open::run(input, output, &settings()?)?,
        Commands::Inspect { input } => cli::inspect::run(input, &settings()?)?,
        Commands::Salt => cli::salt::run()?,
        Commands::Config { action } => match action {
            ConfigCommands::Show => cli::config::show(&config_path, &settings()?)?,
            ConfigCommands::Init { force } => cli::config::init(&config_path, force)?,
        },
    }

    Ok(())
}
