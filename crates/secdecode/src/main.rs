// SPDX-FileCopyrightText: 2026 SecDecode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SecDecode - decode Maven-encrypted build properties.
//!
//! This is the binary entry point. Decoded property bags are written to
//! stdout as TOML; logs go to stderr.

mod error;
mod host;
mod prompt;
mod render;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use secdecode_cipher::PlexusCipher;
use secdecode_config::{ConfigError, SecDecodeConfig};
use secdecode_core::{BuildHost, Cipher, ExecutionEnvironment, PropertyBag};
use secdecode_decoder::{DecodeGoal, DecodeState};
use secrecy::ExposeSecret;

use crate::error::CliError;
use crate::host::CliHost;

/// SecDecode - decode `{...}` encrypted properties with the Maven master password.
#[derive(Parser, Debug)]
#[command(name = "secdecode", version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of the standard lookup.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Set an execution property, e.g. `-D settings.security=/etc/maven/sec.xml`.
    #[arg(
        short = 'D',
        global = true,
        value_name = "KEY=VALUE",
        value_parser = host::parse_define
    )]
    define: Vec<(String, String)>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode the encrypted values of a TOML properties file and print the result.
    Process {
        /// Flat TOML table of string properties.
        #[arg(long, value_name = "FILE")]
        properties: PathBuf,
        /// Mask decoded values in the output.
        #[arg(long)]
        mask: bool,
    },
    /// Print the settings-security file that would be used.
    Locate,
    /// Encrypt a master password for the `<master>` element.
    EncryptMaster {
        /// Read from SECDECODE_PASSWORD or a prompt when omitted.
        password: Option<String>,
    },
    /// Encrypt a property value with the located master password.
    Encrypt {
        /// Read from SECDECODE_PASSWORD or a prompt when omitted.
        value: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            secdecode_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);
    tracing::debug!(
        master_key_name = %config.settings.master_key_name,
        max_relocations = config.settings.max_relocations,
        "configuration loaded"
    );

    if let Err(e) = run(cli, &config) {
        eprintln!("secdecode: {e}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<SecDecodeConfig, Vec<ConfigError>> {
    match path {
        Some(path) => secdecode_config::load_and_validate_from_path(path),
        None => secdecode_config::load_and_validate(),
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("secdecode={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

fn run(cli: Cli, config: &SecDecodeConfig) -> Result<(), CliError> {
    let execution = host::execution_properties(&cli.define);
    let goal = DecodeGoal::from_config(&config.settings, PlexusCipher::new(), DecodeState::global());

    match cli.command {
        Commands::Process { properties, mask } => {
            let project = host::load_properties(&properties)?;
            let mut host = CliHost::new(execution, project);
            let report = goal.execute(&mut host)?;
            let masked = mask.then_some(&report.decoded);
            print!("{}", render::render_properties(host.project_properties(), masked)?);
        }
        Commands::Locate => {
            let file = goal.locator().locate(&environment(&execution))?;
            println!("{}", file.path().display());
        }
        Commands::EncryptMaster { password } => {
            let password = prompt::read_secret(password, "master password")?;
            let encrypted = goal
                .decoder()
                .cipher()
                .encrypt_decorated(password.expose_secret(), &config.settings.master_key_name)?;
            println!("{encrypted}");
        }
        Commands::Encrypt { value } => {
            let file = goal.locator().locate(&environment(&execution))?;
            let master = goal.decoder().master_password(&file)?;
            let value = prompt::read_secret(value, "value")?;
            let encrypted = goal
                .decoder()
                .cipher()
                .encrypt_decorated(value.expose_secret(), master.expose_secret())?;
            println!("{encrypted}");
        }
    }

    Ok(())
}

fn environment(execution: &PropertyBag) -> ExecutionEnvironment {
    ExecutionEnvironment::from_properties(execution)
}
