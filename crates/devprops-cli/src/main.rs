//! Device identity properties CLI
//!
//! Resolves the properties a forms engine substitutes into templates on this
//! host and prints them.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use devprops_cli::commands::{handle_get, handle_keys, handle_show, GetOutcome};
use devprops_effects::{DevPropsConfig, HostPlatform};
use devprops_manager::PropertyManager;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "devprops")]
#[command(about = "Device and user identity properties for form templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "devprops.toml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one property by plain or URI key (case-insensitive)
    Get {
        /// Property name, e.g. `deviceid` or `uri:email`
        name: String,
    },

    /// Print every known property
    Show {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the property vocabulary
    Keys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DevPropsConfig::load(Some(&cli.config))?;
    let mut stdout = std::io::stdout().lock();

    if let Commands::Keys = cli.command {
        return handle_keys(&config.secure.scheme_name, &mut stdout);
    }

    let platform = HostPlatform::from_config(&config)?;
    let manager = PropertyManager::new(&platform);

    match cli.command {
        Commands::Get { name } => match handle_get(&manager, &name, &mut stdout)? {
            GetOutcome::Found => {}
            GetOutcome::Absent(_) => std::process::exit(1),
            GetOutcome::Unknown => bail!("Unknown property: {name} (see `devprops keys`)"),
        },
        Commands::Show { json } => handle_show(&manager, json, &mut stdout)?,
        Commands::Keys => {}
    }

    Ok(())
}
