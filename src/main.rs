use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sourcefresh::config::RUNNING_VERSION;
use sourcefresh::manifest::{self, Compatibility};
use sourcefresh::version;

#[derive(Parser)]
#[command(name = "sourcefresh")]
#[command(version, about = "Connection freshness and version compatibility tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether data exported at IMPORTING can be imported here
    Compat {
        importing: String,
        /// Running version to compare against
        #[arg(long, default_value = RUNNING_VERSION)]
        running: String,
    },
    /// Check an exported manifest file against the running version
    Check {
        path: PathBuf,
        /// Running version to compare against
        #[arg(long, default_value = RUNNING_VERSION)]
        running: String,
    },
    /// Print the normalized major.minor.patch form of VERSION
    Normalize { version: String },
    /// Report whether V1 is at least V2 under lenient dotted comparison
    Ge { v1: String, v2: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = sourcefresh::logging::init()?;

    match cli.command {
        Command::Compat { importing, running } => {
            if version::is_compatible(&running, &importing) {
                println!("compatible");
            } else {
                println!("incompatible");
                std::process::exit(1);
            }
        }
        Command::Check { path, running } => {
            let raw = std::fs::read_to_string(&path)?;
            let result = manifest::check_import(&raw, &running)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if matches!(result, Compatibility::Incompatible { .. }) {
                std::process::exit(1);
            }
        }
        Command::Normalize { version } => match version::normalize_version(&version) {
            Some(normalized) => println!("{normalized}"),
            None => anyhow::bail!("unrecognizable version: {version}"),
        },
        Command::Ge { v1, v2 } => {
            println!("{}", version::version_ge(&v1, &v2));
        }
    }

    Ok(())
}
