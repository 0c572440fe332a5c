//! Workspace tasks: `cargo run -p dualview-xtask -- <command>`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dualview::Options;

#[derive(Parser)]
#[command(about = "Build tasks for the dualview workspace")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the options JSON schema.
    Schema {
        /// Output file.
        #[arg(long, default_value = "assets/options.schema.json")]
        out: PathBuf,
    },
    /// Write the default options as a TOML preset.
    DefaultOptions {
        /// Output file.
        #[arg(long, default_value = "assets/presets/default.toml")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Schema { out } => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())
                .context("serializing options schema")?;
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&out, schema)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Command::DefaultOptions { out } => {
            Options::default()
                .save(&out)
                .with_context(|| format!("writing {}", out.display()))?;
        }
    }
    Ok(())
}
