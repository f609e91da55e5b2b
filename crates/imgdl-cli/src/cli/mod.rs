//! CLI for imgdl.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imgdl_core::config;
use std::path::PathBuf;

use commands::{run_batch, run_format_name, run_get};

/// Top-level CLI for imgdl.
#[derive(Debug, Parser)]
#[command(name = "imgdl")]
#[command(about = "imgdl: mirror remote images locally, with optional watermark", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download one image.
    Get {
        /// Public HTTP/HTTPS URL of the image.
        url: String,
        /// File name to save as (default: last segment of the URL path).
        #[arg(long)]
        name: Option<String>,
        /// Directory to save into (created if missing).
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Public URL of a watermark image to composite onto the image.
        #[arg(long, value_name = "URL")]
        watermark: Option<String>,
    },

    /// Download several images; each --url is paired with the --name at the same position.
    Batch {
        /// Image URL (repeatable).
        #[arg(long = "url", value_name = "URL")]
        urls: Vec<String>,
        /// File name (repeatable).
        #[arg(long = "name", value_name = "NAME")]
        names: Vec<String>,
        /// Directory to save into (created if missing).
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Public URL of a watermark image to composite onto every image.
        #[arg(long, value_name = "URL")]
        watermark: Option<String>,
    },

    /// Print a name with accents and tildes removed, lowercased.
    FormatName {
        /// Name to normalize.
        name: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::FormatName { name } = &cli.command {
            run_format_name(name);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                url,
                name,
                dir,
                watermark,
            } => {
                let dir = dir.or_else(|| cfg.default_directory.clone());
                run_get(&cfg, &url, name.as_deref(), dir.as_deref(), watermark.as_deref())?;
            }
            CliCommand::Batch {
                urls,
                names,
                dir,
                watermark,
            } => {
                let dir = dir.or_else(|| cfg.default_directory.clone());
                run_batch(&cfg, &urls, &names, dir.as_deref(), watermark.as_deref())?;
            }
            CliCommand::FormatName { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
