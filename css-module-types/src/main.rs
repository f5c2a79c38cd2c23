//! css-module-types CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser};
use commands::GenerateCommand;
use css_module_types::{observability, GeneratorConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "css-module-types")]
#[command(version)]
#[command(about = "Generate TypeScript declarations for CSS Modules", long_about = None)]
struct Cli {
    /// Config file (default: ./css-module-types.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase diagnostic log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress console output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    observability::init(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => GeneratorConfig::load_from(path)?,
        None => GeneratorConfig::load()?,
    };

    GenerateCommand::new(config, cli.quiet).execute()?;

    Ok(())
}
