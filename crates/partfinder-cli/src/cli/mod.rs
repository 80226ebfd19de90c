//! CLI for the partfinder plate lookup and vehicle catalog.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{
    run_brands, run_form_check, run_form_template, run_models, run_plate, run_theme,
    run_versions,
};

/// Top-level CLI for partfinder.
#[derive(Debug, Parser)]
#[command(name = "partfinder")]
#[command(about = "partfinder: vehicle lookup by plate and parts request helpers", long_about = None)]
pub struct Cli {
    /// Override the plate service origin from config.toml.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up vehicle metadata by license plate.
    Plate {
        /// License plate, sent to the service as typed.
        plate: String,
        /// Print the record as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List vehicle brands.
    Brands,

    /// List models of a brand.
    Models {
        /// Brand exactly as listed by `brands`.
        brand: String,
    },

    /// List versions (trims) for a brand and model.
    Versions {
        brand: String,
        model: String,
    },

    /// Print the UI colour palette as JSON.
    Theme,

    /// Print an empty parts request form as JSON.
    FormTemplate,

    /// Load a parts request form from a JSON file and summarize it.
    FormCheck {
        /// Path to the form JSON.
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        tracing::debug!("parsed cli: {:?}", cli);

        match cli.command {
            CliCommand::Plate { plate, json } => {
                run_plate(cli.base_url.as_deref(), &plate, json).await?
            }
            CliCommand::Brands => run_brands().await?,
            CliCommand::Models { brand } => run_models(&brand).await?,
            CliCommand::Versions { brand, model } => run_versions(&brand, &model).await?,
            CliCommand::Theme => run_theme()?,
            CliCommand::FormTemplate => run_form_template()?,
            CliCommand::FormCheck { path } => run_form_check(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
