//! Write a mod configuration seeded from a host table.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use stamina_content::{ConfigFile, ConfigLoader, GlobalsDocument, STAMINA_POINTER, read_field};
use stamina_core::{AdjustmentMethod, StaminaSchema};

use super::parse_method;

/// Create a config file whose fixed values match the current stamina table
#[derive(Parser, Debug)]
pub struct InitConfig {
    /// Host globals JSON document to read the current values from
    #[arg(long)]
    pub globals: PathBuf,

    /// Config file to create (.json or .toml)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Adjustment method written to the file
    #[arg(long, default_value = "fixed", value_parser = parse_method)]
    pub method: AdjustmentMethod,

    /// Percentage written to the file
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub percent: f64,

    /// JSON pointer of the stamina table inside the document
    #[arg(long, default_value = STAMINA_POINTER)]
    pub pointer: String,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitConfig {
    pub async fn execute(self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let globals = GlobalsDocument::load_async(&self.globals)
            .await?
            .with_pointer(self.pointer);
        let stamina = globals.stamina()?;
        let file = ConfigFile::snapshot(
            |field| read_field(stamina, field),
            &StaminaSchema::stamina(),
            self.method,
            self.percent,
        );
        ConfigLoader::save(&self.output, &file)?;

        println!(
            "{} Wrote {} ({} entries, method {})",
            style("✓").green().bold(),
            style(self.output.display()).cyan(),
            file.fields.len(),
            self.method
        );
        Ok(())
    }
}
