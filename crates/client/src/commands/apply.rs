//! Run the mod against a globals document on disk.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use stamina_content::{GlobalsDocument, STAMINA_POINTER};
use stamina_core::{AdjustmentReport, AdjustmentStatus, SkipReason};
use stamina_runtime::{
    ActivationOutcome, CustomStamina, DatabaseServer, PostDbLoadMod, PostDbLoadModAsync,
};

use crate::config::CliConfig;

/// Adjust the stamina table of a host globals document
#[derive(Parser, Debug)]
pub struct Apply {
    /// Host globals JSON document
    #[arg(long)]
    pub globals: PathBuf,

    /// Mod configuration, JSON or TOML (default: $STAMINA_CONFIG_PATH or config/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the adjusted document here instead of overwriting --globals
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON pointer of the stamina table inside the document
    #[arg(long, default_value = STAMINA_POINTER)]
    pub pointer: String,

    /// Drive the mod through the synchronous host contract
    #[arg(long)]
    pub sync: bool,

    /// Run the pass but do not write anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Apply {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let config_path = self.config.unwrap_or_else(|| config.config_path.clone());
        tracing::info!("Config: {}", config_path.display());
        tracing::info!("Globals: {}", self.globals.display());

        let globals = GlobalsDocument::load_async(&self.globals)
            .await?
            .with_pointer(self.pointer);
        let mut server = DatabaseServer::new(globals);
        let custom_stamina = CustomStamina::from_file(config_path);

        let outcome = if self.sync {
            custom_stamina.post_db_load(&mut server)?
        } else {
            custom_stamina.post_db_load_async(&mut server).await?
        };

        let report = match outcome {
            ActivationOutcome::Completed(report) => report,
            ActivationOutcome::ConfigRejected { reason } => {
                bail!("Configuration rejected: {reason}")
            }
        };
        print_report(&report);

        if report.is_disabled() || report.written == 0 {
            return Ok(());
        }
        if self.dry_run {
            println!("{}", style("Dry run, nothing written").dim());
            return Ok(());
        }

        let output = self.output.unwrap_or(self.globals);
        server.globals().save(&output)?;
        println!(
            "{} Wrote {}",
            style("✓").green().bold(),
            style(output.display()).cyan()
        );
        Ok(())
    }
}

fn print_report(report: &AdjustmentReport) {
    match report.status {
        AdjustmentStatus::Disabled => {
            println!("{} Mod disabled, table untouched", style("✗").red().bold());
        }
        AdjustmentStatus::Applied(method) => {
            println!(
                "{} {}: {} written, {} changed",
                style("✓").green().bold(),
                style(method).cyan(),
                report.written,
                report.changed
            );
        }
    }

    for skipped in &report.skipped {
        match &skipped.reason {
            SkipReason::NotAdjusted => {}
            SkipReason::Missing => {
                tracing::warn!("{} is missing from the stamina table", skipped.field);
            }
            SkipReason::Rejected(err) => tracing::warn!("{}", err),
        }
    }
}
