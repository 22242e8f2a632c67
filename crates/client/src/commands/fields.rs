//! List the adjustable stamina fields.

use anyhow::Result;
use clap::Parser;
use console::style;
use stamina_core::{FieldKind, StaminaSchema};

/// Print every adjustable field with its kind and unlimited value
#[derive(Parser, Debug)]
pub struct Fields {}

impl Fields {
    pub fn execute(self) -> Result<()> {
        let schema = StaminaSchema::stamina();
        let width = schema.iter().map(|f| f.name.len()).max().unwrap_or(0);

        for field in schema.iter() {
            let behaviour = match field.kind {
                FieldKind::Float { direction, .. } => format!("float, {direction}"),
                FieldKind::Flag { .. } => "flag".to_string(),
            };
            println!(
                "{:<width$}  {:<16}  unlimited = {}",
                field.name,
                style(behaviour).dim(),
                style(field.unlimited_value()).cyan(),
            );
        }
        println!("{} fields", schema.len());
        Ok(())
    }
}
