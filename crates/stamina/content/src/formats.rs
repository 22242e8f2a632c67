//! On-disk layout of the mod configuration.
//!
//! The file mirrors the host's own stamina table: besides the four control
//! keys it carries one entry per table key, holding either a number, a flag
//! or an `{x, y, z}` object for vector parameters. Those entries are only
//! read in fixed mode.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use stamina_core::{
    Adjustment, AdjustmentMethod, ConfigError, FieldValue, FixedValues, StaminaConfig,
    StaminaSchema,
};

fn enabled_by_default() -> bool {
    true
}

/// Raw configuration file as written by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "enabled_by_default")]
    pub mod_enabled: bool,

    #[serde(default)]
    pub debug: bool,

    pub adjustment_method: String,

    #[serde(default)]
    pub percent_stamina: f64,

    /// Fixed-mode values keyed by table key.
    #[serde(flatten)]
    pub fields: BTreeMap<String, FixedEntry>,
}

/// One fixed-mode entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixedEntry {
    Flag(bool),
    Number(f64),
    Vector(BTreeMap<String, f64>),
    /// `null`: the field keeps its host value.
    Unset,
    /// Any other value. Only an error in fixed mode.
    #[serde(skip_serializing)]
    Other(IgnoredAny),
}

impl ConfigFile {
    /// Builds a file whose fixed entries reproduce the values returned by `read`.
    ///
    /// Fields `read` does not know are left out of the file.
    pub fn snapshot(
        read: impl Fn(&str) -> Option<FieldValue>,
        schema: &StaminaSchema,
        method: AdjustmentMethod,
        percent_stamina: f64,
    ) -> Self {
        let mut fields = BTreeMap::new();
        for spec in schema.iter() {
            let Some(value) = read(spec.name) else {
                continue;
            };
            match (spec.component(), value) {
                (Some(axis), FieldValue::Float(v)) => {
                    let entry = fields
                        .entry(spec.group().to_owned())
                        .or_insert_with(|| FixedEntry::Vector(BTreeMap::new()));
                    if let FixedEntry::Vector(components) = entry {
                        components.insert(axis.to_owned(), v);
                    }
                }
                (_, FieldValue::Float(v)) => {
                    fields.insert(spec.name.to_owned(), FixedEntry::Number(v));
                }
                (_, FieldValue::Flag(b)) => {
                    fields.insert(spec.name.to_owned(), FixedEntry::Flag(b));
                }
            }
        }

        Self {
            mod_enabled: true,
            debug: false,
            adjustment_method: method.to_string(),
            percent_stamina,
            fields,
        }
    }

    /// Fixed-mode values with vector entries expanded to `Group.axis` names.
    ///
    /// `null` entries are skipped; entries of any other shape are rejected.
    pub fn fixed_values(&self) -> Result<FixedValues, ConfigError> {
        let mut values = FixedValues::new();
        for (name, entry) in &self.fields {
            match entry {
                FixedEntry::Flag(flag) => values.insert(name.clone(), *flag),
                FixedEntry::Number(number) => values.insert(name.clone(), *number),
                FixedEntry::Vector(components) => {
                    for (axis, number) in components {
                        values.insert(format!("{name}.{axis}"), *number);
                    }
                }
                FixedEntry::Unset => {}
                FixedEntry::Other(_) => return Err(ConfigError::InvalidFixedValue(name.clone())),
            }
        }
        Ok(values)
    }

    fn adjustment(&self, schema: &StaminaSchema) -> Result<Adjustment, ConfigError> {
        let method = AdjustmentMethod::from_str(self.adjustment_method.trim())
            .map_err(|_| ConfigError::UnknownAdjustmentMethod(self.adjustment_method.clone()))?;
        let adjustment = match method {
            AdjustmentMethod::Unlimited => Adjustment::Unlimited,
            AdjustmentMethod::Percent => Adjustment::Percent(self.percent_stamina),
            AdjustmentMethod::Fixed => Adjustment::Fixed(self.fixed_values()?),
        };
        let config = StaminaConfig::new(adjustment);
        config.validate(schema)?;
        Ok(config.adjustment)
    }

    /// Interprets the file against `schema`.
    ///
    /// A disabled mod never reads its adjustment section, so errors there are
    /// ignored when `mod_enabled` is false.
    pub fn into_config(self, schema: &StaminaSchema) -> Result<StaminaConfig, ConfigError> {
        let adjustment = match self.adjustment(schema) {
            Ok(adjustment) => adjustment,
            Err(err) if !self.mod_enabled => {
                tracing::debug!(error = %err, "ignoring adjustment settings of disabled mod");
                Adjustment::Unlimited
            }
            Err(err) => return Err(err),
        };

        Ok(StaminaConfig::new(adjustment)
            .with_enabled(self.mod_enabled)
            .with_debug(self.debug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stamina_core::{
        AdjustmentEvent, SkipReason, StaminaParameters, StaminaTable, Vector2,
        apply_stamina_adjustment,
    };

    fn parse(json: &str) -> ConfigFile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn reads_control_keys_with_defaults() {
        let file = parse(r#"{ "adjustment_method": "percent", "percent_stamina": 25 }"#);
        assert!(file.mod_enabled);
        assert!(!file.debug);
        assert!(file.fields.is_empty());

        let config = file.into_config(&StaminaSchema::stamina()).unwrap();
        assert_eq!(config.adjustment, Adjustment::Percent(25.0));
        assert!(config.enabled);
    }

    #[test]
    fn expands_vector_entries_in_fixed_mode() {
        let file = parse(
            r#"{
                "adjustment_method": "fixed",
                "debug": true,
                "Capacity": 150,
                "WalkConsumption": { "x": 1.5, "y": 2 },
                "StaminaExhaustionRocksCamera": false
            }"#,
        );
        let config = file.into_config(&StaminaSchema::stamina()).unwrap();
        assert!(config.debug);

        let Adjustment::Fixed(values) = config.adjustment else {
            panic!("expected fixed adjustment");
        };
        assert_eq!(values.len(), 4);
        assert_eq!(values.get("Capacity"), Some(FieldValue::Float(150.0)));
        assert_eq!(values.get("WalkConsumption.x"), Some(FieldValue::Float(1.5)));
        assert_eq!(values.get("WalkConsumption.y"), Some(FieldValue::Float(2.0)));
        assert_eq!(
            values.get("StaminaExhaustionRocksCamera"),
            Some(FieldValue::Flag(false))
        );
    }

    #[test]
    fn fixed_entries_are_ignored_outside_fixed_mode() {
        let file = parse(r#"{ "adjustment_method": "unlimited", "NotAField": 3 }"#);
        let config = file.into_config(&StaminaSchema::stamina()).unwrap();
        assert_eq!(config.adjustment, Adjustment::Unlimited);
    }

    #[test]
    fn rejects_unknown_method() {
        let file = parse(r#"{ "adjustment_method": "double" }"#);
        assert_eq!(
            file.into_config(&StaminaSchema::stamina()),
            Err(ConfigError::UnknownAdjustmentMethod("double".into()))
        );
    }

    #[test]
    fn disabled_mod_tolerates_bad_adjustment_settings() {
        let file = parse(r#"{ "mod_enabled": false, "adjustment_method": "double" }"#);
        let config = file.into_config(&StaminaSchema::stamina()).unwrap();
        assert!(!config.enabled);
    }

    #[test]
    fn rejects_fixed_values_of_the_wrong_kind() {
        let file = parse(r#"{ "adjustment_method": "fixed", "Capacity": true }"#);
        assert!(matches!(
            file.into_config(&StaminaSchema::stamina()),
            Err(ConfigError::FieldKindMismatch { .. })
        ));

        let file = parse(r#"{ "adjustment_method": "fixed", "WalkConsumption": { "w": 1 } }"#);
        assert_eq!(
            file.into_config(&StaminaSchema::stamina()),
            Err(ConfigError::UnknownField("WalkConsumption.w".into()))
        );
    }

    #[test]
    fn snapshot_groups_vector_components() {
        let params = StaminaParameters {
            capacity: 110.0,
            walk_consumption: Vector2::new(-0.35, 0.15),
            stamina_exhaustion_causes_jiggle: true,
            ..StaminaParameters::default()
        };
        let file = ConfigFile::snapshot(
            |field| params.read(field),
            &StaminaSchema::stamina(),
            AdjustmentMethod::Fixed,
            0.0,
        );

        assert_eq!(file.adjustment_method, "fixed");
        assert_eq!(file.fields.get("Capacity"), Some(&FixedEntry::Number(110.0)));
        assert_eq!(
            file.fields.get("StaminaExhaustionCausesJiggle"),
            Some(&FixedEntry::Flag(true))
        );
        let Some(FixedEntry::Vector(walk)) = file.fields.get("WalkConsumption") else {
            panic!("expected vector entry");
        };
        assert_eq!(walk.get("x"), Some(&-0.35));
        assert_eq!(walk.get("y"), Some(&0.15));

        // Every schema field comes back out in fixed mode.
        let config = file.into_config(&StaminaSchema::stamina()).unwrap();
        let Adjustment::Fixed(values) = config.adjustment else {
            panic!("expected fixed adjustment");
        };
        assert_eq!(values.len(), StaminaSchema::stamina().len());
    }

    #[test]
    fn null_fixed_entry_leaves_field_untouched() {
        let file = parse(
            r#"{ "adjustment_method": "fixed", "JumpConsumption": 3, "Capacity": null }"#,
        );
        assert_eq!(file.fields.get("Capacity"), Some(&FixedEntry::Unset));
        let config = file.into_config(&StaminaSchema::stamina()).unwrap();

        let mut params = StaminaParameters {
            capacity: 110.0,
            jump_consumption: 14.0,
            ..StaminaParameters::default()
        };
        let mut events: Vec<AdjustmentEvent> = Vec::new();
        let report = apply_stamina_adjustment(&config, &mut params, &mut events);

        assert_eq!(params.jump_consumption, 3.0);
        assert_eq!(params.capacity, 110.0);
        assert!(
            report
                .skipped
                .iter()
                .any(|skip| skip.field == "Capacity" && skip.reason == SkipReason::NotAdjusted)
        );
    }

    #[test]
    fn unrelated_keys_are_ignored_outside_fixed_mode() {
        let file = parse(
            r#"{
                "$schema": "./config.schema.json",
                "adjustment_method": "unlimited",
                "note": "my settings"
            }"#,
        );
        let config = file.into_config(&StaminaSchema::stamina()).unwrap();
        assert_eq!(config.adjustment, Adjustment::Unlimited);

        let file = parse(
            r#"{ "adjustment_method": "percent", "percent_stamina": 10, "tags": ["a"] }"#,
        );
        let config = file.into_config(&StaminaSchema::stamina()).unwrap();
        assert_eq!(config.adjustment, Adjustment::Percent(10.0));
    }

    #[test]
    fn unrelated_keys_are_rejected_in_fixed_mode() {
        let file = parse(r#"{ "adjustment_method": "fixed", "note": "my settings" }"#);
        assert_eq!(
            file.into_config(&StaminaSchema::stamina()),
            Err(ConfigError::InvalidFixedValue("note".into()))
        );
    }
}
