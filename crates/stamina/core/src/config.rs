//! Activation configuration for the stamina adjustment pass.

use std::collections::BTreeMap;

use crate::schema::StaminaSchema;
use crate::value::{FieldValue, ValueKind};

/// Name of an adjustment strategy as written in configuration files.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AdjustmentMethod {
    Unlimited,
    Percent,
    Fixed,
}

/// How every field of the table is transformed during one activation.
#[derive(Clone, Debug, PartialEq)]
pub enum Adjustment {
    /// Override every field with its schema constant.
    Unlimited,
    /// Scale every numeric field by a signed percentage.
    ///
    /// A positive percentage raises capacity fields and lowers drain fields.
    Percent(f64),
    /// Write literal values taken from configuration.
    Fixed(FixedValues),
}

impl Adjustment {
    pub fn method(&self) -> AdjustmentMethod {
        match self {
            Self::Unlimited => AdjustmentMethod::Unlimited,
            Self::Percent(_) => AdjustmentMethod::Percent,
            Self::Fixed(_) => AdjustmentMethod::Fixed,
        }
    }
}

/// Literal per-field targets for fixed mode, keyed by schema field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedValues {
    values: BTreeMap<String, FieldValue>,
}

impl FixedValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<FieldValue> {
        self.values.get(field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checks every entry names a schema field and carries the field's kind.
    pub fn validate(&self, schema: &StaminaSchema) -> Result<(), ConfigError> {
        for (name, value) in self.iter() {
            let spec = schema
                .get(name)
                .ok_or_else(|| ConfigError::UnknownField(name.to_owned()))?;
            if spec.value_kind() != value.kind() {
                return Err(ConfigError::FieldKindMismatch {
                    field: name.to_owned(),
                    expected: spec.value_kind(),
                    found: value.kind(),
                });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FixedValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (field, value) in iter {
            values.insert(field, value);
        }
        values
    }
}

/// Configuration for one activation. Immutable while the pass runs.
#[derive(Clone, Debug, PartialEq)]
pub struct StaminaConfig {
    /// When false the pass writes nothing.
    pub enabled: bool,
    /// Emit a notification for every field whose value changes.
    pub debug: bool,
    pub adjustment: Adjustment,
}

impl StaminaConfig {
    pub fn new(adjustment: Adjustment) -> Self {
        Self {
            enabled: true,
            debug: false,
            adjustment,
        }
    }

    pub fn unlimited() -> Self {
        Self::new(Adjustment::Unlimited)
    }

    pub fn percent(percent: f64) -> Self {
        Self::new(Adjustment::Percent(percent))
    }

    pub fn fixed(values: FixedValues) -> Self {
        Self::new(Adjustment::Fixed(values))
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Checks the adjustment payload against `schema`.
    pub fn validate(&self, schema: &StaminaSchema) -> Result<(), ConfigError> {
        match &self.adjustment {
            Adjustment::Unlimited => Ok(()),
            Adjustment::Percent(percent) if percent.is_finite() => Ok(()),
            Adjustment::Percent(percent) => Err(ConfigError::InvalidPercent(*percent)),
            Adjustment::Fixed(values) => values.validate(schema),
        }
    }
}

/// Errors raised while turning user configuration into a [`StaminaConfig`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown adjustment method '{0}' (expected unlimited, percent or fixed)")]
    UnknownAdjustmentMethod(String),

    #[error("percentage {0} is not a finite number")]
    InvalidPercent(f64),

    #[error("fixed value for unknown stamina field '{0}'")]
    UnknownField(String),

    #[error("fixed value for '{0}' must be a number, a flag or an {{x, y, z}} object")]
    InvalidFixedValue(String),

    #[error("fixed value for '{field}' must be a {expected}, found a {found}")]
    FieldKindMismatch {
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },
}
