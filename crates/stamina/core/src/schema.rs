//! Declarative description of the stamina fields the mod rewrites.
//!
//! Every adjustable field is listed once in [`STAMINA_FIELDS`] together with
//! its semantic type, the direction a positive percentage moves it, and the
//! constant it takes in unlimited mode. The transformer walks this table
//! instead of handling each field by hand.

use crate::value::{FieldValue, ValueKind};

/// Value written to drain/consumption fields in unlimited mode.
pub const UNLIMITED_DRAIN: f64 = 0.0;

/// Value written to capacity/restoration fields in unlimited mode.
pub const UNLIMITED_CAPACITY: f64 = 500.0;

/// Which way a positive user percentage moves a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Capacity and restoration fields grow with a positive percentage.
    Increase,
    /// Drain and consumption fields shrink with a positive percentage.
    Decrease,
}

impl Direction {
    /// Returns the signed percentage to hand to the percentage helper.
    pub fn apply(self, percent: f64) -> f64 {
        match self {
            Self::Increase => percent,
            Self::Decrease => -percent,
        }
    }
}

/// Semantic type of a schema field plus its unlimited-mode constant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Float { direction: Direction, unlimited: f64 },
    Flag { unlimited: bool },
}

/// One adjustable field of the stamina table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    /// Dotted path inside the stamina table, e.g. `WalkConsumption.x`.
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A drain/consumption field: shrinks with positive percent, zero when unlimited.
    pub const fn drain(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Float {
                direction: Direction::Decrease,
                unlimited: UNLIMITED_DRAIN,
            },
        }
    }

    /// A capacity/restoration field: grows with positive percent, 500 when unlimited.
    pub const fn capacity(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Float {
                direction: Direction::Increase,
                unlimited: UNLIMITED_CAPACITY,
            },
        }
    }

    /// An exhaustion side-effect switch, disabled when unlimited.
    pub const fn exhaustion_flag(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Flag { unlimited: false },
        }
    }

    /// The constant this field takes in unlimited mode.
    pub const fn unlimited_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Float { unlimited, .. } => FieldValue::Float(unlimited),
            FieldKind::Flag { unlimited } => FieldValue::Flag(unlimited),
        }
    }

    pub const fn value_kind(&self) -> ValueKind {
        match self.kind {
            FieldKind::Float { .. } => ValueKind::Float,
            FieldKind::Flag { .. } => ValueKind::Flag,
        }
    }

    /// Percent-mode direction, `None` for flags.
    pub const fn direction(&self) -> Option<Direction> {
        match self.kind {
            FieldKind::Float { direction, .. } => Some(direction),
            FieldKind::Flag { .. } => None,
        }
    }

    /// Top-level table key, e.g. `WalkConsumption` for `WalkConsumption.x`.
    pub fn group(&self) -> &'static str {
        self.name.split('.').next().unwrap_or(self.name)
    }

    /// Vector component (`x`, `y`, `z`) for nested fields.
    pub fn component(&self) -> Option<&'static str> {
        self.name.split_once('.').map(|(_, component)| component)
    }
}

/// Fields adjusted by the mod, in the order they are processed.
pub static STAMINA_FIELDS: [FieldSpec; 31] = [
    FieldSpec::drain("AimConsumptionByPose.x"),
    FieldSpec::drain("AimConsumptionByPose.y"),
    FieldSpec::drain("AimConsumptionByPose.z"),
    FieldSpec::drain("AimDrainRate"),
    FieldSpec::drain("AimRangeFinderDrainRate"),
    FieldSpec::drain("BaseHoldBreathConsumption"),
    FieldSpec::capacity("BaseRestorationRate"),
    FieldSpec::capacity("Capacity"),
    FieldSpec::drain("CrouchConsumption.x"),
    FieldSpec::drain("CrouchConsumption.y"),
    FieldSpec::drain("GrenadeHighThrow"),
    FieldSpec::drain("GrenadeLowThrow"),
    FieldSpec::drain("HoldBreathStaminaMultiplier.x"),
    FieldSpec::drain("HoldBreathStaminaMultiplier.y"),
    FieldSpec::capacity("HandsCapacity"),
    FieldSpec::capacity("HandsRestoration"),
    FieldSpec::drain("JumpConsumption"),
    FieldSpec::capacity("OxygenCapacity"),
    FieldSpec::capacity("OxygenRestoration"),
    FieldSpec::drain("PoseLevelConsumptionPerNotch.x"),
    FieldSpec::drain("PoseLevelConsumptionPerNotch.y"),
    FieldSpec::drain("ProneConsumption"),
    FieldSpec::drain("SitToStandConsumption"),
    FieldSpec::drain("SprintDrainRate"),
    FieldSpec::exhaustion_flag("StaminaExhaustionCausesJiggle"),
    FieldSpec::exhaustion_flag("StaminaExhaustionRocksCamera"),
    FieldSpec::exhaustion_flag("StaminaExhaustionStartsBreathSound"),
    FieldSpec::drain("StandupConsumption.x"),
    FieldSpec::drain("StandupConsumption.y"),
    FieldSpec::drain("WalkConsumption.x"),
    FieldSpec::drain("WalkConsumption.y"),
];

/// Ordered, immutable set of adjustable fields.
#[derive(Clone, Copy, Debug)]
pub struct StaminaSchema {
    fields: &'static [FieldSpec],
}

impl StaminaSchema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// The built-in schema of the host's stamina table.
    pub fn stamina() -> Self {
        Self::new(&STAMINA_FIELDS)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter()
    }

    pub fn get(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for StaminaSchema {
    fn default() -> Self {
        Self::stamina()
    }
}
