//! Host-owned stamina table access.
//!
//! The stamina table belongs to the host. The transformer only ever sees it
//! through [`StaminaTable`] for the duration of one activation, so the same
//! adjustment pass runs against the typed [`StaminaParameters`] record or a
//! view over the host's own document.

use crate::value::{FieldValue, ValueKind};

/// Mutable access to a host stamina table keyed by schema field names.
pub trait StaminaTable {
    /// Returns the current value of `field`, or `None` when the table has no such field.
    fn read(&self, field: &str) -> Option<FieldValue>;

    /// Overwrites `field` with `value`.
    ///
    /// Implementations never create fields: writing a field that does not
    /// exist, or writing a value of the wrong kind, is an error.
    fn write(&mut self, field: &str, value: FieldValue) -> Result<(), TableError>;
}

impl<T: StaminaTable + ?Sized> StaminaTable for &mut T {
    fn read(&self, field: &str) -> Option<FieldValue> {
        (**self).read(field)
    }

    fn write(&mut self, field: &str, value: FieldValue) -> Result<(), TableError> {
        (**self).write(field, value)
    }
}

/// Errors raised when writing into a stamina table.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("stamina table has no field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' holds a {expected} value, refusing to write a {found}")]
    KindMismatch {
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("value {value} cannot be stored in field '{field}'")]
    UnrepresentableValue { field: String, value: f64 },
}

/// Two-component vector parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Three-component vector parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Typed stamina record with the host's field layout.
///
/// Serializes with the host's PascalCase keys so it can be read straight out
/// of a host document. Keys the document lacks default to zero.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase", default))]
pub struct StaminaParameters {
    pub aim_consumption_by_pose: Vector3,
    pub aim_drain_rate: f64,
    pub aim_range_finder_drain_rate: f64,
    pub base_hold_breath_consumption: f64,
    pub base_restoration_rate: f64,
    pub capacity: f64,
    pub crouch_consumption: Vector2,
    pub grenade_high_throw: f64,
    pub grenade_low_throw: f64,
    pub hold_breath_stamina_multiplier: Vector2,
    pub hands_capacity: f64,
    pub hands_restoration: f64,
    pub jump_consumption: f64,
    pub oxygen_capacity: f64,
    pub oxygen_restoration: f64,
    pub pose_level_consumption_per_notch: Vector2,
    pub prone_consumption: f64,
    pub sit_to_stand_consumption: f64,
    pub sprint_drain_rate: f64,
    pub stamina_exhaustion_causes_jiggle: bool,
    pub stamina_exhaustion_rocks_camera: bool,
    pub stamina_exhaustion_starts_breath_sound: bool,
    pub standup_consumption: Vector2,
    pub walk_consumption: Vector2,
}

impl StaminaParameters {
    fn write_error(&self, field: &str, value: FieldValue) -> TableError {
        match self.read(field) {
            Some(current) => TableError::KindMismatch {
                field: field.to_owned(),
                expected: current.kind(),
                found: value.kind(),
            },
            None => TableError::UnknownField(field.to_owned()),
        }
    }
}

/// Maps dotted field names onto struct paths for both directions of access.
macro_rules! stamina_slots {
    (
        floats { $($float_name:literal => $($float_path:ident).+;)* }
        flags { $($flag_name:literal => $($flag_path:ident).+;)* }
    ) => {
        impl StaminaTable for StaminaParameters {
            fn read(&self, field: &str) -> Option<FieldValue> {
                match field {
                    $($float_name => Some(FieldValue::Float(self.$($float_path).+)),)*
                    $($flag_name => Some(FieldValue::Flag(self.$($flag_path).+)),)*
                    _ => None,
                }
            }

            fn write(&mut self, field: &str, value: FieldValue) -> Result<(), TableError> {
                match (field, value) {
                    $(($float_name, FieldValue::Float(v)) => self.$($float_path).+ = v,)*
                    $(($flag_name, FieldValue::Flag(v)) => self.$($flag_path).+ = v,)*
                    _ => return Err(self.write_error(field, value)),
                }
                Ok(())
            }
        }
    };
}

stamina_slots! {
    floats {
        "AimConsumptionByPose.x" => aim_consumption_by_pose.x;
        "AimConsumptionByPose.y" => aim_consumption_by_pose.y;
        "AimConsumptionByPose.z" => aim_consumption_by_pose.z;
        "AimDrainRate" => aim_drain_rate;
        "AimRangeFinderDrainRate" => aim_range_finder_drain_rate;
        "BaseHoldBreathConsumption" => base_hold_breath_consumption;
        "BaseRestorationRate" => base_restoration_rate;
        "Capacity" => capacity;
        "CrouchConsumption.x" => crouch_consumption.x;
        "CrouchConsumption.y" => crouch_consumption.y;
        "GrenadeHighThrow" => grenade_high_throw;
        "GrenadeLowThrow" => grenade_low_throw;
        "HoldBreathStaminaMultiplier.x" => hold_breath_stamina_multiplier.x;
        "HoldBreathStaminaMultiplier.y" => hold_breath_stamina_multiplier.y;
        "HandsCapacity" => hands_capacity;
        "HandsRestoration" => hands_restoration;
        "JumpConsumption" => jump_consumption;
        "OxygenCapacity" => oxygen_capacity;
        "OxygenRestoration" => oxygen_restoration;
        "PoseLevelConsumptionPerNotch.x" => pose_level_consumption_per_notch.x;
        "PoseLevelConsumptionPerNotch.y" => pose_level_consumption_per_notch.y;
        "ProneConsumption" => prone_consumption;
        "SitToStandConsumption" => sit_to_stand_consumption;
        "SprintDrainRate" => sprint_drain_rate;
        "StandupConsumption.x" => standup_consumption.x;
        "StandupConsumption.y" => standup_consumption.y;
        "WalkConsumption.x" => walk_consumption.x;
        "WalkConsumption.y" => walk_consumption.y;
    }
    flags {
        "StaminaExhaustionCausesJiggle" => stamina_exhaustion_causes_jiggle;
        "StaminaExhaustionRocksCamera" => stamina_exhaustion_rocks_camera;
        "StaminaExhaustionStartsBreathSound" => stamina_exhaustion_starts_breath_sound;
    }
}
