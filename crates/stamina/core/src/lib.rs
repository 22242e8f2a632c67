//! Stamina adjustment logic shared by every host integration.
//!
//! `stamina-core` owns the pieces with actual computational content: the
//! declarative field [`schema`], the per-field adjustment [`policy`], and the
//! [`transform`] pass that walks the schema and rewrites a host-owned
//! [`StaminaTable`]. It performs no I/O; configuration loading and the host
//! table itself live in other crates and reach this one through
//! [`StaminaConfig`], [`StaminaTable`] and [`NotificationSink`].
pub mod config;
pub mod event;
pub mod policy;
pub mod schema;
pub mod table;
pub mod transform;
pub mod value;

pub use config::{Adjustment, AdjustmentMethod, ConfigError, FixedValues, StaminaConfig};
pub use event::{AdjustmentEvent, MOD_NAME, NotificationLevel, NotificationSink, Tint};
pub use policy::{adjust_field, calculate_relative_percentage};
pub use schema::{Direction, FieldKind, FieldSpec, STAMINA_FIELDS, StaminaSchema};
pub use table::{StaminaParameters, StaminaTable, TableError, Vector2, Vector3};
pub use transform::{
    AdjustmentReport, AdjustmentStatus, SkipReason, SkippedField, apply_stamina_adjustment,
    apply_with_schema,
};
pub use value::{FieldValue, ValueKind};
