//! Table transformer: one adjustment pass over the stamina table.

use crate::config::{Adjustment, AdjustmentMethod, StaminaConfig};
use crate::event::{AdjustmentEvent, NotificationSink};
use crate::policy::adjust_field;
use crate::schema::StaminaSchema;
use crate::table::{StaminaTable, TableError};

/// Outcome of an activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdjustmentStatus {
    /// Configuration disabled the mod; the table was not touched.
    Disabled,
    /// The pass ran with the given method.
    Applied(AdjustmentMethod),
}

/// Why a schema field was not written.
#[derive(Clone, Debug, PartialEq)]
pub enum SkipReason {
    /// The host table has no such field.
    Missing,
    /// The active method does not adjust this field.
    NotAdjusted,
    /// The table refused the write.
    Rejected(TableError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkippedField {
    pub field: &'static str,
    pub reason: SkipReason,
}

/// Summary of one pass, returned to the host once the pass completes.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjustmentReport {
    pub status: AdjustmentStatus,
    /// Fields whose value differs after the pass.
    pub changed: usize,
    /// Fields written, changed or not.
    pub written: usize,
    pub skipped: Vec<SkippedField>,
}

impl AdjustmentReport {
    fn disabled() -> Self {
        Self::new(AdjustmentStatus::Disabled)
    }

    fn new(status: AdjustmentStatus) -> Self {
        Self {
            status,
            changed: 0,
            written: 0,
            skipped: Vec::new(),
        }
    }

    fn skip(&mut self, field: &'static str, reason: SkipReason) {
        self.skipped.push(SkippedField { field, reason });
    }

    pub fn is_disabled(&self) -> bool {
        self.status == AdjustmentStatus::Disabled
    }
}

/// Applies `config` to `table` using the built-in stamina schema.
///
/// See [`apply_with_schema`].
pub fn apply_stamina_adjustment<T, S>(
    config: &StaminaConfig,
    table: &mut T,
    sink: &mut S,
) -> AdjustmentReport
where
    T: StaminaTable + ?Sized,
    S: NotificationSink + ?Sized,
{
    apply_with_schema(config, &StaminaSchema::stamina(), table, sink)
}

/// Runs one adjustment pass over every field of `schema`, in schema order.
///
/// - A disabled config emits a single [`AdjustmentEvent::Disabled`] and
///   returns without touching the table.
/// - Otherwise every field the active method adjusts is written back, even
///   when its value is unchanged. With `debug` set, each changed field emits
///   [`AdjustmentEvent::FieldAdjusted`].
/// - The pass always ends with exactly one [`AdjustmentEvent::Completed`].
///
/// Individual fields never abort the pass: missing fields and rejected
/// writes are recorded in the report and the next field is processed.
pub fn apply_with_schema<T, S>(
    config: &StaminaConfig,
    schema: &StaminaSchema,
    table: &mut T,
    sink: &mut S,
) -> AdjustmentReport
where
    T: StaminaTable + ?Sized,
    S: NotificationSink + ?Sized,
{
    if !config.enabled {
        sink.notify(AdjustmentEvent::Disabled);
        return AdjustmentReport::disabled();
    }

    let method = config.adjustment.method();
    let mut report = AdjustmentReport::new(AdjustmentStatus::Applied(method));

    for field in schema.iter() {
        let Some(current) = table.read(field.name) else {
            report.skip(field.name, SkipReason::Missing);
            continue;
        };
        let Some(next) = adjust_field(&config.adjustment, field, current) else {
            report.skip(field.name, SkipReason::NotAdjusted);
            continue;
        };

        if let Err(err) = table.write(field.name, next) {
            report.skip(field.name, SkipReason::Rejected(err));
            continue;
        }
        report.written += 1;

        if next != current {
            report.changed += 1;
            if config.debug {
                sink.notify(AdjustmentEvent::FieldAdjusted {
                    field: field.name,
                    from: current,
                    to: next,
                });
            }
        }
    }

    let percent = match config.adjustment {
        Adjustment::Percent(percent) => Some(percent),
        Adjustment::Unlimited | Adjustment::Fixed(_) => None,
    };
    sink.notify(AdjustmentEvent::Completed { method, percent });

    report
}
