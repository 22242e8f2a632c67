//! Notifications emitted by the adjustment pass.
//!
//! The transformer reports what it did through a [`NotificationSink`]. Each
//! event knows its own rendering and category; how the host displays or
//! persists it is up to the sink.

use core::fmt;

use crate::config::AdjustmentMethod;
use crate::value::FieldValue;

/// Prefix the host uses to attribute log lines to this mod.
pub const MOD_NAME: &str = "CustomStamina";

/// Highlight colour for notifications the host should make stand out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Tint {
    Red,
    Cyan,
}

/// Category of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    /// Verbose detail, only produced when debug output is enabled.
    Debug,
    /// Always shown, rendered in the given colour.
    Highlight(Tint),
}

/// Something the adjustment pass wants the host to know about.
#[derive(Clone, Debug, PartialEq)]
pub enum AdjustmentEvent {
    /// The mod is disabled; nothing was written.
    Disabled,

    /// A field changed value.
    FieldAdjusted {
        field: &'static str,
        from: FieldValue,
        to: FieldValue,
    },

    /// The pass finished. `percent` is set for percent mode only.
    Completed {
        method: AdjustmentMethod,
        percent: Option<f64>,
    },
}

impl AdjustmentEvent {
    pub fn level(&self) -> NotificationLevel {
        match self {
            Self::Disabled => NotificationLevel::Highlight(Tint::Red),
            Self::FieldAdjusted { .. } => NotificationLevel::Debug,
            Self::Completed { .. } => NotificationLevel::Highlight(Tint::Cyan),
        }
    }
}

impl fmt::Display for AdjustmentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "{MOD_NAME} is disabled in the config file."),
            Self::FieldAdjusted { field, from, to } => {
                write!(f, "{MOD_NAME}: {field} adjusted from {from} to {to}.")
            }
            Self::Completed {
                method: AdjustmentMethod::Unlimited,
                ..
            } => write!(
                f,
                "{MOD_NAME}: All breath, leg, and hand stamina settings have been set to unlimited."
            ),
            Self::Completed {
                method: AdjustmentMethod::Percent,
                percent,
            } => {
                let percent = percent.unwrap_or_default();
                let sign = if percent > 0.0 { "+" } else { "" };
                write!(
                    f,
                    "{MOD_NAME}: All breath, leg, and hand stamina settings have been adjusted by {sign}{percent}%."
                )
            }
            Self::Completed {
                method: AdjustmentMethod::Fixed,
                ..
            } => write!(
                f,
                "{MOD_NAME}: Breath, leg, and hand stamina has been manually adjusted."
            ),
        }
    }
}

/// Receiver for adjustment notifications.
pub trait NotificationSink {
    fn notify(&mut self, event: AdjustmentEvent);
}

/// Collects events in order, mostly for inspection after a pass.
impl NotificationSink for Vec<AdjustmentEvent> {
    fn notify(&mut self, event: AdjustmentEvent) {
        self.push(event);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, event: AdjustmentEvent) {
        (**self).notify(event);
    }
}
