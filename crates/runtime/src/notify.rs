//! Notification sink backed by `tracing`.

use stamina_core::{AdjustmentEvent, MOD_NAME, NotificationLevel, NotificationSink, Tint};

/// Forwards adjustment notifications to the active `tracing` subscriber.
///
/// Per-field changes go to `debug`, cyan highlights to `info` and red
/// highlights to `warn`. The colour travels as the `tint` field.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, event: AdjustmentEvent) {
        match event.level() {
            NotificationLevel::Debug => {
                tracing::debug!(target: "custom_stamina", module = MOD_NAME, "{}", event);
            }
            NotificationLevel::Highlight(tint @ Tint::Cyan) => {
                tracing::info!(target: "custom_stamina", tint = %tint, "{}", event);
            }
            NotificationLevel::Highlight(tint @ Tint::Red) => {
                tracing::warn!(target: "custom_stamina", tint = %tint, "{}", event);
            }
        }
    }
}
