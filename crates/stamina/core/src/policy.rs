//! Field adjustment policy.
//!
//! Pure functions that decide the new value of a single field. Nothing here
//! reads or writes the host table.

use crate::config::Adjustment;
use crate::schema::{FieldKind, FieldSpec};
use crate::value::FieldValue;

/// Number of decimal places kept after a percentage adjustment.
pub const DECIMAL_PLACES: i32 = 4;

/// Applies a signed percentage to `value`.
///
/// A non-negative `percentage` raises the value by `|percentage|`% of itself,
/// a negative one lowers it by the same share. The result is rounded to four
/// decimal places and floored at zero.
///
/// ```
/// use stamina_core::calculate_relative_percentage;
///
/// assert_eq!(calculate_relative_percentage(50.0, 0.5), 0.75);
/// assert_eq!(calculate_relative_percentage(-50.0, 0.5), 0.25);
/// ```
pub fn calculate_relative_percentage(percentage: f64, value: f64) -> f64 {
    let increase = percentage >= 0.0;
    let difference = (percentage.abs() / 100.0) * value;
    let adjusted = if increase {
        value + difference
    } else {
        value - difference
    };

    let rounded = round_to_places(adjusted, DECIMAL_PLACES);
    // NaN fails the comparison and is floored too.
    if rounded > 0.0 { rounded } else { 0.0 }
}

fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Computes the new value of `field` under `adjustment`.
///
/// Returns `None` when the field is not adjusted in this mode: flags in
/// percent mode, fields without a fixed value, and fixed or current values of
/// the wrong kind. The caller leaves such fields untouched.
pub fn adjust_field(
    adjustment: &Adjustment,
    field: &FieldSpec,
    current: FieldValue,
) -> Option<FieldValue> {
    match adjustment {
        Adjustment::Unlimited => Some(field.unlimited_value()),
        Adjustment::Percent(percent) => match (field.kind, current) {
            (FieldKind::Float { direction, .. }, FieldValue::Float(value)) => Some(
                FieldValue::Float(calculate_relative_percentage(direction.apply(*percent), value)),
            ),
            _ => None,
        },
        Adjustment::Fixed(values) => values
            .get(field.name)
            .filter(|value| value.kind() == field.value_kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FixedValues;
    use crate::schema::StaminaSchema;

    fn spec(name: &str) -> &'static FieldSpec {
        StaminaSchema::stamina().get(name).unwrap()
    }

    fn has_at_most_four_decimals(value: f64) -> bool {
        let scaled = value * 10_000.0;
        (scaled - scaled.round()).abs() < 1e-6
    }

    #[test]
    fn never_negative() {
        let percentages = [-250.0, -100.0, -99.99, -50.0, -0.5, 0.0, 0.5, 50.0, 250.0];
        let values = [0.0, 0.00001, 0.3, 1.0, 14.0, 110.0, 12_345.678];
        for p in percentages {
            for v in values {
                let result = calculate_relative_percentage(p, v);
                assert!(result >= 0.0, "p={p} v={v} -> {result}");
            }
        }
    }

    #[test]
    fn zero_percent_only_rounds() {
        assert_eq!(calculate_relative_percentage(0.0, 4.5), 4.5);
        assert_eq!(calculate_relative_percentage(0.0, 1.23456), 1.2346);
        assert_eq!(calculate_relative_percentage(-0.0, 0.123449), 0.1234);
    }

    #[test]
    fn zero_value_stays_zero() {
        for p in [-100.0, -1.0, 0.0, 1.0, 100.0, 1_000.0] {
            assert_eq!(calculate_relative_percentage(p, 0.0), 0.0);
        }
    }

    #[test]
    fn rounds_to_four_decimal_places() {
        let result = calculate_relative_percentage(50.0, 1.00005);
        assert!(has_at_most_four_decimals(result), "{result}");
        assert!((result - 1.5001).abs() < 1e-12, "{result}");
    }

    #[test]
    fn sign_selects_direction() {
        assert_eq!(calculate_relative_percentage(50.0, 100.0), 150.0);
        assert_eq!(calculate_relative_percentage(-50.0, 100.0), 50.0);
        assert_eq!(calculate_relative_percentage(20.0, 10.0), 12.0);
        assert_eq!(calculate_relative_percentage(-20.0, 10.0), 8.0);
    }

    #[test]
    fn large_decrease_clamps_to_zero() {
        assert_eq!(calculate_relative_percentage(-150.0, 10.0), 0.0);
        assert_eq!(calculate_relative_percentage(-100.0, 10.0), 0.0);
    }

    #[test]
    fn percent_mode_follows_field_direction() {
        let adjustment = Adjustment::Percent(50.0);

        let capacity = adjust_field(&adjustment, spec("Capacity"), FieldValue::Float(100.0));
        assert_eq!(capacity, Some(FieldValue::Float(150.0)));

        let sprint = adjust_field(
            &adjustment,
            spec("SprintDrainRate"),
            FieldValue::Float(10.0),
        );
        assert_eq!(sprint, Some(FieldValue::Float(5.0)));
    }

    #[test]
    fn percent_mode_leaves_flags_alone() {
        let result = adjust_field(
            &Adjustment::Percent(50.0),
            spec("StaminaExhaustionCausesJiggle"),
            FieldValue::Flag(true),
        );
        assert_eq!(result, None);
    }

    #[test]
    fn unlimited_mode_ignores_current_value() {
        let adjustment = Adjustment::Unlimited;
        assert_eq!(
            adjust_field(&adjustment, spec("JumpConsumption"), FieldValue::Float(14.0)),
            Some(FieldValue::Float(0.0))
        );
        assert_eq!(
            adjust_field(&adjustment, spec("OxygenCapacity"), FieldValue::Float(350.0)),
            Some(FieldValue::Float(500.0))
        );
        assert_eq!(
            adjust_field(
                &adjustment,
                spec("StaminaExhaustionRocksCamera"),
                FieldValue::Flag(true)
            ),
            Some(FieldValue::Flag(false))
        );
    }

    #[test]
    fn fixed_mode_returns_literal_or_nothing() {
        let adjustment = Adjustment::Fixed(
            FixedValues::new()
                .with("JumpConsumption", 3.0)
                .with("StaminaExhaustionCausesJiggle", false)
                .with("Capacity", true),
        );

        assert_eq!(
            adjust_field(&adjustment, spec("JumpConsumption"), FieldValue::Float(5.0)),
            Some(FieldValue::Float(3.0))
        );
        assert_eq!(
            adjust_field(
                &adjustment,
                spec("StaminaExhaustionCausesJiggle"),
                FieldValue::Flag(true)
            ),
            Some(FieldValue::Flag(false))
        );
        // Missing entry
        assert_eq!(
            adjust_field(&adjustment, spec("SprintDrainRate"), FieldValue::Float(4.3)),
            None
        );
        // Wrong kind
        assert_eq!(
            adjust_field(&adjustment, spec("Capacity"), FieldValue::Float(110.0)),
            None
        );
    }
}
