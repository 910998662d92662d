use crate::{Error, Result, plural};

const UNITS: [(&str, u64); 5] = [
    ("day", 86_400_000),
    ("hour", 3_600_000),
    ("minute", 60_000),
    ("second", 1_000),
    ("millisecond", 1),
];

const DEFAULT_PARTS: usize = 2;

/// Describes a number of seconds in words, using at most two units.
///
/// Equivalent to [`time_string_with(seconds, 2)`][time_string_with].
///
/// # Errors
///
/// Returns [`Error::InvalidTime`] if `seconds` is negative, infinite or NaN.
pub fn time_string(seconds: f64) -> Result<String> {
    time_string_with(seconds, DEFAULT_PARTS)
}

/// Describes a number of seconds in words, using at most `parts` units.
///
/// Units are days, hours, minutes, seconds and milliseconds. Units with a zero count are left
/// out and the last unit shown is rounded. A `parts` of zero is treated as one.
///
/// ```rust
/// use tiny_text::{time_string, time_string_with};
///
/// assert_eq!(time_string(180.02)?, "3 minutes, 20 milliseconds");
/// assert_eq!(time_string(3609.732)?, "1 hour, 10 seconds");
/// assert_eq!(time_string_with(3609.732, 3)?, "1 hour, 9 seconds, 732 milliseconds");
/// assert_eq!(time_string_with(3609.732, 1)?, "1 hour");
/// # Ok::<(), tiny_text::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidTime`] if `seconds` is negative, infinite or NaN.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "validated finite and non-negative, saturates far beyond any real span"
)]
pub fn time_string_with(seconds: f64, parts: usize) -> Result<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(Error::InvalidTime { seconds });
    }

    let parts = parts.max(1);
    let mut millis = (seconds * 1000.0).round() as u64;

    loop {
        let shown = split(millis);

        // Round away everything below the last unit that fits; carries may change the
        // breakdown, so go around again.
        match shown.iter().take(parts).last() {
            Some(last) if shown.len() > parts => millis = round_to(millis, last.unit),
            _ => return Ok(describe(&shown)),
        }
    }
}

/// One unit of a time span with a nonzero count.
#[derive(Debug, Eq, PartialEq)]
struct Part {
    name: &'static str,
    unit: u64,
    count: u64,
}

fn split(millis: u64) -> Vec<Part> {
    let mut remaining = millis;

    UNITS
        .into_iter()
        .filter_map(|(name, unit)| {
            let count = remaining.checked_div(unit).unwrap_or_default();
            remaining = remaining.checked_rem(unit).unwrap_or(remaining);

            (count > 0).then_some(Part { name, unit, count })
        })
        .collect()
}

fn round_to(millis: u64, unit: u64) -> u64 {
    let half = unit.checked_div(2).unwrap_or_default();

    millis
        .saturating_add(half)
        .checked_div(unit)
        .map_or(millis, |whole| whole.saturating_mul(unit))
}

fn describe(shown: &[Part]) -> String {
    if shown.is_empty() {
        return "0 milliseconds".to_string();
    }

    shown
        .iter()
        .map(|part| format!("{} {}", part.count, plural(part.count, part.name)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn two_parts_by_default() {
        assert_eq!(time_string(180.02).unwrap(), "3 minutes, 20 milliseconds");
        assert_eq!(time_string(3609.732).unwrap(), "1 hour, 10 seconds");
    }

    #[test]
    fn more_parts_show_more_detail() {
        assert_eq!(
            time_string_with(3609.732, 3).unwrap(),
            "1 hour, 9 seconds, 732 milliseconds"
        );
        assert_eq!(time_string_with(3609.732, 1).unwrap(), "1 hour");
    }

    #[test]
    fn singular_units() {
        assert_eq!(time_string(1.001).unwrap(), "1 second, 1 millisecond");
        assert_eq!(time_string(86_400.0).unwrap(), "1 day");
    }

    #[test]
    fn zero() {
        assert_eq!(time_string(0.0).unwrap(), "0 milliseconds");
        assert_eq!(time_string(0.0004).unwrap(), "0 milliseconds");
    }

    #[test]
    fn rounding_carries_into_higher_units() {
        // 59 minutes 59.6 seconds rounds up to a full hour.
        assert_eq!(time_string_with(3599.6, 1).unwrap(), "1 hour");
        assert_eq!(time_string(3599.6).unwrap(), "1 hour");
        assert_eq!(
            time_string_with(3599.6, 3).unwrap(),
            "59 minutes, 59 seconds, 600 milliseconds"
        );
    }

    #[test]
    fn split_skips_empty_units() {
        let parts = split(3_600_001);

        assert_eq!(
            parts,
            [
                Part {
                    name: "hour",
                    unit: 3_600_000,
                    count: 1
                },
                Part {
                    name: "millisecond",
                    unit: 1,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn round_to_nearest_unit() {
        assert_eq!(round_to(1_499, 1_000), 1_000);
        assert_eq!(round_to(1_500, 1_000), 2_000);
        assert_eq!(round_to(u64::MAX, 1_000), u64::MAX / 1_000 * 1_000);
    }

    #[test]
    fn zero_parts_means_one() {
        assert_eq!(time_string_with(3609.732, 0).unwrap(), "1 hour");
    }

    #[test]
    fn rejects_invalid_input() {
        for seconds in [-0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                time_string(seconds),
                Err(Error::InvalidTime { .. })
            ));
        }
    }
}
