// Formatter - Unit scaling for report figures, printed the way the report pages print them

use crate::domain::measurement::{MeasurementValue, UnitKind};
use crate::error::Result;

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;
const PIB: f64 = TIB * 1024.0;

/// (threshold and divisor, suffix), largest unit first.
const SIZE_LADDER: &[(f64, &str)] = &[
    (PIB, "PiB"),
    (TIB, "TiB"),
    (GIB, "GiB"),
    (MIB, "MiB"),
    (KIB, "KiB"),
];

const DURATION_LADDER: &[(f64, &str)] = &[(1e3, "sec")];

const COUNT_LADDER: &[(f64, &str)] = &[
    (1e15, "P"),
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "K"),
];

/// Digits needed to print any f64 without rounding.
const EXACT_DIGITS: usize = 1074;

/// Magnitudes from here up print in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;
/// Non-zero magnitudes below this print in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Scale `value` according to `kind`.
///
/// Fails for negative and non-finite values.
pub fn format(value: f64, kind: UnitKind) -> Result<String> {
    MeasurementValue::new(value, kind).map(|m| format_measurement(&m))
}

pub fn format_measurement(measurement: &MeasurementValue) -> String {
    let value = measurement.value();
    match measurement.kind() {
        UnitKind::Size => scale(value, SIZE_LADDER, 2)
            .unwrap_or_else(|| format!("{} B", number_to_string(value))),
        UnitKind::Duration => scale(value, DURATION_LADDER, 3)
            .unwrap_or_else(|| format!("{} ms", number_to_string(value))),
        UnitKind::Count => {
            scale(value, COUNT_LADDER, 2).unwrap_or_else(|| number_to_string(value))
        }
    }
}

fn scale(value: f64, ladder: &[(f64, &str)], decimals: usize) -> Option<String> {
    ladder
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(divisor, suffix)| format!("{} {}", to_fixed(value / divisor, decimals), suffix))
}

/// Fixed-point rendering with `decimals` digits after the point.
///
/// Rounds the exact binary value half-up, so `1.125` gives `"1.13"` where
/// `format!("{:.2}")` would give `"1.12"`. Magnitudes of 1e21 and up fall
/// back to [`number_to_string`], as `Number.prototype.toFixed` does.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.abs() >= EXPONENT_ABOVE {
        return number_to_string(value);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    if frac_part.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|d| char::from(*d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|d| char::from(*d)));
    }
    out
}

/// Round to the nearest integer, halves going towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    // -0 prints as "0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Shortest round-trip rendering, without a trailing `.0` on integers.
///
/// Very large and very small magnitudes use the exponent form
/// (`1e+21`, `1.5e-7`).
pub fn number_to_string(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => scientific,
        }
    } else {
        value.to_string()
    }
}
