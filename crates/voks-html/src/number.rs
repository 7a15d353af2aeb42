//! Decimal text for numeric template values
//!
//! Integers print as they are. Floats print like JavaScript's
//! `Number.prototype.toString`: integral values lose their fraction, `-0`
//! prints as `0`, and only magnitudes below `1e-6` or from `1e21` up switch to
//! exponent notation.

use serde_json::Number;

/// Formats a JSON number as decimal text
///
/// # Examples
///
/// ```
/// use serde_json::Number;
/// use voks_html::format_number;
///
/// assert_eq!(format_number(&Number::from(4711)), "4711");
/// assert_eq!(format_number(&Number::from_f64(1.0).unwrap()), "1");
/// ```
pub fn format_number(n: &Number) -> String {
	match n.as_f64() {
		Some(f) if n.is_f64() => format_float(f),
		_ => n.to_string(),
	}
}

/// Formats a float as decimal text
///
/// # Examples
///
/// ```
/// use voks_html::format_float;
///
/// assert_eq!(format_float(100.0), "100");
/// assert_eq!(format_float(-0.0), "0");
/// assert_eq!(format_float(1e21), "1e+21");
/// ```
pub fn format_float(f: f64) -> String {
	if f == 0.0 {
		return "0".to_owned();
	}
	if f.is_nan() {
		return "NaN".to_owned();
	}
	if f.is_infinite() {
		return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
	}

	if (1e-6..1e21).contains(&f.abs()) {
		return f.to_string();
	}

	let exponent = format!("{f:e}");
	match exponent.split_once('e') {
		Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
		_ => exponent,
	}
}
