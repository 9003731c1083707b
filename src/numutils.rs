//! Scalar helpers like min(), max(), percent_of() that keep NaN visible.
//!
//! `f64::min`/`f64::max` return the non-NaN operand. The calculator instead
//! lets an unparseable input poison every downstream figure, so these helpers
//! return NaN whenever either operand is NaN.

/// Minimum of `a` and `b`, NaN if either is NaN.
pub fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Maximum of `a` and `b`, NaN if either is NaN.
pub fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Returns `value / full_scale * 100`, capped at 100.
///
/// Negative values are not floored; a negative input gives a negative fill.
pub fn percent_of(value: f64, full_scale: f64) -> f64 {
    min(value / full_scale * 100.0, 100.0)
}

/// Checks if two scalars are almost equal.
pub fn almost_equal(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// Shortest text form of a number, as used in labels and SVG attributes.
///
/// Integral values print without a fraction (`30`, not `30.0`), negative
/// zero prints as `0` and infinities print as `Infinity`/`-Infinity`.
pub fn format_number(x: f64) -> String {
    if x == 0.0 {
        "0".to_string()
    } else if x == f64::INFINITY {
        "Infinity".to_string()
    } else if x == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{x}")
    }
}

/// Lenient number parsing for raw control values.
///
/// Leading whitespace is skipped and the longest numeric prefix is accepted
/// (`"12.5 m/s"` parses as 12.5). Anything without a numeric prefix is NaN.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut n_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        n_digits += frac_end - frac_start;
        if n_digits > 0 {
            end = frac_end;
        }
    }
    if n_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Serde adapter for `f64` fields that may hold NaN or an infinity.
///
/// JSON has no literal for them and `serde_json` would write `null`, which
/// does not read back as `f64`. Finite values stay plain numbers; non-finite
/// values are written as the strings `"NaN"`, `"Infinity"` or `"-Infinity"`.
///
/// Use with `#[serde(with = "crate::numutils::nonfinite")]`.
pub mod nonfinite {
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::format_number;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&format_number(*value))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(v),
            Repr::Text(s) => match s.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::custom(format!(
                    "expected a number, \"NaN\" or \"Infinity\", got \"{other}\""
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        assert_eq!(min(1.0, 3.0), 1.0);
        assert_eq!(max(-5.0, -1.0), -1.0);
        assert!(min(f64::NAN, 100.0).is_nan());
        assert!(max(1.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_percent_of() {
        assert!(almost_equal(percent_of(1500.0, 3000.0), 50.0, 1e-12));
        assert_eq!(percent_of(3000.0, 3000.0), 100.0);
        assert_eq!(percent_of(9000.0, 3000.0), 100.0);
        assert!(percent_of(f64::NAN, 3000.0).is_nan());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(22.5), "22.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-12.25), "-12.25");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float("30"), 30.0);
        assert_eq!(parse_float("1.225"), 1.225);
        assert_eq!(parse_float("  -2.5"), -2.5);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("12.5 m/s"), 12.5);
        assert_eq!(parse_float("3e"), 3.0);
        assert_eq!(parse_float("7.2.1"), 7.2);
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct Sample {
        #[serde(with = "nonfinite")]
        value: f64,
    }

    #[test]
    fn test_nonfinite_serde() {
        let json = serde_json::to_string(&Sample { value: f64::NAN }).unwrap();
        assert_eq!(json, r#"{"value":"NaN"}"#);
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert!(back.value.is_nan());

        let json = serde_json::to_string(&Sample { value: f64::NEG_INFINITY }).unwrap();
        assert_eq!(json, r#"{"value":"-Infinity"}"#);

        let plain: Sample = serde_json::from_str(r#"{"value":1.5}"#).unwrap();
        assert_eq!(plain.value, 1.5);
        assert!(serde_json::from_str::<Sample>(r#"{"value":"fast"}"#).is_err());
    }

    #[test]
    fn test_parse_float_garbage() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
    }
}
