#![cfg(feature = "dev")]
//! Tests for the numeric view of items.
//!
//! ## Test Organization
//!
//! 1. **Conversion** - lenient parse and strict numeric value
//! 2. **Aggregates** - mean, min, max

use approx::assert_relative_eq;

use listing::internals::math::numeric::{max, mean, min, numeric_value, parse};

// ============================================================================
// Conversion Tests
// ============================================================================

/// Test lenient parsing.
///
/// Verifies trimming, empty items, and unparsable items.
#[test]
fn test_parse() {
    assert_relative_eq!(parse::<f64>("42"), 42.0);
    assert_relative_eq!(parse::<f64>(" -1.25 "), -1.25);
    assert_relative_eq!(parse::<f32>("3"), 3.0);
    assert_relative_eq!(parse::<f64>(""), 0.0);
    assert_relative_eq!(parse::<f64>("   "), 0.0);
    assert!(parse::<f64>("abc").is_nan());
}

/// Test strict numeric values.
///
/// Verifies empty and non-numeric items have no value.
#[test]
fn test_numeric_value() {
    assert_eq!(numeric_value("10"), Some(10.0));
    assert_eq!(numeric_value(" 2.5"), Some(2.5));
    assert_eq!(numeric_value(""), None);
    assert_eq!(numeric_value("ten"), None);
    assert_eq!(numeric_value("NaN"), None);
}

/// Test alphabetic float spellings.
///
/// Verifies only the signed or unsigned spelling `Infinity` is numeric.
#[test]
fn test_special_float_words() {
    for word in ["inf", "INF", "-inf", "infinity", "nan", "+NaN"] {
        assert_eq!(numeric_value(word), None, "{word} should not be numeric");
        assert!(parse::<f64>(word).is_nan(), "{word} should parse to NaN");
    }

    assert_eq!(numeric_value("Infinity"), Some(f64::INFINITY));
    assert_eq!(numeric_value("-Infinity"), Some(f64::NEG_INFINITY));
    assert_eq!(parse::<f64>("+Infinity"), f64::INFINITY);
    assert_relative_eq!(parse::<f64>("1e3"), 1000.0);
}

// ============================================================================
// Aggregate Tests
// ============================================================================

/// Test the arithmetic mean.
#[test]
fn test_mean() {
    assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    assert_relative_eq!(mean(&[7.0f32]).unwrap(), 7.0);
    assert_eq!(mean::<f64>(&[]), None);
}

/// Test extreme values.
#[test]
fn test_min_max() {
    let values = [3.0, -1.0, 8.5, 0.0];
    assert_relative_eq!(min(&values).unwrap(), -1.0);
    assert_relative_eq!(max(&values).unwrap(), 8.5);
    assert_eq!(min::<f64>(&[]), None);
}

/// Test NaN handling in extremes.
///
/// Verifies NaN values are skipped by min and max.
#[test]
fn test_min_max_ignore_nan() {
    let values = [f64::NAN, 2.0, 5.0];
    assert_relative_eq!(min(&values).unwrap(), 2.0);
    assert_relative_eq!(max(&values).unwrap(), 5.0);
}
