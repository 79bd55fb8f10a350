//! Tests for the functional adapter.
//!
//! These tests verify the free-function calling convention:
//! - Reads return owned values or `None`
//! - Transformations return new strings and keep the input's delimiter
//! - Delimiters are inferred from the classic set only
//!
//! ## Test Organization
//!
//! 1. **Reads** - length, items, positions, searches, counts
//! 2. **Numeric** - avg, min, max
//! 3. **Transformations** - insertions, deletions, ordering, slicing
//! 4. **Delimiters** - change_delims
//! 5. **Word Replacement** - replace, replace_no_case

use approx::assert_relative_eq;

use listing::functional;
use listing::ListingError;

// ============================================================================
// Read Tests
// ============================================================================

/// Test item counting.
///
/// Verifies classic inference leaves `- _ .` inside items.
#[test]
fn test_len() {
    assert_eq!(functional::len("1;2;3"), 3);
    assert_eq!(functional::len("1.5-2"), 1);
    assert_eq!(functional::len(""), 0);
}

/// Test conversion to owned items.
///
/// Verifies the split result.
#[test]
fn test_to_array() {
    assert_eq!(functional::to_array("a:b"), vec!["a", "b"]);
    assert!(functional::to_array("").is_empty());
}

/// Test positional reads.
///
/// Verifies first, last, and signed positions.
#[test]
fn test_positional_reads() {
    assert_eq!(functional::first("a,b,c").as_deref(), Some("a"));
    assert_eq!(functional::last("a,b,c").as_deref(), Some("c"));
    assert_eq!(functional::get_at("a,b,c", -2).as_deref(), Some("b"));
    assert_eq!(functional::get_at("a,b,c", 3), None);
    assert_eq!(functional::first(""), None);
}

/// Test searches.
///
/// Verifies exact, substring, and case-insensitive lookups.
#[test]
fn test_searches() {
    let list = "hello,whats,up";
    assert_eq!(functional::index_of(list, "up"), Some(2));
    assert_eq!(functional::index_of(list, "down"), None);
    assert_eq!(functional::contains(list, "hat"), Some(1));
    assert_eq!(functional::contains(list, "ups"), None);
    assert_eq!(functional::contains_no_case(list, "HAT"), Some(1));
    assert!(functional::find(list, "whats"));
    assert!(!functional::find(list, "WHATS"));
    assert!(functional::find_no_case(list, "WHATS"));
}

/// Test value counting.
///
/// Verifies exact and case-insensitive counts.
#[test]
fn test_value_count() {
    assert_eq!(functional::value_count("1,3,3,2,3", "3"), 3);
    assert_eq!(functional::value_count_no_case("a;A;b", "a"), 2);
}

/// Test duplicate detection.
///
/// Verifies first-occurrence order.
#[test]
fn test_get_duplicates() {
    assert_eq!(functional::get_duplicates("1,2,3,2,1,2,4"), "1,2");
    assert_eq!(functional::get_duplicates("1,2,3"), "");
}

/// Test `each`.
///
/// Verifies items and indices are visited in order.
#[test]
fn test_each() {
    let mut seen = Vec::new();
    functional::each("x;y", |item, i| seen.push(format!("{i}:{item}")));
    assert_eq!(seen, vec!["0:x", "1:y"]);
}

// ============================================================================
// Numeric Tests
// ============================================================================

/// Test the formatted mean.
///
/// Verifies two-decimal formatting.
#[test]
fn test_avg() {
    assert_eq!(functional::avg("1,2,3,4").as_deref(), Some("2.50"));
    assert_eq!(functional::avg("1;2").as_deref(), Some("1.50"));
    assert_eq!(functional::avg(""), None);
}

/// Test minimum and maximum.
///
/// Verifies signed and fractional items parse as numbers.
#[test]
fn test_min_max() {
    assert_relative_eq!(functional::min("3,-1.5,2").unwrap(), -1.5);
    assert_relative_eq!(functional::max("3,-1.5,2").unwrap(), 3.0);
    assert_eq!(functional::max(""), None);
}

// ============================================================================
// Transformation Tests
// ============================================================================

/// Test insertions.
///
/// Verifies append, prepend, qualify, and insert_at.
#[test]
fn test_insertions() {
    assert_eq!(functional::append("1,2,3,4", 5), "1,2,3,4,5");
    assert_eq!(functional::prepend("2;3", 1), "1;2;3");
    assert_eq!(functional::qualify("hello,friend", "bye"), "bye,hello,friend,bye");
    assert_eq!(functional::insert_at("1,2,4", 2, 3), "1,2,3,4");
    assert_eq!(functional::append("", "only"), "only");
}

/// Test deletion.
///
/// Verifies out-of-range positions leave the input unchanged.
#[test]
fn test_delete_at() {
    assert_eq!(functional::delete_at("1,2,3", 1), "1,3");
    assert_eq!(functional::delete_at("1,2,3", -1), "1,2");
    assert_eq!(functional::delete_at("1,2,3", 5), "1,2,3");
}

/// Test positional writes.
///
/// Verifies results and errors.
#[test]
fn test_set_at() {
    assert_eq!(functional::set_at("1,2,3", 0, "x"), Ok("x,2,3".to_string()));
    assert_eq!(
        functional::set_at("1,2,3", 3, "x"),
        Err(ListingError::InvalidPosition {
            position: 3,
            len: 3
        })
    );
}

/// Test swapping.
///
/// Verifies results and errors.
#[test]
fn test_swap() {
    assert_eq!(functional::swap("a;b;c", 0, 2), Ok("c;b;a".to_string()));
    assert!(functional::swap("a;b;c", 0, -4).is_err());
}

/// Test ordering transformations.
///
/// Verifies reverse, sort, and remove_duplicates.
#[test]
fn test_ordering() {
    assert_eq!(functional::reverse("1,2,3"), "3,2,1");
    assert_eq!(functional::sort("4;1;3;2"), "1;2;3;4");
    assert_eq!(functional::sort("10,9,1.5"), "1.5,9,10");
    assert_eq!(functional::remove_duplicates("1,1,2,1"), "1,2");
}

/// Test slicing.
///
/// Verifies rest and slice.
#[test]
fn test_slicing() {
    assert_eq!(functional::rest("1,2,3"), "2,3");
    assert_eq!(functional::slice("1,2,3,4", 1, Some(3)), "2,3");
    assert_eq!(functional::slice("1,2,3,4", -1, None), "4");
}

/// Test concatenation.
///
/// Verifies the other list is read with its own delimiter.
#[test]
fn test_concat() {
    assert_eq!(functional::concat("1,2", "3;4"), "1,2,3,4");
    assert_eq!(functional::concat("", "3;4"), "3,4");
}

// ============================================================================
// Delimiter Tests
// ============================================================================

/// Test changing delimiters.
///
/// Verifies inference of the target delimiter from a string.
#[test]
fn test_change_delims() {
    assert_eq!(functional::change_delims("a,b,c", ";"), "a;b;c");
    assert_eq!(functional::change_delims("a;b", "::"), "a:b");
    assert_eq!(functional::change_delims("a;b", "|"), "a,b");
}

/// Test changing delimiters of trivial lists.
///
/// Verifies empty and single-item lists and extended characters inside items.
#[test]
fn test_change_delims_edge_cases() {
    assert_eq!(functional::change_delims("", ";"), "");
    assert_eq!(functional::change_delims("solo", ";"), "solo");
    assert_eq!(functional::change_delims("1.5,-2", ":"), "1.5:-2");
}

// ============================================================================
// Word Replacement Tests
// ============================================================================

/// Test case-sensitive replacement.
///
/// Verifies words are matched whole and by index.
#[test]
fn test_replace() {
    assert_eq!(
        functional::replace("hello i am lars", "i,am,lars", "you,are,peter"),
        "hello you are peter"
    );
    assert_eq!(functional::replace("I am", "i", "you"), "I am");
    assert_eq!(functional::replace("this is it", "i", "x"), "this is it");
}

/// Test case-insensitive replacement.
///
/// Verifies matching ignores case.
#[test]
fn test_replace_no_case() {
    assert_eq!(
        functional::replace_no_case("Hello WORLD", "hello,world", "hi,earth"),
        "hi earth"
    );
}

/// Test replacement rules without a counterpart.
///
/// Verifies surplus patterns are ignored.
#[test]
fn test_replace_uneven_rules() {
    assert_eq!(functional::replace("a b c", "a,b", "x"), "x b c");
}

/// Test chained replacement rules.
///
/// Verifies rules apply in order to the current word.
#[test]
fn test_replace_chained_rules() {
    assert_eq!(functional::replace("a", "a,b", "b,c"), "c");
}
