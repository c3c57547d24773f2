//! Shallow three-way comparator used for display ordering.

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::Collator;

use serde_json::Value;

use crate::sorting::SortDirection;

/// Compares two cell values and returns a signed difference.
///
/// * arrays compare by length only (`len(a) - len(b)`)
/// * numbers compare by difference (`a - b`)
/// * strings use [`locale_compare`] and yield `-1`, `0`, or `1`
/// * every other pairing (objects, booleans, nulls, mixed kinds) is equal
///
/// This is a display-ordering convenience, not deep equality or natural sort.
pub fn general_comparator(a: &Value, b: &Value) -> f64 {
    match (a, b) {
        (Value::Array(a), Value::Array(b)) => a.len() as f64 - b.len() as f64,
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a - b,
            _ => 0.0,
        },
        (Value::String(a), Value::String(b)) => match locale_compare(a, b) {
            Ordering::Less => -1.0,
            Ordering::Equal => 0.0,
            Ordering::Greater => 1.0,
        },
        _ => 0.0,
    }
}

/// Runs [`general_comparator`] for `direction`.
///
/// Descending swaps the arguments rather than negating the result.
pub fn compare_directed(a: &Value, b: &Value, direction: SortDirection) -> f64 {
    match direction {
        SortDirection::Asc => general_comparator(a, b),
        SortDirection::Desc => general_comparator(b, a),
    }
}

/// Converts a signed comparator result into an [`Ordering`]. `NaN` is equal.
pub fn to_ordering(cmp: f64) -> Ordering {
    cmp.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Unicode collation (CLDR root): case and accents only break ties, and
/// lowercase sorts before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}
