//! Externally-owned sort state and the header-click cycle.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::columns::ColumnSet;
use crate::compare::{compare_directed, to_ordering};
use crate::error::TableContractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Sort direction.
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Stable token for data attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Current sort intent: which field, which direction. `None` means unsorted.
pub struct SortState {
    /// Column id / field key being sorted.
    pub field: String,
    /// Direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort by `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort by `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Policy applied when the same sortable header is clicked repeatedly.
pub enum SortCycle {
    /// unsorted → asc → desc → unsorted.
    #[default]
    TriState,
    /// unsorted → asc → desc → asc; never returns to unsorted.
    AscDesc,
}

/// Computes the sort state a header click on `field` requests.
///
/// Clicking a different field than the current one always starts ascending.
pub fn next_sort_state(
    current: Option<&SortState>,
    field: &str,
    cycle: SortCycle,
) -> Option<SortState> {
    match current {
        Some(state) if state.field == field => match (state.direction, cycle) {
            (SortDirection::Asc, _) => Some(SortState::desc(field)),
            (SortDirection::Desc, SortCycle::TriState) => None,
            (SortDirection::Desc, SortCycle::AscDesc) => Some(SortState::asc(field)),
        },
        _ => Some(SortState::asc(field)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Arrow state rendered in a header cell.
pub enum SortIndicator {
    /// Column is not the active sort field.
    Unsorted,
    /// Active ascending.
    Ascending,
    /// Active descending.
    Descending,
}

impl SortIndicator {
    /// Value for the header's `aria-sort` attribute.
    pub fn aria_sort(self) -> &'static str {
        match self {
            Self::Unsorted => "none",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Indicator for the header of `field` given the current sort state.
pub fn header_sort_indicator(sort: Option<&SortState>, field: &str) -> SortIndicator {
    match sort {
        Some(state) if state.field == field => match state.direction {
            SortDirection::Asc => SortIndicator::Ascending,
            SortDirection::Desc => SortIndicator::Descending,
        },
        _ => SortIndicator::Unsorted,
    }
}

/// Sorts `rows` in place by the column `sort` names, using the shallow comparator.
///
/// This is a caller-side fallback; the table itself renders rows as given.
/// The sort is stable, so rows that compare equal keep their relative order.
///
/// # Errors
///
/// Returns [`TableContractError::UnknownSortField`] when no column matches.
pub fn sort_rows<T, V>(
    rows: &mut [T],
    columns: &ColumnSet<T, V>,
    sort: Option<&SortState>,
) -> Result<(), TableContractError> {
    let Some(sort) = sort else {
        return Ok(());
    };
    let column = columns
        .get(&sort.field)
        .ok_or_else(|| TableContractError::UnknownSortField(sort.field.clone()))?;
    let keys: Vec<_> = rows.iter().map(|row| (column.accessor)(row)).collect();
    let order = stable_order(keys.len(), |a, b| {
        to_ordering(compare_directed(&keys[a], &keys[b], sort.direction)) == Ordering::Greater
    });
    apply_order(rows, &order);
    Ok(())
}

/// Bottom-up merge sort over indices `0..len`.
///
/// `is_after` need not be a total order: mixed value kinds compare equal
/// while numbers still order among themselves. Left wins unless strictly
/// after, so equal elements keep input order.
fn stable_order(len: usize, is_after: impl Fn(usize, usize) -> bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch = vec![0; len];
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right, mut out) = (start, mid, start);
            while left < mid && right < end {
                if is_after(order[left], order[right]) {
                    scratch[out] = order[right];
                    right += 1;
                } else {
                    scratch[out] = order[left];
                    left += 1;
                }
                out += 1;
            }
            let rest = mid - left;
            scratch[out..out + rest].copy_from_slice(&order[left..mid]);
            out += rest;
            scratch[out..end].copy_from_slice(&order[right..end]);
            start = end;
        }
        std::mem::swap(&mut order, &mut scratch);
        width *= 2;
    }
    order
}

/// Permutes `rows` in place so position `i` holds the row that was at `order[i]`.
fn apply_order<T>(rows: &mut [T], order: &[usize]) {
    let mut placed = vec![false; rows.len()];
    for start in 0..rows.len() {
        let mut current = start;
        while !placed[current] {
            placed[current] = true;
            let source = order[current];
            if source == start {
                break;
            }
            rows.swap(current, source);
            current = source;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::columns::ColumnDescriptor;

    fn letters() -> ColumnSet<&'static str, String> {
        ColumnSet::from_columns([
            ColumnDescriptor::new("letter", "Letter", |s: &&'static str| json!(*s)).sortable(),
        ])
        .expect("columns")
    }

    #[test]
    fn tri_state_cycle_returns_to_unsorted() {
        let cycle = SortCycle::TriState;
        let first = next_sort_state(None, "name", cycle);
        assert_eq!(first, Some(SortState::asc("name")));
        let second = next_sort_state(first.as_ref(), "name", cycle);
        assert_eq!(second, Some(SortState::desc("name")));
        let third = next_sort_state(second.as_ref(), "name", cycle);
        assert_eq!(third, None);
    }

    #[test]
    fn asc_desc_cycle_never_unsorts() {
        let cycle = SortCycle::AscDesc;
        let desc = Some(SortState::desc("name"));
        assert_eq!(
            next_sort_state(desc.as_ref(), "name", cycle),
            Some(SortState::asc("name"))
        );
    }

    #[test]
    fn clicking_another_field_starts_ascending() {
        let current = Some(SortState::desc("name"));
        assert_eq!(
            next_sort_state(current.as_ref(), "age", SortCycle::TriState),
            Some(SortState::asc("age"))
        );
    }

    #[test]
    fn indicator_tracks_active_field_only() {
        let sort = SortState::desc("age");
        assert_eq!(header_sort_indicator(Some(&sort), "age"), SortIndicator::Descending);
        assert_eq!(header_sort_indicator(Some(&sort), "name"), SortIndicator::Unsorted);
        assert_eq!(header_sort_indicator(None, "age").aria_sort(), "none");
    }

    #[test]
    fn descending_reverses_ascending_order() {
        let columns = letters();
        let mut rows = vec!["b", "a", "c"];
        sort_rows(&mut rows, &columns, Some(&SortState::asc("letter"))).unwrap();
        assert_eq!(rows, vec!["a", "b", "c"]);

        let mut rows = vec!["b", "a", "c"];
        sort_rows(&mut rows, &columns, Some(&SortState::desc("letter"))).unwrap();
        assert_eq!(rows, vec!["c", "b", "a"]);
    }

    #[test]
    fn equal_class_values_keep_their_order_in_both_directions() {
        let columns: ColumnSet<serde_json::Value, String> = ColumnSet::from_columns([
            ColumnDescriptor::new("v", "Value", |v: &serde_json::Value| v.clone()).sortable(),
        ])
        .unwrap();
        let original = vec![json!({"id": 1}), json!(true), json!(null)];

        let mut asc = original.clone();
        sort_rows(&mut asc, &columns, Some(&SortState::asc("v"))).unwrap();
        let mut desc = original.clone();
        sort_rows(&mut desc, &columns, Some(&SortState::desc("v"))).unwrap();

        assert_eq!(asc, original);
        assert_eq!(desc, original);
    }

    #[test]
    fn mixed_kind_column_sorts_without_panicking() {
        let columns: ColumnSet<serde_json::Value, String> = ColumnSet::from_columns([
            ColumnDescriptor::new("v", "Value", |v: &serde_json::Value| v.clone()).sortable(),
        ])
        .unwrap();
        let original: Vec<serde_json::Value> = (0..500u64)
            .map(|i| match (i * 7919) % 5 {
                0 => json!("s"),
                1 => json!(null),
                _ => json!((i * 104_729) % 97),
            })
            .collect();

        for sort in [SortState::asc("v"), SortState::desc("v")] {
            let mut rows = original.clone();
            sort_rows(&mut rows, &columns, Some(&sort)).unwrap();
            assert_eq!(rows.len(), original.len());
            let mut sorted_ids: Vec<String> = rows.iter().map(|v| v.to_string()).collect();
            let mut original_ids: Vec<String> = original.iter().map(|v| v.to_string()).collect();
            sorted_ids.sort();
            original_ids.sort();
            assert_eq!(sorted_ids, original_ids);
        }
    }

    #[test]
    fn merge_order_is_stable_and_ascending() {
        let keys = [3, 1, 2, 1, 3, 0];
        let order = stable_order(keys.len(), |a, b| keys[a] > keys[b]);
        assert_eq!(order, vec![5, 1, 3, 2, 0, 4]);

        let mut rows = vec!['a', 'b', 'c', 'd', 'e', 'f'];
        apply_order(&mut rows, &order);
        assert_eq!(rows, vec!['f', 'b', 'd', 'c', 'a', 'e']);
    }

    #[test]
    fn unsorted_leaves_rows_untouched_and_unknown_field_errors() {
        let columns = letters();
        let mut rows = vec!["b", "a"];
        sort_rows(&mut rows, &columns, None).unwrap();
        assert_eq!(rows, vec!["b", "a"]);
        assert_eq!(
            sort_rows(&mut rows, &columns, Some(&SortState::asc("missing"))),
            Err(TableContractError::UnknownSortField("missing".to_string()))
        );
    }

    #[test]
    fn sort_state_serializes_with_lowercase_direction() {
        let raw = serde_json::to_value(SortState::desc("age")).unwrap();
        assert_eq!(raw, json!({"field": "age", "direction": "desc"}));
    }
}
