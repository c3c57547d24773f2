//! Renderer-independent view model for one table render.
//!
//! [`TableView::build`] is pure: the same inputs always produce the same
//! view, so renderers can rebuild it on every reactive update.

use std::fmt::Display;
use std::hash::Hash;

use crate::actions::{ActionTone, NotificationIndicator, RowAction};
use crate::columns::{Cell, ColumnSet};
use crate::error::TableContractError;
use crate::expansion::{validate_unique_keys, ExpansionSet, RowExtraContent};
use crate::pagination::PaginationState;
use crate::sorting::{header_sort_indicator, SortIndicator, SortState};

/// Inputs for one render.
pub struct TableInputs<'a, T, V, I, K: Eq + Hash> {
    /// Rows of the current page, in display order.
    pub rows: &'a [T],
    /// Columns in display order.
    pub columns: &'a ColumnSet<T, V>,
    /// Current sort state.
    pub sort: Option<&'a SortState>,
    /// Row actions.
    pub actions: &'a [RowAction<T, I>],
    /// Expandable panel descriptor.
    pub extra_content: Option<&'a RowExtraContent<T, K, V>>,
    /// Currently expanded row identities.
    pub expansion: &'a ExpansionSet<K>,
    /// Per-row class hook.
    pub row_class_name: Option<&'a dyn Fn(&T) -> String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Header cell for one column.
pub struct HeaderCell {
    /// Column id.
    pub id: String,
    /// Header label.
    pub label: String,
    /// Width hint.
    pub width: Option<String>,
    /// Extra class tokens.
    pub class_name: Option<String>,
    /// Whether clicking requests a sort change.
    pub sortable: bool,
    /// Arrow state.
    pub indicator: SortIndicator,
}

#[derive(Debug, Clone, PartialEq)]
/// One action button evaluated for one row.
pub struct ActionView<I> {
    /// Position in the action list; routes clicks.
    pub index: usize,
    /// Action id.
    pub id: String,
    /// Accessible label.
    pub label: String,
    /// Colour token.
    pub tone: ActionTone,
    /// Icon.
    pub icon: I,
    /// Indicator for this row, if any.
    pub indicator: Option<NotificationIndicator>,
}

#[derive(Debug, Clone, PartialEq)]
/// One body row.
pub struct RowView<V, I, K> {
    /// Position within the page's rows.
    pub index: usize,
    /// Row identity when extra content is configured.
    pub key: Option<K>,
    /// Caller-supplied class tokens.
    pub class_name: Option<String>,
    /// One cell per column.
    pub cells: Vec<Cell<V>>,
    /// Evaluated actions.
    pub actions: Vec<ActionView<I>>,
    /// Whether the row's panel is open.
    pub expanded: bool,
    /// Panel content, rendered only while expanded.
    pub extra: Option<V>,
}

#[derive(Debug, Clone, PartialEq)]
/// Complete view of one render.
pub struct TableView<V, I, K> {
    /// Header cells.
    pub headers: Vec<HeaderCell>,
    /// Body rows.
    pub rows: Vec<RowView<V, I, K>>,
    /// Whether rows carry an expand toggle.
    pub expandable: bool,
    /// Whether an actions column is rendered.
    pub has_actions: bool,
}

impl<V, I: Clone, K: Eq + Hash + Clone> TableView<V, I, K> {
    /// Builds the view for `inputs`.
    pub fn build<T>(inputs: TableInputs<'_, T, V, I, K>) -> Self {
        let headers = header_cells(inputs.columns, inputs.sort);
        let rows = inputs
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let key = inputs.extra_content.map(|extra| extra.key_of(row));
                let expanded = key
                    .as_ref()
                    .is_some_and(|key| inputs.expansion.is_expanded(key));
                let extra = match inputs.extra_content {
                    Some(extra) if expanded => Some((extra.component)(row)),
                    _ => None,
                };
                RowView {
                    index,
                    key,
                    class_name: inputs.row_class_name.map(|class_name| class_name(row)),
                    cells: inputs.columns.iter().map(|column| column.cell(row)).collect(),
                    actions: inputs
                        .actions
                        .iter()
                        .enumerate()
                        .map(|(index, action)| ActionView {
                            index,
                            id: action.id.clone(),
                            label: action.label.clone(),
                            tone: action.tone,
                            icon: action.icon.clone(),
                            indicator: action.indicator_for(row),
                        })
                        .collect(),
                    expanded,
                    extra,
                }
            })
            .collect();

        Self {
            headers,
            rows,
            expandable: inputs.extra_content.is_some(),
            has_actions: !inputs.actions.is_empty(),
        }
    }
}

/// Header cells for `columns` under the current sort state.
pub fn header_cells<T, V>(columns: &ColumnSet<T, V>, sort: Option<&SortState>) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|column| HeaderCell {
            id: column.id.clone(),
            label: column.header.clone(),
            width: column.width.clone(),
            class_name: column.class_name.clone(),
            sortable: column.sortable,
            indicator: header_sort_indicator(sort, &column.id),
        })
        .collect()
}

/// Collects every caller-contract violation in one render's inputs.
///
/// Renderers call this in debug builds and report the result; nothing is
/// corrected.
pub fn contract_violations<T, V, K>(
    rows: &[T],
    columns: &ColumnSet<T, V>,
    sort: Option<&SortState>,
    pagination: Option<&PaginationState>,
    id_getter: Option<&dyn Fn(&T) -> K>,
) -> Vec<TableContractError>
where
    K: Eq + Hash + Display,
{
    let mut violations = Vec::new();
    if let Some(sort) = sort {
        if let Err(err) = columns.validate_sort(sort) {
            violations.push(err);
        }
    }
    if let Some(pagination) = pagination {
        if let Err(err) = pagination.validate() {
            violations.push(err);
        }
    }
    if let Some(id_getter) = id_getter {
        if let Err(err) = validate_unique_keys(rows, id_getter) {
            violations.push(err);
        }
    }
    violations
}
