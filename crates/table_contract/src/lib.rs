//! Headless contract for the generic tabular data presenter.
//!
//! The crate owns everything about a data table that does not depend on a
//! renderer: column descriptors and cell stringification, the shallow value
//! comparator, the sort-click cycle, pagination arithmetic, per-row actions
//! and their interaction routing, identity-keyed row expansion, and the pure
//! [`TableView`] model a renderer turns into markup.
//!
//! Sorting, pagination, and the row set stay owned by the caller; this crate
//! only computes what to show and which change a user interaction requests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod actions;
pub mod classes;
pub mod columns;
pub mod compare;
pub mod config;
mod error;
pub mod expansion;
pub mod pagination;
pub mod sorting;
pub mod view;

pub use actions::{
    ActionTone, InteractionTarget, NotificationIndicator, RowAction, RowEventRouter, RowHandler,
};
pub use classes::{is_empty_value, merge_classes};
pub use columns::{render_row_cells, stringify_value, Cell, ColumnDescriptor, ColumnSet};
pub use compare::{compare_directed, general_comparator};
pub use config::TableConfig;
pub use error::TableContractError;
pub use expansion::{validate_unique_keys, ExpansionSet, RowExtraContent};
pub use pagination::{page_buttons, page_slice, PageButton, PageRequest, PageSize, PaginationState};
pub use sorting::{
    header_sort_indicator, next_sort_state, sort_rows, SortCycle, SortDirection, SortIndicator,
    SortState,
};
pub use view::{
    contract_violations, header_cells, ActionView, HeaderCell, RowView, TableInputs, TableView,
};
