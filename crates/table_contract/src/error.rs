//! Caller-contract violations reported by the table contract validators.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Precondition failures detected when validating table inputs.
///
/// The renderer never repairs these; callers own sorting, pagination, and row
/// identity and are expected to keep them consistent.
pub enum TableContractError {
    /// Two columns share the same id.
    #[error("duplicate column id `{0}`")]
    DuplicateColumnId(String),
    /// The sort state names a field with no matching column.
    #[error("sort field `{0}` does not name a column")]
    UnknownSortField(String),
    /// The sort state names a column that is not sortable.
    #[error("column `{0}` is not sortable")]
    NotSortable(String),
    /// The current page lies outside the valid page window.
    #[error("page {page} is out of range for {page_count} page(s)")]
    PageOutOfRange {
        /// Requested zero-based page index.
        page: usize,
        /// Number of pages for the current total and page size.
        page_count: usize,
    },
    /// A page size outside the enumerated set was supplied.
    #[error("unsupported page size {0}")]
    UnsupportedPageSize(usize),
    /// Two rows produced the same identity key.
    #[error("duplicate row key `{0}`")]
    DuplicateRowKey(String),
    /// Table configuration failed to decode or validate.
    #[error("invalid table config: {0}")]
    InvalidConfig(String),
}
