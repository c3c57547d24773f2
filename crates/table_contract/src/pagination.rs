//! Externally-owned pagination state and page request resolution.
//!
//! The table never slices rows itself: callers pass only the current page's
//! rows. Callers that change the page size must also reset the page index
//! (see [`PaginationState::with_page_size`]) so the current page stays in
//! range; the table reports out-of-range pages but does not correct them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableContractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
/// Enumerated page sizes offered by the page-size selector.
pub enum PageSize {
    /// 10 rows.
    #[default]
    Ten,
    /// 25 rows.
    TwentyFive,
    /// 50 rows.
    Fifty,
    /// 100 rows.
    Hundred,
}

impl PageSize {
    /// Every supported size, ascending.
    pub const ALL: [PageSize; 4] = [Self::Ten, Self::TwentyFive, Self::Fifty, Self::Hundred];

    /// Row count for this size.
    pub fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TableContractError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(TableContractError::UnsupportedPageSize(value))
    }
}

impl FromStr for PageSize {
    type Err = TableContractError;

    /// Parses a selector value such as `"25"`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().parse::<usize>().map_err(|err| {
            TableContractError::InvalidConfig(format!("page size {raw:?}: {err}"))
        })?;
        Self::try_from(value)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Pagination state owned by the calling view.
pub struct PaginationState {
    /// Zero-based page index.
    pub current_page: usize,
    /// Rows per page.
    pub page_size: PageSize,
    /// Total rows across all pages.
    pub total_items: usize,
}

impl PaginationState {
    /// Creates a state on page 0.
    pub fn new(page_size: PageSize, total_items: usize) -> Self {
        Self {
            current_page: 0,
            page_size,
            total_items,
        }
    }

    /// Number of pages; zero when there are no items.
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.page_size.get())
    }

    /// Whether `page` addresses an existing page.
    pub fn is_page_in_range(&self, page: usize) -> bool {
        page < self.page_count()
    }

    /// Checks that `current_page * page_size` lies within `[0, total_items)`.
    ///
    /// Page 0 of an empty set is accepted.
    pub fn validate(&self) -> Result<(), TableContractError> {
        if self.total_items == 0 && self.current_page == 0 {
            return Ok(());
        }
        if self.is_page_in_range(self.current_page) {
            Ok(())
        } else {
            Err(TableContractError::PageOutOfRange {
                page: self.current_page,
                page_count: self.page_count(),
            })
        }
    }

    /// Returns this state with a new page size and the page reset to 0.
    ///
    /// This is the reset policy callers are expected to apply when handling
    /// a page-size change.
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self {
            current_page: 0,
            page_size,
            ..self
        }
    }

    /// Returns this state moved to `page`, without range checking.
    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: page,
            ..self
        }
    }

    /// One-based inclusive bounds of the rows shown on the current page,
    /// or `None` when the page holds no rows.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let start = self.current_page.checked_mul(self.page_size.get())?;
        if start >= self.total_items {
            return None;
        }
        let end = start.saturating_add(self.page_size.get()).min(self.total_items);
        Some((start + 1, end))
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 0 && self.page_count() > 0
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page
            .checked_add(1)
            .is_some_and(|next| next < self.page_count())
    }

    /// Resolves `request` to a target page.
    ///
    /// Returns `None` for targets outside the page window and for requests
    /// that would not move off the current page.
    pub fn resolve(&self, request: PageRequest) -> Option<usize> {
        let page_count = self.page_count();
        let target = match request {
            PageRequest::First => 0,
            PageRequest::Previous => self.current_page.checked_sub(1)?,
            PageRequest::Next => self.current_page.checked_add(1)?,
            PageRequest::Last => page_count.checked_sub(1)?,
            PageRequest::Goto(page) => page,
        };
        (target < page_count && target != self.current_page).then_some(target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Page navigation intent emitted by pagination controls.
pub enum PageRequest {
    /// First page.
    First,
    /// Previous page.
    Previous,
    /// Next page.
    Next,
    /// Last page.
    Last,
    /// Specific zero-based page.
    Goto(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One slot in the numbered page-button strip.
pub enum PageButton {
    /// Zero-based page index.
    Page(usize),
    /// Collapsed run of pages.
    Ellipsis,
}

/// Builds the numbered page strip around the current page.
///
/// At most `visible` numbered buttons are shown, centred on the current page
/// where possible, with an ellipsis on each side that hides pages.
pub fn page_buttons(state: &PaginationState, visible: usize) -> Vec<PageButton> {
    let total = state.page_count();
    if total == 0 {
        return Vec::new();
    }
    let visible = visible.clamp(1, total);
    let current = state.current_page.min(total - 1);
    let half = visible / 2;
    let start = current.saturating_sub(half).min(total - visible);
    let end = start + visible;

    let mut buttons = Vec::with_capacity(visible + 2);
    if start > 0 {
        buttons.push(PageButton::Ellipsis);
    }
    buttons.extend((start..end).map(PageButton::Page));
    if end < total {
        buttons.push(PageButton::Ellipsis);
    }
    buttons
}

/// Returns the rows of the current page.
///
/// Caller-side helper for views holding the full row set; the table itself
/// renders whatever rows it receives.
pub fn page_slice<'a, T>(rows: &'a [T], state: &PaginationState) -> &'a [T] {
    let size = state.page_size.get();
    let start = state.current_page.saturating_mul(size).min(rows.len());
    let end = start.saturating_add(size).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn state(current_page: usize, total_items: usize) -> PaginationState {
        PaginationState {
            current_page,
            page_size: PageSize::Ten,
            total_items,
        }
    }

    #[test]
    fn twenty_three_items_span_three_pages() {
        let s = state(0, 23);
        assert_eq!(s.page_count(), 3);
        assert!((0..3).all(|page| s.with_page(page).validate().is_ok()));
    }

    #[test]
    fn page_size_parses_selector_values() {
        assert_eq!("25".parse::<PageSize>(), Ok(PageSize::TwentyFive));
        assert_eq!(
            "30".parse::<PageSize>(),
            Err(TableContractError::UnsupportedPageSize(30))
        );
        assert!(matches!(
            "all".parse::<PageSize>(),
            Err(TableContractError::InvalidConfig(_))
        ));
    }

    #[test]
    fn out_of_range_page_is_reported_not_corrected() {
        let s = state(3, 23);
        assert_eq!(
            s.validate(),
            Err(TableContractError::PageOutOfRange {
                page: 3,
                page_count: 3
            })
        );
        assert_eq!(s.current_page, 3);
        assert_eq!(s.item_range(), None);
    }

    #[test]
    fn extreme_out_of_range_page_is_reported_without_overflow() {
        let s = state(usize::MAX, 23);
        assert!(!s.has_next());
        assert!(s.has_previous());
        assert_eq!(s.item_range(), None);
        assert_eq!(s.resolve(PageRequest::Next), None);
        assert_eq!(s.resolve(PageRequest::First), Some(0));
        assert!(s.validate().is_err());
    }

    #[test]
    fn empty_set_accepts_only_page_zero() {
        assert_eq!(state(0, 0).page_count(), 0);
        assert!(state(0, 0).validate().is_ok());
        assert!(state(1, 0).validate().is_err());
    }

    #[test]
    fn item_range_reports_one_based_bounds() {
        assert_eq!(state(0, 23).item_range(), Some((1, 10)));
        assert_eq!(state(2, 23).item_range(), Some((21, 23)));
    }

    #[test]
    fn requests_resolve_within_window_only() {
        let s = state(0, 23);
        assert_eq!(s.resolve(PageRequest::Next), Some(1));
        assert_eq!(s.resolve(PageRequest::Last), Some(2));
        assert_eq!(s.resolve(PageRequest::Previous), None);
        assert_eq!(s.resolve(PageRequest::First), None);
        assert_eq!(s.resolve(PageRequest::Goto(3)), None);
        assert_eq!(state(2, 23).resolve(PageRequest::Next), None);
        assert_eq!(state(0, 0).resolve(PageRequest::Last), None);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let s = state(2, 23).with_page_size(PageSize::TwentyFive);
        assert_eq!(s.current_page, 0);
        assert_eq!(s.page_count(), 1);
    }

    #[test]
    fn page_size_serializes_as_number_and_rejects_others() {
        assert_eq!(serde_json::to_value(PageSize::Fifty).unwrap(), json!(50));
        assert_eq!(
            serde_json::from_value::<PageSize>(json!(25)).unwrap(),
            PageSize::TwentyFive
        );
        assert!(serde_json::from_value::<PageSize>(json!(20)).is_err());
        assert_eq!(
            PageSize::try_from(7),
            Err(TableContractError::UnsupportedPageSize(7))
        );
    }

    #[test]
    fn page_buttons_centre_on_current_page() {
        use PageButton::{Ellipsis, Page};
        let s = PaginationState::new(PageSize::Ten, 200);
        assert_eq!(
            page_buttons(&s, 5),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4), Ellipsis]
        );
        assert_eq!(
            page_buttons(&s.with_page(9), 5),
            vec![Ellipsis, Page(7), Page(8), Page(9), Page(10), Page(11), Ellipsis]
        );
        assert_eq!(
            page_buttons(&s.with_page(19), 5),
            vec![Ellipsis, Page(15), Page(16), Page(17), Page(18), Page(19)]
        );
        assert_eq!(page_buttons(&state(1, 23), 7), vec![Page(0), Page(1), Page(2)]);
        assert!(page_buttons(&state(0, 0), 5).is_empty());
    }

    #[test]
    fn page_slice_returns_current_window() {
        let rows: Vec<usize> = (0..23).collect();
        assert_eq!(page_slice(&rows, &state(2, 23)), &[20, 21, 22]);
        assert!(page_slice(&rows, &state(5, 23)).is_empty());
    }
}
