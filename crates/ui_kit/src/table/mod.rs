//! Data table component over caller-owned sorting, pagination, and rows.
//!
//! [`DataTable`] renders exactly the rows it is given. Header clicks and page
//! controls only report the change the user asked for; the caller decides what
//! to do with it and passes the new state back in. The expanded-row set is the
//! one piece of state the table owns, and it is dropped when the table unmounts.

use std::rc::Rc;

use leptos::*;
use table_contract::{
    contract_violations, header_cells, ColumnDescriptor, ColumnSet, ExpansionSet, PageSize,
    PaginationState, RowAction, RowEventRouter, RowExtraContent, RowHandler, SortState,
    TableConfig, TableInputs, TableView,
};

use crate::primitives::{bool_token, merge_layout_class, EmptyState};
use crate::{use_theme, IconName};

mod body;
mod header;
mod pagination;

use body::TableRow;
use header::TableHeader;
pub use pagination::PaginationBar;

/// Column set whose custom renderers produce Leptos views.
pub type TableColumns<T> = ColumnSet<T, View>;

/// One column of a [`TableColumns`].
pub type TableColumn<T> = ColumnDescriptor<T, View>;

/// Row action rendered as an icon button.
pub type TableAction<T> = RowAction<T, IconName>;

/// Expandable per-row panel keyed by a string row identity.
pub type RowExtra<T> = RowExtraContent<T, String, View>;

#[derive(Clone, Copy)]
/// Caller-owned sort state and the callback that receives sort requests.
pub struct SortingConfig {
    /// Current sort, or `None` when unsorted.
    pub sorting: Signal<Option<SortState>>,
    /// Receives the state a header click asks for.
    pub on_sorting_change: Callback<Option<SortState>>,
}

impl SortingConfig {
    /// Wires an arbitrary signal and change handler.
    pub fn new(
        sorting: impl Into<Signal<Option<SortState>>>,
        on_sorting_change: impl Fn(Option<SortState>) + 'static,
    ) -> Self {
        Self {
            sorting: sorting.into(),
            on_sorting_change: Callback::new(on_sorting_change),
        }
    }

    /// Accepts every request by writing it straight back into `sorting`.
    pub fn controlled(sorting: RwSignal<Option<SortState>>) -> Self {
        Self {
            sorting: sorting.into(),
            on_sorting_change: Callback::new(move |next| sorting.set(next)),
        }
    }
}

#[derive(Clone, Copy)]
/// Caller-owned pagination state and the callbacks that receive page requests.
pub struct PaginationConfig {
    /// Current page, page size, and total item count.
    pub state: Signal<PaginationState>,
    /// Receives the zero-based page a control asks for.
    pub set_current_page: Callback<usize>,
    /// Receives the page size picked in the selector. Callers must also reset
    /// the page index so it stays in range.
    pub on_page_size_change: Callback<PageSize>,
}

impl PaginationConfig {
    /// Accepts every request on `state`, resetting to the first page whenever
    /// the page size changes.
    pub fn controlled(state: RwSignal<PaginationState>) -> Self {
        Self {
            state: state.into(),
            set_current_page: Callback::new(move |page| {
                state.update(|pagination| *pagination = pagination.with_page(page));
            }),
            on_page_size_change: Callback::new(move |size| {
                state.update(|pagination| *pagination = pagination.with_page_size(size));
            }),
        }
    }
}

#[component]
/// Generic data table with optional sorting, pagination, row actions, and
/// expandable rows.
///
/// `rows` must already be the current page in display order. In debug builds
/// the table logs every caller-contract violation it sees (unknown sort field,
/// out-of-range page, duplicate row identity) and renders the inputs as given.
pub fn DataTable<T: Clone + 'static>(
    #[prop(into)] rows: MaybeSignal<Vec<T>>,
    columns: Rc<TableColumns<T>>,
    #[prop(optional)] sorting: Option<SortingConfig>,
    #[prop(optional)] pagination: Option<PaginationConfig>,
    #[prop(optional)] row_extra_content: Option<RowExtra<T>>,
    #[prop(optional)] row_class_name: Option<Rc<dyn Fn(&T) -> String>>,
    #[prop(optional)] actions: Option<Rc<Vec<TableAction<T>>>>,
    #[prop(optional)] on_row_click: Option<RowHandler<T>>,
    #[prop(optional)] config: Option<TableConfig>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    if let Err(err) = config.validate() {
        logging::warn!("data table config: {err}");
    }
    let rows = Signal::derive(move || rows.get());
    let theme = use_theme();
    let expansion = create_rw_signal(ExpansionSet::<String>::new());
    let actions = actions.unwrap_or_default();
    let router = RowEventRouter::new(on_row_click, Rc::clone(&actions));

    let expandable = row_extra_content.is_some();
    let has_actions = !actions.is_empty();
    let column_span = columns.len() + usize::from(expandable) + usize::from(has_actions);
    let cell_classes: Rc<Vec<Option<String>>> = Rc::new(
        columns
            .iter()
            .map(|column| column.class_name.clone())
            .collect(),
    );
    let sort_cycle = config.sort_cycle;
    let empty_message = config.empty_message.clone();

    if cfg!(debug_assertions) {
        let columns = Rc::clone(&columns);
        let id_getter = row_extra_content
            .as_ref()
            .map(|extra| Rc::clone(&extra.id_getter));
        create_effect(move |_| {
            let sort = sorting.and_then(|sorting| sorting.sorting.get());
            let page = pagination.map(|pagination| pagination.state.get());
            rows.with(|rows| {
                for violation in contract_violations(
                    rows,
                    &*columns,
                    sort.as_ref(),
                    page.as_ref(),
                    id_getter.as_deref(),
                ) {
                    logging::warn!("data table contract violation: {violation}");
                }
            });
        });
    }

    let header = {
        let columns = Rc::clone(&columns);
        move || {
            let sort = sorting.and_then(|sorting| sorting.sorting.get());
            view! {
                <TableHeader
                    headers=header_cells(&*columns, sort.as_ref())
                    expandable
                    has_actions
                    sorting
                    sort_cycle
                />
            }
        }
    };

    let body = move || {
        let sort = sorting.and_then(|sorting| sorting.sorting.get());
        rows.with(|rows| {
            if rows.is_empty() {
                let empty_message = empty_message.clone();
                return view! {
                    <tr data-ui-slot="empty-row">
                        <td colspan=column_span>
                            <EmptyState>{empty_message}</EmptyState>
                        </td>
                    </tr>
                }
                .into_view();
            }
            expansion.with(|expanded| {
                let table = TableView::build(TableInputs {
                    rows,
                    columns: &*columns,
                    sort: sort.as_ref(),
                    actions: actions.as_slice(),
                    extra_content: row_extra_content.as_ref(),
                    expansion: expanded,
                    row_class_name: row_class_name.as_deref(),
                });
                table
                    .rows
                    .into_iter()
                    .zip(rows.iter().cloned())
                    .map(|(row_view, row)| {
                        view! {
                            <TableRow
                                row
                                row_view
                                router=router.clone()
                                expansion
                                cell_classes=Rc::clone(&cell_classes)
                                has_actions
                                column_span
                            />
                        }
                    })
                    .collect_view()
            })
        })
    };

    view! {
        <div
            class=merge_layout_class("ui-data-table-frame", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table-frame"
            data-ui-density=move || theme.get().density.token()
        >
            <table
                class="ui-data-table"
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="data-table"
                data-ui-expandable=bool_token(expandable)
            >
                {header}
                <tbody data-ui-slot="body">{body}</tbody>
            </table>
            {pagination.map(|pagination| view! {
                <PaginationBar
                    pagination
                    page_sizes=config.page_sizes.clone()
                    visible_page_buttons=config.visible_page_buttons
                />
            })}
        </div>
    }
}
