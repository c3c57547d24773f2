use leptos::*;
use table_contract::{page_buttons, PageButton, PageRequest, PageSize, PaginationState};

use super::PaginationConfig;
use crate::primitives::{
    merge_layout_class, Button, ButtonShape, ButtonSize, ButtonVariant, IconButton, SelectField,
    SelectOption, Text, TextRole, TextTone,
};
use crate::IconName;

/// "Showing a-b of n" label for the current page.
pub(crate) fn page_summary(state: &PaginationState) -> String {
    match state.item_range() {
        Some((first, last)) => format!("Showing {first}-{last} of {}", state.total_items),
        None if state.total_items == 0 => "No items".to_string(),
        None => format!(
            "Page {} of {}",
            state.current_page + 1,
            state.page_count()
        ),
    }
}

#[component]
/// First/previous/numbered/next/last controls plus a page-size selector.
///
/// The bar never moves pages itself: every interaction resolves to a request
/// that is handed to the caller through `pagination`'s callbacks.
pub fn PaginationBar(
    pagination: PaginationConfig,
    #[prop(optional)] page_sizes: Option<Vec<PageSize>>,
    #[prop(default = 5)] visible_page_buttons: usize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let PaginationConfig {
        state,
        set_current_page,
        on_page_size_change,
    } = pagination;
    let page_sizes = page_sizes.unwrap_or_else(|| PageSize::ALL.to_vec());
    let size_options: Vec<SelectOption> = page_sizes
        .iter()
        .map(|size| SelectOption::plain(size.get().to_string()))
        .collect();

    let request = move |request: PageRequest| {
        if let Some(page) = state.with_untracked(|state| state.resolve(request)) {
            set_current_page.call(page);
        }
    };
    let on_size = Callback::new(move |raw: String| match raw.parse::<PageSize>() {
        Ok(size) if page_sizes.contains(&size) => on_page_size_change.call(size),
        Ok(size) => logging::warn!("page size {} is not offered by this table", size.get()),
        Err(err) => logging::warn!("ignoring page size selection: {err}"),
    });
    let step_button = move |icon: IconName, label: &'static str, target: PageRequest| {
        view! {
            <IconButton
                icon
                size=ButtonSize::Sm
                aria_label=label.to_string()
                title=label.to_string()
                ui_slot="page-step"
                disabled=Signal::derive(move || state.with(|state| state.resolve(target).is_none()))
                on_click=Callback::new(move |_| request(target))
            />
        }
    };

    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            aria-label="Pagination"
            data-ui-primitive="true"
            data-ui-kind="pagination"
        >
            <Text role=TextRole::Caption tone=TextTone::Secondary ui_slot="summary">
                {move || state.with(page_summary)}
            </Text>
            <div data-ui-slot="pages">
                {step_button(IconName::ChevronDoubleLeft, "First page", PageRequest::First)}
                {step_button(IconName::ChevronLeft, "Previous page", PageRequest::Previous)}
                {move || {
                    let current = state.with(|state| state.current_page);
                    state
                        .with(|state| page_buttons(state, visible_page_buttons))
                        .into_iter()
                        .map(|button| match button {
                            PageButton::Page(page) => {
                                let is_current = page == current;
                                let aria_current = if is_current { "page" } else { "false" };
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        size=ButtonSize::Sm
                                        shape=ButtonShape::Pill
                                        ui_slot="page"
                                        selected=is_current
                                        aria_current=aria_current.to_string()
                                        on_click=Callback::new(move |_| request(PageRequest::Goto(page)))
                                    >
                                        {(page + 1).to_string()}
                                    </Button>
                                }
                                .into_view()
                            }
                            PageButton::Ellipsis => view! {
                                <span data-ui-slot="ellipsis" aria-hidden="true">"…"</span>
                            }
                            .into_view(),
                        })
                        .collect_view()
                }}
                {step_button(IconName::ChevronRight, "Next page", PageRequest::Next)}
                {step_button(IconName::ChevronDoubleRight, "Last page", PageRequest::Last)}
            </div>
            <SelectField
                options=size_options
                aria_label="Rows per page"
                ui_slot="page-size"
                value=Signal::derive(move || state.with(|state| state.page_size.get().to_string()))
                on_change=on_size
            />
        </nav>
    }
}
