use leptos::*;
use table_contract::{merge_classes, next_sort_state, HeaderCell, SortCycle, SortIndicator};

use super::SortingConfig;
use crate::primitives::{bool_token, Button, ButtonVariant};
use crate::IconName;

/// Arrow shown next to a sortable header label.
pub(crate) fn indicator_icon(indicator: SortIndicator) -> IconName {
    match indicator {
        SortIndicator::Unsorted => IconName::ChevronUpDown,
        SortIndicator::Ascending => IconName::ChevronUp,
        SortIndicator::Descending => IconName::ChevronDown,
    }
}

#[component]
pub(crate) fn TableHeader(
    headers: Vec<HeaderCell>,
    expandable: bool,
    has_actions: bool,
    sorting: Option<SortingConfig>,
    sort_cycle: SortCycle,
) -> impl IntoView {
    view! {
        <thead data-ui-slot="head">
            <tr>
                {expandable.then(|| view! {
                    <th scope="col" data-ui-slot="expand-column">
                        <span class="ui-visually-hidden">"Details"</span>
                    </th>
                })}
                {headers
                    .into_iter()
                    .map(|header| header_cell(header, sorting, sort_cycle))
                    .collect_view()}
                {has_actions.then(|| view! {
                    <th scope="col" data-ui-slot="actions-column">"Actions"</th>
                })}
            </tr>
        </thead>
    }
}

fn header_cell(header: HeaderCell, sorting: Option<SortingConfig>, sort_cycle: SortCycle) -> View {
    let HeaderCell {
        id,
        label,
        width,
        class_name,
        sortable,
        indicator,
    } = header;
    let class = merge_classes([Some("ui-data-table-header"), class_name.as_deref()]);
    let style = width.map(|width| format!("width: {width}"));
    let aria_sort = sortable.then(|| indicator.aria_sort());
    let column = id.clone();

    // Sortable columns without a sorting config render as plain labels.
    let content = match sorting.filter(|_| sortable) {
        Some(sorting) => view! {
            <Button
                variant=ButtonVariant::Quiet
                ui_slot="sort-trigger"
                trailing_icon=indicator_icon(indicator)
                on_click=Callback::new(move |_| {
                    let current = sorting.sorting.get_untracked();
                    sorting
                        .on_sorting_change
                        .call(next_sort_state(current.as_ref(), &id, sort_cycle));
                })
            >
                {label}
            </Button>
        }
        .into_view(),
        None => view! { <span data-ui-slot="label">{label}</span> }.into_view(),
    };

    view! {
        <th
            scope="col"
            class=class
            style=style
            aria-sort=aria_sort
            data-ui-column=column
            data-ui-sortable=bool_token(sortable)
        >
            {content}
        </th>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn each_sort_indicator_has_its_own_arrow() {
        assert_eq!(indicator_icon(SortIndicator::Unsorted), IconName::ChevronUpDown);
        assert_eq!(indicator_icon(SortIndicator::Ascending), IconName::ChevronUp);
        assert_eq!(indicator_icon(SortIndicator::Descending), IconName::ChevronDown);
    }
}
