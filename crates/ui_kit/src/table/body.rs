use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::*;
use table_contract::{
    merge_classes, ActionView, Cell, ExpansionSet, InteractionTarget, NotificationIndicator,
    RowEventRouter, RowView,
};

use crate::primitives::{
    bool_token, Badge, ButtonSize, ButtonVariant, IconButton, NotificationDot, TextTone,
};
use crate::IconName;

/// Events whose bubbling can be cut off before they reach the row.
pub(crate) trait PropagationGuard {
    fn stop(&self);
}

impl PropagationGuard for MouseEvent {
    fn stop(&self) {
        self.stop_propagation();
    }
}

/// Runs an in-row control's handler without letting the click reach the row
/// handler. Returns whether a handler ran.
pub(crate) fn dispatch_contained<E: PropagationGuard, T, I>(
    ev: &E,
    router: &RowEventRouter<T, I>,
    row: &T,
    target: InteractionTarget,
) -> bool {
    ev.stop();
    router.dispatch(row, target)
}

/// Overlay content for an action's notification indicator.
pub(crate) fn indicator_view(indicator: NotificationIndicator) -> View {
    match indicator {
        NotificationIndicator::Badge { content } => {
            view! { <Badge tone=TextTone::Danger>{content}</Badge> }.into_view()
        }
        NotificationIndicator::Dot { ping } => view! { <NotificationDot ping /> }.into_view(),
    }
}

#[component]
pub(crate) fn TableRow<T: Clone + 'static>(
    row: T,
    row_view: RowView<View, IconName, String>,
    router: RowEventRouter<T, IconName>,
    expansion: RwSignal<ExpansionSet<String>>,
    cell_classes: Rc<Vec<Option<String>>>,
    has_actions: bool,
    column_span: usize,
) -> impl IntoView {
    let RowView {
        index,
        key,
        class_name,
        cells,
        actions,
        expanded,
        extra,
    } = row_view;
    let clickable = router.has_row_handler();
    let class = merge_classes([Some("ui-data-table-row"), class_name.as_deref()]);

    let toggle = key.map(|key| {
        let label = if expanded { "Collapse row" } else { "Expand row" };
        let icon = if expanded {
            IconName::ChevronDown
        } else {
            IconName::ChevronRight
        };
        view! {
            <td data-ui-slot="expand">
                <IconButton
                    icon
                    size=ButtonSize::Sm
                    aria_label=label.to_string()
                    ui_slot="expand-toggle"
                    on_click=Callback::new(move |ev: MouseEvent| {
                        ev.stop();
                        expansion.update(|expansion| {
                            expansion.toggle(key.clone());
                        });
                    })
                />
            </td>
        }
    });

    let cells = cells
        .into_iter()
        .enumerate()
        .map(|(column, cell)| {
            let class = merge_classes([
                Some("ui-data-table-cell"),
                cell_classes.get(column).and_then(|class| class.as_deref()),
            ]);
            let content = match cell {
                Cell::Text(text) => text.into_view(),
                Cell::Custom(custom) => custom,
            };
            view! { <td class=class>{content}</td> }
        })
        .collect_view();

    let action_cell = has_actions.then(|| {
        let buttons = actions
            .into_iter()
            .map(|action| action_button(action, row.clone(), router.clone()))
            .collect_view();
        view! { <td data-ui-slot="actions">{buttons}</td> }
    });

    let row_click = move |_: MouseEvent| {
        router.dispatch(&row, InteractionTarget::Row);
    };

    view! {
        <tr
            class=class
            data-ui-slot="row"
            data-ui-index=index
            data-ui-clickable=bool_token(clickable)
            data-ui-expanded=bool_token(expanded)
            on:click=row_click
        >
            {toggle}
            {cells}
            {action_cell}
        </tr>
        {extra.map(|extra| view! {
            <tr data-ui-slot="extra-row">
                <td colspan=column_span data-ui-slot="extra">{extra}</td>
            </tr>
        })}
    }
}

fn action_button<T: 'static>(
    action: ActionView<IconName>,
    row: T,
    router: RowEventRouter<T, IconName>,
) -> View {
    let ActionView {
        index,
        id,
        label,
        tone,
        icon,
        indicator,
    } = action;

    view! {
        <span data-ui-slot="row-action" data-ui-action=id>
            <IconButton
                icon
                variant=ButtonVariant::from(tone)
                size=ButtonSize::Sm
                aria_label=label.clone()
                title=label
                indicator=indicator.map(indicator_view)
                on_click=Callback::new(move |ev: MouseEvent| {
                    dispatch_contained(&ev, &router, &row, InteractionTarget::Action(index));
                })
            />
        </span>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use pretty_assertions::assert_eq;
    use table_contract::RowAction;

    use super::*;

    #[derive(Default)]
    struct RecordedClick {
        stopped: Cell<bool>,
    }

    impl PropagationGuard for RecordedClick {
        fn stop(&self) {
            self.stopped.set(true);
        }
    }

    fn router(log: &Rc<RefCell<Vec<String>>>) -> RowEventRouter<u32, IconName> {
        let row_log = Rc::clone(log);
        let action_log = Rc::clone(log);
        RowEventRouter::new(
            Some(Rc::new(move |row: &u32| row_log.borrow_mut().push(format!("row {row}")))),
            Rc::new(vec![RowAction::new(
                "archive",
                "Archive",
                IconName::ChevronRight,
                move |row: &u32| action_log.borrow_mut().push(format!("archive {row}")),
            )]),
        )
    }

    #[test]
    fn action_click_stops_before_reaching_the_row_handler() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let router = router(&log);
        let click = RecordedClick::default();

        assert!(dispatch_contained(&click, &router, &7, InteractionTarget::Action(0)));

        assert!(click.stopped.get());
        assert_eq!(*log.borrow(), vec!["archive 7".to_string()]);
    }

    #[test]
    fn unknown_action_index_still_stops_the_click() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let router = router(&log);
        let click = RecordedClick::default();

        assert!(!dispatch_contained(&click, &router, &7, InteractionTarget::Action(3)));

        assert!(click.stopped.get());
        assert!(log.borrow().is_empty());
    }
}
