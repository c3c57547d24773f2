use std::rc::Rc;

use super::*;
use crate::capabilities::{
    AccordionMode, AccordionState, DisclosureState, Openable, Selectable, TabsState,
};

#[component]
/// Shared tab list primitive.
///
/// With a `state`, the list handles arrow/Home/End keys and reports the newly
/// active tab id through `on_change`.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] state: Option<RwSignal<TabsState>>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            role="tablist"
            aria-label=aria_label
            on:keydown=move |ev: KeyboardEvent| {
                let Some(state) = state else {
                    return;
                };
                let key = ev.key();
                if !state.try_update(|tabs| tabs.apply_key(&key)).unwrap_or(false) {
                    return;
                }
                ev.prevent_default();
                let active = state.with_untracked(|tabs| tabs.active().map(str::to_string));
                if let (Some(on_change), Some(active)) = (on_change.as_ref(), active) {
                    on_change.call(active);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab trigger primitive.
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: String,
    #[prop(into)] controls: String,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let tabindex = if selected.get_untracked() { 0 } else { -1 };

    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            id=id
            role="tab".to_string()
            aria_controls=controls
            selected=selected
            tabindex=tabindex
            ui_slot="tab"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Shared disclosure panel for secondary or advanced content.
///
/// Owns its open flag unless a `state` signal is passed in.
pub fn DisclosurePanel(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] state: Option<RwSignal<DisclosureState>>,
    #[prop(optional)] default_open: bool,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    children: ChildrenFn,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| create_rw_signal(DisclosureState { open: default_open }));
    let expanded = Signal::derive(move || state.with(|disclosure| disclosure.is_open()));
    let toggle_label = title.clone();

    view! {
        <section
            class=merge_layout_class("ui-disclosure", layout_class)
            data-ui-primitive="true"
            data-ui-kind="disclosure"
            data-ui-state=move || if expanded.get() { "open" } else { "closed" }
            data-ui-expanded=move || bool_token(expanded.get())
        >
            <Button
                layout_class="ui-disclosure-toggle"
                ui_slot="toggle"
                variant=ButtonVariant::Quiet
                selected=expanded
                aria_expanded=expanded
                aria_label=toggle_label
                on_click=Callback::new(move |_| {
                    let open = state.try_update(|disclosure| disclosure.toggle()).unwrap_or(false);
                    if let Some(on_toggle) = on_toggle.as_ref() {
                        on_toggle.call(open);
                    }
                })
            >
                <span data-ui-slot="copy">
                    <span data-ui-slot="title">{title}</span>
                    {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
                </span>
                <span data-ui-slot="indicator" aria-hidden="true">
                    {move || {
                        let icon = if expanded.get() { IconName::ChevronUp } else { IconName::ChevronDown };
                        view! { <Icon icon size=IconSize::Xs /> }
                    }}
                </span>
            </Button>
            <Show when=move || expanded.get() fallback=|| ()>
                <div data-ui-slot="body">{children()}</div>
            </Show>
        </section>
    }
}

#[derive(Clone)]
/// One collapsible section of an [`Accordion`].
pub struct AccordionItem {
    /// Stable item id; also prefixes the trigger and panel element ids.
    pub id: String,
    /// Trigger label.
    pub title: String,
    /// Lazily rendered body.
    pub content: Rc<dyn Fn() -> View>,
}

impl AccordionItem {
    /// Creates an item whose body is rendered by `content` while open.
    pub fn new<V: IntoView>(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Fn() -> V + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: Rc::new(move || content().into_view()),
        }
    }
}

#[component]
/// Stack of disclosure sections sharing one [`AccordionState`].
///
/// `mode` only seeds the locally owned state; a passed-in `state` keeps its own mode.
pub fn Accordion(
    items: Vec<AccordionItem>,
    #[prop(default = AccordionMode::Single)] mode: AccordionMode,
    #[prop(optional)] state: Option<RwSignal<AccordionState>>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<Vec<String>>>,
) -> impl IntoView {
    let state = state.unwrap_or_else(|| create_rw_signal(AccordionState::new(mode)));
    let mode_token = match mode {
        AccordionMode::Single => "single",
        AccordionMode::Multiple => "multiple",
    };

    view! {
        <div
            class=merge_layout_class("ui-accordion", layout_class)
            data-ui-primitive="true"
            data-ui-kind="accordion"
            data-ui-variant=mode_token
        >
            {items
                .into_iter()
                .map(|AccordionItem { id, title, content }| {
                    let trigger_id = format!("{id}-trigger");
                    let panel_id = format!("{id}-panel");
                    let labelled_by = trigger_id.clone();
                    let region_id = panel_id.clone();
                    let open_key = id.clone();
                    let open = Signal::derive(move || state.with(|accordion| accordion.is_selected(&open_key)));
                    let on_trigger = Callback::new(move |_| {
                        state.update(|accordion| {
                            accordion.select(id.clone());
                        });
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(state.with_untracked(|accordion| accordion.open_items().to_vec()));
                        }
                    });

                    view! {
                        <section
                            data-ui-slot="item"
                            data-ui-state=move || if open.get() { "open" } else { "closed" }
                        >
                            <Button
                                id=trigger_id
                                ui_slot="trigger"
                                variant=ButtonVariant::Quiet
                                aria_controls=panel_id
                                aria_expanded=open
                                selected=open
                                trailing_icon=IconName::ChevronDown
                                on_click=on_trigger
                            >
                                {title}
                            </Button>
                            <Show when=move || open.get() fallback=|| ()>
                                <div
                                    id=region_id.clone()
                                    role="region"
                                    aria-labelledby=labelled_by.clone()
                                    data-ui-slot="body"
                                >
                                    {content()}
                                </div>
                            </Show>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
