use super::*;
use crate::capabilities::{ModalState, Openable};

#[component]
/// Dialog overlay rendered while `state` is open.
///
/// Escape, the close button, and a backdrop click all close the dialog and
/// fire `on_close`; clicks inside the dialog body stay inside it.
pub fn Modal(
    state: RwSignal<ModalState>,
    #[prop(into)] title: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let close = move || {
        let was_open = state.with_untracked(|modal| modal.is_open());
        state.update(|modal| modal.set_open(false));
        if was_open {
            if let Some(on_close) = on_close.as_ref() {
                on_close.call(());
            }
        }
    };
    let title_id = format!("ui-modal-{}", title.to_lowercase().replace(' ', "-"));

    view! {
        <Show when=move || state.with(|modal| modal.is_open()) fallback=|| ()>
            <div
                class="ui-modal-backdrop"
                data-ui-primitive="true"
                data-ui-kind="modal-backdrop"
                on:click=move |_| close()
            >
                <div
                    class=merge_layout_class("ui-modal", layout_class)
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title_id.clone()
                    tabindex="-1"
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close();
                        }
                    }
                >
                    <header data-ui-slot="header">
                        <span id=title_id.clone() data-ui-slot="title">{title.clone()}</span>
                        <IconButton
                            icon=IconName::Dismiss
                            size=ButtonSize::Sm
                            aria_label="Close".to_string()
                            ui_slot="close"
                            on_click=Callback::new(move |_| close())
                        />
                    </header>
                    <div data-ui-slot="body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
