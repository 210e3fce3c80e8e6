//! Modal drawer that hosts forms and detail views.
//!
//! The drawer is fully controlled: `open` comes from the caller and every
//! close path (close button, backdrop click, Escape) reports
//! `on_open_change(false)` without touching any local state.

use leptos::prelude::*;

#[component]
pub fn Drawer(
    #[prop(into)] open: Signal<bool>,
    on_open_change: Callback<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let on_backdrop = move |_| on_open_change.run(false);
    let on_close_click = move |_| on_open_change.run(false);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_open_change.run(false);
        }
    });

    view! {
        <Show when=move || open.get()>
            <div class="drawer__backdrop" on:click=on_backdrop>
                <aside
                    class="drawer"
                    role="dialog"
                    aria-modal="true"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                >
                    <div class="drawer__header">
                        <button class="drawer__close" on:click=on_close_click title="Close">
                            "✕"
                        </button>
                    </div>
                    <div class="drawer__body">{children()}</div>
                </aside>
            </div>
        </Show>
    }
}
