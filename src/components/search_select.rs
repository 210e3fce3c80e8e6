//! Searchable selector control for `search` schema fields.
//!
//! DESIGN
//! ======
//! Query/focus state lives in a `SearchState` signal local to the control.
//! Blur schedules a close after `ClientConfig::blur_grace_ms`; the token
//! returned by `SearchState::blur` makes a re-focus or a selection cancel the
//! pending close. An effect re-syncs the query whenever the field value
//! changes from outside, so a cleared draft clears the shown label.

use leptos::prelude::*;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::util::schema::{FieldDescriptor, SelectOption};
use crate::util::search::{SearchState, selected_labels};

#[component]
pub fn SearchSelect(
    field: FieldDescriptor,
    #[prop(into)] value: Signal<Value>,
    on_change: Callback<(String, Value)>,
) -> impl IntoView {
    let grace_ms = use_context::<ClientConfig>().unwrap_or_default().blur_grace_ms;
    let title = field.label().to_owned();
    let options = field.kind.options().to_vec();
    let state = RwSignal::new(SearchState::seeded(&options, &value.get_untracked()));
    let key = field.key;

    // Track value changes made outside the control, such as the form
    // clearing its draft after submit.
    {
        let options = options.clone();
        Effect::new(move |_| {
            let current = value.get();
            state.update(|s| s.sync_to(&options, &current));
        });
    }

    let pick = Callback::new(move |option: SelectOption| {
        if let Some(picked) = state.try_update(|s| s.select(&option)) {
            on_change.run((key.clone(), picked));
        }
    });

    let on_blur = move |_| {
        let Some(token) = state.try_update(SearchState::blur) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(grace_ms).await;
                state.try_update(|s| s.blur_elapsed(token));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = grace_ms;
            state.update(|s| s.blur_elapsed(token));
        }
    };

    let chips = field.kind.is_multiple().then(|| {
        let options = options.clone();
        view! {
            <ul class="search-select__chips">
                {move || {
                    selected_labels(&options, &value.get())
                        .into_iter()
                        .map(|label| view! { <li class="search-select__chip">{label}</li> })
                        .collect_view()
                }}
            </ul>
        }
    });

    let candidates = move || {
        state
            .with(|s| s.candidates(&options).into_iter().cloned().collect::<Vec<_>>())
            .into_iter()
            .map(|option| {
                let label = option.label.clone();
                view! {
                    <li class="search-select__candidate" on:click=move |_| pick.run(option.clone())>
                        {label}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="search-select">
            <label class="field">
                <span class="field__title">{title}</span>
                <input
                    class="field__input"
                    type="text"
                    autocomplete="off"
                    prop:value=move || state.with(|s| s.query().to_owned())
                    on:focus=move |_| state.update(SearchState::focus)
                    on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                    on:blur=on_blur
                />
            </label>
            {chips}
            <ul class="search-select__candidates">{candidates}</ul>
        </div>
    }
}
