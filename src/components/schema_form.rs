//! Schema-driven form with a transient draft.
//!
//! ARCHITECTURE
//! ============
//! The schema is fixed for the lifetime of one mount; callers remount (e.g.
//! by keying on the active record) to switch schemas. Field controls are
//! fully controlled by the draft signal and report changes through one
//! `on_change` callback, which routes multi-value fields through
//! `Draft::apply` so selections accumulate.

use leptos::prelude::*;
use serde_json::Value;

use crate::components::field_input::FieldInput;
use crate::components::search_select::SearchSelect;
use crate::net::types::Record;
use crate::util::draft::Draft;
use crate::util::schema::{FieldDescriptor, FieldKind, FormSchema};

/// Render every visible field of `schema` and submit the draft.
///
/// The draft is cleared as soon as `on_submit` is handed its payload; the
/// outcome of whatever the caller does with it is not observed.
#[component]
pub fn SchemaForm(schema: FormSchema, on_submit: Callback<Record>) -> impl IntoView {
    let draft = RwSignal::new(Draft::default());
    let title = schema.title.clone();
    let submit_label = schema.submit_label().to_owned();
    let fields = schema.visible_fields().cloned().collect::<Vec<_>>();
    let schema = StoredValue::new(schema);

    let on_change = Callback::new(move |(key, value): (String, Value)| {
        schema.with_value(|s| {
            if let Some(field) = s.get(&key) {
                draft.update(|d| d.apply(field, value));
            }
        });
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = schema.with_value(|s| draft.try_update(|d| d.take_submission(s)));
        if let Some(payload) = payload {
            on_submit.run(payload);
        }
    };

    view! {
        <form class="schema-form" on:submit=on_form_submit>
            {title.map(|t| view! { <h2 class="schema-form__title">{t}</h2> })}
            {fields.into_iter().map(|field| field_control(field, draft, on_change)).collect_view()}
            <div class="schema-form__actions">
                <button class="btn btn--primary" type="submit">{submit_label}</button>
            </div>
        </form>
    }
}

fn field_control(field: FieldDescriptor, draft: RwSignal<Draft>, on_change: Callback<(String, Value)>) -> AnyView {
    match field.kind {
        FieldKind::Text | FieldKind::Number { .. } => {
            let shown = field.clone();
            let value = Signal::derive(move || draft.with(|d| d.display_text(&shown)));
            view! { <FieldInput field=field value=value on_change=on_change/> }.into_any()
        }
        FieldKind::SearchSingle { .. } | FieldKind::SearchMultiple { .. } => {
            let shown = field.clone();
            let value = Signal::derive(move || draft.with(|d| d.display_value(&shown)));
            view! { <SearchSelect field=field value=value on_change=on_change/> }.into_any()
        }
    }
}
