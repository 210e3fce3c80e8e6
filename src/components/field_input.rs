//! Labeled single-line input for text and numeric schema fields.

use leptos::prelude::*;
use serde_json::Value;

use crate::util::schema::FieldDescriptor;

/// Controlled input; every keystroke reports `(key, value)` upward.
///
/// Numeric kinds get a numeric keypad and report parsed numbers; text that
/// does not parse is reported as typed so the draft never loses input.
#[component]
pub fn FieldInput(
    field: FieldDescriptor,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<(String, Value)>,
) -> impl IntoView {
    let title = field.label().to_owned();
    let input_type = if field.kind.is_numeric() { "number" } else { "text" };
    let input_mode = field.kind.input_mode();
    let name = field.key.clone();
    let FieldDescriptor { key, kind, .. } = field;

    view! {
        <label class="field">
            <span class="field__title">{title}</span>
            <input
                class="field__input"
                type=input_type
                inputmode=input_mode
                name=name
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run((key.clone(), kind.coerce_input(&event_target_value(&ev))));
                }
            />
        </label>
    }
}
