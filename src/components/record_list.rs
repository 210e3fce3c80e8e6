//! Record list with per-row press and action handlers.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::Record;
use crate::util::record_view::{BoundRow, RowActions, row_label};

/// Custom row renderer: `(row, record, label) -> view`.
///
/// `row` carries the record id and the list's actions bound to it.
pub type RowRenderer = Arc<dyn Fn(BoundRow, Record, Option<String>) -> AnyView + Send + Sync>;

/// Render `records` as rows labeled by `target_key`.
///
/// Rows use [`RecordRow`] unless a `row` renderer is supplied.
#[component]
pub fn RecordList(
    #[prop(into)] records: Signal<Vec<(String, Record)>>,
    #[prop(optional, into)] target_key: Option<String>,
    #[prop(optional)] actions: RowActions,
    #[prop(optional)] row: Option<RowRenderer>,
) -> impl IntoView {
    let rows = move || {
        records
            .get()
            .into_iter()
            .map(|(id, record)| {
                let label = row_label(&record, target_key.as_deref());
                let bound = actions.bind(id);
                match &row {
                    Some(render) => render(bound, record, label),
                    None => view! { <RecordRow row=bound label=label/> }.into_any(),
                }
            })
            .collect_view()
    };

    view! { <ul class="record-list">{rows}</ul> }
}

/// Default row: a pressable label with nested action buttons.
///
/// Action buttons stop propagation so they never also press the row.
#[component]
pub fn RecordRow(row: BoundRow, label: Option<String>) -> impl IntoView {
    let buttons = row
        .labels()
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>()
        .into_iter()
        .map(|action| {
            let row = row.clone();
            let text = action.clone();
            view! {
                <button
                    class="btn record-row__action"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        row.run(&action);
                    }
                >
                    {text}
                </button>
            }
        })
        .collect_view();

    let on_press = move |_| row.press();

    view! {
        <li class="record-row" role="button" on:click=on_press>
            <span class="record-row__label">{label.unwrap_or_default()}</span>
            <span class="record-row__actions">{buttons}</span>
        </li>
    }
}
