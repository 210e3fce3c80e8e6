//! Read-only detail view: one `key: value` line per record field.

use leptos::prelude::*;

use crate::net::types::Record;
use crate::util::record_view::detail_lines;

#[component]
pub fn RecordDetails(#[prop(into)] record: Signal<Option<Record>>) -> impl IntoView {
    let lines = move || {
        record
            .get()
            .map(|r| detail_lines(&r))
            .unwrap_or_default()
            .into_iter()
            .map(|line| view! { <li class="record-details__line">{line}</li> })
            .collect_view()
    };

    view! { <ul class="record-details">{lines}</ul> }
}
