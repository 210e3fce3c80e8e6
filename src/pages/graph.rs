//! Graph screen: node list, create action, and the node drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<GraphState>`, `ClientConfig`, and the `GraphSync`
//! coordinator from context. Row presses and the create button only touch
//! local drawer state; submit and delete go through the coordinator, which
//! reconciles collections when the backend answers.

use leptos::prelude::*;

use crate::app::GraphSyncContext;
use crate::components::drawer::Drawer;
use crate::components::record_details::RecordDetails;
use crate::components::record_list::RecordList;
use crate::components::schema_form::SchemaForm;
use crate::config::ClientConfig;
use crate::net::types::Record;
use crate::state::graph::GraphState;
use crate::util::record_view::RowActions;
use crate::util::schema::FormSchema;

#[component]
pub fn GraphPage() -> impl IntoView {
    let graph = expect_context::<RwSignal<GraphState>>();
    let config = expect_context::<ClientConfig>();
    let sync = expect_context::<GraphSyncContext>();

    // Load the initial snapshot on mount.
    #[cfg(feature = "csr")]
    {
        let sync = sync.clone();
        leptos::task::spawn_local(async move {
            sync.start().await;
        });
    }

    let label_key = config.label_key.clone();
    let config = StoredValue::new(config);

    let rows = Signal::derive(move || graph.with(GraphState::node_rows));
    let actions = {
        let sync = sync.clone();
        RowActions::new()
            .on_press(move |id| graph.update(|s| s.open_edit(id)))
            .action("Delete", move |id| {
                let sync = sync.clone();
                let id = id.to_owned();
                leptos::task::spawn_local(async move {
                    sync.delete(id).await;
                });
            })
    };

    let on_submit = Callback::new(move |values: Record| {
        let sync = sync.clone();
        leptos::task::spawn_local(async move {
            sync.submit(values).await;
        });
    });

    let drawer_open = Signal::derive(move || graph.with(|s| s.drawer_open));
    let on_open_change = Callback::new(move |open: bool| graph.update(|s| s.set_drawer_open(open)));

    // Remount the form only when the drawer target changes, so reconciles
    // landing mid-edit keep the draft.
    let form_key = Memo::new(move |_| graph.with(|s| (s.active.clone(), s.drawer_open)));
    let node_form = move || {
        form_key.track();
        let schema = config
            .with_value(|c| graph.with_untracked(|s| s.node_schema(c)))
            .unwrap_or_else(|e| {
                leptos::logging::warn!("node form unavailable: {e}");
                FormSchema::new()
            });
        view! { <SchemaForm schema=schema on_submit=on_submit/> }
    };

    let details = Signal::derive(move || {
        config.with_value(|c| graph.with(|s| s.active.as_deref().and_then(|id| s.detail_record(id, c))))
    });

    view! {
        <div class="graph-page">
            <header class="graph-page__header">
                <h1>"Nodes"</h1>
                <button class="btn btn--primary" on:click=move |_| graph.update(GraphState::open_create)>
                    "+ New Node"
                </button>
            </header>

            <RecordList records=rows target_key=label_key actions=actions/>

            <Drawer open=drawer_open on_open_change=on_open_change>
                {node_form}
                <RecordDetails record=details/>
            </Drawer>
        </div>
    }
}
