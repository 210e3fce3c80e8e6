//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::net::dispatch::{Bridge, DispatchClient};
use crate::net::graph_sync::GraphSync;
use crate::pages::graph::GraphPage;
use crate::state::graph::GraphState;

/// Context handle the graph screen uses to dispatch events.
pub type GraphSyncContext = GraphSync<RwSignal<GraphState>>;

/// Root application component.
///
/// Provides the graph state, client config, and sync coordinator contexts.
#[component]
pub fn App(config: ClientConfig, bridge: Bridge) -> impl IntoView {
    provide_meta_context();

    let graph = RwSignal::new(GraphState::default());
    let sync: GraphSyncContext = GraphSync::new(DispatchClient::new(bridge), graph);

    provide_context(graph);
    provide_context(config);
    provide_context(sync);

    view! {
        <Stylesheet id="leptos" href="/pkg/hermenia-client.css"/>
        <Title text="Hermenia"/>

        <GraphPage/>
    }
}
