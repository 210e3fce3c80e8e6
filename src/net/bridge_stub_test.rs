//! In-memory bridges for driving dispatch flows without a host webview.

use std::sync::{Arc, Mutex};

use futures::future::LocalBoxFuture;

use super::dispatch::{Bridge, BridgeHandle, BridgeRequest, DispatchError};

type Responder = Box<dyn Fn(&BridgeRequest) -> Result<String, DispatchError> + Send + Sync>;

/// Bridge that records every request and answers through a closure.
pub(crate) struct StubBridge {
    responder: Responder,
    calls: Mutex<Vec<BridgeRequest>>,
}

impl StubBridge {
    pub(crate) fn new(
        responder: impl Fn(&BridgeRequest) -> Result<String, DispatchError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self { responder: Box::new(responder), calls: Mutex::new(Vec::new()) })
    }

    /// Answer every request with the same JSON text.
    pub(crate) fn echo(response: &str) -> Arc<Self> {
        let response = response.to_owned();
        Self::new(move |_| Ok(response.clone()))
    }

    pub(crate) fn calls(&self) -> Vec<BridgeRequest> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.event).collect()
    }
}

impl BridgeHandle for StubBridge {
    fn invoke(&self, request: BridgeRequest) -> LocalBoxFuture<'static, Result<String, DispatchError>> {
        let result = (self.responder)(&request);
        self.calls.lock().expect("calls lock").push(request);
        Box::pin(async move { result })
    }
}

pub(crate) fn connected(stub: &Arc<StubBridge>) -> Bridge {
    Bridge::Connected(stub.clone())
}
