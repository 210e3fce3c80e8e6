//! Tauri webview bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inside the Tauri host, `window.__TAURI_INTERNALS__.invoke` reaches the
//! native `dispatch` command. Detection runs once at mount and the result is
//! handed to `DispatchClient::new`; nothing else probes the global.

use crate::net::dispatch::Bridge;

/// Bridge implementation backed by the Tauri IPC `invoke` entry point.
#[derive(Clone, Debug)]
pub struct TauriBridge {
    command: String,
}

impl TauriBridge {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }

    /// Return `Connected` when running inside the Tauri host.
    pub fn detect(command: &str) -> Bridge {
        if host_available() {
            Bridge::Connected(std::sync::Arc::new(Self::new(command)))
        } else {
            Bridge::Disconnected
        }
    }
}

#[cfg(feature = "csr")]
fn host_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::has(&window, &wasm_bindgen::JsValue::from_str("__TAURI_INTERNALS__")).unwrap_or(false)
}

#[cfg(not(feature = "csr"))]
fn host_available() -> bool {
    false
}

#[cfg(feature = "csr")]
mod ipc {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["window", "__TAURI_INTERNALS__"], js_name = invoke, catch)]
        pub(super) async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
    }
}

#[cfg(feature = "csr")]
impl crate::net::dispatch::BridgeHandle for TauriBridge {
    fn invoke(
        &self,
        request: crate::net::dispatch::BridgeRequest,
    ) -> futures::future::LocalBoxFuture<'static, Result<String, crate::net::dispatch::DispatchError>> {
        use crate::net::dispatch::DispatchError;
        use wasm_bindgen::JsValue;

        let command = self.command.clone();
        Box::pin(async move {
            let args = js_sys::Object::new();
            js_sys::Reflect::set(&args, &JsValue::from_str("event"), &JsValue::from_str(&request.event))
                .map_err(|e| DispatchError::Bridge(format!("{e:?}")))?;
            js_sys::Reflect::set(&args, &JsValue::from_str("payload"), &JsValue::from_str(&request.payload))
                .map_err(|e| DispatchError::Bridge(format!("{e:?}")))?;

            let response = ipc::invoke(&command, args.into())
                .await
                .map_err(|e| DispatchError::Bridge(e.as_string().unwrap_or_else(|| format!("{e:?}"))))?;
            response.as_string().ok_or(DispatchError::NonStringResponse)
        })
    }
}

// Outside the webview there is no host to reach; detection never yields this.
#[cfg(not(feature = "csr"))]
impl crate::net::dispatch::BridgeHandle for TauriBridge {
    fn invoke(
        &self,
        request: crate::net::dispatch::BridgeRequest,
    ) -> futures::future::LocalBoxFuture<'static, Result<String, crate::net::dispatch::DispatchError>> {
        let reason = format!("{} unavailable outside the Tauri host (event {})", self.command, request.event);
        Box::pin(async move { Err(crate::net::dispatch::DispatchError::Bridge(reason)) })
    }
}
