/// Host browser tab-management capability.
///
/// The popup talks to the browser through a small JS bridge; the trait keeps
/// that surface swappable so tests can stand in a fake host instead of a live
/// browser runtime.

use wasm_bindgen::prelude::*;

use crate::error::HostError;
use crate::tab_data::{HostTab, TabId};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getAllTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn activateTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTab(tab_id: i32) -> Result<(), JsValue>;
}

/// Capability surface of the host browser's tab API.
#[allow(async_fn_in_trait)]
pub trait TabHost {
    /// List all open tabs, unfiltered.
    async fn query_tabs(&self) -> Result<Vec<HostTab>, HostError>;

    /// Bring the tab with the given id to the foreground.
    async fn activate(&self, id: TabId) -> Result<(), HostError>;

    /// Close the tab with the given id; resolves once the host confirms.
    async fn remove(&self, id: TabId) -> Result<(), HostError>;

    /// Current time in epoch milliseconds.
    fn now_ms(&self) -> f64;
}

/// Live host backed by the extension's JS bridge.
pub struct ChromeHost;

impl TabHost for ChromeHost {
    async fn query_tabs(&self) -> Result<Vec<HostTab>, HostError> {
        let tabs_js = getAllTabs()
            .await
            .map_err(|e| HostError::Query(format!("{:?}", e)))?;
        serde_wasm_bindgen::from_value(tabs_js).map_err(|e| HostError::Decode(format!("{:?}", e)))
    }

    async fn activate(&self, id: TabId) -> Result<(), HostError> {
        activateTab(id)
            .await
            .map_err(|e| HostError::Activate(format!("{:?}", e)))
    }

    async fn remove(&self, id: TabId) -> Result<(), HostError> {
        removeTab(id)
            .await
            .map_err(|e| HostError::Remove(format!("{:?}", e)))
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}
