/// Host adapter: talks to the extension APIs through popup.js

use log::{info, warn};
use wasm_bindgen::prelude::*;

use crate::detector::{DetectionResult, detect_theme};
use crate::error::InspectError;
use crate::page::{PageSnapshot, TabInfo};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn collectPageSnapshot(tab_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn openTab(url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn delay(ms: i32) -> Result<(), JsValue>;
}

/// Result of inspecting the active tab, plus the URL it was inspected at
pub struct Inspection {
    pub page_url: String,
    pub outcome: Result<DetectionResult, InspectError>,
}

/// Run detection against the active tab of the current window
pub async fn inspect_active_tab() -> Inspection {
    let tab = match get_active_tab().await {
        Ok(tab) => tab,
        Err(e) => {
            warn!("Inspection aborted: {}", e);
            return Inspection {
                page_url: String::new(),
                outcome: Err(e),
            };
        }
    };

    let outcome = collect_snapshot(tab.id).await.map(|snapshot| detect_theme(&snapshot));
    match &outcome {
        Ok(result) => info!("Detected {:?}: {}", result.kind, result.value),
        Err(e) => warn!("Inspection of {} failed: {}", tab.url, e),
    }

    Inspection {
        page_url: tab.url,
        outcome,
    }
}

async fn get_active_tab() -> Result<TabInfo, InspectError> {
    let tab_js = getActiveTab()
        .await
        .map_err(|e| InspectError::Injection(format!("{:?}", e)))?;

    if tab_js.is_null() || tab_js.is_undefined() {
        return Err(InspectError::NoActiveTab);
    }

    serde_wasm_bindgen::from_value(tab_js).map_err(|e| InspectError::Snapshot(format!("{:?}", e)))
}

async fn collect_snapshot(tab_id: i32) -> Result<PageSnapshot, InspectError> {
    let snapshot_js = collectPageSnapshot(tab_id)
        .await
        .map_err(|e| InspectError::Injection(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(snapshot_js).map_err(|e| InspectError::Snapshot(format!("{:?}", e)))
}

/// Open a URL in a new, focused tab
pub async fn open_in_new_tab(url: String) {
    if let Err(e) = openTab(&url).await {
        warn!("Failed to open {}: {:?}", url, e);
    }
}

/// Sleep for the given number of milliseconds
pub async fn wait(ms: i32) {
    let _ = delay(ms).await;
}
