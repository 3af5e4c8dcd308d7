/// Theme Sleuth - Chrome Extension that detects Shopify themes
/// Built with Rust + WASM + Yew

pub mod config;
pub mod detector;
pub mod error;
pub mod links;
pub mod page;
pub mod render;
pub mod slug;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::page::PageSnapshot;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export core functions for JavaScript access
#[wasm_bindgen]
pub fn create_slug(text: &str) -> String {
    slug::create_slug(text)
}

/// Detect the theme from a page snapshot, returned as JSON
#[wasm_bindgen]
pub fn detect_theme(snapshot: JsValue) -> Result<String, JsValue> {
    let snapshot: PageSnapshot = serde_wasm_bindgen::from_value(snapshot)?;
    detect_theme_json(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn detect_theme_json(snapshot: &PageSnapshot) -> serde_json::Result<String> {
    serde_json::to_string(&detector::detect_theme(snapshot))
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
