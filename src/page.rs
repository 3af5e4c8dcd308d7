/// Page data handed over by the host and the capability the detector reads it through

use serde::{Deserialize, Serialize};

/// Read-only view of an inspected document
pub trait PageInspector {
    /// Text content of every script element, in document order
    fn script_texts(&self) -> Vec<String>;

    /// `content` attribute of the meta element with the given `name`
    fn meta_content(&self, name: &str) -> Option<String>;
}

/// Information about the active browser tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: i32,
    pub url: String,
}

/// Snapshot of a document collected by the injected page script
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default)]
    pub metas: Vec<MetaTag>,
}

/// A named meta element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

impl PageSnapshot {
    pub fn new(scripts: Vec<String>, metas: Vec<MetaTag>) -> PageSnapshot {
        PageSnapshot { scripts, metas }
    }
}

impl PageInspector for PageSnapshot {
    fn script_texts(&self) -> Vec<String> {
        self.scripts.clone()
    }

    // First element wins, like querySelector
    fn meta_content(&self, name: &str) -> Option<String> {
        self.metas
            .iter()
            .find(|meta| meta.name == name)
            .map(|meta| meta.content.clone())
    }
}

/// Whether a tab URL points at a Shopify-hosted store
pub fn is_shopify_url(url: &str) -> bool {
    url.contains(crate::config::SHOPIFY_HOST_MARKER)
}
