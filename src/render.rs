/// View model for the popup result panel

use crate::detector::{DetectionKind, DetectionResult};
use crate::error::InspectError;
use crate::links::ThemeLinks;
use crate::page::is_shopify_url;

pub const ERROR_TITLE: &str = "Connection Error";
pub const ERROR_HINT: &str = "Please refresh the page and try again.";
pub const HIDDEN_THEME_MESSAGE: &str = "Shopify store detected, but the theme is hidden.";
pub const NOT_SHOPIFY_MESSAGE: &str = "This page does not appear to be a Shopify store.";
pub const FALLBACK_NOTE: &str = "* Exact match not guaranteed via fallback method.";

/// What the result panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum RenderModel {
    /// The page content never reached the detector
    Error { title: String, hint: String },
    Info { message: String },
    Theme(ThemeCard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeCard {
    pub label: String,
    pub name: String,
    pub links: ThemeLinks,
    pub note: Option<String>,
}

/// Map an inspection outcome onto the panel contents
///
/// `page_url` only affects the wording when nothing was detected.
pub fn render_model(outcome: &Result<DetectionResult, InspectError>, page_url: &str) -> RenderModel {
    let result = match outcome {
        Ok(result) => result,
        Err(_) => {
            return RenderModel::Error {
                title: ERROR_TITLE.to_string(),
                hint: ERROR_HINT.to_string(),
            };
        }
    };

    match result.kind {
        DetectionKind::NotFound => {
            let message = if is_shopify_url(page_url) {
                HIDDEN_THEME_MESSAGE
            } else {
                NOT_SHOPIFY_MESSAGE
            };
            RenderModel::Info {
                message: message.to_string(),
            }
        }
        _ => {
            let fallback = result.is_fallback();
            RenderModel::Theme(ThemeCard {
                label: (if fallback { "Detected Theme (Fallback)" } else { "Active Theme" }).to_string(),
                name: result.value.clone(),
                links: ThemeLinks::for_name(&result.value),
                note: fallback.then(|| FALLBACK_NOTE.to_string()),
            })
        }
    }
}
