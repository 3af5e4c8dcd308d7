/// Marketplace links for a detected theme

use serde::{Deserialize, Serialize};

use crate::config::MarketplaceConfig;
use crate::slug::create_slug;

/// Slug and marketplace URLs derived from a theme name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeLinks {
    pub slug: String,
    pub shopify_store_url: String,
    pub themeforest_url: String,
}

impl ThemeLinks {
    /// Build links with the default marketplace bases
    pub fn for_name(name: &str) -> ThemeLinks {
        ThemeLinks::build(name, &MarketplaceConfig::default())
    }

    /// The theme store gets the slug as a path segment, ThemeForest gets the
    /// original name as a search term.
    pub fn build(name: &str, config: &MarketplaceConfig) -> ThemeLinks {
        let slug = create_slug(name);
        let shopify_store_url = format!("{}{}", config.theme_store_base, slug);
        let themeforest_url = format!("{}{}", config.themeforest_search_base, encode_query_value(name));

        ThemeLinks {
            slug,
            shopify_store_url,
            themeforest_url,
        }
    }
}

/// Percent-encode a query value, spaces as `%20`
fn encode_query_value(value: &str) -> String {
    // byte_serialize emits '+' only for spaces; a literal '+' comes out as %2B
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
