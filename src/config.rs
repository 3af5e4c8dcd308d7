/// Fixed configuration for Theme Sleuth

/// Literal that marks a script as carrying the Shopify theme object
pub const THEME_SCRIPT_MARKER: &str = "Shopify.theme";

/// Name attribute of the meta element holding the numeric theme ID
pub const THEME_ID_META_NAME: &str = "shopify-theme-id";

/// Value reported when every detection strategy comes up empty
pub const NOT_FOUND_PLACEHOLDER: &str = "Theme details not found.";

/// Substring of a tab URL that identifies a Shopify-hosted store
pub const SHOPIFY_HOST_MARKER: &str = "myshopify.com";

/// Minimum time the preloader stays visible
pub const PRELOADER_DELAY_MS: i32 = 600;

pub const SHOPIFY_THEME_STORE_BASE: &str = "https://themes.shopify.com/themes/";
pub const THEMEFOREST_SEARCH_BASE: &str = "https://themeforest.net/category/ecommerce/shopify?term=";

/// Base URLs of the two marketplaces the popup links to
#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceConfig {
    pub theme_store_base: String,
    pub themeforest_search_base: String,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        MarketplaceConfig {
            theme_store_base: SHOPIFY_THEME_STORE_BASE.to_string(),
            themeforest_search_base: THEMEFOREST_SEARCH_BASE.to_string(),
        }
    }
}
