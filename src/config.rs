//! Page configuration

use nft_market_core::ViewConfig;
use tracing::warn;

/// Indexer base URL used when `NFT_MARKET_API_BASE` isn't set at build time
const DEFAULT_API_BASE: &str = "http://127.0.0.1:3001";

pub fn api_base() -> &'static str {
    option_env!("NFT_MARKET_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Read view overrides from `<meta name="nft-market-config" content="{...}">`
pub fn load_view_config() -> ViewConfig {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("meta[name=\"nft-market-config\"]").ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));

    let Some(content) = content else {
        return ViewConfig::default();
    };

    match ViewConfig::from_json(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring view config override: {}", e);
            ViewConfig::default()
        }
    }
}
