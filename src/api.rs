//! HTTP listing source for the marketplace indexer
//!
//! Listings come from the indexer's `/api/market-items` endpoint as a JSON
//! array in which unsold or burned tokens show up as `null`.

use leptos::prelude::*;
use nft_market_core::{ListingBatch, ListingError, NftSource};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use tracing::{debug, error};

// ============ HTTP Fetch Helpers ============

async fn http_get<T: DeserializeOwned>(url: &str) -> Result<T, ListingError> {
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ListingError::Fetch(format!("{:?}", e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ListingError::Fetch(format!("{:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| ListingError::Fetch("No window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            error!("http_get: Fetch failed: {:?}", e);
            ListingError::Fetch(format!("{:?}", e))
        })?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ListingError::Fetch(format!("{:?}", e)))?;

    if !resp.ok() {
        return Err(ListingError::Fetch(format!("HTTP error: {}", resp.status())));
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        resp.json().map_err(|e| ListingError::Decode(format!("{:?}", e)))?,
    )
    .await
    .map_err(|e| ListingError::Decode(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| {
        error!("http_get: Deserialization failed: {}", e);
        ListingError::Decode(e.to_string())
    })
}

// ============ Listing Source ============

/// Marketplace client handed to the page through context
#[derive(Debug, Clone)]
pub struct MarketClient {
    api_base: String,
    account: ReadSignal<Option<String>>,
}

impl MarketClient {
    pub fn new(api_base: impl Into<String>, account: ReadSignal<Option<String>>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            account,
        }
    }

    fn market_items_url(&self) -> String {
        format!("{}/api/market-items", self.api_base)
    }
}

impl NftSource for MarketClient {
    // Tracked read: an effect calling this re-runs when the wallet switches
    fn current_account(&self) -> Option<String> {
        self.account.get()
    }

    async fn fetch_nfts(&self) -> Result<ListingBatch, ListingError> {
        let url = self.market_items_url();
        debug!("MarketClient: Fetching {}", url);
        let batch: ListingBatch = http_get(&url).await?;
        debug!("MarketClient: Received {} entries", batch.len());
        Ok(batch)
    }
}
