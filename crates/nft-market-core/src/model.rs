//! Marketplace listing types

use serde::{Deserialize, Serialize};

/// A single marketplace listing as returned by the listing source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub token_id: u64,
    pub price: f64,
    pub seller: String,
    #[serde(default)]
    pub owner: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, rename = "tokenURI")]
    pub token_uri: String,
}

/// Raw fetch result. `None` entries are null placeholders from the source.
pub type ListingBatch = Vec<Option<Nft>>;

/// Drop null placeholders, keeping the order of the remaining listings
pub fn discard_missing(batch: ListingBatch) -> Vec<Nft> {
    batch.into_iter().flatten().collect()
}

#[cfg(test)]
pub(crate) fn nft(token_id: u64, price: f64, seller: &str, name: &str) -> Nft {
    Nft {
        token_id,
        price,
        seller: seller.to_string(),
        owner: String::new(),
        name: name.to_string(),
        description: String::new(),
        image: String::new(),
        token_uri: String::new(),
    }
}
