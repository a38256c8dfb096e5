use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListingError {
    #[error("failed to fetch listings: {0}")]
    Fetch(String),

    #[error("failed to decode listings: {0}")]
    Decode(String),

    #[error("invalid view configuration: {0}")]
    Config(String),

    #[error("no wallet provider found")]
    NoWallet,

    #[error("wallet request failed: {0}")]
    Wallet(String),
}

impl From<serde_json::Error> for ListingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
