//! Injected account and listing collaborator

use std::future::Future;

use tracing::warn;

use crate::error::ListingError;
use crate::model::ListingBatch;
use crate::state::{Command, ListingEvent};

/// Where the page gets its wallet account and listings from
pub trait NftSource {
    /// Address of the connected wallet, if any
    fn current_account(&self) -> Option<String>;

    /// Fetch every listing on the marketplace. Entries may be `None`.
    fn fetch_nfts(&self) -> impl Future<Output = Result<ListingBatch, ListingError>>;
}

/// Event announcing the source's current account
pub fn account_event<S: NftSource>(source: &S) -> ListingEvent {
    ListingEvent::AccountChanged(source.current_account())
}

/// Execute a reducer command and return the event that completes it
pub async fn run_command<S: NftSource>(source: &S, command: Command) -> ListingEvent {
    match command {
        Command::Fetch { generation } => {
            let result = source.fetch_nfts().await;
            if let Err(e) = &result {
                warn!("fetch_nfts failed for generation {}: {}", generation, e);
            }
            ListingEvent::FetchResolved { generation, result }
        }
    }
}
