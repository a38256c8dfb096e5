//! Name search over the working list

use crate::model::Nft;

/// Result of applying a search query
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// At least one listing matched; these become the working list
    Filtered(Vec<Nft>),
    /// Nothing matched, so the working list falls back to the snapshot
    Restored(Vec<Nft>),
}

impl SearchOutcome {
    pub fn into_listings(self) -> Vec<Nft> {
        match self {
            SearchOutcome::Filtered(list) | SearchOutcome::Restored(list) => list,
        }
    }
}

/// Case-insensitive substring match on the listing name
pub fn matches_query(nft: &Nft, query: &str) -> bool {
    nft.name.to_lowercase().contains(&query.to_lowercase())
}

/// Filter `working` by `query`. An empty match set never yields an empty view:
/// the snapshot is restored instead.
pub fn search_listings(working: &[Nft], snapshot: &[Nft], query: &str) -> SearchOutcome {
    let matches: Vec<Nft> = working
        .iter()
        .filter(|nft| matches_query(nft, query))
        .cloned()
        .collect();

    if matches.is_empty() {
        SearchOutcome::Restored(snapshot.to_vec())
    } else {
        SearchOutcome::Filtered(matches)
    }
}

/// Restore the snapshot, but only when there is something on both sides
pub fn clear_search(working: &[Nft], snapshot: &[Nft]) -> Option<Vec<Nft>> {
    if !working.is_empty() && !snapshot.is_empty() {
        Some(snapshot.to_vec())
    } else {
        None
    }
}
