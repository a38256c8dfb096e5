//! Listing page state and the reducer that drives it
//!
//! The page reacts to a handful of events: the wallet account changing, a fetch
//! completing, the user picking a sort order, searching, expanding the grid,
//! and the window being resized or scrolled. Each event is applied through
//! [`ListingState::reduce`], which may hand back a [`Command`] for the caller
//! to execute asynchronously.
//!
//! The working list and the snapshot are only ever written here.

use tracing::{debug, warn};

use crate::carousel::{self, ContainerGeometry};
use crate::config::ViewConfig;
use crate::creators::{self, CreatorAggregate};
use crate::error::ListingError;
use crate::model::{self, ListingBatch, Nft};
use crate::pagination::Pagination;
use crate::scroll_top;
use crate::search;
use crate::sort::{self, SortCriterion};

#[derive(Debug, Clone, PartialEq)]
pub enum ListingEvent {
    /// The connected wallet changed (or was first observed)
    AccountChanged(Option<String>),
    /// A fetch issued for `generation` finished
    FetchResolved {
        generation: u64,
        result: Result<ListingBatch, ListingError>,
    },
    SortSelected(SortCriterion),
    Search(String),
    ClearSearch,
    ShowMore,
    Resized { geometry: ContainerGeometry },
    Scrolled { scroll_y: f64 },
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch { generation: u64 },
}

/// What the page body should render
#[derive(Debug, Clone, PartialEq)]
pub enum PageStatus {
    Loading,
    ConnectWallet,
    Empty,
    Failed(String),
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    nfts: Vec<Nft>,
    snapshot: Vec<Nft>,
    loading: bool,
    load_error: Option<ListingError>,
    active_sort: SortCriterion,
    pagination: Pagination,
    hide_carousel_buttons: bool,
    show_scroll_button: bool,
    account: Option<String>,
    account_observed: bool,
    generation: u64,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            nfts: Vec::new(),
            snapshot: Vec::new(),
            loading: true,
            load_error: None,
            active_sort: SortCriterion::default(),
            pagination: Pagination::default(),
            hide_carousel_buttons: false,
            show_scroll_button: false,
            account: None,
            account_observed: false,
            generation: 0,
        }
    }
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns a command when the caller has async work to do.
    pub fn reduce(&mut self, event: ListingEvent, config: &ViewConfig) -> Option<Command> {
        match event {
            ListingEvent::AccountChanged(account) => self.on_account_changed(account),
            ListingEvent::FetchResolved { generation, result } => {
                self.on_fetch_resolved(generation, result);
                None
            }
            ListingEvent::SortSelected(criterion) => {
                if criterion != self.active_sort {
                    debug!("Sorting {} listings by {:?}", self.nfts.len(), criterion);
                    self.active_sort = criterion;
                    self.nfts = sort::sort_listings(&self.nfts, criterion);
                }
                None
            }
            ListingEvent::Search(query) => {
                let outcome = search::search_listings(&self.nfts, &self.snapshot, &query);
                if let search::SearchOutcome::Restored(_) = outcome {
                    debug!("Search '{}' matched nothing, restoring snapshot", query);
                }
                self.nfts = outcome.into_listings();
                None
            }
            ListingEvent::ClearSearch => {
                if let Some(restored) = search::clear_search(&self.nfts, &self.snapshot) {
                    self.nfts = restored;
                }
                None
            }
            ListingEvent::ShowMore => {
                self.pagination.expand();
                None
            }
            ListingEvent::Resized { geometry } => {
                self.hide_carousel_buttons = carousel::buttons_hidden(geometry);
                None
            }
            ListingEvent::Scrolled { scroll_y } => {
                self.show_scroll_button = scroll_top::scroll_button_visible(scroll_y, config);
                None
            }
        }
    }

    /// Whether `event` would alter the state. Viewport events fire continuously,
    /// so callers skip publishing a new state when nothing moved.
    pub fn changes(&self, event: &ListingEvent, config: &ViewConfig) -> bool {
        match event {
            ListingEvent::Scrolled { scroll_y } => {
                scroll_top::scroll_button_visible(*scroll_y, config) != self.show_scroll_button
            }
            ListingEvent::Resized { geometry } => {
                carousel::buttons_hidden(*geometry) != self.hide_carousel_buttons
            }
            ListingEvent::SortSelected(criterion) => *criterion != self.active_sort,
            ListingEvent::ShowMore => self.pagination.shows_more_control(),
            _ => true,
        }
    }

    fn on_account_changed(&mut self, account: Option<String>) -> Option<Command> {
        // Treat an empty address the same as no wallet
        let account = account.filter(|a| !a.is_empty());
        if self.account_observed && account == self.account {
            return None;
        }
        self.account_observed = true;
        self.account = account;
        self.generation += 1;
        self.load_error = None;

        match &self.account {
            Some(account) => {
                debug!("Account {} connected, fetching listings (generation {})", account, self.generation);
                self.loading = true;
                Some(Command::Fetch { generation: self.generation })
            }
            None => {
                debug!("No account connected, clearing listings");
                self.nfts.clear();
                self.snapshot.clear();
                self.loading = false;
                None
            }
        }
    }

    fn on_fetch_resolved(&mut self, generation: u64, result: Result<ListingBatch, ListingError>) {
        if generation != self.generation {
            warn!(
                "Discarding stale listing fetch (generation {}, current {})",
                generation, self.generation
            );
            return;
        }

        match result {
            Ok(batch) => {
                let listings = model::discard_missing(batch);
                debug!("Loaded {} listings, sorting by {:?}", listings.len(), self.active_sort);
                self.nfts = sort::sort_listings(&listings, self.active_sort);
                self.snapshot = listings;
                self.load_error = None;
            }
            Err(e) => {
                warn!("Listing fetch failed: {}", e);
                self.nfts.clear();
                self.snapshot.clear();
                self.load_error = Some(e);
            }
        }
        self.loading = false;
    }

    // ============ Derived views ============

    /// Working list after search and sort
    pub fn listings(&self) -> &[Nft] {
        &self.nfts
    }

    /// Unfiltered list as last fetched
    pub fn snapshot(&self) -> &[Nft] {
        &self.snapshot
    }

    /// The slice of the working list the grid renders
    pub fn visible_listings(&self, config: &ViewConfig) -> &[Nft] {
        self.pagination.visible(&self.nfts, config.page_size)
    }

    pub fn top_creators(&self) -> Vec<CreatorAggregate> {
        creators::top_creators(&self.snapshot)
    }

    pub fn status(&self) -> PageStatus {
        if self.loading {
            PageStatus::Loading
        } else if let Some(e) = &self.load_error {
            PageStatus::Failed(e.to_string())
        } else if self.nfts.is_empty() {
            if self.account.is_some() {
                PageStatus::Empty
            } else {
                PageStatus::ConnectWallet
            }
        } else {
            PageStatus::Ready
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&ListingError> {
        self.load_error.as_ref()
    }

    pub fn active_sort(&self) -> SortCriterion {
        self.active_sort
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn carousel_buttons_hidden(&self) -> bool {
        self.hide_carousel_buttons
    }

    pub fn scroll_button_visible(&self) -> bool {
        self.show_scroll_button
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::nft;

    fn alpha() -> Nft {
        nft(5, 2.0, "0xseller1", "Alpha Ape")
    }

    fn beta() -> Nft {
        nft(9, 1.0, "0xseller2", "Beta Bird")
    }

    /// State after connecting `0xme` and resolving with `[A, null, B]`
    fn loaded() -> (ListingState, ViewConfig) {
        let config = ViewConfig::default();
        let mut state = ListingState::new();
        let cmd = state.reduce(ListingEvent::AccountChanged(Some("0xme".into())), &config);
        let Some(Command::Fetch { generation }) = cmd else {
            panic!("expected a fetch command, got {:?}", cmd);
        };
        state.reduce(
            ListingEvent::FetchResolved {
                generation,
                result: Ok(vec![Some(alpha()), None, Some(beta())]),
            },
            &config,
        );
        (state, config)
    }

    #[test]
    fn test_no_account_clears_everything() {
        let config = ViewConfig::default();
        let mut state = ListingState::new();
        assert_eq!(state.status(), PageStatus::Loading);

        let cmd = state.reduce(ListingEvent::AccountChanged(None), &config);
        assert_eq!(cmd, None);
        assert!(state.listings().is_empty());
        assert!(state.snapshot().is_empty());
        assert!(!state.is_loading());
        assert_eq!(state.status(), PageStatus::ConnectWallet);
    }

    #[test]
    fn test_empty_address_counts_as_no_account() {
        let config = ViewConfig::default();
        let mut state = ListingState::new();
        assert_eq!(state.reduce(ListingEvent::AccountChanged(Some(String::new())), &config), None);
        assert_eq!(state.status(), PageStatus::ConnectWallet);
    }

    #[test]
    fn test_fetch_drops_nulls_and_applies_default_sort() {
        let (state, _) = loaded();
        assert_eq!(state.active_sort(), SortCriterion::RecentlyAdded);
        assert_eq!(state.listings(), &[beta(), alpha()]);
        // Snapshot keeps the order the source returned
        assert_eq!(state.snapshot(), &[alpha(), beta()]);
        assert_eq!(state.status(), PageStatus::Ready);
    }

    #[test]
    fn test_recently_added_sort_after_load() {
        let (mut state, config) = loaded();
        state.reduce(ListingEvent::SortSelected(SortCriterion::PriceHighToLow), &config);
        assert_eq!(state.listings(), &[alpha(), beta()]);
        state.reduce(ListingEvent::SortSelected(SortCriterion::RecentlyAdded), &config);
        assert_eq!(state.listings(), &[beta(), alpha()]);
    }

    #[test]
    fn test_reselecting_active_sort_is_noop() {
        let (mut state, config) = loaded();
        state.reduce(ListingEvent::SortSelected(SortCriterion::RecentlyAdded), &config);
        assert_eq!(state.listings(), &[beta(), alpha()]);
        assert_eq!(state.active_sort(), SortCriterion::RecentlyAdded);
    }

    #[test]
    fn test_search_hit_and_miss() {
        let (mut state, config) = loaded();
        state.reduce(ListingEvent::Search("ape".into()), &config);
        assert_eq!(state.listings(), &[alpha()]);

        state.reduce(ListingEvent::Search("zebra".into()), &config);
        assert_eq!(state.listings(), &[alpha(), beta()]);
    }

    #[test]
    fn test_clear_search_restores_snapshot() {
        let (mut state, config) = loaded();
        state.reduce(ListingEvent::Search("bird".into()), &config);
        assert_eq!(state.listings(), &[beta()]);
        state.reduce(ListingEvent::ClearSearch, &config);
        assert_eq!(state.listings(), state.snapshot());
    }

    #[test]
    fn test_sort_applies_to_filtered_list() {
        let config = ViewConfig::default();
        let mut state = ListingState::new();
        state.reduce(ListingEvent::AccountChanged(Some("0xme".into())), &config);
        state.reduce(
            ListingEvent::FetchResolved {
                generation: 1,
                result: Ok(vec![
                    Some(nft(1, 3.0, "0xa", "Moon One")),
                    Some(nft(2, 1.0, "0xb", "Sun")),
                    Some(nft(3, 2.0, "0xc", "Moon Two")),
                ]),
            },
            &config,
        );
        state.reduce(ListingEvent::Search("moon".into()), &config);
        state.reduce(ListingEvent::SortSelected(SortCriterion::PriceLowToHigh), &config);
        let ids: Vec<u64> = state.listings().iter().map(|n| n.token_id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_top_creators_ignore_search() {
        let (mut state, config) = loaded();
        let before = state.top_creators();
        state.reduce(ListingEvent::Search("beta".into()), &config);
        assert_eq!(state.top_creators(), before);
        assert_eq!(before[0].seller, "0xseller1");
    }

    #[test]
    fn test_pagination() {
        let config = ViewConfig::default();
        let mut state = ListingState::new();
        state.reduce(ListingEvent::AccountChanged(Some("0xme".into())), &config);
        let batch = (0..20).map(|i| Some(nft(i, 1.0, "0xa", "Item"))).collect();
        state.reduce(ListingEvent::FetchResolved { generation: 1, result: Ok(batch) }, &config);

        assert_eq!(state.visible_listings(&config).len(), 12);
        state.reduce(ListingEvent::ShowMore, &config);
        assert_eq!(state.visible_listings(&config).len(), 20);
        assert_eq!(state.pagination(), Pagination::Expanded);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let config = ViewConfig::default();
        let mut state = ListingState::new();
        state.reduce(ListingEvent::AccountChanged(Some("0xold".into())), &config);
        state.reduce(ListingEvent::AccountChanged(Some("0xnew".into())), &config);

        state.reduce(
            ListingEvent::FetchResolved { generation: 1, result: Ok(vec![Some(alpha())]) },
            &config,
        );
        assert!(state.is_loading());
        assert!(state.listings().is_empty());

        state.reduce(
            ListingEvent::FetchResolved { generation: 2, result: Ok(vec![Some(beta())]) },
            &config,
        );
        assert_eq!(state.listings(), &[beta()]);
    }

    #[test]
    fn test_disconnect_invalidates_pending_fetch() {
        let config = ViewConfig::default();
        let mut state = ListingState::new();
        state.reduce(ListingEvent::AccountChanged(Some("0xme".into())), &config);
        state.reduce(ListingEvent::AccountChanged(None), &config);
        state.reduce(
            ListingEvent::FetchResolved { generation: 1, result: Ok(vec![Some(alpha())]) },
            &config,
        );
        assert_eq!(state.status(), PageStatus::ConnectWallet);
    }

    #[test]
    fn test_same_account_does_not_refetch() {
        let (mut state, config) = loaded();
        let cmd = state.reduce(ListingEvent::AccountChanged(Some("0xme".into())), &config);
        assert_eq!(cmd, None);
        assert_eq!(state.listings(), &[beta(), alpha()]);
    }

    #[test]
    fn test_fetch_failure_surfaces_error() {
        let config = ViewConfig::default();
        let mut state = ListingState::new();
        state.reduce(ListingEvent::AccountChanged(Some("0xme".into())), &config);
        state.reduce(
            ListingEvent::FetchResolved {
                generation: 1,
                result: Err(ListingError::Fetch("HTTP error: 502".into())),
            },
            &config,
        );
        assert!(!state.is_loading());
        assert!(state.listings().is_empty());
        assert_eq!(
            state.status(),
            PageStatus::Failed("failed to fetch listings: HTTP error: 502".into())
        );
    }

    #[test]
    fn test_empty_marketplace() {
        let config = ViewConfig::default();
        let mut state = ListingState::new();
        state.reduce(ListingEvent::AccountChanged(Some("0xme".into())), &config);
        state.reduce(ListingEvent::FetchResolved { generation: 1, result: Ok(vec![None]) }, &config);
        assert_eq!(state.status(), PageStatus::Empty);
    }

    #[test]
    fn test_repeated_viewport_events_change_nothing() {
        let config = ViewConfig::default();
        let mut state = ListingState::new();

        assert!(!state.changes(&ListingEvent::Scrolled { scroll_y: 400.0 }, &config));
        assert!(state.changes(&ListingEvent::Scrolled { scroll_y: 1200.0 }, &config));
        state.reduce(ListingEvent::Scrolled { scroll_y: 1200.0 }, &config);
        assert!(!state.changes(&ListingEvent::Scrolled { scroll_y: 1800.0 }, &config));
        assert!(state.changes(&ListingEvent::Scrolled { scroll_y: 1000.0 }, &config));

        let wide = ContainerGeometry {
            content_width: Some(1400.0),
            container_width: Some(900.0),
        };
        assert!(!state.changes(&ListingEvent::Resized { geometry: wide }, &config));
        assert!(state.changes(&ListingEvent::Resized { geometry: ContainerGeometry::default() }, &config));
    }

    #[test]
    fn test_changes_for_sort_and_pagination() {
        let (mut state, config) = loaded();
        assert!(!state.changes(&ListingEvent::SortSelected(SortCriterion::RecentlyAdded), &config));
        assert!(state.changes(&ListingEvent::SortSelected(SortCriterion::PriceLowToHigh), &config));
        assert!(state.changes(&ListingEvent::ShowMore, &config));
        state.reduce(ListingEvent::ShowMore, &config);
        assert!(!state.changes(&ListingEvent::ShowMore, &config));
        assert!(state.changes(&ListingEvent::Search("ape".into()), &config));
    }

    #[test]
    fn test_viewport_flags() {
        let config = ViewConfig::default();
        let mut state = ListingState::new();

        state.reduce(ListingEvent::Scrolled { scroll_y: 1000.0 }, &config);
        assert!(!state.scroll_button_visible());
        state.reduce(ListingEvent::Scrolled { scroll_y: 1001.0 }, &config);
        assert!(state.scroll_button_visible());

        state.reduce(
            ListingEvent::Resized {
                geometry: ContainerGeometry {
                    content_width: Some(400.0),
                    container_width: Some(900.0),
                },
            },
            &config,
        );
        assert!(state.carousel_buttons_hidden());
    }
}
