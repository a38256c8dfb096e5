//! NFT Market Core - View-state engine for the marketplace listing page
//!
//! Everything here is pure and browser-agnostic: sorting, searching, creator
//! ranking, pagination, scroll affordances, and the reducer that ties them to
//! account and fetch events.

pub mod carousel;
pub mod config;
pub mod creators;
pub mod error;
pub mod model;
pub mod pagination;
pub mod scroll_top;
pub mod search;
pub mod sort;
pub mod source;
pub mod state;

pub use config::ViewConfig;
pub use error::ListingError;
pub use model::{ListingBatch, Nft};
pub use sort::SortCriterion;
pub use source::{run_command, NftSource};
pub use state::{Command, ListingEvent, ListingState, PageStatus};
