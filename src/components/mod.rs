mod banner;
mod creator_card;
mod footer;
mod nft_card;
mod nft_grid;
mod scroll_to_top;
mod search_bar;
mod top_creators;

pub use banner::{Banner, Loader};
pub use creator_card::CreatorCard;
pub use footer::Footer;
pub use nft_card::NftCard;
pub use nft_grid::NftGrid;
pub use scroll_to_top::ScrollToTop;
pub use search_bar::SearchBar;
pub use top_creators::TopCreators;
