//! Hot NFTs grid with search, sort, and "Show More"

use leptos::prelude::*;
use nft_market_core::{ListingEvent, Nft};

use crate::app::PageContext;
use crate::components::{NftCard, SearchBar};

#[component]
pub fn NftGrid() -> impl IntoView {
    let page = expect_context::<PageContext>();

    let visible = Memo::new(move |_| {
        page.config.with_value(|config| {
            page.state.with(|s| s.visible_listings(config).to_vec())
        })
    });
    let shows_more = Memo::new(move |_| page.state.with(|s| s.pagination().shows_more_control()));

    view! {
        <div class="listing-section">
            <div class="listing-header">
                <h1 class="section-title">"🔥 Hot NFTs"</h1>
                <div class="listing-controls">
                    <SearchBar />
                </div>
            </div>
            <div class="nft-grid">
                <For
                    each=move || visible.get()
                    key=|nft: &Nft| nft.token_id
                    children=move |nft: Nft| view! { <NftCard nft=nft /> }
                />
            </div>
            {move || shows_more.get().then(|| view! {
                <div class="show-more">
                    <button
                        class="show-more-btn"
                        on:click=move |_| page.dispatch(ListingEvent::ShowMore)
                    >
                        "Show More"
                    </button>
                </div>
            })}
        </div>
    }
}
