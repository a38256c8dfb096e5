use leptos::prelude::*;
use nft_market_core::creators::{creator_image_slot, shorten_address, CreatorAggregate};

use crate::app::PageContext;

#[component]
pub fn CreatorCard(creator: CreatorAggregate) -> impl IntoView {
    let page = expect_context::<PageContext>();
    let slots = page.config.with_value(|c| c.creator_image_slots);
    let image = format!("/assets/creator{}.png", creator_image_slot(creator.rank, slots));
    let name = shorten_address(&creator.seller);

    view! {
        <div class="creator-card">
            <div class="creator-rank nft-gradient">
                <p>{creator.rank}</p>
            </div>
            <div class="creator-avatar">
                <img src=image alt="creator" class="creator-image" />
                <div class="creator-tick">
                    <img src="/assets/tick.png" alt="tick" />
                </div>
            </div>
            <div class="creator-info">
                <p class="creator-name">{name}</p>
                <p class="creator-eths">{format!("{:.2} ETH", creator.sum)}</p>
            </div>
        </div>
    }
}
