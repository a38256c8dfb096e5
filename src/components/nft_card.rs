use leptos::prelude::*;
use nft_market_core::creators::shorten_address;
use nft_market_core::Nft;

#[component]
pub fn NftCard(nft: Nft) -> impl IntoView {
    let image = if nft.image.is_empty() {
        "/assets/nft-placeholder.png".to_string()
    } else {
        nft.image.clone()
    };
    let seller = shorten_address(&nft.seller);
    let price = format!("{} ETH", nft.price);
    let alt = nft.name.clone();

    view! {
        <div class="nft-card">
            <div class="nft-cover">
                <img src=image alt=alt class="nft-image" loading="lazy" />
            </div>
            <div class="nft-info">
                <p class="nft-name">{nft.name}</p>
                <div class="nft-meta">
                    <p class="nft-price">{price}</p>
                    <p class="nft-seller">{seller}</p>
                </div>
            </div>
        </div>
    }
}
