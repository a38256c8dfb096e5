//! Top creators carousel
//!
//! The arrows are shown only while the strip is at least as wide as its
//! container. Widths are re-measured on mount, when the leaderboard changes,
//! and on every window resize.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use nft_market_core::carousel::{next_scroll_left, ContainerGeometry, ScrollDirection};
use nft_market_core::creators::CreatorAggregate;
use nft_market_core::ListingEvent;

use crate::app::PageContext;
use crate::components::CreatorCard;

#[component]
pub fn TopCreators() -> impl IntoView {
    let page = expect_context::<PageContext>();
    let parent_ref = NodeRef::<html::Div>::new();
    let scroll_ref = NodeRef::<html::Div>::new();

    let creators = Memo::new(move |_| page.state.with(|s| s.top_creators()));
    let hide_buttons = Memo::new(move |_| page.state.with(|s| s.carousel_buttons_hidden()));

    let measure = move || {
        let geometry = ContainerGeometry {
            content_width: scroll_ref.get_untracked().map(|el| el.scroll_width() as f64),
            container_width: parent_ref.get_untracked().map(|el| el.offset_width() as f64),
        };
        page.dispatch(ListingEvent::Resized { geometry });
    };

    Effect::new(move || {
        creators.track();
        if scroll_ref.get().is_some() {
            measure();
        }
    });

    let resize = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    let scroll = move |direction: ScrollDirection| {
        let Some(strip) = scroll_ref.get_untracked() else { return };
        let viewport_width = window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        let next = page.config.with_value(|config| {
            next_scroll_left(strip.scroll_left() as f64, direction, viewport_width, config)
        });
        strip.set_scroll_left(next as i32);
    };

    let icon_class = move || page.theme.get().icon_class();

    view! {
        <div class="creators-section">
            <h1 class="section-title">"⭐ Top Creators"</h1>
            <div class="creator-carousel" node_ref=parent_ref>
                <div class="creator-strip no-scrollbar" node_ref=scroll_ref>
                    <For
                        each=move || creators.get()
                        key=|creator: &CreatorAggregate| creator.seller.clone()
                        children=move |creator: CreatorAggregate| view! { <CreatorCard creator=creator /> }
                    />
                    {move || (!hide_buttons.get()).then(|| view! {
                        <div class="carousel-arrow carousel-arrow-left" on:click=move |_| scroll(ScrollDirection::Left)>
                            <img src="/assets/left.png" alt="left_arrow" class=icon_class />
                        </div>
                        <div class="carousel-arrow carousel-arrow-right" on:click=move |_| scroll(ScrollDirection::Right)>
                            <img src="/assets/right.png" alt="right_arrow" class=icon_class />
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
