use leptos::ev;
use leptos::prelude::*;
use nft_market_core::scroll_top::SCROLL_ORIGIN;
use nft_market_core::ListingEvent;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::app::PageContext;

/// Floating button that appears once the page is scrolled far down
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let page = expect_context::<PageContext>();

    let on_scroll = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or_default();
        page.dispatch(ListingEvent::Scrolled { scroll_y });
    });
    on_cleanup(move || on_scroll.remove());

    let visible = Memo::new(move |_| page.state.with(|s| s.scroll_button_visible()));

    // Fire and forget: the browser animates, nobody waits for it
    let scroll_to_top = move |_| {
        let options = ScrollToOptions::new();
        options.set_top(SCROLL_ORIGIN);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        {move || visible.get().then(|| view! {
            <button type="button" class="scroll-to-top nft-gradient" on:click=scroll_to_top>
                <img
                    src="/assets/up.png"
                    width="40"
                    height="40"
                    alt="top_arrow"
                    class=move || page.theme.get().icon_class()
                />
            </button>
        })}
    }
}
