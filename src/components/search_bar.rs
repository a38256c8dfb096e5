//! Search box and sort dropdown
//!
//! Typing is debounced: the query is applied once input has been quiet for
//! `search_debounce_ms`. An empty query clears the search.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use nft_market_core::{ListingEvent, SortCriterion};

use crate::app::PageContext;

#[component]
pub fn SearchBar() -> impl IntoView {
    let page = expect_context::<PageContext>();
    let (query, set_query) = signal(String::new());
    // Replacing the pending timeout drops (and cancels) the previous one
    let pending = StoredValue::new_local(None::<Timeout>);

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());

        let delay = page.config.with_value(|c| c.search_debounce_ms);
        let timeout = Timeout::new(delay, move || {
            if value.is_empty() {
                page.dispatch(ListingEvent::ClearSearch);
            } else {
                page.dispatch(ListingEvent::Search(value));
            }
        });
        pending.set_value(Some(timeout));
    };

    let on_clear = move |_| {
        pending.set_value(None);
        set_query.set(String::new());
        page.dispatch(ListingEvent::ClearSearch);
    };

    let on_sort = move |ev| {
        let criterion = SortCriterion::from_label(&event_target_value(&ev));
        page.dispatch(ListingEvent::SortSelected(criterion));
    };

    view! {
        <div class="search-box">
            <img src="/assets/search.png" alt="search" class=move || page.theme.get().icon_class() />
            <input
                type="text"
                placeholder="Search item here"
                prop:value=move || query.get()
                on:input=on_input
            />
            <Show when=move || !query.get().is_empty()>
                <button class="search-clear" on:click=on_clear title="Clear search">
                    "×"
                </button>
            </Show>
        </div>
        <select
            class="sort-dropdown"
            prop:value=move || page.state.with(|s| s.active_sort().label())
            on:change=on_sort
        >
            {SortCriterion::selectable()
                .iter()
                .map(|criterion| view! {
                    <option value=criterion.label()>{criterion.label()}</option>
                })
                .collect::<Vec<_>>()}
        </select>
    }
}
