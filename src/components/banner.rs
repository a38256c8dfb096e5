use leptos::prelude::*;

#[component]
pub fn Banner(
    /// Headline text
    #[prop(into)]
    name: String,
) -> impl IntoView {
    view! {
        <div class="banner nft-gradient">
            <p class="banner-title">{name}</p>
            <div class="banner-circle banner-circle-top"></div>
            <div class="banner-circle banner-circle-bottom"></div>
        </div>
    }
}

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <img src="/assets/loader.gif" alt="loader" class="loader-image" />
        </div>
    }
}
