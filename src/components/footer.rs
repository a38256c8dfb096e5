use leptos::prelude::*;

const BUILD_HASH: &str = env!("BUILD_HASH");
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="page-footer">
            <span class="build-info">{format!("Build {} ({})", BUILD_HASH, BUILD_TIMESTAMP)}</span>
        </footer>
    }
}
