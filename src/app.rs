use leptos::prelude::*;
use leptos::task::spawn_local;
use nft_market_core::source::account_event;
use nft_market_core::{run_command, ListingEvent, ListingState, PageStatus, ViewConfig};
use tracing::{error, info};

use crate::api::MarketClient;
use crate::components::{Banner, Footer, Loader, NftGrid, ScrollToTop, TopCreators};
use crate::theme::{self, Theme};
use crate::{config, wallet};

/// Shared page handles, provided through context
#[derive(Clone, Copy)]
pub struct PageContext {
    pub state: RwSignal<ListingState>,
    pub config: StoredValue<ViewConfig>,
    pub client: StoredValue<MarketClient>,
    pub theme: ReadSignal<Theme>,
}

impl PageContext {
    /// Feed an event through the reducer and run whatever it asks for
    pub fn dispatch(self, event: ListingEvent) {
        let command = self.config.with_value(|config| {
            if !self.state.with_untracked(|state| state.changes(&event, config)) {
                return None;
            }
            let mut command = None;
            self.state.update(|state| command = state.reduce(event, config));
            command
        });

        if let Some(command) = command {
            let client = self.client.get_value();
            spawn_local(async move {
                let event = run_command(&client, command).await;
                self.dispatch(event);
            });
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (account, set_account) = signal::<Option<String>>(None);
    let (theme, _) = signal(theme::detect_theme());

    let page = PageContext {
        state: RwSignal::new(ListingState::new()),
        config: StoredValue::new(config::load_view_config()),
        client: StoredValue::new(MarketClient::new(config::api_base(), account)),
        theme,
    };
    provide_context(page);

    // Pick up an already-authorised wallet and follow account switches
    spawn_local(async move {
        match wallet::current_account().await {
            Ok(current) => set_account.set(current),
            Err(e) => info!("Wallet: {}", e),
        }
    });
    if let Err(e) = wallet::watch_accounts(set_account) {
        info!("Wallet: not watching account changes: {}", e);
    }

    // Reload listings whenever the account changes
    Effect::new(move || {
        let event = page.client.with_value(account_event);
        page.dispatch(event);
    });

    let connect = move |_| {
        spawn_local(async move {
            match wallet::connect().await {
                Ok(connected) => set_account.set(connected),
                Err(e) => error!("Failed to connect wallet: {}", e),
            }
        });
    };

    let status = Memo::new(move |_| page.state.with(|s| s.status()));

    view! {
        <main class="home">
            <div class="home-content">
                <Banner name="Own a piece of the digital revolution with unique NFT collectibles." />
                {move || match status.get() {
                    PageStatus::Loading => view! { <Loader /> }.into_any(),
                    PageStatus::ConnectWallet => view! {
                        <div class="empty-state">
                            <h1 class="status-message">"Connect your wallet please."</h1>
                            <button class="connect-btn" on:click=connect>"Connect wallet"</button>
                        </div>
                    }.into_any(),
                    PageStatus::Empty => view! {
                        <h1 class="status-message">"The marketplace is empty."</h1>
                    }.into_any(),
                    PageStatus::Failed(message) => view! {
                        <h1 class="status-message status-error">{message}</h1>
                    }.into_any(),
                    PageStatus::Ready => view! {
                        <TopCreators />
                        <NftGrid />
                    }.into_any(),
                }}
            </div>
            <ScrollToTop />
            <Footer />
        </main>
    }
}
