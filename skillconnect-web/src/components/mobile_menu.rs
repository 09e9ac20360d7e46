//! Mobile navigation drawer

use leptos::prelude::*;
use leptos_router::components::A;

use super::connect_button::ConnectWalletButton;
use super::wallet_status::WalletStatus;

#[component]
pub fn MobileMenu(open: RwSignal<bool>) -> impl IntoView {
    let close = move |_| open.set(false);

    view! {
        <Show when=move || open.get()>
            <div class="mobile-menu">
                <div class="mobile-menu-links" on:click=close>
                    <A href="/">"Explore"</A>
                    <A href="/wallet">"Crypto Wallets"</A>
                </div>
                <div class="mobile-menu-wallet">
                    <WalletStatus/>
                    <ConnectWalletButton/>
                </div>
            </div>
        </Show>
    }
}
