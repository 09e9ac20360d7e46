//! Connect Wallet Modal
//!
//! MetaMask (any injected provider) goes through the negotiator. The other
//! connectors are listed but not wired up.

use leptos::prelude::*;

use crate::state::notice::{use_notice_context, NoticeContext};
use crate::state::wallet::{use_wallet_context, WalletContext};

/// Run one connect attempt and report its outcome, unless it went stale.
pub fn start_connect(wallet: WalletContext, notices: NoticeContext, on_connected: impl Fn() + 'static) {
    leptos::task::spawn_local(async move {
        let result = wallet.connect().await;
        if !wallet.is_current(&result) {
            log::debug!("Ignoring wallet result for a reset session");
            return;
        }
        match result {
            Ok(address) => {
                notices.info("MetaMask connected!", format!("Your address: {}", address));
                on_connected();
            }
            Err(e) => notices.error(e.title(), e.user_message()),
        }
    });
}

#[component]
pub fn ConnectWalletModal(open: RwSignal<bool>) -> impl IntoView {
    let wallet = use_wallet_context();
    let notices = use_notice_context();

    let on_metamask = move |_| {
        start_connect(wallet, notices, move || open.set(false));
    };

    let not_implemented = move |name: &'static str| {
        notices.error(
            format!("{} is not implemented yet", name),
            "Support is coming soon. Use MetaMask for now.",
        );
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">"Connect Crypto Wallet"</h2>
                    <p class="modal-description">
                        "Choose your preferred wallet to connect. This will allow you to make and receive crypto payments."
                    </p>

                    <div class="wallet-options">
                        <button
                            class="btn btn-outline wallet-option"
                            disabled=move || wallet.is_connecting()
                            on:click=on_metamask
                        >
                            {move || if wallet.is_connecting() { "Connecting..." } else { "MetaMask" }}
                        </button>
                        <button class="btn btn-outline wallet-option" on:click=move |_| not_implemented("WalletConnect")>
                            "WalletConnect"
                        </button>
                        <button class="btn btn-outline wallet-option" on:click=move |_| not_implemented("Coinbase Wallet")>
                            "Coinbase Wallet"
                        </button>
                    </div>

                    <Show when=move || !wallet.provider_present()>
                        <p class="modal-hint">"No browser wallet detected. Install MetaMask to pay with crypto."</p>
                    </Show>

                    <p class="modal-footnote">
                        "By connecting your wallet, you agree to our Terms of Service and Privacy Policy."
                    </p>
                    <div class="modal-footer">
                        <button class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
