//! Crypto Wallets Page - profile panel for the connected wallet

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{start_connect, WalletStatus};
use crate::services::copy_text;
use crate::state::notice::use_notice_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletPage() -> impl IntoView {
    let wallet = use_wallet_context();
    let notices = use_notice_context();

    let on_connect = move |_| start_connect(wallet, notices, || {});
    let on_disconnect = move |_| {
        wallet.disconnect();
        notices.info("Wallet disconnected", "Connect again to pay with crypto.");
    };
    let on_copy = move |_| {
        let Some(address) = wallet.address() else {
            return;
        };
        spawn_local(async move {
            match copy_text(&address).await {
                Ok(()) => notices.info("Address Copied", "Wallet address copied to clipboard"),
                Err(e) => {
                    log::warn!("Clipboard write failed: {}", e);
                    notices.error("Copy failed", e);
                }
            }
        });
    };

    view! {
        <div class="page page-narrow">
            <div class="card">
                <h1 class="card-title">"Cryptocurrency Wallets"</h1>
                <p class="muted">"Connect a browser wallet to pay for sessions in crypto."</p>

                <div class="wallet-panel">
                    <p class="muted">"Status"</p>
                    <WalletStatus/>
                    {move || wallet.address().map(|address| view! {
                        <p class="muted">"Wallet Address"</p>
                        <div class="address-row">
                            <p class="mono">{address}</p>
                            <button class="btn btn-small" on:click=on_copy>"Copy"</button>
                        </div>
                    })}
                </div>

                {move || if wallet.is_connected() {
                    view! {
                        <button class="btn btn-danger" on:click=on_disconnect>"Disconnect Wallet"</button>
                    }
                    .into_any()
                } else {
                    view! {
                        <button class="btn" disabled=move || wallet.is_connecting() on:click=on_connect>
                            {move || if wallet.is_connecting() { "Connecting..." } else { "Connect MetaMask" }}
                        </button>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
