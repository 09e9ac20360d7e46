//! Inline wallet status, shared by the header, mobile menu and pages

use leptos::prelude::*;
use lib_wallet::WalletSession;
use shared::utils::truncate_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletStatus() -> impl IntoView {
    let wallet = use_wallet_context();

    move || match wallet.session.get() {
        WalletSession::Disconnected => view! {
            <span class="wallet-status idle">"Wallet not connected"</span>
        }
        .into_any(),
        WalletSession::Connecting => view! {
            <span class="wallet-status pending">"Waiting for wallet..."</span>
        }
        .into_any(),
        WalletSession::Connected { address } => view! {
            <span class="wallet-status connected" title=address.clone()>
                {truncate_address(&address)}
            </span>
        }
        .into_any(),
        WalletSession::Failed { error } => view! {
            <span class="wallet-status error" title=error.to_string()>
                <strong>{error.title()}</strong>
                " "
                {error.user_message()}
            </span>
        }
        .into_any(),
    }
}
