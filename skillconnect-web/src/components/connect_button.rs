//! Header wallet button: connect, or show the address with a disconnect action

use leptos::prelude::*;
use shared::utils::truncate_address;

use super::connect_modal::ConnectWalletModal;
use crate::state::notice::use_notice_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectWalletButton() -> impl IntoView {
    let wallet = use_wallet_context();
    let notices = use_notice_context();
    let modal_open = RwSignal::new(false);

    let on_disconnect = move |_| {
        wallet.disconnect();
        notices.info("Wallet disconnected", "Connect again to pay with crypto.");
    };

    view! {
        <div class="wallet-button">
            {move || match wallet.address() {
                Some(address) => view! {
                    <div class="wallet-connected">
                        <span class="wallet-address" title=address.clone()>{truncate_address(&address)}</span>
                        <button class="btn btn-ghost" on:click=on_disconnect>"Disconnect"</button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <button
                        class="btn"
                        disabled=move || wallet.is_connecting()
                        on:click=move |_| modal_open.set(true)
                    >
                        {move || if wallet.is_connecting() { "Connecting..." } else { "Connect Wallet" }}
                    </button>
                }
                .into_any(),
            }}
            <ConnectWalletModal open=modal_open/>
        </div>
    }
}
