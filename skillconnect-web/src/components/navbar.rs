//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use super::connect_button::ConnectWalletButton;
use super::mobile_menu::MobileMenu;

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"SkillConnect"</span>
                </A>
                <div class="nav-links">
                    <A href="/">"Explore"</A>
                    <A href="/wallet">"Crypto Wallets"</A>
                    <ConnectWalletButton/>
                </div>
                <button class="nav-burger" on:click=move |_| menu_open.update(|o| *o = !*o)>
                    "Menu"
                </button>
            </div>
            <MobileMenu open=menu_open/>
        </nav>
    }
}
