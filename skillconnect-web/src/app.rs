//! SkillConnect Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, Toaster};
use crate::pages::{ExplorePage, PaymentPage, WalletPage};
use crate::state::notice::provide_notice_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_notice_context();
    let wallet = provide_wallet_context();

    // Page teardown: a prompt still open in the extension must not resurrect the session
    on_cleanup(move || wallet.reset());

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=ExplorePage/>
                        <Route path=path!("/pay/:id") view=PaymentPage/>
                        <Route path=path!("/wallet") view=WalletPage/>
                    </Routes>
                </main>
                <Toaster/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page-narrow">
            <div class="card" style="text-align: center;">
                <h1>"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Explore"</span>
                </A>
            </div>
        </div>
    }
}
