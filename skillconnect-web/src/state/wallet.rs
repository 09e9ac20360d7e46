//! Wallet state management
//!
//! The [`Negotiator`] owns the session; the context mirrors it into a signal
//! so views re-render on every transition.

use std::rc::Rc;

use leptos::prelude::*;
use lib_wallet::{wallet_config, ConnectResult, Negotiator, SessionStore, WalletSession};

use crate::services::{GlooTimer, InjectedDetector};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub session: RwSignal<WalletSession>,
    negotiator: StoredValue<Negotiator, LocalStorage>,
}

impl WalletContext {
    pub fn new() -> Self {
        let store = SessionStore::new();
        let session = RwSignal::new(store.current());
        store.subscribe(move |s| session.set(s.clone()));

        let negotiator = Negotiator::new(
            Rc::new(InjectedDetector),
            Rc::new(GlooTimer),
            store,
            wallet_config().clone(),
        );

        Self {
            session,
            negotiator: StoredValue::new_local(negotiator),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|s| s.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.session.with(|s| s.is_connecting())
    }

    pub fn address(&self) -> Option<String> {
        self.session.with(|s| s.address().map(|a| a.to_string()))
    }

    /// Whether a provider is injected right now.
    pub fn provider_present(&self) -> bool {
        self.negotiator.with_value(|n| n.detect().present)
    }

    pub async fn connect(&self) -> ConnectResult<String> {
        let negotiator = self.negotiator.get_value();
        negotiator.connect().await
    }

    /// Whether `result` is what the session currently shows, i.e. not a
    /// late answer for an attempt that was reset.
    pub fn is_current(&self, result: &ConnectResult<String>) -> bool {
        self.session.with(|s| s.reflects(result))
    }

    pub fn disconnect(&self) {
        self.negotiator.with_value(|n| n.disconnect());
    }

    pub fn reset(&self) {
        let _ = self.negotiator.try_with_value(|n| n.reset_session());
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
