//! # Wallet Session State
//!
//! Single source of truth for the wallet connection in one tab. Views read the
//! current [`WalletSession`] and subscribe for changes; only the negotiator
//! mutates it (the mutators are crate-private).
//!
//! | Current | Event | Next |
//! |---|---|---|
//! | Disconnected | connect() | Connecting |
//! | Connecting | provider returns address | Connected(address) |
//! | Connecting | reject / error / timeout | Failed(error) |
//! | Connected | disconnect() | Disconnected |
//! | Failed | connect() | Connecting |
//!
//! Every negotiation and every reset bumps a generation counter. A result is
//! applied only if its generation is still current, so a wallet prompt that
//! resolves after the user navigated away cannot touch the new session.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ConnectError, ConnectResult};

/// Session generation; see the module docs.
pub type Generation = u64;

/// Current state of the browser-wallet connection.
///
/// The address exists only on `Connected` and the error only on `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletSession {
    #[default]
    Disconnected,
    Connecting,
    Connected { address: String },
    Failed { error: ConnectError },
}

/// Flat status tag of a [`WalletSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletStatus {
    Disconnected,
    Connecting,
    Connected,
    Failed,
}

impl WalletSession {
    pub fn status(&self) -> WalletStatus {
        match self {
            WalletSession::Disconnected => WalletStatus::Disconnected,
            WalletSession::Connecting => WalletStatus::Connecting,
            WalletSession::Connected { .. } => WalletStatus::Connected,
            WalletSession::Failed { .. } => WalletStatus::Failed,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, WalletSession::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletSession::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletSession::Connected { address } => Some(address),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&ConnectError> {
        match self {
            WalletSession::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Whether this session shows `result`. False for a late answer to an
    /// attempt that was reset or superseded.
    pub fn reflects(&self, result: &ConnectResult<String>) -> bool {
        match result {
            Ok(address) => self.address() == Some(address.as_str()),
            Err(error) => self.last_error() == Some(error),
        }
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&WalletSession)>;

#[derive(Default)]
struct StoreState {
    session: WalletSession,
    generation: Generation,
    next_listener: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Observable holder of the tab's [`WalletSession`].
///
/// Cheap to clone; clones share the same state.
#[derive(Clone, Default)]
pub struct SessionStore {
    state: Rc<RefCell<StoreState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> WalletSession {
        self.state.borrow().session.clone()
    }

    /// Read the current session without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&WalletSession) -> R) -> R {
        f(&self.state.borrow().session)
    }

    pub fn generation(&self) -> Generation {
        self.state.borrow().generation
    }

    /// Register `listener`; it runs after every transition with the new session.
    ///
    /// Listeners may read the store and may unsubscribe themselves.
    pub fn subscribe(&self, listener: impl Fn(&WalletSession) + 'static) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener;
        state.next_listener += 1;
        state.listeners.push((id, Rc::new(listener)));
        SubscriptionId(id)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.listeners.len();
        state.listeners.retain(|(lid, _)| *lid != id.0);
        state.listeners.len() != before
    }

    /// Enter `Connecting` and open a new generation for the attempt.
    pub(crate) fn begin_connecting(&self) -> Generation {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.generation
        };
        self.transition(WalletSession::Connecting);
        generation
    }

    /// Fail without a negotiation (nothing was suspended).
    pub(crate) fn fail(&self, error: ConnectError) {
        self.transition(WalletSession::Failed { error });
    }

    /// Apply the outcome of the attempt opened at `generation`.
    ///
    /// Returns `false`, leaving the session untouched, when the attempt is stale.
    pub(crate) fn resolve(&self, generation: Generation, result: &ConnectResult<String>) -> bool {
        {
            let state = self.state.borrow();
            if state.generation != generation || !state.session.is_connecting() {
                return false;
            }
        }
        let next = match result {
            Ok(address) => WalletSession::Connected { address: address.clone() },
            Err(error) => WalletSession::Failed { error: error.clone() },
        };
        self.transition(next);
        true
    }

    /// Back to `Disconnected`, invalidating any pending attempt.
    pub(crate) fn reset(&self) -> Generation {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.generation
        };
        self.transition(WalletSession::Disconnected);
        generation
    }

    fn transition(&self, next: WalletSession) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            if state.session == next {
                return;
            }
            state.session = next.clone();
            state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        // Borrow released: listeners may call back into the store
        for listener in listeners {
            listener(&next);
        }
    }
}
