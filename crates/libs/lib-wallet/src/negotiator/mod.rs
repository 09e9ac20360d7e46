//! # Connection Negotiator
//!
//! Performs the handshake with the injected provider and records the outcome
//! in the [`SessionStore`].
//!
//! ## Flow
//!
//! 1. Already `Connected`: return the address, no prompt.
//! 2. A negotiation is in flight: join it. At most one provider request runs
//!    at a time, however many buttons were clicked.
//! 3. Re-detect the provider. Absent: fail with `ProviderMissing` before any
//!    suspension.
//! 4. `Connecting`; request accounts, read the signer address, check the
//!    chain, all raced against the configured timeout.
//! 5. `Connected(address)` or `Failed(kind)`, unless the session was reset in
//!    the meantime, in which case the late result is dropped.
//!
//! A browser wallet prompt cannot be cancelled from the page, so cancellation
//! is cooperative: [`Negotiator::reset_session`] moves the generation on and
//! the pending attempt finds itself stale when it resolves.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{select, Either, FutureExt, LocalBoxFuture, Shared};
use shared::utils::is_account_address;
use tracing::{debug, info, warn};

use crate::config::WalletConfig;
use crate::error::{ConnectError, ConnectResult};
use crate::provider::{ProviderCapability, ProviderDetector, WalletProvider};
use crate::session::{Generation, SessionStore};
use crate::timer::Timer;

#[cfg(test)]
mod tests;

type Outcome = Shared<LocalBoxFuture<'static, ConnectResult<String>>>;

struct InFlight {
    generation: Generation,
    outcome: Outcome,
}

struct Inner {
    detector: Rc<dyn ProviderDetector>,
    timer: Rc<dyn Timer>,
    store: SessionStore,
    config: WalletConfig,
    in_flight: RefCell<Option<InFlight>>,
}

/// Drives wallet connections for one tab. Clones share state.
#[derive(Clone)]
pub struct Negotiator {
    inner: Rc<Inner>,
}

impl Negotiator {
    pub fn new(
        detector: Rc<dyn ProviderDetector>,
        timer: Rc<dyn Timer>,
        store: SessionStore,
        config: WalletConfig,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                detector,
                timer,
                store,
                config,
                in_flight: RefCell::new(None),
            }),
        }
    }

    /// The session store this negotiator writes to.
    pub fn store(&self) -> &SessionStore {
        &self.inner.store
    }

    pub fn config(&self) -> &WalletConfig {
        &self.inner.config
    }

    /// Fresh provider detection, e.g. to label the connect button.
    pub fn detect(&self) -> ProviderCapability {
        self.inner.detector.detect()
    }

    /// Whether a negotiation for the current generation is pending.
    pub fn is_negotiating(&self) -> bool {
        self.joinable().is_some()
    }

    /// Connect the wallet, returning the active account address.
    pub async fn connect(&self) -> ConnectResult<String> {
        if let Some(address) = self.inner.store.with(|s| s.address().map(str::to_owned)) {
            debug!("Wallet already connected, reusing {}", address);
            return Ok(address);
        }

        if let Some(outcome) = self.joinable() {
            debug!("Joining in-flight wallet negotiation");
            return outcome.await;
        }

        let outcome = self.start()?;
        outcome.await
    }

    /// Explicit disconnect. Any pending attempt becomes stale.
    pub fn disconnect(&self) {
        info!("Wallet disconnected");
        self.invalidate();
    }

    /// Reset on page teardown or navigation. Any pending attempt becomes stale.
    pub fn reset_session(&self) {
        debug!("Wallet session reset");
        self.invalidate();
    }

    fn invalidate(&self) {
        // Dropping our handle breaks the Inner <-> outcome cycle; joined callers keep theirs
        self.inner.in_flight.borrow_mut().take();
        self.inner.store.reset();
    }

    fn joinable(&self) -> Option<Outcome> {
        let in_flight = self.inner.in_flight.borrow();
        in_flight
            .as_ref()
            .filter(|f| f.generation == self.inner.store.generation())
            .map(|f| f.outcome.clone())
    }

    fn start(&self) -> ConnectResult<Outcome> {
        let capability = self.inner.detector.detect();
        let provider = match self.inner.detector.provider() {
            Some(provider) if capability.present => provider,
            _ => {
                warn!("No injected wallet provider found");
                return Err(self.fail_now(ConnectError::ProviderMissing));
            }
        };
        if !capability.supports_request_accounts {
            warn!("Injected provider cannot request accounts");
            return Err(self.fail_now(ConnectError::RequestFailed(
                "Wallet provider does not support account requests".to_string(),
            )));
        }

        let generation = self.inner.store.begin_connecting();
        info!(generation, "Wallet negotiation started");

        let inner = Rc::clone(&self.inner);
        let outcome = async move {
            let result = inner.negotiate(provider).await;
            inner.finish(generation, &result);
            result
        }
        .boxed_local()
        .shared();

        *self.inner.in_flight.borrow_mut() = Some(InFlight {
            generation,
            outcome: outcome.clone(),
        });
        Ok(outcome)
    }

    fn fail_now(&self, error: ConnectError) -> ConnectError {
        self.inner.store.fail(error.clone());
        error
    }
}

impl Inner {
    async fn negotiate(&self, provider: Rc<dyn WalletProvider>) -> ConnectResult<String> {
        let timeout = self.config.connect_timeout;
        let handshake = Box::pin(handshake(provider.as_ref(), &self.config));

        match select(handshake, self.timer.sleep(timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(ConnectError::Timeout(timeout)),
        }
    }

    fn finish(&self, generation: Generation, result: &ConnectResult<String>) {
        {
            let mut in_flight = self.in_flight.borrow_mut();
            if in_flight.as_ref().is_some_and(|f| f.generation == generation) {
                in_flight.take();
            }
        }

        if !self.store.resolve(generation, result) {
            debug!(generation, "Discarding stale wallet negotiation result");
            return;
        }
        match result {
            Ok(address) => info!(generation, "Wallet connected: {}", address),
            Err(e) => warn!(generation, "Wallet connection failed: {}", e),
        }
    }
}

async fn handshake(provider: &dyn WalletProvider, config: &WalletConfig) -> ConnectResult<String> {
    let accounts = provider.request_accounts().await?;
    if accounts.is_empty() {
        return Err(ConnectError::Locked);
    }

    let address = provider.signer_address().await?;
    if !is_account_address(&address) {
        return Err(ConnectError::RequestFailed(format!(
            "Wallet returned a malformed address: {}",
            address
        )));
    }

    if !config.allowed_chain_ids.is_empty() {
        let chain_id = provider.chain_id().await?;
        if !config.allows_chain(chain_id) {
            return Err(ConnectError::WrongNetwork { chain_id });
        }
    }

    Ok(address)
}
