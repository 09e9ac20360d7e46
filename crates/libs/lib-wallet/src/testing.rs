//! Test doubles for the provider boundary.

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::provider::{ProviderCapability, ProviderDetector, ProviderError, WalletProvider};
use crate::timer::Timer;

pub const ADDR: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

type AccountsReply = Result<Vec<String>, ProviderError>;

/// Scripted provider. Replies to `request_accounts` come from a queue and
/// default to a single account once the queue is empty.
pub struct MockProvider {
    replies: RefCell<VecDeque<AccountsReply>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
    hang: bool,
    address: String,
    chain_id: u64,
    request_calls: Cell<usize>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            replies: RefCell::new(VecDeque::new()),
            gate: RefCell::new(None),
            hang: false,
            address: ADDR.to_string(),
            chain_id: 1,
            request_calls: Cell::new(0),
        }
    }

    pub fn reply(self, reply: AccountsReply) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    /// First account request waits until the returned sender fires.
    pub fn gated(self) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        (self, tx)
    }

    /// Account requests never resolve, like an ignored wallet popup.
    pub fn hanging(mut self) -> Self {
        self.hang = true;
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn chain(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn request_calls(&self) -> usize {
        self.request_calls.get()
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.request_calls.set(self.request_calls.get() + 1);
        if self.hang {
            futures::future::pending::<()>().await;
        }
        let gate = self.gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        let reply = self.replies.borrow_mut().pop_front();
        reply.unwrap_or_else(|| Ok(vec![self.address.to_lowercase()]))
    }

    async fn signer_address(&self) -> Result<String, ProviderError> {
        Ok(self.address.clone())
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        Ok(self.chain_id)
    }
}

/// Detector whose answer can change between attempts.
pub struct MockDetector {
    capability: Cell<ProviderCapability>,
    provider: Option<Rc<MockProvider>>,
}

impl MockDetector {
    pub fn with(provider: Rc<MockProvider>) -> Self {
        Self {
            capability: Cell::new(ProviderCapability::full()),
            provider: Some(provider),
        }
    }

    pub fn absent() -> Self {
        Self {
            capability: Cell::new(ProviderCapability::missing()),
            provider: None,
        }
    }

    pub fn set_capability(&self, capability: ProviderCapability) {
        self.capability.set(capability);
    }
}

impl ProviderDetector for MockDetector {
    fn detect(&self) -> ProviderCapability {
        self.capability.get()
    }

    fn provider(&self) -> Option<Rc<dyn WalletProvider>> {
        if !self.capability.get().present {
            return None;
        }
        self.provider
            .as_ref()
            .map(|p| Rc::clone(p) as Rc<dyn WalletProvider>)
    }
}

pub struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        tokio::time::sleep(duration).boxed_local()
    }
}
