//! # Wallet Library
//!
//! Wallet connection and payment selection core for the booking frontend.
//!
//! - [`negotiator`] - single-flight handshake with the injected provider
//! - [`session`] - observable wallet session state
//! - [`payment`] - card or crypto selection for a booking
//!
//! The provider and the timer sit behind traits so the browser bindings live
//! in the web crate and tests drive the core on tokio.

pub mod config;
pub mod error;
pub mod negotiator;
pub mod payment;
pub mod provider;
pub mod session;
pub mod timer;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::{init_config, init_config_from_env, wallet_config, WalletConfig};
pub use error::{ConnectError, ConnectResult, PaymentError, PaymentResult};
pub use negotiator::Negotiator;
pub use provider::{ProviderCapability, ProviderDetector, ProviderError, WalletProvider};
pub use session::{SessionStore, SubscriptionId, WalletSession, WalletStatus};
pub use timer::Timer;
