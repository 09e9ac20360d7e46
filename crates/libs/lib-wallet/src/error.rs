//! # Wallet and Payment Errors
//!
//! Two `thiserror` enums cover the core:
//!
//! 1. [`ConnectError`] - outcome of a failed wallet negotiation
//!    - [`ProviderMissing`](ConnectError::ProviderMissing) → no injected provider
//!    - [`UserRejected`](ConnectError::UserRejected) → prompt declined (EIP-1193 code 4001)
//!    - [`RequestFailed`](ConnectError::RequestFailed) → any other provider failure
//!    - [`Timeout`](ConnectError::Timeout) → no answer within the configured bound
//!    - [`Locked`](ConnectError::Locked) → provider exposed no account
//!    - [`WrongNetwork`](ConnectError::WrongNetwork) → active chain not allowed
//!
//! 2. [`PaymentError`] - booking preconditions that did not hold
//!
//! Every kind is recoverable: the UI shows a transient notice built from
//! [`ConnectError::title`] and [`ConnectError::user_message`] and the user may
//! retry. Nothing is retried automatically.
//!
//! `ConnectError` is `Clone` because one coalesced negotiation hands the same
//! result to every caller that joined it.

use std::time::Duration;
use thiserror::Error;

use crate::provider::ProviderError;

/// Convenience alias for negotiation results.
pub type ConnectResult<T> = std::result::Result<T, ConnectError>;

/// Convenience alias for payment selection results.
pub type PaymentResult<T> = std::result::Result<T, PaymentError>;

/// Classified failure of a wallet connection attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// No injected wallet provider in this browser.
    #[error("No wallet provider detected")]
    ProviderMissing,

    /// The user declined the account-access prompt.
    #[error("Wallet connection rejected by user")]
    UserRejected,

    /// Provider-level failure (internal error, malformed response, missing method).
    #[error("Wallet request failed: {0}")]
    RequestFailed(String),

    /// The provider did not answer in time.
    #[error("Wallet did not respond within {}s", .0.as_secs())]
    Timeout(Duration),

    /// The provider answered but exposed no account.
    #[error("Wallet is locked or exposed no accounts")]
    Locked,

    /// Connected to a chain outside the allowed set.
    #[error("Wallet is on an unsupported network (chain id {chain_id})")]
    WrongNetwork { chain_id: u64 },
}

impl ConnectError {
    /// Short notice title.
    pub fn title(&self) -> &'static str {
        match self {
            ConnectError::ProviderMissing => "Wallet not found",
            ConnectError::UserRejected => "Connection rejected",
            ConnectError::RequestFailed(_) => "Connecting error",
            ConnectError::Timeout(_) => "Wallet not responding",
            ConnectError::Locked => "Wallet locked",
            ConnectError::WrongNetwork { .. } => "Wrong network",
        }
    }

    /// Plain-language explanation for the notice body.
    pub fn user_message(&self) -> String {
        match self {
            ConnectError::ProviderMissing => {
                "Please install a browser wallet extension such as MetaMask".to_string()
            }
            ConnectError::UserRejected => {
                "You declined the connection request in your wallet".to_string()
            }
            ConnectError::RequestFailed(msg) => msg.clone(),
            ConnectError::Timeout(after) => format!(
                "No answer from your wallet after {} seconds. Check the extension popup and try again",
                after.as_secs()
            ),
            ConnectError::Locked => "Unlock your wallet and try again".to_string(),
            ConnectError::WrongNetwork { chain_id } => {
                format!("Switch your wallet to a supported network (currently on chain {})", chain_id)
            }
        }
    }
}

/// Classify a raw provider failure.
impl From<ProviderError> for ConnectError {
    fn from(err: ProviderError) -> Self {
        if err.is_user_rejection() {
            ConnectError::UserRejected
        } else {
            ConnectError::RequestFailed(err.to_string())
        }
    }
}

/// Booking precondition failures raised by the payment selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("This professional does not accept cryptocurrency")]
    CryptoNotAccepted,

    #[error("Connect a wallet before paying with cryptocurrency")]
    WalletNotConnected,

    #[error("Hours must be between {min} and {max}, got {got}")]
    HoursOutOfRange { got: i64, min: u8, max: u8 },

    #[error("Hours must be a whole number, got \"{0}\"")]
    HoursNotANumber(String),

    #[error("A cryptocurrency can only be chosen for crypto payments")]
    CurrencyWithoutCrypto,

    #[error("Select a cryptocurrency")]
    CurrencyMissing,

    #[error("Invalid card details: {0}")]
    InvalidCard(String),
}

impl PaymentError {
    /// Text for the user-visible notice.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_rejection_classified() {
        let err = ProviderError::new(Some(4001), "User rejected the request.");
        assert_eq!(ConnectError::from(err), ConnectError::UserRejected);
    }

    #[test]
    fn test_other_provider_errors_are_request_failures() {
        let err = ProviderError::new(Some(-32603), "Internal JSON-RPC error.");
        assert_eq!(
            ConnectError::from(err),
            ConnectError::RequestFailed("Internal JSON-RPC error. (code -32603)".to_string())
        );
    }

    #[test]
    fn test_timeout_message_mentions_seconds() {
        let err = ConnectError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Wallet did not respond within 30s");
        assert!(err.user_message().contains("30 seconds"));
    }

    #[test]
    fn test_hours_error_display() {
        let err = PaymentError::HoursOutOfRange { got: 9, min: 1, max: 8 };
        assert_eq!(err.user_message(), "Hours must be between 1 and 8, got 9");
    }
}
