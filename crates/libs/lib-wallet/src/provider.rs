//! # Provider Boundary
//!
//! The injected wallet provider is treated as a capability interface with
//! three operations (account request, signer address, active chain). Nothing
//! about its shape is assumed: a [`ProviderDetector`] inspects the environment
//! and reports a [`ProviderCapability`] before every connection attempt,
//! because an extension may inject itself after page load.
//!
//! The traits are `?Send`: browser handles are `JsValue`s and everything runs
//! on the UI thread.

use async_trait::async_trait;
use std::fmt;
use std::rc::Rc;

/// EIP-1193 "User Rejected Request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// ethers.js code attached to rejections surfaced through a signer.
const ETHERS_ACTION_REJECTED: &str = "ACTION_REJECTED";

/// What the detected provider exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProviderCapability {
    /// An injected provider object exists.
    pub present: bool,
    /// The provider exposes the account-request method.
    pub supports_request_accounts: bool,
}

impl ProviderCapability {
    /// No provider injected. A normal outcome, not an error.
    pub const fn missing() -> Self {
        Self { present: false, supports_request_accounts: false }
    }

    pub const fn full() -> Self {
        Self { present: true, supports_request_accounts: true }
    }
}

/// Raw failure reported by a provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    /// EIP-1193 / JSON-RPC error code, when the provider supplied one
    pub code: Option<i64>,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Error without a code, e.g. a malformed response.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    /// Whether the user declined the prompt.
    ///
    /// Providers disagree on how to say so; code 4001 is standard, older
    /// wallets only put it in the message.
    pub fn is_user_rejection(&self) -> bool {
        if self.code == Some(USER_REJECTED_CODE) {
            return true;
        }
        let lower = self.message.to_ascii_lowercase();
        self.message.contains(ETHERS_ACTION_REJECTED)
            || lower.contains("user rejected")
            || lower.contains("user denied")
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ProviderError {}

/// An injected wallet provider.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Ask for account access (`eth_requestAccounts`). May prompt the user.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Address of the account bound to the provider's signer.
    async fn signer_address(&self) -> Result<String, ProviderError>;

    /// Active chain id (`eth_chainId`).
    async fn chain_id(&self) -> Result<u64, ProviderError>;
}

/// Looks for an injected provider in the current execution context.
pub trait ProviderDetector {
    /// Inspect the environment. Cheap, side-effect free, may change between calls.
    fn detect(&self) -> ProviderCapability;

    /// Handle to the provider, `None` when [`detect`](Self::detect) reports it absent.
    fn provider(&self) -> Option<Rc<dyn WalletProvider>>;
}

/// Parse a chain id as returned by `eth_chainId` (`"0x1"`) or written by hand (`"1"`).
pub fn parse_chain_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_by_code() {
        assert!(ProviderError::new(Some(4001), "nope").is_user_rejection());
        assert!(!ProviderError::new(Some(-32002), "Request already pending").is_user_rejection());
    }

    #[test]
    fn test_rejection_by_message() {
        assert!(ProviderError::malformed("MetaMask Tx Signature: User denied transaction").is_user_rejection());
        assert!(ProviderError::malformed("user rejected action (code=ACTION_REJECTED)").is_user_rejection());
        assert!(!ProviderError::malformed("Internal error").is_user_rejection());
    }

    #[test]
    fn test_display_includes_code() {
        assert_eq!(ProviderError::new(Some(-32603), "boom").to_string(), "boom (code -32603)");
        assert_eq!(ProviderError::malformed("boom").to_string(), "boom");
    }

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0x1"), Some(1));
        assert_eq!(parse_chain_id("0xaa36a7"), Some(11_155_111));
        assert_eq!(parse_chain_id(" 137 "), Some(137));
        assert_eq!(parse_chain_id("0x"), None);
        assert_eq!(parse_chain_id("mainnet"), None);
    }
}
