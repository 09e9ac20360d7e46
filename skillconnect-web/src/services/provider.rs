//! Injected EIP-1193 provider via wasm-bindgen
//!
//! Wraps `window.ethereum` behind the core's [`WalletProvider`] and
//! [`ProviderDetector`] traits. Detection runs on every call because
//! extensions may inject themselves after page load.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::Reflect;
use lib_wallet::provider::parse_chain_id;
use lib_wallet::{ProviderCapability, ProviderDetector, ProviderError, WalletProvider};
use wasm_bindgen::prelude::*;

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasInjectedProvider() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export function providerSupportsRequest() {
    return !!(window.ethereum && typeof window.ethereum.request === 'function');
}

export async function ethereumRequest(method) {
    if (!window.ethereum) {
        throw { code: null, message: 'No injected wallet provider' };
    }
    return await window.ethereum.request({ method: method });
}
")]
extern "C" {
    fn hasInjectedProvider() -> bool;

    fn providerSupportsRequest() -> bool;

    /// `window.ethereum.request({ method })`
    #[wasm_bindgen(catch)]
    async fn ethereumRequest(method: &str) -> Result<JsValue, JsValue>;
}

/// Pull `code` and `message` out of whatever the provider threw.
fn provider_error(err: JsValue) -> ProviderError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64);

    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    ProviderError::new(code, message)
}

async fn request(method: &str) -> Result<JsValue, ProviderError> {
    log::debug!("ethereum.request {}", method);
    ethereumRequest(method).await.map_err(provider_error)
}

fn accounts_from(value: JsValue) -> Result<Vec<String>, ProviderError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ProviderError::malformed(format!("Unexpected account list: {}", e)))
}

// ============================================================================
// PROVIDER
// ============================================================================

/// `window.ethereum` as seen at the time of the call.
pub struct BrowserProvider;

#[async_trait(?Send)]
impl WalletProvider for BrowserProvider {
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        accounts_from(request("eth_requestAccounts").await?)
    }

    async fn signer_address(&self) -> Result<String, ProviderError> {
        // The signer is the first authorised account
        let accounts = accounts_from(request("eth_accounts").await?)?;
        accounts
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::malformed("Wallet exposed no signer account"))
    }

    async fn chain_id(&self) -> Result<u64, ProviderError> {
        let raw = request("eth_chainId")
            .await?
            .as_string()
            .ok_or_else(|| ProviderError::malformed("Chain id is not a string"))?;
        parse_chain_id(&raw).ok_or_else(|| ProviderError::malformed(format!("Unparseable chain id: {}", raw)))
    }
}

/// Detects `window.ethereum`.
pub struct InjectedDetector;

impl ProviderDetector for InjectedDetector {
    fn detect(&self) -> ProviderCapability {
        let present = hasInjectedProvider();
        ProviderCapability {
            present,
            supports_request_accounts: present && providerSupportsRequest(),
        }
    }

    fn provider(&self) -> Option<Rc<dyn WalletProvider>> {
        if hasInjectedProvider() {
            Some(Rc::new(BrowserProvider))
        } else {
            None
        }
    }
}
