//! # Wallet Configuration
//!
//! Tunables for the connection negotiator, with defaults that need no setup.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `SKILLCONNECT_CONNECT_TIMEOUT_SECS` | `30` | Upper bound on one negotiation |
//! | `SKILLCONNECT_ALLOWED_CHAINS` | `1,0xaa36a7` | Chains a connection may use; empty allows any |
//!
//! The browser has no process environment, so the web build always runs on
//! defaults unless it calls [`init_config`] with an explicit value.
//!
//! ## Global Config Access
//!
//! ```rust
//! use lib_wallet::config::wallet_config;
//!
//! let config = wallet_config();
//! assert!(config.allows_chain(1));
//! ```

use std::sync::OnceLock;
use std::time::Duration;

use lib_utils::envs::{get_env_opt, get_env, Error as EnvError};

use crate::provider::parse_chain_id;

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

pub const ETHEREUM_MAINNET: u64 = 1;
pub const ETHEREUM_SEPOLIA: u64 = 11_155_111;

const TIMEOUT_ENV: &str = "SKILLCONNECT_CONNECT_TIMEOUT_SECS";
const CHAINS_ENV: &str = "SKILLCONNECT_ALLOWED_CHAINS";

/// Negotiator configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    /// How long one negotiation may stay pending before failing with `Timeout`
    pub connect_timeout: Duration,

    /// Chain ids a connection may be on. Empty disables the network check.
    pub allowed_chain_ids: Vec<u64>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            allowed_chain_ids: vec![ETHEREUM_MAINNET, ETHEREUM_SEPOLIA],
        }
    }
}

impl WalletConfig {
    /// Load configuration from environment variables, defaulting what is unset.
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(secs) = get_env_opt::<u64>(TIMEOUT_ENV).map_err(|e| e.to_string())? {
            config.connect_timeout = Duration::from_secs(secs);
        }

        match get_env(CHAINS_ENV) {
            Ok(raw) => config.allowed_chain_ids = parse_chain_list(&raw)?,
            Err(EnvError::MissingEnv(_)) => {}
            Err(e) => return Err(e.to_string()),
        }

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.connect_timeout.is_zero() {
            return Err(format!("{} must be greater than zero", TIMEOUT_ENV));
        }
        if self.connect_timeout > Duration::from_secs(600) {
            return Err(format!("{} must be at most 600 seconds", TIMEOUT_ENV));
        }
        Ok(())
    }

    /// Whether a connection on `chain_id` is acceptable.
    pub fn allows_chain(&self, chain_id: u64) -> bool {
        self.allowed_chain_ids.is_empty() || self.allowed_chain_ids.contains(&chain_id)
    }
}

/// Parse a comma-separated chain list; decimal and `0x` hex ids are both accepted.
pub fn parse_chain_list(raw: &str) -> Result<Vec<u64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            parse_chain_id(part).ok_or_else(|| format!("{} contains an invalid chain id: {}", CHAINS_ENV, part))
        })
        .collect()
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<WalletConfig> = OnceLock::new();

/// Install the global configuration.
///
/// # Errors
///
/// Returns an error if validation fails or the config was already initialized
/// (including implicitly, by an earlier [`wallet_config`] call).
pub fn init_config(config: WalletConfig) -> Result<(), String> {
    config.validate()?;

    CONFIG.set(config)
        .map_err(|_| "Wallet config has already been initialized".to_string())
}

/// Install the configuration read from the environment.
pub fn init_config_from_env() -> Result<(), String> {
    init_config(WalletConfig::from_env()?)
}

/// The active configuration, defaults if none was installed.
pub fn wallet_config() -> &'static WalletConfig {
    CONFIG.get_or_init(WalletConfig::default)
}
