//! # Payment Data Transfer Objects
//!
//! Payment method selection and the booking intent handed to the (mocked)
//! confirmation step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the client pays for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Crypto,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit Card",
            PaymentMethod::Crypto => "Cryptocurrency",
        }
    }
}

/// Cryptocurrencies accepted on the crypto payment tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CryptoCurrency {
    #[default]
    Bitcoin,
    Ethereum,
    Usdc,
    Usdt,
    Bnb,
}

impl CryptoCurrency {
    /// All currencies in display order.
    pub const ALL: [CryptoCurrency; 5] = [
        CryptoCurrency::Bitcoin,
        CryptoCurrency::Ethereum,
        CryptoCurrency::Usdc,
        CryptoCurrency::Usdt,
        CryptoCurrency::Bnb,
    ];

    /// Form value, also the serde representation.
    pub fn value(&self) -> &'static str {
        match self {
            CryptoCurrency::Bitcoin => "bitcoin",
            CryptoCurrency::Ethereum => "ethereum",
            CryptoCurrency::Usdc => "usdc",
            CryptoCurrency::Usdt => "usdt",
            CryptoCurrency::Bnb => "bnb",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CryptoCurrency::Bitcoin => "BTC",
            CryptoCurrency::Ethereum => "ETH",
            CryptoCurrency::Usdc => "USDC",
            CryptoCurrency::Usdt => "USDT",
            CryptoCurrency::Bnb => "BNB",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CryptoCurrency::Bitcoin => "Bitcoin (BTC)",
            CryptoCurrency::Ethereum => "Ethereum (ETH)",
            CryptoCurrency::Usdc => "USD Coin (USDC)",
            CryptoCurrency::Usdt => "Tether (USDT)",
            CryptoCurrency::Bnb => "Binance Coin (BNB)",
        }
    }
}

impl fmt::Display for CryptoCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CryptoCurrency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CryptoCurrency::ALL
            .into_iter()
            .find(|c| c.value().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unsupported cryptocurrency: {}", s))
    }
}

/// The payment path the user is currently on.
///
/// `crypto_currency` is only ever set when `method` is [`PaymentMethod::Crypto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentSelection {
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_currency: Option<CryptoCurrency>,
}

impl PaymentSelection {
    pub const fn card() -> Self {
        Self { method: PaymentMethod::Card, crypto_currency: None }
    }

    pub const fn crypto(currency: CryptoCurrency) -> Self {
        Self { method: PaymentMethod::Crypto, crypto_currency: Some(currency) }
    }
}

/// Confirmation intent for a booking, produced once every precondition holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingIntent {
    pub professional_id: u32,
    pub professional_name: String,
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_currency: Option<CryptoCurrency>,
    /// Paying wallet, set for crypto bookings only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_address: Option<String>,
    pub hours: u8,
    pub total_usd: u64,
    pub day: String,
    pub slot: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_currency_parse() {
        assert_eq!("ethereum".parse::<CryptoCurrency>(), Ok(CryptoCurrency::Ethereum));
        assert_eq!(" USDC ".parse::<CryptoCurrency>(), Ok(CryptoCurrency::Usdc));
        assert!("dogecoin".parse::<CryptoCurrency>().is_err());
    }

    #[test]
    fn test_crypto_currency_labels() {
        assert_eq!(CryptoCurrency::Bnb.label(), "Binance Coin (BNB)");
        assert_eq!(CryptoCurrency::Usdt.symbol(), "USDT");
        assert_eq!(CryptoCurrency::default(), CryptoCurrency::Bitcoin);
    }

    #[test]
    fn test_selection_serializes_lowercase() {
        let json = serde_json::to_string(&PaymentSelection::crypto(CryptoCurrency::Ethereum)).unwrap();
        assert_eq!(json, r#"{"method":"crypto","crypto_currency":"ethereum"}"#);

        let json = serde_json::to_string(&PaymentSelection::card()).unwrap();
        assert_eq!(json, r#"{"method":"card"}"#);
    }
}
