//! Payment method selection for one booking.

use std::str::FromStr;

use shared::dto::payment::{BookingIntent, CryptoCurrency, PaymentMethod, PaymentSelection};
use shared::dto::professional::Professional;
use tracing::debug;

use super::card::CardDetails;
use crate::error::{PaymentError, PaymentResult};
use crate::session::WalletSession;

pub const MIN_HOURS: u8 = 1;
pub const MAX_HOURS: u8 = 8;

/// Session length in whole hours, always within `MIN_HOURS..=MAX_HOURS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hours(u8);

impl Hours {
    /// Validate raw input. Out-of-range values are rejected, never clamped or wrapped.
    pub fn new(hours: i64) -> PaymentResult<Self> {
        if hours < i64::from(MIN_HOURS) || hours > i64::from(MAX_HOURS) {
            return Err(PaymentError::HoursOutOfRange { got: hours, min: MIN_HOURS, max: MAX_HOURS });
        }
        Ok(Self(hours as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Parse form text. Surrounding whitespace is ignored.
impl FromStr for Hours {
    type Err = PaymentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let hours = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| PaymentError::HoursNotANumber(raw.trim().to_string()))?;
        Hours::new(hours)
    }
}

impl Default for Hours {
    fn default() -> Self {
        Self(MIN_HOURS)
    }
}

/// `hourly_rate * hours`, with `hours` checked at the boundary.
pub fn compute_total(hourly_rate: u32, hours: i64) -> PaymentResult<u64> {
    let hours = Hours::new(hours)?;
    Ok(u64::from(hourly_rate) * u64::from(hours.get()))
}

/// What the user entered in the booking form.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub hours: i64,
    pub day: String,
    pub slot: String,
    /// Required for card payments, ignored for crypto
    pub card: Option<CardDetails>,
}

/// Which payment form is active for one professional, and whether it may be.
#[derive(Debug, Clone)]
pub struct PaymentSelector {
    professional_id: u32,
    professional_name: String,
    hourly_rate: u32,
    accepts_crypto: bool,
    selection: PaymentSelection,
}

impl PaymentSelector {
    pub fn new(professional: &Professional) -> Self {
        Self {
            professional_id: professional.id,
            professional_name: professional.name.clone(),
            hourly_rate: professional.hourly_rate,
            accepts_crypto: professional.accepts_crypto,
            selection: PaymentSelection::card(),
        }
    }

    pub fn selection(&self) -> PaymentSelection {
        self.selection
    }

    pub fn accepts_crypto(&self) -> bool {
        self.accepts_crypto
    }

    /// Why crypto cannot be chosen right now, if it cannot.
    pub fn crypto_blocker(&self, session: &WalletSession) -> Option<PaymentError> {
        if !self.accepts_crypto {
            Some(PaymentError::CryptoNotAccepted)
        } else if !session.is_connected() {
            Some(PaymentError::WalletNotConnected)
        } else {
            None
        }
    }

    /// Switch payment form. A rejected switch leaves the selection unchanged.
    pub fn select_method(
        &mut self,
        method: PaymentMethod,
        session: &WalletSession,
    ) -> PaymentResult<PaymentSelection> {
        match method {
            PaymentMethod::Card => self.selection = PaymentSelection::card(),
            PaymentMethod::Crypto => {
                if let Some(blocker) = self.crypto_blocker(session) {
                    debug!(professional = self.professional_id, "Crypto selection rejected: {}", blocker);
                    return Err(blocker);
                }
                if self.selection.method != PaymentMethod::Crypto {
                    self.selection = PaymentSelection::crypto(CryptoCurrency::default());
                }
            }
        }
        Ok(self.selection)
    }

    /// Pick the coin on the crypto tab.
    pub fn select_currency(&mut self, currency: CryptoCurrency) -> PaymentResult<()> {
        if self.selection.method != PaymentMethod::Crypto {
            return Err(PaymentError::CurrencyWithoutCrypto);
        }
        self.selection.crypto_currency = Some(currency);
        Ok(())
    }

    /// Total for `hours` at this professional's rate.
    pub fn total(&self, hours: i64) -> PaymentResult<u64> {
        compute_total(self.hourly_rate, hours)
    }

    /// Re-check every precondition against the current session and build the intent.
    pub fn confirm(&self, request: &BookingRequest, session: &WalletSession) -> PaymentResult<BookingIntent> {
        let hours = Hours::new(request.hours)?;
        let total_usd = u64::from(self.hourly_rate) * u64::from(hours.get());

        let (crypto_currency, payer_address) = match self.selection.method {
            PaymentMethod::Card => {
                let card = request
                    .card
                    .as_ref()
                    .ok_or_else(|| PaymentError::InvalidCard("card details missing".to_string()))?;
                card.validate()?;
                (None, None)
            }
            PaymentMethod::Crypto => {
                // The wallet may have gone away since the tab was selected
                if let Some(blocker) = self.crypto_blocker(session) {
                    return Err(blocker);
                }
                let currency = self.selection.crypto_currency.ok_or(PaymentError::CurrencyMissing)?;
                (Some(currency), session.address().map(str::to_owned))
            }
        };

        Ok(BookingIntent {
            professional_id: self.professional_id,
            professional_name: self.professional_name.clone(),
            method: self.selection.method,
            crypto_currency,
            payer_address,
            hours: hours.get(),
            total_usd,
            day: request.day.clone(),
            slot: request.slot.clone(),
        })
    }
}
