//! Card form formatting and validation. No card data leaves the page.

use lib_utils::validation::{validate_digits, validate_in_range, validate_not_empty};

use crate::error::{PaymentError, PaymentResult};

pub const CARD_NUMBER_DIGITS: usize = 16;
pub const CVC_DIGITS: usize = 3;

/// Group card digits in blocks of four, dropping anything that is not a digit.
///
/// ```rust
/// use lib_wallet::payment::card::format_card_number;
///
/// assert_eq!(format_card_number("4242424242424242"), "4242 4242 4242 4242");
/// assert_eq!(format_card_number("4242-42"), "4242 42");
/// ```
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(CARD_NUMBER_DIGITS)
        .collect();

    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format expiry input as `MM/YY` once two digits are typed.
///
/// ```rust
/// use lib_wallet::payment::card::format_expiry;
///
/// assert_eq!(format_expiry("1"), "1");
/// assert_eq!(format_expiry("1229"), "12/29");
/// assert_eq!(format_expiry("12/2"), "12/2");
/// ```
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Contents of the card payment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub name: String,
    pub number: String,
    /// `MM/YY`
    pub expiry: String,
    pub cvc: String,
}

impl CardDetails {
    pub fn validate(&self) -> PaymentResult<()> {
        validate_not_empty(&self.name, "Name on card").map_err(PaymentError::InvalidCard)?;

        let digits: String = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        validate_digits(&digits, CARD_NUMBER_DIGITS, "Card number").map_err(PaymentError::InvalidCard)?;

        let (month, year) = self
            .expiry
            .split_once('/')
            .ok_or_else(|| PaymentError::InvalidCard("Expiry must be MM/YY".to_string()))?;
        validate_digits(month, 2, "Expiry month").map_err(PaymentError::InvalidCard)?;
        validate_digits(year, 2, "Expiry year").map_err(PaymentError::InvalidCard)?;
        let month: u8 = month.parse().map_err(|_| PaymentError::InvalidCard("Expiry must be MM/YY".to_string()))?;
        validate_in_range(month, 1, 12, "Expiry month").map_err(PaymentError::InvalidCard)?;

        validate_digits(&self.cvc, CVC_DIGITS, "CVC").map_err(PaymentError::InvalidCard)?;
        Ok(())
    }
}
