//! Payment method selection and the card form helpers.

pub mod card;
pub mod selector;

pub use card::{format_card_number, format_expiry, CardDetails};
pub use selector::{compute_total, BookingRequest, Hours, PaymentSelector, MAX_HOURS, MIN_HOURS};
