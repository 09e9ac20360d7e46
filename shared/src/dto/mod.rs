//! # Data Transfer Objects (DTOs)
//!
//! Plain records passed between the wallet core and the UI. Nothing here is
//! persisted or sent over a network; the types derive `serde` so mock data can
//! be embedded as JSON and so the web crate can hand them to JavaScript.
//!
//! ## Module Organization
//!
//! - [`professional`] - Professional profiles and weekly availability
//! - [`payment`] - Payment methods, supported cryptocurrencies, booking intents
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//!
//! ```text
//! {
//!   "professional_id": 4,
//!   "method": "crypto",
//!   "crypto_currency": "ethereum",
//!   "hours": 8,
//!   "total_usd": 720
//! }
//! ```

pub mod payment;
pub mod professional;

pub use payment::*;
pub use professional::*;
