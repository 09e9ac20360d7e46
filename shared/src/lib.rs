//! # Shared Data Transfer Objects Library
//!
//! Records shared by the wallet core (`lib-wallet`) and the SkillConnect web
//! front end. All data is mock and in-memory; `serde` derives exist so records
//! can be embedded as JSON and handed across the wasm boundary.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data records
//!   - **[`dto::professional`]**: Professional profiles and availability
//!   - **[`dto::payment`]**: Payment methods, currencies, booking intents
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: `0x1234...abcd` display form
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::payment::{CryptoCurrency, PaymentSelection};
//! use shared::utils::truncate_address;
//!
//! let selection = PaymentSelection::crypto(CryptoCurrency::Usdc);
//! assert_eq!(selection.crypto_currency.map(|c| c.symbol()), Some("USDC"));
//!
//! let display = truncate_address("0x52908400098527886E0F7030069857D2E4169EE7");
//! assert_eq!(display, "0x5290...9EE7");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: everything in a DTO library is public API
pub use dto::*;
pub use utils::*;
