//! # Utilities Library
//!
//! Environment variable readers and input validation shared by the wallet
//! core and the web front end.

pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_opt, get_env_parse};
pub use validation::{validate_digits, validate_in_range, validate_not_empty};
