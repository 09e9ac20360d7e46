//! # Shared Utility Functions
//!
//! Common helpers used by the wallet core and the web front end.
//!
//! ## Address Formatting
//!
//! Functions for working with Ethereum-style account addresses:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `0x1234...7890` form used in headers and buttons
//! - [`is_account_address`] - Shape check for a `0x`-prefixed 20-byte hex address
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x52908400098527886E0F7030069857D2E4169EE7";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x5290...9EE7");
//! ```

/// Length of a `0x`-prefixed account address.
pub const ACCOUNT_ADDRESS_LEN: usize = 42;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(format_address(addr, 6, 4), "0x5290...9EE7");
/// assert_eq!(format_address(addr, 4, 4), "0x52...9EE7");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Also guards slicing when either part alone exceeds the address
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an account address as `0x` plus four characters, ellipsis, last four.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(truncate_address(addr), "0x5290...9EE7");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Check that `address` looks like a `0x`-prefixed 20-byte hex account.
///
/// Checksum casing is not verified; the provider is trusted for that.
pub fn is_account_address(address: &str) -> bool {
    address.len() == ACCOUNT_ADDRESS_LEN
        && address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 6, 4), "0x5290...9EE7");
        assert_eq!(format_address(ADDR, 2, 2), "0x...E7");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("0x12", 6, 4), "0x12");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "0x5290...9EE7");
    }

    #[test]
    fn test_is_account_address() {
        assert!(is_account_address(ADDR));
        assert!(is_account_address(&ADDR.to_lowercase()));
        assert!(!is_account_address("0x1234"));
        assert!(!is_account_address("5290840009852788 6E0F7030069857D2E4169EE7ab"));
        assert!(!is_account_address("0xZZ908400098527886E0F7030069857D2E4169EE7"));
    }
}
