//! Page modules

pub mod explore;
pub mod payment;
pub mod wallet;

pub use explore::ExplorePage;
pub use payment::PaymentPage;
pub use wallet::WalletPage;
