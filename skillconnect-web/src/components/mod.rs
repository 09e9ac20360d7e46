//! UI Components

pub mod connect_button;
pub mod connect_modal;
pub mod mobile_menu;
pub mod navbar;
pub mod toast;
pub mod wallet_status;

pub use connect_button::ConnectWalletButton;
pub use connect_modal::{start_connect, ConnectWalletModal};
pub use navbar::Navbar;
pub use toast::Toaster;
pub use wallet_status::WalletStatus;
