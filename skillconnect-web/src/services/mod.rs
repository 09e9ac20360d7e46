//! Browser bindings for the wallet core

pub mod clipboard;
pub mod provider;
pub mod timer;

pub use clipboard::copy_text;
pub use provider::InjectedDetector;
pub use timer::GlooTimer;
