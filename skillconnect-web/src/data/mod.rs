//! Static mock data

pub mod professionals;

pub use professionals::{load_professionals, professionals};
