//! Application state shared through Leptos context

pub mod notice;
pub mod wallet;
