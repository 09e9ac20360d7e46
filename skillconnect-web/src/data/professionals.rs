//! Mock professional records, embedded at build time.

use shared::dto::professional::Professional;

const PROFESSIONALS_JSON: &str = include_str!("professionals.json");

/// Parse the embedded records.
pub fn load_professionals() -> Result<Vec<Professional>, serde_json::Error> {
    serde_json::from_str(PROFESSIONALS_JSON)
}

/// The embedded records, empty (and logged) if they fail to parse.
pub fn professionals() -> Vec<Professional> {
    load_professionals().unwrap_or_else(|e| {
        log::error!("Failed to parse professional data: {}", e);
        Vec::new()
    })
}
