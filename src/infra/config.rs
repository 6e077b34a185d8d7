//! Centralized configuration (environment variables + defaults).

use std::path::PathBuf;

/// HTTP port (defaults to 3000).
pub fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(3000)
}

/// Directory holding the per-type JSON data files (defaults to `database`).
pub fn data_dir() -> PathBuf {
    std::env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("database"))
}
