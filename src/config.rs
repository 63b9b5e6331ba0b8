use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Symptom Checker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the catalog data directory.
pub const DATA_DIR_ENV: &str = "SYMPTOM_CHECKER_DATA_DIR";
/// Environment variable overriding the HTTP bind address.
pub const ADDR_ENV: &str = "SYMPTOM_CHECKER_ADDR";

pub const DEFAULT_DATA_DIR: &str = "ml_model";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Pre-serialized record list, preferred source.
pub const STRUCTURED_CATALOG_FILE: &str = "diseases.json";
/// Raw tabular source, consulted only when the structured file is absent.
pub const TABULAR_CATALOG_FILE: &str = "diseases.csv";
/// Case-insensitive prefix of every tabular column holding a symptom slot.
pub const SYMPTOM_COLUMN_PREFIX: &str = "symptom";
pub const DISEASE_COLUMN: &str = "disease";

// ═══════════════════════════════════════════════════════════
// Matching thresholds
// ═══════════════════════════════════════════════════════════

/// Accepted number of symptoms after normalization (inclusive).
pub const MIN_SYMPTOMS: usize = 4;
pub const MAX_SYMPTOMS: usize = 6;
/// Recognized symptoms required before ranking.
pub const MIN_VALID_SYMPTOMS: usize = 4;
/// Records sharing fewer symptoms than this are excluded outright.
pub const MIN_MATCH_COUNT: usize = 2;
/// Minimum similarity (0-100) for a spelling suggestion.
pub const SUGGESTION_CUTOFF: f64 = 70.0;
/// Scores strictly above this receive jitter.
pub const JITTER_THRESHOLD: u8 = 50;
pub const JITTER_SPREAD: u8 = 10;
/// Maximum number of ranked diseases returned.
pub const TOP_K: usize = 5;

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "symptom_checker=info,tower_http=warn"
}

/// Directory holding the catalog files.
pub fn data_dir() -> PathBuf {
    data_dir_from(std::env::var(DATA_DIR_ENV).ok())
}

fn data_dir_from(value: Option<String>) -> PathBuf {
    match value {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
        _ => PathBuf::from(DEFAULT_DATA_DIR),
    }
}

pub fn structured_catalog_path() -> PathBuf {
    data_dir().join(STRUCTURED_CATALOG_FILE)
}

pub fn tabular_catalog_path() -> PathBuf {
    data_dir().join(TABULAR_CATALOG_FILE)
}

/// Address the HTTP server binds to.
pub fn bind_addr() -> Result<SocketAddr, String> {
    bind_addr_from(std::env::var(ADDR_ENV).ok())
}

fn bind_addr_from(value: Option<String>) -> Result<SocketAddr, String> {
    let raw = value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());
    raw.trim()
        .parse()
        .map_err(|e| format!("Invalid {ADDR_ENV} '{raw}': {e}"))
}
