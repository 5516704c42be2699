use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Healthmate";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Conditions reported per assessment.
pub const MAX_RANKED_CONDITIONS: usize = 3;

/// Health score bounds (inclusive).
pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 100;

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "healthmate_lib=info,warn"
}

/// Directory holding optional custom reference tables:
/// `<platform data dir>/Healthmate/reference`.
pub fn reference_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_NAME).join("reference"))
}
