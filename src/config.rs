/// --- Output Regions ---
pub const LOG_OUTPUT_ID: &str = "log-output";
pub const TECHNICAL_OUTPUT_ID: &str = "technical-output";

/// --- Height Ratios (fraction of viewport height) ---
/// The remaining 10% is left for page chrome.
pub const LOG_OUTPUT_RATIO: f64 = 0.3;
pub const TECHNICAL_OUTPUT_RATIO: f64 = 0.6;

/// --- DOM ---
pub const HEIGHT_PROPERTY: &str = "height";
pub const RESIZE_EVENT: &str = "resize";
pub const APP_TITLE: &str = "Output Panels";
