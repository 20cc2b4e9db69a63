// src/config/options.rs
use super::consts::SCHEDULE_URL;

/// Run parameters, as parsed from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Output format, raw. Validated by the exporter, not the parser.
    pub format: String,
    pub url: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            url: SCHEDULE_URL.to_string(),
        }
    }
}
