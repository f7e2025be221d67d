use std::path::PathBuf;

use regression_core::{DisplayFlags, SweepRange};
use serde::Deserialize;

/// The explorer settings as read from the JSON config file, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigDraft {
    /// Initial intercept.
    pub a: f64,
    /// Initial slope.
    pub b: f64,
    pub flags: DisplayFlags,
    pub sweep: SweepRange,
    /// Where log records go, the terminal belongs to the UI.
    pub log_file: Option<PathBuf>,
}

impl Default for ConfigDraft {
    fn default() -> Self {
        Self {
            a: -2.,
            b: 1.,
            flags: DisplayFlags::default(),
            sweep: SweepRange::default(),
            log_file: None,
        }
    }
}
