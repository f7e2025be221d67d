pub mod builder;
pub mod json;
pub mod model;

use regression_core::{DisplayFlags, SweepRange};

use crate::state::model::Slider;

/// Validated startup settings of the explorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub a: Slider,
    pub b: Slider,
    pub flags: DisplayFlags,
    pub range: SweepRange,
}
