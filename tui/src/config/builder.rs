use regression_core::LinearModel;

use super::{model::ConfigDraft, ExplorerConfig};
use crate::state::model::Slider;

/// Converts a [`ConfigDraft`] into the explorer's startup configuration.
///
/// The initial parameters are snapped onto the slider grid.
///
/// # Errors
/// Returns a human-readable error if the sweep range is invalid.
pub fn build(draft: &ConfigDraft) -> Result<ExplorerConfig, String> {
    draft
        .sweep
        .validate()
        .map_err(|e| format!("sweep: {e}"))?;

    Ok(ExplorerConfig {
        a: Slider::from_value(draft.a),
        b: Slider::from_value(draft.b),
        flags: draft.flags,
        range: draft.sweep,
    })
}

impl ExplorerConfig {
    pub fn model(&self) -> LinearModel {
        LinearModel::new(self.a.value(), self.b.value())
    }
}

#[cfg(test)]
mod tests {
    use regression_core::SweepRange;

    use super::*;

    #[test]
    fn defaults_start_at_the_shifted_line() {
        let config = build(&ConfigDraft::default()).unwrap();
        assert_eq!(config.model(), LinearModel::new(-2., 1.));
        assert_eq!(config.range, SweepRange::default());
    }

    #[test]
    fn out_of_range_parameters_are_clamped() {
        let draft = ConfigDraft {
            a: 25.,
            b: -0.04,
            ..Default::default()
        };
        let config = build(&draft).unwrap();
        assert_eq!(config.model(), LinearModel::new(10., 0.));
    }

    #[test]
    fn invalid_sweep_is_rejected() {
        let draft = ConfigDraft {
            sweep: SweepRange {
                start: 5.,
                end: -5.,
                samples: 10,
            },
            ..Default::default()
        };
        assert!(build(&draft).unwrap_err().starts_with("sweep:"));
    }
}
