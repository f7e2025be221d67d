use regression_core::{
    generate_datasets, recompute, Datasets, DisplayFlags, LinearModel, Param, Result, Scene,
    SweepRange,
};

use super::model::{Command, Control, Slider};
use crate::config::ExplorerConfig;

/// Slider positions and toggles, the only state the user controls.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Controls {
    a: Slider,
    b: Slider,
    flags: DisplayFlags,
}

impl Controls {
    fn model(&self) -> LinearModel {
        LinearModel::new(self.a.value(), self.b.value())
    }

    fn slider_mut(&mut self, param: Param) -> &mut Slider {
        match param {
            Param::Intercept => &mut self.a,
            Param::Slope => &mut self.b,
        }
    }
}

/// Holds the controls and the scene derived from them.
///
/// Every change of the controls recomputes the whole scene, the previous one is
/// dropped and nothing is carried over.
pub struct ExplorerState {
    datasets: Datasets,
    range: SweepRange,
    initial: Controls,
    controls: Controls,
    focus: usize,
    scene: Scene,
    status: Option<String>,
}

impl ExplorerState {
    /// Generates the datasets and computes the first scene.
    ///
    /// # Errors
    /// Returns an error if the datasets cannot be generated or the first scene fails.
    pub fn new(config: ExplorerConfig) -> Result<Self> {
        let datasets = generate_datasets()?;
        let controls = Controls {
            a: config.a,
            b: config.b,
            flags: config.flags,
        };
        let scene = recompute(&datasets, controls.model(), controls.flags, config.range)?;

        Ok(Self {
            datasets,
            range: config.range,
            initial: controls,
            controls,
            focus: 0,
            scene,
            status: None,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn slider(&self, param: Param) -> Slider {
        match param {
            Param::Intercept => self.controls.a,
            Param::Slope => self.controls.b,
        }
    }

    pub fn flags(&self) -> DisplayFlags {
        self.controls.flags
    }

    pub fn focused(&self) -> Control {
        Control::ALL[self.focus]
    }

    /// The last recomputation error, cleared by the next successful change.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies a user command.
    ///
    /// # Returns
    /// Whether the scene was recomputed.
    pub fn apply(&mut self, command: Command) -> bool {
        let mut next = self.controls;

        match (command, self.focused()) {
            (Command::FocusPrev, _) => {
                self.focus = self.focus.saturating_sub(1);
                return false;
            }
            (Command::FocusNext, _) => {
                self.focus = (self.focus + 1).min(Control::ALL.len() - 1);
                return false;
            }
            (Command::Step(delta), Control::Slider(param)) => {
                let slider = next.slider_mut(param);
                *slider = slider.step(delta);
            }
            (Command::Activate, Control::Toggle(flag)) => next.flags.toggle(flag),
            (Command::Reset, _) => next = self.initial,
            (Command::Step(_), Control::Toggle(_)) | (Command::Activate, Control::Slider(_)) => {
                return false;
            }
        }

        if next == self.controls {
            return false;
        }

        self.refresh(next)
    }

    fn refresh(&mut self, next: Controls) -> bool {
        match recompute(&self.datasets, next.model(), next.flags, self.range) {
            Ok(scene) => {
                self.controls = next;
                self.scene = scene;
                self.status = None;
                true
            }
            Err(e) => {
                log::warn!("keeping previous scene: {e}");
                self.status = Some(e.to_string());
                false
            }
        }
    }
}
