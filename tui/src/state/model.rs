use regression_core::{Flag, Param};

/// A parameter slider over [-10, 10] with a 0.1 step.
///
/// The position is kept in tenths so stepping back and forth always lands on the
/// same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    tenths: i32,
}

impl Slider {
    pub const MIN_TENTHS: i32 = -100;
    pub const MAX_TENTHS: i32 = 100;

    /// Creates a slider at the grid position closest to `value`, clamped to its range.
    pub fn from_value(value: f64) -> Self {
        let tenths = if value.is_finite() {
            (value * 10.).round().clamp(Self::MIN_TENTHS as f64, Self::MAX_TENTHS as f64) as i32
        } else {
            0
        };

        Self { tenths }
    }

    pub fn value(&self) -> f64 {
        self.tenths as f64 / 10.
    }

    /// Moves the slider by `delta` tenths, stopping at the ends.
    pub fn step(self, delta: i32) -> Self {
        Self {
            tenths: (self.tenths + delta).clamp(Self::MIN_TENTHS, Self::MAX_TENTHS),
        }
    }

    /// Position of the knob over a track of `width` cells.
    pub fn knob(&self, width: usize) -> usize {
        let span = (Self::MAX_TENTHS - Self::MIN_TENTHS) as usize;
        let offset = (self.tenths - Self::MIN_TENTHS) as usize;
        (offset * width.saturating_sub(1)) / span
    }
}

/// A row of the control sidebar that can hold the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Slider(Param),
    Toggle(Flag),
}

impl Control {
    /// Every control, top to bottom.
    pub const ALL: [Control; 9] = [
        Control::Slider(Param::Intercept),
        Control::Slider(Param::Slope),
        Control::Toggle(Flag::DataPoints),
        Control::Toggle(Flag::Ssr),
        Control::Toggle(Flag::SsrVsB),
        Control::Toggle(Flag::SsrVsA),
        Control::Toggle(Flag::TestSet),
        Control::Toggle(Flag::Metrics),
        Control::Toggle(Flag::MaeVsB),
    ];
}

/// A user intent, already decoupled from the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FocusPrev,
    FocusNext,
    /// Moves the focused slider by the given amount of tenths.
    Step(i32),
    /// Flips the focused toggle.
    Activate,
    Reset,
}
