use std::fmt::{self, Display};

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// One of the two parameters of a [`LinearModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Param {
    /// The intercept `a`.
    #[serde(rename = "a")]
    Intercept,
    /// The slope `b`.
    #[serde(rename = "b")]
    Slope,
}

impl Param {
    /// The single letter the parameter is written as in `y = a + b x`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Param::Intercept => "a",
            Param::Slope => "b",
        }
    }

    /// The other parameter, the one held fixed while this one is swept.
    pub fn other(&self) -> Self {
        match self {
            Param::Intercept => Param::Slope,
            Param::Slope => Param::Intercept,
        }
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Param::Intercept => "a (y-intercept)",
            Param::Slope => "b (slope)",
        };

        write!(f, "{s}")
    }
}

/// The line `y = a + b x`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearModel {
    pub a: f64,
    pub b: f64,
}

impl LinearModel {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn get(&self, param: Param) -> f64 {
        match param {
            Param::Intercept => self.a,
            Param::Slope => self.b,
        }
    }

    /// Returns a copy of this model with `param` set to `value`.
    pub fn with(self, param: Param, value: f64) -> Self {
        match param {
            Param::Intercept => Self { a: value, ..self },
            Param::Slope => Self { b: value, ..self },
        }
    }

    /// Evaluates the line at a single point.
    pub fn eval(&self, x: f64) -> f64 {
        self.a + self.b * x
    }

    /// Evaluates the line at every given point, preserving their order.
    pub fn predict(&self, x: ArrayView1<f64>) -> Array1<f64> {
        x.mapv(|x| self.eval(x))
    }
}

impl Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "y = {:.p$} + {:.p$}x", self.a, self.b),
            None => write!(f, "y = {} + {}x", self.a, self.b),
        }
    }
}

/// Predicts the `y` value of every sample in `dataset` with the line `a + b x`.
pub fn predict(dataset: &Dataset, a: f64, b: f64) -> Array1<f64> {
    LinearModel::new(a, b).predict(dataset.x())
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn predict_keeps_order_and_length() {
        let model = LinearModel::new(-2., 1.);
        let x = array![-1., 0., 3.];
        assert_eq!(model.predict(x.view()), array![-3., -2., 1.]);
    }

    #[test]
    fn with_only_touches_the_given_param() {
        let model = LinearModel::new(1., 2.);
        assert_eq!(model.with(Param::Intercept, 5.), LinearModel::new(5., 2.));
        assert_eq!(model.with(Param::Slope, 5.), LinearModel::new(1., 5.));
        assert_eq!(model.with(Param::Slope, 5.).get(Param::Slope), 5.);
    }

    #[test]
    fn display_respects_precision() {
        let model = LinearModel::new(-2., 1.5);
        assert_eq!(format!("{model:.1}"), "y = -2.0 + 1.5x");
        assert_eq!(format!("{model}"), "y = -2 + 1.5x");
    }

    #[test]
    fn params_are_each_others_other() {
        assert_eq!(Param::Intercept.other(), Param::Slope);
        assert_eq!(Param::Slope.other().symbol(), "a");
    }
}
