use std::{
    fmt::{self, Display},
    str::FromStr,
};

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::residual;
use crate::error::Result;

/// A metric comparing an observed series against a predicted one.
pub trait MetricFn {
    /// The short identifier of the metric.
    fn name(&self) -> &'static str;

    /// Evaluates the metric.
    ///
    /// # Arguments
    /// * `y` - The observed values.
    /// * `y_pred` - The predicted values, index aligned with `y`.
    fn compute(&self, y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64>;
}

/// Sum of squared residuals.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ssr;

/// Mean absolute error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mae;

/// Mean squared error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

/// Root mean squared error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rmse;

impl MetricFn for Ssr {
    fn name(&self) -> &'static str {
        "ssr"
    }

    fn compute(&self, y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        residual::ssr(y, y_pred)
    }
}

impl MetricFn for Mae {
    fn name(&self) -> &'static str {
        "mae"
    }

    fn compute(&self, y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        residual::mae(y, y_pred)
    }
}

impl MetricFn for Mse {
    fn name(&self) -> &'static str {
        "mse"
    }

    fn compute(&self, y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        residual::mse(y, y_pred)
    }
}

impl MetricFn for Rmse {
    fn name(&self) -> &'static str {
        "rmse"
    }

    fn compute(&self, y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        residual::rmse(y, y_pred)
    }
}

/// The metrics a parameter can be swept over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Ssr,
    Mae,
    Mse,
    Rmse,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [Self::Ssr, Self::Mae, Self::Mse, Self::Rmse];

    /// The long, human readable name of the metric.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Ssr => "Sum of Squared Residuals (SSR)",
            MetricKind::Mae => "Mean Absolute Error (MAE)",
            MetricKind::Mse => "Mean Squared Error (MSE)",
            MetricKind::Rmse => "Root Mean Squared Error (RMSE)",
        }
    }
}

impl MetricFn for MetricKind {
    fn name(&self) -> &'static str {
        match self {
            MetricKind::Ssr => Ssr.name(),
            MetricKind::Mae => Mae.name(),
            MetricKind::Mse => Mse.name(),
            MetricKind::Rmse => Rmse.name(),
        }
    }

    fn compute(&self, y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        match self {
            MetricKind::Ssr => Ssr.compute(y, y_pred),
            MetricKind::Mae => Mae.compute(y, y_pred),
            MetricKind::Mse => Mse.compute(y, y_pred),
            MetricKind::Rmse => Rmse.compute(y, y_pred),
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().to_uppercase())
    }
}

impl FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown metric: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn kind_dispatches_to_the_named_metric() {
        let y = array![1., 2., 3., 4.];
        let y_pred = array![2., 2., 1., 4.];

        for kind in MetricKind::ALL {
            let direct = match kind {
                MetricKind::Ssr => residual::ssr(y.view(), y_pred.view()),
                MetricKind::Mae => residual::mae(y.view(), y_pred.view()),
                MetricKind::Mse => residual::mse(y.view(), y_pred.view()),
                MetricKind::Rmse => residual::rmse(y.view(), y_pred.view()),
            };
            assert_eq!(kind.compute(y.view(), y_pred.view()), direct);
        }
    }

    #[test]
    fn kind_parses_its_own_name() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.name().parse::<MetricKind>(), Ok(kind));
        }
        assert_eq!(" SSR ".parse::<MetricKind>(), Ok(MetricKind::Ssr));
        assert!("r2".parse::<MetricKind>().is_err());
    }

    #[test]
    fn kind_displays_uppercase() {
        assert_eq!(MetricKind::Mae.to_string(), "MAE");
    }

    #[test]
    fn labels_end_with_the_short_name() {
        for kind in MetricKind::ALL {
            assert!(kind.label().ends_with(&format!("({kind})")), "{}", kind.label());
        }
        assert_eq!(MetricKind::Ssr.label(), "Sum of Squared Residuals (SSR)");
    }
}
