use std::fmt::{self, Display};

use ndarray::ArrayView1;
use serde::Serialize;

use super::{
    fit::{adjusted_r2, r2},
    residual::{check_shapes, mae, rmse, ssr},
};
use crate::{dataset::Datasets, error::Result, model::LinearModel};

/// The amount of predictors of the model `y = a + b x`.
pub const PREDICTORS: usize = 1;

/// A metric value that may be undefined for the given input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum MetricValue {
    Defined(f64),
    Undefined,
}

impl MetricValue {
    /// Wraps a metric result, mapping a zero denominator to `Undefined`.
    ///
    /// # Returns
    /// Any other error unchanged.
    pub fn from_result(res: Result<f64>) -> Result<Self> {
        match res {
            Ok(v) => Ok(Self::Defined(v)),
            Err(e) if e.is_undefined() => Ok(Self::Undefined),
            Err(e) => Err(e),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(*v),
            Self::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Defined(value)
    }
}

impl From<MetricValue> for Option<f64> {
    fn from(value: MetricValue) -> Self {
        value.value()
    }
}

impl Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, f.precision()) {
            (Self::Defined(v), Some(p)) => write!(f, "{v:.p$}"),
            (Self::Defined(v), None) => write!(f, "{v}"),
            (Self::Undefined, _) => write!(f, "undefined"),
        }
    }
}

/// Every error metric of a prediction against one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub ssr: f64,
    pub mae: f64,
    pub rmse: f64,
    pub r2: MetricValue,
    pub adjusted_r2: MetricValue,
}

impl Evaluation {
    /// The metrics as `(name, value)` rows, in display order.
    pub fn rows(&self) -> [(&'static str, MetricValue); 5] {
        [
            ("SSR", self.ssr.into()),
            ("MAE", self.mae.into()),
            ("RMSE", self.rmse.into()),
            ("R²", self.r2),
            ("Adjusted R²", self.adjusted_r2),
        ]
    }
}

/// Evaluates a prediction against the observed values.
///
/// A constant observed series or a sample too small for the adjustment leaves the
/// corresponding ratio metrics `Undefined` while the rest stay defined.
///
/// # Returns
/// An error if the sequences are empty or their lengths differ.
pub fn evaluate(y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<Evaluation> {
    let n = check_shapes(y, y_pred)?;
    let r2 = MetricValue::from_result(r2(y, y_pred))?;
    let adjusted_r2 = match r2 {
        MetricValue::Defined(r2) => MetricValue::from_result(adjusted_r2(r2, n, PREDICTORS))?,
        MetricValue::Undefined => MetricValue::Undefined,
    };

    Ok(Evaluation {
        ssr: ssr(y, y_pred)?,
        mae: mae(y, y_pred)?,
        rmse: rmse(y, y_pred)?,
        r2,
        adjusted_r2,
    })
}

/// The evaluation of one model against both the train and the test datasets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationTable {
    pub train: Evaluation,
    pub test: Evaluation,
}

impl EvaluationTable {
    /// The metrics as `(name, train, test)` rows, in display order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, MetricValue, MetricValue)> {
        self.train
            .rows()
            .into_iter()
            .zip(self.test.rows())
            .map(|((name, train), (_, test))| (name, train, test))
    }
}

/// Evaluates `model` against both datasets.
pub fn evaluate_model(datasets: &Datasets, model: LinearModel) -> Result<EvaluationTable> {
    let Datasets { train, test } = datasets;

    Ok(EvaluationTable {
        train: evaluate(train.y(), model.predict(train.x()).view())?,
        test: evaluate(test.y(), model.predict(test.x()).view())?,
    })
}
