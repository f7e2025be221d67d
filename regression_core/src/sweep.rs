use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::{
    dataset::{Dataset, linspace},
    error::{RegressionErr, Result},
    metrics::{MetricFn, MetricKind},
    model::{LinearModel, Param},
};

/// Evenly spaced candidate values for a swept parameter, the default source of
/// sweep candidates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            start: -10.,
            end: 10.,
            samples: 100,
        }
    }
}

impl SweepRange {
    /// Creates a new `SweepRange`.
    ///
    /// # Arguments
    /// * `start` - The first candidate value.
    /// * `end` - The last candidate value.
    /// * `samples` - The amount of candidates, both ends included.
    ///
    /// # Returns
    /// An error if the range is empty, not finite or not increasing.
    pub fn new(start: f64, end: f64, samples: usize) -> Result<Self> {
        let range = Self {
            start,
            end,
            samples,
        };

        range.validate()?;
        Ok(range)
    }

    /// Checks that the candidates this range expands to are strictly increasing.
    pub fn validate(&self) -> Result<()> {
        let &Self {
            start,
            end,
            samples,
        } = self;

        if samples == 0 {
            return Err(RegressionErr::EmptyInput {
                what: "sweep range",
            });
        }

        let increasing = start < end || (samples == 1 && start <= end);
        if !start.is_finite() || !end.is_finite() || !increasing {
            return Err(RegressionErr::InvalidRange { start, end });
        }

        Ok(())
    }

    /// Expands the range into its candidate values.
    pub fn values(&self) -> Result<Array1<f64>> {
        self.validate()?;
        Ok(linspace(self.start, self.end, self.samples))
    }
}

/// A metric evaluated over a range of one parameter while the other one is held fixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepCurve {
    axis: Param,
    metric: &'static str,
    points: Vec<(f64, f64)>,
}

impl SweepCurve {
    pub fn axis(&self) -> Param {
        self.axis
    }

    pub fn metric(&self) -> &'static str {
        self.metric
    }

    /// The `(parameter, metric)` pairs, ordered by increasing parameter value.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The metric value at the candidate exactly equal to `param`, if any.
    pub fn value_at(&self, param: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|&&(p, _)| p == param)
            .map(|&(_, m)| m)
    }

    /// The point with the smallest metric value.
    pub fn min_point(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .min_by(|(_, l), (_, r)| l.total_cmp(r))
    }

    /// The smallest and largest metric values of the curve.
    pub fn metric_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, &(_, m)| match acc {
            None => Some((m, m)),
            Some((lo, hi)) => Some((lo.min(m), hi.max(m))),
        })
    }
}

/// Checks that `candidates` is non empty, finite and strictly increasing.
pub fn check_candidates(candidates: ArrayView1<f64>) -> Result<()> {
    if candidates.is_empty() {
        return Err(RegressionErr::EmptyInput {
            what: "sweep candidates",
        });
    }

    if let Some(&v) = candidates.iter().find(|v| !v.is_finite()) {
        return Err(RegressionErr::InvalidRange { start: v, end: v });
    }

    let unordered = candidates
        .iter()
        .zip(candidates.iter().skip(1))
        .find(|(l, r)| l >= r);

    match unordered {
        Some((&start, &end)) => Err(RegressionErr::InvalidRange { start, end }),
        None => Ok(()),
    }
}

/// Evaluates `metric` for the predictions of `model` over `dataset`.
///
/// This is the single point evaluation every sweep candidate goes through, so a
/// highlighted point always agrees with the curve it sits on.
pub fn point<M: MetricFn + ?Sized>(
    metric: &M,
    dataset: &Dataset,
    model: LinearModel,
) -> Result<f64> {
    let y_pred = model.predict(dataset.x());
    metric.compute(dataset.y(), y_pred.view())
}

/// Sweeps `axis` over `candidates`, holding the other parameter at its value in `model`.
///
/// # Arguments
/// * `metric` - The metric to evaluate for every candidate.
/// * `dataset` - The observed samples.
/// * `model` - The current model, the swept parameter's value in it is ignored.
/// * `axis` - The parameter to sweep.
/// * `candidates` - The strictly increasing values of the swept parameter, for
///   example [`SweepRange::values`].
///
/// # Returns
/// One point per candidate in the given order, or an error if the candidates are
/// invalid or a candidate could not be evaluated.
pub fn sweep<M: MetricFn + ?Sized>(
    metric: &M,
    dataset: &Dataset,
    model: LinearModel,
    axis: Param,
    candidates: ArrayView1<f64>,
) -> Result<SweepCurve> {
    check_candidates(candidates)?;

    log::trace!(
        metric = metric.name(),
        axis = axis.symbol(),
        fixed = model.get(axis.other()),
        samples = candidates.len();
        "sweeping parameter"
    );

    let points = candidates
        .iter()
        .map(|&v| point(metric, dataset, model.with(axis, v)).map(|m| (v, m)))
        .collect::<Result<Vec<_>>>()?;

    Ok(SweepCurve {
        axis,
        metric: metric.name(),
        points,
    })
}

/// Sweeps `axis` over `candidates` evaluating the metric identified by `kind`.
pub fn sweep_metric(
    kind: MetricKind,
    axis: Param,
    dataset: &Dataset,
    model: LinearModel,
    candidates: ArrayView1<f64>,
) -> Result<SweepCurve> {
    sweep(&kind, dataset, model, axis, candidates)
}
