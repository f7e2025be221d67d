//! Deterministic numerical core of the least-squares line explorer.
//!
//! Generates the fixed synthetic samples, evaluates the error metrics of a line
//! `y = a + b x` against them and sweeps one parameter at a time to produce the
//! metric vs. parameter curves.

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod model;
pub mod panels;
pub mod sweep;

pub use dataset::{Dataset, DatasetSpec, Datasets, generate, generate_datasets, linspace};
pub use error::{RegressionErr, Result};
pub use metrics::{Evaluation, EvaluationTable, MetricFn, MetricKind, MetricValue, evaluate};
pub use model::{LinearModel, Param, predict};
pub use panels::{DisplayFlags, Flag, Panel, PanelData, Scene, recompute};
pub use sweep::{SweepCurve, SweepRange, sweep, sweep_metric};
