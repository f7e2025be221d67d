mod evaluation;
mod fit;
mod metric_fn;
mod residual;

pub use evaluation::{
    Evaluation, EvaluationTable, MetricValue, PREDICTORS, evaluate, evaluate_model,
};
pub use fit::{adjusted_r2, r2};
pub use metric_fn::{Mae, MetricFn, MetricKind, Mse, Rmse, Ssr};
pub use residual::{mae, mse, rmse, ssr};
