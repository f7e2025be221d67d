use ndarray::ArrayView1;

use super::residual::{check_shapes, ssr};
use crate::error::{RegressionErr, Result};

/// Coefficient of determination, `1 - SS_res / SS_tot`.
///
/// # Returns
/// `DivisionUndefined` when the observed series is constant, since there is no
/// variance left to explain.
pub fn r2(y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
    let n = check_shapes(y, y_pred)?;
    let mean = y.sum() / n as f64;
    let ss_tot: f64 = y.iter().map(|yi| (yi - mean).powi(2)).sum();

    if ss_tot == 0. {
        return Err(RegressionErr::DivisionUndefined { what: "r2" });
    }

    Ok(1. - ssr(y, y_pred)? / ss_tot)
}

/// R² penalized by the amount of predictors relative to the sample size,
/// `1 - (1 - r2) (n - 1) / (n - p - 1)`.
///
/// # Arguments
/// * `r2` - The unadjusted coefficient of determination.
/// * `n` - The sample size.
/// * `p` - The amount of predictors.
///
/// # Returns
/// `DivisionUndefined` unless `n > p + 1`.
pub fn adjusted_r2(r2: f64, n: usize, p: usize) -> Result<f64> {
    if n <= p + 1 {
        return Err(RegressionErr::DivisionUndefined { what: "adjusted r2" });
    }

    Ok(1. - (1. - r2) * (n - 1) as f64 / (n - p - 1) as f64)
}
