use ndarray::ArrayView1;

use crate::error::{RegressionErr, Result};

/// Checks that `y` and `y_pred` can be compared element by element.
///
/// # Returns
/// The common length, or an error if their lengths differ or both are empty.
pub(crate) fn check_shapes(y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<usize> {
    if y.len() != y_pred.len() {
        return Err(RegressionErr::ShapeMismatch {
            what: "predicted y",
            got: y_pred.len(),
            expected: y.len(),
        });
    }

    if y.is_empty() {
        return Err(RegressionErr::EmptyInput { what: "observed y" });
    }

    Ok(y.len())
}

fn residuals<'a>(
    y: ArrayView1<'a, f64>,
    y_pred: ArrayView1<'a, f64>,
) -> impl Iterator<Item = f64> + 'a {
    y.into_iter().zip(y_pred).map(|(yi, pi)| yi - pi)
}

/// Sum of squared residuals, `Σ (y - ŷ)²`.
pub fn ssr(y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
    check_shapes(y, y_pred)?;
    Ok(residuals(y, y_pred).map(|r| r.powi(2)).sum())
}

/// Mean absolute error, `Σ |y - ŷ| / n`.
pub fn mae(y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
    let n = check_shapes(y, y_pred)?;
    Ok(residuals(y, y_pred).map(f64::abs).sum::<f64>() / n as f64)
}

/// Mean squared error, `ssr / n`.
pub fn mse(y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
    Ok(ssr(y, y_pred)? / y.len() as f64)
}

/// Root mean squared error, `sqrt(mse)`.
pub fn rmse(y: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
    Ok(mse(y, y_pred)?.sqrt())
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn perfect_prediction_has_no_error() {
        let y = array![1., -2., 3.5];
        assert_eq!(ssr(y.view(), y.view()), Ok(0.));
        assert_eq!(mae(y.view(), y.view()), Ok(0.));
        assert_eq!(rmse(y.view(), y.view()), Ok(0.));
    }

    #[test]
    fn known_residuals() {
        let y = array![1., 2., 3., 4.];
        let y_pred = array![2., 2., 1., 4.];

        // residuals: -1, 0, 2, 0
        assert_eq!(ssr(y.view(), y_pred.view()), Ok(5.));
        assert_eq!(mae(y.view(), y_pred.view()), Ok(0.75));
        assert_eq!(mse(y.view(), y_pred.view()), Ok(1.25));
        assert_eq!(rmse(y.view(), y_pred.view()), Ok(1.25f64.sqrt()));
    }

    #[test]
    fn mismatched_lengths_fail_fast() {
        let y = array![1., 2., 3.];
        let y_pred = array![1., 2.];
        let expected = Err(RegressionErr::ShapeMismatch {
            what: "predicted y",
            got: 2,
            expected: 3,
        });

        assert_eq!(ssr(y.view(), y_pred.view()), expected);
        assert_eq!(mae(y.view(), y_pred.view()), expected);
        assert_eq!(rmse(y.view(), y_pred.view()), expected);
    }

    #[test]
    fn empty_input_is_rejected() {
        let empty = ndarray::Array1::<f64>::zeros(0);
        assert_eq!(
            ssr(empty.view(), empty.view()),
            Err(RegressionErr::EmptyInput { what: "observed y" })
        );
    }

    #[test]
    fn empty_observations_against_predictions_is_a_mismatch() {
        let empty = ndarray::Array1::<f64>::zeros(0);
        let y_pred = array![1., 2.];
        assert_eq!(
            mae(empty.view(), y_pred.view()),
            Err(RegressionErr::ShapeMismatch {
                what: "predicted y",
                got: 2,
                expected: 0,
            })
        );
    }
}
