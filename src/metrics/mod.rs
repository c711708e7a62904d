//! Evaluation metrics for regression models (R², MSE, MAE, RMSE).

use crate::primitives::Vector;

/// Computes the coefficient of determination (R²).
///
/// R² = 1 - (`SS_res` / `SS_tot`)
///
/// where `SS_res` is the residual sum of squares and `SS_tot` is the total
/// sum of squares.
///
/// Special cases: when the residuals are all zero the score is exactly 1.0,
/// even for a zero-variance target (a perfect fit never scores NaN). When
/// the target has zero variance but the residuals are nonzero, the score
/// is 0.0.
///
/// # Examples
///
/// ```
/// use ajustar::metrics::r_squared;
/// use ajustar::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[3.0, -0.5, 2.0, 7.0]);
/// let y_pred = Vector::from_slice(&[2.5, 0.0, 2.0, 8.0]);
/// let r2 = r_squared(&y_pred, &y_true);
/// assert!(r2 > 0.9);
/// ```
///
/// # Panics
///
/// Panics if vectors have different lengths.
#[must_use]
pub fn r_squared(y_pred: &Vector<f32>, y_true: &Vector<f32>) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");

    let y_mean = y_true.mean();

    let ss_res: f32 = y_true
        .as_slice()
        .iter()
        .zip(y_pred.as_slice().iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    let ss_tot: f32 = y_true.as_slice().iter().map(|t| (t - y_mean).powi(2)).sum();

    // A perfect fit scores 1.0 regardless of target variance (avoids 0/0).
    if ss_res == 0.0 {
        return 1.0;
    }
    if ss_tot == 0.0 {
        return 0.0;
    }

    1.0 - (ss_res / ss_tot)
}

/// Computes the Mean Squared Error (MSE).
///
/// MSE = (1/n) * `Σ(y_true` - `y_pred)²`
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
#[must_use]
pub fn mse(y_pred: &Vector<f32>, y_true: &Vector<f32>) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    let n = y_true.len() as f32;

    let sum_sq_error: f32 = y_true
        .as_slice()
        .iter()
        .zip(y_pred.as_slice().iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    sum_sq_error / n
}

/// Computes the Mean Absolute Error (MAE).
///
/// MAE = (1/n) * `Σ|y_true` - `y_pred`|
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
#[must_use]
pub fn mae(y_pred: &Vector<f32>, y_true: &Vector<f32>) -> f32 {
    assert_eq!(y_pred.len(), y_true.len(), "Vectors must have same length");
    assert!(!y_true.is_empty(), "Vectors cannot be empty");

    let n = y_true.len() as f32;

    let sum_abs_error: f32 = y_true
        .as_slice()
        .iter()
        .zip(y_pred.as_slice().iter())
        .map(|(t, p)| (t - p).abs())
        .sum();

    sum_abs_error / n
}

/// Computes the Root Mean Squared Error (RMSE).
///
/// RMSE = sqrt(MSE)
///
/// # Panics
///
/// Panics if vectors have different lengths or are empty.
#[must_use]
pub fn rmse(y_pred: &Vector<f32>, y_true: &Vector<f32>) -> f32 {
    mse(y_pred, y_true).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r_squared_perfect_fit() {
        let y = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(r_squared(&y, &y), 1.0);
    }

    #[test]
    fn test_r_squared_good_fit() {
        let y_true = Vector::from_slice(&[3.0, -0.5, 2.0, 7.0]);
        let y_pred = Vector::from_slice(&[2.5, 0.0, 2.0, 8.0]);
        let r2 = r_squared(&y_pred, &y_true);
        assert!(r2 > 0.9);
        assert!(r2 < 1.0);
    }

    #[test]
    fn test_r_squared_mean_predictor_is_zero() {
        let y_true = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let y_pred = Vector::from_slice(&[2.0, 2.0, 2.0]);
        assert!(r_squared(&y_pred, &y_true).abs() < 1e-6);
    }

    #[test]
    fn test_r_squared_constant_target_perfect() {
        // Zero target variance with zero residuals: 1.0, not NaN.
        let y_true = Vector::from_slice(&[5.0, 5.0, 5.0]);
        let y_pred = Vector::from_slice(&[5.0, 5.0, 5.0]);
        assert_eq!(r_squared(&y_pred, &y_true), 1.0);
    }

    #[test]
    fn test_r_squared_constant_target_imperfect() {
        let y_true = Vector::from_slice(&[5.0, 5.0, 5.0]);
        let y_pred = Vector::from_slice(&[4.0, 5.0, 6.0]);
        assert_eq!(r_squared(&y_pred, &y_true), 0.0);
    }

    #[test]
    fn test_r_squared_can_be_negative() {
        // Worse than predicting the mean.
        let y_true = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let y_pred = Vector::from_slice(&[3.0, 2.0, 1.0]);
        assert!(r_squared(&y_pred, &y_true) < 0.0);
    }

    #[test]
    fn test_mse() {
        let y_true = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let y_pred = Vector::from_slice(&[2.0, 2.0, 4.0]);
        assert!((mse(&y_pred, &y_true) - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_mae() {
        let y_true = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let y_pred = Vector::from_slice(&[2.0, 2.0, 4.0]);
        assert!((mae(&y_pred, &y_true) - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rmse() {
        let y_true = Vector::from_slice(&[0.0, 0.0]);
        let y_pred = Vector::from_slice(&[3.0, 4.0]);
        // MSE = (9 + 16) / 2 = 12.5
        assert!((rmse(&y_pred, &y_true) - 12.5_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_r_squared_length_mismatch_panics() {
        let a = Vector::from_slice(&[1.0]);
        let b = Vector::from_slice(&[1.0, 2.0]);
        let _ = r_squared(&a, &b);
    }
}
