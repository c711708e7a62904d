//! Core traits for estimators and transformers.
//!
//! These traits define the API contracts for fitting, predicting, and
//! transforming. Every post-fit operation returns a `Result` so callers
//! handle the not-fitted case explicitly instead of catching panics.

use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Primary trait for supervised learning estimators.
///
/// # Examples
///
/// ```
/// use ajustar::prelude::*;
///
/// // Create training data: y = 2x + 1
/// let x_train = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let y_train = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x_train, &y_train).unwrap();
/// let score = model.score(&x_train, &y_train).unwrap();
/// assert!(score > 0.99);
/// ```
pub trait Estimator {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (empty input, dimension mismatch,
    /// singular matrix, etc.). On error the previous fitted state, if any,
    /// is left untouched.
    fn fit(&mut self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()>;

    /// Predicts target values for input data.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the input width
    /// doesn't match the fitted feature count.
    fn predict(&self, x: &Matrix<f32>) -> Result<Vector<f32>>;

    /// Computes the coefficient of determination (R²) on the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if prediction fails or `y` doesn't match `x`.
    fn score(&self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<f32>;
}

/// Trait for data transformers (scalers, encoders).
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails. On error the previous fitted
    /// state, if any, is left untouched.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is not fitted or dimensions
    /// mismatch.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>>;

    /// Fits and transforms in one step.
    ///
    /// Numerically identical to calling `fit` then `transform` on the same
    /// matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting or transforming fails.
    fn fit_transform(&mut self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        self.fit(x)?;
        self.transform(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AjustarError;

    // Minimal transformer to exercise the fit_transform default method.
    struct ShiftTransformer {
        offset: Option<f32>,
    }

    impl Transformer for ShiftTransformer {
        fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
            if x.n_rows() == 0 {
                return Err(AjustarError::empty_input("ShiftTransformer::fit"));
            }
            self.offset = Some(x.get(0, 0));
            Ok(())
        }

        fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
            let offset = self
                .offset
                .ok_or_else(|| AjustarError::not_fitted("ShiftTransformer"))?;
            let data: Vec<f32> = x.as_slice().iter().map(|v| v - offset).collect();
            Matrix::from_vec(x.n_rows(), x.n_cols(), data)
        }
    }

    #[test]
    fn test_fit_transform_default_method() {
        let mut t = ShiftTransformer { offset: None };
        let x = Matrix::from_vec(2, 1, vec![3.0, 5.0]).unwrap();
        let out = t.fit_transform(&x).unwrap();
        assert_eq!(out.get(0, 0), 0.0);
        assert_eq!(out.get(1, 0), 2.0);
    }

    #[test]
    fn test_transform_before_fit_errors() {
        let t = ShiftTransformer { offset: None };
        let x = Matrix::from_vec(1, 1, vec![1.0]).unwrap();
        assert!(matches!(
            t.transform(&x),
            Err(AjustarError::NotFitted { .. })
        ));
    }

    #[test]
    fn test_fit_transform_propagates_fit_error() {
        let mut t = ShiftTransformer { offset: None };
        let x = Matrix::from_vec(0, 1, vec![]).unwrap();
        assert!(matches!(
            t.fit_transform(&x),
            Err(AjustarError::EmptyInput { .. })
        ));
    }
}
