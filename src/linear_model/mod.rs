//! Linear models for regression.
//!
//! Includes Ordinary Least Squares (OLS) linear regression.

use crate::error::{AjustarError, Result};
use crate::metrics::r_squared;
use crate::primitives::{Matrix, Vector};
use crate::traits::Estimator;
use serde::{Deserialize, Serialize};

/// Ordinary Least Squares (OLS) linear regression.
///
/// Fits a linear model by minimizing the residual sum of squares between
/// observed targets and predicted targets. The model equation is:
///
/// ```text
/// y = X β + ε
/// ```
///
/// where `β` is the coefficient vector and `ε` is random error.
///
/// # Solver
///
/// Uses normal equations: `β = (X^T X)^-1 X^T y` via Cholesky decomposition.
///
/// Rank-deficient systems (collinear or zero-variance columns, or fewer
/// rows than parameters) make `X^T X` non-invertible. Rather than fail,
/// the solver retries with a small ridge damping term scaled to the
/// diagonal, which approximates the least-norm solution; predictions stay
/// within the damping magnitude of exact. Fitting only returns
/// [`AjustarError::SingularMatrix`] when damping cannot restore positive
/// definiteness.
///
/// # Examples
///
/// ```
/// use ajustar::prelude::*;
///
/// // Simple linear regression: y = 2x + 1
/// let x = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
///
/// let r2 = model.score(&x, &y).unwrap();
/// assert!(r2 > 0.99);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Coefficients for features (excluding intercept).
    coefficients: Option<Vector<f32>>,
    /// Intercept (bias) term.
    intercept: f32,
    /// Whether to fit an intercept.
    fit_intercept: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

/// Ridge damping factors tried, in order, when the plain normal-equations
/// solve reports a singular system. Relative to the mean diagonal of X^T X.
const DAMPING_FACTORS: [f32; 2] = [1e-8, 1e-4];

impl LinearRegression {
    /// Creates a new `LinearRegression` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: 0.0,
            fit_intercept: true,
        }
    }

    /// Sets whether to fit an intercept term.
    #[must_use]
    pub fn with_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Reconstructs a fitted model from exported parameters.
    #[must_use]
    pub fn from_parameters(coefficients: Vec<f32>, intercept: f32, fit_intercept: bool) -> Self {
        Self {
            coefficients: Some(Vector::from_vec(coefficients)),
            intercept,
            fit_intercept,
        }
    }

    /// Returns the coefficients (excluding intercept).
    ///
    /// # Panics
    ///
    /// Panics if model is not fitted.
    #[must_use]
    pub fn coefficients(&self) -> &Vector<f32> {
        self.coefficients
            .as_ref()
            .expect("Model not fitted. Call fit() first.")
    }

    /// Returns the intercept term.
    #[must_use]
    pub fn intercept(&self) -> f32 {
        self.intercept
    }

    /// Returns whether an intercept is fit.
    #[must_use]
    pub fn fits_intercept(&self) -> bool {
        self.fit_intercept
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Adds an intercept column of ones to the design matrix.
    fn add_intercept_column(x: &Matrix<f32>) -> Result<Matrix<f32>> {
        let (n_rows, n_cols) = x.shape();
        let mut data = Vec::with_capacity(n_rows * (n_cols + 1));

        for i in 0..n_rows {
            data.push(1.0);
            for j in 0..n_cols {
                data.push(x.get(i, j));
            }
        }

        Matrix::from_vec(n_rows, n_cols + 1, data)
    }

    /// Solves `(X^T X) β = X^T y`, falling back to ridge damping when the
    /// system is singular.
    fn solve_normal_equations(xtx: &Matrix<f32>, xty: &Vector<f32>) -> Result<Vector<f32>> {
        match xtx.cholesky_solve(xty) {
            Ok(beta) => Ok(beta),
            Err(AjustarError::SingularMatrix { .. }) => {
                let n = xtx.n_rows();
                let trace: f32 = (0..n).map(|i| xtx.get(i, i)).sum();
                let base = if trace > 0.0 { trace / n as f32 } else { 1.0 };

                let mut last_err = None;
                for factor in DAMPING_FACTORS {
                    let mut damped = xtx.clone();
                    for i in 0..n {
                        damped.set(i, i, xtx.get(i, i) + base * factor);
                    }
                    match damped.cholesky_solve(xty) {
                        Ok(beta) => return Ok(beta),
                        Err(e) => last_err = Some(e),
                    }
                }
                Err(last_err.unwrap_or(AjustarError::SingularMatrix { pivot: 0.0 }))
            }
            Err(e) => Err(e),
        }
    }
}

impl Estimator for LinearRegression {
    /// Fits the linear regression model using normal equations.
    ///
    /// The fitted state is replaced only on full success; a failed fit
    /// leaves any previous coefficients untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `y` length doesn't match the number of rows
    /// - the input has zero rows
    /// - the system is singular even after ridge damping
    fn fit(&mut self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples != y.len() {
            return Err(AjustarError::dimension_mismatch(
                "n_samples",
                n_samples,
                y.len(),
            ));
        }

        if n_samples == 0 {
            return Err(AjustarError::empty_input("LinearRegression::fit"));
        }

        // Design matrix (with or without the implicit ones column).
        let x_design = if self.fit_intercept {
            Self::add_intercept_column(x)?
        } else {
            x.clone()
        };

        let xt = x_design.transpose();
        let xtx = xt.matmul(&x_design)?;
        let xty = xt.matvec(y)?;

        let beta = Self::solve_normal_equations(&xtx, &xty)?;

        // Extract intercept and coefficients.
        if self.fit_intercept {
            self.intercept = beta[0];
            self.coefficients = Some(beta.slice(1, n_features + 1));
        } else {
            self.intercept = 0.0;
            self.coefficients = Some(beta);
        }

        Ok(())
    }

    /// Predicts target values for input data.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the input width
    /// doesn't match the fitted feature count.
    fn predict(&self, x: &Matrix<f32>) -> Result<Vector<f32>> {
        let coefficients = self
            .coefficients
            .as_ref()
            .ok_or_else(|| AjustarError::not_fitted("LinearRegression"))?;

        if x.n_cols() != coefficients.len() {
            return Err(AjustarError::dimension_mismatch(
                "n_features",
                coefficients.len(),
                x.n_cols(),
            ));
        }

        let result = x.matvec(coefficients)?;
        Ok(result.add_scalar(self.intercept))
    }

    /// Computes the R² score.
    ///
    /// # Errors
    ///
    /// Returns an error if prediction fails or `y` doesn't match `x`.
    fn score(&self, x: &Matrix<f32>, y: &Vector<f32>) -> Result<f32> {
        if x.n_rows() != y.len() {
            return Err(AjustarError::dimension_mismatch(
                "n_samples",
                x.n_rows(),
                y.len(),
            ));
        }
        let y_pred = self.predict(x)?;
        Ok(r_squared(&y_pred, y))
    }
}
