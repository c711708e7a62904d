//! Preprocessing transformers for feature standardization.
//!
//! # Example
//!
//! ```
//! use ajustar::prelude::*;
//!
//! // Create data with different scales
//! let data = Matrix::from_vec(4, 2, vec![
//!     1.0, 100.0,
//!     2.0, 200.0,
//!     3.0, 300.0,
//!     4.0, 400.0,
//! ]).unwrap();
//!
//! // Standardize to zero mean and unit variance
//! let mut scaler = StandardScaler::new();
//! let scaled = scaler.fit_transform(&data).unwrap();
//!
//! // Each column now has mean ≈ 0
//! let col = scaled.column(0);
//! assert!(col.mean().abs() < 1e-5);
//! ```

use crate::error::{AjustarError, Result};
use crate::primitives::Matrix;
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Standardizes features by removing mean and scaling to unit variance.
///
/// The standard score of a sample x is: z = (x - mean) / scale
///
/// Centering and scaling can be disabled independently via
/// [`with_mean`](Self::with_mean) and [`with_std`](Self::with_std). With
/// centering off the stored mean is 0 per feature; with scaling off the
/// stored scale is 1, so `transform` is always the same pure function of
/// the fitted state.
///
/// Zero-variance policy: a constant column has variance 0, which would
/// divide by zero. The fitted scale for such a column is substituted with
/// 1.0, so transforming it just centers the values. The exported `var`
/// field keeps the true variance (0.0); only `scale` carries the
/// substitution.
///
/// # Example
///
/// ```
/// use ajustar::prelude::*;
///
/// let data = Matrix::from_vec(3, 2, vec![
///     0.0, 0.0,
///     1.0, 10.0,
///     2.0, 20.0,
/// ]).unwrap();
///
/// let mut scaler = StandardScaler::new();
/// let scaled = scaler.fit_transform(&data).unwrap();
/// assert!(scaled.get(0, 0) < 0.0); // below the column mean
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Mean of each feature (0.0 per feature when centering is disabled).
    mean: Option<Vec<f32>>,
    /// Scale of each feature: population std, with 1.0 substituted for
    /// zero-variance columns and when scaling is disabled.
    scale: Option<Vec<f32>>,
    /// Population variance of each feature, without substitution.
    var: Option<Vec<f32>>,
    /// Whether to center the data (subtract mean).
    with_mean: bool,
    /// Whether to scale the data (divide by std).
    with_std: bool,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardScaler {
    /// Creates a new `StandardScaler` with centering and scaling enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mean: None,
            scale: None,
            var: None,
            with_mean: true,
            with_std: true,
        }
    }

    /// Sets whether to center the data by subtracting the mean.
    #[must_use]
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.with_mean = with_mean;
        self
    }

    /// Sets whether to scale the data by dividing by standard deviation.
    #[must_use]
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.with_std = with_std;
        self
    }

    /// Reconstructs a fitted scaler from exported parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter vectors have differing lengths.
    pub fn from_parameters(
        mean: Vec<f32>,
        scale: Vec<f32>,
        var: Vec<f32>,
        with_mean: bool,
        with_std: bool,
    ) -> Result<Self> {
        if scale.len() != mean.len() {
            return Err(AjustarError::dimension_mismatch(
                "scale length",
                mean.len(),
                scale.len(),
            ));
        }
        if var.len() != mean.len() {
            return Err(AjustarError::dimension_mismatch(
                "var length",
                mean.len(),
                var.len(),
            ));
        }
        Ok(Self {
            mean: Some(mean),
            scale: Some(scale),
            var: Some(var),
            with_mean,
            with_std,
        })
    }

    /// Returns the mean of each feature.
    ///
    /// # Panics
    ///
    /// Panics if the scaler is not fitted.
    #[must_use]
    pub fn mean(&self) -> &[f32] {
        self.mean
            .as_deref()
            .expect("Scaler not fitted. Call fit() first.")
    }

    /// Returns the scale of each feature (std with the zero-variance
    /// substitution applied).
    ///
    /// # Panics
    ///
    /// Panics if the scaler is not fitted.
    #[must_use]
    pub fn scale(&self) -> &[f32] {
        self.scale
            .as_deref()
            .expect("Scaler not fitted. Call fit() first.")
    }

    /// Returns the population variance of each feature.
    ///
    /// # Panics
    ///
    /// Panics if the scaler is not fitted.
    #[must_use]
    pub fn var(&self) -> &[f32] {
        self.var
            .as_deref()
            .expect("Scaler not fitted. Call fit() first.")
    }

    /// Returns whether centering is enabled.
    #[must_use]
    pub fn centers(&self) -> bool {
        self.with_mean
    }

    /// Returns whether scaling is enabled.
    #[must_use]
    pub fn scales(&self) -> bool {
        self.with_std
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.mean.is_some()
    }

    /// Transforms data back to the original scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the scaler is not fitted or dimensions mismatch.
    pub fn inverse_transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        let mean = self
            .mean
            .as_deref()
            .ok_or_else(|| AjustarError::not_fitted("StandardScaler"))?;
        let scale = self
            .scale
            .as_deref()
            .ok_or_else(|| AjustarError::not_fitted("StandardScaler"))?;

        let (n_samples, n_features) = x.shape();
        if n_features != mean.len() {
            return Err(AjustarError::dimension_mismatch(
                "n_features",
                mean.len(),
                n_features,
            ));
        }

        let mut result = vec![0.0; n_samples * n_features];
        for i in 0..n_samples {
            for j in 0..n_features {
                result[i * n_features + j] = x.get(i, j) * scale[j] + mean[j];
            }
        }

        Matrix::from_vec(n_samples, n_features, result)
    }
}

impl Transformer for StandardScaler {
    /// Computes per-feature mean, variance, and scale.
    ///
    /// The fitted state is replaced wholesale, and only on success.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err(AjustarError::empty_input("StandardScaler::fit"));
        }

        // Per-feature mean (zeros when centering is disabled).
        let mut mean = vec![0.0; n_features];
        if self.with_mean {
            for (j, mean_j) in mean.iter_mut().enumerate() {
                let mut sum = 0.0;
                for i in 0..n_samples {
                    sum += x.get(i, j);
                }
                *mean_j = sum / n_samples as f32;
            }
        }

        // Population variance (divide by n, not n-1) around the true
        // column mean, even when centering is disabled.
        let mut var = vec![0.0; n_features];
        for (j, var_j) in var.iter_mut().enumerate() {
            let mut sum = 0.0;
            for i in 0..n_samples {
                sum += x.get(i, j);
            }
            let column_mean = sum / n_samples as f32;

            let mut sum_sq = 0.0;
            for i in 0..n_samples {
                let diff = x.get(i, j) - column_mean;
                sum_sq += diff * diff;
            }
            *var_j = sum_sq / n_samples as f32;
        }

        // Scale, with the zero-variance substitution.
        let scale: Vec<f32> = var
            .iter()
            .map(|&v| {
                if !self.with_std {
                    1.0
                } else {
                    let std = v.sqrt();
                    if std == 0.0 {
                        1.0
                    } else {
                        std
                    }
                }
            })
            .collect();

        self.mean = Some(mean);
        self.scale = Some(scale);
        self.var = Some(var);

        Ok(())
    }

    /// Standardizes the data using fitted mean and scale.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        let mean = self
            .mean
            .as_deref()
            .ok_or_else(|| AjustarError::not_fitted("StandardScaler"))?;
        let scale = self
            .scale
            .as_deref()
            .ok_or_else(|| AjustarError::not_fitted("StandardScaler"))?;

        let (n_samples, n_features) = x.shape();
        if n_features != mean.len() {
            return Err(AjustarError::dimension_mismatch(
                "n_features",
                mean.len(),
                n_features,
            ));
        }

        let mut result = vec![0.0; n_samples * n_features];
        for i in 0..n_samples {
            for j in 0..n_features {
                result[i * n_features + j] = (x.get(i, j) - mean[j]) / scale[j];
            }
        }

        Matrix::from_vec(n_samples, n_features, result)
    }
}
