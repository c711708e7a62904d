//! JSON-compatible parameter export for fitted models.
//!
//! The export records are the wire contract with the hosting workflow
//! node: flat structs carrying every fitted parameter, with no behavior.
//! A record is sufficient to reconstruct the fitted component exactly,
//! without the training data — reconstruction followed by
//! `transform`/`predict` reproduces the original instance's output
//! bit-for-bit on the same input.
//!
//! # Example
//!
//! ```
//! use ajustar::prelude::*;
//! use ajustar::serialization::RegressorExport;
//!
//! let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).unwrap();
//! let y = Vector::from_slice(&[3.0, 5.0, 7.0]);
//!
//! let mut model = LinearRegression::new();
//! model.fit(&x, &y).unwrap();
//!
//! let record = RegressorExport::from_model(&model, &x, &y, &["x1"]).unwrap();
//! let json = record.to_value().unwrap();
//! assert!(json["coefficients"].is_array());
//! assert_eq!(json["fit_intercept"], true);
//! ```

use crate::error::{AjustarError, Result};
use crate::linear_model::LinearRegression;
use crate::preprocessing::StandardScaler;
use crate::primitives::{Matrix, Vector};
use crate::traits::Estimator;
use serde::{Deserialize, Serialize};

/// Exported parameters of a fitted [`StandardScaler`].
///
/// Field order is the wire order expected by the hosting node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerExport {
    /// Per-feature mean (zeros when centering was disabled).
    pub mean: Vec<f32>,
    /// Per-feature scale, with the zero-variance substitution applied.
    pub scale: Vec<f32>,
    /// Per-feature population variance, without substitution.
    pub var: Vec<f32>,
    /// Feature names, one per column.
    pub feature_columns: Vec<String>,
    /// Whether centering was enabled at fit time.
    pub with_mean: bool,
    /// Whether scaling was enabled at fit time.
    pub with_std: bool,
}

impl ScalerExport {
    /// Builds an export record from a fitted scaler.
    ///
    /// # Errors
    ///
    /// Returns [`AjustarError::NotFitted`] if the scaler is unfitted and
    /// [`AjustarError::DimensionMismatch`] if the name count doesn't match
    /// the fitted feature count.
    pub fn from_scaler(scaler: &StandardScaler, feature_columns: &[&str]) -> Result<Self> {
        if !scaler.is_fitted() {
            return Err(AjustarError::not_fitted("StandardScaler"));
        }
        if feature_columns.len() != scaler.mean().len() {
            return Err(AjustarError::dimension_mismatch(
                "feature_columns",
                scaler.mean().len(),
                feature_columns.len(),
            ));
        }

        Ok(Self {
            mean: scaler.mean().to_vec(),
            scale: scaler.scale().to_vec(),
            var: scaler.var().to_vec(),
            feature_columns: feature_columns.iter().map(ToString::to_string).collect(),
            with_mean: scaler.centers(),
            with_std: scaler.scales(),
        })
    }

    /// Reconstructs a fitted scaler from this record.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter arrays have differing lengths.
    pub fn to_scaler(&self) -> Result<StandardScaler> {
        StandardScaler::from_parameters(
            self.mean.clone(),
            self.scale.clone(),
            self.var.clone(),
            self.with_mean,
            self.with_std,
        )
    }

    /// Converts the record to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Exported parameters of a fitted [`LinearRegression`], including its R²
/// on the provided evaluation data.
///
/// Field order is the wire order expected by the hosting node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressorExport {
    /// Fitted coefficients, one per feature.
    pub coefficients: Vec<f32>,
    /// Fitted intercept (0.0 when intercept fitting was disabled).
    pub intercept: f32,
    /// R² on the evaluation data passed at export time.
    pub score: f32,
    /// Feature names, one per coefficient.
    pub feature_columns: Vec<String>,
    /// Whether an intercept was fit.
    pub fit_intercept: bool,
}

impl RegressorExport {
    /// Builds an export record from a fitted model, scoring it on `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`AjustarError::NotFitted`] if the model is unfitted,
    /// [`AjustarError::DimensionMismatch`] if the name count doesn't match
    /// the coefficient count or `(x, y)` don't match the model.
    pub fn from_model(
        model: &LinearRegression,
        x: &Matrix<f32>,
        y: &Vector<f32>,
        feature_columns: &[&str],
    ) -> Result<Self> {
        if !model.is_fitted() {
            return Err(AjustarError::not_fitted("LinearRegression"));
        }
        if feature_columns.len() != model.coefficients().len() {
            return Err(AjustarError::dimension_mismatch(
                "feature_columns",
                model.coefficients().len(),
                feature_columns.len(),
            ));
        }

        let score = model.score(x, y)?;

        Ok(Self {
            coefficients: model.coefficients().as_slice().to_vec(),
            intercept: model.intercept(),
            score,
            feature_columns: feature_columns.iter().map(ToString::to_string).collect(),
            fit_intercept: model.fits_intercept(),
        })
    }

    /// Reconstructs a fitted model from this record.
    #[must_use]
    pub fn to_model(&self) -> LinearRegression {
        LinearRegression::from_parameters(
            self.coefficients.clone(),
            self.intercept,
            self.fit_intercept,
        )
    }

    /// Converts the record to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
