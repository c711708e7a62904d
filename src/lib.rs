//! Ajustar: linear model fitting and parameter export in pure Rust.
//!
//! Ajustar provides the small numeric pipeline behind a
//! workflow-automation ML node: fit an OLS linear regressor, standardize
//! features, compose the two, and export every fitted parameter as a flat
//! JSON-compatible record that downstream nodes can reload and reapply
//! without the training data.
//!
//! # Quick Start
//!
//! ```
//! use ajustar::prelude::*;
//!
//! // Create training data (y = 2*x + 1)
//! let x = Matrix::from_vec(4, 1, vec![
//!     1.0,
//!     2.0,
//!     3.0,
//!     4.0,
//! ]).unwrap();
//! let y = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
//!
//! // Train linear regression
//! let mut model = LinearRegression::new();
//! model.fit(&x, &y).unwrap();
//!
//! // Make predictions
//! let predictions = model.predict(&x).unwrap();
//! let r2 = model.score(&x, &y).unwrap();
//! assert!(r2 > 0.99);
//! # assert_eq!(predictions.len(), 4);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`linear_model`]: OLS linear regression
//! - [`preprocessing`]: Feature standardization
//! - [`metrics`]: Regression metrics (R², MSE, MAE, RMSE)
//! - [`serialization`]: JSON-compatible parameter export records

pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod serialization;
pub mod traits;

pub use error::{AjustarError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::{Estimator, Transformer};
