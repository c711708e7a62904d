//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use ajustar::prelude::*;
//! ```

pub use crate::linear_model::LinearRegression;
pub use crate::metrics::{mae, mse, r_squared, rmse};
pub use crate::preprocessing::StandardScaler;
pub use crate::primitives::{Matrix, Vector};
pub use crate::serialization::{RegressorExport, ScalerExport};
pub use crate::traits::{Estimator, Transformer};
