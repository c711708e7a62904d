//! Error types for Ajustar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Ajustar operations.
///
/// Covers the failure modes of fitting, transforming, predicting, and
/// exporting: empty inputs, dimension mismatches, unfitted models, and
/// singular systems.
///
/// # Examples
///
/// ```
/// use ajustar::error::AjustarError;
///
/// let err = AjustarError::DimensionMismatch {
///     expected: "3 features".to_string(),
///     actual: "2 features".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum AjustarError {
    /// Input had zero rows where at least one is required.
    EmptyInput {
        /// What was being fit when the empty input was seen
        context: String,
    },

    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Transform/predict was called before fit.
    NotFitted {
        /// Name of the unfitted component
        what: String,
    },

    /// Matrix is singular (not positive definite).
    SingularMatrix {
        /// Offending Cholesky pivot value (non-positive)
        pivot: f64,
    },

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AjustarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AjustarError::EmptyInput { context } => {
                write!(f, "Empty input: {context} requires at least one row")
            }
            AjustarError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            AjustarError::NotFitted { what } => {
                write!(f, "{what} not fitted. Call fit() first.")
            }
            AjustarError::SingularMatrix { pivot } => {
                write!(
                    f,
                    "Singular matrix: non-positive Cholesky pivot {pivot}, cannot solve"
                )
            }
            AjustarError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            AjustarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AjustarError {}

impl From<&str> for AjustarError {
    fn from(msg: &str) -> Self {
        AjustarError::Other(msg.to_string())
    }
}

impl From<String> for AjustarError {
    fn from(msg: String) -> Self {
        AjustarError::Other(msg)
    }
}

impl From<serde_json::Error> for AjustarError {
    fn from(err: serde_json::Error) -> Self {
        AjustarError::Serialization(err.to_string())
    }
}

impl AjustarError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput {
            context: context.to_string(),
        }
    }

    /// Create a not-fitted error
    #[must_use]
    pub fn not_fitted(what: &str) -> Self {
        Self::NotFitted {
            what: what.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AjustarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        let err = AjustarError::empty_input("StandardScaler::fit");
        let msg = err.to_string();
        assert!(msg.contains("Empty input"));
        assert!(msg.contains("StandardScaler::fit"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = AjustarError::DimensionMismatch {
            expected: "100x10".to_string(),
            actual: "100x5".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("100x10"));
        assert!(err.to_string().contains("100x5"));
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = AjustarError::dimension_mismatch("n_features", 3, 2);
        let msg = err.to_string();
        assert!(msg.contains("n_features=3"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn test_not_fitted_display() {
        let err = AjustarError::not_fitted("LinearRegression");
        let msg = err.to_string();
        assert!(msg.contains("LinearRegression"));
        assert!(msg.contains("not fitted"));
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = AjustarError::SingularMatrix { pivot: -1e-3 };
        let msg = err.to_string();
        assert!(msg.contains("Singular matrix"));
        assert!(msg.contains("-0.001") || msg.contains("-1e-3"));
    }

    #[test]
    fn test_serialization_display() {
        let err = AjustarError::Serialization("invalid JSON".to_string());
        assert!(err.to_string().contains("Serialization"));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_from_str() {
        let err: AjustarError = "test error".into();
        assert!(matches!(err, AjustarError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: AjustarError = "test error".to_string().into();
        assert!(matches!(err, AjustarError::Other(_)));
    }

    #[test]
    fn test_error_debug_impl() {
        let err = AjustarError::Other("test".to_string());
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("Other"));
    }
}
