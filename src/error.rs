//! Error types for kernel construction

use std::fmt;

/// Main error type for all kernel operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A caller-supplied argument violates a kernel constraint
    ///
    /// Raised before any computation takes place, so the caller can always
    /// recover by choosing a valid value.
    InvalidArgument {
        /// Name of the invalid argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// The violated constraint
        reason: String,
    },

    /// Numerical computation could not produce a value
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for KernelError {}

/// Convenience type alias for kernel results
pub type Result<T> = std::result::Result<T, KernelError>;

/// Create an invalid argument error, logging the rejected parameter
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KernelError {
    let value = value.to_string();
    let reason = reason.to_string();
    tracing::warn!(parameter, value = %value, reason = %reason, "rejected kernel argument");

    KernelError::InvalidArgument {
        parameter,
        value,
        reason,
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> KernelError {
    KernelError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
