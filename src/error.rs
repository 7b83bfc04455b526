//! Error types for Cobweb.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Cobweb operations.
pub type Result<T> = std::result::Result<T, CobwebError>;

/// Errors that can occur in Cobweb.
#[derive(Debug, Error)]
pub enum CobwebError {
    /// An orbit iterate left the configured bound range.
    #[error("Value out of bounds: {value} not within [{lower}, {upper}].")]
    OutOfBounds {
        /// The offending iterate.
        value: f64,
        /// Lower end of the bound pair.
        lower: f64,
        /// Upper end of the bound pair.
        upper: f64,
    },

    /// Domain extents are empty, inverted or not finite.
    #[error("Invalid domain: {reason}")]
    InvalidDomain {
        /// What is wrong with the extents.
        reason: String,
    },

    /// A configuration value is unusable.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Which setting was rejected.
        reason: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl CobwebError {
    /// Create an OutOfBounds error.
    pub fn out_of_bounds(value: f64, (lower, upper): (f64, f64)) -> Self {
        Self::OutOfBounds {
            value,
            lower,
            upper,
        }
    }

    /// Create an InvalidDomain error.
    pub fn invalid_domain(reason: impl Into<String>) -> Self {
        Self::InvalidDomain {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Bound pair carried by an OutOfBounds error.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            Self::OutOfBounds { lower, upper, .. } => Some((*lower, *upper)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_value_and_range() {
        let err = CobwebError::out_of_bounds(1.2, (0.0, 1.0));
        assert_eq!(
            err.to_string(),
            "Value out of bounds: 1.2 not within [0, 1]."
        );
        assert_eq!(err.bounds(), Some((0.0, 1.0)));
    }

    #[test]
    fn other_variants_carry_no_bounds() {
        let err = CobwebError::invalid_domain("x_min must be below x_max");
        assert!(err.bounds().is_none());
        assert!(err.to_string().contains("x_min must be below x_max"));
    }
}
