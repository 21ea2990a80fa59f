//! Error types for arithmetic and pricing.

use recipebook_core::RecipeBookError;
use thiserror::Error;

/// Errors from the integer arithmetic helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Divisor was zero.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// Factorial requested for a negative number.
    #[error("cannot calculate factorial of negative number {0}")]
    NegativeFactorial(i32),

    /// Result does not fit in the output type.
    #[error("{operation} overflows")]
    Overflow {
        /// Description of the overflowing operation
        operation: String,
    },
}

/// Errors from product pricing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PricingError {
    /// Price is negative or not a finite number.
    #[error("invalid price {0}: must be a non-negative finite number")]
    InvalidPrice(f64),

    /// Discount is outside the accepted range.
    #[error("invalid discount {percent}%: must be between 0 and {max}%")]
    InvalidDiscount {
        /// Requested discount
        percent: f64,
        /// Largest accepted discount
        max: f64,
    },

    /// Discount ceiling is not a percentage in `[0, 100]`.
    #[error("invalid discount ceiling: {0}")]
    InvalidCeiling(String),
}

/// Result type for arithmetic operations.
pub type CalcResult<T> = std::result::Result<T, CalcError>;

/// Result type for pricing operations.
pub type PricingResult<T> = std::result::Result<T, PricingError>;

impl From<CalcError> for RecipeBookError {
    fn from(err: CalcError) -> Self {
        RecipeBookError::Calculation(err.to_string())
    }
}

impl From<PricingError> for RecipeBookError {
    fn from(err: PricingError) -> Self {
        RecipeBookError::Pricing(err.to_string())
    }
}
