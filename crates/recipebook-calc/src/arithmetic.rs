//! 32-bit integer arithmetic with two's-complement wrapping.
//!
//! `add`, `multiply` and `divide` wrap on overflow rather than panicking or
//! saturating. `factorial` works in 64 bits and reports overflow as an error,
//! since a wrapped factorial is never a useful answer.

use crate::error::{CalcError, CalcResult};

/// Largest `n` whose factorial fits in an `i64`.
pub const MAX_FACTORIAL_INPUT: i32 = 20;

/// Sum all numbers, wrapping on overflow. An empty slice sums to zero.
#[must_use]
pub fn add(numbers: &[i32]) -> i32 {
    numbers.iter().fold(0i32, |sum, &n| sum.wrapping_add(n))
}

/// Multiply two numbers, wrapping on overflow.
#[must_use]
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Divide `a` by `b`, truncating toward zero.
///
/// `i32::MIN / -1` wraps to `i32::MIN`.
///
/// # Errors
/// Returns `CalcError::DivisionByZero` if `b` is zero.
pub fn divide(a: i32, b: i32) -> CalcResult<i32> {
    if b == 0 {
        tracing::warn!(dividend = a, "division by zero");
        return Err(CalcError::DivisionByZero);
    }
    Ok(a.wrapping_div(b))
}

/// Compute `n!`.
///
/// # Errors
/// Returns `CalcError::NegativeFactorial` for negative input and
/// `CalcError::Overflow` when `n` exceeds [`MAX_FACTORIAL_INPUT`].
pub fn factorial(n: i32) -> CalcResult<i64> {
    if n < 0 {
        return Err(CalcError::NegativeFactorial(n));
    }

    (1..=i64::from(n)).try_fold(1i64, |acc, i| {
        acc.checked_mul(i).ok_or_else(|| CalcError::Overflow {
            operation: format!("factorial of {n}"),
        })
    })
}
