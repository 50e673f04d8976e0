//! Accumulator-style numerics.
//!
//! Both functions are the loop form of a tail-recursive definition: the
//! recursion carries its partial result in an accumulator, so it runs in
//! constant stack space. Arithmetic is checked; a result that does not fit
//! in `u64` is reported as [`NumericError`].
//!
//! # Example
//!
//! ```
//! use fpbasics::numeric::{MAX_FACTORIAL_INPUT, NumericError, factorial};
//!
//! assert_eq!(factorial(0), Ok(1));
//! assert!(factorial(MAX_FACTORIAL_INPUT).is_ok());
//! assert_eq!(
//!     factorial(MAX_FACTORIAL_INPUT + 1),
//!     Err(NumericError::FactorialOverflow { n: 21 })
//! );
//! ```

/// Largest `n` for which [`fib`] fits in a `u64`.
pub const MAX_FIB_INPUT: u32 = 94;

/// Largest `n` for which [`factorial`] fits in a `u64`.
pub const MAX_FACTORIAL_INPUT: u32 = 20;

/// Computes the `n`-th Fibonacci-like number, where `fib(1) = 0`,
/// `fib(2) = 1` and `fib(n) = fib(n - 1) + fib(n - 2)` for `n > 2`.
///
/// `fib(0)` is 0.
///
/// # Example
///
/// ```
/// use fpbasics::fib;
///
/// let first: Vec<u64> = (1..=10).map(|n| fib(n).unwrap()).collect();
/// assert_eq!(first, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
/// ```
pub fn fib(n: u32) -> Result<u64, NumericError> {
    if n <= 1 {
        return Ok(0);
    }

    // (fib(k - 1), fib(k)), starting at k = 2
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 2..n {
        let next = prev.checked_add(curr).ok_or_else(|| {
            tracing::debug!(n, limit = MAX_FIB_INPUT, "fibonacci overflows u64");
            NumericError::FibonacciOverflow { n }
        })?;

        // Postcondition: the sequence never decreases
        debug_assert!(next >= curr, "fibonacci accumulator decreased at n={n}");

        prev = curr;
        curr = next;
    }

    Ok(curr)
}

/// Computes `n!`. `factorial(0)` and `factorial(1)` are both 1.
pub fn factorial(n: u32) -> Result<u64, NumericError> {
    let mut acc: u64 = 1;
    for k in 2..=u64::from(n) {
        acc = acc.checked_mul(k).ok_or_else(|| {
            tracing::debug!(n, limit = MAX_FACTORIAL_INPUT, "factorial overflows u64");
            NumericError::FactorialOverflow { n }
        })?;
    }

    Ok(acc)
}

/// Errors from the numeric functions.
///
/// Inputs are unsigned, so the only way to leave the domain is to ask for a
/// result larger than `u64::MAX`.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    #[error("fibonacci({n}) overflows u64")]
    FibonacciOverflow { n: u32 },

    #[error("factorial({n}) overflows u64")]
    FactorialOverflow { n: u32 },
}
