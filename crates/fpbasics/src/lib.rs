//! # fpbasics: small exercises in functional Rust
//!
//! Seven independent, pure functions:
//!
//! - [`numeric`]: [`fib`] and [`factorial`], written as accumulator loops
//!   that run in constant stack space and report overflow instead of wrapping
//! - [`scan`]: [`index_of`] and [`is_sorted`] over borrowed slices, both
//!   short-circuiting
//! - [`transform`]: [`partial1`], [`curry`] and [`uncurry`]
//!
//! ## Key Principles
//!
//! - **No IO**: nothing here touches disk, network, or a clock
//! - **No state**: every call is independent and deterministic
//! - **Loud failure**: results that do not fit in `u64` come back as
//!   [`NumericError`], never as a wrapped value
//!
//! ## Example
//!
//! ```
//! use fpbasics::{curry, factorial, fib, index_of, is_sorted, uncurry};
//!
//! assert_eq!(fib(10), Ok(34));
//! assert_eq!(factorial(5), Ok(120));
//!
//! assert_eq!(index_of(&[3, 1, 4, 1, 5], |x| *x == 1), Some(1));
//! assert!(is_sorted(&[1, 2, 3], |a, b| a <= b));
//!
//! let add = |a: i32, b: i32| a + b;
//! assert_eq!(curry(add)(2)(3), 5);
//! assert_eq!(uncurry(curry(add))(2, 3), 5);
//! ```

pub mod numeric;
pub mod scan;
pub mod transform;


// Kani verification harnesses for bounded model checking
#[cfg(kani)]
mod kani_proofs;

pub use numeric::{MAX_FACTORIAL_INPUT, MAX_FIB_INPUT, NumericError, factorial, fib};
pub use scan::{index_of, is_sorted};
pub use transform::{Curried, curry, partial1, uncurry};
