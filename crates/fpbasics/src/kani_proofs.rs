//! Kani verification harnesses for fpbasics
//!
//! Bounded model checking proofs for the numeric recurrences and the slice
//! scans.
//!
//! # Running Proofs
//!
//! ```bash
//! # Verify all proofs
//! cargo kani --package fpbasics
//!
//! # Verify specific proof
//! cargo kani --harness verify_fib_recurrence
//! ```

#[cfg(kani)]
mod verification {
    use crate::numeric::{MAX_FACTORIAL_INPUT, MAX_FIB_INPUT, NumericError, factorial, fib};
    use crate::scan::{index_of, is_sorted};
    use crate::transform::{curry, partial1, uncurry};

    // -----------------------------------------------------------------------------
    // Numeric Proofs
    // -----------------------------------------------------------------------------

    /// **Proof 1: fib satisfies its recurrence**
    ///
    /// **Property:** fib(n) == fib(n - 1) + fib(n - 2) for 3 <= n <= 24
    #[kani::proof]
    #[kani::unwind(25)]
    fn verify_fib_recurrence() {
        let n: u32 = kani::any();
        kani::assume((3..=24).contains(&n));

        let lhs = fib(n).unwrap();
        let rhs = fib(n - 1).unwrap() + fib(n - 2).unwrap();
        assert_eq!(lhs, rhs);
    }

    /// **Proof 2: fib overflow boundary**
    ///
    /// **Property:** the largest supported input succeeds, the next one fails
    #[kani::proof]
    #[kani::unwind(96)]
    fn verify_fib_overflow_boundary() {
        assert!(fib(MAX_FIB_INPUT).is_ok());
        assert_eq!(
            fib(MAX_FIB_INPUT + 1),
            Err(NumericError::FibonacciOverflow {
                n: MAX_FIB_INPUT + 1
            })
        );
    }

    /// **Proof 3: factorial satisfies its recurrence**
    ///
    /// **Property:** factorial(n) == n * factorial(n - 1) for 1 <= n <= 20
    #[kani::proof]
    #[kani::unwind(22)]
    fn verify_factorial_recurrence() {
        let n: u32 = kani::any();
        kani::assume((1..=MAX_FACTORIAL_INPUT).contains(&n));

        let lhs = factorial(n).unwrap();
        let rhs = u64::from(n) * factorial(n - 1).unwrap();
        assert_eq!(lhs, rhs);
    }

    /// **Proof 4: factorial rejects every input past the limit**
    ///
    /// **Property:** MAX_FACTORIAL_INPUT < n <= 64 always returns FactorialOverflow
    #[kani::proof]
    #[kani::unwind(65)]
    fn verify_factorial_overflow() {
        let n: u32 = kani::any();
        kani::assume(n > MAX_FACTORIAL_INPUT && n <= 64);

        assert_eq!(factorial(n), Err(NumericError::FactorialOverflow { n }));
    }

    // -----------------------------------------------------------------------------
    // Scan Proofs
    // -----------------------------------------------------------------------------

    /// **Proof 5: index_of returns the lowest matching index**
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_index_of_lowest_match() {
        let source: [u8; 4] = kani::any();
        let needle: u8 = kani::any();

        match index_of(&source, |x| *x == needle) {
            Some(i) => {
                assert!(i < source.len());
                assert_eq!(source[i], needle);
                for earlier in &source[..i] {
                    assert_ne!(*earlier, needle);
                }
            }
            None => {
                for item in &source {
                    assert_ne!(*item, needle);
                }
            }
        }
    }

    /// **Proof 6: is_sorted is equivalent to the pairwise check**
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_is_sorted_pairwise() {
        let source: [i16; 4] = kani::any();
        let len: usize = kani::any();
        kani::assume(len <= source.len());
        let slice = &source[..len];

        let mut expected = true;
        for i in 1..len {
            if slice[i - 1] > slice[i] {
                expected = false;
            }
        }

        assert_eq!(is_sorted(slice, |a, b| a <= b), expected);
    }

    // -----------------------------------------------------------------------------
    // Transform Proofs
    // -----------------------------------------------------------------------------

    /// **Proof 7: partial application, curry and uncurry agree with the direct call**
    #[kani::proof]
    fn verify_transform_laws() {
        let a: i32 = kani::any();
        let b: i32 = kani::any();
        let f = |x: i32, y: i32| x.wrapping_mul(3).wrapping_sub(y);

        assert_eq!(partial1(a, f)(b), f(a, b));
        assert_eq!(curry(f)(a)(b), f(a, b));
        assert_eq!(uncurry(curry(f))(a, b), f(a, b));
    }
}
