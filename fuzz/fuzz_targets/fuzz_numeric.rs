#![no_main]

use libfuzzer_sys::fuzz_target;

use fpbasics::{MAX_FACTORIAL_INPUT, MAX_FIB_INPUT, NumericError, factorial, fib};

fuzz_target!(|n: u32| {
    // fib: succeeds exactly up to the limit and obeys the recurrence there
    match fib(n) {
        Ok(value) => {
            assert!(n <= MAX_FIB_INPUT);
            if n >= 3 {
                let expected = fib(n - 1).expect("smaller input fits")
                    + fib(n - 2).expect("smaller input fits");
                assert_eq!(value, expected);
            }
        }
        Err(err) => {
            assert!(n > MAX_FIB_INPUT);
            assert_eq!(err, NumericError::FibonacciOverflow { n });
        }
    }

    // factorial: same contract with its own limit
    match factorial(n) {
        Ok(value) => {
            assert!(n <= MAX_FACTORIAL_INPUT);
            if n >= 1 {
                let smaller = factorial(n - 1).expect("smaller input fits");
                assert_eq!(value, u64::from(n) * smaller);
            }
        }
        Err(err) => {
            assert!(n > MAX_FACTORIAL_INPUT);
            assert_eq!(err, NumericError::FactorialOverflow { n });
        }
    }
});
