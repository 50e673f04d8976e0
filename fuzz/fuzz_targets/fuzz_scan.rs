#![no_main]

use libfuzzer_sys::fuzz_target;

use fpbasics::{index_of, is_sorted};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        assert_eq!(index_of(data, |_| true), None);
        assert!(is_sorted(data, |_, _| false));
        return;
    }

    // First byte is the needle, the rest is the haystack.
    let needle = data[0];
    let haystack = &data[1..];

    // index_of must agree with the standard library and stop at the match
    let mut visited = 0usize;
    let found = index_of(haystack, |b| {
        visited += 1;
        *b == needle
    });
    assert_eq!(found, haystack.iter().position(|b| *b == needle));
    match found {
        Some(i) => assert_eq!(visited, i + 1),
        None => assert_eq!(visited, haystack.len()),
    }

    // is_sorted must agree with the standard library in both directions
    assert_eq!(is_sorted(haystack, |a, b| a <= b), haystack.is_sorted());
    assert_eq!(
        is_sorted(haystack, |a, b| a >= b),
        haystack.iter().rev().is_sorted()
    );
});
