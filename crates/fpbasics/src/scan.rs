//! Short-circuiting scans over borrowed slices.

/// Returns the lowest index whose element satisfies `predicate`, or `None`
/// if no element does (including when `source` is empty).
///
/// Scanning stops at the first match; `predicate` is not called on any
/// later element.
///
/// # Example
///
/// ```
/// use fpbasics::index_of;
///
/// assert_eq!(index_of(&[3, 1, 4, 1, 5], |x| *x == 1), Some(1));
/// assert_eq!(index_of::<i32, _>(&[], |_| true), None);
/// ```
pub fn index_of<T, P>(source: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    source.iter().position(predicate)
}

/// Returns `true` if `precedes(a, b)` holds for every adjacent pair
/// `(source[i], source[i + 1])`.
///
/// `precedes(a, b)` means "`a` may come before `b`". Slices of length 0 or 1
/// are sorted without calling `precedes`. Stops at the first violating pair.
///
/// # Example
///
/// ```
/// use fpbasics::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 3], |a, b| a <= b));
/// assert!(!is_sorted(&[1, 3, 2], |a, b| a <= b));
/// assert!(is_sorted(&["c", "b", "a"], |a, b| a >= b));
/// ```
pub fn is_sorted<T, F>(source: &[T], mut precedes: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    source.windows(2).all(|pair| precedes(&pair[0], &pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_of_never_calls_predicate_on_empty_slice() {
        let mut calls = 0;
        let found = index_of::<u8, _>(&[], |_| {
            calls += 1;
            true
        });

        assert_eq!(found, None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn index_of_stops_at_first_match() {
        let mut seen = Vec::new();
        let found = index_of(&[3, 1, 4, 1, 5], |x| {
            seen.push(*x);
            *x == 1
        });

        assert_eq!(found, Some(1));
        assert_eq!(seen, vec![3, 1], "scan must stop at the first match");
    }

    #[test]
    fn index_of_without_match_visits_every_element() {
        let mut calls = 0;
        let found = index_of(&[2, 4, 6], |x| {
            calls += 1;
            x % 2 == 1
        });

        assert_eq!(found, None);
        assert_eq!(calls, 3);
    }

    #[test]
    fn is_sorted_stops_at_first_violation() {
        let mut pairs = Vec::new();
        let sorted = is_sorted(&[1, 3, 2, 0, 5], |a, b| {
            pairs.push((*a, *b));
            a <= b
        });

        assert!(!sorted);
        assert_eq!(pairs, vec![(1, 3), (3, 2)]);
    }

    #[test]
    fn is_sorted_never_calls_compare_on_short_slices() {
        let mut calls = 0;
        let mut compare = |_: &i32, _: &i32| {
            calls += 1;
            false
        };

        assert!(is_sorted::<i32, _>(&[], &mut compare));
        assert!(is_sorted(&[42], &mut compare));
        assert_eq!(calls, 0);
    }

    #[test]
    fn is_sorted_uses_relation_argument_order() {
        // a strict "less than" rejects equal neighbours
        assert!(!is_sorted(&[1, 1], |a, b| a < b));
        assert!(is_sorted(&[1, 1], |a, b| a <= b));
    }
}
