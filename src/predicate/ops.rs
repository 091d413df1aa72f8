//! Bulk operations that apply a predicate across a slice.
//!
//! None of these mutate their input. Each item is tested independently, in
//! slice order.

use super::combinators::Predicate;

/// Keep the items that satisfy `predicate`, preserving their relative order.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let nums: Vec<i32> = (1..=10).collect();
/// assert_eq!(filter(&nums, &and(is_even(), gt(5))), vec![6, 8, 10]);
/// ```
pub fn filter<T, P>(items: &[T], predicate: &P) -> Vec<T>
where
    T: Clone,
    P: Predicate<T> + ?Sized,
{
    items
        .iter()
        .filter(|item| predicate.check(item))
        .cloned()
        .collect()
}

/// Like [`filter`], but borrows the matching items instead of cloning them.
pub fn filter_ref<'a, T, P>(items: &'a [T], predicate: &P) -> Vec<&'a T>
where
    P: Predicate<T> + ?Sized,
{
    items.iter().filter(|item| predicate.check(item)).collect()
}

/// First item that satisfies `predicate`, or `None` when nothing matches.
pub fn find<'a, T, P>(items: &'a [T], predicate: &P) -> Option<&'a T>
where
    P: Predicate<T> + ?Sized,
{
    items.iter().find(|item| predicate.check(item))
}

/// Number of items that satisfy `predicate`.
pub fn count<T, P>(items: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    items.iter().filter(|item| predicate.check(item)).count()
}

/// True if at least one item satisfies `predicate`. Stops at the first match.
pub fn any<T, P>(items: &[T], predicate: &P) -> bool
where
    P: Predicate<T> + ?Sized,
{
    items.iter().any(|item| predicate.check(item))
}

/// True if every item satisfies `predicate`. Stops at the first failure and
/// is vacuously true for an empty slice.
pub fn all<T, P>(items: &[T], predicate: &P) -> bool
where
    P: Predicate<T> + ?Sized,
{
    items.iter().all(|item| predicate.check(item))
}

/// True if no item satisfies `predicate`; always `!any(items, predicate)`.
pub fn none<T, P>(items: &[T], predicate: &P) -> bool
where
    P: Predicate<T> + ?Sized,
{
    !any(items, predicate)
}

/// The bulk operations as slice methods.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let words = ["apple", "banana", "blueberry"];
/// assert_eq!(words.count_where(&|w: &&str| w.starts_with('b')), 2);
/// assert_eq!(words.find_where(&|w: &&str| w.len() > 6), Some(&"blueberry"));
/// ```
pub trait PredicateSliceExt<T> {
    /// See [`filter`].
    fn filter_by<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> Vec<T>
    where
        T: Clone;

    /// See [`filter_ref`].
    fn filter_ref_by<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> Vec<&T>;

    /// See [`find`].
    fn find_where<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> Option<&T>;

    /// See [`count`].
    fn count_where<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> usize;

    /// See [`any`].
    fn any_match<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> bool;

    /// See [`all`].
    fn all_match<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> bool;

    /// See [`none`].
    fn none_match<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> bool;
}

impl<T> PredicateSliceExt<T> for [T] {
    fn filter_by<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> Vec<T>
    where
        T: Clone,
    {
        filter(self, predicate)
    }

    fn filter_ref_by<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> Vec<&T> {
        filter_ref(self, predicate)
    }

    fn find_where<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> Option<&T> {
        find(self, predicate)
    }

    fn count_where<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> usize {
        count(self, predicate)
    }

    fn any_match<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> bool {
        any(self, predicate)
    }

    fn all_match<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> bool {
        all(self, predicate)
    }

    fn none_match<P: Predicate<T> + ?Sized>(&self, predicate: &P) -> bool {
        none(self, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{always, and, between, gt, is_even, never, PredicateExt};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn nums() -> Vec<i32> {
        (1..=10).collect()
    }

    #[test]
    fn test_filter_preserves_order() {
        assert_eq!(filter(&nums(), &between(3, 7)), vec![3, 4, 5, 6, 7]);
        assert_eq!(filter(&nums(), &and(is_even(), gt(5))), vec![6, 8, 10]);
    }

    #[test]
    fn test_filter_leaves_input_untouched() {
        let input = nums();
        let _ = filter(&input, &is_even());
        assert_eq!(input, nums());
    }

    #[test]
    fn test_filter_ref_borrows() {
        let input = nums();
        let evens = filter_ref(&input, &is_even());
        assert_eq!(evens, vec![&2, &4, &6, &8, &10]);
        assert!(std::ptr::eq(evens[0], &input[1]));
    }

    #[test]
    fn test_find() {
        assert_eq!(find(&nums(), &gt(4)), Some(&5));
        assert_eq!(find(&nums(), &gt(40)), None);
    }

    #[test]
    fn test_count_matches_filter_len() {
        let p = is_even().or(gt(8));
        assert_eq!(count(&nums(), &p), filter(&nums(), &p).len());
        assert_eq!(count(&nums(), &p), 6);
    }

    #[test]
    fn test_empty_slice_quantifiers() {
        let empty: Vec<i32> = Vec::new();
        assert!(all(&empty, &never()));
        assert!(!any(&empty, &always()));
        assert!(none(&empty, &always()));
        assert_eq!(count(&empty, &always()), 0);
        assert!(filter(&empty, &always()).is_empty());
    }

    #[test]
    fn test_any_stops_at_first_match() {
        let calls = AtomicUsize::new(0);
        let p = |n: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            *n == 3
        };
        assert!(any(&nums(), &p));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_all_stops_at_first_failure() {
        let calls = AtomicUsize::new(0);
        let p = |n: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            *n < 2
        };
        assert!(!all(&nums(), &p));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dyn_predicate() {
        let p: &dyn crate::predicate::Predicate<i32> = &is_even();
        assert_eq!(count(&nums(), p), 5);
    }

    #[test]
    fn test_slice_methods() {
        let input = nums();
        assert_eq!(input.filter_by(&gt(8)), vec![9, 10]);
        assert_eq!(input.filter_ref_by(&gt(9)), vec![&10]);
        assert_eq!(input.find_where(&is_even()), Some(&2));
        assert_eq!(input.count_where(&is_even()), 5);
        assert!(input.any_match(&gt(9)));
        assert!(input.all_match(&gt(0)));
        assert!(input.none_match(&gt(10)));
    }
}
