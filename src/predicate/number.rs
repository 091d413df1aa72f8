//! Number predicates
//!
//! Comparison predicates work for any `PartialOrd` type, floats included.
//! Parity predicates work for the integer types that widen from `u8`.

use super::combinators::Predicate;
use std::ops::Rem;

/// Matches values equal to the wrapped one.
#[derive(Clone, Copy, Debug)]
pub struct Eq<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Eq<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Values equal to `value`.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// assert!(eq(5).check(&5));
/// assert!(!eq(5).check(&4));
/// ```
pub fn eq<T: PartialEq + Send + Sync>(value: T) -> Eq<T> {
    Eq(value)
}

/// Predicate for strictly greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Create a predicate that checks if value is greater than `threshold`.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// assert!(gt(5).check(&6));
/// assert!(!gt(5).check(&5));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(threshold: T) -> Gt<T> {
    Gt(threshold)
}

/// Matches values at or above the threshold.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that checks if value is at least `threshold`.
pub fn ge<T: PartialOrd + Send + Sync>(threshold: T) -> Ge<T> {
    Ge(threshold)
}

/// Predicate for strictly less than.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// Create a predicate that checks if value is less than `threshold`.
pub fn lt<T: PartialOrd + Send + Sync>(threshold: T) -> Lt<T> {
    Lt(threshold)
}

/// Matches values at or below the threshold.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that checks if value is at most `threshold`.
pub fn le<T: PartialOrd + Send + Sync>(threshold: T) -> Le<T> {
    Le(threshold)
}

/// Predicate for value in an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks `min <= value <= max`.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let p = between(3, 7);
/// assert!(p.check(&3));
/// assert!(p.check(&7));
/// assert!(!p.check(&8));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Create a predicate that checks if value is greater than zero.
pub fn positive<T>() -> Gt<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    Gt(T::default())
}

/// Predicate for even integers.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEven;

impl<T> Predicate<T> for IsEven
where
    T: Copy + Rem<Output = T> + PartialEq + From<u8>,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value % T::from(2) == T::from(0)
    }
}

/// Create a predicate that checks if an integer is even.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// assert!(is_even().check(&4));
/// assert!(!is_even().check(&-3));
/// ```
pub fn is_even() -> IsEven {
    IsEven
}

/// Predicate for odd integers.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsOdd;

impl<T> Predicate<T> for IsOdd
where
    T: Copy + Rem<Output = T> + PartialEq + From<u8>,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value % T::from(2) != T::from(0)
    }
}

/// Create a predicate that checks if an integer is odd.
pub fn is_odd() -> IsOdd {
    IsOdd
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_comparisons() {
        assert!(gt(5).check(&6));
        assert!(!gt(5).check(&5));
        assert!(ge(5).check(&5));
        assert!(lt(5).check(&4));
        assert!(!lt(5).check(&5));
        assert!(le(5).check(&5));
        assert!(!le(5).check(&6));
    }

    #[test]
    fn test_between_is_inclusive() {
        let p = between(3, 7);
        let hits: Vec<i32> = (1..=10).filter(|n| p.check(n)).collect();
        assert_eq!(hits, vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_parity() {
        assert!(is_even().check(&0_i32));
        assert!(is_even().check(&-4_i64));
        assert!(is_odd().check(&7_u32));
        assert!(!is_odd().check(&8_u64));
        assert!(is_odd().check(&-3_i32));
    }

    #[test]
    fn test_even_and_greater_than_five() {
        let p = is_even().and(gt(5));
        let hits: Vec<i32> = (1..=10).filter(|n| p.check(n)).collect();
        assert_eq!(hits, vec![6, 8, 10]);
    }

    #[test]
    fn test_with_floats() {
        let p = between(0.0_f64, 1.0_f64);
        assert!(p.check(&0.5));
        assert!(!p.check(&1.1));
        assert!(positive::<f64>().check(&0.1));
    }
}
