//! Core predicate trait and logical combinators
//!
//! Every test in this crate is a [`Predicate`]: a pure, total function from a
//! borrowed value to `bool`. Predicates compose pairwise with [`and`], [`or`]
//! and [`not`] (or the equivalent [`PredicateExt`] methods), and n-ary
//! composition is a left fold over those pairs.

/// A composable predicate over values of type `T`.
///
/// Closures and plain functions of shape `Fn(&T) -> bool` are predicates, so
/// ad-hoc tests need no wrapper type.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let teen = ge(13).and(le(19));
/// assert!(teen.check(&15));
/// assert!(!teen.check(&21));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Whether `value` passes.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method-chaining form of the logical combinators.
///
/// All methods return concrete types, so a chain like
/// `a.and(b).or(c).not()` compiles down to plain boolean logic.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let outside = gt(0).and(lt(100)).not();
/// assert!(outside.check(&-5));
/// assert!(!outside.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true. `other` is not evaluated
    /// when `self` is false.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true. `other` is not evaluated when
    /// `self` is true.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Inverts the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Conjunction of two predicates, built by [`and`].
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// Disjunction of two predicates, built by [`or`].
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// Negation of a predicate, built by [`not`].
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Combine two predicates with logical AND.
///
/// Evaluation is left to right and stops at the first `false`, so put the
/// cheap test first.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let big_even = and(is_even(), gt(5));
/// assert!(big_even.check(&8));
/// assert!(!big_even.check(&4));
/// ```
pub fn and<P1, P2>(first: P1, second: P2) -> And<P1, P2> {
    And(first, second)
}

/// Combine two predicates with logical OR.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let extreme = or(lt(0), gt(100));
/// assert!(extreme.check(&101));
/// assert!(!extreme.check(&42));
/// ```
pub fn or<P1, P2>(first: P1, second: P2) -> Or<P1, P2> {
    Or(first, second)
}

/// Negate a predicate.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let odd = not(is_even());
/// assert!(odd.check(&3));
/// ```
pub fn not<P>(predicate: P) -> Not<P> {
    Not(predicate)
}

/// Predicate that accepts every value. Identity element of AND.
#[derive(Clone, Copy, Default, Debug)]
pub struct Always;

impl<T: ?Sized> Predicate<T> for Always {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        true
    }
}

/// Create a predicate that is true for every input.
pub fn always() -> Always {
    Always
}

/// Predicate that rejects every value. Identity element of OR.
#[derive(Clone, Copy, Default, Debug)]
pub struct Never;

impl<T: ?Sized> Predicate<T> for Never {
    #[inline]
    fn check(&self, _value: &T) -> bool {
        false
    }
}

/// Create a predicate that is false for every input.
pub fn never() -> Never {
    Never
}

/// All predicates in a fixed-size array must hold.
///
/// Homogeneous only; mix predicate types with `.and()` or a
/// [`PredicateBuilder`](crate::builder::PredicateBuilder).
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that holds when every given predicate holds.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let p = all_of([between(0, 100), between(-10, 10)]);
/// assert!(p.check(&5));
/// assert!(!p.check(&-5));
/// assert!(!p.check(&50));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// At least one predicate in a fixed-size array must hold.
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that holds when any given predicate holds.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let special = any_of([eq(1), eq(5), eq(10)]);
/// assert!(special.check(&5));
/// assert!(!special.check(&7));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// No predicate in a fixed-size array may hold.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that holds when none of the given predicates hold.
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{between, eq, ge, gt, is_even, le, lt, positive};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(hits: &AtomicUsize, result: bool) -> impl Fn(&i32) -> bool + Send + Sync + '_ {
        move |_: &i32| {
            hits.fetch_add(1, Ordering::SeqCst);
            result
        }
    }

    #[test]
    fn test_range_by_conjunction() {
        let percent = ge(0).and(le(100));
        assert!(percent.check(&0));
        assert!(percent.check(&100));
        assert!(!percent.check(&101));
    }

    #[test]
    fn test_outliers_by_disjunction() {
        let outlier = lt(-3).or(gt(3));
        assert!(outlier.check(&-4));
        assert!(outlier.check(&4));
        assert!(!outlier.check(&3));
    }

    #[test]
    fn test_negation_of_range() {
        let outside = between(10, 20).not();
        assert!(outside.check(&9));
        assert!(!outside.check(&15));
    }

    #[test]
    fn test_free_functions_match_methods() {
        for x in -20..20 {
            assert_eq!(and(is_even(), gt(5)).check(&x), is_even().and(gt(5)).check(&x));
            assert_eq!(or(is_even(), gt(5)).check(&x), is_even().or(gt(5)).check(&x));
            assert_eq!(not(is_even()).check(&x), x % 2 != 0);
        }
    }

    #[test]
    fn test_and_skips_second_when_first_fails() {
        let hits = AtomicUsize::new(0);
        let p = and(|_: &i32| false, counting(&hits, true));
        assert!(!p.check(&1));
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        let p = and(|_: &i32| true, counting(&hits, true));
        assert!(p.check(&1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_or_skips_second_when_first_passes() {
        let hits = AtomicUsize::new(0);
        let p = or(|_: &i32| true, counting(&hits, false));
        assert!(p.check(&1));
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        let p = or(|_: &i32| false, counting(&hits, false));
        assert!(!p.check(&1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_always_and_never() {
        assert!(Predicate::<i32>::check(&always(), &0));
        assert!(Predicate::<str>::check(&always(), ""));
        assert!(!Predicate::<i32>::check(&never(), &0));
    }

    #[test]
    fn test_all_any_none_of() {
        let all = all_of([between(0, 100), between(-10, 10)]);
        assert!(all.check(&5));
        assert!(!all.check(&-5));
        assert!(!all.check(&50));

        let mixed = gt(0).and(lt(10));
        assert!(mixed.check(&5));
        assert!(!mixed.check(&10));

        let any = any_of([eq(1), eq(5), eq(10)]);
        assert!(any.check(&10));
        assert!(!any.check(&2));

        let none = none_of([eq(1), eq(5), eq(10)]);
        assert!(none.check(&7));
        assert!(!none.check(&1));
    }

    #[test]
    fn test_mixed_chain() {
        // even and not between 4..=8, or exactly 5
        let p = is_even().and(not(between(4, 8))).or(eq(5));
        let picked: Vec<i32> = (0..12).filter(|x| p.check(x)).collect();
        assert_eq!(picked, vec![0, 2, 5, 10]);
    }

    #[test]
    fn test_closures_compose_with_named_predicates() {
        let multiple_of_three = |x: &i32| x % 3 == 0;
        let p = multiple_of_three.and(positive());
        assert!(p.check(&9));
        assert!(!p.check(&-9));
        assert!(!p.check(&4));
    }
}
