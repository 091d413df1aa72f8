//! Specifications: predicates as an explicit expression tree.
//!
//! A [`Specification`] is either a leaf test or an AND/OR/NOT node over
//! child specifications. The tree is immutable once built and is walked on
//! every call to [`is_satisfied_by`](Specification::is_satisfied_by); nothing
//! is cached between calls.
//!
//! # Example
//!
//! ```rust
//! use strainer::process::{high_priority, owned_by, running, ProcessManager};
//!
//! let manager = ProcessManager::sample();
//! let spec = running().and(high_priority()).and(owned_by("user1"));
//!
//! let titles: Vec<&str> = manager
//!     .all()
//!     .iter()
//!     .filter(|p| spec.is_satisfied_by(p))
//!     .map(|p| p.title.as_str())
//!     .collect();
//! assert_eq!(titles, vec!["Go", "Rust"]);
//! ```

use std::fmt;

use crate::predicate::{BoxPredicate, Predicate};

/// A composable business rule over `T`.
pub enum Specification<T: ?Sized> {
    /// An atomic test.
    Leaf(BoxPredicate<T>),
    /// Both children must be satisfied; right is skipped when left fails.
    And(Box<Specification<T>>, Box<Specification<T>>),
    /// Either child must be satisfied; right is skipped when left passes.
    Or(Box<Specification<T>>, Box<Specification<T>>),
    /// The child must not be satisfied.
    Not(Box<Specification<T>>),
}

impl<T: ?Sized> Specification<T> {
    /// Wrap a predicate as a leaf specification.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        Specification::Leaf(BoxPredicate::new(predicate))
    }

    /// Evaluate the whole tree against `item`.
    pub fn is_satisfied_by(&self, item: &T) -> bool {
        match self {
            Specification::Leaf(p) => p.check(item),
            Specification::And(left, right) => {
                left.is_satisfied_by(item) && right.is_satisfied_by(item)
            }
            Specification::Or(left, right) => {
                left.is_satisfied_by(item) || right.is_satisfied_by(item)
            }
            Specification::Not(inner) => !inner.is_satisfied_by(item),
        }
    }

    /// Conjunction of `self` and `other`.
    pub fn and(self, other: Specification<T>) -> Self {
        Specification::And(Box::new(self), Box::new(other))
    }

    /// Disjunction of `self` and `other`.
    pub fn or(self, other: Specification<T>) -> Self {
        Specification::Or(Box::new(self), Box::new(other))
    }

    /// Negation. Negating a negation hands back the original tree.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        match self {
            Specification::Not(inner) => *inner,
            other => Specification::Not(Box::new(other)),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Specification::Leaf(_) => 1,
            Specification::And(left, right) | Specification::Or(left, right) => {
                1 + left.size() + right.size()
            }
            Specification::Not(inner) => 1 + inner.size(),
        }
    }
}

impl<T: ?Sized> Predicate<T> for Specification<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.is_satisfied_by(value)
    }
}

impl<T: ?Sized> Clone for Specification<T> {
    fn clone(&self) -> Self {
        match self {
            Specification::Leaf(p) => Specification::Leaf(p.clone()),
            Specification::And(l, r) => Specification::And(l.clone(), r.clone()),
            Specification::Or(l, r) => Specification::Or(l.clone(), r.clone()),
            Specification::Not(inner) => Specification::Not(inner.clone()),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specification::Leaf(_) => f.write_str("Leaf"),
            Specification::And(l, r) => f.debug_tuple("And").field(l).field(r).finish(),
            Specification::Or(l, r) => f.debug_tuple("Or").field(l).field(r).finish(),
            Specification::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{count, gt, is_even, lt};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn even() -> Specification<i32> {
        Specification::new(is_even())
    }

    #[test]
    fn test_leaf() {
        assert!(even().is_satisfied_by(&2));
        assert!(!even().is_satisfied_by(&3));
    }

    #[test]
    fn test_and_or_not() {
        let big_even = even().and(Specification::new(gt(5)));
        let small_or_odd = Specification::new(lt(3)).or(even().not());
        for n in -10..10 {
            assert_eq!(big_even.is_satisfied_by(&n), n % 2 == 0 && n > 5);
            assert_eq!(small_or_odd.is_satisfied_by(&n), n < 3 || n % 2 != 0);
        }
    }

    #[test]
    fn test_double_negation_unwraps() {
        let spec = even().and(Specification::new(gt(0)));
        let twice = spec.clone().not().not();
        assert!(matches!(twice, Specification::And(_, _)));
        for n in -10..10 {
            assert_eq!(twice.is_satisfied_by(&n), spec.is_satisfied_by(&n));
        }
    }

    #[test]
    fn test_triple_negation() {
        let thrice = even().not().not().not();
        assert!(matches!(thrice, Specification::Not(_)));
        assert!(thrice.is_satisfied_by(&3));
    }

    #[test]
    fn test_right_operand_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let probe = Specification::new(move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        let spec = even().and(probe.clone()).or(probe);
        // 4: left And passes, Or short-circuits after one probe call
        assert!(spec.is_satisfied_by(&4));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // 3: And fails without probing, Or probes once
        assert!(spec.is_satisfied_by(&3));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_no_memoization() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let spec = Specification::new(move |_: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        for _ in 0..3 {
            spec.is_satisfied_by(&1);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_usable_as_predicate() {
        let nums: Vec<i32> = (1..=10).collect();
        assert_eq!(count(&nums, &even().and(Specification::new(gt(5)))), 3);
    }

    #[test]
    fn test_size_and_debug() {
        let spec = even().and(Specification::new(gt(5))).not();
        assert_eq!(spec.size(), 4);
        assert_eq!(format!("{:?}", spec), "Not(And(Leaf, Leaf))");
    }
}
