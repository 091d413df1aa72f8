//! Fluent accumulation of predicates under a single combinator.
//!
//! A [`PredicateBuilder`] collects criteria one call at a time and composes
//! them on demand with [`build`](PredicateBuilder::build). Domain modules add
//! named criteria as inherent methods on `PredicateBuilder<TheirType>`, so a
//! query reads as a sentence:
//!
//! ```rust
//! use strainer::catalog::{sample_products, Product};
//! use strainer::builder::PredicateBuilder;
//! use strainer::predicate::filter_ref;
//!
//! let products = sample_products();
//! let furniture_or_cheap = PredicateBuilder::<Product>::new()
//!     .with_category("Furniture")
//!     .with_max_price(50.0)
//!     .use_or()
//!     .build();
//!
//! let names: Vec<&str> = filter_ref(&products, &furniture_or_cheap)
//!     .into_iter()
//!     .map(|p| p.name.as_str())
//!     .collect();
//! assert_eq!(names, vec!["Mouse", "Desk", "Chair"]);
//! ```

use std::fmt;

use crate::predicate::{always, never, BoxPredicate, Predicate};

/// How accumulated predicates are joined at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combinator {
    /// Every predicate must hold. Empty set accepts everything.
    #[default]
    And,
    /// At least one predicate must hold. Empty set accepts nothing.
    Or,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => f.write_str("AND"),
            Combinator::Or => f.write_str("OR"),
        }
    }
}

/// Accumulates predicates over `T` and composes them into one.
///
/// Predicates are kept in insertion order and never deduplicated. The
/// combinator can be switched at any time; it applies to the whole set when
/// [`build`](Self::build) runs. Building does not consume or clear the
/// builder.
///
/// # Example
///
/// ```rust
/// use strainer::builder::PredicateBuilder;
/// use strainer::predicate::*;
///
/// let builder = PredicateBuilder::new().with(is_even()).with(gt(5));
/// let p = builder.build();
/// assert_eq!(filter(&(1..=10).collect::<Vec<i32>>(), &p), vec![6, 8, 10]);
///
/// // Still inspectable and reusable afterwards.
/// assert_eq!(builder.len(), 2);
/// let q = builder.use_or().build();
/// assert!(q.check(&7));
/// ```
pub struct PredicateBuilder<T: ?Sized> {
    predicates: Vec<BoxPredicate<T>>,
    combinator: Combinator,
}

impl<T: ?Sized + 'static> PredicateBuilder<T> {
    /// Create an empty builder in AND mode.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
            combinator: Combinator::And,
        }
    }

    /// Append one predicate.
    pub fn with<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        self.predicates.push(BoxPredicate::new(predicate));
        self
    }

    /// Join predicates with AND at build time.
    pub fn use_and(mut self) -> Self {
        self.combinator = Combinator::And;
        self
    }

    /// Join predicates with OR at build time.
    pub fn use_or(mut self) -> Self {
        self.combinator = Combinator::Or;
        self
    }

    /// The combinator that [`build`](Self::build) will apply.
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Number of accumulated predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// True if no predicate has been added.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Compose the accumulated predicates.
    ///
    /// - no predicates: the identity of the combinator, so AND accepts
    ///   everything and OR rejects everything
    /// - one predicate: that predicate, whatever the combinator
    /// - several: all must hold (AND) or one must hold (OR), evaluated in
    ///   insertion order and stopping as soon as the answer is known
    pub fn build(&self) -> BoxPredicate<T> {
        tracing::debug!(
            predicates = self.predicates.len(),
            combinator = %self.combinator,
            "building composed predicate"
        );

        match (self.predicates.as_slice(), self.combinator) {
            ([], Combinator::And) => BoxPredicate::new(always()),
            ([], Combinator::Or) => BoxPredicate::new(never()),
            ([single], _) => single.clone(),
            (_, Combinator::And) => BoxPredicate::new(AllPredicates(self.predicates.clone())),
            (_, Combinator::Or) => BoxPredicate::new(AnyPredicate(self.predicates.clone())),
        }
    }
}

impl<T: ?Sized + 'static> Default for PredicateBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for PredicateBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
            combinator: self.combinator,
        }
    }
}

impl<T: ?Sized> fmt::Debug for PredicateBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateBuilder")
            .field("predicates", &self.predicates.len())
            .field("combinator", &self.combinator)
            .finish()
    }
}

struct AllPredicates<T: ?Sized>(Vec<BoxPredicate<T>>);

impl<T: ?Sized> Predicate<T> for AllPredicates<T> {
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

struct AnyPredicate<T: ?Sized>(Vec<BoxPredicate<T>>);

impl<T: ?Sized> Predicate<T> for AnyPredicate<T> {
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{and, filter, gt, is_even, lt, or, PredicateExt};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn nums() -> Vec<i32> {
        (-5..=15).collect()
    }

    #[test]
    fn test_new_builder_is_empty_and() {
        let b = PredicateBuilder::<i32>::new();
        assert!(b.is_empty());
        assert_eq!(b.combinator(), Combinator::And);
    }

    #[test]
    fn test_empty_and_accepts_everything() {
        let p = PredicateBuilder::<i32>::new().build();
        assert!(nums().iter().all(|n| p.check(n)));
    }

    #[test]
    fn test_empty_or_rejects_everything() {
        let p = PredicateBuilder::<i32>::new().use_or().build();
        assert!(nums().iter().all(|n| !p.check(n)));
    }

    #[test]
    fn test_single_predicate_ignores_mode() {
        for builder in [
            PredicateBuilder::new().with(is_even()),
            PredicateBuilder::new().with(is_even()).use_or(),
        ] {
            let p = builder.build();
            for n in nums() {
                assert_eq!(p.check(&n), is_even().check(&n));
            }
        }
    }

    #[test]
    fn test_two_predicates_match_pairwise_combinators() {
        let and_built = PredicateBuilder::new().with(is_even()).with(gt(5)).build();
        let or_built = PredicateBuilder::new()
            .with(is_even())
            .with(gt(5))
            .use_or()
            .build();
        for n in nums() {
            assert_eq!(and_built.check(&n), and(is_even(), gt(5)).check(&n));
            assert_eq!(or_built.check(&n), or(is_even(), gt(5)).check(&n));
        }
    }

    #[test]
    fn test_mode_applies_to_whole_set() {
        // switching after additions still affects earlier predicates
        let p = PredicateBuilder::new()
            .use_or()
            .with(lt(0))
            .with(gt(10))
            .use_and()
            .build();
        assert!(nums().iter().all(|n| !p.check(n)));
    }

    #[test]
    fn test_build_does_not_clear() {
        let builder = PredicateBuilder::new().with(gt(0)).with(lt(3));
        let first = builder.build();
        let second = builder.build();
        assert_eq!(builder.len(), 2);
        assert_eq!(filter(&nums(), &first), vec![1, 2]);
        assert_eq!(filter(&nums(), &second), vec![1, 2]);
    }

    #[test]
    fn test_and_stops_at_first_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let p = PredicateBuilder::new()
            .with(gt(100))
            .with(is_even())
            .with(move |_: &i32| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            })
            .build();
        assert!(!p.check(&4));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_or_stops_at_first_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let p = PredicateBuilder::new()
            .use_or()
            .with(is_even())
            .with(move |_: &i32| {
                counter.fetch_add(1, Ordering::SeqCst);
                false
            })
            .build();
        assert!(p.check(&4));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!p.check(&3));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_composed_result_composes_further() {
        let p = PredicateBuilder::new().with(gt(0)).with(lt(10)).build();
        let q = p.not();
        assert!(q.check(&10));
        assert!(!q.check(&5));
    }

    #[test]
    fn test_combinator_display() {
        assert_eq!(Combinator::And.to_string(), "AND");
        assert_eq!(Combinator::Or.to_string(), "OR");
    }
}
