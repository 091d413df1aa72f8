//! BoxPredicate - type-erased, shareable predicate.
//!
//! Use `BoxPredicate` when you need to:
//! - Store predicates of different concrete types in one collection
//! - Return different predicates from match arms
//! - Hand out a composed predicate while keeping the parts for later reuse
//!
//! Cloning is a reference-count bump; the wrapped predicate is shared.

use std::fmt;
use std::sync::Arc;

use super::combinators::Predicate;

/// A type-erased predicate behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let tests: Vec<BoxPredicate<i32>> = vec![
///     BoxPredicate::new(gt(0)),
///     is_even().boxed(),
///     BoxPredicate::new(|n: &i32| *n < 100),
/// ];
/// assert!(tests.iter().all(|p| p.check(&42)));
/// ```
pub struct BoxPredicate<T: ?Sized> {
    inner: Arc<dyn Predicate<T>>,
}

impl<T: ?Sized> BoxPredicate<T> {
    /// Erase the type of `predicate`.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        Self {
            inner: Arc::new(predicate),
        }
    }
}

impl<T: ?Sized> Clone for BoxPredicate<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for BoxPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxPredicate")
            .field("inner", &"<predicate>")
            .finish()
    }
}

impl<T: ?Sized> Predicate<T> for BoxPredicate<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.inner.check(value)
    }
}

/// Boxing for any predicate, as a method.
pub trait BoxedPredicateExt<T: ?Sized>: Predicate<T> + Sized + 'static {
    /// Wrap this predicate in a [`BoxPredicate`].
    fn boxed(self) -> BoxPredicate<T> {
        BoxPredicate::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T> + 'static> BoxedPredicateExt<T> for P {}
