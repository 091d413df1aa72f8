//! Composable predicates and bulk filtering
//!
//! A [`Predicate`] is a pure test over a borrowed value. Small predicates are
//! combined with [`and`], [`or`] and [`not`] into larger ones, then applied to
//! a slice with [`filter`], [`find`], [`count`], [`any`], [`all`] or [`none`].
//!
//! # Example
//!
//! ```rust
//! use strainer::predicate::*;
//!
//! let nums: Vec<i32> = (1..=10).collect();
//!
//! let big_even = and(is_even(), gt(5));
//! assert_eq!(filter(&nums, &big_even), vec![6, 8, 10]);
//! assert_eq!(count(&nums, &big_even), 3);
//! assert_eq!(find(&nums, &gt(7)), Some(&8));
//! assert!(none(&nums, &gt(10)));
//! ```
//!
//! Closures are predicates too:
//!
//! ```rust
//! use strainer::predicate::*;
//!
//! let words = vec!["apple", "banana", "cherry"];
//! let has_double = |w: &&str| w.as_bytes().windows(2).any(|p| p[0] == p[1]);
//! assert_eq!(filter(&words, &has_double), vec!["apple", "cherry"]);
//! ```

mod boxed;
mod combinators;
mod number;
mod ops;
mod string;
mod validation;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinators
pub use combinators::{
    all_of, always, and, any_of, never, none_of, not, or, AllOf, Always, And, AnyOf, Never,
    NoneOf, Not, Or,
};

// Re-export type erasure
pub use boxed::{BoxPredicate, BoxedPredicateExt};

// Re-export bulk operations
pub use ops::{all, any, count, filter, filter_ref, find, none, PredicateSliceExt};

// Re-export number predicates
pub use number::{
    between, eq, ge, gt, is_even, is_odd, le, lt, positive, Between, Eq, Ge, Gt, IsEven, IsOdd,
    Le, Lt,
};

// Re-export string predicates
pub use string::{
    contains, contains_ignore_case, ends_with, len_between, len_max, longer_than, not_empty,
    starts_with, Contains, ContainsIgnoreCase, EndsWith, LenBetween, NotEmpty, StartsWith,
};

// Re-export Result integration
pub use validation::{ensure, ensure_with};
