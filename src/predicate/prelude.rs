//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use strainer::predicate::prelude::*;
//!
//! let adult = ge(18).and(le(130));
//! assert!(adult.check(&40));
//! ```

// Core traits
pub use super::boxed::{BoxPredicate, BoxedPredicateExt};
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, always, and, any_of, never, none_of, not, or};

// Bulk operations
pub use super::ops::{all, any, count, filter, filter_ref, find, none, PredicateSliceExt};

// Number predicates
pub use super::number::{between, eq, ge, gt, is_even, is_odd, le, lt, positive};

// String predicates
pub use super::string::{
    contains, contains_ignore_case, ends_with, len_between, len_max, longer_than, not_empty,
    starts_with,
};

// Result integration
pub use super::validation::{ensure, ensure_with};
