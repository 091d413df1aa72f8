//! # Strainer
//!
//! Composable predicates for filtering in-memory collections.
//!
//! A predicate is a pure yes/no test over a borrowed value. Small predicates
//! combine into larger ones with `and`, `or` and `not`, and are applied to a
//! slice with `filter`, `find`, `count`, `any`, `all` and `none`. Results keep
//! the input order.
//!
//! On top of the core sit three ways of assembling criteria:
//!
//! - [`PredicateBuilder`] collects criteria fluently and joins them with a
//!   single AND or OR.
//! - [`Specification`] is a tree of rules that composes through methods.
//! - Domain criteria in [`catalog`] and [`process`] are ordinary functions
//!   returning predicates.
//!
//! ## Quick Example
//!
//! ```rust
//! use strainer::prelude::*;
//! use strainer::catalog::{by_category, in_stock, sample_products, Product};
//!
//! let products = sample_products();
//!
//! // Criteria compose like any other predicate
//! let available = by_category("Electronics").and(in_stock());
//! assert_eq!(filter_ref(&products, &available).len(), 3);
//!
//! // The builder joins whatever criteria were added
//! let cheap_or_furniture = PredicateBuilder::<Product>::new()
//!     .with_category("Furniture")
//!     .with_max_price(50.0)
//!     .use_or()
//!     .build();
//! let names: Vec<&str> = filter_ref(&products, &cheap_or_furniture)
//!     .into_iter()
//!     .map(|p| p.name.as_str())
//!     .collect();
//! assert_eq!(names, vec!["Mouse", "Desk", "Chair"]);
//! ```
//!
//! The [`computer`] and [`server`] modules show the same predicates guarding
//! construction: a validating builder and functional options.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod catalog;
pub mod computer;
pub mod error;
pub mod predicate;
pub mod process;
pub mod server;
pub mod specification;

// Re-exports
pub use builder::{Combinator, PredicateBuilder};
pub use error::{BuildError, ConfigError, OptionError};
pub use predicate::{BoxPredicate, Predicate, PredicateExt};
pub use specification::Specification;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::builder::{Combinator, PredicateBuilder};
    pub use crate::predicate::prelude::*;
    pub use crate::specification::Specification;
}
