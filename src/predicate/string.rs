//! String predicates
//!
//! Each predicate is implemented for both `str` and `String` so it can be
//! applied to borrowed text and to slices of owned strings alike.

use super::combinators::Predicate;

macro_rules! impl_for_strings {
    ($ty:ty, |$this:ident, $value:ident| $body:expr) => {
        impl Predicate<str> for $ty {
            #[inline]
            fn check(&self, $value: &str) -> bool {
                let $this = self;
                $body
            }
        }

        impl Predicate<String> for $ty {
            #[inline]
            fn check(&self, $value: &String) -> bool {
                let $this = self;
                let $value = $value.as_str();
                $body
            }
        }
    };
}

/// Predicate that checks for a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith(String);

impl_for_strings!(StartsWith, |this, value| value.starts_with(this.0.as_str()));

/// Create a predicate that checks if a string starts with `prefix`.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// assert!(starts_with("b").check("banana"));
/// assert!(!starts_with("b").check("apple"));
/// ```
pub fn starts_with(prefix: impl Into<String>) -> StartsWith {
    StartsWith(prefix.into())
}

/// Predicate that checks for a suffix.
#[derive(Clone, Debug)]
pub struct EndsWith(String);

impl_for_strings!(EndsWith, |this, value| value.ends_with(this.0.as_str()));

/// Create a predicate that checks if a string ends with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> EndsWith {
    EndsWith(suffix.into())
}

/// Predicate that checks for a substring.
#[derive(Clone, Debug)]
pub struct Contains(String);

impl_for_strings!(Contains, |this, value| value.contains(this.0.as_str()));

/// Create a predicate that checks if a string contains `needle`.
pub fn contains(needle: impl Into<String>) -> Contains {
    Contains(needle.into())
}

/// Predicate that checks for a substring, ignoring case.
#[derive(Clone, Debug)]
pub struct ContainsIgnoreCase(String);

impl_for_strings!(ContainsIgnoreCase, |this, value| value
    .to_lowercase()
    .contains(this.0.as_str()));

/// Create a case-insensitive substring predicate.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// assert!(contains_ignore_case("KEY").check("Keyboard"));
/// ```
pub fn contains_ignore_case(needle: impl AsRef<str>) -> ContainsIgnoreCase {
    ContainsIgnoreCase(needle.as_ref().to_lowercase())
}

/// Predicate that checks the byte length of a string is in range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl_for_strings!(LenBetween, |this, value| {
    let len = value.len();
    len >= this.min && len <= this.max
});

/// Create a predicate that checks `min <= len <= max`.
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a predicate that checks the string is longer than `len` bytes.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// assert!(longer_than(5).check("banana"));
/// assert!(!longer_than(5).check("apple"));
/// ```
pub fn longer_than(len: usize) -> LenBetween {
    LenBetween {
        min: len.saturating_add(1),
        max: usize::MAX,
    }
}

/// Create a predicate that checks the string is at most `max` bytes long.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Matches strings with at least one byte.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl_for_strings!(NotEmpty, |_this, value| !value.is_empty());

/// Non-empty strings.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}
