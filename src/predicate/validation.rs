//! Predicate-driven checks that return `Result`.

use super::combinators::Predicate;

/// Pass `value` through if it satisfies `predicate`, otherwise fail with
/// `error`.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// assert_eq!(ensure(8080, between(1, 65535), "bad port"), Ok(8080));
/// assert_eq!(ensure(0, between(1, 65535), "bad port"), Err("bad port"));
/// ```
pub fn ensure<T, E, P>(value: T, predicate: P, error: E) -> Result<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Like [`ensure`], but builds the error from the rejected value.
///
/// # Example
///
/// ```rust
/// use strainer::predicate::*;
///
/// let result = ensure_with(2048, le(1024), |ram| format!("{ram}GB is too much"));
/// assert_eq!(result, Err("2048GB is too much".to_string()));
/// ```
pub fn ensure_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Result<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{gt, not_empty, positive, PredicateExt};

    #[test]
    fn test_ensure_numbers() {
        assert_eq!(ensure(42, positive::<i32>(), "must be positive"), Ok(42));
        assert_eq!(ensure(-5, positive::<i32>(), "must be positive"), Err("must be positive"));
    }

    #[test]
    fn test_ensure_strings() {
        let host = ensure(String::from("db.local"), not_empty(), "host required");
        assert_eq!(host.as_deref(), Ok("db.local"));
        let host = ensure(String::new(), not_empty(), "host required");
        assert_eq!(host, Err("host required"));
    }

    #[test]
    fn test_ensure_with_sees_value() {
        let result = ensure_with(3, gt(5).or(gt(100)), |n| format!("{n} too small"));
        assert_eq!(result, Err("3 too small".to_string()));
    }
}
