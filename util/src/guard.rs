//! Guard clauses: predicates for missing or sentinel values and helpers that fail fast on them
//!
//! A missing value is modelled as [Option::None]. Every `throw_if_*` helper is free of side
//! effects on success and deterministic: the same input always passes or always fails.
//!
//! # Examples
//!
//! ```rust
//! use roonia_util::guard::{throw_if_argument_is_null_or_white_space, throw_if_is_null};
//! use roonia_util::Error;
//!
//! fn greet(name: Option<&str>) -> roonia_util::Result<String> {
//!     throw_if_argument_is_null_or_white_space(name, "name")?;
//!     Ok(format!("hello {}", name.unwrap_or_default()))
//! }
//!
//! assert_eq!(greet(Some("ada")).unwrap(), "hello ada");
//! assert!(matches!(greet(Some("  ")), Err(Error::InvalidArgument { .. })));
//!
//! #[derive(Debug, PartialEq)]
//! struct NoConnection;
//! assert_eq!(throw_if_is_null(&None::<u16>, NoConnection), Err(NoConnection));
//! assert_eq!(throw_if_is_null(&Some(5432u16), NoConnection), Ok(()));
//! ```

use crate::error::{Error, Result};

/// Returns `err` unless `b` holds
///
/// # Examples
///
/// ```rust
/// # use roonia_util::guard::ensure_or;
/// assert!(ensure_or(5 > 3, "not greater").is_ok());
/// assert_eq!(ensure_or(5 < 3, "not less"), Err("not less"));
/// ```
pub fn ensure_or<E>(b: bool, err: E) -> Result<(), E> {
    match b {
        true => Ok(()),
        false => Err(err),
    }
}

/// Returns `err` if `b` holds
///
/// # Examples
///
/// ```rust
/// # use roonia_util::guard::bail_if;
/// assert!(bail_if(false, "not bailed").is_ok());
/// assert!(bail_if(true, "bailed").is_err());
/// ```
pub fn bail_if<E>(b: bool, err: E) -> Result<(), E> {
    ensure_or(!b, err)
}

/// Like [bail_if] but only constructs the error on failure
fn bail_if_with<E, F: FnOnce() -> E>(b: bool, err: F) -> Result<(), E> {
    match b {
        true => Err(err()),
        false => Ok(()),
    }
}

/// Whether `obj` is missing
pub fn is_null<T>(obj: &Option<T>) -> bool {
    obj.is_none()
}

/// Whether `obj` is present
pub fn is_not_null<T>(obj: &Option<T>) -> bool {
    !is_null(obj)
}

/// Fails with the supplied `error` if `obj` is missing
pub fn throw_if_is_null<T, E>(obj: &Option<T>, error: E) -> Result<(), E> {
    bail_if(is_null(obj), error)
}

/// Fails with [Error::InvalidArgument] naming `name` if `obj` is missing
pub fn throw_if_argument_is_null<T>(obj: &Option<T>, name: &str) -> Result<()> {
    bail_if_with(is_null(obj), || Error::invalid_argument(name))
}

/// Fails with [Error::NullReference] naming `name` if `obj` is missing
pub fn throw_if_reference_is_null<T>(obj: &Option<T>, name: &str) -> Result<()> {
    bail_if_with(is_null(obj), || Error::null_reference(name))
}

/// Whether `text` is missing or has zero length
pub fn is_null_or_empty(text: Option<&str>) -> bool {
    text.is_none_or(str::is_empty)
}

/// Whether `text` is missing, empty or consists of whitespace only
pub fn is_null_or_white_space(text: Option<&str>) -> bool {
    text.is_none_or(|t| t.chars().all(char::is_whitespace))
}

/// Fails with the supplied `error` if `text` is missing or empty
pub fn throw_if_is_null_or_empty<E>(text: Option<&str>, error: E) -> Result<(), E> {
    bail_if(is_null_or_empty(text), error)
}

/// Fails with [Error::InvalidArgument] naming `name` if `text` is missing or empty
pub fn throw_if_argument_is_null_or_empty(text: Option<&str>, name: &str) -> Result<()> {
    bail_if_with(is_null_or_empty(text), || Error::invalid_argument(name))
}

/// Fails with the supplied `error` if `text` is missing, empty or whitespace only
pub fn throw_if_is_null_or_white_space<E>(text: Option<&str>, error: E) -> Result<(), E> {
    bail_if(is_null_or_white_space(text), error)
}

/// Fails with [Error::InvalidArgument] naming `name` if `text` is missing, empty or whitespace
/// only
pub fn throw_if_argument_is_null_or_white_space(text: Option<&str>, name: &str) -> Result<()> {
    bail_if_with(is_null_or_white_space(text), || Error::invalid_argument(name))
}

/// Whether `id` is the all-zero (nil) identifier
#[cfg(feature = "uuid")]
pub fn is_empty(id: &uuid::Uuid) -> bool {
    id.is_nil()
}

/// Fails with [Error::InvalidArgument] naming `name` if `id` is the nil identifier
#[cfg(feature = "uuid")]
pub fn throw_if_is_empty(id: &uuid::Uuid, name: &str) -> Result<()> {
    bail_if_with(is_empty(id), || Error::invalid_argument(name))
}

/// Whether `timestamp` is the zero-value sentinel, [chrono::NaiveDateTime::default]
#[cfg(feature = "chrono")]
pub fn is_default(timestamp: &chrono::NaiveDateTime) -> bool {
    is_default_value(timestamp)
}

/// Fails with [Error::InvalidArgument] naming `name` if `timestamp` is the zero-value sentinel
#[cfg(feature = "chrono")]
pub fn throw_if_date_time_is_default(timestamp: &chrono::NaiveDateTime, name: &str) -> Result<()> {
    bail_if_with(is_default(timestamp), || Error::invalid_argument(name))
}

/// Whether `value` equals its type's [Default]
pub fn is_default_value<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Fails with [Error::InvalidArgument] naming `name` if `value` equals its type's [Default]
pub fn throw_if_is_default<T: Default + PartialEq>(value: &T, name: &str) -> Result<()> {
    bail_if_with(is_default_value(value), || Error::invalid_argument(name))
}

/// Extension trait offering the null guards as methods on [Option]
///
/// # Examples
///
/// ```rust
/// use roonia_util::guard::NullCheckExt;
///
/// let config: Option<&str> = None;
/// assert!(config.throw_if_reference_is_null("config").is_err());
/// assert!(Some(1).throw_if_argument_is_null("count").is_ok());
/// ```
pub trait NullCheckExt {
    /// See [throw_if_is_null]
    fn throw_if_is_null<E>(&self, error: E) -> Result<(), E>;
    /// See [throw_if_argument_is_null]
    fn throw_if_argument_is_null(&self, name: &str) -> Result<()>;
    /// See [throw_if_reference_is_null]
    fn throw_if_reference_is_null(&self, name: &str) -> Result<()>;
}

impl<T> NullCheckExt for Option<T> {
    fn throw_if_is_null<E>(&self, error: E) -> Result<(), E> {
        throw_if_is_null(self, error)
    }

    fn throw_if_argument_is_null(&self, name: &str) -> Result<()> {
        throw_if_argument_is_null(self, name)
    }

    fn throw_if_reference_is_null(&self, name: &str) -> Result<()> {
        throw_if_reference_is_null(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_guard_carries_name() {
        let err = throw_if_argument_is_null(&None::<()>, "x").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref name } if name == "x"));
        assert!(throw_if_argument_is_null(&Some(()), "x").is_ok());
    }

    #[test]
    fn reference_guard_is_a_null_reference() {
        let err = throw_if_reference_is_null(&None::<String>, "conn").unwrap_err();
        assert!(matches!(err, Error::NullReference { ref name } if name == "conn"));
        assert!(throw_if_reference_is_null(&Some(String::new()), "conn").is_ok());
    }

    #[test]
    fn null_checks() {
        assert!(is_null(&None::<u8>));
        assert!(is_not_null(&Some(0u8)));
        assert!(!is_null(&Some(0u8)));
    }

    #[test]
    fn custom_error_is_returned_verbatim() {
        assert_eq!(throw_if_is_null(&None::<i64>, 42), Err(42));
        assert_eq!(throw_if_is_null_or_empty(Some(""), "empty"), Err("empty"));
        assert_eq!(throw_if_is_null_or_empty(Some(" "), "empty"), Ok(()));
        assert_eq!(throw_if_is_null_or_white_space(Some("\t\n"), 7), Err(7));
        assert_eq!(throw_if_is_null_or_white_space(Some(" x "), 7), Ok(()));
    }

    #[test]
    fn text_predicates() {
        assert!(is_null_or_empty(None));
        assert!(is_null_or_empty(Some("")));
        assert!(!is_null_or_empty(Some(" ")));
        assert!(is_null_or_white_space(None));
        assert!(is_null_or_white_space(Some("")));
        assert!(is_null_or_white_space(Some(" \u{2003}\t")));
        assert!(!is_null_or_white_space(Some(" a ")));
    }

    #[test]
    fn text_argument_guards() {
        assert!(throw_if_argument_is_null_or_empty(None, "s").is_err());
        assert!(throw_if_argument_is_null_or_empty(Some("v"), "s").is_ok());
        let err = throw_if_argument_is_null_or_white_space(Some("   "), "s").unwrap_err();
        assert_eq!(err.name(), Some("s"));
    }

    #[test]
    fn guards_are_deterministic() {
        for _ in 0..3 {
            assert!(throw_if_argument_is_null_or_empty(Some(""), "s").is_err());
            assert!(throw_if_argument_is_null_or_empty(Some("s"), "s").is_ok());
        }
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn nil_uuid_is_empty() {
        assert!(is_empty(&uuid::Uuid::nil()));
        assert!(throw_if_is_empty(&uuid::Uuid::nil(), "id").is_err());
        assert!(throw_if_is_empty(&uuid::Uuid::new_v4(), "id").is_ok());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn default_date_time_is_rejected() {
        use chrono::NaiveDate;

        let zero = chrono::NaiveDateTime::default();
        assert!(is_default(&zero));
        assert!(throw_if_date_time_is_default(&zero, "created").is_err());

        let real = NaiveDate::from_ymd_opt(2024, 2, 29)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        assert!(!is_default(&real));
        assert!(throw_if_date_time_is_default(&real, "created").is_ok());
    }

    #[test]
    fn generic_default_guard() {
        assert!(is_default_value(&0u32));
        assert!(throw_if_is_default(&String::new(), "label").is_err());
        assert!(throw_if_is_default(&"x".to_owned(), "label").is_ok());
    }
}
