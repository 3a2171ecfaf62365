#![warn(missing_docs)]
//! Extension helpers for everyday values
//!
//! Each module is a leaf, grouped by the kind of value it works on:
//!
//! - [seq]: iterating, querying and reshaping sequences, including cancellable async variants
//! - [guard]: guard clauses for missing, empty and sentinel values
//! - [enums]: flag decomposition and human-readable labels for flag enums
//! - [boolean]: fluent branching on booleans
//! - [hash]: salted string digests
//!
//! Helpers are free functions taking the value they work on as their first argument. Most
//! modules also offer an extension trait for method-call syntax.
//!
//! # Examples
//!
//! ```rust
//! use roonia_util::boolean::BoolExt;
//! use roonia_util::guard::throw_if_argument_is_null_or_empty;
//! use roonia_util::hash::HashStringExt;
//! use roonia_util::seq::is_null_or_empty;
//!
//! let user = Some("ada");
//! throw_if_argument_is_null_or_empty(user, "user")?;
//!
//! let tags: Option<Vec<&str>> = None;
//! let mut digest = None;
//! is_null_or_empty(tags.as_ref()).when_true(|| digest = Some("ada".hash_string(None)));
//! assert_eq!(digest.map(|d| d.len()), Some(32));
//! # Ok::<(), roonia_util::Error>(())
//! ```

pub mod boolean;
pub mod cancel;
pub mod enums;
pub mod error;
pub mod guard;
pub mod hash;
pub mod seq;

pub use error::{Error, Result};
