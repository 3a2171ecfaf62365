//! Fluent branching on booleans
//!
//! Both helpers hand back the condition unchanged, so they can be chained.
//!
//! # Examples
//!
//! ```rust
//! use roonia_util::boolean::BoolExt;
//!
//! let mut log = Vec::new();
//! let ok = (2 + 2 == 4)
//!     .when_true(|| log.push("math works"))
//!     .else_action(|| log.push("math is broken"));
//! assert!(ok);
//! assert_eq!(log, ["math works"]);
//! ```

/// Invokes `action` if `condition` holds; returns `condition`
pub fn when_true<F: FnOnce()>(condition: bool, action: F) -> bool {
    if condition {
        action();
    }
    condition
}

/// Invokes `action` if `condition` does not hold; returns `condition`
pub fn else_action<F: FnOnce()>(condition: bool, action: F) -> bool {
    if !condition {
        action();
    }
    condition
}

/// Extension trait for [when_true] and [else_action] in method position
pub trait BoolExt {
    /// See [when_true]
    fn when_true<F: FnOnce()>(self, action: F) -> bool;
    /// See [else_action]
    fn else_action<F: FnOnce()>(self, action: F) -> bool;
}

impl BoolExt for bool {
    fn when_true<F: FnOnce()>(self, action: F) -> bool {
        when_true(self, action)
    }

    fn else_action<F: FnOnce()>(self, action: F) -> bool {
        else_action(self, action)
    }
}
