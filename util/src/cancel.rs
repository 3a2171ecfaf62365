//! Cancellation signals observed by the asynchronous sequence helpers
//!
//! The helpers in [crate::seq] only need "check now, fail if requested" semantics, so any type
//! that can answer [CancellationSignal::is_cancellation_requested] can drive them.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use roonia_util::cancel::{CancellationSignal, NeverCancelled};
//!
//! let flag = AtomicBool::new(false);
//! assert!(flag.throw_if_cancellation_requested().is_ok());
//!
//! flag.store(true, Ordering::Release);
//! assert!(flag.throw_if_cancellation_requested().unwrap_err().is_cancelled());
//!
//! assert!(!NeverCancelled.is_cancellation_requested());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};

/// A signal that can be polled for pending cancellation
pub trait CancellationSignal {
    /// Whether cancellation has been requested
    fn is_cancellation_requested(&self) -> bool;

    /// Returns [Error::Cancelled] if cancellation has been requested
    fn throw_if_cancellation_requested(&self) -> Result<()> {
        if self.is_cancellation_requested() {
            log::trace!("cancellation requested, stopping before the next step");
            return Err(Error::Cancelled);
        }
        Ok(())
    }
}

/// Signal that is never triggered; the equivalent of passing no cancellation at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverCancelled;

impl CancellationSignal for NeverCancelled {
    fn is_cancellation_requested(&self) -> bool {
        false
    }
}

impl CancellationSignal for AtomicBool {
    fn is_cancellation_requested(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<T: CancellationSignal + ?Sized> CancellationSignal for &T {
    fn is_cancellation_requested(&self) -> bool {
        (**self).is_cancellation_requested()
    }
}

impl<T: CancellationSignal + ?Sized> CancellationSignal for Arc<T> {
    fn is_cancellation_requested(&self) -> bool {
        (**self).is_cancellation_requested()
    }
}

#[cfg(feature = "cancel-token")]
impl CancellationSignal for tokio_util::sync::CancellationToken {
    fn is_cancellation_requested(&self) -> bool {
        self.is_cancelled()
    }
}
