//! Asynchronous, cancellable variants of the sequence helpers
//!
//! All helpers here process one element at a time: the step for an element is awaited to
//! completion before the next one starts. The cancellation signal is checked at the top of every
//! iteration; once it fires no further steps run and [crate::Error::Cancelled] is returned. Steps
//! that already completed are not undone.

use std::future::Future;

use futures::{pin_mut, Stream, StreamExt};

use crate::cancel::CancellationSignal;
use crate::error::Result;

/// Awaits `action` for every element of `source`, in order
///
/// An absent source is a no-op. The source is handed back on success.
///
/// # Examples
///
/// ```rust
/// use roonia_util::cancel::NeverCancelled;
/// use roonia_util::seq::for_each_async;
///
/// # futures::executor::block_on(async {
/// let jobs = vec![1, 2, 3];
/// let mut done = Vec::new();
/// let back = for_each_async(Some(&jobs), |job| {
///     done.push(*job);
///     async {}
/// }, &NeverCancelled).await?;
/// assert_eq!(done, jobs);
/// assert_eq!(back, Some(&jobs));
/// # Ok::<(), roonia_util::Error>(())
/// # }).unwrap();
/// ```
pub async fn for_each_async<'a, C, F, Fut, S>(
    source: Option<&'a C>,
    mut action: F,
    cancellation: &S,
) -> Result<Option<&'a C>>
where
    C: ?Sized,
    &'a C: IntoIterator,
    F: FnMut(<&'a C as IntoIterator>::Item) -> Fut,
    Fut: Future<Output = ()>,
    S: CancellationSignal + ?Sized,
{
    if let Some(src) = source {
        for item in src {
            cancellation.throw_if_cancellation_requested()?;
            action(item).await;
        }
    }
    Ok(source)
}

/// Maps every element of `source` through the asynchronous `selector`, in order
///
/// Returns `None` for an absent source.
pub async fn select_async<I, F, Fut, S>(
    source: Option<I>,
    mut selector: F,
    cancellation: &S,
) -> Result<Option<Vec<Fut::Output>>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
    S: CancellationSignal + ?Sized,
{
    let Some(source) = source else {
        return Ok(None);
    };

    let mut results = Vec::new();
    for item in source {
        cancellation.throw_if_cancellation_requested()?;
        results.push(selector(item).await);
    }
    Ok(Some(results))
}

/// Drains `stream` into a [Vec], checking for cancellation before every pull
///
/// # Examples
///
/// ```rust
/// use futures::stream;
/// use roonia_util::cancel::NeverCancelled;
/// use roonia_util::seq::to_list_async;
///
/// # futures::executor::block_on(async {
/// let list = to_list_async(stream::iter(["a", "b"]), &NeverCancelled).await?;
/// assert_eq!(list, ["a", "b"]);
/// # Ok::<(), roonia_util::Error>(())
/// # }).unwrap();
/// ```
pub async fn to_list_async<St, S>(stream: St, cancellation: &S) -> Result<Vec<St::Item>>
where
    St: Stream,
    S: CancellationSignal + ?Sized,
{
    pin_mut!(stream);
    let mut list = Vec::new();
    loop {
        cancellation.throw_if_cancellation_requested()?;
        match stream.next().await {
            Some(item) => list.push(item),
            None => break,
        }
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::atomic::{AtomicBool, Ordering};

    use futures::executor::block_on;
    use futures::stream;

    use super::*;
    use crate::cancel::NeverCancelled;
    use crate::error::Error;

    #[test]
    fn select_preserves_order() {
        let doubled = block_on(select_async(
            Some([1, 2, 3]),
            |n| async move { n * 2 },
            &NeverCancelled,
        ))
        .unwrap();
        assert_eq!(doubled, Some(vec![2, 4, 6]));
    }

    #[test]
    fn select_on_absent_source_is_none() {
        let out = block_on(select_async(
            None::<Vec<u8>>,
            |n| async move { n },
            &NeverCancelled,
        ))
        .unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn cancelled_before_start_runs_nothing() {
        let cancel = AtomicBool::new(true);
        let calls = Cell::new(0);
        let res = block_on(for_each_async(
            Some(&[1, 2, 3][..]),
            |_| {
                calls.set(calls.get() + 1);
                async {}
            },
            &cancel,
        ));
        assert!(matches!(res, Err(Error::Cancelled)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn select_stops_after_cancellation() {
        let cancel = AtomicBool::new(false);
        let res = block_on(select_async(
            Some(0..10),
            |n| {
                if n == 1 {
                    cancel.store(true, Ordering::Release);
                }
                async move { n }
            },
            &cancel,
        ));
        assert!(res.unwrap_err().is_cancelled());
    }

    #[test]
    fn to_list_drains_everything() {
        let list = block_on(to_list_async(stream::iter(1..=4), &NeverCancelled)).unwrap();
        assert_eq!(list, [1, 2, 3, 4]);
    }

    #[test]
    fn to_list_honours_cancellation() {
        let cancel = AtomicBool::new(true);
        let res = block_on(to_list_async(stream::iter(1..=4), &cancel));
        assert!(matches!(res, Err(Error::Cancelled)));
    }
}
