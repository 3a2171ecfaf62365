//! Helpers for iterating, querying and reshaping sequences
//!
//! A sequence is anything implementing [IntoIterator], borrowed or owned. Helpers that accept an
//! absent sequence take an [Option] of it; `None` stands in for a missing collection.
//!
//! # Examples
//!
//! ```rust
//! use roonia_util::seq::{append, get_count, is_empty, remove_where};
//!
//! let numbers = vec![1, 2, 3];
//! let more: Vec<_> = append(&numbers, &4).copied().collect();
//! assert_eq!(more, [1, 2, 3, 4]);
//!
//! assert_eq!(get_count(Some(&numbers)), 3);
//! assert_eq!(get_count(None::<&Vec<i32>>), 0);
//!
//! let mut evens_gone = vec![1, 2, 3, 4];
//! remove_where(&mut evens_gone, |n| n % 2 == 0);
//! assert_eq!(evens_gone, [1, 3]);
//! assert!(!is_empty(&evens_gone));
//! ```

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::iter::{once, Chain, Once};

use crate::error::{Error, Result};

mod future;

pub use future::{for_each_async, select_async, to_list_async};

/// Line terminator appended by [extract_as_string]
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator appended by [extract_as_string]
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Lazy sequence produced by [append]
pub type Append<I> =
    Chain<<I as IntoIterator>::IntoIter, Once<<I as IntoIterator>::Item>>;

/// Applies `action` to every element of `source`, in order
///
/// An absent source is a no-op. The source is handed back for chaining.
///
/// # Examples
///
/// ```rust
/// use roonia_util::seq::for_each;
///
/// let mut sum = 0;
/// let names = vec![1, 2, 3];
/// let same = for_each(Some(&names), |n| sum += n);
/// assert_eq!(sum, 6);
/// assert_eq!(same, Some(&names));
///
/// assert_eq!(for_each(None::<&Vec<i32>>, |_| unreachable!()), None);
/// ```
pub fn for_each<'a, C, F>(source: Option<&'a C>, action: F) -> Option<&'a C>
where
    C: ?Sized,
    &'a C: IntoIterator,
    F: FnMut(<&'a C as IntoIterator>::Item),
{
    if let Some(src) = source {
        src.into_iter().for_each(action);
    }
    source
}

/// Yields every element of `source` followed by `element`
///
/// The source is not modified. The result can be cloned, and thus restarted, exactly when the
/// source iterator can.
pub fn append<I: IntoIterator>(source: I, element: I::Item) -> Append<I> {
    source.into_iter().chain(once(element))
}

fn all_equal<I>(source: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut iter = source.into_iter();
    match iter.next() {
        Some(first) => iter.all(|item| item == first),
        None => true,
    }
}

/// Checks whether every element equals the first one
///
/// Empty and single-element sequences are trivially uniform.
///
/// # Errors
///
/// [Error::PreconditionViolation] if `source` is absent; raised before any iteration.
///
/// # Examples
///
/// ```rust
/// use roonia_util::seq::are_all_same;
///
/// assert!(are_all_same(Some([1, 1, 1])).unwrap());
/// assert!(!are_all_same(Some([1, 2])).unwrap());
/// assert!(are_all_same(Some(Vec::<u8>::new())).unwrap());
/// assert!(are_all_same(None::<Vec<u8>>).is_err());
/// ```
pub fn are_all_same<I>(source: Option<I>) -> Result<bool>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let source = source.ok_or_else(|| Error::precondition_violation("source"))?;
    Ok(all_equal(source))
}

/// [are_all_same] for sequences of nullable elements
///
/// A `None` first element short-circuits the comparison and the sequence counts as uniform.
/// Otherwise any later `None` differs from the first element.
pub fn are_all_same_nullable<I, T>(source: Option<I>) -> Result<bool>
where
    I: IntoIterator<Item = Option<T>>,
    T: PartialEq,
{
    let source = source.ok_or_else(|| Error::precondition_violation("source"))?;
    let mut iter = source.into_iter();
    let first = match iter.next() {
        Some(Some(first)) => first,
        Some(None) | None => return Ok(true),
    };
    Ok(iter.all(|item| item.as_ref() == Some(&first)))
}

/// Concatenates strings, each followed by [LINE_ENDING]
pub fn extract_as_string<I>(source: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    source.into_iter().fold(String::new(), |mut out, line| {
        out.push_str(line.as_ref());
        out.push_str(LINE_ENDING);
        out
    })
}

/// Collections that support removing an element at a given position
pub trait RemoveAt {
    /// Element type
    type Item;

    /// Number of elements currently held
    fn element_count(&self) -> usize;

    /// Element at `index`, if any
    fn element_at(&self, index: usize) -> Option<&Self::Item>;

    /// Removes the element at `index`, shifting later elements down
    fn remove_at(&mut self, index: usize);
}

impl<T> RemoveAt for Vec<T> {
    type Item = T;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn remove_at(&mut self, index: usize) {
        self.remove(index);
    }
}

impl<T> RemoveAt for VecDeque<T> {
    type Item = T;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn remove_at(&mut self, index: usize) {
        self.remove(index);
    }
}

/// Removes every element matching `predicate` from `collection`, in place
///
/// Walks the collection by descending index so removals never shift an element that has not been
/// visited yet. The order of the remaining elements is preserved.
pub fn remove_where<C, F>(collection: &mut C, mut predicate: F)
where
    C: RemoveAt + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    for index in (0..collection.element_count()).rev() {
        let matches = collection.element_at(index).is_some_and(&mut predicate);
        if matches {
            collection.remove_at(index);
        }
    }
}

/// Whether `source` yields at least one element; advances it by at most one step
pub fn is_not_empty<I: IntoIterator>(source: I) -> bool {
    source.into_iter().next().is_some()
}

/// Whether `source` yields no elements; advances it by at most one step
pub fn is_empty<I: IntoIterator>(source: I) -> bool {
    !is_not_empty(source)
}

/// Like [is_empty], with an absent source counting as empty
pub fn is_null_or_empty<I: IntoIterator>(source: Option<I>) -> bool {
    source.is_none_or(is_empty)
}

/// Negation of [is_null_or_empty]
pub fn is_not_null_or_empty<I: IntoIterator>(source: Option<I>) -> bool {
    !is_null_or_empty(source)
}

/// Number of elements in `source`; zero for an absent source
pub fn get_count<I: IntoIterator>(source: Option<I>) -> usize {
    source.map_or(0, |src| src.into_iter().count())
}

/// Number of elements in `source` matching `predicate`; zero for an absent source
pub fn get_count_where<I, F>(source: Option<I>, mut predicate: F) -> usize
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    source.map_or(0, |src| src.into_iter().filter(|item| predicate(item)).count())
}

/// [get_count] with a 64 bit counter
pub fn get_long_count<I: IntoIterator>(source: Option<I>) -> u64 {
    get_long_count_where(source, |_| true)
}

/// [get_count_where] with a 64 bit counter
pub fn get_long_count_where<I, F>(source: Option<I>, mut predicate: F) -> u64
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    source.map_or(0, |src| {
        src.into_iter()
            .fold(0u64, |count, item| count + u64::from(predicate(&item)))
    })
}

/// Lazily yields the first element for every distinct key, keeping source order
///
/// # Examples
///
/// ```rust
/// use roonia_util::seq::distinct_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let firsts: Vec<_> = distinct_by(words, |w| w.chars().next()).collect();
/// assert_eq!(firsts, ["apple", "banana", "cherry"]);
/// ```
pub fn distinct_by<I, K, F>(source: I, mut key: F) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut seen = HashSet::new();
    source.into_iter().filter(move |item| seen.insert(key(item)))
}

/// Extension trait exposing the sequence helpers on iterators
///
/// # Examples
///
/// ```rust
/// use roonia_util::seq::SeqExt;
///
/// assert!([3, 3, 3].into_iter().all_same());
/// let joined = ["a", "b"].into_iter().appended("c").extract_as_string();
/// assert_eq!(joined.lines().collect::<Vec<_>>(), ["a", "b", "c"]);
/// ```
pub trait SeqExt: Iterator + Sized {
    /// See [append]
    fn appended(self, element: Self::Item) -> Append<Self> {
        append(self, element)
    }

    /// See [are_all_same]; an iterator is never absent, so this cannot fail
    fn all_same(self) -> bool
    where
        Self::Item: PartialEq,
    {
        all_equal(self)
    }

    /// See [is_not_empty]
    fn has_elements(mut self) -> bool {
        self.next().is_some()
    }

    /// See [extract_as_string]
    fn extract_as_string(self) -> String
    where
        Self::Item: AsRef<str>,
    {
        extract_as_string(self)
    }

    /// See [distinct_by]
    fn distinct_by<K, F>(self, key: F) -> impl Iterator<Item = Self::Item>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        distinct_by(self, key)
    }
}

impl<I: Iterator> SeqExt for I {}
