//! Salted string digests for identification purposes
//!
//! The digest is BLAKE2b with a 16 byte (128 bit) output, rendered as 32 lower-case hex
//! characters. It identifies content; it is not meant for password storage. The output is not
//! MD5 and does not match MD5 digests of the same input.

use blake2::digest::consts::U16;
use blake2::{Blake2b, Digest};

/// BLAKE2b with a 128 bit output
type Blake2b128 = Blake2b<U16>;

/// Length in characters of the strings returned by [hash_string]
pub const HASH_HEX_LEN: usize = 32;

/// Hex digest of the UTF-8 bytes of `input` followed by `salt`
///
/// A missing salt behaves like an empty one.
///
/// # Examples
///
/// ```rust
/// use roonia_util::hash::{hash_string, HASH_HEX_LEN};
///
/// let plain = hash_string("abc", None);
/// assert_eq!(plain.len(), HASH_HEX_LEN);
/// assert_eq!(plain, hash_string("abc", Some("")));
/// assert_eq!(hash_string("ab", Some("c")), plain);
/// assert_ne!(hash_string("abd", None), plain);
/// ```
pub fn hash_string(input: &str, salt: Option<&str>) -> String {
    let mut hasher = Blake2b128::new();
    hasher.update(input.as_bytes());
    if let Some(salt) = salt {
        hasher.update(salt.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Extension trait for [hash_string] in method position
pub trait HashStringExt {
    /// See [hash_string]
    fn hash_string(&self, salt: Option<&str>) -> String;
}

impl HashStringExt for str {
    fn hash_string(&self, salt: Option<&str>) -> String {
        hash_string(self, salt)
    }
}
