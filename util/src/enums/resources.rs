//! Resource tables used to localize enum labels
//!
//! Members declared with `=> resource("key")` in [crate::flag_enum!] resolve their label through
//! a [ResourceTable]. Tables can be built in code or read from a flat TOML document:
//!
//! ```toml
//! "access.read" = "Lesen"
//! "access.write" = "Schreiben"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::hash::BuildHasher;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lookup from resource key to label text
pub trait ResourceTable {
    /// The label stored under `key`, if any
    fn lookup(&self, key: &str) -> Option<&str>;
}

/// The empty resource table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoResources;

impl ResourceTable for NoResources {
    fn lookup(&self, _key: &str) -> Option<&str> {
        None
    }
}

impl<S: BuildHasher> ResourceTable for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl ResourceTable for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<T: ResourceTable + ?Sized> ResourceTable for &T {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

/// An owned resource table, loadable from TOML
///
/// # Examples
///
/// ```rust
/// use roonia_util::enums::{ResourceTable, StaticResources};
///
/// let table: StaticResources = r#"
///     "access.read" = "Lesen"
/// "#.parse()?;
/// assert_eq!(table.lookup("access.read"), Some("Lesen"));
/// assert_eq!(table.lookup("access.write"), None);
/// # Ok::<(), roonia_util::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticResources {
    entries: BTreeMap<String, String>,
}

impl StaticResources {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a flat `key = "label"` TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: Self = toml::from_str(text)?;
        log::debug!("parsed resource table with {} entries", table.len());
        Ok(table)
    }

    /// Reads and parses a TOML resource file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_toml_str(&fs::read_to_string(path)?)?;
        log::debug!("loaded resource table from {}", path.display());
        Ok(table)
    }

    /// Adds or replaces the label stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), label.into());
        self
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for StaticResources {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticResources {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { entries }
    }
}

impl ResourceTable for StaticResources {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.lookup(key)
    }
}
