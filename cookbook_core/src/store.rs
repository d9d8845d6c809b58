//! The shared in-memory cookbook.

use crate::entry::{Entry, EntryType};
use crate::error::{Error, Result};
use crate::expand::{self, ExpandLimits, Expansion};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Registry of entries keyed by their unique name.
///
/// Insertions take the write lock; lookups and whole expansions take the read
/// lock, so an expansion always sees one consistent state of the cookbook.
#[derive(Debug, Default)]
pub struct Cookbook {
    entries: RwLock<HashMap<String, Entry>>,
    limits: ExpandLimits,
}

impl Cookbook {
    /// Create an empty cookbook with default expansion limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cookbook with the given expansion limits.
    pub fn with_limits(limits: ExpandLimits) -> Self {
        Self {
            entries: RwLock::default(),
            limits,
        }
    }

    /// Expansion limits in effect.
    pub fn limits(&self) -> ExpandLimits {
        self.limits
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .read()
            .map_err(|_| Error::LockPoisoned { operation: "read" })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .write()
            .map_err(|_| Error::LockPoisoned { operation: "write" })
    }

    /// Insert a new entry.
    ///
    /// Names are claimed once: inserting a name that already exists fails and
    /// leaves the cookbook unchanged.
    pub fn insert(&self, entry: Entry) -> Result<()> {
        let mut entries = self.write()?;

        if entries.contains_key(entry.name()) {
            warn!(entry = entry.name(), "rejected duplicate entry");
            return Err(Error::duplicate_name(entry.name()));
        }

        debug!(
            entry = entry.name(),
            entry_type = %entry.entry_type(),
            "inserted entry"
        );
        entries.insert(entry.name().to_string(), entry);
        Ok(())
    }

    /// Look up an entry by exact name.
    pub fn lookup(&self, name: &str) -> Result<Entry> {
        self.read()?
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(name))
    }

    /// Check whether a name is taken.
    pub fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.read()?.contains_key(name))
    }

    /// Number of entries.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Check whether the cookbook has no entries.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    /// All entry names with their kind, sorted by name.
    pub fn names(&self) -> Result<Vec<(String, EntryType)>> {
        let mut names: Vec<(String, EntryType)> = self
            .read()?
            .values()
            .map(|entry| (entry.name().to_string(), entry.entry_type()))
            .collect();
        names.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(names)
    }

    /// Expand a recipe into its total cook time and base ingredients.
    ///
    /// Holds the read lock for the whole traversal.
    pub fn expand(&self, name: &str) -> Result<Expansion> {
        let entries = self.read()?;
        let expansion = expand::expand(&entries, name, self.limits)?;
        debug!(
            recipe = name,
            cook_time = expansion.cook_time,
            ingredients = expansion.ingredients.len(),
            "expanded recipe"
        );
        Ok(expansion)
    }
}
