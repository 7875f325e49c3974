//! The shared alias → emoji mapping.

mod seed;
mod unicode;

pub use seed::{Seed, CUSTOM_ALIASES};
pub use unicode::alias_name;

use std::borrow::Cow;
use std::sync::{Arc, Mutex, PoisonError};

use ahash::AHashMap;
use arc_swap::ArcSwap;
use itertools::Itertools;
use once_cell::sync::Lazy;

use crate::prelude::*;
use crate::{flag, Error, Scanner};

static GLOBAL: Lazy<AliasTable> = Lazy::new(|| Seed::default().build());

/// An immutable snapshot of an [`AliasTable`].
#[derive(Debug, Clone, Default)]
pub struct Aliases {
    map: AHashMap<String, String>,
}

impl Aliases {
    /// Direct table lookup; the flag pattern is not consulted.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.map.get(alias).map(String::as_str)
    }

    /// Table lookup falling back to the implicit `:flag-XY:` alias.
    pub fn resolve(&self, alias: &str) -> Option<Cow<'_, str>> {
        match self.get(alias) {
            Some(code) => Some(Cow::Borrowed(code)),
            None => flag::resolve(alias).map(Cow::Owned),
        }
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.map.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(alias, code)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(alias, code)| (alias.as_str(), code.as_str()))
    }

    /// Every `(alias, code)` pair, sorted by alias.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        self.iter().sorted().collect()
    }

    /// Checks a prospective entry against this snapshot.
    fn validate(&self, alias: &str) -> Result<(), Error> {
        if let Some(code) = self.get(alias) {
            return Err(Error::already_exists(alias, code));
        }

        if alias.chars().any(char::is_whitespace) {
            return Err(Error::InvalidAlias(alias.to_owned()));
        }

        Ok(())
    }
}

/// Mapping from `:alias:` to emoji code, shared read-mostly between scans.
///
/// Readers load the currently published [`Aliases`] snapshot and never block each other.
/// Writers are serialized and publish a fresh snapshot, so an insertion is visible to every
/// lookup that starts after it returns. Entries are never overwritten or removed.
#[derive(Debug, Default)]
pub struct AliasTable {
    current: ArcSwap<Aliases>,
    writer: Mutex<()>,
}

impl AliasTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the default compiled-in seed.
    pub fn seeded() -> Self {
        Seed::default().build()
    }

    /// The process-wide table, seeded on first use.
    pub fn global() -> &'static AliasTable {
        &GLOBAL
    }

    /// Loads the current snapshot.
    pub fn snapshot(&self) -> Arc<Aliases> {
        self.current.load_full()
    }

    /// Returns the code for `alias`, falling back to the `:flag-XY:` pattern on a miss.
    pub fn lookup(&self, alias: &str) -> Option<String> {
        self.current
            .load()
            .resolve(alias)
            .map(Cow::into_owned)
    }

    /// Whether [`AliasTable::lookup`] would succeed.
    pub fn exists(&self, alias: &str) -> bool {
        self.lookup(alias).is_some()
    }

    /// Registers a new alias.
    ///
    /// Fails with [`Error::AlreadyExists`] if the alias is present (the existing code is
    /// kept) and with [`Error::InvalidAlias`] if it contains whitespace.
    pub fn insert(&self, alias: impl Into<String>, code: impl Into<String>) -> Result<(), Error> {
        let (alias, code) = (alias.into(), code.into());
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let current = self.current.load();
        current.validate(&alias)?;

        let mut next = Aliases::clone(&current);
        trace!("Registering emoji alias {alias:?} => {code:?}.");
        next.map.insert(alias, code);

        self.current.store(Arc::new(next));
        Ok(())
    }

    /// Registers many aliases under a single snapshot publication.
    ///
    /// Each entry is validated exactly as [`AliasTable::insert`] would, against the table
    /// including the entries accepted before it; rejected entries are returned in order.
    pub fn insert_all<A, C>(&self, entries: impl IntoIterator<Item = (A, C)>) -> Vec<Error>
    where
        A: Into<String>,
        C: Into<String>,
    {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let mut next = Aliases::clone(&self.current.load());
        let mut rejected = Vec::new();

        for (alias, code) in entries {
            let alias = alias.into();
            match next.validate(&alias) {
                Ok(()) => {
                    next.map.insert(alias, code.into());
                }
                Err(e) => rejected.push(e),
            }
        }

        self.current.store(Arc::new(next));
        rejected
    }

    /// A read-only snapshot of every registered alias.
    pub fn list(&self) -> Arc<Aliases> {
        self.snapshot()
    }

    /// Replaces every alias in `text` with its emoji. Safe to call concurrently.
    pub fn scan(&self, text: &str) -> String {
        Scanner::new(self).scan(text)
    }

    /// A reusable scanner bound to this table.
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(self)
    }
}

impl<A, C> FromIterator<(A, C)> for AliasTable
where
    A: Into<String>,
    C: Into<String>,
{
    /// Builds a table from `(alias, code)` pairs. Invalid and duplicate entries are skipped;
    /// the first registration of an alias wins.
    fn from_iter<T: IntoIterator<Item = (A, C)>>(iter: T) -> Self {
        let table = Self::new();

        for e in table.insert_all(iter) {
            debug!("Skipped alias while building table: {e}");
        }

        table
    }
}
