//! Route table storage
//!
//! This module provides the `RouteEntry` record and the `RouteTable` that owns
//! all registered entries, indexed by exact path and by name.

use crate::{DuplicateField, NavigationError, Result};
use std::collections::HashMap;

/// A registered mapping from a path string to a view
///
/// `K` is the opaque view-factory key chosen by the host; the router never
/// inspects it, it only hands it back on activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry<K> {
    path: String,
    name: String,
    view: K,
}

impl<K> RouteEntry<K> {
    /// Create a new route entry
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: K) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view-factory key this route activates
    #[inline]
    pub fn view(&self) -> &K {
        &self.view
    }
}

/// Ordered route table with path and name indices
///
/// Entries keep their registration order. Lookups are exact string matches:
/// `/test` and `/test/` are different paths.
#[derive(Clone, Debug)]
pub(crate) struct RouteTable<K> {
    entries: Vec<RouteEntry<K>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl<K> Default for RouteTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_path: HashMap::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<K> RouteTable<K> {
    /// Insert an entry, rejecting invalid paths and duplicate paths or names
    ///
    /// On error the table is left untouched.
    pub fn insert(&mut self, entry: RouteEntry<K>) -> Result<usize> {
        if !entry.path.starts_with('/') {
            return Err(NavigationError::InvalidPath(entry.path));
        }
        if self.by_path.contains_key(&entry.path) {
            return Err(NavigationError::DuplicateRoute {
                field: DuplicateField::Path,
                value: entry.path,
            });
        }
        if self.by_name.contains_key(&entry.name) {
            return Err(NavigationError::DuplicateRoute {
                field: DuplicateField::Name,
                value: entry.name,
            });
        }

        let index = self.entries.len();
        self.by_path.insert(entry.path.clone(), index);
        self.by_name.insert(entry.name.clone(), index);
        self.entries.push(entry);
        Ok(index)
    }

    #[inline]
    pub fn index_of_path(&self, path: &str) -> Option<usize> {
        self.by_path.get(path).copied()
    }

    #[inline]
    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&RouteEntry<K>> {
        self.entries.get(index)
    }

    #[inline]
    pub fn entries(&self) -> &[RouteEntry<K>] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
