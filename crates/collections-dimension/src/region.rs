//! Dimension over named region predicates
//!
//! Region tables are owned by the embedding application (for example a
//! detector geometry description) and shared with dimensions through an
//! [`Arc`]. A dimension only iterates and evaluates the table.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use collections_core::{BinId, Error, Result};

use crate::traits::Binning;

/// Membership predicate for a single region
pub type RegionPredicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Ordered mapping from region name to membership predicate
///
/// Regions are evaluated in registration order.
pub struct RegionTable<T = f64> {
    regions: Vec<(Arc<str>, RegionPredicate<T>)>,
}

impl<T> RegionTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self { regions: Vec::new() }
    }

    /// Add a region, builder style
    pub fn with_region<F>(mut self, name: &str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.insert(name, predicate);
        self
    }

    /// Add a region, replacing the predicate in place if the name exists
    pub fn insert<F>(&mut self, name: &str, predicate: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let predicate: RegionPredicate<T> = Box::new(predicate);
        match self.regions.iter_mut().find(|(existing, _)| &**existing == name) {
            Some(slot) => slot.1 = predicate,
            None => self.regions.push((Arc::from(name), predicate)),
        }
    }

    /// Number of regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if the table has no regions
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Region names in evaluation order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|(name, _)| &**name)
    }

    /// Check whether a named region accepts a value
    pub fn contains(&self, name: &str, value: &T) -> Option<bool> {
        self.regions
            .iter()
            .find(|(existing, _)| &**existing == name)
            .map(|(_, predicate)| predicate(value))
    }

    /// Identifiers of every region accepting a value
    pub fn matching(&self, value: &T) -> Vec<BinId> {
        self.regions
            .iter()
            .filter(|(_, predicate)| predicate(value))
            .map(|(name, _)| BinId::Region(Arc::clone(name)))
            .collect()
    }
}

impl<T> Default for RegionTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RegionTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionTable")
            .field("regions", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// Bins defined by an externally owned region table
///
/// A value resolves to the names of every region whose predicate accepts it,
/// in table order. There is no sentinel: a value in no region resolves to an
/// empty list.
#[derive(Debug)]
pub struct RegionDimension<T = f64> {
    table: Arc<RegionTable<T>>,
}

impl<T> RegionDimension<T> {
    /// Create a dimension over a shared region table
    pub fn new(table: Arc<RegionTable<T>>) -> Self {
        Self { table }
    }

    /// Get the underlying table
    pub fn table(&self) -> &RegionTable<T> {
        &self.table
    }
}

impl<T> Clone for RegionDimension<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T> Binning<T> for RegionDimension<T> {
    fn size(&self) -> usize {
        self.table.len()
    }

    fn resolve(&self, value: &T) -> Vec<BinId> {
        self.table.matching(value)
    }
}

/// Named region tables available to dimension specifications
pub struct RegionRegistry<T = f64> {
    tables: HashMap<String, Arc<RegionTable<T>>>,
}

impl<T> RegionRegistry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Register a table under a name, returning the shared handle
    pub fn register(&mut self, name: &str, table: RegionTable<T>) -> Arc<RegionTable<T>> {
        let table = Arc::new(table);
        self.tables.insert(name.to_string(), Arc::clone(&table));
        table
    }

    /// Register an already shared table
    pub fn register_shared(&mut self, name: &str, table: Arc<RegionTable<T>>) {
        self.tables.insert(name.to_string(), table);
    }

    /// Look up a table by name
    pub fn get(&self, name: &str) -> Result<Arc<RegionTable<T>>> {
        self.tables.get(name).cloned().ok_or_else(|| {
            Error::InvalidConfiguration(format!("no region table registered as `{name}`"))
        })
    }

    /// Number of registered tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if no tables are registered
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<T> Default for RegionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RegionRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.tables.keys().collect();
        names.sort();
        f.debug_struct("RegionRegistry").field("tables", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eta_regions() -> RegionTable<f64> {
        RegionTable::new()
            .with_region("central", |eta: &f64| eta.abs() <= 3.0)
            .with_region("barrel", |eta: &f64| eta.abs() < 1.48)
            .with_region("forward", |eta: &f64| eta.abs() > 3.0)
    }

    #[test]
    fn test_region_resolution() {
        let dim = RegionDimension::new(Arc::new(eta_regions()));

        assert_eq!(dim.size(), 3);
        assert_eq!(
            dim.resolve(&0.5),
            vec![BinId::from("central"), BinId::from("barrel")]
        );
        assert_eq!(dim.resolve(&2.0), vec![BinId::from("central")]);
        assert_eq!(dim.resolve(&-4.0), vec![BinId::from("forward")]);
    }

    #[test]
    fn test_no_region_is_empty() {
        let table = RegionTable::new().with_region("positive", |x: &f64| *x > 0.0);
        let dim = RegionDimension::new(Arc::new(table));
        assert!(dim.resolve(&-1.0).is_empty());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut table = eta_regions();
        table.insert("barrel", |eta: &f64| eta.abs() < 0.5);

        assert_eq!(table.len(), 3);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["central", "barrel", "forward"]);
        assert_eq!(table.contains("barrel", &1.0), Some(false));
        assert_eq!(table.contains("missing", &1.0), None);
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = RegionRegistry::new();
        let shared = registry.register("eta", eta_regions());

        let found = registry.get("eta").unwrap();
        assert!(Arc::ptr_eq(&shared, &found));
        assert!(matches!(
            registry.get("phi"),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_non_numeric_regions() {
        let table = RegionTable::new()
            .with_region("short", |s: &&str| s.len() < 4)
            .with_region("vowel", |s: &&str| s.starts_with(['a', 'e', 'i', 'o', 'u']));
        let dim = RegionDimension::new(Arc::new(table));

        assert_eq!(
            dim.resolve(&"ant"),
            vec![BinId::from("short"), BinId::from("vowel")]
        );
    }
}
