//! Thread-safe histogram collection
//!
//! Same key resolution as [`HistogramCollection`](crate::HistogramCollection),
//! but the sparse map is sharded. Get-or-create runs under the shard lock of
//! the key, so concurrent first access constructs each histogram once.
//!
//! # Deadlocks
//!
//! The closures given to [`with`](ConcurrentHistogramCollection::with) and
//! [`fill_with`](ConcurrentHistogramCollection::fill_with) run while that
//! shard lock is held. A closure must not call any method of the same
//! collection that touches the stored histograms (`with`, `set`,
//! `fill_with`, `num_histograms`, `contains_key`). Methods that only read
//! the dimensions (`resolve_keys`, `shape`, `len`, `ndim`, `dimensions`)
//! are safe to call.

use std::collections::BTreeMap;
use std::fmt;

use collections_core::{CompositeKey, Coordinates, Result};
use collections_dimension::{Binning, Dimension};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::collection::IntoDimensions;
use crate::keys::{resolve_keys, single_key, validate_dimensions};

/// Zero-argument constructor shared between threads
pub type SharedHistogramFactory<H> = Box<dyn Fn() -> H + Send + Sync>;

/// Histogram collection safe to share between threads
pub struct ConcurrentHistogramCollection<H, T = f64> {
    dimensions: Vec<Dimension<T>>,
    histograms: DashMap<CompositeKey, H>,
    factory: SharedHistogramFactory<H>,
}

#[allow(clippy::len_without_is_empty)]
impl<H, T: PartialOrd> ConcurrentHistogramCollection<H, T> {
    /// Create a collection over one or more dimensions
    pub fn new<D, F>(dimensions: D, factory: F) -> Result<Self>
    where
        D: IntoDimensions<T>,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let dimensions = dimensions.into_dimensions();
        validate_dimensions(&dimensions)?;

        let collection = Self {
            dimensions,
            histograms: DashMap::new(),
            factory: Box::new(factory),
        };
        debug!(shape = ?collection.shape(), "created concurrent histogram collection");
        Ok(collection)
    }

    /// Resolve coordinates to every composite key they address
    pub fn resolve_keys(&self, coordinates: impl Into<Coordinates<T>>) -> Result<Vec<CompositeKey>> {
        resolve_keys(&self.dimensions, coordinates.into())
    }

    /// Run `f` on the histogram for a coordinate, creating it if absent
    ///
    /// Same single-key rule as [`HistogramCollection::get`](crate::HistogramCollection::get).
    ///
    /// # Deadlocks
    ///
    /// `f` runs under the shard lock of the key and must not access the
    /// stored histograms of this collection. See the [module docs](self).
    pub fn with<R, F>(&self, coordinates: impl Into<Coordinates<T>>, f: F) -> Result<R>
    where
        F: FnOnce(&mut H) -> R,
    {
        let key = single_key(self.resolve_keys(coordinates)?, "with")?;
        Ok(self.with_key(key, f))
    }

    /// Store a histogram at every key a coordinate resolves to
    pub fn set(&self, coordinates: impl Into<Coordinates<T>>, value: H) -> Result<usize>
    where
        H: Clone,
    {
        let mut keys = self.resolve_keys(coordinates)?;
        let written = keys.len();

        if let Some(last) = keys.pop() {
            for key in keys {
                self.histograms.insert(key, value.clone());
            }
            self.histograms.insert(last, value);
        }
        Ok(written)
    }

    /// Apply `f` to the histogram at every key a coordinate resolves to
    ///
    /// # Deadlocks
    ///
    /// Same restriction as [`with`](Self::with): `f` must not access the
    /// stored histograms of this collection.
    pub fn fill_with<F>(&self, coordinates: impl Into<Coordinates<T>>, mut f: F) -> Result<usize>
    where
        F: FnMut(&mut H),
    {
        let keys = self.resolve_keys(coordinates)?;
        let visited = keys.len();
        for key in keys {
            self.with_key(key, &mut f);
        }
        Ok(visited)
    }

    /// Bin count of every dimension, in dimension order
    pub fn shape(&self) -> Vec<usize> {
        self.dimensions.iter().map(|dim| dim.size()).collect()
    }

    /// Bin count of the first dimension
    pub fn len(&self) -> usize {
        self.dimensions[0].size()
    }
}

impl<H, T> ConcurrentHistogramCollection<H, T> {
    fn with_key<R, F>(&self, key: CompositeKey, f: F) -> R
    where
        F: FnOnce(&mut H) -> R,
    {
        let mut entry = match self.histograms.entry(key) {
            Entry::Occupied(entry) => entry.into_ref(),
            Entry::Vacant(entry) => {
                debug!(key = %entry.key(), "creating histogram");
                entry.insert((self.factory)())
            }
        };
        f(entry.value_mut())
    }

    /// Number of dimensions
    pub fn ndim(&self) -> usize {
        self.dimensions.len()
    }

    /// Get the dimensions
    pub fn dimensions(&self) -> &[Dimension<T>] {
        &self.dimensions
    }

    /// Number of histograms created or stored so far
    pub fn num_histograms(&self) -> usize {
        self.histograms.len()
    }

    /// Check if a histogram exists at a key
    pub fn contains_key(&self, key: &CompositeKey) -> bool {
        self.histograms.contains_key(key)
    }

    /// Consume the collection, returning the stored histograms in key order
    pub fn into_histograms(self) -> BTreeMap<CompositeKey, H> {
        self.histograms.into_iter().collect()
    }
}

impl<H, T: fmt::Debug> fmt::Debug for ConcurrentHistogramCollection<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentHistogramCollection")
            .field("dimensions", &self.dimensions)
            .field("num_histograms", &self.histograms.len())
            .finish_non_exhaustive()
    }
}
