//! Sparse collection of histograms addressed by composite keys

use std::collections::btree_map::{self, BTreeMap, Entry};
use std::fmt;

use collections_core::{CompositeKey, Coordinates, Result};
use collections_dimension::{build_dimensions, Binning, Dimension, RegionRegistry};
use tracing::{debug, instrument};

use crate::keys::{resolve_keys, single_key, validate_dimensions};

/// Zero-argument constructor for new histograms
pub type HistogramFactory<H> = Box<dyn Fn() -> H>;

/// Anything a collection can take as its dimension list
///
/// A single [`Dimension`] is treated as a one-element list.
pub trait IntoDimensions<T> {
    /// Normalize to an ordered list of dimensions
    fn into_dimensions(self) -> Vec<Dimension<T>>;
}

impl<T> IntoDimensions<T> for Dimension<T> {
    fn into_dimensions(self) -> Vec<Dimension<T>> {
        vec![self]
    }
}

impl<T> IntoDimensions<T> for Vec<Dimension<T>> {
    fn into_dimensions(self) -> Vec<Dimension<T>> {
        self
    }
}

impl<T, const N: usize> IntoDimensions<T> for [Dimension<T>; N] {
    fn into_dimensions(self) -> Vec<Dimension<T>> {
        Vec::from(self)
    }
}

/// Multi-dimensional, sparse, lazily-populated collection of histograms
///
/// Each histogram lives at a [`CompositeKey`] holding one bin identifier per
/// dimension. Histograms are created by the factory the first time their key
/// is read and are never removed.
///
/// # Example
///
/// ```rust
/// use collections_dimension::Dimension;
/// use collections_histogram::HistogramCollection;
///
/// let energy = Dimension::sorted(vec![0.0, 10.0, 20.0]).unwrap();
/// let mut hists = HistogramCollection::new(energy, Vec::<f64>::new).unwrap();
///
/// hists.get(5.0).unwrap().push(5.0);
/// hists.get(25.0).unwrap().push(25.0);
///
/// assert_eq!(hists.num_histograms(), 2);
/// assert_eq!(hists.get(7.5).unwrap(), &vec![5.0]);
/// ```
pub struct HistogramCollection<H, T = f64> {
    dimensions: Vec<Dimension<T>>,
    histograms: BTreeMap<CompositeKey, H>,
    factory: HistogramFactory<H>,
}

#[allow(clippy::len_without_is_empty)]
impl<H, T: PartialOrd> HistogramCollection<H, T> {
    /// Create a collection over one or more dimensions
    ///
    /// Fails with [`Error::InvalidConfiguration`](collections_core::Error::InvalidConfiguration)
    /// if no dimension is given.
    pub fn new<D, F>(dimensions: D, factory: F) -> Result<Self>
    where
        D: IntoDimensions<T>,
        F: Fn() -> H + 'static,
    {
        let dimensions = dimensions.into_dimensions();
        validate_dimensions(&dimensions)?;

        let collection = Self {
            dimensions,
            histograms: BTreeMap::new(),
            factory: Box::new(factory),
        };
        debug!(shape = ?collection.shape(), "created histogram collection");
        Ok(collection)
    }

    /// Resolve coordinates to every composite key they address
    pub fn resolve_keys(&self, coordinates: impl Into<Coordinates<T>>) -> Result<Vec<CompositeKey>> {
        resolve_keys(&self.dimensions, coordinates.into())
    }

    /// Get the histogram for a coordinate, creating it if absent
    ///
    /// Only defined when the coordinate resolves to exactly one key. Fan-out
    /// from overlapping or region dimensions is an
    /// [`Error::UnsupportedOperation`](collections_core::Error::UnsupportedOperation);
    /// use [`set`](Self::set) or [`fill_with`](Self::fill_with) for those.
    ///
    /// A bare value converts to a one-dimensional coordinate only for the
    /// primitive numeric types. For any other coordinate type, such as
    /// `String` on a region dimension, pass a one-element array or
    /// [`Coordinates::Scalar`].
    pub fn get(&mut self, coordinates: impl Into<Coordinates<T>>) -> Result<&mut H> {
        let key = single_key(self.resolve_keys(coordinates)?, "get")?;
        Ok(self.get_or_create(key))
    }

    /// Look up the histogram for a coordinate without creating it
    pub fn peek(&self, coordinates: impl Into<Coordinates<T>>) -> Result<Option<&H>> {
        let key = single_key(self.resolve_keys(coordinates)?, "peek")?;
        Ok(self.histograms.get(&key))
    }

    /// Store a histogram at every key a coordinate resolves to
    ///
    /// Prior entries are overwritten. Returns the number of slots written.
    pub fn set(&mut self, coordinates: impl Into<Coordinates<T>>, value: H) -> Result<usize>
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
    /// Absent histograms are created first. Returns the number of
    /// histograms visited.
    pub fn fill_with<F>(&mut self, coordinates: impl Into<Coordinates<T>>, mut f: F) -> Result<usize>
    where
        F: FnMut(&mut H),
    {
        let keys = self.resolve_keys(coordinates)?;
        let visited = keys.len();
        for key in keys {
            f(self.get_or_create(key));
        }
        Ok(visited)
    }

    /// Bin count of every dimension, in dimension order
    pub fn shape(&self) -> Vec<usize> {
        self.dimensions.iter().map(|dim| dim.size()).collect()
    }

    /// Bin count of the first dimension
    ///
    /// This is not the number of dimensions (see [`ndim`](Self::ndim)) nor
    /// the number of stored histograms (see
    /// [`num_histograms`](Self::num_histograms)).
    pub fn len(&self) -> usize {
        self.dimensions[0].size()
    }
}

impl<H, T> HistogramCollection<H, T> {
    fn get_or_create(&mut self, key: CompositeKey) -> &mut H {
        match self.histograms.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(key = %entry.key(), "creating histogram");
                entry.insert((self.factory)())
            }
        }
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

    /// Look up a histogram directly by key
    pub fn get_by_key(&self, key: &CompositeKey) -> Option<&H> {
        self.histograms.get(key)
    }

    /// Iterate over stored histograms in key order
    pub fn iter(&self) -> btree_map::Iter<'_, CompositeKey, H> {
        self.histograms.iter()
    }

    /// Iterate mutably over stored histograms in key order
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, CompositeKey, H> {
        self.histograms.iter_mut()
    }

    /// Keys of stored histograms in order
    pub fn keys(&self) -> btree_map::Keys<'_, CompositeKey, H> {
        self.histograms.keys()
    }

    /// Consume the collection, returning the stored histograms
    pub fn into_histograms(self) -> BTreeMap<CompositeKey, H> {
        self.histograms
    }
}

impl<H> HistogramCollection<H, f64> {
    /// Create a collection from a JSON dimension specification
    ///
    /// See [`collections_dimension::config`] for the format.
    #[instrument(skip_all)]
    pub fn from_specs<F>(json: &str, registry: &RegionRegistry<f64>, factory: F) -> Result<Self>
    where
        F: Fn() -> H + 'static,
    {
        let dimensions = build_dimensions(json, registry)?;
        Self::new(dimensions, factory)
    }
}

impl<'a, H, T> IntoIterator for &'a HistogramCollection<H, T> {
    type Item = (&'a CompositeKey, &'a H);
    type IntoIter = btree_map::Iter<'a, CompositeKey, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.histograms.iter()
    }
}

impl<H: fmt::Debug, T: fmt::Debug> fmt::Debug for HistogramCollection<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistogramCollection")
            .field("dimensions", &self.dimensions)
            .field("histograms", &self.histograms)
            .finish_non_exhaustive()
    }
}
