//! Sparse, lazily-populated multi-dimensional histogram collections
//!
//! This crate re-exports the workspace:
//!
//! - [`types`]: bin identifiers, composite keys, coordinates and errors
//! - [`dimension`]: sorted-edge, overlapping-range and region dimensions
//! - [`histogram`]: the collection itself
//!
//! # Example
//!
//! ```rust
//! use histogram_collections::prelude::*;
//!
//! let energy = Dimension::sorted(vec![0.0, 10.0, 20.0]).unwrap();
//! let windows = Dimension::overlapping(vec![(0.0, 2.5), (1.5, 5.0)]);
//! let mut hists = HistogramCollection::new(vec![energy, windows], Vec::<f64>::new).unwrap();
//!
//! hists.get([15.0, 0.5]).unwrap().push(15.0);
//! hists.fill_with([15.0, 2.0], |h| h.push(15.0)).unwrap();
//!
//! assert_eq!(hists.shape(), vec![3, 2]);
//! assert_eq!(hists.num_histograms(), 2);
//! ```

pub use collections_core as types;
pub use collections_dimension as dimension;
pub use collections_histogram as histogram;

pub use collections_core::{BinId, CompositeKey, Coordinates, Error, Result};
pub use collections_dimension::{
    Binning, Dimension, DimensionSpec, OverlappingRanges, RegionDimension, RegionRegistry,
    RegionTable, SortedEdges,
};
pub use collections_histogram::HistogramCollection;
#[cfg(feature = "concurrent")]
pub use collections_histogram::ConcurrentHistogramCollection;

/// Commonly used types
pub mod prelude {
    pub use collections_core::{BinId, CompositeKey, Coordinates, Error, Result};
    pub use collections_dimension::{Binning, Dimension, RegionRegistry, RegionTable};
    pub use collections_histogram::HistogramCollection;
    #[cfg(feature = "concurrent")]
    pub use collections_histogram::ConcurrentHistogramCollection;
}
