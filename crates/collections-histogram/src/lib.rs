//! Sparse, lazily-populated collections of histograms
//!
//! A [`HistogramCollection`] organizes many independently accumulated
//! histograms along one or more classification dimensions. A coordinate (one
//! value per dimension) is resolved by every dimension, the per-dimension
//! results are expanded into composite keys, and the histogram at each key is
//! looked up or created on first use with a caller-supplied factory.
//!
//! The histogram type is opaque to the collection: anything with a
//! zero-argument constructor will do.
//!
//! # Examples
//!
//! ## Reading and writing single bins
//!
//! ```rust
//! use collections_dimension::Dimension;
//! use collections_histogram::HistogramCollection;
//!
//! let energy = Dimension::sorted(vec![0.0, 10.0, 20.0]).unwrap();
//! let zone = Dimension::sorted(vec![0.0, 1.5, 3.0]).unwrap();
//! let mut hists = HistogramCollection::new(vec![energy, zone], || 0u64).unwrap();
//!
//! *hists.get([5.0, 0.3]).unwrap() += 1;
//! *hists.get([5.0, 2.0]).unwrap() += 1;
//!
//! assert_eq!(hists.shape(), vec![3, 3]);
//! assert_eq!(hists.num_histograms(), 2);
//! ```
//!
//! ## Overlapping bins
//!
//! Overlapping dimensions can place one coordinate in several histograms.
//! Reads of such a coordinate are rejected; writes fan out.
//!
//! ```rust
//! use collections_core::Error;
//! use collections_dimension::Dimension;
//! use collections_histogram::HistogramCollection;
//!
//! let windows = Dimension::overlapping(vec![(0.0, 10.0), (5.0, 15.0)]);
//! let mut hists = HistogramCollection::new(windows, || 0u64).unwrap();
//!
//! assert!(matches!(hists.get(7.0), Err(Error::UnsupportedOperation(_))));
//! assert_eq!(hists.fill_with(7.0, |h| *h += 1).unwrap(), 2);
//! ```
//!
//! ## Dimensions from configuration
//!
//! ```rust
//! use collections_dimension::{RegionRegistry, RegionTable};
//! use collections_histogram::HistogramCollection;
//!
//! let mut registry = RegionRegistry::new();
//! registry.register(
//!     "eta",
//!     RegionTable::new()
//!         .with_region("barrel", |eta: &f64| eta.abs() < 1.48)
//!         .with_region("endcap", |eta: &f64| eta.abs() >= 1.48),
//! );
//!
//! let json = r#"[{"kind": "sorted", "edges": [0, 20, 40]}, {"kind": "region", "table": "eta"}]"#;
//! let mut hists = HistogramCollection::from_specs(json, &registry, Vec::<f64>::new).unwrap();
//!
//! hists.get([25.0, 0.4]).unwrap().push(25.0);
//! assert_eq!(hists.shape(), vec![3, 2]);
//! ```

pub mod collection;
#[cfg(feature = "concurrent")]
pub mod concurrent;
pub mod keys;

// Re-export main types
pub use collection::{HistogramCollection, HistogramFactory, IntoDimensions};
#[cfg(feature = "concurrent")]
pub use concurrent::{ConcurrentHistogramCollection, SharedHistogramFactory};
pub use keys::{flatten_bins, resolve_keys};

pub use collections_core::{BinId, CompositeKey, Coordinates, Error, Result};
