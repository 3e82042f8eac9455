//! Binning dimensions for histogram collections
//!
//! A dimension is one classification axis. Given a value it resolves the
//! identifiers of the bins that value belongs to. Three variants exist:
//!
//! - [`SortedEdges`]: ordered right-open bins with `underflow`/`overflow`
//!   sentinels, exactly one identifier per value
//! - [`OverlappingRanges`]: `[low, high)` ranges that may overlap; a value can
//!   land in several at once, or in none (`overflow`)
//! - [`RegionDimension`]: named predicates from a shared [`RegionTable`]
//!
//! They are gathered in the closed [`Dimension`] enum, which is what a
//! collection holds. Dimensions can also be declared as JSON through
//! [`DimensionSpec`].
//!
//! # Example
//!
//! ```rust
//! use collections_core::BinId;
//! use collections_dimension::{Binning, Dimension};
//!
//! let energy = Dimension::sorted(vec![0.0, 10.0, 20.0]).unwrap();
//! assert_eq!(energy.resolve(&15.0), vec![BinId::Index(1)]);
//! assert_eq!(energy.resolve(&-1.0), vec![BinId::Underflow]);
//!
//! let windows = Dimension::overlapping(vec![(0.0, 10.0), (5.0, 15.0)]);
//! assert_eq!(windows.resolve(&7.0), vec![BinId::Index(0), BinId::Index(1)]);
//! ```

pub mod config;
pub mod overlapping;
pub mod region;
pub mod sorted;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use config::{build_dimensions, parse_dimensions, DimensionSpec};
pub use overlapping::OverlappingRanges;
pub use region::{RegionDimension, RegionPredicate, RegionRegistry, RegionTable};
pub use sorted::SortedEdges;
pub use traits::Binning;
pub use types::Dimension;

pub use collections_core::{BinId, Error, Result};
