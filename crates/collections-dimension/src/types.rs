//! The closed set of dimension variants

use std::sync::Arc;

use collections_core::{BinId, Result};

use crate::overlapping::OverlappingRanges;
use crate::region::{RegionDimension, RegionTable};
use crate::sorted::SortedEdges;
use crate::traits::Binning;

/// A classification axis of a histogram collection
#[derive(Debug, Clone)]
pub enum Dimension<T = f64> {
    /// Ordered, non-overlapping bins between sorted edges
    Sorted(SortedEdges<T>),
    /// Ranges that may overlap, producing fan-out
    Overlapping(OverlappingRanges<T>),
    /// Named regions from an external predicate table
    Region(RegionDimension<T>),
}

impl<T: PartialOrd> Dimension<T> {
    /// Sorted-edge dimension
    pub fn sorted(edges: impl IntoIterator<Item = T>) -> Result<Self> {
        Ok(Dimension::Sorted(SortedEdges::new(edges)?))
    }

    /// Overlapping-range dimension
    pub fn overlapping(ranges: impl IntoIterator<Item = (T, T)>) -> Self {
        Dimension::Overlapping(OverlappingRanges::new(ranges))
    }

    /// Region-predicate dimension over a shared table
    pub fn region(table: Arc<RegionTable<T>>) -> Self {
        Dimension::Region(RegionDimension::new(table))
    }

    /// Short name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Dimension::Sorted(_) => "sorted",
            Dimension::Overlapping(_) => "overlapping",
            Dimension::Region(_) => "region",
        }
    }

    /// True if a single value can resolve to more than one bin
    pub fn may_fan_out(&self) -> bool {
        !matches!(self, Dimension::Sorted(_))
    }
}

impl<T: PartialOrd> Binning<T> for Dimension<T> {
    fn size(&self) -> usize {
        match self {
            Dimension::Sorted(dim) => dim.size(),
            Dimension::Overlapping(dim) => dim.size(),
            Dimension::Region(dim) => dim.size(),
        }
    }

    fn resolve(&self, value: &T) -> Vec<BinId> {
        match self {
            Dimension::Sorted(dim) => dim.resolve(value),
            Dimension::Overlapping(dim) => dim.resolve(value),
            Dimension::Region(dim) => dim.resolve(value),
        }
    }
}

impl<T> From<SortedEdges<T>> for Dimension<T> {
    fn from(dim: SortedEdges<T>) -> Self {
        Dimension::Sorted(dim)
    }
}

impl<T> From<OverlappingRanges<T>> for Dimension<T> {
    fn from(dim: OverlappingRanges<T>) -> Self {
        Dimension::Overlapping(dim)
    }
}

impl<T> From<RegionDimension<T>> for Dimension<T> {
    fn from(dim: RegionDimension<T>) -> Self {
        Dimension::Region(dim)
    }
}
