//! Dimension over sorted bin edges

use std::cmp::Ordering;

use collections_core::{BinId, Error, Result};

use crate::traits::Binning;

/// Ordered bins defined by ascending edges
///
/// Bin `i` covers `[edges[i], edges[i + 1])`. Values below the first edge
/// resolve to `underflow`; values at or above the last edge resolve to
/// `overflow`. Exactly one identifier is produced per value.
///
/// The reported [`size`](Binning::size) is the number of edges, not the
/// number of intervals between them.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedEdges<T = f64> {
    edges: Vec<T>,
}

impl<T: PartialOrd> SortedEdges<T> {
    /// Create a dimension from bin edges in any order
    ///
    /// Edges are sorted; duplicates are kept. An empty edge list, or an edge
    /// that is not comparable with itself (NaN), is rejected.
    pub fn new(edges: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut edges: Vec<T> = edges.into_iter().collect();
        if edges.is_empty() {
            return Err(Error::invalid_config("sorted dimension needs at least one bin edge"));
        }
        if edges.iter().any(|e| e.partial_cmp(e).is_none()) {
            return Err(Error::invalid_config("sorted dimension edges must be comparable (no NaN)"));
        }
        edges.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        Ok(Self { edges })
    }

    /// Get the sorted edges
    pub fn edges(&self) -> &[T] {
        &self.edges
    }

    /// Resolve a value to its single bin
    pub fn find_bin(&self, value: &T) -> BinId {
        let first = &self.edges[0];
        let last = &self.edges[self.edges.len() - 1];

        match value.partial_cmp(first) {
            None => return BinId::Overflow,
            Some(Ordering::Less) => return BinId::Underflow,
            _ => {}
        }
        if value >= last {
            return BinId::Overflow;
        }

        // Rightmost edge <= value; at least edges[0] qualifies here
        let upper = self.edges.partition_point(|edge| edge <= value);
        BinId::Index(upper - 1)
    }
}

impl<T: PartialOrd> Binning<T> for SortedEdges<T> {
    fn size(&self) -> usize {
        self.edges.len()
    }

    fn resolve(&self, value: &T) -> Vec<BinId> {
        vec![self.find_bin(value)]
    }
}
