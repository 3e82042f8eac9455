//! Bin identifiers and composite keys
//!
//! A [`BinId`] names one bin along a single dimension. A [`CompositeKey`]
//! holds one identifier per dimension and addresses exactly one histogram
//! slot in a collection.

use std::fmt;
use std::sync::Arc;

/// Identifier of a single bin along one dimension
///
/// The derived ordering places `Underflow` before every index and
/// `Overflow` after every index, so iterating a sorted map of keys walks
/// each numeric axis from low to high. Named regions sort after `Overflow`,
/// by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BinId {
    /// Value lies below the first bin edge
    Underflow,
    /// Integer bin index
    Index(usize),
    /// Value lies at or above the last edge, or in no configured range
    Overflow,
    /// Named region accepted by a region predicate
    Region(Arc<str>),
}

impl BinId {
    /// Integer index, if this is an ordinary bin
    pub fn index(&self) -> Option<usize> {
        match self {
            BinId::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// Region name, if this bin came from a region predicate
    pub fn region(&self) -> Option<&str> {
        match self {
            BinId::Region(name) => Some(&**name),
            _ => None,
        }
    }

    /// True for the `overflow` and `underflow` sentinels
    pub fn is_sentinel(&self) -> bool {
        matches!(self, BinId::Overflow | BinId::Underflow)
    }
}

impl From<usize> for BinId {
    fn from(index: usize) -> Self {
        BinId::Index(index)
    }
}

impl From<&str> for BinId {
    fn from(name: &str) -> Self {
        BinId::Region(Arc::from(name))
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinId::Underflow => write!(f, "underflow"),
            BinId::Index(i) => write!(f, "{i}"),
            BinId::Overflow => write!(f, "overflow"),
            BinId::Region(name) => write!(f, "{name}"),
        }
    }
}

/// Fixed-length tuple of bin identifiers, one per dimension
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CompositeKey(Vec<BinId>);

impl CompositeKey {
    /// Create a key from per-dimension identifiers
    pub fn new(bins: Vec<BinId>) -> Self {
        Self(bins)
    }

    /// Number of dimensions this key spans
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the key spans no dimensions
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the identifiers in dimension order
    pub fn bins(&self) -> &[BinId] {
        &self.0
    }

    /// Identifier along a single dimension
    pub fn get(&self, dimension: usize) -> Option<&BinId> {
        self.0.get(dimension)
    }

    /// Extend the key by one more dimension
    pub fn push(&mut self, bin: BinId) {
        self.0.push(bin);
    }

    /// Consume the key, returning the identifiers
    pub fn into_bins(self) -> Vec<BinId> {
        self.0
    }
}

impl From<Vec<BinId>> for CompositeKey {
    fn from(bins: Vec<BinId>) -> Self {
        Self(bins)
    }
}

impl<const N: usize> From<[BinId; N]> for CompositeKey {
    fn from(bins: [BinId; N]) -> Self {
        Self(bins.to_vec())
    }
}

impl FromIterator<BinId> for CompositeKey {
    fn from_iter<I: IntoIterator<Item = BinId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, bin) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{bin}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_display() {
        assert_eq!(BinId::Index(3).to_string(), "3");
        assert_eq!(BinId::Overflow.to_string(), "overflow");
        assert_eq!(BinId::Underflow.to_string(), "underflow");
        assert_eq!(BinId::from("barrel").to_string(), "barrel");
    }

    #[test]
    fn test_bin_ordering() {
        let mut bins = vec![BinId::Overflow, BinId::Index(2), BinId::Underflow, BinId::Index(0)];
        bins.sort();
        assert_eq!(
            bins,
            vec![BinId::Underflow, BinId::Index(0), BinId::Index(2), BinId::Overflow]
        );
    }

    #[test]
    fn test_region_sorts_after_overflow() {
        let mut bins = vec![
            BinId::from("endcap"),
            BinId::Overflow,
            BinId::from("barrel"),
            BinId::Index(7),
        ];
        bins.sort();
        assert_eq!(
            bins,
            vec![
                BinId::Index(7),
                BinId::Overflow,
                BinId::from("barrel"),
                BinId::from("endcap"),
            ]
        );
    }

    #[test]
    fn test_bin_accessors() {
        assert_eq!(BinId::Index(4).index(), Some(4));
        assert_eq!(BinId::Overflow.index(), None);
        assert_eq!(BinId::from("endcap").region(), Some("endcap"));
        assert!(BinId::Underflow.is_sentinel());
        assert!(!BinId::Index(0).is_sentinel());
    }

    #[test]
    fn test_composite_key_display() {
        let key = CompositeKey::from([BinId::Index(0)]);
        assert_eq!(key.to_string(), "(0,)");

        let key: CompositeKey = vec![BinId::Index(1), BinId::Overflow].into();
        assert_eq!(key.to_string(), "(1, overflow)");
        assert_eq!(key.len(), 2);
        assert_eq!(key.get(1), Some(&BinId::Overflow));
    }
}
