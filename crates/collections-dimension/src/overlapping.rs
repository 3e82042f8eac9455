//! Dimension over possibly-overlapping ranges

use collections_core::BinId;

use crate::traits::Binning;

/// Bins defined by half-open `[low, high)` ranges that may overlap
///
/// Ranges are kept in configuration order and need not be sorted or
/// disjoint. A value resolves to every range containing it; a value in no
/// range resolves to `[overflow]`.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlappingRanges<T = f64> {
    ranges: Vec<(T, T)>,
}

impl<T: PartialOrd> OverlappingRanges<T> {
    /// Create a dimension from `(low, high)` pairs
    ///
    /// Bounds are not validated. A range with an incomparable bound, such as
    /// NaN, never contains any value.
    pub fn new(ranges: impl IntoIterator<Item = (T, T)>) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
        }
    }

    /// Get the configured ranges
    pub fn ranges(&self) -> &[(T, T)] {
        &self.ranges
    }
}

impl<T: PartialOrd> Binning<T> for OverlappingRanges<T> {
    fn size(&self) -> usize {
        self.ranges.len()
    }

    fn resolve(&self, value: &T) -> Vec<BinId> {
        let contained_in: Vec<BinId> = self
            .ranges
            .iter()
            .enumerate()
            .filter(|(_, (low, high))| value >= low && value < high)
            .map(|(i, _)| BinId::Index(i))
            .collect();

        if contained_in.is_empty() {
            vec![BinId::Overflow]
        } else {
            contained_in
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_fan_out() {
        let dim = OverlappingRanges::new(vec![(0.0, 10.0), (5.0, 15.0)]);

        assert_eq!(dim.resolve(&7.0), vec![BinId::Index(0), BinId::Index(1)]);
        assert_eq!(dim.resolve(&2.0), vec![BinId::Index(0)]);
        assert_eq!(dim.resolve(&12.0), vec![BinId::Index(1)]);
    }

    #[test]
    fn test_no_match_is_overflow() {
        let dim = OverlappingRanges::new(vec![(0.0, 10.0), (5.0, 15.0)]);

        assert_eq!(dim.resolve(&15.0), vec![BinId::Overflow]);
        // Below every range is still overflow, there is no underflow here
        assert_eq!(dim.resolve(&-3.0), vec![BinId::Overflow]);
    }

    #[test]
    fn test_configuration_order_kept() {
        let dim = OverlappingRanges::new(vec![(10, 20), (0, 30), (15, 16)]);
        assert_eq!(
            dim.resolve(&15),
            vec![BinId::Index(0), BinId::Index(1), BinId::Index(2)]
        );
        assert_eq!(dim.size(), 3);
    }

    #[test]
    fn test_degenerate_ranges() {
        let dim = OverlappingRanges::new(vec![(5.0, 5.0), (8.0, 2.0)]);
        assert_eq!(dim.resolve(&5.0), vec![BinId::Overflow]);

        let empty = OverlappingRanges::<f64>::new(vec![]);
        assert_eq!(empty.size(), 0);
        assert_eq!(empty.resolve(&1.0), vec![BinId::Overflow]);
    }

    #[test]
    fn test_nan_bound_never_matches() {
        let dim = OverlappingRanges::new(vec![(f64::NAN, 10.0), (0.0, 5.0), (2.0, f64::NAN)]);
        assert_eq!(dim.size(), 3);

        assert_eq!(dim.resolve(&3.0), vec![BinId::Index(1)]);
        assert_eq!(dim.resolve(&7.0), vec![BinId::Overflow]);
        assert_eq!(dim.resolve(&f64::NAN), vec![BinId::Overflow]);
    }
}
