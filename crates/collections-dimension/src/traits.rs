//! Core traits for binning dimensions

use collections_core::BinId;

/// A single classification axis mapping a value to bin identifiers
pub trait Binning<T> {
    /// Number of bins this dimension reports
    fn size(&self) -> usize;

    /// Resolve a value to the identifiers of every bin it belongs to
    ///
    /// Out-of-range values are represented by sentinel identifiers rather
    /// than errors. The order of the returned identifiers is significant:
    /// collections preserve it when building composite keys.
    fn resolve(&self, value: &T) -> Vec<BinId>;
}
