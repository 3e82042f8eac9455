//! Composite key resolution
//!
//! Each dimension resolves its coordinate to an ordered list of bin
//! identifiers. The per-dimension lists are expanded into every composite key
//! (the Cartesian product), built axis by axis so the resolution order of
//! each axis is preserved in the final key order.

use collections_core::{BinId, CompositeKey, Coordinates, Error, Result};
use collections_dimension::{Binning, Dimension};
use tracing::trace;

/// Expand per-dimension bin lists into every composite key
///
/// An empty list on any axis leaves no keys at all.
pub fn flatten_bins(per_dimension: Vec<Vec<BinId>>) -> Vec<CompositeKey> {
    let arity = per_dimension.len();
    let mut keys = vec![CompositeKey::new(Vec::with_capacity(arity))];

    for bins in per_dimension {
        let mut expanded = Vec::with_capacity(keys.len() * bins.len());
        for previous in &keys {
            for bin in &bins {
                let mut key = previous.clone();
                key.push(bin.clone());
                expanded.push(key);
            }
        }
        keys = expanded;
    }

    keys
}

/// Resolve coordinates against a list of dimensions
///
/// Fails with [`Error::KeyResolution`] when the number of coordinates does
/// not match the number of dimensions.
pub fn resolve_keys<T: PartialOrd>(
    dimensions: &[Dimension<T>],
    coordinates: Coordinates<T>,
) -> Result<Vec<CompositeKey>> {
    let values = coordinates.into_values(dimensions.len())?;

    let per_dimension: Vec<Vec<BinId>> = values
        .iter()
        .zip(dimensions)
        .map(|(value, dimension)| dimension.resolve(value))
        .collect();

    let keys = flatten_bins(per_dimension);
    trace!(keys = keys.len(), "resolved coordinates");
    Ok(keys)
}

/// Require exactly one composite key for a read
///
/// Fan-out (several keys) and empty resolution (a region dimension that
/// accepted nothing) are both [`Error::UnsupportedOperation`].
pub fn single_key(mut keys: Vec<CompositeKey>, operation: &str) -> Result<CompositeKey> {
    match keys.len() {
        1 => Ok(keys.remove(0)),
        0 => Err(Error::UnsupportedOperation(format!(
            "{operation} not implemented for coordinates resolving to no histogram"
        ))),
        n => Err(Error::multi_match(operation, n)),
    }
}

/// Check a dimension list is usable by a collection
pub(crate) fn validate_dimensions<T>(dimensions: &[Dimension<T>]) -> Result<()> {
    if dimensions.is_empty() {
        return Err(Error::invalid_config("histogram collection needs at least one dimension"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(indices: &[usize]) -> Vec<BinId> {
        indices.iter().map(|&i| BinId::Index(i)).collect()
    }

    #[test]
    fn test_flatten_single_axis() {
        let keys = flatten_bins(vec![ids(&[0, 1])]);
        assert_eq!(
            keys,
            vec![
                CompositeKey::from([BinId::Index(0)]),
                CompositeKey::from([BinId::Index(1)]),
            ]
        );
    }

    #[test]
    fn test_flatten_preserves_axis_order() {
        let keys = flatten_bins(vec![ids(&[0, 1]), vec![BinId::Overflow], ids(&[3, 2])]);
        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "(0, overflow, 3)",
                "(0, overflow, 2)",
                "(1, overflow, 3)",
                "(1, overflow, 2)",
            ]
        );
    }

    #[test]
    fn test_flatten_empty_axis_collapses() {
        assert!(flatten_bins(vec![ids(&[0, 1]), vec![], ids(&[4])]).is_empty());
        assert!(flatten_bins(vec![vec![], ids(&[4])]).is_empty());
    }

    #[test]
    fn test_resolve_keys_arity() {
        let dims = vec![
            Dimension::sorted(vec![0.0, 10.0]).unwrap(),
            Dimension::overlapping(vec![(0.0, 5.0)]),
        ];

        let keys = resolve_keys(&dims, Coordinates::from([3.0, 3.0])).unwrap();
        assert_eq!(keys, vec![CompositeKey::from([BinId::Index(0), BinId::Index(0)])]);

        assert!(matches!(
            resolve_keys(&dims, Coordinates::from([1.0, 2.0, 3.0])),
            Err(Error::KeyResolution { expected: 2, actual: 3, .. })
        ));
        assert!(matches!(
            resolve_keys(&dims, Coordinates::Scalar(1.0)),
            Err(Error::KeyResolution { .. })
        ));
    }

    #[test]
    fn test_single_key() {
        let one = vec![CompositeKey::from([BinId::Index(0)])];
        assert!(single_key(one, "get").is_ok());

        let two = vec![
            CompositeKey::from([BinId::Index(0)]),
            CompositeKey::from([BinId::Index(1)]),
        ];
        assert!(matches!(single_key(two, "get"), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(single_key(vec![], "get"), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn test_validate_dimensions() {
        let none: Vec<Dimension<f64>> = vec![];
        assert!(matches!(
            validate_dimensions(&none),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}
