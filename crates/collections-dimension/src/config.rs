//! Declarative dimension specifications
//!
//! Dimensions can be described as data and built against a
//! [`RegionRegistry`]:
//!
//! ```json
//! [
//!   {"kind": "sorted", "edges": [0, 10, 20]},
//!   {"kind": "overlapping", "ranges": [[0, 10], [5, 15]]},
//!   {"kind": "region", "table": "eta"}
//! ]
//! ```
//!
//! A document may also hold a single specification object, which is treated
//! as a one-element list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use collections_core::{Error, Result};

use crate::region::RegionRegistry;
use crate::types::Dimension;

const KNOWN_KINDS: [&str; 3] = ["sorted", "overlapping", "region"];

/// Serializable description of one dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DimensionSpec {
    /// Sorted bin edges
    Sorted { edges: Vec<f64> },
    /// `(low, high)` ranges, possibly overlapping
    Overlapping { ranges: Vec<(f64, f64)> },
    /// Name of a region table in the registry
    Region { table: String },
}

impl DimensionSpec {
    /// Build the dimension this specification describes
    pub fn build(&self, registry: &RegionRegistry<f64>) -> Result<Dimension<f64>> {
        let dimension = match self {
            DimensionSpec::Sorted { edges } => Dimension::sorted(edges.iter().copied())?,
            DimensionSpec::Overlapping { ranges } => {
                Dimension::overlapping(ranges.iter().copied())
            }
            DimensionSpec::Region { table } => Dimension::region(registry.get(table)?),
        };
        trace!(kind = dimension.kind(), "built dimension from spec");
        Ok(dimension)
    }
}

/// Parse a JSON document holding one specification or a list of them
///
/// An entry whose `kind` is not a recognized dimension is an
/// [`Error::InvalidConfiguration`]; a recognized entry with malformed fields
/// surfaces as [`Error::Serialization`].
pub fn parse_dimensions(json: &str) -> Result<Vec<DimensionSpec>> {
    let document: Value = serde_json::from_str(json)?;
    let entries = match document {
        Value::Array(entries) => entries,
        entry @ Value::Object(_) => vec![entry],
        other => {
            return Err(Error::InvalidConfiguration(format!(
                "expected a dimension object or a list of them, got {other}"
            )))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            let kind = entry.get("kind").and_then(Value::as_str).map(str::to_owned);
            match kind {
                Some(kind) if KNOWN_KINDS.contains(&kind.as_str()) => {
                    Ok(serde_json::from_value::<DimensionSpec>(entry)?)
                }
                Some(kind) => Err(Error::InvalidConfiguration(format!(
                    "dimension {position}: `{kind}` is not a recognized dimension"
                ))),
                None => Err(Error::InvalidConfiguration(format!(
                    "dimension {position}: not a recognized dimension (missing `kind`)"
                ))),
            }
        })
        .collect()
}

/// Parse and build every dimension in a JSON document
pub fn build_dimensions(json: &str, registry: &RegionRegistry<f64>) -> Result<Vec<Dimension<f64>>> {
    parse_dimensions(json)?
        .iter()
        .map(|spec| spec.build(registry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionTable;
    use crate::traits::Binning;
    use collections_core::BinId;

    fn registry() -> RegionRegistry<f64> {
        let mut registry = RegionRegistry::new();
        registry.register(
            "eta",
            RegionTable::new()
                .with_region("barrel", |eta: &f64| eta.abs() < 1.48)
                .with_region("endcap", |eta: &f64| eta.abs() >= 1.48 && eta.abs() < 3.0),
        );
        registry
    }

    #[test]
    fn test_parse_list() {
        let specs = parse_dimensions(
            r#"[
                {"kind": "sorted", "edges": [20, 0, 10]},
                {"kind": "overlapping", "ranges": [[0, 10], [5, 15]]},
                {"kind": "region", "table": "eta"}
            ]"#,
        )
        .unwrap();

        assert_eq!(specs.len(), 3);
        assert_eq!(
            specs[0],
            DimensionSpec::Sorted {
                edges: vec![20.0, 0.0, 10.0]
            }
        );
        assert_eq!(
            specs[2],
            DimensionSpec::Region {
                table: "eta".to_string()
            }
        );
    }

    #[test]
    fn test_single_object_is_normalized() {
        let specs = parse_dimensions(r#"{"kind": "sorted", "edges": [1, 2]}"#).unwrap();
        assert_eq!(specs.len(), 1);
    }

    #[test]
    fn test_unknown_kind_is_invalid_configuration() {
        let err = parse_dimensions(r#"[{"kind": "log", "base": 10}]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(err.to_string().contains("not a recognized dimension"));

        let err = parse_dimensions(r#"[{"edges": [1, 2]}]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = parse_dimensions("42").unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_malformed_fields_are_serialization_errors() {
        let err = parse_dimensions(r#"[{"kind": "sorted", "edges": "wide"}]"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_build_dimensions() {
        let dims = build_dimensions(
            r#"[{"kind": "sorted", "edges": [0, 10, 20]}, {"kind": "region", "table": "eta"}]"#,
            &registry(),
        )
        .unwrap();

        assert_eq!(dims[0].resolve(&15.0), vec![BinId::Index(1)]);
        assert_eq!(dims[1].resolve(&2.0), vec![BinId::from("endcap")]);
    }

    #[test]
    fn test_build_rejects_unknown_table_and_empty_edges() {
        let err = DimensionSpec::Region {
            table: "phi".to_string(),
        }
        .build(&registry())
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = DimensionSpec::Sorted { edges: vec![] }
            .build(&registry())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_spec_round_trips_through_json() {
        let spec = DimensionSpec::Overlapping {
            ranges: vec![(0.0, 10.0)],
        };
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains(r#""kind":"overlapping""#));
        assert_eq!(serde_json::from_str::<DimensionSpec>(&json).unwrap(), spec);
    }
}
