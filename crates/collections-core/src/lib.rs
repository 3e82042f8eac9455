//! Core types for sparse histogram collections
//!
//! This crate provides the vocabulary shared by the rest of the workspace:
//!
//! - [`BinId`]: the identifier a dimension assigns to a value (an integer bin,
//!   a region name, or the `overflow`/`underflow` sentinels)
//! - [`CompositeKey`]: one identifier per dimension, addressing one histogram
//! - [`Coordinates`]: what a caller hands to a collection for lookup
//! - [`Error`]/[`Result`]: the unified error type
//!
//! # Example
//!
//! ```rust
//! use collections_core::{BinId, CompositeKey, Coordinates};
//!
//! let key = CompositeKey::from([BinId::Index(0), BinId::Overflow]);
//! assert_eq!(key.to_string(), "(0, overflow)");
//!
//! let values = Coordinates::from([1.5, 20.0]).into_values(2).unwrap();
//! assert_eq!(values, vec![1.5, 20.0]);
//! ```

pub mod bin;
pub mod coordinates;
pub mod error;

// Re-export core types
pub use bin::{BinId, CompositeKey};
pub use coordinates::Coordinates;
pub use error::{Error, Result};
