//! Coordinate inputs for collection lookups
//!
//! A lookup takes either a bare value (only meaningful for a one-dimensional
//! collection) or a tuple with one value per dimension.

use crate::error::{Error, Result};

/// Coordinate input: a bare scalar or one value per dimension
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinates<T> {
    /// Single bare value
    Scalar(T),
    /// One value per dimension, in dimension order
    Tuple(Vec<T>),
}

impl<T> Coordinates<T> {
    /// Number of values supplied
    pub fn len(&self) -> usize {
        match self {
            Coordinates::Scalar(_) => 1,
            Coordinates::Tuple(values) => values.len(),
        }
    }

    /// Check if no values were supplied
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize to one value per dimension for a collection of `arity` dimensions
    ///
    /// A bare scalar is only accepted when `arity == 1`; a tuple must have
    /// exactly `arity` values.
    pub fn into_values(self, arity: usize) -> Result<Vec<T>> {
        match self {
            Coordinates::Scalar(value) => {
                if arity > 1 {
                    return Err(Error::scalar_for_arity(arity));
                }
                if arity == 0 {
                    return Err(Error::arity_mismatch(arity, 1));
                }
                Ok(vec![value])
            }
            Coordinates::Tuple(values) => {
                if values.len() != arity {
                    return Err(Error::arity_mismatch(arity, values.len()));
                }
                Ok(values)
            }
        }
    }
}

impl<T> From<Vec<T>> for Coordinates<T> {
    fn from(values: Vec<T>) -> Self {
        Coordinates::Tuple(values)
    }
}

impl<T, const N: usize> From<[T; N]> for Coordinates<T> {
    fn from(values: [T; N]) -> Self {
        Coordinates::Tuple(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for Coordinates<T> {
    fn from(values: &[T]) -> Self {
        Coordinates::Tuple(values.to_vec())
    }
}

macro_rules! impl_scalar_coordinates {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Coordinates<$t> {
                fn from(value: $t) -> Self {
                    Coordinates::Scalar(value)
                }
            }
        )*
    };
}

impl_scalar_coordinates!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);
