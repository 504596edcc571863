//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix values.

/// Trait for types that can be stored as matrix elements
///
/// Elements must be plain old data so the emitter can view a value
/// array as raw bytes, and comparable so the validator can check
/// decode-equivalence and symmetry.
pub trait MatrixElement: bytemuck::Pod + PartialEq + Default + core::fmt::Debug {
    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Whether this value is absent from the sparse support
    ///
    /// Negative zero counts as zero for floating point types.
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a decoded value reproduces `other`
    ///
    /// NaN matches NaN, so non-finite values survive validation.
    #[allow(clippy::eq_op)]
    fn same_value(&self, other: &Self) -> bool {
        self == other || (self != self && other != other)
    }

    /// Convert to f64 for error reporting
    fn to_f64(self) -> f64;
}

impl MatrixElement for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for i64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero() {
        assert!(0.0f64.is_zero());
        assert!((-0.0f64).is_zero());
        assert!(!1e-300f64.is_zero());
        assert!(0i32.is_zero());
        assert!(!(-1i64).is_zero());
    }

    #[test]
    fn test_size_bytes() {
        assert_eq!(f32::size_bytes(), 4);
        assert_eq!(f64::size_bytes(), 8);
        assert_eq!(i32::size_bytes(), 4);
        assert_eq!(i64::size_bytes(), 8);
    }

    #[test]
    fn test_same_value() {
        assert!(1.5f64.same_value(&1.5));
        assert!(f64::NAN.same_value(&f64::NAN));
        assert!(f32::INFINITY.same_value(&f32::INFINITY));
        assert!(!f64::NAN.same_value(&0.0));
        assert!(!0.0f64.same_value(&f64::NAN));
        assert!(!2i32.same_value(&3));
    }
}
