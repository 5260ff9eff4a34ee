//! Error types for denso operations.
//!
//! Every validation failure is returned to the caller; nothing in the
//! library prints or terminates the process.

use std::fmt;

use thiserror::Error;

/// Matrix axis named in an [`DensoError::IndexOutOfRange`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Row subscript.
    Row,
    /// Column subscript.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Main error type for denso operations.
///
/// # Examples
///
/// ```
/// use denso::error::DensoError;
///
/// let err = DensoError::shape_mismatch("add", (2, 3), (3, 2));
/// assert!(err.to_string().contains("dimension mismatch"));
/// assert!(err.to_string().contains("2x3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DensoError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("{op}: dimension mismatch between {left} and {right}")]
    DimensionMismatch {
        /// Operation that rejected its operands
        op: &'static str,
        /// Dimensions of the receiver (or the only operand)
        left: String,
        /// Dimensions of the other operand, or the requirement that failed
        right: String,
    },

    /// A 1-based subscript fell outside `1..=bound`.
    #[error("{axis} subscript {index} out of range (valid 1..={bound})")]
    IndexOutOfRange {
        /// Axis the subscript addresses
        axis: Axis,
        /// Offending subscript as given by the caller
        index: usize,
        /// Largest valid subscript on that axis
        bound: usize,
    },
}

impl DensoError {
    /// Vector lengths differ.
    #[must_use]
    pub fn length_mismatch(op: &'static str, left: usize, right: usize) -> Self {
        Self::DimensionMismatch {
            op,
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Matrix shapes differ.
    #[must_use]
    pub fn shape_mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            op,
            left: format!("{}x{}", left.0, left.1),
            right: format!("{}x{}", right.0, right.1),
        }
    }

    /// Matrix must be square but is not.
    #[must_use]
    pub fn not_square(op: &'static str, rows: usize, cols: usize) -> Self {
        Self::DimensionMismatch {
            op,
            left: format!("{rows}x{cols}"),
            right: "a square matrix".to_string(),
        }
    }

    /// Subscript outside the valid 1-based range.
    #[must_use]
    pub fn index_out_of_range(axis: Axis, index: usize, bound: usize) -> Self {
        Self::IndexOutOfRange { axis, index, bound }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, DensoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = DensoError::length_mismatch("dot", 3, 4);
        let msg = err.to_string();
        assert!(msg.contains("dot"));
        assert!(msg.contains("dimension mismatch"));
        assert!(msg.contains('3'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = DensoError::shape_mismatch("sub_matrix", (100, 10), (100, 5));
        let msg = err.to_string();
        assert!(msg.contains("100x10"));
        assert!(msg.contains("100x5"));
    }

    #[test]
    fn test_not_square_names_both_dimensions() {
        let err = DensoError::not_square("trace", 2, 3);
        assert!(matches!(err, DensoError::DimensionMismatch { .. }));
        assert!(err.to_string().contains("2x3"));
        assert!(err.to_string().contains("square"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = DensoError::index_out_of_range(Axis::Row, 0, 3);
        let msg = err.to_string();
        assert_eq!(msg, "row subscript 0 out of range (valid 1..=3)");
    }

    #[test]
    fn test_index_out_of_range_column_axis() {
        let err = DensoError::index_out_of_range(Axis::Column, 7, 4);
        assert!(err.to_string().starts_with("column subscript 7"));
    }

    #[test]
    fn test_error_is_std_error() {
        use std::error::Error;
        let err = DensoError::length_mismatch("add_vector", 1, 2);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DensoError>();
    }
}
