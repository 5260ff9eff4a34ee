//! Shared pre-operation checks.
//!
//! Every check runs before any cell is read or written, so a rejected
//! operation leaves both operands untouched.

use tracing::debug;

use crate::error::{Axis, DensoError, Result};

/// Both vectors must have the same length.
pub(crate) fn same_len(op: &'static str, left: usize, right: usize) -> Result<()> {
    if left != right {
        debug!(op, left, right, "rejected: vector lengths differ");
        return Err(DensoError::length_mismatch(op, left, right));
    }
    Ok(())
}

/// Both matrices must agree on rows AND columns.
pub(crate) fn same_shape(
    op: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left.0 != right.0 || left.1 != right.1 {
        debug!(op, ?left, ?right, "rejected: matrix shapes differ");
        return Err(DensoError::shape_mismatch(op, left, right));
    }
    Ok(())
}

/// The matrix must have as many rows as columns.
pub(crate) fn square(op: &'static str, rows: usize, cols: usize) -> Result<()> {
    if rows != cols {
        debug!(op, rows, cols, "rejected: matrix is not square");
        return Err(DensoError::not_square(op, rows, cols));
    }
    Ok(())
}

/// `rows * cols` must fit in `usize`; returns the cell count.
pub(crate) fn cell_count(op: &'static str, rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        debug!(op, rows, cols, "rejected: cell count overflows usize");
        DensoError::DimensionMismatch {
            op,
            left: format!("{rows}x{cols}"),
            right: "a cell count that fits in usize".to_string(),
        }
    })
}

/// `index` must lie in `1..=bound`.
pub(crate) fn index_in_range(axis: Axis, index: usize, bound: usize) -> Result<()> {
    if index == 0 || index > bound {
        debug!(%axis, index, bound, "rejected: subscript out of range");
        return Err(DensoError::index_out_of_range(axis, index, bound));
    }
    Ok(())
}
