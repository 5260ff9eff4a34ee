//! Matrix type for 2D numeric data.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{validate, Vector};
use crate::error::{Axis, DensoError, Result};
use crate::traits::Element;

/// A 2D matrix of numeric values (row-major storage).
///
/// Subscripts passed to [`get`](Self::get), [`get_mut`](Self::get_mut),
/// [`set`](Self::set), [`row`](Self::row) and [`column`](Self::column) are
/// 1-based: `(1, 1)` is the top-left cell.
///
/// # Examples
///
/// ```
/// use denso::primitives::Matrix;
///
/// let m = Matrix::new(3, 3, 2.2_f64);
/// assert_eq!(m.shape(), (3, 3));
/// assert!((m.trace().expect("square") - 6.6).abs() < 1e-9);
/// assert_eq!(m.get(1, 1), Ok(2.2));
/// assert!(m.get(0, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Unchecked wire form; converted through [`Matrix::from_vec`].
#[derive(Deserialize)]
struct RawMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = DensoError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl<T> Matrix<T> {
    /// Creates a new matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `rows * cols` overflows `usize` or
    /// `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let cells = validate::cell_count("from_vec", rows, cols)?;
        validate::same_len("from_vec", cells, data.len())?;
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from a list of equally long rows.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if any row length differs from the first.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        for row in &rows {
            validate::same_len("from_rows", n_cols, row.len())?;
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if rows == cols.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Replaces the whole grid, shape included.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for ragged input; `self` is unchanged.
    pub fn set_rows(&mut self, rows: Vec<Vec<T>>) -> Result<()> {
        *self = Self::from_rows(rows)?;
        Ok(())
    }

    // The only place the 1-based convention is translated.
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        validate::index_in_range(Axis::Row, row, self.rows)?;
        validate::index_in_range(Axis::Column, col, self.cols)?;
        Ok((row - 1) * self.cols + (col - 1))
    }

    /// Mutable reference to the cell at 1-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` unless `1 <= row <= rows` and
    /// `1 <= col <= cols`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = self.offset(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Overwrites the cell at 1-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a subscript outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a `rows x cols` matrix with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`, the same way `vec!` panics
    /// on a capacity overflow.
    #[must_use]
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        let cells = match validate::cell_count("new", rows, cols) {
            Ok(cells) => cells,
            Err(err) => panic!("{err}"),
        };
        Self {
            data: vec![fill; cells],
            rows,
            cols,
        }
    }

    /// Copies the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows)
            .map(|r| self.data[r * self.cols..(r + 1) * self.cols].to_vec())
            .collect()
    }
}

impl<T: Copy> Matrix<T> {
    /// Reads the cell at 1-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a subscript outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.offset(row, col).map(|idx| self.data[idx])
    }

    /// Returns 1-based row `row` as a Vector.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `row` is not in `1..=rows`.
    pub fn row(&self, row: usize) -> Result<Vector<T>> {
        validate::index_in_range(Axis::Row, row, self.rows)?;
        let start = (row - 1) * self.cols;
        Ok(Vector::from_slice(&self.data[start..start + self.cols]))
    }

    /// Returns 1-based column `col` as a Vector.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `col` is not in `1..=cols`.
    pub fn column(&self, col: usize) -> Result<Vector<T>> {
        validate::index_in_range(Axis::Column, col, self.cols)?;
        Ok((0..self.rows)
            .map(|r| self.data[r * self.cols + col - 1])
            .collect())
    }
}

impl<T: Element> Matrix<T> {
    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn map_in_place(&mut self, f: impl Fn(T) -> T) -> &mut Self {
        self.data.iter_mut().for_each(|x| *x = f(*x));
        self
    }

    fn zip_map(&self, other: &Self, op: &'static str, f: impl Fn(T, T) -> T) -> Result<Self> {
        validate::same_shape(op, self.shape(), other.shape())?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    fn zip_in_place(
        &mut self,
        other: &Self,
        op: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<&mut Self> {
        validate::same_shape(op, self.shape(), other.shape())?;
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, &b)| *a = f(*a, b));
        Ok(self)
    }

    /// Adds `scalar` to every cell.
    #[must_use]
    pub fn add_scalar(&self, scalar: T) -> Self {
        self.map(|x| x + scalar)
    }

    /// Subtracts `scalar` from every cell.
    #[must_use]
    pub fn sub_scalar(&self, scalar: T) -> Self {
        self.map(|x| x - scalar)
    }

    /// Multiplies each cell by `scalar`.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        self.map(|x| x * scalar)
    }

    /// In-place form of [`add_scalar`](Self::add_scalar).
    pub fn cumulative_add_scalar(&mut self, scalar: T) -> &mut Self {
        self.map_in_place(|x| x + scalar)
    }

    /// In-place form of [`sub_scalar`](Self::sub_scalar).
    pub fn cumulative_sub_scalar(&mut self, scalar: T) -> &mut Self {
        self.map_in_place(|x| x - scalar)
    }

    /// In-place form of [`mul_scalar`](Self::mul_scalar).
    pub fn cumulative_mul_scalar(&mut self, scalar: T) -> &mut Self {
        self.map_in_place(|x| x * scalar)
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless both rows and cols match.
    pub fn add_matrix(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, "add_matrix", |a, b| a + b)
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless both rows and cols match.
    pub fn sub_matrix(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, "sub_matrix", |a, b| a - b)
    }

    /// Element-wise (Hadamard) product. This is not a row-by-column matrix
    /// product; both operands must have the same shape.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless both rows and cols match.
    ///
    /// # Examples
    ///
    /// ```
    /// use denso::primitives::Matrix;
    ///
    /// let x = Matrix::new(3, 3, 2.2_f64);
    /// let y = Matrix::new(3, 3, 2.0_f64);
    /// let z = x.hadamard(&y).expect("same shape");
    /// assert!(z.as_slice().iter().all(|&c| (c - 4.4).abs() < 1e-12));
    /// ```
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, "hadamard", |a, b| a * b)
    }

    /// In-place form of [`add_matrix`](Self::add_matrix).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless both rows and cols match; `self`
    /// is left unchanged.
    pub fn cumulative_add_matrix(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_in_place(other, "cumulative_add_matrix", |a, b| a + b)
    }

    /// In-place form of [`sub_matrix`](Self::sub_matrix).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless both rows and cols match; `self`
    /// is left unchanged.
    pub fn cumulative_sub_matrix(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_in_place(other, "cumulative_sub_matrix", |a, b| a - b)
    }

    /// In-place form of [`hadamard`](Self::hadamard).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless both rows and cols match; `self`
    /// is left unchanged.
    pub fn cumulative_hadamard(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_in_place(other, "cumulative_hadamard", |a, b| a * b)
    }

    /// Sum of the diagonal.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` naming both dimensions if the matrix is
    /// not square.
    #[instrument(level = "trace", skip_all, fields(rows = self.rows, cols = self.cols))]
    pub fn trace(&self) -> Result<T> {
        validate::square("trace", self.rows, self.cols)?;
        Ok((0..self.rows).fold(T::zero(), |acc, i| acc + self.data[i * self.cols + i]))
    }

    /// Frobenius norm `sqrt(Σ cell²)`.
    #[instrument(level = "trace", skip_all, fields(rows = self.rows, cols = self.cols))]
    #[must_use]
    pub fn norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[r * self.cols + c])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

// Scalar operators

impl<T: Element> Add<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, scalar: T) -> Matrix<T> {
        self.add_scalar(scalar)
    }
}

impl<T: Element> Sub<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, scalar: T) -> Matrix<T> {
        self.sub_scalar(scalar)
    }
}

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.mul_scalar(scalar)
    }
}

impl<T: Element> Add<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, scalar: T) -> Matrix<T> {
        self.cumulative_add_scalar(scalar);
        self
    }
}

impl<T: Element> Sub<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, scalar: T) -> Matrix<T> {
        self.cumulative_sub_scalar(scalar);
        self
    }
}

impl<T: Element> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, scalar: T) -> Matrix<T> {
        self.cumulative_mul_scalar(scalar);
        self
    }
}

impl<T: Element> AddAssign<T> for Matrix<T> {
    fn add_assign(&mut self, scalar: T) {
        self.cumulative_add_scalar(scalar);
    }
}

impl<T: Element> SubAssign<T> for Matrix<T> {
    fn sub_assign(&mut self, scalar: T) {
        self.cumulative_sub_scalar(scalar);
    }
}

impl<T: Element> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.cumulative_mul_scalar(scalar);
    }
}

// Matrix operators. These can fail, so they yield a Result.

impl<T: Element> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, other: &Matrix<T>) -> Self::Output {
        self.add_matrix(other)
    }
}

impl<T: Element> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, other: &Matrix<T>) -> Self::Output {
        self.sub_matrix(other)
    }
}

impl<T: Element> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, other: &Matrix<T>) -> Self::Output {
        self.hadamard(other)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
