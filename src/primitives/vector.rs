//! Vector type for 1D numeric data.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use super::validate;
use crate::error::Result;
use crate::traits::Element;

/// A fixed-length sequence of numeric values.
///
/// The length is always the length of the backing storage; operations that
/// combine two vectors reject operands of different lengths instead of
/// truncating or padding.
///
/// # Examples
///
/// ```
/// use denso::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// assert!((v.norm() - 14.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    /// Creates a vector that takes ownership of `data`.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the backing storage as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Replaces the backing storage. The length follows the new data.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
    }

    /// Consumes the vector and returns its storage.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy> Vector<T> {
    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<T: Element> Vector<T> {
    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    fn map_in_place(&mut self, f: impl Fn(T) -> T) -> &mut Self {
        self.data.iter_mut().for_each(|x| *x = f(*x));
        self
    }

    fn zip_map(&self, other: &Self, op: &'static str, f: impl Fn(T, T) -> T) -> Result<Self> {
        validate::same_len(op, self.len(), other.len())?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    fn zip_in_place(
        &mut self,
        other: &Self,
        op: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<&mut Self> {
        validate::same_len(op, self.len(), other.len())?;
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, &b)| *a = f(*a, b));
        Ok(self)
    }

    /// Returns a new vector with `scalar` added to every element.
    #[must_use]
    pub fn add_scalar(&self, scalar: T) -> Self {
        self.map(|x| x + scalar)
    }

    /// Returns a new vector with `scalar` subtracted from every element.
    #[must_use]
    pub fn sub_scalar(&self, scalar: T) -> Self {
        self.map(|x| x - scalar)
    }

    /// Returns a new vector with every element multiplied by `scalar`.
    #[must_use]
    pub fn mul_scalar(&self, scalar: T) -> Self {
        self.map(|x| x * scalar)
    }

    /// Adds `scalar` to every element in place.
    pub fn cumulative_add_scalar(&mut self, scalar: T) -> &mut Self {
        self.map_in_place(|x| x + scalar)
    }

    /// Subtracts `scalar` from every element in place.
    pub fn cumulative_sub_scalar(&mut self, scalar: T) -> &mut Self {
        self.map_in_place(|x| x - scalar)
    }

    /// Multiplies every element by `scalar` in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use denso::primitives::Vector;
    ///
    /// let mut v = Vector::from_slice(&[1, 2, 3]);
    /// v.cumulative_add_scalar(2).cumulative_mul_scalar(3);
    /// assert_eq!(v.as_slice(), &[9, 12, 15]);
    /// ```
    pub fn cumulative_mul_scalar(&mut self, scalar: T) -> &mut Self {
        self.map_in_place(|x| x * scalar)
    }

    /// Element-wise sum of two vectors.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn add_vector(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, "add_vector", |a, b| a + b)
    }

    /// Element-wise difference of two vectors.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn sub_vector(&self, other: &Self) -> Result<Self> {
        self.zip_map(other, "sub_vector", |a, b| a - b)
    }

    /// Vector-by-vector multiplication, which is the dot product.
    ///
    /// Unlike [`mul_scalar`](Self::mul_scalar) this returns a scalar, not a
    /// vector.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn mul_vector(&self, other: &Self) -> Result<T> {
        self.dot(other)
    }

    /// Adds `other` element-wise in place.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ; `self` is left
    /// unchanged.
    pub fn cumulative_add_vector(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_in_place(other, "cumulative_add_vector", |a, b| a + b)
    }

    /// Subtracts `other` element-wise in place.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ; `self` is left
    /// unchanged.
    pub fn cumulative_sub_vector(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_in_place(other, "cumulative_sub_vector", |a, b| a - b)
    }

    /// Sum of all elements.
    #[must_use]
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    /// Dot product `Σ a[i] * b[i]`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<T> {
        validate::same_len("dot", self.len(), other.len())?;
        Ok(self.dot_unchecked(other))
    }

    fn dot_unchecked(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Euclidean norm `sqrt(Σ a[i]²)`.
    #[must_use]
    pub fn norm(&self) -> T {
        self.dot_unchecked(self).sqrt()
    }

    /// Square root of the dot product with `other`.
    ///
    /// `v.norm_with(&v)` equals `v.norm()`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the lengths differ.
    pub fn norm_with(&self, other: &Self) -> Result<T> {
        validate::same_len("norm_with", self.len(), other.len())?;
        Ok(self.dot_unchecked(other).sqrt())
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.data[idx]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.data[idx]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, "]")
    }
}

// Scalar operators

impl<T: Element> Add<T> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, scalar: T) -> Vector<T> {
        self.add_scalar(scalar)
    }
}

impl<T: Element> Sub<T> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, scalar: T) -> Vector<T> {
        self.sub_scalar(scalar)
    }
}

impl<T: Element> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Vector<T> {
        self.mul_scalar(scalar)
    }
}

impl<T: Element> Add<T> for Vector<T> {
    type Output = Vector<T>;

    fn add(mut self, scalar: T) -> Vector<T> {
        self.cumulative_add_scalar(scalar);
        self
    }
}

impl<T: Element> Sub<T> for Vector<T> {
    type Output = Vector<T>;

    fn sub(mut self, scalar: T) -> Vector<T> {
        self.cumulative_sub_scalar(scalar);
        self
    }
}

impl<T: Element> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(mut self, scalar: T) -> Vector<T> {
        self.cumulative_mul_scalar(scalar);
        self
    }
}

impl<T: Element> AddAssign<T> for Vector<T> {
    fn add_assign(&mut self, scalar: T) {
        self.cumulative_add_scalar(scalar);
    }
}

impl<T: Element> SubAssign<T> for Vector<T> {
    fn sub_assign(&mut self, scalar: T) {
        self.cumulative_sub_scalar(scalar);
    }
}

impl<T: Element> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.cumulative_mul_scalar(scalar);
    }
}

// Vector operators. These can fail, so they yield a Result.

impl<T: Element> Add<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>>;

    fn add(self, other: &Vector<T>) -> Self::Output {
        self.add_vector(other)
    }
}

impl<T: Element> Sub<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>>;

    fn sub(self, other: &Vector<T>) -> Self::Output {
        self.sub_vector(other)
    }
}

impl<T: Element> Mul<&Vector<T>> for &Vector<T> {
    type Output = Result<T>;

    fn mul(self, other: &Vector<T>) -> Self::Output {
        self.mul_vector(other)
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod tests_vector_contract;
