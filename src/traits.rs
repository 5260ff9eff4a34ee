//! Core traits for numeric element types.
//!
//! [`Element`] is the single bound every `Vector` and `Matrix` operation
//! needs: closed arithmetic from `num-traits` plus a square root for norms.

use std::fmt::{Debug, Display};

use num_traits::Num;

/// Numeric cell type stored by [`Vector`](crate::primitives::Vector) and
/// [`Matrix`](crate::primitives::Matrix).
///
/// Integer square roots go through `f64` and truncate toward zero, so a
/// negative integer radicand yields `0`. Floats use the native root.
///
/// Integer `+` and `*` inside `dot`, `norm` and the cumulative operations
/// follow Rust's overflow rules: they panic in debug builds and wrap in
/// release builds.
///
/// # Examples
///
/// ```
/// use denso::traits::Element;
///
/// assert_eq!(Element::sqrt(16_i32), 4);
/// assert_eq!(Element::sqrt(15_u64), 3);
/// assert!((Element::sqrt(2.0_f64) - std::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub trait Element: Copy + Num + PartialOrd + Debug + Display {
    /// Square root in the element's own type.
    #[must_use]
    fn sqrt(self) -> Self;
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )*
    };
}

macro_rules! impl_int_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }
            }
        )*
    };
}

impl_float_element!(f32, f64);
impl_int_element!(i32, i64, isize, u32, u64, usize);
