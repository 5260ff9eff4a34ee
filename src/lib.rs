//! Denso: dense Vector and Matrix arithmetic in pure Rust.
//!
//! Two value types share one validated arithmetic engine. Every operation
//! that combines two operands checks their dimensions first and returns a
//! [`DensoError`](error::DensoError) instead of touching any data when they
//! do not fit.
//!
//! # Quick Start
//!
//! ```
//! use denso::prelude::*;
//!
//! let x = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let y = Vector::from_slice(&[5.0, 6.0, 7.0]);
//!
//! let sum = x.add_vector(&y).unwrap();
//! assert_eq!(sum.as_slice(), &[6.0, 8.0, 10.0]);
//! assert_eq!(x.dot(&y).unwrap(), 38.0);
//!
//! let a = Matrix::new(3, 3, 2.2_f64);
//! let b = Matrix::new(3, 3, 2.0_f64);
//! let c = a.hadamard(&b).unwrap();
//! assert!((c.get(1, 1).unwrap() - 4.4_f64).abs() < 1e-12);
//!
//! // Mismatched shapes are reported, not fatal.
//! let err = a.add_matrix(&Matrix::new(2, 3, 0.0)).unwrap_err();
//! assert!(matches!(err, DensoError::DimensionMismatch { .. }));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`error`]: Error taxonomy (`DimensionMismatch`, `IndexOutOfRange`)
//! - [`traits`]: The `Element` bound for cell types

pub mod error;
pub mod prelude;
pub mod primitives;
pub mod traits;
