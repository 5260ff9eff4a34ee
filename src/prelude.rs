//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use denso::prelude::*;
//! ```

pub use crate::error::{Axis, DensoError};
pub use crate::primitives::{Matrix, Vector};
pub use crate::traits::Element;
