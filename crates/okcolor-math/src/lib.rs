//! # okcolor-math
//!
//! Math primitives for the okcolor conversion chain:
//!
//! - [`Mat3`] - 3x3 matrices for the fixed linear stages
//! - [`Vec3`] - 3D vectors for RGB/LMS/Lab triplets
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Everything is `f64`. Conversions to and from [`glam`]'s `DMat3`/`DVec3`
//! are provided for cross-checking against an independent implementation.
//!
//! # Dependencies
//!
//! - [`glam`] - reference matrix math
//!
//! # Used By
//!
//! - `okcolor-oklab` - M1/M2 tables and their inverses

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
