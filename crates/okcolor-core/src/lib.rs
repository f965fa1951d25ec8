//! # okcolor-core
//!
//! Core types shared by the okcolor crates.
//!
//! - [`Srgb8`] - 8-bit gamma-encoded sRGB pixel
//! - [`LinearRgb`] - linear-light sRGB triple
//! - [`Oklab`] - Oklab perceptual triple
//! - [`Error`], [`Result`] - domain violations and verification failures
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The rest of the workspace
//! builds on it:
//!
//! ```text
//! okcolor-core (this crate)
//!    ^
//!    |
//!    +-- okcolor-transfer (sRGB decode/encode)
//!    +-- okcolor-oklab (linear RGB <-> Oklab)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Derive `Serialize`/`Deserialize` for the color triples

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;

pub use color::{LinearRgb, Oklab, Srgb8};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use okcolor_core::prelude::*;
///
/// let px = Srgb8::WHITE;
/// # let _ = px;
/// ```
pub mod prelude {
    pub use crate::color::{LinearRgb, Oklab, Srgb8};
    pub use crate::error::{Error, Result};
}
