//! # okcolor-oklab
//!
//! Conversion between 8-bit sRGB, linear sRGB and the Oklab perceptual
//! color space, with the checks that keep the chain honest.
//!
//! # Architecture
//!
//! ```text
//!               okcolor-oklab
//!                     |
//!        +------------+------------+
//!        |                         |
//! okcolor-transfer           okcolor-math
//!        |                         |
//!        +------------+------------+
//!                     |
//!               okcolor-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use okcolor_oklab::{linear_rgb_to_oklab, oklab_to_linear_rgb};
//! use okcolor_oklab::transfer::decode_rgb;
//!
//! // Gamma decode, rejecting out-of-range channels
//! let rgb = decode_rgb(255, 159, 56)?;
//!
//! // Forward and inverse
//! let lab = linear_rgb_to_oklab(rgb);
//! let back = oklab_to_linear_rgb(lab);
//!
//! assert!((lab.l - 0.7842250).abs() < 1e-6);
//! assert!(back.max_abs_diff(rgb) < 1e-6);
//! # Ok::<(), okcolor_oklab::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`okcolor-core`] - value types and errors
//! - [`okcolor-math`] - constant 3x3 tables
//! - [`okcolor-transfer`] - sRGB decode/encode
//! - [`tracing`] - trace events on entry points, debug events on failures
//!
//! # Feature Flags
//!
//! - `serde` - Forwarded to `okcolor-core`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod matrices;
mod oklab;
pub mod verify;

pub use convert::Convert;
pub use oklab::{linear_rgb_to_oklab, oklab_to_linear_rgb, srgb8_to_oklab};
pub use verify::{ROUND_TRIP_TOLERANCE, RoundTrip, round_trip, verify_round_trip};

pub use okcolor_core::{Error, LinearRgb, Oklab, Result, Srgb8};

// Re-export sub-crates for convenience
pub use okcolor_math as math;
pub use okcolor_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        Convert, Error, LinearRgb, Oklab, ROUND_TRIP_TOLERANCE, Result, Srgb8,
        linear_rgb_to_oklab, oklab_to_linear_rgb, srgb8_to_oklab, verify_round_trip,
    };

    pub use okcolor_transfer::{decode_channel, decode_rgb, encode_channel};
}
