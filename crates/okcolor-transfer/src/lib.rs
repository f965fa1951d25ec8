//! # okcolor-transfer
//!
//! The sRGB transfer functions and the checked boundary between 8-bit
//! channel values and linear light.
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear (decode)
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded (encode)
//!
//! # Usage
//!
//! ```rust
//! use okcolor_transfer::{decode_channel, srgb};
//!
//! // Checked decode of an integer channel
//! let linear = decode_channel(136)?;
//! assert!((linear - 0.2462013).abs() < 1e-6);
//!
//! // Raw curves on normalized values
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 136.0 / 255.0).abs() < 1e-12);
//! # Ok::<(), okcolor_core::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`okcolor-core`] - value types and errors
//! - [`tracing`] - debug events for rejected input
//!
//! # Used By
//!
//! - `okcolor-oklab` - sRGB pixel to Oklab pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

// Re-export common functions
pub use srgb::{
    decode_channel, decode_normalized, decode_rgb, decode_u8, encode_channel, eotf as srgb_eotf,
    linear_to_srgb8, oetf as srgb_oetf, srgb8_to_linear,
};
