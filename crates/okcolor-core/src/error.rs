//! Error types for okcolor operations.
//!
//! The only rejectable inputs in the conversion chain sit at the sRGB
//! boundary: an 8-bit channel outside `0..=255`, or a normalized value
//! outside `[0, 1]`. Both are reported as domain violations and never
//! clamped.
//!
//! # Usage
//!
//! ```rust
//! use okcolor_core::{Error, Result};
//!
//! fn check_channel(value: i32) -> Result<u8> {
//!     u8::try_from(value).map_err(|_| Error::ChannelOutOfRange {
//!         value: i64::from(value),
//!     })
//! }
//!
//! assert!(check_channel(255).is_ok());
//! assert!(check_channel(256).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `okcolor-transfer` - channel and normalized range checks
//! - `okcolor-oklab` - round-trip verification

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting between sRGB, linear RGB and Oklab.
///
/// # Categories
///
/// - **Domain violations**: [`ChannelOutOfRange`](Error::ChannelOutOfRange),
///   [`NormalizedOutOfRange`](Error::NormalizedOutOfRange)
/// - **Verification**: [`RoundTripExceeded`](Error::RoundTripExceeded)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An 8-bit channel value lies outside `0..=255`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use okcolor_core::Error;
    ///
    /// let err = Error::ChannelOutOfRange { value: 256 };
    /// assert!(err.to_string().contains("256"));
    /// ```
    #[error("channel value {value} out of range 0..=255")]
    ChannelOutOfRange {
        /// Offending channel value
        value: i64,
    },

    /// A normalized intensity lies outside `[0, 1]` or is NaN.
    #[error("normalized value {value} out of range [0, 1]")]
    NormalizedOutOfRange {
        /// Offending value
        value: f64,
    },

    /// A linear RGB triple did not survive the Oklab round trip.
    ///
    /// Produced by caller-side verification, never by the transforms
    /// themselves.
    #[error(
        "round trip on channel {channel} drifted: expected {expected}, got {actual} (tolerance {tolerance})"
    )]
    RoundTripExceeded {
        /// Channel name (`'r'`, `'g'` or `'b'`)
        channel: char,
        /// Original linear value
        expected: f64,
        /// Value after forward and inverse transform
        actual: f64,
        /// Allowed absolute error
        tolerance: f64,
    },
}

impl Error {
    /// Returns true for the domain-violation kinds.
    ///
    /// These indicate a caller bug at the sRGB boundary, as opposed to a
    /// numerical verification failure.
    #[inline]
    pub fn is_domain_violation(&self) -> bool {
        matches!(
            self,
            Self::ChannelOutOfRange { .. } | Self::NormalizedOutOfRange { .. }
        )
    }
}
