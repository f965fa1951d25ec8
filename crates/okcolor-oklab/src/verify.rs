//! Round-trip verification.
//!
//! The transforms never signal errors themselves. Correctness is the
//! round-trip closure property: for a linear triple `x` in the unit cube,
//! `oklab_to_linear_rgb(linear_rgb_to_oklab(x))` reproduces `x` within
//! [`ROUND_TRIP_TOLERANCE`] per channel. This module packages that check for
//! callers.
//!
//! # Example
//!
//! ```rust
//! use okcolor_core::LinearRgb;
//! use okcolor_oklab::verify::{round_trip, verify_round_trip, ROUND_TRIP_TOLERANCE};
//!
//! let rgb = LinearRgb::new(1.0, 0.3467041, 0.03954624);
//! let report = round_trip(rgb);
//! assert!(report.is_within(ROUND_TRIP_TOLERANCE));
//!
//! let lab = verify_round_trip(rgb, ROUND_TRIP_TOLERANCE)?;
//! assert_eq!(lab, report.oklab);
//! # Ok::<(), okcolor_core::Error>(())
//! ```

use okcolor_core::{Error, LinearRgb, Oklab, Result};
use tracing::{debug, trace};

use crate::oklab::{linear_rgb_to_oklab, oklab_to_linear_rgb};

/// Maximum absolute per-channel error accepted after a round trip.
pub const ROUND_TRIP_TOLERANCE: f64 = 1e-6;

/// Outcome of pushing one linear triple through forward and inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTrip {
    /// Original linear triple
    pub input: LinearRgb,
    /// Forward transform result
    pub oklab: Oklab,
    /// Inverse transform result
    pub output: LinearRgb,
    /// Largest per-channel absolute difference between input and output
    pub max_abs_error: f64,
}

impl RoundTrip {
    /// Returns true if every channel came back within `tolerance`.
    ///
    /// The comparison is strict (`<`). A NaN error never passes.
    #[inline]
    pub fn is_within(&self, tolerance: f64) -> bool {
        self.max_abs_error < tolerance
    }
}

/// Runs `rgb` through the forward and inverse transform.
pub fn round_trip(rgb: LinearRgb) -> RoundTrip {
    let oklab = linear_rgb_to_oklab(rgb);
    let output = oklab_to_linear_rgb(oklab);
    let max_abs_error = rgb.max_abs_diff(output);
    trace!(max_abs_error, "round_trip");
    RoundTrip {
        input: rgb,
        oklab,
        output,
        max_abs_error,
    }
}

/// Runs the round trip and fails if any channel drifts by `tolerance` or
/// more.
///
/// Returns the intermediate Oklab value on success.
///
/// # Errors
///
/// [`Error::RoundTripExceeded`] naming the first drifting channel in
/// red, green, blue order.
pub fn verify_round_trip(rgb: LinearRgb, tolerance: f64) -> Result<Oklab> {
    let report = round_trip(rgb);
    let channels = ['r', 'g', 'b']
        .into_iter()
        .zip(report.input.to_array())
        .zip(report.output.to_array());

    for ((channel, expected), actual) in channels {
        // Negated comparison so NaN drift is reported too
        if !((expected - actual).abs() < tolerance) {
            debug!(%channel, expected, actual, tolerance, "Oklab round trip exceeded tolerance");
            return Err(Error::RoundTripExceeded {
                channel,
                expected,
                actual,
                tolerance,
            });
        }
    }
    Ok(report.oklab)
}
