//! Integration tests for okcolor crates.
//!
//! End-to-end checks across decode, the Oklab transform and round-trip
//! verification, driven by the reference colors in [`golden`].
//!
//! Set `RUST_LOG=okcolor_oklab=trace` to see per-conversion events while
//! the tests run.

pub mod golden;

use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Installs a test-friendly subscriber once per process.
///
/// Filter comes from `RUST_LOG`, defaulting to warnings only. Output goes
/// through the test writer so it is captured per test.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "okcolor=warn".into()),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_test_writer(),
            )
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use okcolor_core::{Error, LinearRgb, Srgb8};
    use okcolor_oklab::{
        Convert, ROUND_TRIP_TOLERANCE, linear_rgb_to_oklab, oklab_to_linear_rgb, round_trip,
        srgb8_to_oklab, verify_round_trip,
    };
    use okcolor_transfer::{decode_channel, decode_rgb, encode_channel, linear_to_srgb8};

    /// Every sRGB pixel on a stride-5 lattice survives the round trip.
    #[test]
    fn test_srgb_lattice_round_trip() {
        crate::init_tracing();
        let mut worst = 0.0f64;
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(5) {
                for b in (0..=255).step_by(5) {
                    let rgb = decode_rgb(r, g, b).unwrap();
                    let report = round_trip(rgb);
                    assert!(
                        report.is_within(ROUND_TRIP_TOLERANCE),
                        "({r}, {g}, {b}) drifted by {}",
                        report.max_abs_error
                    );
                    worst = worst.max(report.max_abs_error);
                }
            }
        }
        tracing::debug!(worst, "lattice round trip");
    }

    /// Unit cube sampled in sixteenths, including both faces.
    #[test]
    fn test_unit_cube_round_trip() {
        crate::init_tracing();
        let steps = 16;
        for i in 0..=steps {
            for j in 0..=steps {
                for k in 0..=steps {
                    let rgb = LinearRgb::new(
                        i as f64 / steps as f64,
                        j as f64 / steps as f64,
                        k as f64 / steps as f64,
                    );
                    assert!(rgb.is_in_unit_cube());
                    verify_round_trip(rgb, ROUND_TRIP_TOLERANCE)
                        .unwrap_or_else(|e| panic!("{rgb:?}: {e}"));
                }
            }
        }
    }

    /// Full 8-bit chain: decode, Oklab, back to linear, re-encode.
    #[test]
    fn test_pixel_survives_full_chain() {
        for v in 0..=255u8 {
            for px in [Srgb8::new(v, 0, 0), Srgb8::new(0, v, 0), Srgb8::new(v, v, 255 - v)] {
                let rgb: LinearRgb = px.convert().convert();
                // Zero channels can come back as tiny negatives
                let rgb = LinearRgb::from_array(rgb.to_array().map(|c| c.clamp(0.0, 1.0)));
                assert_eq!(linear_to_srgb8(rgb).unwrap(), px);
            }
        }
    }

    #[test]
    fn test_convert_agrees_with_decode_then_forward() {
        let px = Srgb8::new(255, 18, 125);
        let [r, g, b] = px.to_array().map(i32::from);
        let via_decode = linear_rgb_to_oklab(decode_rgb(r, g, b).unwrap());
        assert_eq!(srgb8_to_oklab(px), via_decode);
        assert_eq!(px.convert(), via_decode);
    }

    #[test]
    fn test_out_of_range_channels_never_reach_transform() {
        crate::init_tracing();
        for bad in [-1, 256, -255, 1000, i32::MIN, i32::MAX] {
            let err = decode_rgb(128, bad, 128).unwrap_err();
            assert_eq!(err, Error::ChannelOutOfRange { value: bad as i64 });
            assert!(err.is_domain_violation());
            assert_eq!(decode_channel(bad), Err(err));
        }
    }

    #[test]
    fn test_encode_rejects_out_of_gamut_inverse() {
        // Saturated Oklab colors can land outside the cube on the way back
        let rgb = oklab_to_linear_rgb(okcolor_core::Oklab::new(0.7, 0.4, 0.0));
        assert!(!rgb.is_in_unit_cube());
        assert!(linear_to_srgb8(rgb).is_err());

        let bad = [rgb.r, rgb.g, rgb.b]
            .into_iter()
            .find(|c| !(0.0..=1.0).contains(c))
            .unwrap();
        assert!(matches!(
            encode_channel(bad),
            Err(Error::NormalizedOutOfRange { .. })
        ));
    }
}
