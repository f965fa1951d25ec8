//! sRGB transfer function validation tests.
//!
//! Checks the channel decoder against IEC 61966-2-1 reference values and
//! the properties every conforming decoder must have.
//!
//! # Reference Documents
//!
//! - IEC 61966-2-1:1999, section 5.2 (sRGB to linear)

use approx::assert_abs_diff_eq;
use okcolor_core::{Error, LinearRgb, Srgb8};
use okcolor_transfer::srgb::{self, DECODE_THRESHOLD};
use okcolor_transfer::{decode_channel, decode_rgb, decode_u8, encode_channel, srgb8_to_linear};

// ============================================================================
// Reference Values
// ============================================================================
// Decoded with the formula in f64 and printed to 7 significant digits.
//
//   if c <= 0.04045: c / 12.92
//   else:            ((c + 0.055) / 1.055)^2.4

const CHANNEL_REFERENCE: &[(i32, f64)] = &[
    (0, 0.0),
    (10, 3.035270e-3),  // linear segment
    (11, 3.346536e-3),  // first power-segment channel
    (18, 6.048833e-3),
    (56, 3.954624e-2),
    (75, 7.036010e-2),
    (128, 2.158605e-1),
    (130, 2.232280e-1),
    (136, 2.462013e-1),
    (159, 3.467041e-1),
    (166, 3.813260e-1),
    (188, 5.028865e-1),
    (190, 5.149177e-1),
    (196, 5.520114e-1),
    (212, 6.583748e-1),
    (255, 1.0),
];

#[test]
fn test_channel_reference_values() {
    for &(channel, expected) in CHANNEL_REFERENCE {
        let linear = decode_channel(channel).unwrap();
        assert_abs_diff_eq!(linear, expected, epsilon = 5e-7);
    }
}

#[test]
fn test_range_property() {
    for v in 0..=255 {
        let linear = decode_channel(v).unwrap();
        assert!(
            (0.0..=1.0).contains(&linear),
            "decode_channel({}) = {} escaped [0, 1]",
            v,
            linear
        );
    }
}

#[test]
fn test_monotonicity() {
    let decoded: Vec<f64> = (0..=255).map(|v| decode_channel(v).unwrap()).collect();
    for (v, pair) in decoded.windows(2).enumerate() {
        assert!(
            pair[0] < pair[1],
            "not increasing between {} and {}: {} >= {}",
            v,
            v + 1,
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_boundary_continuity() {
    let c = DECODE_THRESHOLD;
    let linear_branch = c / 12.92;
    let power_branch = ((c + 0.055) / 1.055_f64).powf(2.4);
    assert_abs_diff_eq!(linear_branch, power_branch, epsilon = 1e-8);

    // Approaching from either side lands on the same value
    let below = srgb::eotf(c);
    let above = srgb::eotf(c + 1e-12);
    assert_abs_diff_eq!(below, above, epsilon = 1e-8);
}

#[test]
fn test_precondition_enforcement() {
    for bad in [-1, 256, -255, 1000, i32::MAX, i32::MIN] {
        let err = decode_channel(bad).unwrap_err();
        assert_eq!(err, Error::ChannelOutOfRange { value: i64::from(bad) });
        assert!(err.is_domain_violation());
    }
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(decode_rgb(255, 0, 0).unwrap(), LinearRgb::new(1.0, 0.0, 0.0));
    assert_eq!(decode_rgb(0, 0, 0).unwrap(), LinearRgb::BLACK);
    assert_eq!(decode_rgb(255, 255, 255).unwrap(), LinearRgb::WHITE);

    let rgb = decode_rgb(136, 212, 130).unwrap();
    assert_abs_diff_eq!(rgb.r, 0.2462013, epsilon = 1e-7);
    assert_abs_diff_eq!(rgb.g, 0.6583748, epsilon = 1e-7);
    assert_abs_diff_eq!(rgb.b, 0.2232280, epsilon = 1e-7);

    // Typed and untyped paths agree bit for bit
    assert_eq!(srgb8_to_linear(Srgb8::new(136, 212, 130)), rgb);
}

#[test]
fn test_encode_inverts_decode() {
    for v in 0..=255u8 {
        assert_eq!(encode_channel(decode_u8(v)).unwrap(), v);
    }
}
