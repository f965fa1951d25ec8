//! Reference colors for end-to-end checks.
//!
//! Eleven 8-bit sRGB samples covering the primaries, black, white and a few
//! mixed colors, with their decoded linear values and Oklab coordinates.
//! Values were produced in double precision with the published Oklab
//! matrices and are given to 7 significant digits.

use okcolor_core::{LinearRgb, Oklab, Srgb8};

/// One reference sample.
#[derive(Debug, Clone, Copy)]
pub struct Golden {
    /// Gamma-encoded input
    pub srgb: Srgb8,
    /// Expected gamma-decoded value
    pub linear: LinearRgb,
    /// Expected forward transform of `linear`
    pub oklab: Oklab,
}

const fn golden(srgb: [u8; 3], linear: [f64; 3], oklab: [f64; 3]) -> Golden {
    Golden {
        srgb: Srgb8::from_array(srgb),
        linear: LinearRgb::from_array(linear),
        oklab: Oklab::from_array(oklab),
    }
}

/// Absolute tolerance for comparing against the 7-digit tables.
pub const TABLE_EPSILON: f64 = 1e-6;

/// The reference samples.
#[allow(clippy::excessive_precision)]
pub const GOLDEN: &[Golden] = &[
    golden([255, 0, 0], [1.0, 0.0, 0.0], [6.279554e-01, 2.248631e-01, 1.258463e-01]),
    golden([0, 255, 0], [0.0, 1.0, 0.0], [8.664396e-01, -2.338876e-01, 1.794985e-01]),
    golden([0, 0, 255], [0.0, 0.0, 1.0], [4.520137e-01, -3.245698e-02, -3.115281e-01]),
    golden([255, 255, 255], [1.0, 1.0, 1.0], [1.000000e+00, 8.095286e-11, 3.727391e-08]),
    golden([0, 0, 0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
    golden(
        [136, 212, 130],
        [2.462013e-01, 6.583748e-01, 2.232280e-01],
        [8.002463e-01, -1.078114e-01, 8.255051e-02],
    ),
    golden(
        [255, 159, 56],
        [1.0, 3.467041e-01, 3.954624e-02],
        [7.842250e-01, 7.268992e-02, 1.413031e-01],
    ),
    golden(
        [196, 190, 166],
        [5.520114e-01, 5.149177e-01, 3.813260e-01],
        [7.999292e-01, -3.195469e-03, 3.335571e-02],
    ),
    golden(
        [255, 188, 255],
        [1.0, 5.028865e-01, 1.0],
        [8.774487e-01, 9.605264e-02, -6.356862e-02],
    ),
    golden(
        [255, 18, 125],
        [1.0, 6.048833e-03, 2.050787e-01],
        [6.477489e-01, 2.548900e-01, 1.702712e-02],
    ),
    golden(
        [255, 0, 75],
        [1.0, 0.0, 7.036010e-02],
        [6.337077e-01, 2.412873e-01, 7.909187e-02],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use okcolor_oklab::{linear_rgb_to_oklab, srgb8_to_oklab, verify_round_trip};
    use okcolor_transfer::{decode_rgb, srgb8_to_linear};

    fn assert_triple_eq(actual: [f64; 3], expected: [f64; 3], what: &str, srgb: Srgb8) {
        for i in 0..3 {
            assert_abs_diff_eq!(actual[i], expected[i], epsilon = TABLE_EPSILON);
        }
        tracing::trace!(?srgb, what, "golden ok");
    }

    #[test]
    fn test_golden_decode() {
        crate::init_tracing();
        for g in GOLDEN {
            let linear = srgb8_to_linear(g.srgb);
            assert_triple_eq(linear.to_array(), g.linear.to_array(), "linear", g.srgb);

            let [r, gr, b] = g.srgb.to_array().map(i32::from);
            assert_eq!(decode_rgb(r, gr, b).unwrap(), linear);
        }
    }

    #[test]
    fn test_golden_oklab() {
        crate::init_tracing();
        for g in GOLDEN {
            let lab = srgb8_to_oklab(g.srgb);
            assert_triple_eq(lab.to_array(), g.oklab.to_array(), "oklab", g.srgb);
        }
    }

    #[test]
    fn test_golden_round_trip() {
        crate::init_tracing();
        for g in GOLDEN {
            let linear = srgb8_to_linear(g.srgb);
            let lab = verify_round_trip(linear, okcolor_oklab::ROUND_TRIP_TOLERANCE)
                .unwrap_or_else(|e| panic!("{:?}: {}", g.srgb, e));
            assert_eq!(lab, linear_rgb_to_oklab(linear));
        }
    }
}
