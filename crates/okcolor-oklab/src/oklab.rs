//! Linear sRGB <-> Oklab transform.
//!
//! Forward path: [`M1`] to LMS, component-wise cube root, [`M2`] to Lab.
//! Inverse path: [`M2_INV`], component-wise cube, [`M1_INV`].
//!
//! Both directions are total over all real triples. `f64::cbrt` is defined
//! for negative inputs and cubing undoes it exactly, so out-of-gamut values
//! transform consistently even though they carry no perceptual meaning.
//!
//! # Example
//!
//! ```rust
//! use okcolor_core::LinearRgb;
//! use okcolor_oklab::{linear_rgb_to_oklab, oklab_to_linear_rgb};
//!
//! let rgb = LinearRgb::new(0.2462013, 0.6583748, 0.2232280);
//! let lab = linear_rgb_to_oklab(rgb);
//! assert!((lab.l - 0.8002463).abs() < 1e-6);
//!
//! let back = oklab_to_linear_rgb(lab);
//! assert!(back.max_abs_diff(rgb) < 1e-6);
//! ```
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use okcolor_core::{LinearRgb, Oklab, Srgb8};
use okcolor_math::Vec3;
use okcolor_transfer::srgb8_to_linear;
use tracing::trace;

use crate::matrices::{M1, M1_INV, M2, M2_INV};

/// Converts linear sRGB to Oklab.
///
/// No input range restriction. Output is unclamped.
#[inline]
pub fn linear_rgb_to_oklab(rgb: LinearRgb) -> Oklab {
    let lms = M1 * Vec3::from(rgb.to_array());
    let lms_ = lms.map(f64::cbrt);
    Oklab::from(<[f64; 3]>::from(M2 * lms_))
}

/// Converts Oklab to linear sRGB.
///
/// Exact algebraic inverse of [`linear_rgb_to_oklab`]. The result is not
/// clamped: Oklab values outside the sRGB gamut produce channels outside
/// [0, 1].
#[inline]
pub fn oklab_to_linear_rgb(lab: Oklab) -> LinearRgb {
    let lms_ = M2_INV * Vec3::from(lab.to_array());
    let lms = lms_.map(|c| c * c * c);
    LinearRgb::from(<[f64; 3]>::from(M1_INV * lms))
}

/// Decodes an 8-bit sRGB pixel and converts it to Oklab.
///
/// # Example
///
/// ```rust
/// use okcolor_core::Srgb8;
/// use okcolor_oklab::srgb8_to_oklab;
///
/// let red = srgb8_to_oklab(Srgb8::new(255, 0, 0));
/// assert!((red.l - 0.6279554).abs() < 1e-6);
/// assert!((red.a - 0.2248631).abs() < 1e-6);
/// ```
pub fn srgb8_to_oklab(px: Srgb8) -> Oklab {
    let lab = linear_rgb_to_oklab(srgb8_to_linear(px));
    trace!(r = px.r, g = px.g, b = px.b, l = lab.l, a = lab.a, lab_b = lab.b, "srgb8_to_oklab");
    lab
}
