//! Color triple value types.
//!
//! Each representation in the conversion chain has its own type so that
//! units and axis order are unambiguous at call sites:
//!
//! - [`Srgb8`] - 8-bit gamma-encoded sRGB (`u8` per channel)
//! - [`LinearRgb`] - linear-light sRGB (`f64` per channel)
//! - [`Oklab`] - perceptual lightness and two chroma axes (`f64`)
//!
//! All types are plain `Copy` data with `#[repr(C)]` layout. They are
//! created, transformed and discarded; nothing mutates them in place.
//!
//! ```
//! use okcolor_core::{LinearRgb, Oklab, Srgb8};
//!
//! let px = Srgb8::new(136, 212, 130);
//! let lin = LinearRgb::new(0.25, 0.5, 0.75);
//! let lab = Oklab::from([0.8, -0.1, 0.08]);
//!
//! assert_eq!(px.to_array(), [136, 212, 130]);
//! assert_eq!(lin.g, 0.5);
//! assert_eq!(lab.l, 0.8);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8-bit gamma-encoded sRGB pixel.
///
/// Channel values are `u8`, so out-of-range input cannot be represented.
/// Untyped integers must go through the checked decoders in
/// `okcolor-transfer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Srgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Srgb8 {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new pixel.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates from an `[r, g, b]` array.
    #[inline]
    pub const fn from_array(a: [u8; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an `[r, g, b]` array.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Srgb8 {
    #[inline]
    fn from(a: [u8; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Srgb8> for [u8; 3] {
    #[inline]
    fn from(px: Srgb8) -> [u8; 3] {
        px.to_array()
    }
}

/// A linear-light sRGB triple.
///
/// Values decoded from 8-bit sRGB lie in `[0, 1]`. The type does not clamp:
/// the inverse Oklab transform may legitimately produce out-of-gamut values.
///
/// # Example
///
/// ```
/// use okcolor_core::LinearRgb;
///
/// let gray = LinearRgb::splat(0.18);
/// assert!(gray.is_in_unit_cube());
/// assert!(!LinearRgb::new(1.2, 0.0, 0.0).is_in_unit_cube());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct LinearRgb {
    /// Red intensity
    pub r: f64,
    /// Green intensity
    pub g: f64,
    /// Blue intensity
    pub b: f64,
}

impl LinearRgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new linear triple.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a neutral triple with all channels equal.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an `[r, g, b]` array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an `[r, g, b]` array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns true if every channel lies in `[0, 1]`.
    #[inline]
    pub fn is_in_unit_cube(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Largest per-channel absolute difference to `other`.
    ///
    /// NaN in any channel of either side yields NaN, so a comparison
    /// against a tolerance never passes.
    #[inline]
    pub fn max_abs_diff(self, other: Self) -> f64 {
        [self.r - other.r, self.g - other.g, self.b - other.b]
            .into_iter()
            .map(f64::abs)
            .fold(0.0, |acc, d| if d.is_nan() || d > acc { d } else { acc })
    }
}

impl From<[f64; 3]> for LinearRgb {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<LinearRgb> for [f64; 3] {
    #[inline]
    fn from(rgb: LinearRgb) -> [f64; 3] {
        rgb.to_array()
    }
}

/// A color in the Oklab perceptual color space.
///
/// # Components
///
/// - `l`: lightness, 0.0 (black) to 1.0 (white) for in-gamut colors
/// - `a`: green-red axis (negative = green, positive = red)
/// - `b`: blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped.
///
/// # Reference
///
/// Björn Ottosson, "A perceptual color space for image processing"
/// <https://bottosson.github.io/posts/oklab/>
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Oklab {
    /// Perceptual lightness
    pub l: f64,
    /// Green-red chroma axis
    pub a: f64,
    /// Blue-yellow chroma axis
    pub b: f64,
}

impl Oklab {
    /// Creates a new Oklab triple.
    ///
    /// ```
    /// use okcolor_core::Oklab;
    ///
    /// let mid_gray = Oklab::new(0.5, 0.0, 0.0);
    /// assert_eq!(mid_gray.a, 0.0);
    /// ```
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Creates from an `[l, a, b]` array.
    #[inline]
    pub const fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Converts to an `[l, a, b]` array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl From<[f64; 3]> for Oklab {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Self::from_array(v)
    }
}

impl From<Oklab> for [f64; 3] {
    #[inline]
    fn from(lab: Oklab) -> [f64; 3] {
        lab.to_array()
    }
}
