//! High-level conversion trait.
//!
//! [`Convert`] gives each color triple a single `convert()` step to the next
//! representation in the chain:
//!
//! ```text
//! Srgb8 --> Oklab
//! LinearRgb --> Oklab --> LinearRgb
//! ```
//!
//! # Example
//!
//! ```rust
//! use okcolor_core::{LinearRgb, Oklab, Srgb8};
//! use okcolor_oklab::Convert;
//!
//! let lab: Oklab = Srgb8::new(196, 190, 166).convert();
//! let rgb: LinearRgb = lab.convert();
//! assert!((rgb.r - 0.5520114).abs() < 1e-6);
//! ```

use okcolor_core::{LinearRgb, Oklab, Srgb8};

use crate::oklab::{linear_rgb_to_oklab, oklab_to_linear_rgb, srgb8_to_oklab};

/// General conversion trait.
pub trait Convert {
    /// The output type after conversion.
    type Output;

    /// Converts to the target type.
    fn convert(self) -> Self::Output;
}

impl Convert for LinearRgb {
    type Output = Oklab;

    #[inline]
    fn convert(self) -> Oklab {
        linear_rgb_to_oklab(self)
    }
}

impl Convert for Oklab {
    type Output = LinearRgb;

    #[inline]
    fn convert(self) -> LinearRgb {
        oklab_to_linear_rgb(self)
    }
}

impl Convert for Srgb8 {
    type Output = Oklab;

    #[inline]
    fn convert(self) -> Oklab {
        srgb8_to_oklab(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_matches_free_functions() {
        let rgb = LinearRgb::new(1.0, 0.5028865, 1.0);
        assert_eq!(rgb.convert(), linear_rgb_to_oklab(rgb));

        let lab = rgb.convert();
        assert_eq!(lab.convert(), oklab_to_linear_rgb(lab));

        let px = Srgb8::new(255, 188, 255);
        assert_eq!(px.convert(), srgb8_to_oklab(px));
    }

    #[test]
    fn test_chained_round_trip() {
        let rgb = LinearRgb::new(0.25, 0.5, 0.75);
        let back = rgb.convert().convert();
        assert!(back.max_abs_diff(rgb) < 1e-6);
    }
}
