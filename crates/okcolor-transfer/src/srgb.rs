//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (exponent 2.4) for the rest.
//!
//! Two layers are provided:
//!
//! - [`eotf`] / [`oetf`] - the raw curves on normalized values, no checks
//! - [`decode_channel`], [`decode_normalized`], [`encode_channel`] - the
//!   checked boundary between integer channels and linear light
//!
//! The checked functions never clamp. Out-of-range input is a caller bug and
//! comes back as a domain-violation [`Error`].
//!
//! # Range
//!
//! - Channels: `0..=255`
//! - Normalized input/output: [0, 1]
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use okcolor_core::{Error, LinearRgb, Result, Srgb8};
use tracing::debug;

/// Largest 8-bit channel value.
pub const CHANNEL_MAX: u8 = 255;

/// Encoded value at or below which the EOTF is linear.
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Linear value at or below which the OETF is linear.
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// Slope of the linear segment.
pub const LINEAR_SLOPE: f64 = 12.92;

/// Offset `a` of the power segment.
pub const OFFSET: f64 = 0.055;

/// Exponent of the power segment.
pub const GAMMA: f64 = 2.4;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// Converts gamma-encoded sRGB [0, 1] to linear [0, 1]. No range check is
/// performed; see [`decode_normalized`] for the checked form.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use okcolor_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= DECODE_THRESHOLD {
        v / LINEAR_SLOPE
    } else {
        ((v + OFFSET) / (1.0 + OFFSET)).powf(GAMMA)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// Converts linear [0, 1] to gamma-encoded sRGB [0, 1]. No range check is
/// performed; see [`encode_channel`] for the checked form.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use okcolor_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.001);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= ENCODE_THRESHOLD {
        l * LINEAR_SLOPE
    } else {
        (1.0 + OFFSET) * l.powf(1.0 / GAMMA) - OFFSET
    }
}

/// Decodes an 8-bit channel value to linear intensity.
///
/// The value is normalized by 255 and passed through [`eotf`]. The result
/// lies in [0, 1].
///
/// # Errors
///
/// [`Error::ChannelOutOfRange`] if `channel` is outside `0..=255`.
///
/// # Example
///
/// ```rust
/// use okcolor_transfer::srgb::decode_channel;
///
/// assert_eq!(decode_channel(255).unwrap(), 1.0);
/// assert_eq!(decode_channel(0).unwrap(), 0.0);
/// assert!(decode_channel(256).is_err());
/// assert!(decode_channel(-1).is_err());
/// ```
pub fn decode_channel(channel: i32) -> Result<f64> {
    match u8::try_from(channel) {
        Ok(v) => Ok(decode_u8(v)),
        Err(_) => {
            debug!(channel, "rejecting sRGB channel outside 0..=255");
            Err(Error::ChannelOutOfRange {
                value: i64::from(channel),
            })
        }
    }
}

/// Decodes a typed 8-bit channel value to linear intensity.
///
/// Infallible: every `u8` is a valid channel.
#[inline]
pub fn decode_u8(channel: u8) -> f64 {
    let linear = eotf(f64::from(channel) / f64::from(CHANNEL_MAX));
    debug_assert!((0.0..=1.0).contains(&linear));
    linear
}

/// Decodes an already normalized sRGB value to linear intensity.
///
/// # Errors
///
/// [`Error::NormalizedOutOfRange`] if `v` is NaN or outside [0, 1].
pub fn decode_normalized(v: f64) -> Result<f64> {
    check_unit(v)?;
    Ok(eotf(v))
}

/// Encodes linear intensity to the nearest 8-bit channel value.
///
/// Inverse of [`decode_u8`]: `encode_channel(decode_u8(v)) == Ok(v)` for
/// every `u8`.
///
/// # Errors
///
/// [`Error::NormalizedOutOfRange`] if `linear` is NaN or outside [0, 1].
///
/// # Example
///
/// ```rust
/// use okcolor_transfer::srgb::{decode_u8, encode_channel};
///
/// assert_eq!(encode_channel(decode_u8(136)).unwrap(), 136);
/// assert!(encode_channel(1.5).is_err());
/// ```
pub fn encode_channel(linear: f64) -> Result<u8> {
    check_unit(linear)?;
    let scaled = (oetf(linear) * f64::from(CHANNEL_MAX)).round();
    // oetf maps [0, 1] onto [0, 1], so the cast cannot truncate
    Ok(scaled.clamp(0.0, f64::from(CHANNEL_MAX)) as u8)
}

/// Decodes three integer channels to a linear triple.
///
/// # Errors
///
/// [`Error::ChannelOutOfRange`] for the first channel (red, green, blue
/// order) outside `0..=255`.
pub fn decode_rgb(r: i32, g: i32, b: i32) -> Result<LinearRgb> {
    Ok(LinearRgb::new(
        decode_channel(r)?,
        decode_channel(g)?,
        decode_channel(b)?,
    ))
}

/// Decodes an 8-bit pixel to a linear triple.
///
/// # Example
///
/// ```rust
/// use okcolor_core::{LinearRgb, Srgb8};
/// use okcolor_transfer::srgb::srgb8_to_linear;
///
/// assert_eq!(srgb8_to_linear(Srgb8::new(255, 0, 0)), LinearRgb::new(1.0, 0.0, 0.0));
/// ```
#[inline]
pub fn srgb8_to_linear(px: Srgb8) -> LinearRgb {
    LinearRgb::new(decode_u8(px.r), decode_u8(px.g), decode_u8(px.b))
}

/// Encodes a linear triple to the nearest 8-bit pixel.
///
/// # Errors
///
/// [`Error::NormalizedOutOfRange`] for the first channel outside [0, 1].
pub fn linear_to_srgb8(rgb: LinearRgb) -> Result<Srgb8> {
    Ok(Srgb8::new(
        encode_channel(rgb.r)?,
        encode_channel(rgb.g)?,
        encode_channel(rgb.b)?,
    ))
}

fn check_unit(v: f64) -> Result<()> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        debug!(value = v, "rejecting normalized value outside [0, 1]");
        Err(Error::NormalizedOutOfRange { value: v })
    }
}
