//! Fixed linear stages of the Oklab transform.
//!
//! Values are the 2021-01-25 revision published by Björn Ottosson and are
//! reproduced digit for digit. Other Oklab implementations use the same
//! digits; changing any of them breaks interoperability and round-trip
//! closure.
//!
//! ```text
//! linear sRGB --M1--> LMS --cbrt--> LMS' --M2--> Oklab
//! linear sRGB <-M1_INV- LMS <-cube-- LMS' <-M2_INV- Oklab
//! ```

use okcolor_math::Mat3;

/// Linear sRGB to LMS cone response.
#[allow(clippy::excessive_precision)]
pub const M1: Mat3 = Mat3::from_rows([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Cube-rooted LMS to Oklab (L, a, b).
#[allow(clippy::excessive_precision)]
pub const M2: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// Oklab to cube-rooted LMS. Inverse of [`M2`].
#[allow(clippy::excessive_precision)]
pub const M2_INV: Mat3 = Mat3::from_rows([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// LMS to linear sRGB. Inverse of [`M1`].
#[allow(clippy::excessive_precision)]
pub const M1_INV: Mat3 = Mat3::from_rows([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
]);
