//! 3D vector type for color triplets.
//!
//! [`Vec3`] carries RGB, LMS or Lab components through matrix transforms.
//! Storage is `f64`: the Oklab round trip must close to 1e-6, which single
//! precision cannot guarantee after a cube root and a cube.
//!
//! # Usage
//!
//! ```rust
//! use okcolor_math::Vec3;
//!
//! let lms = Vec3::new(0.125, 0.5, 1.0);
//! let roots = lms.map(f64::cbrt);
//! assert!((roots.x - 0.5).abs() < 1e-12);
//! ```

/// A 3D vector for color triplets (RGB, LMS, Lab).
///
/// For RGB: x=R, y=G, z=B. For LMS: x=L, y=M, z=S.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// First component
    pub x: f64,
    /// Second component
    pub y: f64,
    /// Third component
    pub z: f64,
}

impl Vec3 {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Applies `f` to each component.
    ///
    /// Used for the component-wise nonlinearities between matrix stages.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_map_cbrt_negative() {
        // cbrt is defined on the whole real line
        let v = Vec3::new(-8.0, 0.0, 27.0).map(f64::cbrt);
        assert_eq!(v, Vec3::new(-2.0, 0.0, 3.0));
    }

    #[test]
    fn test_vec3_array_conversions() {
        let v = Vec3::from([0.25, -0.5, 0.75]);
        assert_eq!(v, Vec3::new(0.25, -0.5, 0.75));
        assert_eq!(<[f64; 3]>::from(v), [0.25, -0.5, 0.75]);
    }

    #[test]
    fn test_vec3_glam_roundtrip() {
        let v = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!(Vec3::from(v.to_glam()), v);
    }
}
