//! 3D vector
//!
//! Directions and points share this type, whether the translation of a
//! [`Mat44f`](super::Mat44f) applies is decided by the transform method used.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{MathError, MathResult};
use super::scalar::clamp;

/// Below this cosine `slerp` treats its inputs as opposite directions.
const OPPOSITE_DOT: f32 = -1.0 + 1e-6;

/// A 3D vector of `f32` components
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    pub const ZERO: Vec3f = Vec3f::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3f = Vec3f::new(1.0, 1.0, 1.0);
    pub const X: Vec3f = Vec3f::new(1.0, 0.0, 0.0);
    pub const Y: Vec3f = Vec3f::new(0.0, 1.0, 0.0);
    pub const Z: Vec3f = Vec3f::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn from_array(values: [f32; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }

    pub const fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Per-axis comparison: every `|d|` must be below `offset`.
    ///
    /// This is a box test, not a distance test.
    pub fn equals_offset(&self, other: &Vec3f, offset: f32) -> bool {
        (self.x - other.x).abs() < offset
            && (self.y - other.y).abs() < offset
            && (self.z - other.z).abs() < offset
    }

    pub fn magnitude(&self) -> f32 {
        self.squared_magnitude().sqrt()
    }

    pub fn squared_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn normalized(&self) -> MathResult<Vec3f> {
        let len = self.magnitude();
        if len == 0.0 {
            log::trace!("refusing to normalize zero length {self:?}");
            return Err(MathError::ZeroLength);
        }
        Ok(*self / len)
    }

    /// Normalize in place, `self` is left untouched on error.
    pub fn normalize(&mut self) -> MathResult<()> {
        *self = self.normalized()?;
        Ok(())
    }

    pub fn dot(&self, other: &Vec3f) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product, `X.cross(Y) == Z`.
    pub fn cross(&self, other: &Vec3f) -> Vec3f {
        Vec3f::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn distance(&self, other: &Vec3f) -> f32 {
        (*self - *other).magnitude()
    }

    /// Reflect around the normal `n`, which is expected to be unit length.
    pub fn reflect(&self, n: &Vec3f) -> Vec3f {
        *self - *n * (2.0 * self.dot(n))
    }

    /// Interpolate with `t` clamped to `[0, 1]`
    pub fn lerp(a: &Vec3f, b: &Vec3f, t: f32) -> Vec3f {
        Self::lerp_unclamped(a, b, clamp(t, 0.0, 1.0))
    }

    pub fn lerp_unclamped(a: &Vec3f, b: &Vec3f, t: f32) -> Vec3f {
        *b * t + *a * (1.0 - t)
    }

    /// Spherical interpolation between two unit directions.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`, rounding can push a
    /// dot product of unit vectors slightly outside the domain. Opposite
    /// directions have no unique arc, the path then turns around an axis
    /// perpendicular to `start`, picked the way
    /// [`Quaternion::from_rotation_arc`](super::Quaternion::from_rotation_arc) does.
    pub fn slerp(start: &Vec3f, end: &Vec3f, t: f32) -> Vec3f {
        let dot = clamp(start.dot(end), -1.0, 1.0);
        let theta = dot.acos() * t;
        let relative = if dot <= OPPOSITE_DOT {
            start.perpendicular()
        } else {
            match (*end - *start * dot).normalized() {
                Ok(relative) => relative,
                // end == start * dot, the inputs are parallel and sin(theta) is 0
                Err(_) => Vec3f::ZERO,
            }
        };
        *start * theta.cos() + relative * theta.sin()
    }

    /// Unit vector perpendicular to a non-zero `self`
    fn perpendicular(&self) -> Vec3f {
        let mut axis = self.cross(&Vec3f::X);
        if axis.magnitude() == 0.0 {
            axis = self.cross(&Vec3f::Y);
        }
        axis / axis.magnitude()
    }
}

impl Add for Vec3f {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vec3f::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3f {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vec3f::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl AddAssign for Vec3f {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Vec3f {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<f32> for Vec3f {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Vec3f::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vec3f> for f32 {
    type Output = Vec3f;
    fn mul(self, v: Vec3f) -> Vec3f {
        v * self
    }
}

/// Component-wise division, dividing by zero yields IEEE-754 inf/NaN.
impl Div<f32> for Vec3f {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        Vec3f::new(self.x / s, self.y / s, self.z / s)
    }
}

impl MulAssign<f32> for Vec3f {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl DivAssign<f32> for Vec3f {
    fn div_assign(&mut self, s: f32) {
        *self = *self / s;
    }
}

impl Neg for Vec3f {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Index<usize> for Vec3f {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3f index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec3f {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3f index out of range: {index}"),
        }
    }
}

impl std::fmt::Display for Vec3f {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}
