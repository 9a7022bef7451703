//! 2D vector

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{MathError, MathResult};
use super::scalar::clamp;

/// A 2D vector of `f32` components
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub const ZERO: Vec2f = Vec2f::new(0.0, 0.0);
    pub const ONE: Vec2f = Vec2f::new(1.0, 1.0);
    pub const X: Vec2f = Vec2f::new(1.0, 0.0);
    pub const Y: Vec2f = Vec2f::new(0.0, 1.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn from_array(values: [f32; 2]) -> Self {
        Self::new(values[0], values[1])
    }

    pub const fn to_array(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Per-axis comparison: both `|dx|` and `|dy|` must be below `offset`.
    ///
    /// This is a box test, not a distance test.
    pub fn equals_offset(&self, other: &Vec2f, offset: f32) -> bool {
        (self.x - other.x).abs() < offset && (self.y - other.y).abs() < offset
    }

    pub fn magnitude(&self) -> f32 {
        self.squared_magnitude().sqrt()
    }

    pub fn squared_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn normalized(&self) -> MathResult<Vec2f> {
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

    pub fn dot(&self, other: &Vec2f) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn distance(&self, other: &Vec2f) -> f32 {
        (*self - *other).magnitude()
    }

    /// Reflect around the normal `n`, which is expected to be unit length.
    pub fn reflect(&self, n: &Vec2f) -> Vec2f {
        *self - *n * (2.0 * self.dot(n))
    }

    /// Counter-clockwise perpendicular
    pub fn perp(&self) -> Vec2f {
        Vec2f::new(-self.y, self.x)
    }

    /// Interpolate with `t` clamped to `[0, 1]`
    pub fn lerp(a: &Vec2f, b: &Vec2f, t: f32) -> Vec2f {
        Self::lerp_unclamped(a, b, clamp(t, 0.0, 1.0))
    }

    pub fn lerp_unclamped(a: &Vec2f, b: &Vec2f, t: f32) -> Vec2f {
        *b * t + *a * (1.0 - t)
    }
}

impl Add for Vec2f {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vec2f::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2f {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vec2f::new(self.x - other.x, self.y - other.y)
    }
}

impl AddAssign for Vec2f {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for Vec2f {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<f32> for Vec2f {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Vec2f::new(self.x * s, self.y * s)
    }
}

impl Mul<Vec2f> for f32 {
    type Output = Vec2f;
    fn mul(self, v: Vec2f) -> Vec2f {
        v * self
    }
}

/// Component-wise division, dividing by zero yields IEEE-754 inf/NaN.
impl Div<f32> for Vec2f {
    type Output = Self;
    fn div(self, s: f32) -> Self {
        Vec2f::new(self.x / s, self.y / s)
    }
}

impl MulAssign<f32> for Vec2f {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

impl DivAssign<f32> for Vec2f {
    fn div_assign(&mut self, s: f32) {
        *self = *self / s;
    }
}

impl Neg for Vec2f {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Index<usize> for Vec2f {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2f index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec2f {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2f index out of range: {index}"),
        }
    }
}

impl std::fmt::Display for Vec2f {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vec2_operations() {
        let v1 = Vec2f::new(1.0, 2.0);
        let v2 = Vec2f::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2f::new(4.0, 6.0));
        assert_eq!(v1 - v2, Vec2f::new(-2.0, -2.0));
        assert_eq!(v1 * 2.0, Vec2f::new(2.0, 4.0));
        assert_eq!(2.0 * v1, Vec2f::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vec2f::new(1.5, 2.0));
        assert_eq!(-v1, Vec2f::new(-1.0, -2.0));
        assert_eq!(v1.dot(&v2), 11.0);
        assert_eq!(v1.magnitude(), 5.0f32.sqrt());
        assert_eq!(v1.squared_magnitude(), 5.0);
        assert_eq!(Vec2f::new(3.0, 4.0).distance(&Vec2f::ZERO), 5.0);
    }

    #[test]
    fn test_assign_operators() {
        let mut v = Vec2f::new(1.0, 2.0);
        v += Vec2f::ONE;
        assert_eq!(v, Vec2f::new(2.0, 3.0));
        v -= Vec2f::X;
        assert_eq!(v, Vec2f::new(1.0, 3.0));
        v *= 2.0;
        assert_eq!(v, Vec2f::new(2.0, 6.0));
        v /= 2.0;
        assert_eq!(v, Vec2f::new(1.0, 3.0));
        v.set(7.0, 8.0);
        assert_eq!(v, Vec2f::new(7.0, 8.0));
    }

    #[test]
    fn test_normalize() {
        let v = Vec2f::new(3.0, 4.0);
        assert_eq!(v.normalized(), Ok(Vec2f::new(0.6, 0.8)));
        let mut w = Vec2f::new(0.0, -2.0);
        w.normalize().unwrap();
        assert_eq!(w, Vec2f::new(0.0, -1.0));
    }

    #[test]
    fn test_normalize_zero_fails() {
        let mut v = Vec2f::ZERO;
        assert_eq!(v.normalized(), Err(MathError::ZeroLength));
        assert_eq!(v.normalize(), Err(MathError::ZeroLength));
        assert_eq!(v, Vec2f::ZERO);
    }

    #[test]
    fn test_equals_offset_is_a_box_test() {
        let a = Vec2f::new(0.0, 0.0);
        let b = Vec2f::new(0.05, 0.05);
        assert!(a.equals_offset(&b, 0.1));
        assert!(!a.equals_offset(&b, 0.01));
        // distance is ~0.085, outside a 0.08 circle but inside the box
        let c = Vec2f::new(0.06, 0.06);
        assert!(a.equals_offset(&c, 0.08));
    }

    #[test]
    fn test_reflect() {
        let v = Vec2f::new(1.0, -1.0);
        assert_eq!(v.reflect(&Vec2f::Y), Vec2f::new(1.0, 1.0));
    }

    #[test]
    fn test_lerp() {
        let a = Vec2f::new(0.0, 0.0);
        let b = Vec2f::new(10.0, -10.0);
        assert_eq!(Vec2f::lerp(&a, &b, 0.5), Vec2f::new(5.0, -5.0));
        assert_eq!(Vec2f::lerp(&a, &b, 2.0), b);
        assert_eq!(Vec2f::lerp(&a, &b, -1.0), a);
        assert_eq!(Vec2f::lerp_unclamped(&a, &b, 2.0), Vec2f::new(20.0, -20.0));
    }

    #[test]
    fn test_index() {
        let mut v = Vec2f::from_array([4.0, 5.0]);
        assert_eq!(v[0], 4.0);
        assert_eq!(v[1], 5.0);
        v[1] = 9.0;
        assert_eq!(v.to_array(), [4.0, 9.0]);
        assert_eq!(v.perp(), Vec2f::new(-9.0, 4.0));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let v = Vec2f::ONE;
        let _ = v[2];
    }
}
