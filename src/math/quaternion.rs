//! Rotation quaternion
//!
//! Vectors rotate with the sandwich product `q * v * conj(q)` and a positive
//! angle turns counter-clockwise around the axis, so a quaternion and its
//! [`Quaternion::to_matrix`] always agree:
//!
//! ```
//! use wolf_math::{Quaternion, Vec3f};
//!
//! let q = Quaternion::from_axis_angle(Vec3f::Z, 90.0);
//! let v = q.rotate(Vec3f::X);
//! assert!(v.equals_offset(&Vec3f::Y, 1e-5));
//! assert!(q.to_matrix().transform_direction(Vec3f::X).equals_offset(&v, 1e-5));
//! ```
//!
//! The product `a * b` rotates by `b` first, then by `a`. Unit length is not
//! enforced, normalize after long chains of products or interpolation.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::SLERP_LERP_THRESHOLD;
use super::error::{MathError, MathResult};
use super::matrix::Mat44f;
use super::scalar::{clamp, deg_to_rad, rad_to_deg};
use super::vec3::Vec3f;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn from_array(values: [f32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    pub const fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) {
        *self = Self::new(x, y, z, w);
    }

    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Rotation of `angle` degrees around `axis`, which must be unit length.
    pub fn from_axis_angle(axis: Vec3f, angle: f32) -> Self {
        let mut q = Self::IDENTITY;
        q.set_axis_angle(axis, angle);
        q
    }

    pub fn set_axis_angle(&mut self, axis: Vec3f, angle: f32) {
        let (s, c) = (deg_to_rad(angle) * 0.5).sin_cos();
        self.x = axis.x * s;
        self.y = axis.y * s;
        self.z = axis.z * s;
        self.w = c;
    }

    /// Unit axis and angle in degrees.
    ///
    /// A rotation of 0 (or 360) degrees has no axis and fails with
    /// [`MathError::ZeroLength`].
    pub fn to_axis_angle(&self) -> MathResult<(Vec3f, f32)> {
        let w = clamp(self.w, -1.0, 1.0);
        let s = (1.0 - w * w).sqrt();
        if s == 0.0 {
            log::trace!("no rotation axis for {self:?}");
            return Err(MathError::ZeroLength);
        }
        let axis = Vec3f::new(self.x, self.y, self.z) / s;
        Ok((axis, rad_to_deg(2.0 * w.acos())))
    }

    /// Build from Euler angles in degrees.
    ///
    /// `x` is the yaw around Y, `y` the pitch around X and `z` the roll
    /// around Z. Roll is applied first, then pitch, then yaw.
    pub fn from_euler(angles: Vec3f) -> Self {
        let (sy, cy) = (deg_to_rad(angles.x) * 0.5).sin_cos();
        let (sp, cp) = (deg_to_rad(angles.y) * 0.5).sin_cos();
        let (sr, cr) = (deg_to_rad(angles.z) * 0.5).sin_cos();
        Self::new(
            cy * sp * cr + sy * cp * sr,
            sy * cp * cr - cy * sp * sr,
            cy * cp * sr - sy * sp * cr,
            cy * cp * cr + sy * sp * sr,
        )
    }

    /// Angles in degrees around X, Y and Z, for a rotation applied in that
    /// order. This is the inverse of [`Mat44f::set_rotation_euler`].
    ///
    /// At a pitch of exactly ±90 degrees X and Z share an axis, the whole
    /// rotation is reported around X and Z is 0.
    pub fn to_euler_angles(&self) -> Vec3f {
        let Self { x, y, z, w } = *self;
        let m00 = 1.0 - 2.0 * (y * y + z * z);
        let m10 = 2.0 * (x * y + w * z);
        let m20 = 2.0 * (x * z - w * y);
        let m21 = 2.0 * (y * z + w * x);
        let m22 = 1.0 - 2.0 * (x * x + y * y);

        let sy = clamp(-m20, -1.0, 1.0);
        let cy = (1.0 - sy * sy).sqrt();
        let pitch = sy.atan2(cy);

        if sy != 1.0 && sy != -1.0 {
            Vec3f::new(
                rad_to_deg(m21.atan2(m22)),
                rad_to_deg(pitch),
                rad_to_deg(m10.atan2(m00)),
            )
        } else {
            let m11 = 1.0 - 2.0 * (x * x + z * z);
            let m12 = 2.0 * (y * z - w * x);
            Vec3f::new(rad_to_deg((-m12).atan2(m11)), rad_to_deg(pitch), 0.0)
        }
    }

    /// Rotation part of `m`, which must not carry scale.
    pub fn from_matrix(m: &Mat44f) -> Self {
        let m = &m.m;
        let trace = 1.0 + m[0][0] + m[1][1] + m[2][2];

        if trace > 0.00001 {
            let s = trace.sqrt() * 2.0;
            Self::new(
                (m[1][2] - m[2][1]) / s,
                (m[2][0] - m[0][2]) / s,
                (m[0][1] - m[1][0]) / s,
                0.25 * s,
            )
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = (1.0 + m[0][0] - m[1][1] - m[2][2]).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (m[0][1] + m[1][0]) / s,
                (m[2][0] + m[0][2]) / s,
                (m[1][2] - m[2][1]) / s,
            )
        } else if m[1][1] > m[2][2] {
            let s = (1.0 + m[1][1] - m[0][0] - m[2][2]).sqrt() * 2.0;
            Self::new(
                (m[0][1] + m[1][0]) / s,
                0.25 * s,
                (m[1][2] + m[2][1]) / s,
                (m[2][0] - m[0][2]) / s,
            )
        } else {
            let s = (1.0 + m[2][2] - m[0][0] - m[1][1]).sqrt() * 2.0;
            Self::new(
                (m[2][0] + m[0][2]) / s,
                (m[1][2] + m[2][1]) / s,
                0.25 * s,
                (m[0][1] - m[1][0]) / s,
            )
        }
    }

    /// Rotation matrix whose rows are [`right`](Self::right),
    /// [`up`](Self::up) and [`forward`](Self::forward).
    pub fn to_matrix(&self) -> Mat44f {
        let mut matrix = Mat44f::IDENTITY;
        for (row, axis) in matrix.m.iter_mut().zip([self.right(), self.up(), self.forward()]) {
            row[0] = axis.x;
            row[1] = axis.y;
            row[2] = axis.z;
        }
        matrix
    }

    /// Shortest rotation taking the direction `from` to the direction `to`.
    ///
    /// Opposite directions turn 180 degrees around an arbitrary perpendicular.
    pub fn from_rotation_arc(from: Vec3f, to: Vec3f) -> MathResult<Self> {
        let from = from.normalized()?;
        let to = to.normalized()?;

        let dot = from.dot(&to);
        let cross = from.cross(&to);

        if cross.magnitude() == 0.0 {
            if dot > 0.0 {
                return Ok(Self::IDENTITY);
            }
            let mut axis = from.cross(&Vec3f::X);
            if axis.magnitude() == 0.0 {
                axis = from.cross(&Vec3f::Y);
            }
            let axis = axis.normalized()?;
            return Ok(Self::new(axis.x, axis.y, axis.z, 0.0));
        }

        // abs() keeps sqrt away from a dot product that rounded past ±1
        let axis = cross.normalized()? * (0.5 * (1.0 - dot).abs()).sqrt();
        Ok(Self::new(
            axis.x,
            axis.y,
            axis.z,
            (0.5 * (1.0 + dot).abs()).sqrt(),
        ))
    }

    /// Rotation taking +Z to `forward`, with +Y as close to `up` as possible.
    pub fn look_rotation(forward: Vec3f, up: Vec3f) -> MathResult<Self> {
        let mut m = Mat44f::IDENTITY;
        m.set_rotation_dir(forward, up)?;
        Ok(Self::from_matrix(&m))
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, equal to the conjugate for unit quaternions.
    pub fn inverse(&self) -> MathResult<Self> {
        let len2 = self.squared_length();
        if len2 == 0.0 {
            log::trace!("zero quaternion has no inverse");
            return Err(MathError::ZeroLength);
        }
        Ok(self.conjugate() * (1.0 / len2))
    }

    pub fn dot(&self, other: &Quaternion) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length(&self) -> f32 {
        self.squared_length().sqrt()
    }

    pub fn squared_length(&self) -> f32 {
        self.dot(self)
    }

    pub fn normalized(&self) -> MathResult<Self> {
        let len = self.length();
        if len == 0.0 {
            log::trace!("refusing to normalize zero quaternion");
            return Err(MathError::ZeroLength);
        }
        Ok(*self * (1.0 / len))
    }

    /// Normalize in place, `self` is left untouched on error.
    pub fn normalize(&mut self) -> MathResult<()> {
        *self = self.normalized()?;
        Ok(())
    }

    /// Rotate `v`. Only meaningful for unit quaternions.
    pub fn rotate(&self, v: Vec3f) -> Vec3f {
        let r = (*self * v) * self.conjugate();
        Vec3f::new(r.x, r.y, r.z)
    }

    /// Rotated +X
    pub fn right(&self) -> Vec3f {
        let Self { x, y, z, w } = *self;
        Vec3f::new(
            1.0 - 2.0 * (y * y + z * z),
            2.0 * (x * y + w * z),
            2.0 * (x * z - w * y),
        )
    }

    /// Rotated +Y
    pub fn up(&self) -> Vec3f {
        let Self { x, y, z, w } = *self;
        Vec3f::new(
            2.0 * (x * y - w * z),
            1.0 - 2.0 * (x * x + z * z),
            2.0 * (y * z + w * x),
        )
    }

    /// Rotated +Z
    pub fn forward(&self) -> Vec3f {
        let Self { x, y, z, w } = *self;
        Vec3f::new(
            2.0 * (x * z + w * y),
            2.0 * (y * z - w * x),
            1.0 - 2.0 * (x * x + y * y),
        )
    }

    /// Spherical interpolation along the shorter arc.
    ///
    /// Close rotations (`|dot| >= 0.95`) fall back to [`Quaternion::lerp`].
    /// Zero length inputs fail with [`MathError::ZeroLength`].
    pub fn slerp(a: &Quaternion, b: &Quaternion, t: f32) -> MathResult<Quaternion> {
        if a.squared_length() == 0.0 || b.squared_length() == 0.0 {
            log::trace!("cannot interpolate towards or from a zero quaternion");
            return Err(MathError::ZeroLength);
        }
        let mut dot = a.dot(b);
        let mut end = *b;
        if dot < 0.0 {
            dot = -dot;
            end = -end;
        }

        if dot < SLERP_LERP_THRESHOLD {
            let angle = dot.acos();
            let sin_start = (angle * (1.0 - t)).sin();
            let sin_end = (angle * t).sin();
            Ok((*a * sin_start + end * sin_end) * (1.0 / angle.sin()))
        } else {
            Self::lerp(a, &end, t)
        }
    }

    /// Normalized linear interpolation along the shorter arc.
    ///
    /// Fails with [`MathError::ZeroLength`] when the blend has no length,
    /// which takes a zero input or a `t` outside `[0, 1]`.
    pub fn lerp(a: &Quaternion, b: &Quaternion, t: f32) -> MathResult<Quaternion> {
        let end = if a.dot(b) < 0.0 { -*b } else { *b };
        let blend = *a * (1.0 - t) + end * t;
        blend.normalized()
    }

    /// Exponential of a pure quaternion `(v * a, 0)` with unit `v`: `(v * sin(a), cos(a))`
    pub fn exp(&self) -> Quaternion {
        let v = Vec3f::new(self.x, self.y, self.z);
        let a = v.magnitude();
        if a > 0.0 {
            let v = v * (a.sin() / a);
            Self::new(v.x, v.y, v.z, a.cos())
        } else {
            Self::new(0.0, 0.0, 0.0, a.cos())
        }
    }

    /// Logarithm of a unit quaternion `(v * sin(a), cos(a))`: `(v * a, 0)`
    pub fn ln(&self) -> Quaternion {
        let a = clamp(self.w, -1.0, 1.0).acos();
        let sin_a = a.sin();
        if sin_a > 0.0 {
            let v = Vec3f::new(self.x, self.y, self.z) * (a / sin_a);
            Self::new(v.x, v.y, v.z, 0.0)
        } else {
            Self::new(0.0, 0.0, 0.0, 0.0)
        }
    }
}

impl Add for Quaternion {
    type Output = Self;
    fn add(self, q: Self) -> Self {
        Self::new(self.x + q.x, self.y + q.y, self.z + q.z, self.w + q.w)
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, q: Self) {
        *self = *self + q;
    }
}

/// Hamilton product, `q` is applied first
impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, q: Self) -> Self {
        Self::new(
            self.y * q.z - self.z * q.y + self.w * q.x + self.x * q.w,
            self.z * q.x - self.x * q.z + self.w * q.y + self.y * q.w,
            self.x * q.y - self.y * q.x + self.w * q.z + self.z * q.w,
            self.w * q.w - self.x * q.x - self.y * q.y - self.z * q.z,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, q: Self) {
        *self = *self * q;
    }
}

/// Product with the pure quaternion `(v, 0)`
impl Mul<Vec3f> for Quaternion {
    type Output = Quaternion;
    fn mul(self, v: Vec3f) -> Quaternion {
        Quaternion::new(
            self.w * v.x + self.y * v.z - self.z * v.y,
            self.w * v.y + self.z * v.x - self.x * v.z,
            self.w * v.z + self.x * v.y - self.y * v.x,
            -(self.x * v.x + self.y * v.y + self.z * v.z),
        )
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Mul<Quaternion> for f32 {
    type Output = Quaternion;
    fn mul(self, q: Quaternion) -> Quaternion {
        q * self
    }
}

impl MulAssign<f32> for Quaternion {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

/// Same rotation, opposite hemisphere
impl Neg for Quaternion {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Index<usize> for Quaternion {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Quaternion index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Quaternion {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Quaternion index out of range: {index}"),
        }
    }
}

impl std::fmt::Display for Quaternion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.z, self.w)
    }
}
