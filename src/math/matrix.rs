//! 4x4 matrix for 3D transforms
//!
//! Matrices are row-major and vectors multiply from the left, as row vectors.
//! When matrices are multiplied as A * B, the transformation A is applied
//! first, then B.
//!
//! For a point p, `(A * B).transform_point(p)` means:
//! 1. First apply A to p
//! 2. Then apply B to the result
//!
//! The world space operations (`translate`, `rotate`, `scale`) therefore
//! compute `self * T`, while the `_local` variants compute `T * self`.

use std::ops::{Index, IndexMut, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::SINGULAR_THRESHOLD;
use super::error::{MathError, MathResult};
use super::scalar::deg_to_rad;
use super::vec3::Vec3f;

/// Gauss-Jordan elimination with partial pivoting.
///
/// The largest magnitude entry of each column is swapped into the pivot
/// position. A pivot with `|pivot| <= SINGULAR_THRESHOLD` aborts.
pub(crate) fn gauss_jordan_inverse<const N: usize>(
    mut m: [[f32; N]; N],
) -> MathResult<[[f32; N]; N]> {
    let mut inv = [[0.0f32; N]; N];
    for (i, row) in inv.iter_mut().enumerate() {
        row[i] = 1.0;
    }

    for i in 0..N {
        let mut pivot_row = i;
        for j in (i + 1)..N {
            if m[j][i].abs() > m[pivot_row][i].abs() {
                pivot_row = j;
            }
        }
        if pivot_row != i {
            m.swap(i, pivot_row);
            inv.swap(i, pivot_row);
        }

        let pivot = m[i][i];
        if pivot.abs() <= SINGULAR_THRESHOLD {
            log::debug!("matrix is singular, pivot {pivot} in column {i}");
            return Err(MathError::SingularMatrix { column: i, pivot });
        }

        let t = 1.0 / pivot;
        for k in 0..N {
            m[i][k] *= t;
            inv[i][k] *= t;
        }

        let pivot_values = m[i];
        let pivot_inv = inv[i];
        for j in 0..N {
            if j == i {
                continue;
            }
            let t = m[j][i];
            for k in 0..N {
                m[j][k] -= pivot_values[k] * t;
                inv[j][k] -= pivot_inv[k] * t;
            }
        }
    }
    Ok(inv)
}

/// 4x4 matrix for representing affine and projective transformations of 3D vectors
///
/// Layout:
/// ```text
/// [ m[0][0] m[0][1] m[0][2] m[0][3] ]   <- x basis
/// [ m[1][0] m[1][1] m[1][2] m[1][3] ]   <- y basis
/// [ m[2][0] m[2][1] m[2][2] m[2][3] ]   <- z basis
/// [ m[3][0] m[3][1] m[3][2] m[3][3] ]   <- translation
/// ```
///
/// Indexing with `matrix[row][col]` and the flat view from
/// [`Mat44f::as_slice`] address the same storage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat44f {
    /// Row-major 4x4 matrix data
    pub m: [[f32; 4]; 4],
}

impl Default for Mat44f {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat44f {
    pub const IDENTITY: Mat44f = Mat44f::new(
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    );

    /// Create a new matrix with explicit values (row-major order)
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m14: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m24: f32,
        m31: f32,
        m32: f32,
        m33: f32,
        m34: f32,
        m41: f32,
        m42: f32,
        m43: f32,
        m44: f32,
    ) -> Self {
        Self {
            m: [
                [m11, m12, m13, m14],
                [m21, m22, m23, m24],
                [m31, m32, m33, m34],
                [m41, m42, m43, m44],
            ],
        }
    }

    pub const fn from_rows(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    pub fn from_array(values: [f32; 16]) -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, value) in values.into_iter().enumerate() {
            m[i / 4][i % 4] = value;
        }
        Self { m }
    }

    /// Copy of the 16 values in row-major order
    pub fn to_array(&self) -> [f32; 16] {
        let mut values = [0.0; 16];
        values.copy_from_slice(self.as_slice());
        values
    }

    pub fn as_slice(&self) -> &[f32] {
        self.m.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.m.as_flattened_mut()
    }

    pub fn from_translation(translation: Vec3f) -> Self {
        let mut matrix = Self::IDENTITY;
        matrix.set_translation(translation);
        matrix
    }

    pub fn from_scale(scale: Vec3f) -> Self {
        let mut matrix = Self::IDENTITY;
        matrix.set_scale(scale);
        matrix
    }

    /// Rotation of `angle` degrees around `axis`, see [`Mat44f::set_rotation`].
    ///
    /// Argument order matches
    /// [`Quaternion::from_axis_angle`](super::Quaternion::from_axis_angle).
    pub fn from_axis_angle(axis: Vec3f, angle: f32) -> MathResult<Self> {
        let mut matrix = Self::IDENTITY;
        matrix.set_rotation(angle, axis)?;
        Ok(matrix)
    }

    /// Rotation around X, then Y, then Z, all in degrees
    pub fn from_rotation_euler(angle_x: f32, angle_y: f32, angle_z: f32) -> Self {
        let mut matrix = Self::IDENTITY;
        matrix.set_rotation_euler(angle_x, angle_y, angle_z);
        matrix
    }

    pub fn look_at(eye: Vec3f, target: Vec3f, up: Vec3f) -> MathResult<Self> {
        let mut matrix = Self::IDENTITY;
        matrix.set_look_at(eye, target, up)?;
        Ok(matrix)
    }

    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut matrix = Self::IDENTITY;
        matrix.set_perspective(fov, aspect, near, far);
        matrix
    }

    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut matrix = Self::IDENTITY;
        matrix.set_orthographic(left, right, bottom, top, near, far);
        matrix
    }

    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Reset to a pure translation
    pub fn set_translation(&mut self, translation: Vec3f) {
        self.set_identity();
        self.set_position(translation);
    }

    pub fn position(&self) -> Vec3f {
        Vec3f::new(self.m[3][0], self.m[3][1], self.m[3][2])
    }

    /// Overwrite the translation row, leaving the rest untouched
    pub fn set_position(&mut self, position: Vec3f) {
        self.m[3][0] = position.x;
        self.m[3][1] = position.y;
        self.m[3][2] = position.z;
    }

    /// Per-axis scale as the length of each basis row.
    ///
    /// Only meaningful for matrices without shear.
    pub fn extract_scale(&self) -> Vec3f {
        let row = |i: usize| Vec3f::new(self.m[i][0], self.m[i][1], self.m[i][2]).magnitude();
        Vec3f::new(row(0), row(1), row(2))
    }

    /// Reset to a rotation of `angle` degrees around `axis` (Rodrigues).
    ///
    /// Any previous translation or scale is discarded. The axis doesn't need
    /// to be unit length but must not be zero.
    pub fn set_rotation(&mut self, angle: f32, axis: Vec3f) -> MathResult<()> {
        let axis = axis.normalized()?;
        *self = Self::unit_axis_rotation(angle, axis);
        Ok(())
    }

    /// Reset to a rotation around X, then Y, then Z, all in degrees
    pub fn set_rotation_euler(&mut self, angle_x: f32, angle_y: f32, angle_z: f32) {
        let rx = Self::unit_axis_rotation(angle_x, Vec3f::X);
        let ry = Self::unit_axis_rotation(angle_y, Vec3f::Y);
        let rz = Self::unit_axis_rotation(angle_z, Vec3f::Z);
        *self = rx * ry * rz;
    }

    fn unit_axis_rotation(angle: f32, axis: Vec3f) -> Self {
        let (s, c) = deg_to_rad(angle).sin_cos();
        let t = 1.0 - c;
        let Vec3f { x, y, z } = axis;
        Self::new(
            t * x * x + c,
            t * x * y + s * z,
            t * x * z - s * y,
            0.0,
            t * x * y - s * z,
            t * y * y + c,
            t * y * z + s * x,
            0.0,
            t * x * z + s * y,
            t * y * z - s * x,
            t * z * z + c,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Reset to a pure scale
    pub fn set_scale(&mut self, scale: Vec3f) {
        self.set_identity();
        self.m[0][0] = scale.x;
        self.m[1][1] = scale.y;
        self.m[2][2] = scale.z;
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    pub fn transposed(&self) -> Self {
        let mut result = [[0.0; 4]; 4];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[j][i];
            }
        }
        Self { m: result }
    }

    /// Inverse through Gauss-Jordan elimination with partial pivoting
    pub fn inverse(&self) -> MathResult<Self> {
        gauss_jordan_inverse(self.m).map(|m| Self { m })
    }

    /// Invert in place. A singular matrix is reset to identity and the
    /// error is returned.
    pub fn invert(&mut self) -> MathResult<()> {
        match self.inverse() {
            Ok(inverse) => {
                *self = inverse;
                Ok(())
            }
            Err(error) => {
                self.set_identity();
                Err(error)
            }
        }
    }

    /// Translate in parent space
    pub fn translate(&mut self, translation: Vec3f) {
        *self = *self * Self::from_translation(translation);
    }

    /// Translate in object space
    pub fn translate_local(&mut self, translation: Vec3f) {
        *self = Self::from_translation(translation) * *self;
    }

    /// Rotate around X, then Y, then Z (degrees) in parent space
    pub fn rotate(&mut self, angle_x: f32, angle_y: f32, angle_z: f32) {
        *self = *self * Self::from_rotation_euler(angle_x, angle_y, angle_z);
    }

    /// Rotate around X, then Y, then Z (degrees) in object space
    pub fn rotate_local(&mut self, angle_x: f32, angle_y: f32, angle_z: f32) {
        *self = Self::from_rotation_euler(angle_x, angle_y, angle_z) * *self;
    }

    /// Scale in parent space, the translation row is scaled too
    pub fn scale(&mut self, scale: Vec3f) {
        *self = *self * Self::from_scale(scale);
    }

    /// Scale in object space
    pub fn scale_local(&mut self, scale: Vec3f) {
        *self = Self::from_scale(scale) * *self;
    }

    /// Rescale each basis row to the requested length, keeping its direction.
    ///
    /// Fails without modifying `self` if a basis row has zero length.
    pub fn replace_scale(&mut self, scale: Vec3f) -> MathResult<()> {
        let current = self.extract_scale();
        let mut factors = [0.0; 3];
        for (axis, factor) in factors.iter_mut().enumerate() {
            if current[axis] == 0.0 {
                return Err(MathError::ZeroScale { axis });
            }
            *factor = scale[axis] / current[axis];
        }
        for (row, factor) in self.m.iter_mut().zip(factors) {
            for cell in row.iter_mut().take(3) {
                *cell *= factor;
            }
        }
        Ok(())
    }

    /// Right-handed view matrix looking from `eye` at `target`.
    ///
    /// `eye` maps to the origin and the view direction to -Z. Fails when
    /// `eye == target` or `up` is parallel to the view direction.
    pub fn set_look_at(&mut self, eye: Vec3f, target: Vec3f, up: Vec3f) -> MathResult<()> {
        let front = (target - eye).normalized()?;
        let right = front.cross(&up).normalized()?;
        let top = right.cross(&front).normalized()?;

        self.set_identity();
        self.m[0][0] = right.x;
        self.m[0][1] = top.x;
        self.m[0][2] = -front.x;
        self.m[1][0] = right.y;
        self.m[1][1] = top.y;
        self.m[1][2] = -front.y;
        self.m[2][0] = right.z;
        self.m[2][1] = top.z;
        self.m[2][2] = -front.z;

        self.translate_local(-eye);
        Ok(())
    }

    /// OpenGL style perspective projection, `fov` is the vertical angle in degrees.
    ///
    /// `m[2][3] = -1` moves `-z` into the homogeneous `w`.
    pub fn set_perspective(&mut self, fov: f32, aspect: f32, near: f32, far: f32) {
        self.set_identity();

        let f = 1.0 / (deg_to_rad(fov) * 0.5).tan();

        self.m[0][0] = f / aspect;
        self.m[1][1] = f;
        self.m[2][2] = (far + near) / (near - far);
        self.m[2][3] = -1.0;
        self.m[3][2] = 2.0 * (far * near) / (near - far);
        self.m[3][3] = 0.0;
    }

    /// OpenGL style orthographic projection
    pub fn set_orthographic(
        &mut self,
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) {
        self.set_identity();
        self.m[0][0] = 2.0 / (right - left);
        self.m[1][1] = 2.0 / (top - bottom);
        self.m[2][2] = -2.0 / (far - near);
        self.m[3][0] = -(right + left) / (right - left);
        self.m[3][1] = -(top + bottom) / (top - bottom);
        self.m[3][2] = -(far + near) / (far - near);
    }

    /// Reset to the rotation taking +Z to `forward`, with +Y as close to
    /// `up` as possible.
    pub fn set_rotation_dir(&mut self, forward: Vec3f, up: Vec3f) -> MathResult<()> {
        let z_axis = forward.normalized()?;
        let x_axis = up.cross(&z_axis).normalized()?;
        let y_axis = z_axis.cross(&x_axis);

        self.set_identity();
        for (row, axis) in self.m.iter_mut().zip([x_axis, y_axis, z_axis]) {
            row[0] = axis.x;
            row[1] = axis.y;
            row[2] = axis.z;
        }
        Ok(())
    }

    /// The rotation part alone: translation and projection cleared, each
    /// basis row divided by its scale.
    pub fn rotation_only(&self) -> MathResult<Self> {
        let scale = self.extract_scale();
        let mut rot = *self;

        rot.m[3][0] = 0.0;
        rot.m[3][1] = 0.0;
        rot.m[3][2] = 0.0;
        rot.m[0][3] = 0.0;
        rot.m[1][3] = 0.0;
        rot.m[2][3] = 0.0;
        rot.m[3][3] = 1.0;

        for axis in 0..3 {
            if scale[axis] == 0.0 {
                log::trace!("no rotation to extract, axis {axis} has zero scale");
                return Err(MathError::ZeroScale { axis });
            }
            for cell in rot.m[axis].iter_mut().take(3) {
                *cell /= scale[axis];
            }
        }
        Ok(rot)
    }

    /// Object space +Z in parent space, normalized
    pub fn front(&self) -> MathResult<Vec3f> {
        self.rotation_only()?.transform_direction(Vec3f::Z).normalized()
    }

    /// Object space +Y in parent space, normalized
    pub fn up(&self) -> MathResult<Vec3f> {
        self.rotation_only()?.transform_direction(Vec3f::Y).normalized()
    }

    /// Object space +X in parent space, normalized
    pub fn right(&self) -> MathResult<Vec3f> {
        self.rotation_only()?.transform_direction(Vec3f::X).normalized()
    }

    /// Transform a direction (w = 0), the translation row is ignored
    pub fn transform_direction(&self, v: Vec3f) -> Vec3f {
        let m = &self.m;
        Vec3f::new(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
        )
    }

    /// Transform a point (w = 1) by an affine matrix, no perspective divide
    pub fn transform_point(&self, p: Vec3f) -> Vec3f {
        self.transform_direction(p) + self.position()
    }

    /// Transform a point (w = 1) and divide by the resulting w
    pub fn project_point(&self, p: Vec3f) -> MathResult<Vec3f> {
        let m = &self.m;
        let w = p.x * m[0][3] + p.y * m[1][3] + p.z * m[2][3] + m[3][3];
        if w == 0.0 {
            return Err(MathError::PointAtInfinity);
        }
        Ok(self.transform_point(p) / w)
    }
}

/// Matrix multiplication (A * B means A is applied first, then B)
impl Mul for Mat44f {
    type Output = Mat44f;

    fn mul(self, other: Mat44f) -> Mat44f {
        &self * &other
    }
}

impl Mul for &Mat44f {
    type Output = Mat44f;

    fn mul(self, other: &Mat44f) -> Mat44f {
        let mut result = [[0.0f32; 4]; 4];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        Mat44f { m: result }
    }
}

impl Mul<f32> for Mat44f {
    type Output = Mat44f;

    fn mul(mut self, s: f32) -> Mat44f {
        for cell in self.as_mut_slice() {
            *cell *= s;
        }
        self
    }
}

impl Index<usize> for Mat44f {
    type Output = [f32; 4];

    fn index(&self, row: usize) -> &[f32; 4] {
        &self.m[row]
    }
}

impl IndexMut<usize> for Mat44f {
    fn index_mut(&mut self, row: usize) -> &mut [f32; 4] {
        &mut self.m[row]
    }
}
