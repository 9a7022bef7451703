//! 3x3 matrix for 2D transforms
//!
//! Same conventions as [`Mat44f`](super::Mat44f): row-major, row vectors on
//! the left, `A * B` applies A first. Rows 0 and 1 hold the x and y basis,
//! row 2 holds the translation.

use std::ops::{Index, IndexMut, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{MathError, MathResult};
use super::matrix::gauss_jordan_inverse;
use super::scalar::deg_to_rad;
use super::vec2::Vec2f;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat33f {
    /// Row-major 3x3 matrix data
    pub m: [[f32; 3]; 3],
}

impl Default for Mat33f {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat33f {
    pub const IDENTITY: Mat33f = Mat33f::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self {
            m: [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]],
        }
    }

    pub const fn from_rows(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    pub fn from_array(values: [f32; 9]) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (i, value) in values.into_iter().enumerate() {
            m[i / 3][i % 3] = value;
        }
        Self { m }
    }

    pub fn to_array(&self) -> [f32; 9] {
        let mut values = [0.0; 9];
        values.copy_from_slice(self.as_slice());
        values
    }

    pub fn as_slice(&self) -> &[f32] {
        self.m.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.m.as_flattened_mut()
    }

    pub fn from_translation(translation: Vec2f) -> Self {
        let mut matrix = Self::IDENTITY;
        matrix.set_translation(translation);
        matrix
    }

    /// Counter-clockwise rotation in degrees
    pub fn from_rotation(angle: f32) -> Self {
        let mut matrix = Self::IDENTITY;
        matrix.set_rotation(angle);
        matrix
    }

    pub fn from_scale(scale: Vec2f) -> Self {
        let mut matrix = Self::IDENTITY;
        matrix.set_scale(scale);
        matrix
    }

    pub fn set_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    pub fn set_translation(&mut self, translation: Vec2f) {
        self.set_identity();
        self.set_position(translation);
    }

    pub fn position(&self) -> Vec2f {
        Vec2f::new(self.m[2][0], self.m[2][1])
    }

    pub fn set_position(&mut self, position: Vec2f) {
        self.m[2][0] = position.x;
        self.m[2][1] = position.y;
    }

    /// Reset to a counter-clockwise rotation of `angle` degrees
    pub fn set_rotation(&mut self, angle: f32) {
        let (s, c) = deg_to_rad(angle).sin_cos();
        self.set_identity();
        self.m[0][0] = c;
        self.m[0][1] = s;
        self.m[1][0] = -s;
        self.m[1][1] = c;
    }

    pub fn set_scale(&mut self, scale: Vec2f) {
        self.set_identity();
        self.m[0][0] = scale.x;
        self.m[1][1] = scale.y;
    }

    /// Length of the x and y basis rows
    pub fn extract_scale(&self) -> Vec2f {
        Vec2f::new(self.basis(0).magnitude(), self.basis(1).magnitude())
    }

    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    pub fn transposed(&self) -> Self {
        let m = &self.m;
        Self::new(
            m[0][0], m[1][0], m[2][0], m[0][1], m[1][1], m[2][1], m[0][2], m[1][2], m[2][2],
        )
    }

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

    /// Gram-Schmidt on the two basis rows, the translation row is kept.
    ///
    /// Fails without modifying `self` when the basis is degenerate.
    pub fn orthonormalize(&mut self) -> MathResult<()> {
        let x_axis = self.basis(0).normalized()?;
        let y = self.basis(1);
        let y_axis = (y - x_axis * y.dot(&x_axis)).normalized()?;
        self.set_basis(0, x_axis);
        self.set_basis(1, y_axis);
        Ok(())
    }

    pub fn translate(&mut self, translation: Vec2f) {
        *self = *self * Self::from_translation(translation);
    }

    pub fn translate_local(&mut self, translation: Vec2f) {
        *self = Self::from_translation(translation) * *self;
    }

    pub fn rotate(&mut self, angle: f32) {
        *self = *self * Self::from_rotation(angle);
    }

    pub fn rotate_local(&mut self, angle: f32) {
        *self = Self::from_rotation(angle) * *self;
    }

    pub fn scale(&mut self, scale: Vec2f) {
        *self = *self * Self::from_scale(scale);
    }

    pub fn scale_local(&mut self, scale: Vec2f) {
        *self = Self::from_scale(scale) * *self;
    }

    /// Object space +Y in parent space, normalized
    pub fn up(&self) -> MathResult<Vec2f> {
        self.unit_basis(1)
    }

    /// Object space +X in parent space, normalized
    pub fn right(&self) -> MathResult<Vec2f> {
        self.unit_basis(0)
    }

    /// Turn the x axis towards `target`, keeping position and scale.
    pub fn look_at(&mut self, target: Vec2f) -> MathResult<()> {
        let direction = (target - self.position()).normalized()?;
        let scale = self.extract_scale();
        self.set_basis(0, direction * scale.x);
        self.set_basis(1, direction.perp() * scale.y);
        Ok(())
    }

    pub fn transform_direction(&self, v: Vec2f) -> Vec2f {
        self.basis(0) * v.x + self.basis(1) * v.y
    }

    pub fn transform_point(&self, p: Vec2f) -> Vec2f {
        self.transform_direction(p) + self.position()
    }

    fn basis(&self, row: usize) -> Vec2f {
        Vec2f::new(self.m[row][0], self.m[row][1])
    }

    fn set_basis(&mut self, row: usize, v: Vec2f) {
        self.m[row][0] = v.x;
        self.m[row][1] = v.y;
    }

    fn unit_basis(&self, axis: usize) -> MathResult<Vec2f> {
        self.basis(axis).normalized().map_err(|_| {
            log::trace!("basis row {axis} has zero length");
            MathError::ZeroScale { axis }
        })
    }
}

impl Mul for Mat33f {
    type Output = Mat33f;

    fn mul(self, other: Mat33f) -> Mat33f {
        &self * &other
    }
}

impl Mul for &Mat33f {
    type Output = Mat33f;

    fn mul(self, other: &Mat33f) -> Mat33f {
        let mut result = [[0.0f32; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        Mat33f { m: result }
    }
}

impl Mul<f32> for Mat33f {
    type Output = Mat33f;

    fn mul(mut self, s: f32) -> Mat33f {
        for cell in self.as_mut_slice() {
            *cell *= s;
        }
        self
    }
}

impl Index<usize> for Mat33f {
    type Output = [f32; 3];

    fn index(&self, row: usize) -> &[f32; 3] {
        &self.m[row]
    }
}

impl IndexMut<usize> for Mat33f {
    fn index_mut(&mut self, row: usize) -> &mut [f32; 3] {
        &mut self.m[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_identity_and_translation() {
        assert_eq!(Mat33f::default(), Mat33f::IDENTITY);
        let m = Mat33f::from_translation(Vec2f::new(3.0, -4.0));
        assert_eq!(m.transform_point(Vec2f::ONE), Vec2f::new(4.0, -3.0));
        assert_eq!(m.transform_direction(Vec2f::ONE), Vec2f::ONE);
        assert_eq!(m.position(), Vec2f::new(3.0, -4.0));
    }

    #[test]
    fn test_rotation_is_counter_clockwise() {
        let m = Mat33f::from_rotation(90.0);
        let v = m.transform_direction(Vec2f::X);
        assert!(v.equals_offset(&Vec2f::Y, EPSILON), "got {v:?}");
        let v = m.transform_direction(Vec2f::Y);
        assert!(v.equals_offset(&-Vec2f::X, EPSILON), "got {v:?}");
    }

    #[test]
    fn test_set_rotation_discards_previous_transform() {
        let mut m = Mat33f::from_translation(Vec2f::new(5.0, 5.0));
        m.set_rotation(45.0);
        assert_eq!(m.position(), Vec2f::ZERO);
    }

    #[test]
    fn test_scale() {
        let m = Mat33f::from_scale(Vec2f::new(2.0, 3.0));
        assert_eq!(m.transform_point(Vec2f::ONE), Vec2f::new(2.0, 3.0));
        assert_eq!(m.extract_scale(), Vec2f::new(2.0, 3.0));
    }

    #[test]
    fn test_multiplication_order() {
        let scale = Mat33f::from_scale(Vec2f::new(2.0, 1.0));
        let translate = Mat33f::from_translation(Vec2f::new(10.0, 0.0));
        assert_eq!((scale * translate).transform_point(Vec2f::X).x, 12.0);
        assert_eq!((translate * scale).transform_point(Vec2f::X).x, 22.0);
    }

    #[test]
    fn test_world_vs_local() {
        let mut world = Mat33f::from_translation(Vec2f::X);
        world.rotate(90.0);
        assert!(world.position().equals_offset(&Vec2f::Y, EPSILON));

        let mut local = Mat33f::from_translation(Vec2f::X);
        local.rotate_local(90.0);
        assert!(local.position().equals_offset(&Vec2f::X, EPSILON));

        let mut moved = Mat33f::from_rotation(90.0);
        moved.translate_local(Vec2f::X);
        assert!(moved.position().equals_offset(&Vec2f::Y, EPSILON));

        let mut scaled = Mat33f::from_translation(Vec2f::ONE);
        scaled.scale(Vec2f::new(3.0, 3.0));
        assert_eq!(scaled.position(), Vec2f::new(3.0, 3.0));
        let mut scaled = Mat33f::from_translation(Vec2f::ONE);
        scaled.scale_local(Vec2f::new(3.0, 3.0));
        assert_eq!(scaled.position(), Vec2f::ONE);
    }

    #[test]
    fn test_inverse() {
        let mut m = Mat33f::from_scale(Vec2f::new(2.0, 0.5));
        m.rotate(30.0);
        m.translate(Vec2f::new(-3.0, 7.0));
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Mat33f::IDENTITY, epsilon = EPSILON);

        let p = Vec2f::new(1.5, -2.0);
        let back = inv.transform_point(m.transform_point(p));
        assert!(back.equals_offset(&p, 1e-4), "got {back:?}");
    }

    #[test]
    fn test_invert_singular() {
        let mut m = Mat33f::from_scale(Vec2f::new(0.0, 1.0));
        assert_eq!(
            m.invert(),
            Err(MathError::SingularMatrix {
                column: 0,
                pivot: 0.0
            })
        );
        assert_eq!(m, Mat33f::IDENTITY);
    }

    #[test]
    fn test_transpose() {
        let m = Mat33f::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let t = m.transposed();
        assert_eq!(t.to_array(), [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        let mut twice = t;
        twice.transpose();
        assert_eq!(twice, m);
        assert_eq!(m[1][2], 6.0);
        assert_eq!(m.as_slice()[5], 6.0);
    }

    #[test]
    fn test_orthonormalize() {
        let mut m = Mat33f::from_rows([[2.0, 0.0, 0.0], [1.0, 3.0, 0.0], [4.0, 5.0, 1.0]]);
        m.orthonormalize().unwrap();
        assert_eq!(m.right(), Ok(Vec2f::X));
        assert_eq!(m.up(), Ok(Vec2f::Y));
        assert_eq!(m.position(), Vec2f::new(4.0, 5.0));
    }

    #[test]
    fn test_orthonormalize_degenerate() {
        let mut m = Mat33f::from_rows([[2.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let before = m;
        assert_eq!(m.orthonormalize(), Err(MathError::ZeroLength));
        assert_eq!(m, before);
    }

    #[test]
    fn test_up_right() {
        let mut m = Mat33f::from_scale(Vec2f::new(4.0, 4.0));
        m.rotate(90.0);
        assert!(m.right().unwrap().equals_offset(&Vec2f::Y, EPSILON));
        assert!(m.up().unwrap().equals_offset(&-Vec2f::X, EPSILON));

        let flat = Mat33f::from_scale(Vec2f::new(1.0, 0.0));
        assert_eq!(flat.up(), Err(MathError::ZeroScale { axis: 1 }));
    }

    #[test]
    fn test_look_at() {
        let mut m = Mat33f::from_scale(Vec2f::new(2.0, 2.0));
        m.set_position(Vec2f::new(1.0, 1.0));
        m.look_at(Vec2f::new(1.0, 5.0)).unwrap();
        assert!(m.right().unwrap().equals_offset(&Vec2f::Y, EPSILON));
        assert!(m.up().unwrap().equals_offset(&-Vec2f::X, EPSILON));
        assert_eq!(m.position(), Vec2f::new(1.0, 1.0));
        assert!(m.extract_scale().equals_offset(&Vec2f::new(2.0, 2.0), EPSILON));

        assert_eq!(m.look_at(Vec2f::new(1.0, 1.0)), Err(MathError::ZeroLength));
    }

    #[test]
    fn test_scalar_multiplication() {
        let m = Mat33f::IDENTITY * 2.0;
        assert_eq!(m.m[2][2], 2.0);
        assert_eq!(m.m[1][0], 0.0);
    }
}
