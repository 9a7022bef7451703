//! Four component tuples. No algebra is defined on these, they carry
//! homogeneous coordinates, colors and integer indices around.

use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::vec3::Vec3f;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec4f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4f {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Homogeneous point, `w = 1`
    pub const fn from_point(p: Vec3f) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    /// Homogeneous direction, `w = 0`
    pub const fn from_direction(d: Vec3f) -> Self {
        Self::new(d.x, d.y, d.z, 0.0)
    }

    pub const fn from_array(values: [f32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    pub const fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub const fn xyz(&self) -> Vec3f {
        Vec3f::new(self.x, self.y, self.z)
    }
}

impl Index<usize> for Vec4f {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4f index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec4f {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4f index out of range: {index}"),
        }
    }
}

impl std::fmt::Display for Vec4f {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.z, self.w)
    }
}

/// Integer 4-tuple
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec4s {
    pub i: i32,
    pub j: i32,
    pub k: i32,
    pub w: i32,
}

impl Vec4s {
    pub const fn new(i: i32, j: i32, k: i32, w: i32) -> Self {
        Self { i, j, k, w }
    }

    pub const fn from_array(values: [i32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    pub const fn to_array(&self) -> [i32; 4] {
        [self.i, self.j, self.k, self.w]
    }
}

impl Index<usize> for Vec4s {
    type Output = i32;
    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.i,
            1 => &self.j,
            2 => &self.k,
            3 => &self.w,
            _ => panic!("Vec4s index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec4s {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        match index {
            0 => &mut self.i,
            1 => &mut self.j,
            2 => &mut self.k,
            3 => &mut self.w,
            _ => panic!("Vec4s index out of range: {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_vec4f_storage() {
        let mut v = Vec4f::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        v[0] = 5.0;
        assert_eq!(v.to_array(), [5.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.xyz(), Vec3f::new(5.0, 2.0, 3.0));
        assert_eq!(Vec4f::default(), Vec4f::from_array([0.0; 4]));
        assert_eq!(v.to_string(), "5,2,3,4");
    }

    #[test]
    fn test_homogeneous() {
        let p = Vec4f::from_point(Vec3f::new(1.0, 2.0, 3.0));
        let d = Vec4f::from_direction(Vec3f::new(1.0, 2.0, 3.0));
        assert_eq!(p.w, 1.0);
        assert_eq!(d.w, 0.0);
    }

    #[test]
    fn test_vec4s_storage() {
        let mut v = Vec4s::new(1, -2, 3, -4);
        assert_eq!(v[1], -2);
        v[3] = 10;
        assert_eq!(v, Vec4s::from_array([1, -2, 3, 10]));
        assert_eq!(v.to_array(), [1, -2, 3, 10]);
        assert_eq!(Vec4s::default(), Vec4s::new(0, 0, 0, 0));
    }
}
