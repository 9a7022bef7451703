//! Tolerance comparisons from the `approx` crate, component by component.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::{Mat33f, Mat44f, Quaternion, Vec2f, Vec3f, Vec4f};

macro_rules! impl_approx {
    ($($ty:ty),*) => {
        $(
            impl AbsDiffEq for $ty {
                type Epsilon = f32;

                fn default_epsilon() -> f32 {
                    f32::EPSILON
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                    self.to_array()
                        .iter()
                        .zip(other.to_array().iter())
                        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
                }
            }

            impl RelativeEq for $ty {
                fn default_max_relative() -> f32 {
                    f32::EPSILON
                }

                fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                    self.to_array()
                        .iter()
                        .zip(other.to_array().iter())
                        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
                }
            }

            impl UlpsEq for $ty {
                fn default_max_ulps() -> u32 {
                    4
                }

                fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                    self.to_array()
                        .iter()
                        .zip(other.to_array().iter())
                        .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
                }
            }
        )*
    };
}

impl_approx!(Vec2f, Vec3f, Vec4f, Quaternion, Mat33f, Mat44f);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_ne, assert_ulps_eq};

    #[test]
    fn test_component_wise() {
        let a = Vec3f::new(1.0, 2.0, 3.0);
        let b = Vec3f::new(1.0, 2.0, 3.0 + 1e-4);
        assert_abs_diff_eq!(a, b, epsilon = 1e-3);
        assert_relative_ne!(a, b);
        assert_ulps_eq!(Mat44f::IDENTITY * Mat44f::IDENTITY, Mat44f::IDENTITY);
    }

    #[test]
    fn test_matrix_tolerance() {
        let mut m = Mat33f::IDENTITY;
        m[2][0] = 1e-6;
        assert!(m.abs_diff_eq(&Mat33f::IDENTITY, 1e-5));
        assert!(!m.abs_diff_eq(&Mat33f::IDENTITY, 1e-7));
    }
}
