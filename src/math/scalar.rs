//! Scalar helpers shared by the vector, matrix and quaternion types.
//!
//! `min`, `max`, `clamp`, `sign` and `abs` work for floats and integers
//! alike. The interpolation helpers need a float type.

use num_traits::{Float, Signed};

use super::{DEG_TO_RAD, RAD_TO_DEG};

#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { b } else { a }
}

/// Restrict `value` to `[low, high]`.
///
/// `low` wins when the bounds are inverted, `high` is applied last.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    min(max(value, low), high)
}

/// `a + (b - a) * t`, `t` is not clamped.
#[inline]
pub fn lerp<F: Float>(a: F, b: F, t: F) -> F {
    a + (b - a) * t
}

/// Where `value` sits between `a` and `b`, as a fraction.
///
/// `a == b` divides by zero, the IEEE-754 result is returned as is.
#[inline]
pub fn inverse_lerp<F: Float>(a: F, b: F, value: F) -> F {
    (value - a) / (b - a)
}

/// Remap `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// An empty source range divides by zero, like [`inverse_lerp`].
#[inline]
pub fn map<F: Float>(value: F, from_min: F, from_max: F, to_min: F, to_max: F) -> F {
    let old_range = from_max - from_min;
    let new_range = to_max - to_min;
    ((value - from_min) * new_range) / old_range + to_min
}

/// -1, 0 or 1. Unlike `f32::signum` a zero maps to zero.
#[inline]
pub fn sign<T: Signed + PartialOrd>(value: T) -> T {
    if value > T::zero() {
        T::one()
    } else if value < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

#[inline]
pub fn abs<T: Signed>(value: T) -> T {
    value.abs()
}

#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}
