//! Vector, matrix and quaternion math
//!
//! This module provides:
//! - Scalar helpers (scalar submodule)
//! - 2D, 3D and 4D vectors (vec2, vec3 and vec4 submodules)
//! - 3x3 and 4x4 transform matrices (matrix33 and matrix submodules)
//! - Rotation quaternions (quaternion submodule)
//!
//! All angles taken or returned by the public API are in degrees.

mod approx_eq;
mod error;
mod matrix;
mod matrix33;
mod quaternion;
pub mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use error::*;
pub use matrix::*;
pub use matrix33::*;
pub use quaternion::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;

/// Gauss-Jordan gives up on a pivot of this magnitude or smaller.
pub const SINGULAR_THRESHOLD: f32 = 0.00001;

/// Above this quaternion dot product slerp falls back to a normalized lerp.
pub const SLERP_LERP_THRESHOLD: f32 = 0.95;
