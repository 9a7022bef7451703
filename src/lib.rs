//!
//! Wolf-math is the linear algebra library of the Wolf3D engine.
//!
//! It provides the vector, matrix and quaternion types the engine uses for transforms and cameras.
//!
//! Matrices are row-major and transform row vectors, so `a * b` applies `a`
//! first. See [`math`] for the full set of conventions.
//!
//! ```
//! use wolf_math::{Mat44f, Vec3f};
//!
//! let view = Mat44f::look_at(Vec3f::new(0.0, 0.0, 5.0), Vec3f::ZERO, Vec3f::Y)?;
//! let projection = Mat44f::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
//! let clip = (view * projection).project_point(Vec3f::ZERO)?;
//! assert!(clip.x.abs() < 1e-6 && clip.y.abs() < 1e-6);
//! # Ok::<(), wolf_math::MathError>(())
//! ```

pub mod math;

pub use math::{Mat33f, Mat44f, MathError, MathResult, Quaternion, Vec2f, Vec3f, Vec4f, Vec4s};
