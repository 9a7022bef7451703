#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wolf_math::{Mat44f, Quaternion, Vec3f};

/// Fixed seed so a failing case can be reproduced
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5747_4d41_5448)
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn random_vec3(rng: &mut impl Rng, range: f32) -> Vec3f {
    Vec3f::new(
        rng.random_range(-range..range),
        rng.random_range(-range..range),
        rng.random_range(-range..range),
    )
}

/// Direction that is far enough from zero to be normalized safely
pub fn random_unit_vec3(rng: &mut impl Rng) -> Vec3f {
    loop {
        let v = random_vec3(rng, 1.0);
        let len = v.magnitude();
        if len > 0.1 && len <= 1.0 {
            return v / len;
        }
    }
}

pub fn random_unit_quaternion(rng: &mut impl Rng) -> Quaternion {
    let axis = random_unit_vec3(rng);
    let angle = rng.random_range(-180.0..180.0);
    Quaternion::from_axis_angle(axis, angle)
}

/// Rotation, non-uniform scale and translation, always invertible
pub fn random_transform(rng: &mut impl Rng) -> Mat44f {
    let scale = Vec3f::new(
        rng.random_range(0.5..3.0),
        rng.random_range(0.5..3.0),
        rng.random_range(0.5..3.0),
    );
    let mut m = Mat44f::from_scale(scale);
    m.rotate(
        rng.random_range(-180.0..180.0),
        rng.random_range(-180.0..180.0),
        rng.random_range(-180.0..180.0),
    );
    m.translate(random_vec3(rng, 10.0));
    m
}
