//! Builds a camera the way the renderer does and orbits an object around it.
//!
//! Run with `RUST_LOG=info cargo run --example orbit_camera`.

use log::info;
use wolf_math::{Mat44f, MathError, Quaternion, Vec3f};

const FRAMES: usize = 8;

fn main() -> Result<(), MathError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let eye = Vec3f::new(0.0, 3.0, 10.0);
    let view = Mat44f::look_at(eye, Vec3f::ZERO, Vec3f::Y)?;
    let projection = Mat44f::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
    let view_projection = view * projection;
    info!("camera at {eye}, view {:?}", view.m);

    let start = Quaternion::IDENTITY;
    let end = Quaternion::from_axis_angle(Vec3f::Y, 170.0);
    let offset = Vec3f::new(4.0, 0.0, 0.0);

    for frame in 0..=FRAMES {
        let t = frame as f32 / FRAMES as f32;
        let orientation = Quaternion::slerp(&start, &end, t)?;

        let mut model = orientation.to_matrix();
        model.translate(orientation.rotate(offset));

        let world = model.transform_point(Vec3f::ZERO);
        let ndc = (model * view_projection).project_point(Vec3f::ZERO)?;
        let euler = orientation.to_euler_angles();
        info!("frame {frame}: world {world}, ndc {ndc}, euler {euler}");
    }

    let inverse_view = view.inverse()?;
    info!("camera position recovered from view: {}", inverse_view.position());
    Ok(())
}
