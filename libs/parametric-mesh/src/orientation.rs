//! # Orientation
//!
//! Helpers for pointing the generated solids, which are all built along +Y.

use glam::{Mat4, Quat, Vec3};

/// Converts pitch/yaw angles in degrees to a unit direction.
///
/// Pitch lifts the direction out of the XY plane toward +Z; yaw turns it
/// from +X toward +Y:
///
/// ```text
/// (cos yaw · cos pitch, sin yaw · cos pitch, sin pitch)
/// ```
///
/// # Example
///
/// ```rust
/// use parametric_mesh::orientation::direction_from_angles;
/// use glam::Vec3;
///
/// let d = direction_from_angles(0.0, 0.0);
/// assert_eq!(d, Vec3::X);
/// ```
pub fn direction_from_angles(pitch_degrees: f32, yaw_degrees: f32) -> Vec3 {
    let (sin_pitch, cos_pitch) = pitch_degrees.to_radians().sin_cos();
    let (sin_yaw, cos_yaw) = yaw_degrees.to_radians().sin_cos();
    Vec3::new(cos_yaw * cos_pitch, sin_yaw * cos_pitch, sin_pitch)
}

/// Rotation that maps the +Y axis onto `direction`.
///
/// A zero-length direction yields the identity.
pub fn rotation_to(direction: Vec3) -> Quat {
    match direction.try_normalize() {
        Some(target) => Quat::from_rotation_arc(Vec3::Y, target),
        None => Quat::IDENTITY,
    }
}

/// Model matrix placing a +Y-aligned solid at `position`, pointing along `direction`.
pub fn model_matrix(position: Vec3, direction: Vec3) -> Mat4 {
    Mat4::from_rotation_translation(rotation_to(direction), position)
}
