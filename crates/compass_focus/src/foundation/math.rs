//! Math utilities and types
//!
//! Provides the vector types and angle helpers used by marker focusing.
//! The world is z-up: headings are measured in the xy plane.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::*;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Heading of a vector in the horizontal plane, in radians
    ///
    /// Zero points along +y, increasing clockwise towards +x, matching the
    /// compass convention. A zero-length vector has heading 0.
    pub fn heading(direction: &Vec3) -> f32 {
        direction.x.atan2(direction.y)
    }

    /// Wrap an angle in radians into `[0, TAU)`
    pub fn wrap_radians(angle: f32) -> f32 {
        let wrapped = angle.rem_euclid(constants::TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if wrapped >= constants::TAU { 0.0 } else { wrapped }
    }
}

/// Unsigned angle in degrees between a viewer's forward direction and the
/// direction from the viewer to `target`
///
/// The heading difference is wrapped into `[0, 360)` and folded so the result
/// is always the smaller of the two arcs, in `[0, 180]`.
pub fn angle_between(viewer_position: &Point3, viewer_forward: &Vec3, target: &Point3) -> f32 {
    let to_target = target - viewer_position;
    let difference = utils::wrap_radians(utils::heading(&to_target) - utils::heading(viewer_forward));

    let degrees = utils::rad_to_deg(difference);
    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-4;

    fn origin() -> Point3 {
        Point3::new(0.0, 0.0, 0.0)
    }

    #[test]
    fn test_target_straight_ahead_is_zero() {
        let forward = Vec3::new(0.0, 1.0, 0.0);
        let angle = angle_between(&origin(), &forward, &Point3::new(0.0, 50.0, 0.0));
        assert_relative_eq!(angle, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_target_to_the_side_is_ninety() {
        let forward = Vec3::new(0.0, 1.0, 0.0);
        let right = angle_between(&origin(), &forward, &Point3::new(10.0, 0.0, 0.0));
        let left = angle_between(&origin(), &forward, &Point3::new(-10.0, 0.0, 0.0));
        assert_relative_eq!(right, 90.0, epsilon = EPSILON);
        assert_relative_eq!(left, 90.0, epsilon = EPSILON);
    }

    #[test]
    fn test_angle_is_folded_into_half_circle() {
        // 350 degrees clockwise is 10 degrees counter-clockwise
        let forward = Vec3::new(0.0, 1.0, 0.0);
        let target = Point3::new(-(10.0_f32.to_radians().sin()), 10.0_f32.to_radians().cos(), 0.0);
        let angle = angle_between(&origin(), &forward, &target);
        assert_relative_eq!(angle, 10.0, epsilon = EPSILON);

        let behind = angle_between(&origin(), &forward, &Point3::new(0.0, -5.0, 0.0));
        assert_relative_eq!(behind, 180.0, epsilon = EPSILON);
    }

    #[test]
    fn test_height_does_not_affect_heading() {
        let forward = Vec3::new(1.0, 0.0, 0.3);
        let flat = angle_between(&origin(), &forward, &Point3::new(10.0, 10.0, 0.0));
        let raised = angle_between(&origin(), &forward, &Point3::new(10.0, 10.0, 400.0));
        assert_relative_eq!(flat, 45.0, epsilon = EPSILON);
        assert_relative_eq!(flat, raised, epsilon = EPSILON);
    }

    #[test]
    fn test_degenerate_target_is_finite() {
        let forward = Vec3::new(0.0, 1.0, 0.0);
        let angle = angle_between(&origin(), &forward, &origin());
        assert!(angle.is_finite());
        assert!((0.0..=180.0).contains(&angle));
    }

    #[test]
    fn test_deg_rad_conversion() {
        assert_relative_eq!(utils::rad_to_deg(constants::PI), 180.0, epsilon = EPSILON);
        assert_relative_eq!(utils::deg_to_rad(90.0), constants::PI * 0.5, epsilon = EPSILON);
    }
}
