//! View-direction helpers.
//! Small helpers turning yaw and pitch into world-space directions.
use glam::{EulerRot, Quat, Vec3};

/// Rotation of a view with the given yaw and pitch, both in radians.
///
/// Yaw turns about world up (+Y), pitch tilts about the turned right axis.
#[must_use]
pub fn view_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

/// Unit vector the view looks along. Zero yaw and pitch look down `-Z`.
///
/// # Examples
/// ```
/// use forager::vector_math::view_forward;
/// let forward = view_forward(0.0, 0.0);
/// assert!((forward.z + 1.0).abs() < 1e-6);
///
/// let up = view_forward(0.0, std::f32::consts::FRAC_PI_2);
/// assert!((up.y - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn view_forward(yaw: f32, pitch: f32) -> Vec3 {
    view_rotation(yaw, pitch) * Vec3::NEG_Z
}

/// Horizontal forward and right vectors for walking, ignoring pitch.
#[must_use]
pub fn ground_basis(yaw: f32) -> (Vec3, Vec3) {
    let rotation = Quat::from_rotation_y(yaw);
    (rotation * Vec3::NEG_Z, rotation * Vec3::X)
}

/// Point `distance` units from `origin` along `direction`.
///
/// Non-finite or zero directions yield `origin`.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use forager::vector_math::point_along;
/// let p = point_along(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, -2.0), 400.0);
/// assert!(p.abs_diff_eq(Vec3::new(1.0, 2.0, -397.0), 1e-3));
/// ```
#[must_use]
pub fn point_along(origin: Vec3, direction: Vec3, distance: f32) -> Vec3 {
    if !direction.is_finite() {
        return origin;
    }
    origin + direction.normalize_or_zero() * distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f32::consts::FRAC_PI_2;

    #[rstest]
    #[case::facing_north(0.0, Vec3::NEG_Z, Vec3::X)]
    #[case::quarter_turn_left(FRAC_PI_2, Vec3::NEG_X, Vec3::NEG_Z)]
    fn ground_basis_follows_yaw(#[case] yaw: f32, #[case] forward: Vec3, #[case] right: Vec3) {
        let (f, r) = ground_basis(yaw);
        assert!(f.abs_diff_eq(forward, 1e-5), "forward {f:?}");
        assert!(r.abs_diff_eq(right, 1e-5), "right {r:?}");
    }

    #[rstest]
    fn pitch_does_not_leak_into_ground_basis() {
        let (forward, _) = ground_basis(0.3);
        let look = view_forward(0.3, 0.7);
        assert!(forward.y.abs() < 1e-6);
        assert!(look.y > 0.5);
    }

    #[rstest]
    fn point_along_ignores_bad_direction() {
        let origin = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(point_along(origin, Vec3::ZERO, 10.0), origin);
        assert_eq!(point_along(origin, Vec3::new(f32::NAN, 0.0, 0.0), 10.0), origin);
    }
}
