// Vector utilities for Vec3
//
// Extends glam::Vec3 with the handful of operations the tracer needs on top
// of what glam already provides (dot, cross, length, component-wise mul).

use glam::Vec3;

/// Extension trait for Vec3 to provide ray tracing helpers
pub trait Vec3Ext {
    /// Scale to unit length.
    ///
    /// A zero-length vector cannot be normalized: a warning is logged and the
    /// vector is returned unchanged so the caller can carry on.
    fn unit_or_warn(self) -> Vec3;

    /// Mirror this (incoming) direction about a unit surface normal.
    /// The result is normalized.
    fn reflect_about(self, unit_normal: Vec3) -> Vec3;

    /// Remove the component along a unit plane normal, leaving the part of
    /// the vector that lies in the plane.
    fn project_onto_plane(self, unit_normal: Vec3) -> Vec3;
}

impl Vec3Ext for Vec3 {
    fn unit_or_warn(self) -> Vec3 {
        let length = self.length();
        if length == 0.0 {
            log::warn!("cannot normalize a zero-length vector");
            self
        } else {
            self / length
        }
    }

    fn reflect_about(self, unit_normal: Vec3) -> Vec3 {
        (self - 2.0 * self.dot(unit_normal) * unit_normal).unit_or_warn()
    }

    fn project_onto_plane(self, unit_normal: Vec3) -> Vec3 {
        self - unit_normal.dot(self) * unit_normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_or_warn() {
        let v = Vec3::new(3.0, 0.0, 4.0).unit_or_warn();
        assert!((v - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_unit_or_warn_zero_is_unchanged() {
        // Degenerate but not fatal
        assert_eq!(Vec3::ZERO.unit_or_warn(), Vec3::ZERO);
    }

    #[test]
    fn test_reflect_head_on() {
        let incoming = Vec3::new(0.0, 0.0, -1.0);
        let reflected = incoming.reflect_about(Vec3::Z);
        assert!((reflected - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_reflect_at_45_degrees() {
        let incoming = Vec3::new(1.0, -1.0, 0.0).normalize();
        let reflected = incoming.reflect_about(Vec3::Y);

        assert!((reflected - Vec3::new(1.0, 1.0, 0.0).normalize()).length() < 1e-6);
        assert!((reflected.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_project_onto_plane() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let projected = v.project_onto_plane(Vec3::Z);

        assert_eq!(projected, Vec3::new(1.0, 2.0, 0.0));
        assert!(projected.dot(Vec3::Z).abs() < 1e-6);
    }

    #[test]
    fn test_project_in_plane_vector_is_identity() {
        let v = Vec3::new(0.0, 5.0, -2.0);
        assert_eq!(v.project_onto_plane(Vec3::X), v);
    }
}
