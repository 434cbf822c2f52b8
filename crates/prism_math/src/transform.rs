// Local coordinate frames for planar surfaces
//
// A plane with a user supplied "x direction" gets an orthonormal frame:
// x = xdir projected onto the plane, z = plane normal, y = z cross x.
// Points are moved into that frame with a single 3x3 rotation.

use glam::{Mat3, Vec3};

use crate::Vec3Ext;

/// Orthonormal frame of a plane, stored as a rotation matrix whose rows are
/// the local x, y and z axes in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    rotation: Mat3,
}

impl Basis {
    /// Build the frame for a plane with the given normal and x direction.
    ///
    /// Neither input needs to be unit length. An x direction parallel to the
    /// normal collapses to zero and is reported by [`Vec3Ext::unit_or_warn`].
    pub fn from_normal_and_x(normal: Vec3, x_dir: Vec3) -> Self {
        let z = normal.unit_or_warn();
        let x = x_dir.unit_or_warn().project_onto_plane(z).unit_or_warn();
        let y = z.cross(x);

        Self {
            rotation: Mat3::from_cols(x, y, z).transpose(),
        }
    }

    /// Express a world-space vector in the local frame.
    #[inline]
    pub fn to_local(&self, v: Vec3) -> Vec3 {
        self.rotation * v
    }

    /// Local x axis in world space.
    pub fn x_axis(&self) -> Vec3 {
        self.rotation.row(0)
    }

    /// Local y axis in world space.
    pub fn y_axis(&self) -> Vec3 {
        self.rotation.row(1)
    }

    /// Local z axis (the plane normal) in world space.
    pub fn z_axis(&self) -> Vec3 {
        self.rotation.row(2)
    }
}
