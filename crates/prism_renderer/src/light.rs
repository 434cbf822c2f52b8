//! Point lights.

use crate::Color;
use prism_core::{LightDesc, ObjectId};
use prism_math::Vec3;

/// A point light. Lights are never intersected; they only feed the
/// illumination pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    id: ObjectId,
    emissivity: Color,
    center: Vec3,
}

impl Light {
    pub fn new(id: ObjectId, emissivity: Color, center: Vec3) -> Self {
        Self {
            id,
            emissivity,
            center,
        }
    }

    pub fn from_desc(desc: &LightDesc) -> Self {
        Self::new(desc.id, desc.emissivity, desc.center)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Emitted intensity per channel.
    pub fn emissive(&self) -> Color {
        self.emissivity
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }
}
