//! Reflectivity materials.

use std::fmt;

use prism_math::Color;
use serde::{Deserialize, Serialize};

/// Ambient, diffuse and specular reflectivity of a surface.
///
/// Components are conventionally in [0, 1] but nothing enforces it; the
/// procedural shaders and some scenes deliberately go above 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color returned regardless of lighting
    pub ambient: Color,

    /// Scaled per light by the illumination pass
    pub diffuse: Color,

    /// Mirror reflectivity; zero disables reflection rays
    pub specular: Color,
}

impl Material {
    /// Create a material from its three reflectivity triples.
    pub fn new(ambient: Color, diffuse: Color, specular: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// A purely diffuse material.
    pub fn diffuse(diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Default::default()
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Material data -")?;
        write_triple(f, "ambient  - ", self.ambient)?;
        write_triple(f, "diffuse  - ", self.diffuse)?;
        write_triple(f, "specular - ", self.specular)
    }
}

/// Write a labelled triple the way all object dumps do.
pub(crate) fn write_triple(f: &mut fmt::Formatter<'_>, label: &str, v: Color) -> fmt::Result {
    writeln!(f, "{label}")?;
    writeln!(f, "{:8.3} {:8.3} {:8.3}", v.x, v.y, v.z)
}
