//! Procedurally shaded planes and spheres.
//!
//! Intersection is the plain plane or sphere test; only the ambient color is
//! computed from the hit point.

use crate::plane::PlaneGeometry;
use crate::sphere::Sphere;
use crate::surface::{Intersection, Surface};
use crate::Color;
use prism_core::{Material, ObjectId, ProceduralShader};
use prism_math::{Ray, Vec3};

/// Which kind of surface a shader is evaluated on. A few shaders pick
/// different colors for spheres and planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadedShape {
    Plane,
    Sphere,
}

/// Evaluate a procedural ambient color.
///
/// `anchor` is the plane point or sphere center, `base` the material's
/// ambient color.
pub fn shade(
    shader: ProceduralShader,
    shape: ShadedShape,
    p: Vec3,
    anchor: Vec3,
    base: Color,
) -> Color {
    match shader {
        ProceduralShader::Bands => bands(p, anchor, base),
        ProceduralShader::Rings => rings(p, shape),
        ProceduralShader::Asymptotes => asymptotes(p, shape),
    }
}

fn bands(p: Vec3, anchor: Vec3, base: Color) -> Color {
    let d = p - anchor;
    let s = 1000.0 + d.x * d.y * d.y / 100.0 + d.x * d.y / 100.0;

    let mut color = base;
    if (s as i64) % 2 != 0 {
        color.x = 0.0;
    } else {
        color.z = 0.0;
    }
    color
}

fn rings(p: Vec3, shape: ShadedShape) -> Color {
    let s = (p.x * p.x + p.y * p.y).sqrt();
    if (s as i64) % 2 == 0 {
        return Color::new(1.0, 0.0, 0.0);
    }
    match shape {
        ShadedShape::Plane => Color::splat(2.0),
        ShadedShape::Sphere => Color::ONE,
    }
}

fn asymptotes(p: Vec3, shape: ShadedShape) -> Color {
    let (s, low) = match shape {
        ShadedShape::Plane => (
            (p.x * p.y * p.z * (p.x + 2.0)).sin(),
            Color::new(0.0, 0.0, 4.0),
        ),
        ShadedShape::Sphere => ((p.x * p.y * p.z * p.z).sin(), Color::new(0.0, 4.0, 1.0)),
    };
    if s < 0.5 {
        low
    } else {
        Color::new(8.0, 8.0, 0.0)
    }
}

/// A plane whose ambient color comes from a procedural shader.
pub struct ProceduralPlane {
    id: ObjectId,
    geometry: PlaneGeometry,
    material: Material,
    shader: ProceduralShader,
}

impl ProceduralPlane {
    pub fn new(
        id: ObjectId,
        geometry: PlaneGeometry,
        material: Material,
        shader: ProceduralShader,
    ) -> Self {
        Self {
            id,
            geometry,
            material,
            shader,
        }
    }
}

impl Surface for ProceduralPlane {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn type_name(&self) -> &'static str {
        "procedural plane"
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn hit(&self, ray: &Ray) -> Option<Intersection> {
        self.geometry.hit(ray)
    }

    fn ambient(&self, p: Vec3) -> Color {
        shade(
            self.shader,
            ShadedShape::Plane,
            p,
            self.geometry.point(),
            self.material.ambient,
        )
    }
}

/// A sphere whose ambient color comes from a procedural shader.
pub struct ProceduralSphere {
    sphere: Sphere,
    shader: ProceduralShader,
}

impl ProceduralSphere {
    pub fn new(sphere: Sphere, shader: ProceduralShader) -> Self {
        Self { sphere, shader }
    }
}

impl Surface for ProceduralSphere {
    fn id(&self) -> ObjectId {
        self.sphere.id()
    }

    fn type_name(&self) -> &'static str {
        "procedural sphere"
    }

    fn material(&self) -> &Material {
        self.sphere.material()
    }

    fn hit(&self, ray: &Ray) -> Option<Intersection> {
        self.sphere.hit(ray)
    }

    fn ambient(&self, p: Vec3) -> Color {
        shade(
            self.shader,
            ShadedShape::Sphere,
            p,
            self.sphere.center(),
            self.material().ambient,
        )
    }
}
