//! Surface trait and HitRecord for ray-surface intersection.

use crate::Color;
use prism_core::{Material, ObjectId};
use prism_math::{Ray, Vec3};

/// Where a ray meets a single surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance along the (unit) ray direction, always > 0
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
}

impl Intersection {
    /// Build an intersection at distance `t` along `ray`.
    #[inline]
    pub fn at(ray: &Ray, t: f32, normal: Vec3) -> Self {
        Self {
            t,
            p: ray.at(t),
            normal,
        }
    }
}

/// The nearest intersection in a world, together with the surface struck.
///
/// Created fresh for every query, so tracing never shares hit state.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Distance along the ray
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// The surface that was hit
    pub surface: &'a dyn Surface,
}

impl<'a> HitRecord<'a> {
    pub fn new(hit: Intersection, surface: &'a dyn Surface) -> Self {
        Self {
            t: hit.t,
            p: hit.p,
            normal: hit.normal,
            surface,
        }
    }

    /// Id of the surface that was hit.
    pub fn id(&self) -> ObjectId {
        self.surface.id()
    }

    pub fn ambient(&self) -> Color {
        self.surface.ambient(self.p)
    }

    pub fn diffuse(&self) -> Color {
        self.surface.diffuse(self.p)
    }

    pub fn specular(&self) -> Color {
        self.surface.specular(self.p)
    }
}

impl std::fmt::Debug for HitRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRecord")
            .field("t", &self.t)
            .field("p", &self.p)
            .field("normal", &self.normal)
            .field("surface", &self.surface.id())
            .finish()
    }
}

/// Trait for surfaces that can be hit by rays and shaded.
///
/// The shading queries default to the stored material. Surfaces whose
/// appearance varies over the surface override them.
pub trait Surface: Send + Sync {
    /// Object id assigned at load time.
    fn id(&self) -> ObjectId;

    /// Short type name used in logs.
    fn type_name(&self) -> &'static str;

    /// The stored material.
    fn material(&self) -> &Material;

    /// Nearest intersection at a strictly positive distance, if any.
    fn hit(&self, ray: &Ray) -> Option<Intersection>;

    /// Ambient reflectivity at a point on the surface.
    fn ambient(&self, _p: Vec3) -> Color {
        self.material().ambient
    }

    /// Diffuse reflectivity at a point on the surface.
    fn diffuse(&self, _p: Vec3) -> Color {
        self.material().diffuse
    }

    /// Specular reflectivity at a point on the surface.
    fn specular(&self, _p: Vec3) -> Color {
        self.material().specular
    }
}
