//! The renderable world: surfaces and lights built from a scene description.

use crate::light::Light;
use crate::plane::{FinitePlane, Plane, PlaneGeometry, TiledPlane};
use crate::procedural::{ProceduralPlane, ProceduralSphere};
use crate::sphere::Sphere;
use crate::surface::{HitRecord, Surface};
use prism_core::{SceneDescription, Shape, SurfaceDesc};
use prism_math::Ray;

/// Surfaces and lights in scene order.
pub struct World {
    surfaces: Vec<Box<dyn Surface>>,
    lights: Vec<Light>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Build every surface and light in a scene description.
    pub fn from_scene(scene: &SceneDescription) -> Self {
        let mut world = Self::new();
        for desc in &scene.surfaces {
            world.add_surface(build_surface(desc));
        }
        for desc in &scene.lights {
            world.add_light(Light::from_desc(desc));
        }

        log::debug!(
            "Built world with {} surfaces and {} lights",
            world.surfaces.len(),
            world.lights.len()
        );
        world
    }

    /// Add a surface. Order matters for tie-breaking.
    pub fn add_surface(&mut self, surface: Box<dyn Surface>) {
        log::debug!("Adding {} {}", surface.type_name(), surface.id());
        self.surfaces.push(surface);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn surfaces(&self) -> &[Box<dyn Surface>] {
        &self.surfaces
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Nearest surface hit by `ray`, skipping the surface `exclude`.
    ///
    /// Exclusion is by identity, so surfaces sharing an id are still distinct.
    /// On equal distances the surface added first wins.
    pub fn find_closest(
        &self,
        ray: &Ray,
        exclude: Option<&dyn Surface>,
    ) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for surface in &self.surfaces {
            if exclude.is_some_and(|excluded| std::ptr::addr_eq(surface.as_ref(), excluded)) {
                continue;
            }
            let Some(hit) = surface.hit(ray) else {
                continue;
            };
            if closest.map_or(true, |c| hit.t < c.t) {
                closest = Some(HitRecord::new(hit, surface.as_ref()));
            }
        }

        closest
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a surface record into its intersectable form.
pub fn build_surface(desc: &SurfaceDesc) -> Box<dyn Surface> {
    let id = desc.id;
    let material = desc.material;

    match &desc.shape {
        Shape::Sphere(sphere) => Box::new(Sphere::from_desc(id, sphere, material)),
        Shape::Plane(plane) => Box::new(Plane::new(id, PlaneGeometry::from_desc(plane), material)),
        Shape::FinitePlane { plane, x_dir, size } => Box::new(FinitePlane::new(
            id,
            PlaneGeometry::from_desc(plane),
            *x_dir,
            *size,
            material,
        )),
        Shape::TiledPlane {
            plane,
            x_dir,
            size,
            background,
        } => Box::new(TiledPlane::new(
            id,
            PlaneGeometry::from_desc(plane),
            *x_dir,
            *size,
            material,
            *background,
        )),
        Shape::ProceduralSphere { sphere, shader } => Box::new(ProceduralSphere::new(
            Sphere::from_desc(id, sphere, material),
            *shader,
        )),
        Shape::ProceduralPlane { plane, shader } => Box::new(ProceduralPlane::new(
            id,
            PlaneGeometry::from_desc(plane),
            material,
            *shader,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use prism_core::{
        Material, ObjectId, ObjectIds, PlaneDesc, ProceduralShader, Projection, SphereDesc,
    };
    use prism_math::Vec3;

    fn sphere_desc(id: ObjectId, z: f32) -> SurfaceDesc {
        SurfaceDesc::new(
            id,
            Material::diffuse(Color::ONE),
            Shape::Sphere(SphereDesc {
                center: Vec3::new(0.0, 0.0, z),
                radius: 1.0,
            }),
        )
    }

    #[test]
    fn test_from_scene() {
        let mut ids = ObjectIds::new();
        let mut scene = SceneDescription::new("world", Projection::default());
        scene.add_surface(sphere_desc(ids.next_id(), -3.0));
        scene.add_light(prism_core::LightDesc::new(
            ids.next_id(),
            Color::ONE,
            Vec3::new(0.0, 0.0, 5.0),
        ));
        scene.add_surface(SurfaceDesc::new(
            ids.next_id(),
            Material::default(),
            Shape::ProceduralPlane {
                plane: PlaneDesc {
                    normal: Vec3::Y,
                    point: Vec3::new(0.0, -1.0, 0.0),
                },
                shader: ProceduralShader::Bands,
            },
        ));

        let world = World::from_scene(&scene);

        assert_eq!(world.surfaces().len(), 2);
        assert_eq!(world.lights().len(), 1);
        assert_eq!(world.surfaces()[1].id(), ObjectId(2));
        assert_eq!(world.surfaces()[1].type_name(), "procedural plane");
        assert_eq!(world.lights()[0].id(), ObjectId(1));
    }

    #[test]
    fn test_find_closest() {
        let mut world = World::new();
        world.add_surface(build_surface(&sphere_desc(ObjectId(0), -8.0)));
        world.add_surface(build_surface(&sphere_desc(ObjectId(1), -4.0)));

        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let hit = world.find_closest(&ray, None).unwrap();
        assert_eq!(hit.id(), ObjectId(1));
        assert!((hit.t - 3.0).abs() < 1e-5);

        // Excluding the near sphere exposes the far one
        let near = world.surfaces()[1].as_ref();
        let hit = world.find_closest(&ray, Some(near)).unwrap();
        assert_eq!(hit.id(), ObjectId(0));
        assert!((hit.t - 7.0).abs() < 1e-5);

        assert!(world.find_closest(&Ray::new(Vec3::ZERO, Vec3::Z), None).is_none());
    }

    #[test]
    fn test_exclusion_ignores_shared_ids() {
        let mut world = World::new();
        world.add_surface(build_surface(&sphere_desc(ObjectId(3), -8.0)));
        world.add_surface(build_surface(&sphere_desc(ObjectId(3), -4.0)));

        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        let near = world.surfaces()[1].as_ref();
        let hit = world.find_closest(&ray, Some(near)).unwrap();

        // Only the excluded sphere is skipped, not its namesake behind it
        assert!(std::ptr::addr_eq(hit.surface, world.surfaces()[0].as_ref()));
        assert!((hit.t - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_ties_go_to_first_surface() {
        let mut world = World::new();
        world.add_surface(build_surface(&sphere_desc(ObjectId(5), -4.0)));
        world.add_surface(build_surface(&sphere_desc(ObjectId(2), -4.0)));

        let hit = world.find_closest(&Ray::new(Vec3::ZERO, -Vec3::Z), None).unwrap();
        assert_eq!(hit.id(), ObjectId(5));
    }

    #[test]
    fn test_empty_world_misses() {
        let world = World::default();
        assert!(world.find_closest(&Ray::new(Vec3::ZERO, -Vec3::Z), None).is_none());
    }
}
