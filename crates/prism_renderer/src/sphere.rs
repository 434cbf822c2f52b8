//! Sphere primitive for ray tracing.

use crate::surface::{Intersection, Surface};
use prism_core::{Material, ObjectId, SphereDesc};
use prism_math::{Interval, Ray, Vec3, Vec3Ext};

/// A sphere primitive.
pub struct Sphere {
    id: ObjectId,
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(id: ObjectId, center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            id,
            center,
            radius,
            material,
        }
    }

    /// Create a sphere from its scene record.
    pub fn from_desc(id: ObjectId, desc: &SphereDesc, material: Material) -> Self {
        Self::new(id, desc.center, desc.radius, material)
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }
}

impl Surface for Sphere {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn type_name(&self) -> &'static str {
        "sphere"
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn hit(&self, ray: &Ray) -> Option<Intersection> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        // A grazing ray (discriminant of zero) counts as a miss
        let discriminant = h * h - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Take the nearer root unless it is behind the origin
        let mut root = (h - sqrtd) / a;
        if !Interval::FORWARD.surrounds(root) {
            root = (h + sqrtd) / a;
            if !Interval::FORWARD.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let normal = (p - self.center).unit_or_warn();
        Some(Intersection { t: root, p, normal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn unit_sphere_at(center: Vec3) -> Sphere {
        Sphere::new(ObjectId(0), center, 1.0, Material::diffuse(Color::ONE))
    }

    #[test]
    fn test_sphere_hit_from_outside() {
        let center = Vec3::new(1.0, 2.0, -6.0);
        let sphere = unit_sphere_at(center);
        let origin = Vec3::new(0.0, 0.0, 1.0);

        let ray = Ray::towards(origin, center);
        let hit = sphere.hit(&ray).unwrap();

        let expected = (center - origin).length() - 1.0;
        assert!((hit.t - expected).abs() < 1e-4);

        // Normal is parallel to hit - center and unit length
        let radial = (hit.p - center).normalize();
        assert!((hit.normal.length() - 1.0).abs() < 1e-5);
        assert!(hit.normal.dot(radial) > 0.9999);
    }

    #[test]
    fn test_sphere_hit_from_inside_takes_far_root() {
        let sphere = unit_sphere_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.hit(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-5);
        assert!((hit.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -3.0));

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere.hit(&ray).is_none());

        // Sphere entirely behind the origin
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_tangent_ray_misses() {
        let sphere = unit_sphere_at(Vec3::new(0.0, 0.0, -3.0));
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), -Vec3::Z);

        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_default_shading_uses_material() {
        let material = Material::new(
            Color::new(0.1, 0.2, 0.3),
            Color::new(0.4, 0.5, 0.6),
            Color::new(0.7, 0.8, 0.9),
        );
        let sphere = Sphere::new(ObjectId(3), Vec3::ZERO, 1.0, material);

        assert_eq!(sphere.ambient(Vec3::X), material.ambient);
        assert_eq!(sphere.diffuse(Vec3::X), material.diffuse);
        assert_eq!(sphere.specular(Vec3::X), material.specular);
        assert_eq!(sphere.id(), ObjectId(3));
    }
}
