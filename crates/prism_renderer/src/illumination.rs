//! Diffuse illumination from point lights with hard shadows.

use crate::surface::HitRecord;
use crate::world::World;
use crate::Color;
use prism_math::{Ray, Vec3Ext};

/// Add the diffuse contribution of every visible light at `hit` to `color`.
///
/// A light contributes `diffuse * emissivity * cos / distance`, where `cos`
/// is the angle between the surface normal and the direction to the light.
/// Lights behind the surface or blocked by another surface add nothing.
pub fn add_illumination(world: &World, hit: &HitRecord<'_>, color: &mut Color) {
    for light in world.lights() {
        let to_light = light.center() - hit.p;
        let distance = to_light.length();
        let direction = to_light.unit_or_warn();

        let cos = hit.normal.dot(direction);
        if cos < 0.0 {
            continue;
        }

        let shadow_ray = Ray::new(hit.p, direction);
        if let Some(occluder) = world.find_closest(&shadow_ray, Some(hit.surface)) {
            if occluder.t < distance {
                log::trace!(
                    "Light {} occluded at {} by {} {}",
                    light.id(),
                    hit.p,
                    occluder.surface.type_name(),
                    occluder.id()
                );
                continue;
            }
        }

        *color += hit.diffuse() * light.emissive() * cos / distance;
    }
}
