//! Recursive reflection tracer.
//!
//! Color at a hit is `(ambient + diffuse illumination) / total distance`,
//! where the distance is accumulated over every bounce so far. Reflective
//! surfaces add their specular color times whatever the mirrored ray sees.

use crate::illumination::add_illumination;
use crate::world::World;
use crate::{Color, RenderConfig};
use crate::surface::Surface;
use prism_math::{Ray, Vec3Ext};

/// Compute the color seen by a primary ray.
pub fn ray_color(ray: &Ray, world: &World, config: &RenderConfig) -> Color {
    trace(ray, world, config, 0.0, None, 0)
}

/// Trace one ray that has already travelled `total_distance`.
///
/// `last_hit` is the surface the ray leaves from; it is never hit again by
/// this ray.
fn trace(
    ray: &Ray,
    world: &World,
    config: &RenderConfig,
    total_distance: f32,
    last_hit: Option<&dyn Surface>,
    depth: u32,
) -> Color {
    if total_distance > config.max_distance || depth > config.max_depth {
        return Color::ZERO;
    }

    let Some(hit) = world.find_closest(ray, last_hit) else {
        return Color::ZERO;
    };

    let total_distance = total_distance + hit.t;

    let mut color = hit.ambient();
    add_illumination(world, &hit, &mut color);
    color /= total_distance;

    let specular = hit.specular();
    if specular.dot(specular) > 0.0 {
        let reflected = Ray::new(hit.p, ray.direction().reflect_about(hit.normal));
        let seen = trace(
            &reflected,
            world,
            config,
            total_distance,
            Some(hit.surface),
            depth + 1,
        );
        color += specular * seen;
    }

    color
}
