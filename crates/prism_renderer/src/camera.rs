//! Camera for primary ray generation.
//!
//! The view plane is the rectangle of the scene's world size centered on
//! the origin at z = 0. Every primary ray starts at the viewpoint and passes
//! through a point on that plane.

use prism_core::Projection;
use prism_math::{Ray, Vec2, Vec3};
use rand::{Rng, RngCore};

/// Maps pixels onto the view plane.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    /// View plane size in world units
    world_size: Vec2,
    /// Eye position
    view_point: Vec3,
}

impl Camera {
    /// Create a camera for a scene projection rendering `width` x `height`
    /// pixels. Both dimensions are raised to at least 2 so the first and last
    /// pixel land on opposite edges of the view plane.
    pub fn new(projection: &Projection, width: u32, height: u32) -> Self {
        if width < 2 || height < 2 {
            log::warn!("Resolution {}x{} raised to at least 2x2", width, height);
        }
        Self {
            image_width: width.max(2),
            image_height: height.max(2),
            world_size: projection.world_size,
            view_point: projection.view_point,
        }
    }

    /// World-space point on the view plane for pixel-space coordinates.
    ///
    /// Pixel-space y grows upwards: y = 0 is the bottom row of the image.
    pub fn view_plane_point(&self, x: f32, y: f32) -> Vec3 {
        let last = Vec2::new(
            (self.image_width - 1) as f32,
            (self.image_height - 1) as f32,
        );
        let world = Vec2::new(x, y) / last * self.world_size - self.world_size / 2.0;
        world.extend(0.0)
    }

    /// Generate the ray for image column `i` and row `j` (rows counted from
    /// the top), nudged by `offset` in pixel units.
    ///
    /// Rows past the bottom of the image are clamped to the bottom row.
    pub fn get_ray(&self, i: u32, j: u32, offset: Vec2) -> Ray {
        let y = (self.image_height - 1).saturating_sub(j) as f32;
        let target = self.view_plane_point(i as f32 + offset.x, y + offset.y);
        Ray::towards(self.view_point, target)
    }
}

/// Sample a random offset in the unit square [-0.5, 0.5) x [-0.5, 0.5).
pub fn sample_square(rng: &mut dyn RngCore) -> Vec2 {
    Vec2::new(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5))
}
