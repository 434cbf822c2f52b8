//! Image rendering.
//!
//! Renders a world through a camera into an 8-bit RGB image:
//! - One or more primary rays per pixel (jittered when sampling more than once)
//! - Samples averaged, clamped to [0, 1] and quantized
//! - Binary PPM output

use std::io::Write;

use crate::camera::{sample_square, Camera};
use crate::tracer::ray_color;
use crate::world::World;
use crate::Color;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, ImageEncoder, ImageResult, Rgb, RgbImage};
use prism_math::{Interval, Vec2};
use rand::RngCore;

/// Accumulated distance after which a ray sees only black.
pub const MAX_DIST: f32 = 20.0;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Primary rays per pixel
    pub samples_per_pixel: u32,
    /// Jitter sample positions within the pixel. Only applies when
    /// sampling more than once.
    pub jitter: bool,
    /// Accumulated ray distance limit
    pub max_distance: f32,
    /// Maximum reflection bounce depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 1,
            jitter: true,
            max_distance: MAX_DIST,
            max_depth: 64,
        }
    }
}

impl RenderConfig {
    fn jittered(&self) -> bool {
        self.jitter && self.samples_per_pixel > 1
    }
}

/// Convert a color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (255.0 * Interval::UNIT.clamp(c)) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Render a single pixel (`row` counted from the top) with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &World,
    x: u32,
    row: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = config.samples_per_pixel.max(1);
    let mut pixel_color = Color::ZERO;

    for _ in 0..samples {
        let offset = if config.jittered() {
            sample_square(rng)
        } else {
            Vec2::ZERO
        };
        let ray = camera.get_ray(x, row, offset);
        pixel_color += ray_color(&ray, world, config);
    }

    // Average the samples
    pixel_color / samples as f32
}

/// Render the entire world to an image, row by row from the top.
pub fn render(
    camera: &Camera,
    world: &World,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> RgbImage {
    let mut image = RgbImage::new(camera.image_width, camera.image_height);

    for row in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, world, x, row, config, rng);
            image.put_pixel(x, row, Rgb(color_to_rgb(color)));
        }
        log::trace!("Finished row {}/{}", row + 1, camera.image_height);
    }

    image
}

/// Write an image as binary PPM (P6).
pub fn write_ppm<W: Write>(image: &RgbImage, out: W) -> ImageResult<()> {
    let encoder =
        PnmEncoder::new(out).with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use crate::sphere::Sphere;
    use prism_core::{Material, ObjectId, Projection};
    use prism_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(-1.0, 0.5, 8.0)), [0, 127, 255]);
    }

    fn lit_sphere_world() -> World {
        let mut world = World::new();
        world.add_surface(Box::new(Sphere::new(
            ObjectId(0),
            Vec3::new(0.0, 0.0, -2.0),
            1.0,
            Material::new(Color::splat(0.5), Color::ONE, Color::ZERO),
        )));
        world.add_light(Light::new(ObjectId(1), Color::ONE, Vec3::new(0.0, 0.0, 5.0)));
        world
    }

    fn small_camera() -> Camera {
        Camera::new(
            &Projection::new(Vec2::new(4.0, 4.0), Vec3::new(0.0, 0.0, 5.0)),
            9,
            9,
        )
    }

    #[test]
    fn test_render_pixel() {
        let world = lit_sphere_world();
        let camera = small_camera();
        let config = RenderConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        // Center pixel hits the sphere, the corner misses
        let center = render_pixel(&camera, &world, 4, 4, &config, &mut rng);
        let corner = render_pixel(&camera, &world, 0, 0, &config, &mut rng);
        assert!(center.length() > 0.0);
        assert_eq!(corner, Color::ZERO);
    }

    #[test]
    fn test_supersampling_is_deterministic_with_seed() {
        let world = lit_sphere_world();
        let camera = small_camera();
        let config = RenderConfig {
            samples_per_pixel: 8,
            ..Default::default()
        };

        let a = render(&camera, &world, &config, &mut StdRng::seed_from_u64(7));
        let b = render(&camera, &world, &config, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_sample_needs_no_randomness() {
        let world = lit_sphere_world();
        let camera = small_camera();
        let config = RenderConfig::default();

        let a = render(&camera, &world, &config, &mut StdRng::seed_from_u64(1));
        let b = render(&camera, &world, &config, &mut StdRng::seed_from_u64(2));
        assert_eq!(a, b);
    }

    #[test]
    fn test_write_ppm_header() {
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(1, 0, Rgb([255, 0, 10]));

        let mut buf = Vec::new();
        write_ppm(&image, &mut buf).unwrap();

        assert!(buf.starts_with(b"P6"));
        // Binary payload: 2 x 2 pixels, 3 bytes each, at the end of the file
        let payload = &buf[buf.len() - 12..];
        assert_eq!(&payload[3..6], &[255, 0, 10]);
    }
}
