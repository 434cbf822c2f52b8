//! Simple ray tracer example.
//!
//! Builds a small scene in code (a checkered floor, a mirror sphere and a
//! procedurally shaded sphere), writes it out as a scene file and renders it
//! to PPM.

use prism_core::{
    save_scene, LightDesc, Material, ObjectIds, PlaneDesc, ProceduralShader, Projection,
    SceneDescription, Shape, SphereDesc, SurfaceDesc,
};
use prism_renderer::{render, write_ppm, Camera, Color, RenderConfig, Vec2, Vec3, World};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Prism Ray Tracer - Simple Example");
    println!("=================================");

    let scene = build_scene();
    save_scene(&scene, "simple.scene")?;
    println!("Saved scene to simple.scene");

    let world = World::from_scene(&scene);
    let camera = Camera::new(&scene.projection, 640, 480);
    let config = RenderConfig {
        samples_per_pixel: 4,
        ..Default::default()
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        camera.image_width, camera.image_height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let mut rng = StdRng::seed_from_u64(42);
    let image = render(&camera, &world, &config, &mut rng);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    write_ppm(&image, BufWriter::new(File::create(filename)?))?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> SceneDescription {
    let mut ids = ObjectIds::new();
    let mut scene = SceneDescription::new(
        "simple",
        Projection::new(Vec2::new(8.0, 6.0), Vec3::new(0.0, 0.0, 6.0)),
    );

    // Checkered floor
    scene.add_surface(SurfaceDesc::new(
        ids.next_id(),
        Material::new(Color::splat(2.0), Color::splat(6.0), Color::ZERO),
        Shape::TiledPlane {
            plane: PlaneDesc {
                normal: Vec3::Y,
                point: Vec3::new(0.0, -2.0, 0.0),
            },
            x_dir: Vec3::new(1.0, 0.0, 1.0),
            size: Vec2::new(1.5, 1.5),
            background: Material::new(
                Color::new(0.5, 0.5, 2.0),
                Color::new(1.0, 1.0, 4.0),
                Color::ZERO,
            ),
        },
    ));

    // Mirror sphere
    scene.add_surface(SurfaceDesc::new(
        ids.next_id(),
        Material::new(Color::splat(0.5), Color::splat(1.0), Color::splat(0.8)),
        Shape::Sphere(SphereDesc {
            center: Vec3::new(-1.5, -0.5, -5.0),
            radius: 1.5,
        }),
    ));

    // Ringed sphere
    scene.add_surface(SurfaceDesc::new(
        ids.next_id(),
        Material::new(Color::ONE, Color::splat(4.0), Color::ZERO),
        Shape::ProceduralSphere {
            sphere: SphereDesc {
                center: Vec3::new(2.0, -1.0, -4.0),
                radius: 1.0,
            },
            shader: ProceduralShader::Rings,
        },
    ));

    scene.add_light(LightDesc::new(
        ids.next_id(),
        Color::splat(5.0),
        Vec3::new(-4.0, 6.0, 0.0),
    ));

    scene
}
