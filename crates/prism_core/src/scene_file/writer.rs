//! Scene file writer.
//!
//! Writes a [`SceneDescription`] back out in the format the reader accepts,
//! one field per line with a trailing comment naming it.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use prism_math::{Vec2, Vec3};

use super::SurfaceTag;
use crate::material::Material;
use crate::scene::{LightDesc, PlaneDesc, SceneDescription, Shape, SphereDesc, SurfaceDesc};

/// Save a scene to a file.
pub fn save_scene<P: AsRef<Path>>(scene: &SceneDescription, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_scene(scene, &mut writer)?;
    writer.flush()
}

/// Write a scene. Lights and surfaces are interleaved in id order so that
/// reading the output back assigns the same ids.
pub fn write_scene<W: Write>(scene: &SceneDescription, mut out: W) -> io::Result<()> {
    write_vec2(&mut out, scene.projection.world_size, "world size")?;
    write_vec3(&mut out, scene.projection.view_point, "viewpoint")?;

    let mut lights = scene.lights.iter().peekable();
    let mut surfaces = scene.surfaces.iter().peekable();
    loop {
        let light_first = match (lights.peek(), surfaces.peek()) {
            (Some(light), Some(surface)) => light.id < surface.id,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        if light_first {
            if let Some(light) = lights.next() {
                write_light(&mut out, light)?;
            }
        } else if let Some(surface) = surfaces.next() {
            write_surface(&mut out, surface)?;
        }
    }

    log::debug!(
        "Wrote scene '{}' ({} lights, {} surfaces)",
        scene.name,
        scene.light_count(),
        scene.surface_count()
    );
    Ok(())
}

fn write_vec3<W: Write>(out: &mut W, v: Vec3, label: &str) -> io::Result<()> {
    writeln!(out, "{} {} {}    {}", v.x, v.y, v.z, label)
}

fn write_vec2<W: Write>(out: &mut W, v: Vec2, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}    {}", v.x, v.y, label)
}

fn write_material<W: Write>(out: &mut W, material: &Material, prefix: &str) -> io::Result<()> {
    write_vec3(out, material.ambient, &format!("{prefix}ambient"))?;
    write_vec3(out, material.diffuse, &format!("{prefix}diffuse"))?;
    write_vec3(out, material.specular, &format!("{prefix}specular"))
}

fn write_plane<W: Write>(out: &mut W, plane: &PlaneDesc) -> io::Result<()> {
    write_vec3(out, plane.normal, "normal")?;
    write_vec3(out, plane.point, "point")
}

fn write_sphere<W: Write>(out: &mut W, sphere: &SphereDesc) -> io::Result<()> {
    write_vec3(out, sphere.center, "center")?;
    writeln!(out, "{}    radius", sphere.radius)
}

fn write_light<W: Write>(out: &mut W, light: &LightDesc) -> io::Result<()> {
    writeln!(out, "10    light {}", light.id.0)?;
    write_vec3(out, light.emissivity, "emissivity")?;
    write_vec3(out, light.center, "center")
}

fn write_surface<W: Write>(out: &mut W, surface: &SurfaceDesc) -> io::Result<()> {
    let kind = SurfaceTag::of(&surface.shape);
    writeln!(out, "{}    {} {}", kind.tag(), kind.record_name(), surface.id.0)?;
    write_material(out, &surface.material, "")?;

    match &surface.shape {
        Shape::Sphere(sphere) => write_sphere(out, sphere),
        Shape::Plane(plane) => write_plane(out, plane),
        Shape::FinitePlane { plane, x_dir, size } => {
            write_plane(out, plane)?;
            write_vec3(out, *x_dir, "x direction")?;
            write_vec2(out, *size, "size")
        }
        Shape::TiledPlane {
            plane,
            x_dir,
            size,
            background,
        } => {
            write_plane(out, plane)?;
            write_vec3(out, *x_dir, "x direction")?;
            write_vec2(out, *size, "tile size")?;
            write_material(out, background, "background ")
        }
        Shape::ProceduralSphere { sphere, shader } => {
            write_sphere(out, sphere)?;
            writeln!(out, "{}    shader", shader.index())
        }
        Shape::ProceduralPlane { plane, shader } => {
            write_plane(out, plane)?;
            writeln!(out, "{}    shader", shader.index())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{ObjectIds, ProceduralShader, Projection};
    use crate::scene_file::parse_scene;
    use prism_math::Color;

    fn sample_scene() -> SceneDescription {
        let mut ids = ObjectIds::new();
        let mut scene = SceneDescription::new(
            "sample",
            Projection::new(Vec2::new(4.0, 3.0), Vec3::new(0.0, 1.0, 6.0)),
        );

        scene.add_surface(SurfaceDesc::new(
            ids.next_id(),
            Material::new(Color::splat(0.1), Color::new(0.8, 0.2, 0.2), Color::ZERO),
            Shape::Sphere(SphereDesc {
                center: Vec3::new(0.0, 0.0, -3.0),
                radius: 1.25,
            }),
        ));
        scene.add_light(LightDesc::new(
            ids.next_id(),
            Color::splat(4.0),
            Vec3::new(2.0, 5.0, 1.0),
        ));
        scene.add_surface(SurfaceDesc::new(
            ids.next_id(),
            Material::diffuse(Color::ONE),
            Shape::TiledPlane {
                plane: PlaneDesc {
                    normal: Vec3::Y,
                    point: Vec3::new(0.0, -1.0, 0.0),
                },
                x_dir: Vec3::new(1.0, 0.0, 1.0),
                size: Vec2::new(0.5, 2.0),
                background: Material::diffuse(Color::splat(0.25)),
            },
        ));
        scene.add_surface(SurfaceDesc::new(
            ids.next_id(),
            Material::new(Color::ZERO, Color::splat(0.5), Color::splat(0.5)),
            Shape::ProceduralPlane {
                plane: PlaneDesc {
                    normal: Vec3::Z,
                    point: Vec3::new(0.0, 0.0, -10.0),
                },
                shader: ProceduralShader::Rings,
            },
        ));
        scene
    }

    #[test]
    fn test_write_then_parse() {
        let scene = sample_scene();

        let mut buf = Vec::new();
        write_scene(&scene, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut back = parse_scene(&text).unwrap();
        back.name = scene.name.clone();
        assert_eq!(back, scene);
    }

    #[test]
    fn test_records_in_id_order() {
        let scene = sample_scene();

        let mut buf = Vec::new();
        write_scene(&scene, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let tags: Vec<&str> = text
            .lines()
            .filter(|line| {
                line.contains("sphere") || line.contains("light") || line.contains("plane")
            })
            .collect();
        assert_eq!(
            tags,
            vec![
                "13    sphere 0",
                "10    light 1",
                "16    tiled plane 2",
                "20    procedural plane 3"
            ]
        );
    }

    #[test]
    fn test_header_format() {
        let scene = SceneDescription::new("empty", Projection::default());

        let mut buf = Vec::new();
        write_scene(&scene, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "8 6    world size\n0 0 5    viewpoint\n"
        );
    }
}
