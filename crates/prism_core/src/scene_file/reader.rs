//! Scene file reader.
//!
//! Turns scene file text into a [`SceneDescription`]. Any malformed record
//! aborts the whole load; there is no partial scene.

use std::io::Read;
use std::path::Path;

use prism_math::{Vec2, Vec3};
use thiserror::Error;

use super::scanner::Scanner;
use super::{Record, SurfaceTag};
use crate::material::Material;
use crate::scene::{
    LightDesc, ObjectIds, PlaneDesc, ProceduralShader, Projection, SceneDescription, Shape,
    SphereDesc, SurfaceDesc,
};

/// Errors that can occur while reading a scene.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{record}: invalid read count for {field} at line {line} (expected {expected}, found {found})")]
    ShortRecord {
        line: usize,
        record: &'static str,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unsupported object type {tag} at line {line}")]
    UnsupportedObject { line: usize, tag: i64 },

    #[error("shader index {index} out of bounds at line {line} ({count} shaders available)")]
    InvalidShader { line: usize, index: i64, count: usize },

    #[error("scene has no projection header")]
    MissingProjection,
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene file from disk. The scene is named after the file stem.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unnamed");

    let content = std::fs::read_to_string(path)?;
    let mut scene = parse_scene(&content)?;
    scene.name = name.to_string();
    Ok(scene)
}

/// Read a scene from any reader (typically stdin).
pub fn read_scene<R: Read>(mut reader: R) -> LoadResult<SceneDescription> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_scene(&content)
}

/// Parse scene file text.
pub fn parse_scene(content: &str) -> LoadResult<SceneDescription> {
    SceneReader::new(content).read()
}

/// The scene-loading context: scanner position plus the object id sequence.
struct SceneReader<'a> {
    scanner: Scanner<'a>,
    ids: ObjectIds,
}

impl<'a> SceneReader<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            scanner: Scanner::new(content),
            ids: ObjectIds::new(),
        }
    }

    fn read(mut self) -> LoadResult<SceneDescription> {
        let world_size = match self.read_vec2("projection", "world size") {
            Err(LoadError::ShortRecord { found: 0, .. }) => {
                return Err(LoadError::MissingProjection)
            }
            result => result?,
        };
        let view_point = self.read_vec3("projection", "view point")?;
        let mut scene = SceneDescription::new("stdin", Projection::new(world_size, view_point));

        // Records run until end of input or a token that is not a type tag
        while let Some(tag) = self.scanner.read_int() {
            let line = self.scanner.line();
            self.scanner.consume_line();

            match Record::classify(tag) {
                Record::Light => {
                    let light = self.read_light()?;
                    scene.add_light(light);
                }
                Record::Surface(kind) => {
                    let surface = self.read_surface(kind)?;
                    scene.add_surface(surface);
                }
                Record::Unsupported => return Err(LoadError::UnsupportedObject { line, tag }),
                Record::Ignored => {
                    log::debug!("Ignoring record with type {} at line {}", tag, line)
                }
            }
        }

        log::info!(
            "Loaded {} lights and {} surfaces ({} objects)",
            scene.light_count(),
            scene.surface_count(),
            self.ids.issued()
        );
        Ok(scene)
    }

    /// Read `N` numbers for one field, then drop the rest of the line.
    fn read_field<const N: usize>(
        &mut self,
        record: &'static str,
        field: &'static str,
    ) -> LoadResult<[f32; N]> {
        let line = self.scanner.line();
        let (values, found) = self.scanner.read_floats::<N>();
        if found != N {
            return Err(LoadError::ShortRecord {
                line,
                record,
                field,
                expected: N,
                found,
            });
        }
        self.scanner.consume_line();
        Ok(values)
    }

    fn read_vec3(&mut self, record: &'static str, field: &'static str) -> LoadResult<Vec3> {
        self.read_field::<3>(record, field).map(Vec3::from_array)
    }

    fn read_vec2(&mut self, record: &'static str, field: &'static str) -> LoadResult<Vec2> {
        self.read_field::<2>(record, field).map(Vec2::from_array)
    }

    fn read_scalar(&mut self, record: &'static str, field: &'static str) -> LoadResult<f32> {
        self.read_field::<1>(record, field).map(|[value]| value)
    }

    fn read_material(&mut self, record: &'static str) -> LoadResult<Material> {
        Ok(Material {
            ambient: self.read_vec3(record, "ambient")?,
            diffuse: self.read_vec3(record, "diffuse")?,
            specular: self.read_vec3(record, "specular")?,
        })
    }

    fn read_light(&mut self) -> LoadResult<LightDesc> {
        let id = self.ids.next_id();
        let emissivity = self.read_vec3("light", "emissivity")?;
        let center = self.read_vec3("light", "center")?;
        Ok(LightDesc::new(id, emissivity, center))
    }

    fn read_plane(&mut self, record: &'static str) -> LoadResult<PlaneDesc> {
        Ok(PlaneDesc {
            normal: self.read_vec3(record, "normal")?,
            point: self.read_vec3(record, "point")?,
        })
    }

    fn read_sphere(&mut self, record: &'static str) -> LoadResult<SphereDesc> {
        Ok(SphereDesc {
            center: self.read_vec3(record, "center")?,
            radius: self.read_scalar(record, "radius")?,
        })
    }

    /// Shader index is stored as a float and truncated.
    fn read_shader(&mut self, record: &'static str) -> LoadResult<ProceduralShader> {
        let line = self.scanner.line();
        let index = self.read_scalar(record, "shader index")? as i64;
        ProceduralShader::from_index(index).ok_or(LoadError::InvalidShader {
            line,
            index,
            count: ProceduralShader::COUNT,
        })
    }

    fn read_surface(&mut self, kind: SurfaceTag) -> LoadResult<SurfaceDesc> {
        let id = self.ids.next_id();
        let record = kind.record_name();
        let material = self.read_material(record)?;

        let shape = match kind {
            SurfaceTag::Sphere => Shape::Sphere(self.read_sphere(record)?),
            SurfaceTag::Plane => Shape::Plane(self.read_plane(record)?),
            SurfaceTag::FinitePlane => Shape::FinitePlane {
                plane: self.read_plane(record)?,
                x_dir: self.read_vec3(record, "x direction")?,
                size: self.read_vec2(record, "size")?,
            },
            SurfaceTag::TiledPlane => Shape::TiledPlane {
                plane: self.read_plane(record)?,
                x_dir: self.read_vec3(record, "x direction")?,
                size: self.read_vec2(record, "size")?,
                background: self.read_material(record)?,
            },
            SurfaceTag::ProceduralSphere => Shape::ProceduralSphere {
                sphere: self.read_sphere(record)?,
                shader: self.read_shader(record)?,
            },
            SurfaceTag::ProceduralPlane => Shape::ProceduralPlane {
                plane: self.read_plane(record)?,
                shader: self.read_shader(record)?,
            },
        };

        Ok(SurfaceDesc::new(id, material, shape))
    }
}
