//! Scene description types for Prism.
//!
//! A scene is a projection (view plane size and viewpoint), an ordered list
//! of point lights and an ordered list of surfaces. These are plain records;
//! the renderer turns them into intersectable geometry.

use std::fmt;

use prism_math::{Color, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::material::{write_triple, Material};

/// Serial number of a loaded object, used in dumps, logs and to exclude a
/// surface from its own reflection and shadow queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:4}", self.0)
    }
}

/// Hands out sequential object ids. Lights and surfaces share one sequence.
#[derive(Clone, Debug, Default)]
pub struct ObjectIds {
    next: usize,
}

impl ObjectIds {
    /// Start a new sequence at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next id.
    pub fn next_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> usize {
        self.next
    }
}

/// View plane size in world units and the eye position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Width and height of the view plane (at z = 0) in world units
    pub world_size: Vec2,

    /// Eye position all primary rays start from
    pub view_point: Vec3,
}

impl Projection {
    pub fn new(world_size: Vec2, view_point: Vec3) -> Self {
        Self {
            world_size,
            view_point,
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            world_size: Vec2::new(8.0, 6.0),
            view_point: Vec3::new(0.0, 0.0, 5.0),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Projection data -")?;
        writeln!(f, "world size - ")?;
        writeln!(f, "{:8.3} x {:8.3}", self.world_size.x, self.world_size.y)?;
        write_triple(f, "view point - ", self.view_point)
    }
}

/// A point light source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDesc {
    pub id: ObjectId,

    /// Emitted intensity per channel
    pub emissivity: Color,

    /// Light position
    pub center: Vec3,
}

impl LightDesc {
    pub fn new(id: ObjectId, emissivity: Color, center: Vec3) -> Self {
        Self {
            id,
            emissivity,
            center,
        }
    }
}

impl fmt::Display for LightDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dumping object {} of type Light", self.id)?;
        writeln!(f)?;
        writeln!(f, "Light data")?;
        write_triple(f, "emissivity - ", self.emissivity)?;
        write_triple(f, "center     - ", self.center)
    }
}

/// An infinite plane through `point` with the given normal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaneDesc {
    pub normal: Vec3,
    pub point: Vec3,
}

/// A sphere.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f32,
}

/// Procedural ambient color functions available to procedural planes and
/// spheres. The scene file selects one by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProceduralShader {
    /// Alternating color bands
    Bands,
    /// Concentric rings around the z axis
    Rings,
    /// Sine pattern with asymptotic lines
    Asymptotes,
}

impl ProceduralShader {
    /// Number of available shaders.
    pub const COUNT: usize = 3;

    /// Look up a shader by its scene-file index.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Bands),
            1 => Some(Self::Rings),
            2 => Some(Self::Asymptotes),
            _ => None,
        }
    }

    /// The scene-file index of this shader.
    pub fn index(self) -> usize {
        match self {
            Self::Bands => 0,
            Self::Rings => 1,
            Self::Asymptotes => 2,
        }
    }
}

/// Geometry of a surface, one variant per supported object type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Sphere(SphereDesc),
    Plane(PlaneDesc),
    FinitePlane {
        plane: PlaneDesc,
        x_dir: Vec3,
        size: Vec2,
    },
    TiledPlane {
        plane: PlaneDesc,
        x_dir: Vec3,
        size: Vec2,
        background: Material,
    },
    ProceduralSphere {
        sphere: SphereDesc,
        shader: ProceduralShader,
    },
    ProceduralPlane {
        plane: PlaneDesc,
        shader: ProceduralShader,
    },
}

impl Shape {
    /// Human readable type name, as used in dumps and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "Sphere",
            Shape::Plane(_) => "Plane",
            Shape::FinitePlane { .. } => "FPlane",
            Shape::TiledPlane { .. } => "TPlane",
            Shape::ProceduralSphere { .. } => "PSphere",
            Shape::ProceduralPlane { .. } => "PPlane",
        }
    }
}

/// A surface record: id, material and geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDesc {
    pub id: ObjectId,
    pub material: Material,
    pub shape: Shape,
}

impl SurfaceDesc {
    pub fn new(id: ObjectId, material: Material, shape: Shape) -> Self {
        Self {
            id,
            material,
            shape,
        }
    }
}

impl fmt::Display for SurfaceDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dumping object {} of type {}", self.id, self.shape.type_name())?;
        write!(f, "{}", self.material)?;

        let plane_dump = |f: &mut fmt::Formatter<'_>, plane: &PlaneDesc| {
            writeln!(f)?;
            writeln!(f, "Plane data")?;
            write_triple(f, "normal - ", plane.normal)?;
            write_triple(f, "point  - ", plane.point)
        };
        let sphere_dump = |f: &mut fmt::Formatter<'_>, sphere: &SphereDesc| {
            writeln!(f)?;
            writeln!(f, "Sphere data")?;
            write_triple(f, "center - ", sphere.center)?;
            writeln!(f, "radius - ")?;
            writeln!(f, "{:8.3}", sphere.radius)
        };

        match &self.shape {
            Shape::Sphere(sphere) => sphere_dump(f, sphere),
            Shape::Plane(plane) => plane_dump(f, plane),
            Shape::FinitePlane { plane, x_dir, size }
            | Shape::TiledPlane {
                plane, x_dir, size, ..
            } => {
                plane_dump(f, plane)?;
                writeln!(f)?;
                writeln!(f, "{} data", self.shape.type_name())?;
                write_triple(f, "xdir - ", *x_dir)?;
                writeln!(f, "size - ")?;
                writeln!(f, "{:8.3} x {:8.3}", size.x, size.y)?;
                if let Shape::TiledPlane { background, .. } = &self.shape {
                    write!(f, "background {background}")?;
                }
                Ok(())
            }
            Shape::ProceduralSphere { sphere, shader } => {
                sphere_dump(f, sphere)?;
                writeln!(f, "shader - {:?} ({})", shader, shader.index())
            }
            Shape::ProceduralPlane { plane, shader } => {
                plane_dump(f, plane)?;
                writeln!(f, "shader - {:?} ({})", shader, shader.index())
            }
        }
    }
}

/// A complete scene: projection, lights and surfaces.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Scene name (usually from filename)
    pub name: String,

    /// View plane and eye position
    pub projection: Projection,

    /// Point lights in load order
    pub lights: Vec<LightDesc>,

    /// Surfaces in load order
    pub surfaces: Vec<SurfaceDesc>,
}

impl SceneDescription {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>, projection: Projection) -> Self {
        Self {
            name: name.into(),
            projection,
            ..Default::default()
        }
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: LightDesc) {
        self.lights.push(light);
    }

    /// Add a surface to the scene.
    pub fn add_surface(&mut self, surface: SurfaceDesc) {
        self.surfaces.push(surface);
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Get surface count.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Log the projection and every object at debug level.
    pub fn log_dump(&self) {
        log::debug!("{}", self.projection);
        for surface in &self.surfaces {
            log::debug!("{surface}");
        }
        for light in &self.lights {
            log::debug!("{light}");
        }
    }
}
