//! Line-oriented scene file format.
//!
//! A scene file starts with the projection (world size, then viewpoint) and
//! continues with records, each introduced by an integer type tag on its own
//! line. Every field is a group of numbers on one line; anything after the
//! numbers is a comment.
//!
//! ```text
//! 8 6          world size
//! 0 0 5        viewpoint
//! 10           light
//! 1 1 1        emissivity
//! 0 4 2        center
//! 13           sphere
//! 0 0 0        ambient
//! 1 1 1        diffuse
//! 0 0 0        specular
//! 0 0 -3       center
//! 1            radius
//! ```

mod reader;
mod scanner;
mod writer;

pub use reader::{load_scene, parse_scene, read_scene, LoadError, LoadResult};
pub use writer::{save_scene, write_scene};

use crate::scene::Shape;

/// First and last tag values that name an object type. Tags outside this
/// range are skipped.
const FIRST_TAG: i64 = 10;
const LAST_TAG: i64 = 25;

const LIGHT_TAG: i64 = 10;

/// Surface record types this reader understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SurfaceTag {
    Sphere,
    Plane,
    FinitePlane,
    TiledPlane,
    ProceduralSphere,
    ProceduralPlane,
}

impl SurfaceTag {
    fn from_tag(tag: i64) -> Option<Self> {
        match tag {
            13 => Some(Self::Sphere),
            14 => Some(Self::Plane),
            15 => Some(Self::FinitePlane),
            16 => Some(Self::TiledPlane),
            19 => Some(Self::ProceduralSphere),
            20 => Some(Self::ProceduralPlane),
            _ => None,
        }
    }

    pub(crate) fn of(shape: &Shape) -> Self {
        match shape {
            Shape::Sphere(_) => Self::Sphere,
            Shape::Plane(_) => Self::Plane,
            Shape::FinitePlane { .. } => Self::FinitePlane,
            Shape::TiledPlane { .. } => Self::TiledPlane,
            Shape::ProceduralSphere { .. } => Self::ProceduralSphere,
            Shape::ProceduralPlane { .. } => Self::ProceduralPlane,
        }
    }

    pub(crate) fn tag(self) -> i64 {
        match self {
            Self::Sphere => 13,
            Self::Plane => 14,
            Self::FinitePlane => 15,
            Self::TiledPlane => 16,
            Self::ProceduralSphere => 19,
            Self::ProceduralPlane => 20,
        }
    }

    /// Record name used in error messages and written comments.
    pub(crate) fn record_name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Plane => "plane",
            Self::FinitePlane => "finite plane",
            Self::TiledPlane => "tiled plane",
            Self::ProceduralSphere => "procedural sphere",
            Self::ProceduralPlane => "procedural plane",
        }
    }
}

/// What a type tag asks the reader to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Record {
    Light,
    Surface(SurfaceTag),
    /// In the object range but not implemented; fatal
    Unsupported,
    /// Outside the object range; skipped
    Ignored,
}

impl Record {
    pub(crate) fn classify(tag: i64) -> Self {
        if tag == LIGHT_TAG {
            return Record::Light;
        }
        if let Some(surface) = SurfaceTag::from_tag(tag) {
            return Record::Surface(surface);
        }
        if (FIRST_TAG..=LAST_TAG).contains(&tag) {
            Record::Unsupported
        } else {
            Record::Ignored
        }
    }
}
