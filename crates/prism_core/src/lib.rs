//! Prism Core - Scene description and scene file support.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `Projection`,
//!   `LightDesc`, `SurfaceDesc`, `Material`
//! - **Scene file support**: reading the line-oriented scene format and
//!   writing it back out
//!
//! The renderer builds its intersectable surfaces from these records; nothing
//! in here knows how to trace a ray.
//!
//! # Example
//!
//! ```ignore
//! use prism_core::scene_file::load_scene;
//!
//! let scene = load_scene("scene.txt")?;
//! println!("Loaded {} lights, {} surfaces",
//!     scene.light_count(),
//!     scene.surface_count());
//! ```

pub mod material;
pub mod scene;
pub mod scene_file;

// Re-export commonly used types
pub use material::Material;
pub use scene::{
    LightDesc, ObjectId, ObjectIds, PlaneDesc, ProceduralShader, Projection, SceneDescription,
    Shape, SphereDesc, SurfaceDesc,
};
pub use scene_file::{load_scene, parse_scene, read_scene, save_scene, write_scene, LoadError};
