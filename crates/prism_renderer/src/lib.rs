//! Prism Renderer - recursive reflection ray tracing
//!
//! Renders the surfaces of a scene lit by point lights with hard shadows.
//! Every hit contributes its ambient color plus the diffuse light reaching
//! it, attenuated by the total distance the ray has travelled; reflective
//! surfaces recurse until that distance passes a fixed limit.

mod camera;
mod illumination;
mod light;
mod plane;
mod procedural;
mod renderer;
mod sphere;
mod surface;
mod tracer;
mod world;

pub use camera::{sample_square, Camera};
pub use illumination::add_illumination;
pub use light::Light;
pub use plane::{FinitePlane, Plane, PlaneGeometry, TiledPlane, PLANE_Z_LIMIT};
pub use procedural::{shade, ProceduralPlane, ProceduralSphere, ShadedShape};
pub use renderer::{color_to_rgb, render, render_pixel, write_ppm, RenderConfig, MAX_DIST};
pub use sphere::Sphere;
pub use surface::{HitRecord, Intersection, Surface};
pub use tracer::ray_color;
pub use world::{build_surface, World};

/// Re-export the math types the renderer API is built on
pub use prism_math::{Color, Interval, Ray, Vec2, Vec3};
