//! Planar surfaces: infinite, finite (rectangular) and tiled planes.

use crate::surface::{Intersection, Surface};
use crate::Color;
use prism_core::{Material, ObjectId, PlaneDesc};
use prism_math::{Basis, Interval, Ray, Vec2, Vec3, Vec3Ext};

/// Planar hits with a world z above this are discarded. This keeps floor
/// and wall planes from showing up between the eye and the view plane.
pub const PLANE_Z_LIMIT: f32 = 0.01;

/// The infinite plane shared by every planar surface type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneGeometry {
    normal: Vec3,
    point: Vec3,
    /// N·P, cached
    offset: f32,
}

impl PlaneGeometry {
    /// The normal is normalized here; a zero normal is logged and kept.
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.unit_or_warn();
        Self {
            normal,
            point,
            offset: normal.dot(point),
        }
    }

    pub fn from_desc(desc: &PlaneDesc) -> Self {
        Self::new(desc.normal, desc.point)
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn hit(&self, ray: &Ray) -> Option<Intersection> {
        let denom = self.normal.dot(ray.direction());
        if denom == 0.0 {
            return None;
        }

        let t = (self.offset - self.normal.dot(ray.origin())) / denom;
        if !Interval::FORWARD.surrounds(t) {
            return None;
        }

        let hit = Intersection::at(ray, t, self.normal);
        if hit.p.z > PLANE_Z_LIMIT {
            return None;
        }
        Some(hit)
    }
}

/// An infinite plane.
pub struct Plane {
    id: ObjectId,
    geometry: PlaneGeometry,
    material: Material,
}

impl Plane {
    pub fn new(id: ObjectId, geometry: PlaneGeometry, material: Material) -> Self {
        Self {
            id,
            geometry,
            material,
        }
    }
}

impl Surface for Plane {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn type_name(&self) -> &'static str {
        "plane"
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn hit(&self, ray: &Ray) -> Option<Intersection> {
        self.geometry.hit(ray)
    }
}

/// A plane with a local 2D frame anchored at its point.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlaneFrame {
    geometry: PlaneGeometry,
    basis: Basis,
}

impl PlaneFrame {
    fn new(geometry: PlaneGeometry, x_dir: Vec3) -> Self {
        Self {
            basis: Basis::from_normal_and_x(geometry.normal(), x_dir),
            geometry,
        }
    }

    /// Local (x, y) coordinates of a point on the plane.
    fn local(&self, p: Vec3) -> Vec2 {
        self.basis.to_local(p - self.geometry.point()).truncate()
    }
}

/// A rectangle: `[0, size.x] x [0, size.y]` in the plane's local frame.
pub struct FinitePlane {
    id: ObjectId,
    frame: PlaneFrame,
    size: Vec2,
    material: Material,
}

impl FinitePlane {
    pub fn new(
        id: ObjectId,
        geometry: PlaneGeometry,
        x_dir: Vec3,
        size: Vec2,
        material: Material,
    ) -> Self {
        Self {
            id,
            frame: PlaneFrame::new(geometry, x_dir),
            size,
            material,
        }
    }
}

impl Surface for FinitePlane {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn type_name(&self) -> &'static str {
        "finite plane"
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn hit(&self, ray: &Ray) -> Option<Intersection> {
        let hit = self.frame.geometry.hit(ray)?;

        let local = self.frame.local(hit.p);
        let inside = Interval::new(0.0, self.size.x).contains(local.x)
            && Interval::new(0.0, self.size.y).contains(local.y);
        inside.then_some(hit)
    }
}

/// An infinite plane checkered with two materials.
///
/// Tiles are `size` large in the local frame. A tile whose index sum is odd
/// uses the plane's own material, an even one the background.
pub struct TiledPlane {
    id: ObjectId,
    frame: PlaneFrame,
    size: Vec2,
    material: Material,
    background: Material,
}

impl TiledPlane {
    pub fn new(
        id: ObjectId,
        geometry: PlaneGeometry,
        x_dir: Vec3,
        size: Vec2,
        material: Material,
        background: Material,
    ) -> Self {
        Self {
            id,
            frame: PlaneFrame::new(geometry, x_dir),
            size,
            material,
            background,
        }
    }

    /// Material of the tile containing `p`.
    pub fn tile_material(&self, p: Vec3) -> &Material {
        let tile = (self.frame.local(p) / self.size).floor();
        let parity = (tile.x as i64 + tile.y as i64).rem_euclid(2);
        if parity == 1 {
            &self.material
        } else {
            &self.background
        }
    }
}

impl Surface for TiledPlane {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn type_name(&self) -> &'static str {
        "tiled plane"
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn hit(&self, ray: &Ray) -> Option<Intersection> {
        self.frame.geometry.hit(ray)
    }

    fn ambient(&self, p: Vec3) -> Color {
        self.tile_material(p).ambient
    }

    fn diffuse(&self, p: Vec3) -> Color {
        self.tile_material(p).diffuse
    }

    fn specular(&self, p: Vec3) -> Color {
        self.tile_material(p).specular
    }
}
