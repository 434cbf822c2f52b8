// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod interval;
mod ray;
mod transform;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use transform::Basis;
pub use vector::Vec3Ext;

/// RGB intensity triple. Components are unbounded while tracing.
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_color_component_product() {
        let a = Color::new(0.5, 1.0, 2.0);
        let b = Color::new(2.0, 0.5, 0.25);
        assert_eq!(a * b, Color::new(1.0, 0.5, 0.5));
    }
}
