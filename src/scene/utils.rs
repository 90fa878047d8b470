use crate::scene::mesh::Mesh;
use nalgebra::{Point3, Vector4};

/// Centers the mesh at the origin and scales it to fit inside [-0.9, 0.9].
///
/// Both vertex sources are moved, so builtin and attribute positions stay
/// in step. Returns the original center and the scale factor used.
pub fn normalize_and_center_mesh(mesh: &mut Mesh) -> (Point3<f32>, f32) {
    if mesh.vertices.is_empty() {
        return (Point3::origin(), 1.0);
    }

    let mut min_bound = Point3::new(f32::MAX, f32::MAX, f32::MAX);
    let mut max_bound = Point3::new(f32::MIN, f32::MIN, f32::MIN);
    for vertex in &mesh.vertices {
        let p = vertex.attributes.position;
        min_bound = min_bound.inf(&p);
        max_bound = max_bound.sup(&p);
    }

    let center = nalgebra::center(&min_bound, &max_bound);
    let extent = max_bound - min_bound;
    let max_dimension = extent.x.max(extent.y).max(extent.z);

    // Fit in [-1, 1] with a little padding
    let scale_factor = if max_dimension > 1e-6 {
        1.8 / max_dimension
    } else {
        1.0
    };

    for vertex in &mut mesh.vertices {
        let centered = vertex.attributes.position - center;
        let moved = Point3::from(centered * scale_factor);
        vertex.attributes.position = moved;
        vertex.builtin.position = Vector4::new(moved.x, moved.y, moved.z, 1.0);
    }

    (center, scale_factor)
}
