use crate::core::geometry::VertexInput;
use crate::error::{Error, Result};
use nalgebra::{Point3, Vector2, Vector3};

/// A collection of vertices and indices representing a 3D object.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<VertexInput>,
    /// Triangle indices (3 per triangle). Empty for point clouds.
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<VertexInput>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// A single CCW triangle facing +Z, with red, green and blue corners.
    pub fn create_test_triangle() -> Self {
        let normal = Vector3::new(0.0, 0.0, 1.0);
        let vertices = vec![
            VertexInput::new(Point3::new(0.0, 0.5, 0.0), normal, Vector3::new(1.0, 0.0, 0.0))
                .with_texcoord(Vector2::new(0.5, 1.0)),
            VertexInput::new(Point3::new(-0.5, -0.5, 0.0), normal, Vector3::new(0.0, 1.0, 0.0))
                .with_texcoord(Vector2::new(0.0, 0.0)),
            VertexInput::new(Point3::new(0.5, -0.5, 0.0), normal, Vector3::new(0.0, 0.0, 1.0))
                .with_texcoord(Vector2::new(1.0, 0.0)),
        ];

        Self::new(vertices, vec![0, 1, 2])
    }

    /// Gives every triangle corner its own vertex, so that per-element data
    /// can be assigned without touching neighbouring elements.
    pub fn unindexed(&self) -> Self {
        let vertices: Vec<_> = self
            .indices
            .iter()
            .map(|&i| self.vertices[i as usize])
            .collect();
        let indices = (0..vertices.len() as u32).collect();
        Self::new(vertices, indices)
    }

    /// Colors every element of a non-indexed mesh with one color.
    ///
    /// Vertices are taken `nplex` at a time, in order, one color per group.
    pub fn apply_element_colors(&mut self, element_colors: &[Vector3<f32>], nplex: usize) -> Result<()> {
        let colors = multiplex_element_colors(element_colors, nplex);
        if colors.len() != self.vertices.len() {
            return Err(Error::InvalidData(format!(
                "{} element colors of plexitude {} cover {} vertices, mesh has {}",
                element_colors.len(),
                nplex,
                colors.len(),
                self.vertices.len()
            )));
        }
        for (vertex, color) in self.vertices.iter_mut().zip(colors) {
            vertex.set_color(color);
        }
        Ok(())
    }
}

/// Area-weighted vertex normals of a triangle list.
///
/// Each triangle adds its unnormalized face normal (edge cross product) to
/// its three corners. `None` marks vertices that no triangle touches or whose
/// faces cancel out.
pub fn average_vertex_normals(positions: &[Point3<f32>], indices: &[u32]) -> Vec<Option<Vector3<f32>>> {
    let mut sums = vec![Vector3::zeros(); positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let face_normal = (positions[b] - positions[a]).cross(&(positions[c] - positions[a]));
        sums[a] += face_normal;
        sums[b] += face_normal;
        sums[c] += face_normal;
    }
    sums.into_iter()
        .map(|n| (n.norm() > 1e-12).then(|| n.normalize()))
        .collect()
}

/// Repeats each per-element color `nplex` times, giving one color per vertex.
pub fn multiplex_element_colors(element_colors: &[Vector3<f32>], nplex: usize) -> Vec<Vector3<f32>> {
    element_colors
        .iter()
        .flat_map(|c| std::iter::repeat_n(*c, nplex))
        .collect()
}
