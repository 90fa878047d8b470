use crate::core::geometry::VertexInput;
use crate::core::pipeline::VertexShader;
use crate::scene::mesh::Mesh;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Shaded vertices of an indexed mesh, ready for primitive assembly.
#[derive(Debug, Clone)]
pub struct ShadedMesh<O> {
    pub vertices: Vec<O>,
    /// Triangle indices into `vertices`, copied from the source mesh.
    pub indices: Vec<u32>,
}

/// Runs the vertex stage over a batch of vertices.
///
/// Every invocation reads only its own input and the shader's immutable
/// configuration, so the batch is split across rayon's thread pool with no
/// synchronization. The output keeps the input order.
pub struct DrawCall;

impl DrawCall {
    pub fn execute<S: VertexShader>(shader: &S, vertices: &[VertexInput]) -> Vec<S::Output> {
        let start = Instant::now();
        let outputs: Vec<S::Output> = vertices.par_iter().map(|v| shader.vertex(v)).collect();
        debug!(
            "Shaded {} vertices in {:?}",
            outputs.len(),
            start.elapsed()
        );
        outputs
    }

    /// Shades each unique vertex of `mesh` once and keeps its index list.
    pub fn execute_indexed<S: VertexShader>(shader: &S, mesh: &Mesh) -> ShadedMesh<S::Output> {
        ShadedMesh {
            vertices: Self::execute(shader, &mesh.vertices),
            indices: mesh.indices.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::shaders::viewer::ViewerShader;
    use crate::pipeline::uniforms::{ColorMode, DrawConfig};
    use nalgebra::{Point3, Vector3};

    #[test]
    fn parallel_batch_matches_sequential_invocation() {
        let shader = ViewerShader::new(DrawConfig {
            color_mode: ColorMode::VertexColor,
            lighting: true,
            ..Default::default()
        });
        let vertices: Vec<VertexInput> = (0..2048)
            .map(|i| {
                let t = i as f32 / 2048.0;
                VertexInput::new(
                    Point3::new(t, 1.0 - t, t * t),
                    Vector3::new(t.sin(), t.cos(), 0.5),
                    Vector3::new(t, 0.5, 1.0 - t),
                )
            })
            .collect();

        let batch = DrawCall::execute(&shader, &vertices);
        let sequential: Vec<_> = vertices.iter().map(|v| shader.vertex(v)).collect();
        assert_eq!(batch, sequential);
    }

    #[test]
    fn empty_batch_yields_no_outputs() {
        let shader = ViewerShader::new(DrawConfig::default());
        assert!(DrawCall::execute(&shader, &[]).is_empty());
    }

    #[test]
    fn indexed_draw_keeps_indices() {
        let mesh = Mesh::create_test_triangle();
        let shader = ViewerShader::new(DrawConfig::default());
        let shaded = DrawCall::execute_indexed(&shader, &mesh);
        assert_eq!(shaded.vertices.len(), 3);
        assert_eq!(shaded.indices, vec![0, 1, 2]);
    }
}
