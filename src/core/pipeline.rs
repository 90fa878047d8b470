use crate::core::geometry::VertexInput;
use nalgebra::{Vector3, Vector4};

/// Per-vertex results handed to rasterization and the fragment stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    /// `projection * modelview * position`.
    pub clip_position: Vector4<f32>,
    pub point_size: f32,
    /// Final color; alpha is the draw call's opacity.
    pub color: Vector4<f32>,
    /// Kept for the fragment stage's interface. Nothing sets it.
    pub discard: bool,
    /// `modelview * position`.
    pub view_position: Vector4<f32>,
    /// Normal in view space, not normalized. Zero unless lighting is on.
    pub view_normal: Vector3<f32>,
}

/// The programmable vertex stage of the pipeline.
///
/// Implementations must be thread-safe (Send + Sync): a draw call invokes
/// `vertex` concurrently for many vertices against one shared shader, so
/// the shader may not carry mutable state between invocations.
pub trait VertexShader: Send + Sync {
    /// What one invocation produces for the next pipeline stage.
    type Output: Send;

    /// Shades a single vertex.
    ///
    /// Must be a pure function of `input` and the shader's own (immutable)
    /// configuration.
    fn vertex(&self, input: &VertexInput) -> Self::Output;
}
