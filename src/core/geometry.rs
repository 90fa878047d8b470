use nalgebra::{Point3, Vector2, Vector3, Vector4};

/// Explicit per-vertex attributes, as supplied by the geometry buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAttributes {
    /// Position in object space.
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
    pub color: Vector3<f32>,
    /// Texture coordinates (UV).
    pub texcoord: Vector2<f32>,
    /// Scalar field value. Carried for colormapping; shading does not read it.
    pub scalar: f32,
}

/// The legacy fixed-function source of position, normal and color.
///
/// Position is already homogeneous and color carries an alpha channel that
/// the shading stage ignores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltinAttributes {
    pub position: Vector4<f32>,
    pub normal: Vector3<f32>,
    pub color: Vector4<f32>,
}

impl BuiltinAttributes {
    /// Builds a builtin record carrying the same data as the explicit attributes.
    pub fn mirror(attributes: &VertexAttributes) -> Self {
        Self {
            position: attributes.position.to_homogeneous(),
            normal: attributes.normal,
            color: Vector4::new(
                attributes.color.x,
                attributes.color.y,
                attributes.color.z,
                1.0,
            ),
        }
    }
}

/// Everything one shading invocation may read about its vertex.
///
/// Both sources are always present; `use_builtin_source` in the draw
/// configuration decides which one feeds position, normal and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexInput {
    pub attributes: VertexAttributes,
    pub builtin: BuiltinAttributes,
}

impl VertexInput {
    /// Creates a vertex whose builtin source mirrors the explicit attributes.
    pub fn new(position: Point3<f32>, normal: Vector3<f32>, color: Vector3<f32>) -> Self {
        let attributes = VertexAttributes {
            position,
            normal,
            color,
            texcoord: Vector2::zeros(),
            scalar: 0.0,
        };
        Self {
            attributes,
            builtin: BuiltinAttributes::mirror(&attributes),
        }
    }

    pub fn with_texcoord(mut self, texcoord: Vector2<f32>) -> Self {
        self.attributes.texcoord = texcoord;
        self
    }

    /// Sets the color on both sources.
    pub fn set_color(&mut self, color: Vector3<f32>) {
        self.attributes.color = color;
        self.builtin.color = Vector4::new(color.x, color.y, color.z, self.builtin.color.w);
    }

    /// Homogeneous position from the selected source.
    #[inline]
    pub fn position(&self, use_builtin: bool) -> Vector4<f32> {
        if use_builtin {
            self.builtin.position
        } else {
            self.attributes.position.to_homogeneous()
        }
    }

    #[inline]
    pub fn normal(&self, use_builtin: bool) -> Vector3<f32> {
        if use_builtin {
            self.builtin.normal
        } else {
            self.attributes.normal
        }
    }

    #[inline]
    pub fn color(&self, use_builtin: bool) -> Vector3<f32> {
        if use_builtin {
            self.builtin.color.xyz()
        } else {
            self.attributes.color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VertexInput {
        VertexInput::new(
            Point3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.2, 0.4, 0.6),
        )
    }

    #[test]
    fn mirrored_sources_agree() {
        let v = sample();
        assert_eq!(v.position(true), v.position(false));
        assert_eq!(v.normal(true), v.normal(false));
        assert_eq!(v.color(true), v.color(false));
        assert_eq!(v.position(false), Vector4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn sources_are_selected_independently() {
        let mut v = sample();
        v.builtin.color = Vector4::new(1.0, 0.0, 0.0, 0.3);
        v.builtin.position = Vector4::new(0.0, 0.0, 0.0, 2.0);
        assert_eq!(v.color(true), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(v.color(false), Vector3::new(0.2, 0.4, 0.6));
        assert_eq!(v.position(true).w, 2.0);
        assert_eq!(v.position(false).w, 1.0);
    }

    #[test]
    fn set_color_keeps_builtin_alpha() {
        let mut v = sample();
        v.builtin.color.w = 0.25;
        v.set_color(Vector3::new(0.9, 0.8, 0.7));
        assert_eq!(v.attributes.color, Vector3::new(0.9, 0.8, 0.7));
        assert_eq!(v.builtin.color, Vector4::new(0.9, 0.8, 0.7, 0.25));
    }
}
