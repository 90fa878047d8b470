use crate::core::color;
use crate::core::geometry::VertexInput;
use crate::core::math::transform::linear_part;
use crate::core::pipeline::{VertexOutput, VertexShader};
use crate::pipeline::lighting;
use crate::pipeline::uniforms::{ColorMode, DrawConfig};
use nalgebra::{Matrix3, Vector3};

/// The geometry viewer's vertex shader.
///
/// Runs, in order: highlight overlay / color mode resolution, optional Phong
/// lighting, then output assembly. Holds one immutable [`DrawConfig`], so a
/// single instance serves a whole draw call from any number of threads.
#[derive(Debug, Clone)]
pub struct ViewerShader {
    config: DrawConfig,
    /// Upper-left 3x3 of `modelview`, cached per draw call.
    normal_matrix: Matrix3<f32>,
}

impl ViewerShader {
    pub fn new(config: DrawConfig) -> Self {
        Self {
            normal_matrix: linear_part(&config.modelview),
            config,
        }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Working color before lighting.
    ///
    /// Highlight is checked first and wins over every color mode.
    pub fn base_color(&self, input: &VertexInput) -> Vector3<f32> {
        if self.config.highlight {
            return color::highlight();
        }
        match self.config.color_mode {
            ColorMode::SingleColor => self.config.object_color,
            ColorMode::VertexColor => input.color(self.config.use_builtin_source),
            ColorMode::Default => color::black(),
        }
    }

    /// Source normal carried into view space. Not normalized.
    #[inline]
    pub fn view_normal(&self, input: &VertexInput) -> Vector3<f32> {
        self.normal_matrix * input.normal(self.config.use_builtin_source)
    }
}

impl VertexShader for ViewerShader {
    type Output = VertexOutput;

    fn vertex(&self, input: &VertexInput) -> VertexOutput {
        let cfg = &self.config;

        // 1. Color mode / highlight
        let mut working = self.base_color(input);

        // 2. Lighting
        let mut view_normal = Vector3::zeros();
        if cfg.lighting {
            view_normal = self.view_normal(input);
            working = lighting::shade(&working, &view_normal, &cfg.light, &cfg.material);
        }

        // 3. Transform
        let position = input.position(cfg.use_builtin_source);
        let view_position = cfg.modelview * position;
        let clip_position = cfg.projection * view_position;

        VertexOutput {
            clip_position,
            point_size: cfg.point_size,
            color: color::with_opacity(&working, cfg.opacity),
            discard: false,
            view_position,
            view_normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::transform::TransformFactory;
    use crate::scene::light::Light;
    use crate::scene::material::PhongMaterial;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix4, Point3, Vector4};

    fn vertex() -> VertexInput {
        VertexInput::new(
            Point3::new(0.5, -0.25, 1.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.2, 0.4, 0.6),
        )
    }

    #[test]
    fn highlight_beats_every_color_mode() {
        for mode in [ColorMode::Default, ColorMode::SingleColor, ColorMode::VertexColor] {
            let shader = ViewerShader::new(DrawConfig {
                color_mode: mode,
                highlight: true,
                object_color: Vector3::new(0.1, 0.9, 0.3),
                ..Default::default()
            });
            let out = shader.vertex(&vertex());
            assert_eq!(out.color.xyz(), Vector3::new(1.0, 1.0, 0.0));
        }
    }

    #[test]
    fn single_color_uses_object_color() {
        let shader = ViewerShader::new(DrawConfig {
            color_mode: ColorMode::SingleColor,
            object_color: Vector3::new(0.7, 0.1, 0.5),
            opacity: 0.8,
            ..Default::default()
        });
        let out = shader.vertex(&vertex());
        assert_eq!(out.color, Vector4::new(0.7, 0.1, 0.5, 0.8));
    }

    #[test]
    fn vertex_color_follows_selected_source() {
        let mut input = vertex();
        input.builtin.color = Vector4::new(0.9, 0.0, 0.0, 1.0);

        let attr = ViewerShader::new(DrawConfig {
            color_mode: ColorMode::VertexColor,
            ..Default::default()
        });
        assert_eq!(attr.base_color(&input), Vector3::new(0.2, 0.4, 0.6));

        let builtin = ViewerShader::new(DrawConfig {
            color_mode: ColorMode::VertexColor,
            use_builtin_source: true,
            ..Default::default()
        });
        assert_eq!(builtin.base_color(&input), Vector3::new(0.9, 0.0, 0.0));
    }

    #[test]
    fn default_mode_is_black() {
        let shader = ViewerShader::new(DrawConfig::default());
        assert_eq!(shader.vertex(&vertex()).color, Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn lighting_modulates_working_color() {
        let shader = ViewerShader::new(DrawConfig {
            color_mode: ColorMode::SingleColor,
            object_color: Vector3::new(1.0, 0.5, 0.0),
            lighting: true,
            material: PhongMaterial {
                ambient: 0.1,
                diffuse: 0.5,
                specular: 0.0,
                shininess: 1.0,
                specular_color: Vector3::new(1.0, 1.0, 1.0),
            },
            light: Light::new(Vector3::new(0.0, 0.0, 3.0)),
            ..Default::default()
        });
        let out = shader.vertex(&vertex());
        assert_relative_eq!(out.color.xyz(), Vector3::new(0.6, 0.3, 0.0), epsilon = 1e-6);
        assert_relative_eq!(out.view_normal, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn lighting_normal_follows_selected_source() {
        let mut input = vertex();
        input.builtin.normal = Vector3::new(1.0, 0.0, 0.0);
        let config = DrawConfig {
            color_mode: ColorMode::SingleColor,
            object_color: Vector3::new(0.5, 0.5, 0.5),
            lighting: true,
            ..Default::default()
        };

        let attr = ViewerShader::new(config).vertex(&input);
        let builtin = ViewerShader::new(DrawConfig {
            use_builtin_source: true,
            ..config
        })
        .vertex(&input);

        assert_ne!(attr.color.xyz(), builtin.color.xyz());
        // Perpendicular to the default light: no diffuse, reflection points away from the eye.
        let ambient = config.material.ambient;
        assert_eq!(builtin.color.xyz(), Vector3::new(0.5, 0.5, 0.5) * ambient);
        assert_eq!(builtin.view_normal, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(attr.view_normal, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn normals_ignore_modelview_translation() {
        let modelview = TransformFactory::translation(&Vector3::new(10.0, 20.0, 30.0))
            * TransformFactory::rotation_y(std::f32::consts::FRAC_PI_2);
        let shader = ViewerShader::new(DrawConfig {
            modelview,
            lighting: true,
            ..Default::default()
        });
        let n = shader.view_normal(&vertex());
        assert_relative_eq!(n, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn view_normal_stays_zero_without_lighting() {
        let shader = ViewerShader::new(DrawConfig::default());
        assert_eq!(shader.vertex(&vertex()).view_normal, Vector3::zeros());
    }

    #[test]
    fn clip_position_is_projection_times_modelview() {
        let modelview = TransformFactory::translation(&Vector3::new(0.0, 0.0, -4.0));
        let projection = TransformFactory::perspective(1.0, std::f32::consts::FRAC_PI_2, 0.1, 10.0);
        let shader = ViewerShader::new(DrawConfig {
            modelview,
            projection,
            ..Default::default()
        });
        let out = shader.vertex(&vertex());
        let p = Vector4::new(0.5, -0.25, 1.0, 1.0);
        assert_relative_eq!(out.view_position, modelview * p);
        assert_relative_eq!(out.clip_position, projection * modelview * p, epsilon = 1e-5);
        assert_relative_eq!(out.clip_position.w, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn builtin_position_is_used_as_given() {
        let mut input = vertex();
        input.builtin.position = Vector4::new(2.0, 4.0, 6.0, 2.0);
        let shader = ViewerShader::new(DrawConfig {
            use_builtin_source: true,
            ..Default::default()
        });
        assert_eq!(shader.vertex(&input).clip_position, Vector4::new(2.0, 4.0, 6.0, 2.0));
    }

    #[test]
    fn point_size_and_discard_are_passed_through() {
        let shader = ViewerShader::new(DrawConfig {
            point_size: 250.0,
            ..Default::default()
        });
        let out = shader.vertex(&vertex());
        assert_eq!(out.point_size, 250.0);
        assert!(!out.discard);
    }

    #[test]
    fn object_transform_is_not_applied() {
        let input = vertex();
        let plain = ViewerShader::new(DrawConfig::default()).vertex(&input);
        let transformed = ViewerShader::new(DrawConfig {
            object_transform: Matrix4::new_scaling(3.0),
            ..Default::default()
        })
        .vertex(&input);
        assert_eq!(plain, transformed);
    }
}
