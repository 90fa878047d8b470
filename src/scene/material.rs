use nalgebra::Vector3;

/// Coefficients of the Phong reflection model.
///
/// Ambient and diffuse scale the working vertex color; specular scales
/// `specular_color` and is never tinted by the vertex color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongMaterial {
    pub ambient: f32,
    pub diffuse: f32,
    /// Intensity of the reflection.
    pub specular: f32,
    /// Surface shininess (specular exponent).
    pub shininess: f32,
    /// Color of the reflected light.
    pub specular_color: Vector3<f32>,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            ambient: 0.2,
            diffuse: 0.2,
            specular: 0.9,
            shininess: 2.0,
            specular_color: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl PhongMaterial {
    /// Pure ambient material: lit color equals the base color.
    pub fn unlit() -> Self {
        Self {
            ambient: 1.0,
            diffuse: 0.0,
            specular: 0.0,
            ..Self::default()
        }
    }
}
