use crate::core::math::transform::reflect;
use crate::scene::light::Light;
use crate::scene::material::PhongMaterial;
use nalgebra::Vector3;

/// Eye direction used for specular highlights, fixed in view space.
/// The highlight does not follow the actual vertex-to-eye vector.
pub const EYE_DIRECTION: [f32; 3] = [0.0, 0.0, 1.0];

/// Diffuse and specular scalar terms for one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhongTerms {
    pub diffuse: f32,
    pub specular: f32,
}

/// Computes the diffuse and specular terms for a view-space normal.
///
/// Both the normal and the light direction are normalized here, whatever
/// their input magnitude. Dot products are clamped at zero before use.
pub fn phong_terms(
    view_normal: &Vector3<f32>,
    light: &Light,
    material: &PhongMaterial,
) -> PhongTerms {
    let n = view_normal.normalize();
    let l = light.direction_to_light();
    let eye = Vector3::from(EYE_DIRECTION);

    let r = reflect(&-l, &n);
    let specular = material.specular * r.dot(&eye).max(0.0).powf(material.shininess);
    let diffuse = material.diffuse * n.dot(&l).max(0.0);

    PhongTerms { diffuse, specular }
}

/// Lights `base` with the Phong model.
///
/// `base * ambient + base * diffuse + specular_color * specular`. The result
/// is not clamped and carries no opacity.
pub fn shade(
    base: &Vector3<f32>,
    view_normal: &Vector3<f32>,
    light: &Light,
    material: &PhongMaterial,
) -> Vector3<f32> {
    let terms = phong_terms(view_normal, light, material);
    base * material.ambient + base * terms.diffuse + material.specular_color * terms.specular
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn material(ambient: f32, diffuse: f32, specular: f32, shininess: f32) -> PhongMaterial {
        PhongMaterial {
            ambient,
            diffuse,
            specular,
            shininess,
            specular_color: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    #[test]
    fn head_on_light_gives_full_diffuse_and_specular() {
        let terms = phong_terms(
            &Vector3::new(0.0, 0.0, 2.0),
            &Light::new(Vector3::new(0.0, 0.0, 5.0)),
            &material(0.0, 0.8, 0.5, 16.0),
        );
        assert_relative_eq!(terms.diffuse, 0.8, epsilon = 1e-6);
        assert_relative_eq!(terms.specular, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn back_facing_light_leaves_only_ambient() {
        let base = Vector3::new(0.3, 0.6, 0.9);
        let lit = shade(
            &base,
            &Vector3::new(0.0, 0.0, 1.0),
            &Light::new(Vector3::new(0.0, 0.0, -1.0)),
            &material(0.25, 1.0, 1.0, 8.0),
        );
        assert_eq!(lit, base * 0.25);
    }

    #[test]
    fn specular_is_not_tinted_by_base_color() {
        let mut m = material(0.0, 0.0, 1.0, 1.0);
        m.specular_color = Vector3::new(0.0, 0.0, 1.0);
        let lit = shade(
            &Vector3::new(1.0, 0.0, 0.0),
            &Vector3::z(),
            &Light::new(Vector3::z()),
            &m,
        );
        assert_relative_eq!(lit, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn zero_shininess_gives_constant_specular() {
        // Light at 60 degrees off the normal: reflection still leans towards the eye.
        let light = Light::new(Vector3::new(0.0, 3f32.sqrt(), 1.0));
        let terms = phong_terms(&Vector3::z(), &light, &material(0.0, 0.0, 0.7, 0.0));
        assert_relative_eq!(terms.specular, 0.7, epsilon = 1e-6);
    }

    #[test]
    fn grazing_light_yields_zero_diffuse() {
        let terms = phong_terms(
            &Vector3::z(),
            &Light::new(Vector3::x()),
            &material(0.0, 1.0, 1.0, 4.0),
        );
        assert_relative_eq!(terms.diffuse, 0.0, epsilon = 1e-7);
    }

    #[test]
    fn zero_normal_falls_back_to_ambient() {
        let lit = shade(
            &Vector3::new(1.0, 1.0, 1.0),
            &Vector3::zeros(),
            &Light::default(),
            &material(0.2, 0.5, 0.5, 2.0),
        );
        // The NaN normal is swallowed by the clamping `max`.
        assert_eq!(lit, Vector3::new(0.2, 0.2, 0.2));
    }
}
