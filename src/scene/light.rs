use nalgebra::Vector3;

/// The single light source of a draw call.
///
/// Only a direction is stored: the stage treats the light as directional
/// and normalizes the vector itself, so any non-zero magnitude is fine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Direction pointing from the surface towards the light, in view space.
    pub direction: Vector3<f32>,
}

impl Light {
    pub fn new(direction: Vector3<f32>) -> Self {
        Self { direction }
    }

    /// Unit direction towards the light. A zero vector yields NaN components.
    #[inline]
    pub fn direction_to_light(&self) -> Vector3<f32> {
        self.direction.normalize()
    }
}

impl Default for Light {
    /// Headlight along the view axis.
    fn default() -> Self {
        Self {
            direction: Vector3::new(0.0, 0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn direction_is_normalized_regardless_of_magnitude() {
        let light = Light::new(Vector3::new(0.0, 3.0, 4.0));
        assert_relative_eq!(light.direction_to_light(), Vector3::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn zero_direction_does_not_panic() {
        let dir = Light::new(Vector3::zeros()).direction_to_light();
        assert!(dir.iter().all(|c| c.is_nan()));
    }
}
