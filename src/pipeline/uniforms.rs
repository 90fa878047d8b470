use crate::scene::light::Light;
use crate::scene::material::PhongMaterial;
use nalgebra::{Matrix4, Vector3};

/// How the base color of a vertex is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// No color source: black.
    #[default]
    Default,
    /// One color for the whole draw call (`object_color`).
    SingleColor,
    /// The vertex's own color.
    VertexColor,
}

impl ColorMode {
    /// Raw integer values of the `colormode` uniform.
    pub const RAW_SINGLE_COLOR: i32 = 1;
    pub const RAW_VERTEX_COLOR: i32 = 3;

    /// Maps a raw uniform value to a mode. Unknown values select `Default`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            Self::RAW_SINGLE_COLOR => ColorMode::SingleColor,
            Self::RAW_VERTEX_COLOR => ColorMode::VertexColor,
            _ => ColorMode::Default,
        }
    }

    pub fn to_raw(self) -> i32 {
        match self {
            ColorMode::Default => 0,
            ColorMode::SingleColor => Self::RAW_SINGLE_COLOR,
            ColorMode::VertexColor => Self::RAW_VERTEX_COLOR,
        }
    }

    /// Parses a mode name. Unknown names select `Default`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "single" | "single_color" | "object" => ColorMode::SingleColor,
            "vertex" | "vertex_color" => ColorMode::VertexColor,
            _ => ColorMode::Default,
        }
    }
}

/// Interpolation selector of the scalar colormap, kept as the raw uniform
/// value since no consumer assigns meaning to it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScalarsInterpolation(pub i32);

/// Scalar-field colormap settings.
///
/// Accepted and carried with the draw call so hosts can set them today;
/// the shading stage does not compute a colormap from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarColormap {
    pub use_scalars: bool,
    pub replace_mode: bool,
    pub min: f32,
    pub max: f32,
    pub min_color: Vector3<f32>,
    pub max_color: Vector3<f32>,
    pub min_threshold: f32,
    pub max_threshold: f32,
    pub interpolation: ScalarsInterpolation,
}

impl Default for ScalarColormap {
    fn default() -> Self {
        Self {
            use_scalars: false,
            replace_mode: false,
            min: 0.0,
            max: 1.0,
            min_color: Vector3::zeros(),
            max_color: Vector3::new(1.0, 1.0, 1.0),
            min_threshold: 0.0,
            max_threshold: 1.0,
            interpolation: ScalarsInterpolation::default(),
        }
    }
}

/// Everything constant across one draw call.
///
/// Every field is independently settable. A config is shared read-only by
/// all invocations of a draw call; change it only between draw calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawConfig {
    pub modelview: Matrix4<f32>,
    pub projection: Matrix4<f32>,
    /// Accepted but not applied by the stage.
    pub object_transform: Matrix4<f32>,

    pub color_mode: ColorMode,
    /// Overrides every color mode with the highlight color.
    pub highlight: bool,
    pub object_color: Vector3<f32>,
    pub scalars: ScalarColormap,

    pub point_size: f32,
    /// Read position, normal and color from the builtin source instead of
    /// the explicit attributes.
    pub use_builtin_source: bool,

    pub lighting: bool,
    pub material: PhongMaterial,
    pub light: Light,
    /// Alpha of the output color.
    pub opacity: f32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            modelview: Matrix4::identity(),
            projection: Matrix4::identity(),
            object_transform: Matrix4::identity(),
            color_mode: ColorMode::Default,
            highlight: false,
            object_color: Vector3::zeros(),
            scalars: ScalarColormap::default(),
            point_size: 1.0,
            use_builtin_source: false,
            lighting: false,
            material: PhongMaterial::default(),
            light: Light::default(),
            opacity: 1.0,
        }
    }
}
