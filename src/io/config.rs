use crate::core::math::transform::TransformFactory;
use crate::error::Result;
use crate::pipeline::uniforms::{ColorMode, DrawConfig, ScalarColormap, ScalarsInterpolation};
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::material::PhongMaterial;
use crate::scene::mesh::Mesh;
use log::{info, warn};
use nalgebra::{Matrix4, Point3, Vector3};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub draw: DrawSection,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub object: ObjectConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `color_mode` as written in a config file: a name or the raw uniform value.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ColorModeValue {
    Raw(i32),
    Name(String),
}

impl Default for ColorModeValue {
    fn default() -> Self {
        ColorModeValue::Name("default".to_string())
    }
}

impl ColorModeValue {
    /// Resolves to a mode; anything unrecognized becomes `Default`.
    pub fn resolve(&self) -> ColorMode {
        let mode = match self {
            ColorModeValue::Raw(raw) => ColorMode::from_raw(*raw),
            ColorModeValue::Name(name) => ColorMode::from_name(name),
        };
        let recognized = match self {
            ColorModeValue::Raw(raw) => mode.to_raw() == *raw,
            ColorModeValue::Name(name) => {
                mode != ColorMode::Default || name.eq_ignore_ascii_case("default")
            }
        };
        if !recognized {
            warn!("Unrecognized color mode {:?}, using default (black)", self);
        }
        mode
    }
}

#[derive(Debug, Deserialize)]
pub struct DrawSection {
    #[serde(default)]
    pub color_mode: ColorModeValue,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default)]
    pub object_color: [f32; 3],
    #[serde(default = "default_point_size")]
    pub point_size: f32,
    #[serde(default)]
    pub use_builtin_source: bool,
    #[serde(default)]
    pub lighting: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f32,

    // --- Matrices (row-major, 16 values) ---
    pub object_transform: Option<[f32; 16]>,
    /// Overrides the camera/object derived modelview.
    pub modelview: Option<[f32; 16]>,
    /// Overrides the camera projection.
    pub projection: Option<[f32; 16]>,

    #[serde(default)]
    pub material: MaterialConfig,
    #[serde(default)]
    pub light: LightConfig,
    #[serde(default)]
    pub scalars: ScalarsConfig,
}

impl Default for DrawSection {
    fn default() -> Self {
        Self {
            color_mode: ColorModeValue::default(),
            highlight: false,
            object_color: [0.0, 0.0, 0.0],
            point_size: default_point_size(),
            use_builtin_source: false,
            lighting: false,
            opacity: default_opacity(),
            object_transform: None,
            modelview: None,
            projection: None,
            material: MaterialConfig::default(),
            light: LightConfig::default(),
            scalars: ScalarsConfig::default(),
        }
    }
}

fn default_point_size() -> f32 {
    1.0
}
fn default_opacity() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct MaterialConfig {
    #[serde(default = "default_ambient")]
    pub ambient: f32,
    #[serde(default = "default_diffuse")]
    pub diffuse: f32,
    #[serde(default = "default_specular")]
    pub specular: f32,
    #[serde(default = "default_shininess")]
    pub shininess: f32,
    #[serde(default = "default_specular_color")]
    pub specular_color: [f32; 3],
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            ambient: default_ambient(),
            diffuse: default_diffuse(),
            specular: default_specular(),
            shininess: default_shininess(),
            specular_color: default_specular_color(),
        }
    }
}

// Defaults matching PhongMaterial::default()
fn default_ambient() -> f32 {
    0.2
}
fn default_diffuse() -> f32 {
    0.2
}
fn default_specular() -> f32 {
    0.9
}
fn default_shininess() -> f32 {
    2.0
}
fn default_specular_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

#[derive(Debug, Deserialize)]
pub struct LightConfig {
    #[serde(default = "default_light_direction")]
    pub direction: [f32; 3],
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: default_light_direction(),
        }
    }
}

fn default_light_direction() -> [f32; 3] {
    [0.0, 0.0, 1.0]
}

/// Scalar colormap settings. Carried into the draw config untouched.
#[derive(Debug, Deserialize)]
pub struct ScalarsConfig {
    #[serde(default)]
    pub use_scalars: bool,
    #[serde(default)]
    pub replace_mode: bool,
    #[serde(default)]
    pub min: f32,
    #[serde(default = "default_one")]
    pub max: f32,
    #[serde(default)]
    pub min_color: [f32; 3],
    #[serde(default = "default_specular_color")]
    pub max_color: [f32; 3],
    #[serde(default)]
    pub min_threshold: f32,
    #[serde(default = "default_one")]
    pub max_threshold: f32,
    #[serde(default)]
    pub interpolation: i32,
}

impl Default for ScalarsConfig {
    fn default() -> Self {
        Self {
            use_scalars: false,
            replace_mode: false,
            min: 0.0,
            max: default_one(),
            min_color: [0.0, 0.0, 0.0],
            max_color: default_specular_color(),
            min_threshold: 0.0,
            max_threshold: default_one(),
            interpolation: 0,
        }
    }
}

fn default_one() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_camera_position")]
    pub position: [f32; 3],
    #[serde(default)]
    pub target: [f32; 3],
    #[serde(default = "default_up")]
    pub up: [f32; 3],
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_projection")]
    pub projection: String,
    #[serde(default = "default_ortho_height")]
    pub ortho_height: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: default_camera_position(),
            target: [0.0, 0.0, 0.0],
            up: default_up(),
            fov: default_fov(),
            projection: default_projection(),
            ortho_height: default_ortho_height(),
            near: default_near(),
            far: default_far(),
        }
    }
}

fn default_camera_position() -> [f32; 3] {
    [0.0, 0.0, 3.0]
}
fn default_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}
fn default_fov() -> f32 {
    45.0
}
fn default_projection() -> String {
    "perspective".to_string()
}
fn default_ortho_height() -> f32 {
    2.5
}
fn default_near() -> f32 {
    0.1
}
fn default_far() -> f32 {
    100.0
}

#[derive(Debug, Deserialize)]
pub struct ObjectConfig {
    /// OBJ file to shade. A test triangle is used when absent.
    pub path: Option<String>,
    #[serde(default)]
    pub position: [f32; 3],
    /// Euler angles in degrees.
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
    /// Center the mesh and scale it into the unit cube before drawing.
    #[serde(default = "default_true")]
    pub normalize: bool,
    /// One RGB color per element, spread over the element's vertices.
    pub element_colors: Option<Vec<[f32; 3]>>,
    /// Vertices per element for `element_colors`.
    #[serde(default = "default_element_plexitude")]
    pub element_plexitude: usize,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            path: None,
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: default_scale(),
            normalize: true,
            element_colors: None,
            element_plexitude: default_element_plexitude(),
        }
    }
}

impl ObjectConfig {
    /// Applies `element_colors`, if any, to the mesh.
    ///
    /// An indexed mesh is unindexed first so each element owns its corners.
    pub fn apply_element_colors(&self, mesh: &mut Mesh) -> Result<()> {
        let Some(colors) = &self.element_colors else {
            return Ok(());
        };
        if !mesh.indices.is_empty() {
            *mesh = mesh.unindexed();
        }
        let colors: Vec<_> = colors.iter().copied().map(Vector3::from).collect();
        mesh.apply_element_colors(&colors, self.element_plexitude)?;
        info!(
            "Applied {} element colors (plexitude {})",
            colors.len(),
            self.element_plexitude
        );
        Ok(())
    }
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}
fn default_true() -> bool {
    true
}
fn default_element_plexitude() -> usize {
    3
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    /// Point-splat preview image path.
    pub image: Option<String>,
    #[serde(default = "default_background")]
    pub background: [f32; 3],
    /// Print every shaded vertex.
    #[serde(default)]
    pub dump: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            image: None,
            background: default_background(),
            dump: false,
        }
    }
}

fn default_width() -> usize {
    800
}
fn default_height() -> usize {
    600
}
fn default_background() -> [f32; 3] {
    [0.05, 0.05, 0.1]
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&content)?;
        info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.output.width as f32 / self.output.height.max(1) as f32
    }

    pub fn build_camera(&self) -> Camera {
        let c = &self.camera;
        let position = Point3::from(c.position);
        let target = Point3::from(c.target);
        let up = Vector3::from(c.up);
        match c.projection.as_str() {
            "orthographic" => Camera::new_orthographic(
                position,
                target,
                up,
                c.ortho_height,
                self.aspect_ratio(),
                c.near,
                c.far,
            ),
            other => {
                if other != "perspective" {
                    warn!("Unknown projection '{}', using perspective", other);
                }
                Camera::new_perspective(
                    position,
                    target,
                    up,
                    c.fov.to_radians(),
                    self.aspect_ratio(),
                    c.near,
                    c.far,
                )
            }
        }
    }

    /// Assembles the per-draw-call configuration.
    ///
    /// `modelview` is camera view times the object's model matrix, and
    /// `projection` comes from the camera, unless the `[draw]` section
    /// gives explicit matrices.
    pub fn draw_config(&self) -> DrawConfig {
        let d = &self.draw;
        let camera = self.build_camera();
        let model = TransformFactory::model(
            &Vector3::from(self.object.position),
            &Vector3::from(self.object.rotation),
            &Vector3::from(self.object.scale),
        );

        let modelview = d
            .modelview
            .map(|m| TransformFactory::from_rows(&m))
            .unwrap_or_else(|| camera.modelview(&model));
        let projection = d
            .projection
            .map(|m| TransformFactory::from_rows(&m))
            .unwrap_or_else(|| camera.projection_matrix());
        let object_transform = d
            .object_transform
            .map(|m| TransformFactory::from_rows(&m))
            .unwrap_or_else(Matrix4::identity);

        let s = &d.scalars;
        DrawConfig {
            modelview,
            projection,
            object_transform,
            color_mode: d.color_mode.resolve(),
            highlight: d.highlight,
            object_color: Vector3::from(d.object_color),
            scalars: ScalarColormap {
                use_scalars: s.use_scalars,
                replace_mode: s.replace_mode,
                min: s.min,
                max: s.max,
                min_color: Vector3::from(s.min_color),
                max_color: Vector3::from(s.max_color),
                min_threshold: s.min_threshold,
                max_threshold: s.max_threshold,
                interpolation: ScalarsInterpolation(s.interpolation),
            },
            point_size: d.point_size,
            use_builtin_source: d.use_builtin_source,
            lighting: d.lighting,
            material: PhongMaterial {
                ambient: d.material.ambient,
                diffuse: d.material.diffuse,
                specular: d.material.specular,
                shininess: d.material.shininess,
                specular_color: Vector3::from(d.material.specular_color),
            },
            light: Light::new(Vector3::from(d.light.direction)),
            opacity: d.opacity,
        }
    }
}
