use nalgebra::{Matrix3, Matrix4, Point2, Point3, Vector3, Vector4};

//=================================
// Transform Matrix Factory
//=================================

/// Builds the matrices a host hands to the shading stage as `modelview` and
/// `projection`. Right-handed, camera looking down -Z.
pub struct TransformFactory;

#[rustfmt::skip]
impl TransformFactory {
    /// Rotation around the X-axis.
    pub fn rotation_x(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,  -s,   0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation around the Y-axis.
    pub fn rotation_y(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
           -s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation around the Z-axis.
    pub fn rotation_z(angle_rad: f32) -> Matrix4<f32> {
        let c = angle_rad.cos();
        let s = angle_rad.sin();
        Matrix4::new(
            c,  -s,   0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Euler rotation in degrees, applied X first, then Y, then Z.
    pub fn rotation_euler_deg(degrees: &Vector3<f32>) -> Matrix4<f32> {
        Self::rotation_z(degrees.z.to_radians())
            * Self::rotation_y(degrees.y.to_radians())
            * Self::rotation_x(degrees.x.to_radians())
    }

    pub fn translation(translation: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new(
            1.0, 0.0, 0.0, translation.x,
            0.0, 1.0, 0.0, translation.y,
            0.0, 0.0, 1.0, translation.z,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn scaling_nonuniform(scale: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new(
            scale.x, 0.0,     0.0,     0.0,
            0.0,     scale.y, 0.0,     0.0,
            0.0,     0.0,     scale.z, 0.0,
            0.0,     0.0,     0.0,     1.0,
        )
    }

    /// Model matrix: scale, then rotate, then translate.
    pub fn model(
        position: &Vector3<f32>,
        rotation_deg: &Vector3<f32>,
        scale: &Vector3<f32>,
    ) -> Matrix4<f32> {
        Self::translation(position)
            * Self::rotation_euler_deg(rotation_deg)
            * Self::scaling_nonuniform(scale)
    }

    /// Look-at view matrix (world -> view space).
    pub fn view(eye: &Point3<f32>, target: &Point3<f32>, up: &Vector3<f32>) -> Matrix4<f32> {
        let z_axis = (eye - target).normalize();
        let x_axis = up.cross(&z_axis).normalize();
        let y_axis = z_axis.cross(&x_axis);

        let rotation = Matrix4::new(
            x_axis.x, x_axis.y, x_axis.z, 0.0,
            y_axis.x, y_axis.y, y_axis.z, 0.0,
            z_axis.x, z_axis.y, z_axis.z, 0.0,
            0.0,      0.0,      0.0,      1.0,
        );

        rotation * Self::translation(&-eye.coords)
    }

    /// Perspective projection mapping the view frustum to NDC [-1, 1].
    pub fn perspective(aspect_ratio: f32, fov_y_rad: f32, near: f32, far: f32) -> Matrix4<f32> {
        let f = 1.0 / (fov_y_rad / 2.0).tan();
        let nf = 1.0 / (near - far);

        Matrix4::new(
            f / aspect_ratio, 0.0, 0.0,               0.0,
            0.0,              f,   0.0,               0.0,
            0.0,              0.0, (far + near) * nf, 2.0 * far * near * nf,
            0.0,              0.0, -1.0,              0.0,
        )
    }

    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Matrix4<f32> {
        let rl = 1.0 / (right - left);
        let tb = 1.0 / (top - bottom);
        let nf = 1.0 / (near - far);

        Matrix4::new(
            2.0 * rl, 0.0,      0.0,      -(right + left) * rl,
            0.0,      2.0 * tb, 0.0,      -(top + bottom) * tb,
            0.0,      0.0,      2.0 * nf, (far + near) * nf,
            0.0,      0.0,      0.0,      1.0,
        )
    }

    /// Matrix from 16 values in row-major order, as written in config files.
    pub fn from_rows(values: &[f32; 16]) -> Matrix4<f32> {
        Matrix4::from_row_slice(values)
    }
}

//=================================
// Vector helpers
//=================================

/// Upper-left 3x3 block of a 4x4 transform. Directions go through this so
/// translation never reaches them.
#[inline]
pub fn linear_part(m: &Matrix4<f32>) -> Matrix3<f32> {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}

/// GLSL `reflect`: `i - 2 * dot(n, i) * n`. `n` must be normalized.
#[inline]
pub fn reflect(incident: &Vector3<f32>, normal: &Vector3<f32>) -> Vector3<f32> {
    incident - normal * (2.0 * normal.dot(incident))
}

/// Perspective division: Clip Space -> NDC.
/// Returns `None` when w is too close to zero to divide by.
#[inline]
pub fn apply_perspective_division(clip: &Vector4<f32>) -> Option<Point3<f32>> {
    let w = clip.w;
    if w.abs() > 1e-6 {
        Some(Point3::new(clip.x / w, clip.y / w, clip.z / w))
    } else {
        None
    }
}

/// Viewport transform. NDC +Y is up, screen +Y is down.
#[inline]
pub fn ndc_to_screen(ndc_x: f32, ndc_y: f32, width: f32, height: f32) -> Point2<f32> {
    Point2::new(
        (ndc_x + 1.0) * 0.5 * width,
        (1.0 - (ndc_y + 1.0) * 0.5) * height,
    )
}
