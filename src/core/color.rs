use nalgebra::{Vector3, Vector4};

/// Fixed overlay color for highlighted geometry (yellow).
pub const HIGHLIGHT_RGB: [f32; 3] = [1.0, 1.0, 0.0];

/// Fallback color when no color mode applies.
pub const BLACK_RGB: [f32; 3] = [0.0, 0.0, 0.0];

#[inline]
pub fn highlight() -> Vector3<f32> {
    Vector3::from(HIGHLIGHT_RGB)
}

#[inline]
pub fn black() -> Vector3<f32> {
    Vector3::from(BLACK_RGB)
}

/// Packs an RGB working color with opacity into the final RGBA output.
#[inline]
pub fn with_opacity(rgb: &Vector3<f32>, opacity: f32) -> Vector4<f32> {
    Vector4::new(rgb.x, rgb.y, rgb.z, opacity)
}

/// Blends a straight-alpha RGBA color over an opaque background.
pub fn blend_over(dst: &Vector3<f32>, src: &Vector4<f32>) -> Vector3<f32> {
    let a = src.w.clamp(0.0, 1.0);
    src.xyz() * a + dst * (1.0 - a)
}

/// Quantizes a linear color to 8 bits per channel.
/// Lit colors may leave [0, 1]; they are clamped here and nowhere earlier.
pub fn to_rgb8(color: &Vector3<f32>) -> [u8; 3] {
    [
        (color.x.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.y.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.z.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}
