use crate::core::color::to_rgb8;
use crate::error::Result;
use crate::pipeline::preview::PointCanvas;
use image::ImageBuffer;
use log::info;
use std::path::Path;

/// Writes the point-splat preview to an image file (format from the extension).
pub fn save_canvas_to_image<P: AsRef<Path>>(canvas: &PointCanvas, path: P) -> Result<()> {
    let mut img_buf = ImageBuffer::new(canvas.width as u32, canvas.height as u32);

    for (x, y, pixel) in img_buf.enumerate_pixels_mut() {
        let color = canvas.get_pixel(x as usize, y as usize);
        *pixel = image::Rgb(to_rgb8(&color));
    }

    img_buf.save(path.as_ref())?;
    info!("Preview saved to {}", path.as_ref().display());
    Ok(())
}
