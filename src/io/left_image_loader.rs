extern crate image as image_rs;

use std::path::Path;
use image_rs::{ImageError,Rgb,RgbImage};

use crate::io::LoadError;

// the dataset stores 12-bit intensities in 16-bit PPM files, the gain is applied before reducing to 8 bit
pub fn load_left_image(file_path: &Path, gain: f32) -> Result<RgbImage, LoadError> {
    let image = image_rs::open(file_path).map_err(|e| match e {
        ImageError::IoError(ref io_error) if io_error.kind() == std::io::ErrorKind::NotFound => LoadError::NotFound(file_path.to_path_buf()),
        e => LoadError::malformed(file_path, e.to_string())
    })?;

    let source = image.to_rgb16();
    let mut target = RgbImage::new(source.width(), source.height());
    for (x, y, pixel) in source.enumerate_pixels() {
        let Rgb(channels) = *pixel;
        let scaled = channels.map(|c| ((c as f32*gain).clamp(0.0, u16::MAX as f32) as u32 >> 8) as u8);
        target.put_pixel(x, y, Rgb(scaled));
    }
    Ok(target)
}
