//! PNG export of cave maps

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::cave::CaveMap;
use crate::error::CaveError;

/// Rock color
pub const WALL_COLOR: Rgb<u8> = Rgb([52, 46, 41]);
/// Floor color
pub const FLOOR_COLOR: Rgb<u8> = Rgb([196, 178, 142]);
/// Largest image export allows (100 megapixels)
pub const MAX_IMAGE_PIXELS: u64 = 100_000_000;

/// Render a cave to an image, each cell a `scale` x `scale` block.
pub fn render_cave_image(map: &CaveMap, scale: u32) -> Result<RgbImage, CaveError> {
    if scale == 0 {
        return Err(CaveError::InvalidScale(scale));
    }
    let scaled = |cells: usize| u32::try_from(cells).ok().and_then(|c| c.checked_mul(scale));
    let (img_width, img_height) = match (scaled(map.width()), scaled(map.height())) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err(CaveError::InvalidScale(scale)),
    };

    let total_pixels = img_width as u64 * img_height as u64;
    if total_pixels > MAX_IMAGE_PIXELS {
        return Err(CaveError::ImageTooLarge {
            width: img_width as u64,
            height: img_height as u64,
            max_pixels: MAX_IMAGE_PIXELS,
        });
    }

    let img = ImageBuffer::from_fn(img_width, img_height, |px, py| {
        let x = (px / scale) as usize;
        let y = (py / scale) as usize;
        if map.is_filled(x, y) {
            WALL_COLOR
        } else {
            FLOOR_COLOR
        }
    });

    Ok(img)
}

/// Export a cave as PNG. Returns the image size in pixels.
pub fn export_cave_image<P: AsRef<Path>>(
    map: &CaveMap,
    path: P,
    scale: u32,
) -> Result<(u32, u32), CaveError> {
    let img = render_cave_image(map, scale)?;
    img.save(path)?;
    Ok(img.dimensions())
}
