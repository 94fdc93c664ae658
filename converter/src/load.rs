use std::path::Path;

use anyhow::{Context, Result};

/// A decoded source image: tightly packed RGB24 plus dimensions.
pub struct SourceImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Load an image from disk as RGB24. Any alpha channel is dropped.
pub fn load_source(path: &Path) -> Result<SourceImage> {
    let img = image::open(path).with_context(|| format!("failed to load {}", path.display()))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(SourceImage {
        data: rgb.into_raw(),
        width,
        height,
    })
}
