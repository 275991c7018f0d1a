use std::path::PathBuf;

use log::info;
use thiserror::Error;

/// Errors from fetching or decoding a background image.
///
/// None of these are fatal to the session: the scene keeps its previous (or
/// no) background and stays usable for shapes and text.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("image source is empty")]
    EmptySource,
    #[error("failed to read image source: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image has unusable dimensions {0}x{1}")]
    InvalidDimensions(u32, u32),
}

/// Where the background pixels come from. The host resolves whatever opaque
/// reference it was handed (a search-result URL, a picked file) down to one
/// of these before calling in.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// Decoded straight-alpha RGBA8 pixels at the image's natural size.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Fetch and decode an image source.
pub fn decode(source: &ImageSource) -> Result<DecodedImage, LoadError> {
    let bytes = match source {
        ImageSource::Path(path) => std::fs::read(path)?,
        ImageSource::Bytes(bytes) => bytes.clone(),
    };
    if bytes.is_empty() {
        return Err(LoadError::EmptySource);
    }

    let decoded = image::load_from_memory(&bytes)?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(LoadError::InvalidDimensions(width, height));
    }

    info!("🖼️ decoded background image {width}x{height}");
    Ok(DecodedImage {
        width,
        height,
        pixels: decoded.to_rgba8().into_raw(),
    })
}

/// Uniform cover-fit scale: the larger of the two axis ratios, so the scaled
/// image fully covers the frame with equality on at least one axis. Overflow
/// is clipped by the frame bounds, never letterboxed.
pub fn cover_scale(
    frame_width: u32,
    frame_height: u32,
    natural_width: u32,
    natural_height: u32,
) -> f32 {
    let scale_x = frame_width as f32 / natural_width as f32;
    let scale_y = frame_height as f32 / natural_height as f32;
    scale_x.max(scale_y)
}
