//! Thumbnail decoding using the image crate.
//!
//! Scales each decoded image to fit within a target box while preserving
//! aspect ratio, never upscaling. Failures are per-item: a corrupt or
//! unsupported file contributes nothing to the batch and may succeed on a
//! later pass if it changes on disk.

use image::imageops::FilterType;
use image::GenericImageView;
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::models::{ImagePath, Thumbnail};

/// Default thumbnail target box in pixels.
pub const DEFAULT_THUMB_SIZE: (u32, u32) = (128, 128);

/// Decodes image files into thumbnails bounded by a target box.
#[derive(Debug, Clone, Copy)]
pub struct ThumbnailDecoder {
    target_width: u32,
    target_height: u32,
}

impl ThumbnailDecoder {
    pub fn new(target_width: u32, target_height: u32) -> Self {
        Self {
            target_width: target_width.max(1),
            target_height: target_height.max(1),
        }
    }

    pub fn target_size(&self) -> (u32, u32) {
        (self.target_width, self.target_height)
    }

    /// Decodes a batch of paths, preserving input order.
    ///
    /// Files that fail to decode are skipped; the batch never aborts.
    pub fn decode_batch(&self, paths: &[ImagePath]) -> Vec<Thumbnail> {
        paths
            .iter()
            .filter_map(|path| match self.decode_one(path) {
                Ok(thumbnail) => Some(thumbnail),
                Err(error) => {
                    debug!(path = ?path.path, %error, "Skipping undecodable image");
                    None
                }
            })
            .collect()
    }

    /// Decodes a single file into a thumbnail.
    pub fn decode_one(&self, path: &ImagePath) -> Result<Thumbnail, DecodeError> {
        let img = image::open(&path.path)?;
        let (src_width, src_height) = img.dimensions();
        if src_width == 0 || src_height == 0 {
            return Err(DecodeError::EmptyImage);
        }

        let (width, height) = fit_within(
            (src_width, src_height),
            (self.target_width, self.target_height),
        );

        trace!(
            path = ?path.path,
            src_width, src_height, width, height,
            "Decoded thumbnail"
        );

        // CatmullRom gives a good quality/speed balance for downscaling.
        let image = if (width, height) == (src_width, src_height) {
            img
        } else {
            img.resize_exact(width, height, FilterType::CatmullRom)
        };

        Ok(Thumbnail {
            source: path.clone(),
            image,
        })
    }
}

impl Default for ThumbnailDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_THUMB_SIZE.0, DEFAULT_THUMB_SIZE.1)
    }
}

/// Scales (width, height) to fit inside the target box, preserving aspect
/// ratio. A source already inside the box is returned unchanged (no
/// upscaling).
fn fit_within((width, height): (u32, u32), (max_width, max_height): (u32, u32)) -> (u32, u32) {
    let scale = (max_width as f64 / width as f64)
        .min(max_height as f64 / height as f64)
        .min(1.0);
    if scale >= 1.0 {
        return (width, height);
    }
    let scaled_w = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let scaled_h = ((height as f64 * scale).round() as u32).clamp(1, max_height);
    (scaled_w, scaled_h)
}
