use thiserror::Error;

/// Why a single file failed to become a thumbnail.
///
/// Batch decoding skips failed items; this type exists for callers that
/// decode one file at a time and want the reason.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read or decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("image has zero area")]
    EmptyImage,
}
