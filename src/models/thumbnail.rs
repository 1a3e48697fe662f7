use image::DynamicImage;

use crate::models::ImagePath;

/// A decoded, scaled bitmap paired with its source path.
///
/// Owned by the display surface once placed; the whole set is replaced
/// wholesale on the next refresh cycle, never diffed incrementally.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub source: ImagePath,
    pub image: DynamicImage,
}

impl Thumbnail {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn tile(&self) -> Tile {
        Tile {
            width: self.width(),
            height: self.height(),
        }
    }
}

/// The flow arranger's input unit: a fixed-size rectangle.
///
/// The arranger positions tiles but never owns the content behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub width: u32,
    pub height: u32,
}

impl Tile {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<&Thumbnail> for Tile {
    fn from(thumbnail: &Thumbnail) -> Self {
        thumbnail.tile()
    }
}
