//! Toolkit-independent core of the Cutieview wallpaper browser.
//!
//! A refresh cycle scans a directory for image files, decodes them into
//! bounded thumbnails, packs the thumbnails into wrapped rows, and replaces
//! the displayed set wholesale. The surrounding application supplies the
//! window and persistence through [`pipeline::DisplaySurface`] and
//! [`settings::SettingsStore`]; [`scheduler::RefreshScheduler`] repeats the
//! cycle on a timer.

pub mod error;
pub mod layout;
pub mod models;
pub mod pipeline;
pub mod scanner;
pub mod scheduler;
pub mod settings;
pub mod thumbnails;

pub use error::DecodeError;
pub use layout::{FlowArranger, FlowLayout, PlacedTile};
pub use models::{ExtensionSet, ImagePath, RefreshConfig, Thumbnail, Tile};
pub use pipeline::{CompletedCycle, CycleReport, CycleSlot, DisplaySurface, RefreshPipeline};
pub use scanner::{scan, ScanRequest};
pub use scheduler::RefreshScheduler;
pub use settings::{MemorySettings, SettingsStore};
pub use thumbnails::ThumbnailDecoder;
