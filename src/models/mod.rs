pub mod image_path;
pub mod refresh_config;
pub mod thumbnail;

pub use image_path::*;
pub use refresh_config::*;
pub use thumbnail::*;
