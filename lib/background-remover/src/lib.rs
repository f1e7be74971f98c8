pub mod remover;
pub mod whiteness;

pub use remover::{
    StripSummary, load_rgba, remove_white_background, save_png, strip_image, strip_in_place,
};
pub use whiteness::{WHITE_THRESHOLD, is_near_white, strip_pixel};

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}
