use crate::{Error, Result, whiteness};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, Pixel, Rgba, RgbaImage};
use std::{path::Path, time::Instant};

const CHANNELS: usize = Rgba::<u8>::CHANNEL_COUNT as usize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct StripSummary {
    pub width: u32,
    pub height: u32,
    pub total_pixels: usize,

    // Includes white pixels that were already transparent
    pub stripped_pixels: usize,
}

/// Decode an image file and normalize it to RGBA. Pixels from sources
/// without an alpha channel get alpha 255.
///
/// The format is sniffed from the file contents, so the extension does not
/// matter.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = decode(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.into_rgba8())
}

fn decode(path: &Path) -> image::ImageResult<DynamicImage> {
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::IoError)?
        .decode()
}

/// Make every near-white pixel fully transparent, in place.
/// Returns how many pixels matched.
pub fn strip_in_place(image: &mut RgbaImage) -> usize {
    let mut stripped = 0;

    for pixel in image.pixels_mut() {
        if whiteness::is_near_white(pixel) {
            pixel[3] = 0;
            stripped += 1;
        }
    }

    stripped
}

/// Same transform as [`strip_in_place`], leaving `image` untouched.
pub fn strip_image(image: &RgbaImage) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    let raw: Vec<u8> = image
        .pixels()
        .flat_map(|pixel| whiteness::strip_pixel(*pixel).0)
        .collect();

    from_pixels(width, height, raw)
}

fn from_pixels(width: u32, height: u32, raw: Vec<u8>) -> Result<RgbaImage> {
    let expected = width as usize * height as usize;
    let actual = raw.len() / CHANNELS;
    if raw.len() != expected * CHANNELS {
        return Err(Error::PixelCountMismatch { expected, actual });
    }

    RgbaImage::from_raw(width, height, raw)
        .ok_or_else(|| Error::PixelCountMismatch { expected, actual })
}

/// Encode as PNG whatever the extension says, overwriting `path`.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Saved {}", path.display());
    Ok(())
}

/// Strip the white background of the image at `path` and write the result
/// back to the same file.
pub fn remove_white_background<P: AsRef<Path>>(path: P) -> Result<StripSummary> {
    let path = path.as_ref();
    let start = Instant::now();

    let mut image = load_rgba(path)?;
    let stripped_pixels = strip_in_place(&mut image);
    let (width, height) = image.dimensions();
    let total_pixels = width as usize * height as usize;

    log::debug!(
        "{stripped_pixels}/{total_pixels} pixels made transparent in {:?}",
        start.elapsed()
    );

    save_png(&image, path)?;

    Ok(StripSummary {
        width,
        height,
        total_pixels,
        stripped_pixels,
    })
}
