//! Getting pixels in: locating the current wallpaper and decoding images.

use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use image::DynamicImage;

use crate::color::Rgb;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::{Error, Result};

/// A decoded image flattened to row-major pixels.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl DecodedImage {
    pub fn from_image(img: &DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .into_raw()
            .chunks_exact(4)
            .map(|px| premultiply(px[0], px[1], px[2], px[3]))
            .collect();
        Self { width, height, pixels }
    }
}

/// Scale color by alpha so transparent areas sample as black instead of
/// whatever color the encoder left behind.
#[inline(always)]
fn premultiply(r: u8, g: u8, b: u8, a: u8) -> Rgb {
    if a == u8::MAX {
        return Rgb::new(r, g, b);
    }
    let scale = |v: u8| (v as u16 * a as u16 / 255) as u8;
    Rgb::new(scale(r), scale(g), scale(b))
}

/// Decode an in-memory image in any format the `image` crate recognises.
pub fn decode_bytes(input: &[u8]) -> image::ImageResult<DecodedImage> {
    let img = image::load_from_memory(input)?;
    Ok(DecodedImage::from_image(&img))
}

// ------------------------------------------------------------
// Filesystem collaborators (native only)
// ------------------------------------------------------------

/// Open and decode the image at `path`.
#[cfg(not(target_arch = "wasm32"))]
pub fn decode(path: impl AsRef<Path>) -> Result<DecodedImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(DecodedImage::from_image(&img))
}

/// Path of the wallpaper feh last set, read from `$HOME/.fehbg`.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_wallpaper_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").ok_or_else(|| Error::NotFound("HOME is not set".into()))?;
    locate_wallpaper(Path::new(&home).join(".fehbg"))
}

/// Read a feh record file and return the wallpaper path it names.
#[cfg(not(target_arch = "wasm32"))]
pub fn locate_wallpaper(record: impl AsRef<Path>) -> Result<PathBuf> {
    let record = record.as_ref();
    let contents = std::fs::read_to_string(record).map_err(|source| Error::Io {
        path: record.to_path_buf(),
        source,
    })?;
    let path = parse_fehbg(&contents)
        .ok_or_else(|| Error::NotFound(format!("no quoted path in {}", record.display())))?;
    tracing::debug!(record = %record.display(), wallpaper = %path.display(), "located wallpaper");
    Ok(path)
}

/// The text inside the outermost single quotes on the first line that has
/// any, e.g. `feh --bg-fill '/home/me/wall.png'`.
pub fn parse_fehbg(contents: &str) -> Option<PathBuf> {
    let re = regex::Regex::new(r"'(.*)'").ok()?;
    contents
        .lines()
        .find_map(|line| re.captures(line))
        .map(|caps| PathBuf::from(&caps[1]))
}
