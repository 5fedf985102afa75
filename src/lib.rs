//! Dominant-color palettes for wallpapers.
//!
//! Pixels are subsampled, clustered with a deterministic k-means in RGB
//! space, deduplicated and sorted by luma. From that palette two derived
//! palettes are built: a 16-color ANSI terminal set and a tone ramp of the
//! average color.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

pub mod color;
pub mod error;
pub mod filter;
pub mod generate;
pub mod kmeans;
pub mod pipeline;
pub mod source;

pub use color::{Rgb, to_hex};
pub use error::{Error, Result};
pub use filter::{filter_similar, sort_by_brightness};
pub use generate::{generate_ansi, generate_tones};
pub use kmeans::{cluster, sample};
pub use pipeline::{Extraction, PaletteOptions, extract};
pub use source::{DecodedImage, decode_bytes, parse_fehbg};
#[cfg(not(target_arch = "wasm32"))]
pub use source::{current_wallpaper_path, decode, locate_wallpaper};

fn hex_array(colors: &[Rgb]) -> Array {
    let out = Array::new();
    for &c in colors {
        out.push(&JsValue::from_str(&to_hex(c)));
    }
    out
}

/// Extract palettes from an encoded image (PNG, JPEG, ...).
///
/// Returns `{ centroids, filtered, ansi, tones }`, each an array of
/// `#rrggbb` strings.
#[wasm_bindgen]
pub fn extract_palette(
    input: Vec<u8>,
    n_colors: usize,
    iterations: usize,
    threshold: f32,
    brightness: f32,
    tones: usize,
) -> std::result::Result<Object, JsValue> {
    let img = decode_bytes(&input)
        .map_err(|e| JsValue::from_str(&format!("Unable to decode image: {e}")))?;

    let opts = PaletteOptions {
        clusters: n_colors,
        iterations,
        similarity_threshold: threshold,
        ansi_brightness: brightness,
        tone_count: tones,
        ..PaletteOptions::default()
    };
    let out = extract(&img.pixels, &opts);

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("centroids"), &hex_array(&out.centroids))?;
    Reflect::set(&result, &JsValue::from_str("filtered"), &hex_array(&out.filtered))?;
    Reflect::set(&result, &JsValue::from_str("ansi"), &hex_array(&out.ansi))?;
    Reflect::set(&result, &JsValue::from_str("tones"), &hex_array(&out.tones))?;

    Ok(result)
}
