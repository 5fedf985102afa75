use tracing::debug;

use crate::color::Rgb;
use crate::filter::filter_similar;
use crate::generate::{generate_ansi, generate_tones};
use crate::kmeans::{cluster, sample};

/// Knobs for [`extract`]. The defaults reproduce the stock wallpaper palette.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteOptions {
    /// Requested number of k-means clusters.
    pub clusters: usize,
    /// Fixed number of k-means passes.
    pub iterations: usize,
    /// Keep one pixel out of every `stride`.
    pub stride: usize,
    /// Squared RGB distance under which two centroids count as the same color.
    pub similarity_threshold: f32,
    /// How far bright ANSI colors move toward white (0..=1).
    pub ansi_brightness: f32,
    /// Length of the tone ramp.
    pub tone_count: usize,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            clusters: 32,
            iterations: 10,
            stride: 10,
            similarity_threshold: 1000.0,
            ansi_brightness: 0.6,
            tone_count: 8,
        }
    }
}

/// Every palette the pipeline produces, from raw centroids to derived ramps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extraction {
    pub centroids: Vec<Rgb>,
    /// Deduplicated centroids, sorted darkest first.
    pub filtered: Vec<Rgb>,
    /// 16 entries, or empty when there were no pixels.
    pub ansi: Vec<Rgb>,
    pub tones: Vec<Rgb>,
}

/// Sample, cluster and derive all palettes from a row-major pixel buffer.
pub fn extract(pixels: &[Rgb], opts: &PaletteOptions) -> Extraction {
    let samples = sample(pixels, opts.stride);
    let centroids = cluster(&samples, opts.clusters, opts.iterations);

    let mut filtered = filter_similar(&centroids, opts.similarity_threshold);
    let ansi = generate_ansi(&mut filtered, opts.ansi_brightness);
    let tones = generate_tones(&filtered, opts.tone_count);

    debug!(
        pixels = pixels.len(),
        centroids = centroids.len(),
        filtered = filtered.len(),
        "palette extracted"
    );

    Extraction {
        centroids,
        filtered,
        ansi,
        tones,
    }
}
