//! Fixed-iteration k-means in RGB space.
//!
//! Everything here is deterministic: seeds are taken at an even stride
//! through the samples, ties go to the lowest centroid index and there is no
//! convergence check. The same samples, `k` and iteration count always give
//! bit-identical centroids.

use tracing::debug;

use crate::color::{Rgb, distance_sq};

/// Take every `stride`-th pixel starting at index 0.
pub fn sample(pixels: &[Rgb], stride: usize) -> Vec<Rgb> {
    pixels.iter().step_by(stride.max(1)).copied().collect()
}

/// Cluster `samples` into `min(k, samples.len())` centroids.
///
/// Each pass assigns every sample to its nearest centroid (squared distance,
/// first index wins ties) and then moves each centroid to the truncated mean
/// of its members.
///
/// A centroid that receives no members in a pass keeps its previous value.
/// Such starved centroids are neither reseeded nor removed, so the result
/// may contain duplicates.
pub fn cluster(samples: &[Rgb], k: usize, iterations: usize) -> Vec<Rgb> {
    let k = k.min(samples.len());
    if k == 0 {
        return Vec::new();
    }

    let mut centroids = init_centroids(samples, k);
    debug!(samples = samples.len(), k, iterations, "running k-means");

    for pass in 0..iterations {
        let assignments = assign_points(samples, &centroids);
        let starved = update_centroids(samples, &assignments, &mut centroids);
        if starved > 0 {
            debug!(pass, starved, "centroids kept without members");
        }
    }

    centroids
}

// ------------------------------------------------------------
// Initialisation
// ------------------------------------------------------------

fn init_centroids(samples: &[Rgb], k: usize) -> Vec<Rgb> {
    let step = samples.len() / k;
    (0..k).map(|i| samples[i * step]).collect()
}

// ------------------------------------------------------------
// Assignment step
// ------------------------------------------------------------

#[inline(always)]
fn nearest(point: Rgb, centroids: &[Rgb]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = u32::MAX;
    for (idx, &c) in centroids.iter().enumerate() {
        let d = distance_sq(point, c);
        if d < best_dist {
            best_dist = d;
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(not(feature = "parallel"))]
fn assign_points(samples: &[Rgb], centroids: &[Rgb]) -> Vec<usize> {
    samples.iter().map(|&p| nearest(p, centroids)).collect()
}

// Per-sample work is independent and `collect` keeps input order, so this
// matches the sequential version exactly.
#[cfg(feature = "parallel")]
fn assign_points(samples: &[Rgb], centroids: &[Rgb]) -> Vec<usize> {
    use rayon::prelude::*;
    samples.par_iter().map(|&p| nearest(p, centroids)).collect()
}

// ------------------------------------------------------------
// Update step
// ------------------------------------------------------------

/// Returns the number of starved centroids.
fn update_centroids(samples: &[Rgb], assignments: &[usize], centroids: &mut [Rgb]) -> usize {
    let mut sums = vec![[0u64; 3]; centroids.len()];
    let mut counts = vec![0u64; centroids.len()];

    for (p, &idx) in samples.iter().zip(assignments) {
        sums[idx][0] += p.red as u64;
        sums[idx][1] += p.green as u64;
        sums[idx][2] += p.blue as u64;
        counts[idx] += 1;
    }

    let mut starved = 0;
    for (i, c) in centroids.iter_mut().enumerate() {
        let n = counts[i];
        if n == 0 {
            starved += 1;
            continue;
        }
        // A mean of u8 values never exceeds 255.
        c.red = (sums[i][0] / n) as u8;
        c.green = (sums[i][1] / n) as u8;
        c.blue = (sums[i][2] / n) as u8;
    }
    starved
}
