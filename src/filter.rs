use tracing::debug;

use crate::color::{Rgb, distance_sq, luma};

/// Greedily drop colors that sit within `threshold` (squared distance) of a
/// color already kept.
///
/// The first color is always kept and each later one is compared against the
/// output built so far, not against the input, so the result depends on the
/// input order.
pub fn filter_similar(colors: &[Rgb], threshold: f32) -> Vec<Rgb> {
    let Some((&first, rest)) = colors.split_first() else {
        return Vec::new();
    };

    let mut kept = vec![first];
    for &c in rest {
        let too_close = kept.iter().any(|&f| (distance_sq(c, f) as f32) < threshold);
        if !too_close {
            kept.push(c);
        }
    }

    debug!(input = colors.len(), kept = kept.len(), threshold, "filtered similar colors");
    kept
}

/// Stable in-place sort, darkest first by BT.601 luma.
pub fn sort_by_brightness(colors: &mut [Rgb]) {
    colors.sort_by(|a, b| luma(*a).total_cmp(&luma(*b)));
}
