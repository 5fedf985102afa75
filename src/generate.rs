use crate::color::{BLACK, Rgb, channel};
use crate::filter::sort_by_brightness;

/// Number of base colors in an ANSI palette; the bright half mirrors it.
pub const ANSI_BASE: usize = 8;

/// Build a 16-slot terminal palette from `filtered`.
///
/// `filtered` is sorted by brightness in place first. Up to eight base
/// colors are picked at evenly spread positions across that ordering, and
/// each gets a bright twin blended toward white by `brightness` (0..=1).
/// Slots `0..n` hold the bases and `n..2n` their bright twins.
///
/// With fewer than eight input colors the trailing slots stay black rather
/// than repeating earlier entries. An empty input gives an empty palette.
pub fn generate_ansi(filtered: &mut [Rgb], brightness: f32) -> Vec<Rgb> {
    if filtered.is_empty() {
        return Vec::new();
    }

    sort_by_brightness(filtered);

    let base_count = filtered.len().min(ANSI_BASE);
    let step = if base_count > 1 {
        (filtered.len() - 1) as f64 / (base_count - 1) as f64
    } else {
        0.0
    };

    let mut ansi = vec![BLACK; ANSI_BASE * 2];
    for i in 0..base_count {
        let idx = (step * i as f64 + 0.5) as usize;
        let base = filtered[idx];
        ansi[i] = base;
        ansi[i + base_count] = brighten(base, brightness);
    }
    ansi
}

/// Move each channel `factor` of the way toward 255.
pub fn brighten(c: Rgb, factor: f32) -> Rgb {
    let lift = |v: u8| channel(v as f32 + (255.0 - v as f32) * factor);
    Rgb::new(lift(c.red), lift(c.green), lift(c.blue))
}

/// Average color of `colors`, each channel truncated toward zero.
pub fn average(colors: &[Rgb]) -> Option<Rgb> {
    if colors.is_empty() {
        return None;
    }
    let n = colors.len() as u64;
    let (r, g, b) = colors.iter().fold((0u64, 0u64, 0u64), |(r, g, b), c| {
        (r + c.red as u64, g + c.green as u64, b + c.blue as u64)
    });
    Some(Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8))
}

/// `n` tones of the average color, from 30% of its value up to 100%.
///
/// A single tone sits at the dark end. `n == 0` or an empty input gives an
/// empty ramp.
pub fn generate_tones(colors: &[Rgb], n: usize) -> Vec<Rgb> {
    let Some(avg) = average(colors).filter(|_| n > 0) else {
        return Vec::new();
    };

    let (r, g, b) = (avg.red as f32, avg.green as f32, avg.blue as f32);
    (0..n)
        .map(|i| {
            let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
            let tone = |v: f32| channel(v * 0.3 + v * 0.7 * t);
            Rgb::new(tone(r), tone(g), tone(b))
        })
        .collect()
}
