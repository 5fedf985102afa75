use palette::Srgb;

/// A single point in 8-bit RGB space.
pub type Rgb = Srgb<u8>;

/// Black, used to pad unfilled ANSI slots.
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Squared Euclidean distance between two colors. No square root is taken,
/// which keeps the value exact and is all that ordering comparisons need.
#[inline(always)]
pub fn distance_sq(a: Rgb, b: Rgb) -> u32 {
    let dr = a.red as i32 - b.red as i32;
    let dg = a.green as i32 - b.green as i32;
    let db = a.blue as i32 - b.blue as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// BT.601 luma in 0-255 space.
#[inline(always)]
pub fn luma(c: Rgb) -> f32 {
    0.299 * c.red as f32 + 0.587 * c.green as f32 + 0.114 * c.blue as f32
}

/// Clamp to the channel range, then truncate toward zero.
#[inline(always)]
pub(crate) fn channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// `#rrggbb`, lowercase and zero-padded.
pub fn to_hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric_and_exact() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 255, 255);
        assert_eq!(distance_sq(a, b), 3 * 255 * 255);
        assert_eq!(distance_sq(b, a), distance_sq(a, b));
        assert_eq!(distance_sq(a, a), 0);
    }

    #[test]
    fn luma_weights_green_heaviest() {
        assert!(luma(Rgb::new(0, 255, 0)) > luma(Rgb::new(255, 0, 0)));
        assert!(luma(Rgb::new(255, 0, 0)) > luma(Rgb::new(0, 0, 255)));
        assert_eq!(luma(BLACK), 0.0);
    }

    #[test]
    fn channel_clamps_instead_of_wrapping() {
        assert_eq!(channel(-4.0), 0);
        assert_eq!(channel(300.0), 255);
        assert_eq!(channel(76.5), 76);
    }

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(to_hex(Rgb::new(255, 10, 0)), "#ff0a00");
        assert_eq!(to_hex(BLACK), "#000000");
    }
}
