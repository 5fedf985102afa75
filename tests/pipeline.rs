use std::fs;

use image::{Rgb as Pixel, RgbImage};
use wall_palette::{Error, PaletteOptions, Rgb, decode, extract, locate_wallpaper, to_hex};

fn two_tone_png(dir: &std::path::Path) -> std::path::PathBuf {
    // Left half navy, right half orange, 40x10.
    let img = RgbImage::from_fn(40, 10, |x, _| {
        if x < 20 { Pixel([20, 30, 90]) } else { Pixel([240, 140, 20]) }
    });
    let path = dir.join("wall.png");
    img.save(&path).expect("failed to write test png");
    path
}

#[test]
fn decoded_png_feeds_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = two_tone_png(dir.path());

    let img = decode(&path).expect("png should decode");
    assert_eq!((img.width, img.height), (40, 10));
    assert_eq!(img.pixels.len(), 400);

    let out = extract(&img.pixels, &PaletteOptions::default());
    assert_eq!(out.centroids.len(), 32);
    assert_eq!(out.filtered, vec![Rgb::new(20, 30, 90), Rgb::new(240, 140, 20)]);
    assert_eq!(out.ansi.len(), 16);
    assert_eq!(out.tones.len(), 8);

    let ansi_hex: Vec<String> = out.ansi.iter().map(|&c| to_hex(c)).collect();
    assert_eq!(ansi_hex[0], "#141e5a");
    assert_eq!(ansi_hex[1], "#f08c14");
    assert!(ansi_hex[4..].iter().all(|h| h == "#000000"));
}

#[test]
fn pipeline_output_is_reproducible() {
    let img = RgbImage::from_fn(64, 48, |x, y| {
        Pixel([(x * 4) as u8, (y * 5) as u8, ((x + y) * 2) as u8])
    });
    let pixels: Vec<Rgb> = img.pixels().map(|p| Rgb::new(p[0], p[1], p[2])).collect();

    let opts = PaletteOptions::default();
    assert_eq!(extract(&pixels, &opts), extract(&pixels, &opts));
}

#[test]
fn missing_image_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = decode(dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "unexpected error: {err}");
}

#[test]
fn garbage_image_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    fs::write(&path, b"definitely not a png").unwrap();
    assert!(matches!(decode(&path), Err(Error::Decode { .. })));
}

#[test]
fn locator_reads_feh_record() {
    let dir = tempfile::tempdir().unwrap();
    let record = dir.path().join(".fehbg");
    fs::write(&record, "#!/bin/sh\nfeh --no-fehbg --bg-fill '/srv/walls/dunes.jpg' \n").unwrap();

    let path = locate_wallpaper(&record).unwrap();
    assert_eq!(path, std::path::PathBuf::from("/srv/walls/dunes.jpg"));
}

#[test]
fn locator_without_quoted_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let record = dir.path().join(".fehbg");
    fs::write(&record, "#!/bin/sh\n").unwrap();
    assert!(matches!(locate_wallpaper(&record), Err(Error::NotFound(_))));
}

#[test]
fn locator_without_record_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        locate_wallpaper(dir.path().join(".fehbg")),
        Err(Error::Io { .. })
    ));
}
