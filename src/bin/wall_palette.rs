use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wall_palette::{Extraction, PaletteOptions, Rgb, current_wallpaper_path, decode, extract, to_hex};

/// Print the dominant colors, ANSI palette and tone ramp of an image.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image to read. Defaults to the wallpaper recorded in ~/.fehbg
    image: Option<PathBuf>,

    /// Number of k-means clusters
    #[arg(short = 'k', long)]
    clusters: Option<usize>,

    /// Number of k-means passes
    #[arg(long)]
    iterations: Option<usize>,

    /// Sample one pixel out of every STRIDE
    #[arg(long)]
    stride: Option<usize>,

    /// Squared RGB distance under which colors are merged
    #[arg(short, long)]
    threshold: Option<f32>,

    /// Blend factor toward white for bright ANSI colors
    #[arg(short, long)]
    brightness: Option<f32>,

    /// Number of tones in the ramp
    #[arg(long)]
    tones: Option<usize>,

    /// Print a single JSON object instead of text
    #[arg(long)]
    json: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> PaletteOptions {
        let d = PaletteOptions::default();
        PaletteOptions {
            clusters: self.clusters.unwrap_or(d.clusters),
            iterations: self.iterations.unwrap_or(d.iterations),
            stride: self.stride.unwrap_or(d.stride),
            similarity_threshold: self.threshold.unwrap_or(d.similarity_threshold),
            ansi_brightness: self.brightness.unwrap_or(d.ansi_brightness),
            tone_count: self.tones.unwrap_or(d.tone_count),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let path = match &args.image {
        Some(p) => p.clone(),
        None => current_wallpaper_path().context("could not determine current wallpaper path")?,
    };
    let img = decode(&path).context("error loading image")?;
    let out = extract(&img.pixels, &args.options());

    if args.json {
        let doc = json!({
            "image": path.display().to_string(),
            "width": img.width,
            "height": img.height,
            "centroids": hex(&out.centroids),
            "filtered": hex(&out.filtered),
            "ansi": hex(&out.ansi),
            "tones": hex(&out.tones),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Current wallpaper: {}", path.display());
    println!("Resolution: {}x{}", img.width, img.height);
    println!("Loaded image with {} pixels", img.pixels.len());
    print_text(&out);
    Ok(())
}

fn hex(colors: &[Rgb]) -> Vec<String> {
    colors.iter().map(|&c| to_hex(c)).collect()
}

fn print_hex(colors: &[Rgb]) {
    for &c in colors {
        println!("{}", to_hex(c));
    }
}

fn print_text(out: &Extraction) {
    print_hex(&out.centroids);
    println!("\nFiltered");
    print_hex(&out.filtered);
    println!("\nANSI Colors:");
    print_hex(&out.ansi);
    println!("\nTones Colors:");
    print_hex(&out.tones);
}
