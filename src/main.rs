//! Android icon set generator.
//!
//! Resizes one source image into the legacy launcher icons, adaptive-icon
//! foreground layers, and splash logo an Android app's res/ tree expects,
//! and writes the static background drawable alongside them.

use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "iconset")]
#[command(about = "Generate an Android launcher icon set from a source image")]
struct Cli {
    /// Source image (any format the image crate decodes, e.g. PNG or JPEG)
    input: PathBuf,

    /// Android res directory to write into
    #[arg(short, long, default_value = "./res")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = iconset::generate(&cli.input, &cli.output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
