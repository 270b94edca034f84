use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::density::{DENSITIES, Density, SPLASH_SIZE};
use crate::drawable;
use crate::error::IconError;

/// Generate the full icon set from a source image into an Android res directory.
///
/// Writes, per density bucket, the legacy launcher icon (plus its byte-identical
/// round variant) and the adaptive foreground layer, then the splash logo and
/// the static background drawable. Existing files are overwritten.
///
/// Nothing is written if the source image fails to load.
pub fn generate(source_path: &Path, res_dir: &Path) -> Result<(), IconError> {
    println!("Opening source image: {}", source_path.display());
    let source = image::open(source_path).map_err(|e| IconError::SourceLoad {
        path: source_path.to_path_buf(),
        source: e,
    })?;

    for density in &DENSITIES {
        write_launcher_icons(&source, res_dir, density)?;
    }
    for density in &DENSITIES {
        write_foreground_layer(&source, res_dir, density)?;
    }
    write_splash_logo(&source, res_dir)?;
    drawable::write_background(res_dir)?;

    Ok(())
}

/// Write `ic_launcher.png` and its round variant for one density bucket.
///
/// The round icon is a filesystem copy of the plain icon, so the two files
/// are always byte-identical.
fn write_launcher_icons(
    source: &DynamicImage,
    res_dir: &Path,
    density: &Density,
) -> Result<(), IconError> {
    let size = density.launcher_px;
    let out_dir = ensure_dir(res_dir, density.dir)?;

    let resized = source.resize_exact(size, size, FilterType::Lanczos3);

    let plain = out_dir.join("ic_launcher.png");
    save_png(&resized, &plain)?;
    println!("Saved {} ({}x{})", plain.display(), size, size);

    let round = out_dir.join("ic_launcher_round.png");
    fs::copy(&plain, &round).map_err(|e| IconError::CopyImage {
        from: plain,
        to: round.clone(),
        source: e,
    })?;
    println!("Saved {} ({}x{})", round.display(), size, size);

    Ok(())
}

/// Write `ic_launcher_foreground.png` for one density bucket.
///
/// The source is scaled to 70% of the canvas and pasted centered on a fully
/// transparent background, keeping a full-bleed source inside the adaptive
/// icon's safe zone. Integer division may leave a 1-pixel asymmetry.
fn write_foreground_layer(
    source: &DynamicImage,
    res_dir: &Path,
    density: &Density,
) -> Result<(), IconError> {
    let size = density.foreground_px;
    let content_size = density.foreground_content_px();
    let out_dir = ensure_dir(res_dir, density.dir)?;

    let content = source
        .resize_exact(content_size, content_size, FilterType::Lanczos3)
        .to_rgba8();

    let mut canvas = RgbaImage::new(size, size);
    let offset = i64::from((size - content_size) / 2);
    // Pixel replace, not alpha blend: the content's own alpha is kept as-is
    imageops::replace(&mut canvas, &content, offset, offset);

    let path = out_dir.join("ic_launcher_foreground.png");
    canvas.save(&path).map_err(|e| IconError::SaveImage {
        path: path.clone(),
        source: e,
    })?;
    println!(
        "Saved {} ({}x{} [content: {}x{}])",
        path.display(),
        size,
        size,
        content_size,
        content_size
    );

    Ok(())
}

/// Write the 512x512 splash logo into the shared drawable directory.
fn write_splash_logo(source: &DynamicImage, res_dir: &Path) -> Result<(), IconError> {
    let out_dir = ensure_dir(res_dir, "drawable")?;

    let resized = source.resize_exact(SPLASH_SIZE, SPLASH_SIZE, FilterType::Lanczos3);

    let path = out_dir.join("splash_logo.png");
    save_png(&resized, &path)?;
    println!("Saved {} ({}x{})", path.display(), SPLASH_SIZE, SPLASH_SIZE);

    Ok(())
}

/// Create a subdirectory of the res root if missing and return its path.
fn ensure_dir(res_dir: &Path, name: &str) -> Result<PathBuf, IconError> {
    let dir = res_dir.join(name);
    fs::create_dir_all(&dir).map_err(|e| IconError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}

fn save_png(img: &DynamicImage, path: &Path) -> Result<(), IconError> {
    img.save(path).map_err(|e| IconError::SaveImage {
        path: path.to_path_buf(),
        source: e,
    })
}
