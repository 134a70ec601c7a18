//! Output: SVG files, PNG rasterization and JSON dumps.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use greek_key::{Canvas, KeyGeometry, Style, to_svg_document};

use super::settings::Settings;

/// Paths written for a base file name: `<file>.svg` and `<file>.png`.
pub fn output_paths(file: &str) -> (PathBuf, PathBuf) {
    (PathBuf::from(format!("{file}.svg")), PathBuf::from(format!("{file}.png")))
}

/// Generate the configured border and write or print it.
pub fn run(settings: &Settings) -> Result<()> {
    let geometry = settings.pattern.generate();

    if settings.json {
        println!("{}", serde_json::to_string_pretty(&geometry)?);
        return Ok(());
    }

    let svg = render_svg(&geometry, &settings.style)?;
    let (svg_path, png_path) = output_paths(&settings.file);

    fs::write(&svg_path, &svg).with_context(|| format!("failed to write {}", svg_path.display()))?;
    eprintln!("Wrote: {}", svg_path.display());

    if settings.png {
        let (w, h) = write_png(&svg, geometry.canvas, &png_path)?;
        eprintln!("Wrote: {} ({}x{})", png_path.display(), w, h);
    }

    Ok(())
}

pub fn render_svg(geometry: &KeyGeometry, style: &Style) -> Result<String> {
    Ok(to_svg_document(geometry, style)?)
}

/// Rasterize an SVG document at its natural size. The background stays
/// transparent.
pub fn write_png(svg: &str, canvas: Canvas, path: &Path) -> Result<(u32, u32)> {
    use resvg::usvg;
    use tiny_skia::Pixmap;

    let tree = usvg::Tree::from_str(svg, &usvg::Options::default()).context("failed to parse generated SVG")?;

    let width = canvas.width.ceil() as u32;
    let height = canvas.height.ceil() as u32;
    let mut pixmap = Pixmap::new(width, height)
        .with_context(|| format!("could not create a {}x{} pixmap", width, height))?;

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    pixmap
        .save_png(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::debug!(width, height, path = %path.display(), "rasterized PNG");
    Ok((width, height))
}
