use std::path::Path;

use crate::core::data::raster_size::RasterSize;
use crate::engine::engine::MandelbrotEngine;
use crate::storage::write_ppm::write_ppm;

/// Renders one frame of the default view and writes it out as a PPM.
///
/// The interactive loop is owned by the windowing layer; this controller is
/// the headless path for smoke-testing the whole pipeline from the command
/// line.
pub fn render_once(
    width: u32,
    height: u32,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = RasterSize::new(width, height)?;
    let mut engine = MandelbrotEngine::with_defaults(size);

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", width, height);
    println!("Max iterations: {}", engine.config().max_iterations());
    println!("Threads: {}", engine.config().threads());

    let duration = engine.compute()?;
    println!("Duration:   {:?}", duration);

    if let Some(parent) = filepath.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    write_ppm(engine.raster(), &filepath)?;
    println!("Saved to {}", filepath.as_ref().display());

    Ok(())
}
