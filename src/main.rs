fn main() -> Result<(), Box<dyn std::error::Error>> {
    mandelbrot_explorer::render_once(800, 600, "output/mandelbrot.ppm")?;

    Ok(())
}
