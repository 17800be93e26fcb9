use crate::core::actions::compute_escape::escape_iteration::{Escape, escape_iteration};
use crate::core::colour_mapping::sine_gradient::SineGradient;
use crate::core::data::colour::Colour;
use crate::core::data::escape_buffer::EscapeBuffer;
use crate::core::data::pixel_buffer::{PixelBuffer, set_row_pixel};
use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::PlaneMapping;

/// Fills one raster row: smoothed escape values into `escape_row`, colours
/// into `raster_row`. In-set pixels record the iteration cap exactly and
/// are painted with the black sentinel.
///
/// Shared by the serial and parallel passes so their output is identical
/// byte for byte.
pub(crate) fn fill_row(
    y: u32,
    mapping: &PlaneMapping,
    max_iterations: u32,
    gradient: &SineGradient,
    escape_row: &mut [f64],
    raster_row: &mut [u8],
) {
    for (x, escape_value) in escape_row.iter_mut().enumerate() {
        let c = mapping.complex_at(x as u32, y);

        match escape_iteration(c, max_iterations) {
            Escape::InSet => {
                *escape_value = f64::from(max_iterations);
                set_row_pixel(raster_row, x, Colour::BLACK);
            }
            Escape::Escaped(mu) => {
                *escape_value = mu;
                set_row_pixel(raster_row, x, gradient.colour_of(mu));
            }
        }
    }
}

/// Single-threaded escape pass. Reference implementation for the parallel
/// variant; also the sensible choice for tiny rasters.
pub fn compute_escape_serial(
    viewport: &Viewport,
    max_iterations: u32,
    gradient: &SineGradient,
    escape: &mut EscapeBuffer,
    raster: &mut PixelBuffer,
) {
    let mapping = PlaneMapping::new(viewport, escape.size());

    for (y, (escape_row, raster_row)) in escape.rows_mut().zip(raster.rows_mut()).enumerate() {
        fill_row(
            y as u32,
            &mapping,
            max_iterations,
            gradient,
            escape_row,
            raster_row,
        );
    }
}
