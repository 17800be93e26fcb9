use rayon::prelude::*;

use crate::core::colour_mapping::sine_gradient::SineGradient;
use crate::core::data::escape_buffer::EscapeBuffer;
use crate::core::data::pixel_buffer::{PixelBuffer, row_pixel, set_row_pixel};

/// Reapplies the gradient to every escaped pixel using the stored escape
/// values. Black in-set pixels are left untouched and the escape buffer is
/// never written, so this is safe to run any number of times between
/// computes — it is the cheap path for live colour tuning.
pub fn recolour(escape: &EscapeBuffer, raster: &mut PixelBuffer, gradient: &SineGradient) {
    let width = escape.size().width() as usize;

    escape
        .values()
        .par_chunks(width)
        .zip(raster.bytes_mut().par_chunks_mut(width * 3))
        .for_each(|(escape_row, raster_row)| {
            for (x, &mu) in escape_row.iter().enumerate() {
                if !row_pixel(raster_row, x).is_black() {
                    set_row_pixel(raster_row, x, gradient.colour_of(mu));
                }
            }
        });
}
