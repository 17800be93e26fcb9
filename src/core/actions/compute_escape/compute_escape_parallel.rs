use std::error::Error;
use std::fmt;

use rayon::prelude::*;

use crate::core::actions::compute_escape::compute_escape_serial::fill_row;
use crate::core::colour_mapping::sine_gradient::SineGradient;
use crate::core::data::escape_buffer::EscapeBuffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::util::plane_mapping::PlaneMapping;

#[derive(Debug)]
pub enum ComputeEscapeParallelError {
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for ComputeEscapeParallelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadPool(err) => write!(f, "thread pool error: {}", err),
        }
    }
}

impl Error for ComputeEscapeParallelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ThreadPool(err) => Some(err),
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for ComputeEscapeParallelError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

/// Parallel escape pass over `num_threads` workers.
///
/// Rows are distributed by rayon's work stealing, which keeps workers busy
/// even though per-pixel cost varies sharply across the set boundary. Row
/// slices of the two buffers are disjoint, so the workers write without any
/// locking; the pass returns only after every row is complete.
pub fn compute_escape_parallel(
    viewport: &Viewport,
    max_iterations: u32,
    num_threads: usize,
    gradient: &SineGradient,
    escape: &mut EscapeBuffer,
    raster: &mut PixelBuffer,
) -> Result<(), ComputeEscapeParallelError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()?;

    let size = escape.size();
    let mapping = PlaneMapping::new(viewport, size);
    let width = size.width() as usize;

    pool.install(|| {
        escape
            .values_mut()
            .par_chunks_mut(width)
            .zip(raster.bytes_mut().par_chunks_mut(width * 3))
            .enumerate()
            .for_each(|(y, (escape_row, raster_row))| {
                fill_row(
                    y as u32,
                    &mapping,
                    max_iterations,
                    gradient,
                    escape_row,
                    raster_row,
                );
            });
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::compute_escape::compute_escape_serial::compute_escape_serial;
    use crate::core::data::raster_size::RasterSize;

    fn run_both(num_threads: usize) -> ((EscapeBuffer, PixelBuffer), (EscapeBuffer, PixelBuffer)) {
        let size = RasterSize::new(64, 48).unwrap();
        let viewport = Viewport::default();
        let gradient = SineGradient::default();
        let max_iterations = 96;

        let mut serial_escape = EscapeBuffer::new(size);
        let mut serial_raster = PixelBuffer::new(size);
        compute_escape_serial(
            &viewport,
            max_iterations,
            &gradient,
            &mut serial_escape,
            &mut serial_raster,
        );

        let mut parallel_escape = EscapeBuffer::new(size);
        let mut parallel_raster = PixelBuffer::new(size);
        compute_escape_parallel(
            &viewport,
            max_iterations,
            num_threads,
            &gradient,
            &mut parallel_escape,
            &mut parallel_raster,
        )
        .unwrap();

        (
            (serial_escape, serial_raster),
            (parallel_escape, parallel_raster),
        )
    }

    #[test]
    fn test_parallel_matches_serial_with_multiple_threads() {
        let ((serial_escape, serial_raster), (parallel_escape, parallel_raster)) = run_both(4);

        assert_eq!(parallel_escape.values(), serial_escape.values());
        assert_eq!(parallel_raster.bytes(), serial_raster.bytes());
    }

    #[test]
    fn test_parallel_matches_serial_with_single_thread() {
        let ((serial_escape, serial_raster), (parallel_escape, parallel_raster)) = run_both(1);

        assert_eq!(parallel_escape.values(), serial_escape.values());
        assert_eq!(parallel_raster.bytes(), serial_raster.bytes());
    }

    #[test]
    fn test_parallel_with_more_threads_than_rows() {
        let size = RasterSize::new(16, 3).unwrap();
        let mut escape = EscapeBuffer::new(size);
        let mut raster = PixelBuffer::new(size);

        let result = compute_escape_parallel(
            &Viewport::default(),
            32,
            8,
            &SineGradient::default(),
            &mut escape,
            &mut raster,
        );

        assert!(result.is_ok());
    }
}
