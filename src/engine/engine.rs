use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use crate::core::actions::compute_escape::compute_escape_parallel::{
    ComputeEscapeParallelError, compute_escape_parallel,
};
use crate::core::actions::recolour::recolour;
use crate::core::actions::translate_selection::translate_selection;
use crate::core::data::escape_buffer::EscapeBuffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::selection::SelectionRequest;
use crate::core::data::viewport::Viewport;
use crate::engine::config::{AdjustDirection, EngineConfig, EngineLimits, FrequencyChannel};

#[derive(Debug)]
pub enum EngineError {
    ComputeEscape(ComputeEscapeParallelError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ComputeEscape(err) => write!(f, "escape pass failed: {}", err),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ComputeEscape(err) => Some(err),
        }
    }
}

impl From<ComputeEscapeParallelError> for EngineError {
    fn from(err: ComputeEscapeParallelError) -> Self {
        Self::ComputeEscape(err)
    }
}

/// The fractal engine behind the interactive explorer.
///
/// Owns the viewport, the tunables and both output buffers. The input and
/// presentation layers talk to it exclusively through these operations:
/// they feed in selections and held-key adjustments, trigger computes, and
/// read the raster and status strings back out. The engine itself never
/// polls input or touches a window.
///
/// `compute` and `recolour` run to completion on the calling thread; the
/// buffers they fill are handed out as read-only borrows in between.
#[derive(Debug)]
pub struct MandelbrotEngine {
    raster_size: RasterSize,
    viewport: Viewport,
    config: EngineConfig,
    escape: EscapeBuffer,
    raster: PixelBuffer,
    last_compute: Duration,
}

impl MandelbrotEngine {
    #[must_use]
    pub fn new(raster_size: RasterSize, limits: EngineLimits) -> Self {
        Self {
            raster_size,
            viewport: Viewport::default(),
            config: EngineConfig::new(limits),
            escape: EscapeBuffer::new(raster_size),
            raster: PixelBuffer::new(raster_size),
            last_compute: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_defaults(raster_size: RasterSize) -> Self {
        Self::new(raster_size, EngineLimits::default())
    }

    #[must_use]
    pub fn raster_size(&self) -> RasterSize {
        self.raster_size
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Restores the default view, iteration cap and colour frequencies.
    /// Does not recompute; the caller decides when to redraw.
    pub fn reset_view(&mut self) {
        self.viewport = Viewport::default();
        self.config.reset();
    }

    /// Applies a zoom selection to the viewport. Returns `true` if the
    /// viewport changed (the caller should then compute); a selection below
    /// the minimum extent is silently ignored and yields `false`.
    pub fn request_zoom(&mut self, selection: &SelectionRequest) -> bool {
        match translate_selection(selection, &self.viewport, self.raster_size) {
            Some(zoomed) => {
                self.viewport = zoomed;
                true
            }
            None => false,
        }
    }

    /// Full blocking recomputation of the escape buffer and raster.
    ///
    /// Corrects the viewport's aspect ratio first, so after this call the
    /// viewport always matches the raster's proportions. Returns the
    /// wall-clock duration of the pass, which is also retained for the
    /// status overlay.
    pub fn compute(&mut self) -> Result<Duration, EngineError> {
        self.viewport
            .apply_aspect_correction(self.raster_size.aspect());

        let timer = Instant::now();
        compute_escape_parallel(
            &self.viewport,
            self.config.max_iterations(),
            self.config.threads(),
            self.config.gradient(),
            &mut self.escape,
            &mut self.raster,
        )?;
        self.last_compute = timer.elapsed();

        Ok(self.last_compute)
    }

    /// Repaints escaped pixels from the stored escape values with the
    /// current frequencies. Cheap relative to `compute`; meant to run every
    /// frame while the user tunes colours.
    pub fn recolour(&mut self) {
        recolour(&self.escape, &mut self.raster, self.config.gradient());
    }

    pub fn adjust_resolution(&mut self, direction: AdjustDirection, dt: f64) {
        self.config.adjust_resolution(direction, dt);
    }

    pub fn adjust_threads(&mut self, direction: AdjustDirection, dt: f64) {
        self.config.adjust_threads(direction, dt);
    }

    pub fn adjust_frequency(
        &mut self,
        channel: FrequencyChannel,
        direction: AdjustDirection,
        dt: f64,
    ) {
        self.config.adjust_frequency(channel, direction, dt);
    }

    #[must_use]
    pub fn raster(&self) -> &PixelBuffer {
        &self.raster
    }

    #[must_use]
    pub fn escape_values(&self) -> &EscapeBuffer {
        &self.escape
    }

    #[must_use]
    pub fn last_compute_duration(&self) -> Duration {
        self.last_compute
    }

    #[must_use]
    pub fn resolution_text(&self) -> String {
        format!("{}", self.config.max_iterations())
    }

    #[must_use]
    pub fn render_time_text(&self) -> String {
        format!("{}", self.last_compute.as_millis())
    }

    #[must_use]
    pub fn colour_frequencies_text(&self) -> String {
        let gradient = self.config.gradient();

        format!(
            "Colour frequency one: {:.3}\nColour frequency two: {:.3}\nColour frequency three: {:.3}\n",
            gradient.frequency_one, gradient.frequency_two, gradient.frequency_three
        )
    }

    #[must_use]
    pub fn thread_count_text(&self) -> String {
        format!("Number of threads: {}\n", self.config.threads())
    }
}
