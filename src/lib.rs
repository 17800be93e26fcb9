mod controllers;
mod core;
mod engine;
mod storage;

pub use crate::controllers::render_once::render_once;
pub use crate::core::colour_mapping::sine_gradient::{DEFAULT_FREQUENCY, SineGradient};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::escape_buffer::EscapeBuffer;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::raster_size::{RasterSize, RasterSizeError};
pub use crate::core::data::selection::{MIN_SELECTION_EXTENT_PX, ScreenPoint, SelectionRequest};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::engine::config::{AdjustDirection, EngineConfig, EngineLimits, FrequencyChannel};
pub use crate::engine::engine::{EngineError, MandelbrotEngine};
pub use crate::storage::write_ppm::write_ppm;
