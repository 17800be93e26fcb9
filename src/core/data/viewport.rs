use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidExtent { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { width, height } => {
                write!(f, "viewport extent must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane currently rendered.
///
/// `left`/`right` run along the real axis, `top`/`bottom` along the
/// imaginary axis with `top < bottom` (screen-oriented, matching the raster's
/// row order).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Default for Viewport {
    /// The classic full-set view.
    fn default() -> Self {
        Self {
            left: -2.0,
            right: 0.5,
            top: -1.15,
            bottom: 1.15,
        }
    }
}

impl Viewport {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self, ViewportError> {
        let width = right - left;
        let height = bottom - top;

        if !(width > 0.0) || !(height > 0.0) {
            return Err(ViewportError::InvalidExtent { width, height });
        }

        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width() / self.height()
    }

    /// Expands the rectangle so its aspect ratio matches `target_aspect`,
    /// keeping the center of whichever axis is corrected. Only ever grows
    /// the rectangle; a freshly selected zoom area therefore stays fully
    /// visible after correction.
    pub fn apply_aspect_correction(&mut self, target_aspect: f64) {
        if self.width() < self.height() * target_aspect {
            let corrected_width = self.height() * target_aspect;
            self.left = (self.right + self.left - corrected_width) / 2.0;
            self.right = self.left + corrected_width;
        } else {
            let corrected_height = self.width() / target_aspect;
            self.top = (self.bottom + self.top - corrected_height) / 2.0;
            self.bottom = self.top + corrected_height;
        }
    }
}
