use std::f64::consts::LN_2;

use crate::core::data::complex::Complex;

/// Outcome of iterating one point of the plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Escape {
    /// The point survived the full iteration budget.
    InSet,
    /// The point escaped; carries the smoothed escape value.
    Escaped(f64),
}

/// Iterates `z <- z² + c` from zero until `|z| >= 2` or the budget runs out.
///
/// An escaped point gets the continuous escape value
/// `count - ln 2 / ln |z|`, which removes the integer banding of the raw
/// count. The smoothing term lies in `(0, 1]` because `|z| >= 2` at the
/// escape step, so the result stays within `[count - 1, count)`. If the
/// term ever degenerates to a non-finite value, the raw count is used
/// instead so downstream colour math never sees NaN or infinity.
#[must_use]
pub fn escape_iteration(c: Complex, max_iterations: u32) -> Escape {
    let mut z = Complex::ZERO;
    let mut count = 0;

    while z.magnitude_squared() < 4.0 && count < max_iterations {
        z = z * z + c;
        count += 1;
    }

    if count == max_iterations {
        return Escape::InSet;
    }

    let smoothing = LN_2 / z.magnitude().ln();
    if smoothing.is_finite() {
        Escape::Escaped(f64::from(count) - smoothing)
    } else {
        Escape::Escaped(f64::from(count))
    }
}
