use crate::core::data::raster_size::RasterSize;
use crate::core::data::selection::SelectionRequest;
use crate::core::data::viewport::Viewport;

/// Maps a screen-space selection onto the complex plane, producing the
/// viewport for the next zoom level.
///
/// Returns `None` for selections below the minimum extent, which the caller
/// treats as a silent no-op. The result is intentionally not
/// aspect-corrected; correction happens at the start of the next compute
/// pass so the selected area is only ever expanded, never clipped.
#[must_use]
pub fn translate_selection(
    selection: &SelectionRequest,
    viewport: &Viewport,
    raster: RasterSize,
) -> Option<Viewport> {
    if !selection.is_viable() {
        return None;
    }

    let (top_left, bottom_right) = selection.normalized();

    let scale_x = viewport.width() / f64::from(raster.width());
    let scale_y = viewport.height() / f64::from(raster.height());

    Viewport::new(
        viewport.left() + f64::from(top_left.x) * scale_x,
        viewport.left() + f64::from(bottom_right.x) * scale_x,
        viewport.top() + f64::from(top_left.y) * scale_y,
        viewport.top() + f64::from(bottom_right.y) * scale_y,
    )
    .ok()
}
