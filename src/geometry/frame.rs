//! Helpers shared by shapes defined through a framing rectangle.
use super::Rect;

/// Returns true if the frame has no area.
#[must_use]
pub fn is_empty(frame: &Rect) -> bool {
    frame.width() <= 0.0 || frame.height() <= 0.0
}

/// Frame spanning two opposite corners, in any order.
#[must_use]
pub fn from_diagonal(x1: f64, y1: f64, x2: f64, y2: f64) -> Rect {
    let (rx, rw) = if x1 < x2 { (x1, x2 - x1) } else { (x2, x1 - x2) };
    let (ry, rh) = if y1 < y2 { (y1, y2 - y1) } else { (y2, y1 - y2) };
    Rect::new(rx, ry, rw, rh)
}

/// Frame centered on `(cx, cy)` with one corner at `(corner_x, corner_y)`.
#[must_use]
pub fn from_center(cx: f64, cy: f64, corner_x: f64, corner_y: f64) -> Rect {
    let half_w = (corner_x - cx).abs();
    let half_h = (corner_y - cy).abs();
    Rect::new(cx - half_w, cy - half_h, half_w * 2.0, half_h * 2.0)
}

/// Maps `(x, y)` into frame space where the frame spans `[-0.5, 0.5]` on both axes.
///
/// Returns `None` for an empty frame.
#[must_use]
pub fn normalize(frame: &Rect, x: f64, y: f64) -> Option<(f64, f64)> {
    if is_empty(frame) {
        return None;
    }
    Some((
        (x - frame.x()) / frame.width() - 0.5,
        (y - frame.y()) / frame.height() - 0.5,
    ))
}

/// Clamps `(x, y)` to the nearest point inside `rect`.
#[must_use]
pub(crate) fn nearest_in(rect: &Rect, x: f64, y: f64) -> (f64, f64) {
    (
        crate::math::util::clamp(x, rect.min_x(), rect.max_x()),
        crate::math::util::clamp(y, rect.min_y(), rect.max_y()),
    )
}
