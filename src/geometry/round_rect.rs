use std::f64::consts::SQRT_2;

use crate::path::PathIterator;
use crate::transform::Transform;

use super::ellipse::{CornerTableIter, TableEntry};
use super::{frame, Rect, Shape};

/// Control point offset for a rounded corner, measured inward from the arc end.
const U: f64 = 0.5 - 2.0 / 3.0 * (SQRT_2 - 1.0);

const ROUND_RECT_TABLE: [TableEntry; 9] = [
    TableEntry::Move([0.0, 0.5, 0.0, 0.0]),
    TableEntry::Line([1.0, -0.5, 0.0, 0.0]),
    TableEntry::Cubic([1.0, -U, 0.0, 0.0], [1.0, 0.0, 0.0, U], [1.0, 0.0, 0.0, 0.5]),
    TableEntry::Line([1.0, 0.0, 1.0, -0.5]),
    TableEntry::Cubic([1.0, 0.0, 1.0, -U], [1.0, -U, 1.0, 0.0], [1.0, -0.5, 1.0, 0.0]),
    TableEntry::Line([0.0, 0.5, 1.0, 0.0]),
    TableEntry::Cubic([0.0, U, 1.0, 0.0], [0.0, 0.0, 1.0, -U], [0.0, 0.0, 1.0, -0.5]),
    TableEntry::Line([0.0, 0.0, 0.0, 0.5]),
    TableEntry::Cubic([0.0, 0.0, 0.0, U], [0.0, U, 0.0, 0.0], [0.0, 0.5, 0.0, 0.0]),
];

/// Rectangle with elliptical corners of size `arc_width` x `arc_height`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundRect {
    frame: Rect,
    arc_width: f64,
    arc_height: f64,
}

impl RoundRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, arc_width: f64, arc_height: f64) -> Self {
        Self {
            frame: Rect::new(x, y, width, height),
            arc_width,
            arc_height,
        }
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    #[must_use]
    pub fn arc_width(&self) -> f64 {
        self.arc_width
    }

    #[must_use]
    pub fn arc_height(&self) -> f64 {
        self.arc_height
    }
}

impl Shape for RoundRect {
    fn is_empty(&self) -> bool {
        frame::is_empty(&self.frame)
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        let (rx1, ry1) = (self.frame.min_x(), self.frame.min_y());
        let (rx2, ry2) = (self.frame.max_x(), self.frame.max_y());
        if x < rx1 || x >= rx2 || y < ry1 || y >= ry2 {
            return false;
        }

        let aw = self.arc_width / 2.0;
        let ah = self.arc_height / 2.0;
        // Outside the corner boxes the rectangle test alone decides.
        let cx = if x < rx1 + aw {
            rx1 + aw
        } else if x > rx2 - aw {
            rx2 - aw
        } else {
            return true;
        };
        let cy = if y < ry1 + ah {
            ry1 + ah
        } else if y > ry2 - ah {
            ry2 - ah
        } else {
            return true;
        };

        let px = (x - cx) / aw;
        let py = (y - cy) / ah;
        px * px + py * py <= 1.0
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        if self.is_empty() || frame::is_empty(rect) {
            return false;
        }
        let (x1, y1, x2, y2) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
        self.contains(x1, y1) && self.contains(x2, y1) && self.contains(x2, y2) && self.contains(x1, y2)
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        if self.is_empty() || frame::is_empty(rect) {
            return false;
        }
        if rect.max_x() < self.frame.min_x()
            || self.frame.max_x() < rect.min_x()
            || rect.max_y() < self.frame.min_y()
            || self.frame.max_y() < rect.min_y()
        {
            return false;
        }
        let (nx, ny) = frame::nearest_in(rect, self.frame.center_x(), self.frame.center_y());
        self.contains(nx, ny)
    }

    fn bounds(&self) -> Rect {
        self.frame
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        let aw = self.frame.width().min(self.arc_width);
        let ah = self.frame.height().min(self.arc_height);
        Box::new(CornerTableIter::new(self.frame, aw, ah, &ROUND_RECT_TABLE, transform))
    }
}
