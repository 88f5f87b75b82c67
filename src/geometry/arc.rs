//! Elliptical arcs and their cubic Bezier approximation.
//!
//! Angles are in degrees, measured counter-clockwise from the positive x axis
//! as seen on a y-down display: 90 degrees points toward the top of the frame.
use std::f64::consts::{FRAC_PI_2, SQRT_2};

use crate::error::Result;
use crate::math::util::iceil;
use crate::math::Point2;
use crate::path::{exhausted, PathIterator, Segment, WindingRule};
use crate::transform::Transform;

use super::{frame, Line, Rect, Shape};

/// How the ends of an arc are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcType {
    /// Ends are left open.
    #[default]
    Open,
    /// Ends are joined by a straight chord.
    Chord,
    /// Ends are joined through the center, like a pie slice.
    Pie,
}

/// Portion of an ellipse inscribed in a framing rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Arc {
    frame: Rect,
    angle_start: f64,
    angle_extent: f64,
    arc_type: ArcType,
}

impl Arc {
    #[must_use]
    pub fn new(frame: Rect, angle_start: f64, angle_extent: f64, arc_type: ArcType) -> Self {
        Self {
            frame,
            angle_start,
            angle_extent,
            arc_type,
        }
    }

    /// Circular arc around `(x, y)`.
    #[must_use]
    pub fn from_center(
        x: f64,
        y: f64,
        radius: f64,
        angle_start: f64,
        angle_extent: f64,
        arc_type: ArcType,
    ) -> Self {
        let frame = Rect::new(x - radius, y - radius, radius * 2.0, radius * 2.0);
        Self::new(frame, angle_start, angle_extent, arc_type)
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    #[must_use]
    pub fn angle_start(&self) -> f64 {
        self.angle_start
    }

    #[must_use]
    pub fn angle_extent(&self) -> f64 {
        self.angle_extent
    }

    #[must_use]
    pub fn arc_type(&self) -> ArcType {
        self.arc_type
    }

    pub fn set_angles(&mut self, angle_start: f64, angle_extent: f64) {
        self.angle_start = angle_start;
        self.angle_extent = angle_extent;
    }

    pub fn set_arc_type(&mut self, arc_type: ArcType) {
        self.arc_type = arc_type;
    }

    fn point_at(&self, degrees: f64) -> Point2 {
        let a = degrees.to_radians();
        Point2::new(
            self.frame.x() + (1.0 + a.cos()) * self.frame.width() / 2.0,
            self.frame.y() + (1.0 - a.sin()) * self.frame.height() / 2.0,
        )
    }

    /// Point where the arc begins.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at(self.angle_start)
    }

    /// Point where the arc ends.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at(self.angle_start + self.angle_extent)
    }

    /// Returns true if the angle (degrees) falls within the arc's sweep.
    #[must_use]
    pub fn contains_angle(&self, angle: f64) -> bool {
        let extent = self.angle_extent;
        if extent >= 360.0 {
            return true;
        }
        let angle = norm_angle(angle);
        let a1 = norm_angle(self.angle_start);
        let a2 = a1 + extent;
        if a2 > 360.0 {
            return angle >= a1 || angle <= a2 - 360.0;
        }
        if a2 < 0.0 {
            return angle >= a2 + 360.0 || angle <= a1;
        }
        if extent > 0.0 {
            (a1..=a2).contains(&angle)
        } else {
            (a2..=a1).contains(&angle)
        }
    }
}

/// Maps degrees into `[0, 360)`.
fn norm_angle(angle: f64) -> f64 {
    angle - (angle / 360.0).floor() * 360.0
}

impl Shape for Arc {
    fn is_empty(&self) -> bool {
        self.arc_type == ArcType::Open || frame::is_empty(&self.frame)
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        let Some((nx, ny)) = frame::normalize(&self.frame, x, y) else {
            return false;
        };
        if nx * nx + ny * ny > 0.25 {
            return false;
        }

        let abs_extent = self.angle_extent.abs();
        if abs_extent >= 360.0 {
            return true;
        }

        let contains_angle = self.contains_angle((-ny.atan2(nx)).to_degrees());
        if self.arc_type == ArcType::Pie {
            return contains_angle;
        }
        if abs_extent <= 180.0 && !contains_angle {
            return false;
        }

        // Chord side test: the segment cuts the disc in two.
        let chord = Line::from_points(&self.start_point(), &self.end_point());
        let ccw1 = chord.relative_ccw(x, y);
        let ccw2 = chord.relative_ccw(self.frame.center_x(), self.frame.center_y());
        ccw1 == 0 || ccw2 == 0 || ((ccw1 + ccw2 == 0) ^ (abs_extent > 180.0))
    }

    fn contains_rect(&self, rect: &Rect) -> bool {
        let (x1, y1, x2, y2) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
        if !(self.contains(x1, y1)
            && self.contains(x2, y1)
            && self.contains(x2, y2)
            && self.contains(x1, y2))
        {
            return false;
        }

        let abs_extent = self.angle_extent.abs();
        if self.arc_type != ArcType::Pie || abs_extent <= 180.0 || abs_extent >= 360.0 {
            return true;
        }

        // A reflex pie has a notch at the center the rectangle must avoid.
        let (cx, cy) = (self.frame.center_x(), self.frame.center_y());
        if rect.contains(cx, cy) {
            return false;
        }
        let p1 = self.start_point();
        let p2 = self.end_point();
        !rect.intersects_line(cx, cy, p1.x, p1.y) && !rect.intersects_line(cx, cy, p2.x, p2.y)
    }

    fn intersects_rect(&self, rect: &Rect) -> bool {
        if self.is_empty() || rect.width() <= 0.0 || rect.height() <= 0.0 {
            return false;
        }

        let (x1, y1, x2, y2) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
        if self.contains(x1, y1)
            || self.contains(x2, y1)
            || self.contains(x1, y2)
            || self.contains(x2, y2)
        {
            return true;
        }

        let (cx, cy) = (self.frame.center_x(), self.frame.center_y());
        let p1 = self.start_point();
        let p2 = self.end_point();
        let pie = self.arc_type == ArcType::Pie;
        if rect.contains_point(&p1) || rect.contains_point(&p2) || (pie && rect.contains(cx, cy)) {
            return true;
        }

        if pie {
            if rect.intersects_line(p1.x, p1.y, cx, cy) || rect.intersects_line(p2.x, p2.y, cx, cy) {
                return true;
            }
        } else if rect.intersects_line(p1.x, p1.y, p2.x, p2.y) {
            return true;
        }

        let (nx, ny) = frame::nearest_in(rect, cx, cy);
        self.contains(nx, ny)
    }

    fn bounds(&self) -> Rect {
        if self.is_empty() {
            return self.frame;
        }

        let (rx1, ry1) = (self.frame.min_x(), self.frame.min_y());
        let (rx2, ry2) = (self.frame.max_x(), self.frame.max_y());
        let p1 = self.start_point();
        let p2 = self.end_point();

        let mut bx1 = if self.contains_angle(180.0) { rx1 } else { p1.x.min(p2.x) };
        let mut by1 = if self.contains_angle(90.0) { ry1 } else { p1.y.min(p2.y) };
        let mut bx2 = if self.contains_angle(0.0) { rx2 } else { p1.x.max(p2.x) };
        let mut by2 = if self.contains_angle(270.0) { ry2 } else { p1.y.max(p2.y) };

        if self.arc_type == ArcType::Pie {
            let (cx, cy) = (self.frame.center_x(), self.frame.center_y());
            bx1 = bx1.min(cx);
            by1 = by1.min(cy);
            bx2 = bx2.max(cx);
            by2 = by2.max(cy);
        }
        Rect::new(bx1, by1, bx2 - bx1, by2 - by1)
    }

    fn path_iter(&self, transform: Option<&Transform>) -> Box<dyn PathIterator + '_> {
        Box::new(ArcIter::new(self, transform))
    }
}

/// Emits an arc as at most four cubic segments plus its closing segments.
#[derive(Debug, Clone)]
struct ArcIter {
    cx: f64,
    cy: f64,
    half_w: f64,
    half_h: f64,
    angle: f64,
    step: f64,
    k: f64,
    arc_count: usize,
    line_count: usize,
    index: usize,
    transform: Option<Transform>,
}

impl ArcIter {
    fn new(arc: &Arc, transform: Option<&Transform>) -> Self {
        let half_w = arc.frame.width() / 2.0;
        let half_h = arc.frame.height() / 2.0;
        // Flip to y-down angles.
        let angle = -arc.angle_start.to_radians();
        let extent = -arc.angle_extent;

        let mut iter = Self {
            cx: arc.frame.x() + half_w,
            cy: arc.frame.y() + half_h,
            half_w,
            half_h,
            angle,
            step: 0.0,
            k: 0.0,
            arc_count: 0,
            line_count: 0,
            index: 0,
            transform: transform.copied(),
        };

        if half_w < 0.0 || half_h < 0.0 {
            iter.index = 1;
            return iter;
        }

        if extent.abs() >= 360.0 {
            iter.arc_count = 4;
            iter.k = 4.0 / 3.0 * (SQRT_2 - 1.0);
            iter.step = FRAC_PI_2;
            if extent < 0.0 {
                iter.step = -iter.step;
                iter.k = -iter.k;
            }
        } else {
            let count = iceil(extent.abs() / 90.0);
            iter.arc_count = usize::try_from(count).unwrap_or(0);
            if iter.arc_count > 0 {
                iter.step = (extent / f64::from(count)).to_radians();
                let half = iter.step / 2.0;
                iter.k = 4.0 / 3.0 * (1.0 - half.cos()) / half.sin();
            }
        }

        iter.line_count = match arc.arc_type {
            ArcType::Open => 0,
            ArcType::Chord => 1,
            ArcType::Pie => 2,
        };
        iter
    }

    fn last(&self) -> usize {
        self.arc_count + self.line_count
    }

    /// Point on the ellipse and the scaled tangent offset at `angle`.
    fn sample(&self, angle: f64) -> (Point2, f64, f64) {
        let (sin, cos) = angle.sin_cos();
        let p = Point2::new(self.cx + cos * self.half_w, self.cy + sin * self.half_h);
        (p, self.k * self.half_w * sin, self.k * self.half_h * cos)
    }
}

impl PathIterator for ArcIter {
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }

    fn is_done(&self) -> bool {
        self.index > self.last()
    }

    fn advance(&mut self) {
        if !self.is_done() {
            self.index += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn current_segment(&self) -> Result<Segment> {
        if self.is_done() {
            return Err(exhausted());
        }

        let segment = if self.index == 0 {
            Segment::MoveTo(self.sample(self.angle).0)
        } else if self.index <= self.arc_count {
            let from = self.angle + self.step * (self.index - 1) as f64;
            let (m0, kx0, ky0) = self.sample(from);
            let (m1, kx1, ky1) = self.sample(from + self.step);
            Segment::CubicTo(
                Point2::new(m0.x - kx0, m0.y + ky0),
                Point2::new(m1.x + kx1, m1.y - ky1),
                m1,
            )
        } else if self.index == self.last() {
            Segment::Close
        } else {
            Segment::LineTo(Point2::new(self.cx, self.cy))
        };
        Ok(segment.apply(self.transform.as_ref()))
    }
}
