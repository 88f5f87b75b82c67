//! Line and segment predicates on raw coordinates.
//!
//! These work on bare `f64` coordinates so the crossing code and the shapes
//! can share them without building intermediate points.

/// Orientation of `(px, py)` relative to the directed segment `(x1, y1) -> (x2, y2)`.
///
/// Returns `1` if the point lies counter-clockwise (to the right in y-down
/// space), `-1` if clockwise, and `0` if it lies on the segment itself. Points
/// on the infinite line but beyond an endpoint report the side of that endpoint.
#[must_use]
pub fn relative_ccw(x1: f64, y1: f64, x2: f64, y2: f64, px: f64, py: f64) -> i32 {
    let x2 = x2 - x1;
    let y2 = y2 - y1;
    let mut px = px - x1;
    let mut py = py - y1;
    let mut ccw = px * y2 - py * x2;
    if ccw == 0.0 {
        // Collinear: classify by projection onto the segment.
        ccw = px * x2 + py * y2;
        if ccw > 0.0 {
            px -= x2;
            py -= y2;
            ccw = px * x2 + py * y2;
            if ccw < 0.0 {
                ccw = 0.0;
            }
        }
    }
    if ccw < 0.0 {
        -1
    } else {
        i32::from(ccw > 0.0)
    }
}

/// Returns true if segment `(x1, y1)-(x2, y2)` intersects segment `(x3, y3)-(x4, y4)`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn lines_intersect(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    // Work relative to the first endpoint: A = p2, B = p3, C = p4.
    let x2 = x2 - x1;
    let y2 = y2 - y1;
    let x3 = x3 - x1;
    let y3 = y3 - y1;
    let x4 = x4 - x1;
    let y4 = y4 - y1;

    let av_b = x2 * y3 - x3 * y2;
    let av_c = x2 * y4 - x4 * y2;

    if av_b == 0.0 && av_c == 0.0 {
        // Collinear: overlap test along the dominant axis.
        if x2 != 0.0 {
            return (x4 * x3 <= 0.0)
                || ((x3 * x2 >= 0.0) && (if x2 > 0.0 { x3 <= x2 || x4 <= x2 } else { x3 >= x2 || x4 >= x2 }));
        }
        if y2 != 0.0 {
            return (y4 * y3 <= 0.0)
                || ((y3 * y2 >= 0.0) && (if y2 > 0.0 { y3 <= y2 || y4 <= y2 } else { y3 >= y2 || y4 >= y2 }));
        }
        return false;
    }

    let bv_c = x3 * y4 - x4 * y3;
    (av_b * av_c <= 0.0) && (bv_c * (av_b + bv_c - av_c) <= 0.0)
}

/// Returns true if the segment crosses or touches the rectangle `(rx, ry, rw, rh)`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn line_intersects_rect(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    rx: f64,
    ry: f64,
    rw: f64,
    rh: f64,
) -> bool {
    let rr = rx + rw;
    let rb = ry + rh;
    let inside = |x: f64, y: f64| rx <= x && x <= rr && ry <= y && y <= rb;
    inside(x1, y1)
        || inside(x2, y2)
        || lines_intersect(rx, ry, rr, rb, x1, y1, x2, y2)
        || lines_intersect(rr, ry, rx, rb, x1, y1, x2, y2)
}

/// Squared distance between two points.
#[must_use]
pub fn distance_sq(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

/// Distance between two points.
#[must_use]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    distance_sq(x1, y1, x2, y2).sqrt()
}

/// Squared distance from `(px, py)` to the infinite line through the two points.
///
/// A degenerate line falls back to the distance to its single point.
#[must_use]
pub fn point_line_dist_sq(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance_sq(px, py, x1, y1);
    }
    let s = (px - x1) * dy - (py - y1) * dx;
    s * s / len_sq
}

/// Distance from `(px, py)` to the infinite line through the two points.
#[must_use]
pub fn point_line_dist(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    point_line_dist_sq(px, py, x1, y1, x2, y2).sqrt()
}

/// Squared distance from `(px, py)` to the segment between the two points.
#[must_use]
pub fn point_seg_dist_sq(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let x2 = x2 - x1;
    let y2 = y2 - y1;
    let mut px = px - x1;
    let mut py = py - y1;
    let mut dot = px * x2 + py * y2;
    let proj_sq = if dot <= 0.0 {
        0.0
    } else {
        px = x2 - px;
        py = y2 - py;
        dot = px * x2 + py * y2;
        if dot <= 0.0 {
            0.0
        } else {
            dot * dot / (x2 * x2 + y2 * y2)
        }
    };
    (px * px + py * py - proj_sq).max(0.0)
}

/// Distance from `(px, py)` to the segment between the two points.
#[must_use]
pub fn point_seg_dist(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    point_seg_dist_sq(px, py, x1, y1, x2, y2).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn relative_ccw_sides() {
        assert_eq!(relative_ccw(0.0, 0.0, 10.0, 0.0, 5.0, 5.0), -1);
        assert_eq!(relative_ccw(0.0, 0.0, 10.0, 0.0, 5.0, -5.0), 1);
        assert_eq!(relative_ccw(0.0, 0.0, 10.0, 0.0, 5.0, 0.0), 0);
    }

    #[test]
    fn relative_ccw_collinear_beyond_endpoints() {
        assert_eq!(relative_ccw(0.0, 0.0, 10.0, 0.0, -5.0, 0.0), -1);
        assert_eq!(relative_ccw(0.0, 0.0, 10.0, 0.0, 15.0, 0.0), 1);
        assert_eq!(relative_ccw(0.0, 0.0, 10.0, 0.0, 10.0, 0.0), 0);
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(lines_intersect(0.0, 0.0, 10.0, 10.0, 0.0, 10.0, 10.0, 0.0));
        assert!(!lines_intersect(0.0, 0.0, 10.0, 0.0, 0.0, 1.0, 10.0, 1.0));
        // Touching at an endpoint counts.
        assert!(lines_intersect(0.0, 0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 5.0));
    }

    #[test]
    fn collinear_segments_overlap_only_when_sharing_span() {
        assert!(lines_intersect(0.0, 0.0, 10.0, 0.0, 5.0, 0.0, 15.0, 0.0));
        assert!(!lines_intersect(0.0, 0.0, 10.0, 0.0, 11.0, 0.0, 15.0, 0.0));
        assert!(lines_intersect(0.0, 0.0, 0.0, 10.0, 0.0, 2.0, 0.0, 3.0));
    }

    #[test]
    fn segment_against_rect() {
        // Fully inside.
        assert!(line_intersects_rect(2.0, 2.0, 3.0, 3.0, 0.0, 0.0, 10.0, 10.0));
        // Passing through.
        assert!(line_intersects_rect(-5.0, 5.0, 15.0, 5.0, 0.0, 0.0, 10.0, 10.0));
        // Outside.
        assert!(!line_intersects_rect(-5.0, -5.0, -1.0, 20.0, 0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn point_distances() {
        assert_abs_diff_eq!(point_line_dist(5.0, 3.0, 0.0, 0.0, 10.0, 0.0), 3.0);
        assert_abs_diff_eq!(point_line_dist(20.0, 3.0, 0.0, 0.0, 10.0, 0.0), 3.0);
        assert_abs_diff_eq!(point_seg_dist(20.0, 0.0, 0.0, 0.0, 10.0, 0.0), 10.0);
        assert_abs_diff_eq!(point_seg_dist(-3.0, 4.0, 0.0, 0.0, 10.0, 0.0), 5.0);
        assert_abs_diff_eq!(point_seg_dist(5.0, 2.0, 0.0, 0.0, 10.0, 0.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn degenerate_segment_distance_is_point_distance() {
        assert_abs_diff_eq!(point_seg_dist(3.0, 4.0, 0.0, 0.0, 0.0, 0.0), 5.0);
        assert_abs_diff_eq!(point_line_dist(3.0, 4.0, 0.0, 0.0, 0.0, 0.0), 5.0);
    }
}
