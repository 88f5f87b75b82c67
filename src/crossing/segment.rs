//! Crossing counts for single line, quadratic and cubic segments.
//!
//! `cross_*` cast a ray from `(x, y)` toward +x and return the signed number
//! of times the segment crosses it. `intersect_*` sweep the band
//! `[ry1, ry2]` starting at `rx1` the same way, and report
//! [`Crossing::Boundary`] when the segment passes through the rectangle
//! `(rx1, ry1)-(rx2, ry2)` itself.
use super::bound::{cross_bound, Bound};
use super::curve::{CubicHelper, QuadHelper};
use super::{Crossing, DELTA};

/// Signed crossings of the ray from `(x, y)` with the line `(x1, y1)-(x2, y2)`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn cross_line(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> i32 {
    // Left, right, above or vertical.
    if (x < x1 && x < x2) || (x > x1 && x > x2) || (y > y1 && y > y2) || x1 == x2 {
        return 0;
    }

    // Unless the point is below both ends, test which side of the line it is on.
    if !(y < y1 && y < y2) && (y2 - y1) * (x - x1) / (x2 - x1) <= y - y1 {
        return 0;
    }

    if x == x1 {
        return if x1 < x2 { 0 } else { -1 };
    }
    if x == x2 {
        return if x1 < x2 { 1 } else { 0 };
    }
    if x1 < x2 {
        1
    } else {
        -1
    }
}

/// Signed crossings of the ray from `(x, y)` with a quadratic segment.
#[must_use]
#[allow(clippy::too_many_arguments, clippy::float_cmp)]
pub fn cross_quad(x1: f64, y1: f64, cx: f64, cy: f64, x2: f64, y2: f64, x: f64, y: f64) -> i32 {
    if (x < x1 && x < cx && x < x2)
        || (x > x1 && x > cx && x > x2)
        || (y > y1 && y > cy && y > y2)
        || (x1 == cx && cx == x2)
    {
        return 0;
    }

    if y < y1 && y < cy && y < y2 && x != x1 && x != x2 {
        return below_curve(x1, x2, x);
    }

    let c = QuadHelper::new(x1, y1, cx, cy, x2, y2);
    let px = x - x1;
    let py = y - y1;
    let mut res = [0.0; 3];
    let rc = c.solve_point(&mut res, px).unwrap_or(0);
    c.cross(&res[..rc], py, py)
}

/// Signed crossings of the ray from `(x, y)` with a cubic segment.
#[must_use]
#[allow(clippy::too_many_arguments, clippy::float_cmp)]
pub fn cross_cubic(
    x1: f64,
    y1: f64,
    cx1: f64,
    cy1: f64,
    cx2: f64,
    cy2: f64,
    x2: f64,
    y2: f64,
    x: f64,
    y: f64,
) -> i32 {
    if (x < x1 && x < cx1 && x < cx2 && x < x2)
        || (x > x1 && x > cx1 && x > cx2 && x > x2)
        || (y > y1 && y > cy1 && y > cy2 && y > y2)
        || (x1 == cx1 && cx1 == cx2 && cx2 == x2)
    {
        return 0;
    }

    if y < y1 && y < cy1 && y < cy2 && y < y2 && x != x1 && x != x2 {
        return below_curve(x1, x2, x);
    }

    let c = CubicHelper::new(x1, y1, cx1, cy1, cx2, cy2, x2, y2);
    let px = x - x1;
    let py = y - y1;
    let mut res = [0.0; 3];
    let rc = c.solve_point(&mut res, px).unwrap_or(0);
    c.cross(&res[..rc], py, py)
}

/// Crossing of a curve lying entirely below the query, judged by its endpoints.
fn below_curve(x1: f64, x2: f64, x: f64) -> i32 {
    if x1 < x2 {
        i32::from(x1 < x && x < x2)
    } else if x2 < x && x < x1 {
        -1
    } else {
        0
    }
}

/// Band crossing of the line `(x1, y1)-(x2, y2)` against the rectangle `(rx1, ry1)-(rx2, ry2)`.
#[must_use]
#[allow(clippy::too_many_arguments, clippy::float_cmp)]
pub fn intersect_line(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    rx1: f64,
    ry1: f64,
    rx2: f64,
    ry2: f64,
) -> Crossing {
    if (rx2 < x1 && rx2 < x2) || (rx1 > x1 && rx1 > x2) || (ry1 > y1 && ry1 > y2) {
        return Crossing::Count(0);
    }

    if !(ry2 < y1 && ry2 < y2) {
        if x1 == x2 {
            return Crossing::Boundary;
        }

        // Clip the line to the rectangle's x range.
        let (bx1, bx2) = if x1 < x2 {
            (x1.max(rx1), x2.min(rx2))
        } else {
            (x2.max(rx1), x1.min(rx2))
        };
        let k = (y2 - y1) / (x2 - x1);
        let by1 = k * (bx1 - x1) + y1;
        let by2 = k * (bx2 - x1) + y1;

        if by1 < ry1 && by2 < ry1 {
            return Crossing::Count(0);
        }
        if !(by1 > ry2 && by2 > ry2) {
            return Crossing::Boundary;
        }
    }

    if x1 == x2 {
        return Crossing::Count(0);
    }
    if rx1 == x1 {
        return Crossing::Count(if x1 < x2 { 0 } else { -1 });
    }
    if rx1 == x2 {
        return Crossing::Count(if x1 < x2 { 1 } else { 0 });
    }
    Crossing::Count(below_curve(x1, x2, rx1))
}

/// Band crossing of a quadratic segment against the rectangle `(rx1, ry1)-(rx2, ry2)`.
#[must_use]
#[allow(clippy::too_many_arguments, clippy::float_cmp)]
pub fn intersect_quad(
    x1: f64,
    y1: f64,
    cx: f64,
    cy: f64,
    x2: f64,
    y2: f64,
    rx1: f64,
    ry1: f64,
    rx2: f64,
    ry2: f64,
) -> Crossing {
    if (rx2 < x1 && rx2 < cx && rx2 < x2)
        || (rx1 > x1 && rx1 > cx && rx1 > x2)
        || (ry1 > y1 && ry1 > cy && ry1 > y2)
    {
        return Crossing::Count(0);
    }

    if ry2 < y1 && ry2 < cy && ry2 < y2 && rx1 != x1 && rx1 != x2 {
        return Crossing::Count(below_curve(x1, x2, rx1));
    }

    let c = QuadHelper::new(x1, y1, cx, cy, x2, y2);
    let px1 = rx1 - x1;
    let py1 = ry1 - y1;
    let px2 = rx2 - x1;
    let py2 = ry2 - y1;

    let mut res1 = [0.0; 3];
    let mut res2 = [0.0; 3];
    let rc1 = c.solve_point(&mut res1, px1);
    let rc2 = c.solve_point(&mut res2, px2);

    // Both band edges miss the curve; a degenerate solve does not count as a miss.
    if rc1 == Some(0) && rc2 == Some(0) {
        return Crossing::Count(0);
    }
    let rc1 = rc1.unwrap_or(0);
    let rc2 = rc2.unwrap_or(0);

    let min_x = px1 - DELTA;
    let max_x = px2 + DELTA;
    let mut bound: Vec<Bound> = Vec::with_capacity(7);
    c.add_bound(&mut bound, &res1[..rc1], min_x, max_x, false, 0);
    c.add_bound(&mut bound, &res2[..rc2], min_x, max_x, false, 1);
    let rc2 = c.solve_extreme(&mut res2);
    c.add_bound(&mut bound, &res2[..rc2], min_x, max_x, true, 2);
    if rx1 < x1 && x1 < rx2 {
        bound.push(Bound { t: 0.0, x: 0.0, y: 0.0, id: 4 });
    }
    if rx1 < x2 && x2 < rx2 {
        bound.push(Bound { t: 1.0, x: c.end_x, y: c.end_y, id: 5 });
    }

    cross_bound(&mut bound, py1, py2)
        .unwrap_or_else(|| Crossing::Count(c.cross(&res1[..rc1], py1, py2)))
}

/// Band crossing of a cubic segment against the rectangle `(rx1, ry1)-(rx2, ry2)`.
#[must_use]
#[allow(clippy::too_many_arguments, clippy::float_cmp)]
pub fn intersect_cubic(
    x1: f64,
    y1: f64,
    cx1: f64,
    cy1: f64,
    cx2: f64,
    cy2: f64,
    x2: f64,
    y2: f64,
    rx1: f64,
    ry1: f64,
    rx2: f64,
    ry2: f64,
) -> Crossing {
    if (rx2 < x1 && rx2 < cx1 && rx2 < cx2 && rx2 < x2)
        || (rx1 > x1 && rx1 > cx1 && rx1 > cx2 && rx1 > x2)
        || (ry1 > y1 && ry1 > cy1 && ry1 > cy2 && ry1 > y2)
    {
        return Crossing::Count(0);
    }

    if ry2 < y1 && ry2 < cy1 && ry2 < cy2 && ry2 < y2 && rx1 != x1 && rx1 != x2 {
        return Crossing::Count(below_curve(x1, x2, rx1));
    }

    let c = CubicHelper::new(x1, y1, cx1, cy1, cx2, cy2, x2, y2);
    let px1 = rx1 - x1;
    let py1 = ry1 - y1;
    let px2 = rx2 - x1;
    let py2 = ry2 - y1;

    let mut res1 = [0.0; 3];
    let mut res2 = [0.0; 3];
    let rc1 = c.solve_point(&mut res1, px1);
    let rc2 = c.solve_point(&mut res2, px2);

    if rc1 == Some(0) && rc2 == Some(0) {
        return Crossing::Count(0);
    }
    let rc1 = rc1.unwrap_or(0);
    let rc2 = rc2.unwrap_or(0);

    let min_x = px1 - DELTA;
    let max_x = px2 + DELTA;
    let mut bound: Vec<Bound> = Vec::with_capacity(10);
    c.add_bound(&mut bound, &res1[..rc1], min_x, max_x, false, 0);
    c.add_bound(&mut bound, &res2[..rc2], min_x, max_x, false, 1);
    let rc2 = c.solve_extreme_x(&mut res2).unwrap_or(0);
    c.add_bound(&mut bound, &res2[..rc2], min_x, max_x, true, 2);
    let rc2 = c.solve_extreme_y(&mut res2).unwrap_or(0);
    c.add_bound(&mut bound, &res2[..rc2], min_x, max_x, true, 4);
    if rx1 < x1 && x1 < rx2 {
        bound.push(Bound { t: 0.0, x: 0.0, y: 0.0, id: 6 });
    }
    if rx1 < x2 && x2 < rx2 {
        bound.push(Bound { t: 1.0, x: c.end_x, y: c.end_y, id: 7 });
    }

    cross_bound(&mut bound, py1, py2)
        .unwrap_or_else(|| Crossing::Count(c.cross(&res1[..rc1], py1, py2)))
}
