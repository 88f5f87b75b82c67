//! Polynomial forms of quadratic and cubic segments used by the crossing tests.
//!
//! Both helpers translate the segment so that its start point sits at the
//! origin. Query coordinates passed in must be translated the same way.
use super::bound::Bound;
use super::DELTA;
use crate::math::roots::{solve_cubic, solve_quadratic};

/// Quadratic segment as `x(t) = t·(t·k2x + k1x)`, `y(t) = t·(t·k2y + k1y)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QuadHelper {
    pub(crate) end_x: f64,
    pub(crate) end_y: f64,
    ctrl_x: f64,
    k1x: f64,
    k1y: f64,
    k2x: f64,
    k2y: f64,
}

impl QuadHelper {
    pub(crate) fn new(x1: f64, y1: f64, cx: f64, cy: f64, x2: f64, y2: f64) -> Self {
        let end_x = x2 - x1;
        let end_y = y2 - y1;
        let ctrl_x = cx - x1;
        let ctrl_y = cy - y1;
        let k1x = ctrl_x + ctrl_x;
        let k1y = ctrl_y + ctrl_y;
        Self {
            end_x,
            end_y,
            ctrl_x,
            k1x,
            k1y,
            k2x: end_x - k1x,
            k2y: end_y - k1y,
        }
    }

    /// Net crossings of the roots in `res` against the band `[py1, py2]`.
    #[allow(clippy::float_cmp)]
    pub(crate) fn cross(&self, res: &[f64], py1: f64, py2: f64) -> i32 {
        let mut cross = 0;
        for &t in res {
            if t < -DELTA || t > 1.0 + DELTA {
                continue;
            }
            if t < DELTA {
                let dir = if self.ctrl_x == 0.0 {
                    self.end_x - self.ctrl_x
                } else {
                    self.ctrl_x
                };
                if py1 < 0.0 && dir < 0.0 {
                    cross -= 1;
                }
                continue;
            }
            if t > 1.0 - DELTA {
                let dir = if self.end_x == self.ctrl_x {
                    self.ctrl_x
                } else {
                    self.end_x - self.ctrl_x
                };
                if py1 < self.end_y && dir > 0.0 {
                    cross += 1;
                }
                continue;
            }
            let ry = t * (t * self.k2y + self.k1y);
            if ry > py2 {
                // Half the x derivative; only its sign matters.
                let rxt = t * self.k2x + self.ctrl_x;
                if rxt > -DELTA && rxt < DELTA {
                    continue;
                }
                cross += if rxt > 0.0 { 1 } else { -1 };
            }
        }
        cross
    }

    /// Parameters where `x(t) == px`.
    pub(crate) fn solve_point(&self, res: &mut [f64; 3], px: f64) -> Option<usize> {
        solve_quadratic(&[-px, self.k1x, self.k2x], res)
    }

    /// Parameters of the x and y extrema.
    pub(crate) fn solve_extreme(&self, res: &mut [f64; 3]) -> usize {
        let mut rc = 0;
        if self.k2x != 0.0 {
            res[rc] = -self.k1x / (self.k2x + self.k2x);
            rc += 1;
        }
        if self.k2y != 0.0 {
            res[rc] = -self.k1y / (self.k2y + self.k2y);
            rc += 1;
        }
        rc
    }

    fn point_at(&self, t: f64) -> (f64, f64) {
        (t * (t * self.k2x + self.k1x), t * (t * self.k2y + self.k1y))
    }

    /// Records every in-range root whose x lies within `[min_x, max_x]`.
    pub(crate) fn add_bound(
        &self,
        bound: &mut Vec<Bound>,
        res: &[f64],
        min_x: f64,
        max_x: f64,
        change_id: bool,
        id: u8,
    ) {
        push_bounds(bound, res, min_x, max_x, change_id, id, |t| self.point_at(t));
    }
}

/// Cubic segment as `x(t) = t·(t·(t·k3x + k2x) + k1x)`, likewise for y.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CubicHelper {
    pub(crate) end_x: f64,
    pub(crate) end_y: f64,
    ctrl1_x: f64,
    ctrl2_x: f64,
    k1x: f64,
    k1y: f64,
    k2x: f64,
    k2y: f64,
    k3x: f64,
    k3y: f64,
}

impl CubicHelper {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        x1: f64,
        y1: f64,
        cx1: f64,
        cy1: f64,
        cx2: f64,
        cy2: f64,
        x2: f64,
        y2: f64,
    ) -> Self {
        let end_x = x2 - x1;
        let end_y = y2 - y1;
        let ctrl1_x = cx1 - x1;
        let ctrl1_y = cy1 - y1;
        let ctrl2_x = cx2 - x1;
        let ctrl2_y = cy2 - y1;

        let k1x = 3.0 * ctrl1_x;
        let k2x = 3.0 * ctrl2_x - k1x - k1x;
        let k3x = end_x - k2x - k1x;

        let k1y = 3.0 * ctrl1_y;
        let k2y = 3.0 * ctrl2_y - k1y - k1y;
        let k3y = end_y - k2y - k1y;

        Self {
            end_x,
            end_y,
            ctrl1_x,
            ctrl2_x,
            k1x,
            k1y,
            k2x,
            k2y,
            k3x,
            k3y,
        }
    }

    /// Net crossings of the roots in `res` against the band `[py1, py2]`.
    #[allow(clippy::float_cmp)]
    pub(crate) fn cross(&self, res: &[f64], py1: f64, py2: f64) -> i32 {
        let (bx, cx, ax) = (self.ctrl1_x, self.ctrl2_x, self.end_x);
        let mut cross = 0;
        for &t in res {
            if t < -DELTA || t > 1.0 + DELTA {
                continue;
            }
            if t < DELTA {
                let dir = if bx != 0.0 {
                    bx
                } else if cx != bx {
                    cx - bx
                } else {
                    ax - cx
                };
                if py1 < 0.0 && dir < 0.0 {
                    cross -= 1;
                }
                continue;
            }
            if t > 1.0 - DELTA {
                let dir = if ax != cx {
                    ax - cx
                } else if cx != bx {
                    cx - bx
                } else {
                    bx
                };
                if py1 < self.end_y && dir > 0.0 {
                    cross += 1;
                }
                continue;
            }
            let ry = t * (t * (t * self.k3y + self.k2y) + self.k1y);
            if ry > py2 {
                let k3x3 = 3.0 * self.k3x;
                let k2x2 = 2.0 * self.k2x;
                let mut rxt = t * (t * k3x3 + k2x2) + self.k1x;
                if rxt > -DELTA && rxt < DELTA {
                    rxt = t * (k3x3 + k3x3) + k2x2;
                    if rxt < -DELTA || rxt > DELTA {
                        // Inflection point.
                        continue;
                    }
                    rxt = ax;
                }
                cross += if rxt > 0.0 { 1 } else { -1 };
            }
        }
        cross
    }

    /// Parameters where `x(t) == px`.
    pub(crate) fn solve_point(&self, res: &mut [f64; 3], px: f64) -> Option<usize> {
        solve_cubic(&[-px, self.k1x, self.k2x, self.k3x], res)
    }

    /// Parameters where `x'(t) == 0`.
    pub(crate) fn solve_extreme_x(&self, res: &mut [f64; 3]) -> Option<usize> {
        solve_quadratic(&[self.k1x, 2.0 * self.k2x, 3.0 * self.k3x], res)
    }

    /// Parameters where `y'(t) == 0`.
    pub(crate) fn solve_extreme_y(&self, res: &mut [f64; 3]) -> Option<usize> {
        solve_quadratic(&[self.k1y, 2.0 * self.k2y, 3.0 * self.k3y], res)
    }

    fn point_at(&self, t: f64) -> (f64, f64) {
        (
            t * (t * (t * self.k3x + self.k2x) + self.k1x),
            t * (t * (t * self.k3y + self.k2y) + self.k1y),
        )
    }

    /// Records every in-range root whose x lies within `[min_x, max_x]`.
    pub(crate) fn add_bound(
        &self,
        bound: &mut Vec<Bound>,
        res: &[f64],
        min_x: f64,
        max_x: f64,
        change_id: bool,
        id: u8,
    ) {
        push_bounds(bound, res, min_x, max_x, change_id, id, |t| self.point_at(t));
    }
}

fn push_bounds(
    bound: &mut Vec<Bound>,
    res: &[f64],
    min_x: f64,
    max_x: f64,
    change_id: bool,
    mut id: u8,
    point_at: impl Fn(f64) -> (f64, f64),
) {
    for &t in res {
        if t > -DELTA && t < 1.0 + DELTA {
            let (x, y) = point_at(t);
            if (min_x..=max_x).contains(&x) {
                bound.push(Bound { t, x, y, id });
                if change_id {
                    id += 1;
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quad_point_roots_match_curve() {
        // Arch from (0,0) through control (5,10) to (10,0).
        let quad = QuadHelper::new(0.0, 0.0, 5.0, 10.0, 10.0, 0.0);
        let mut res = [0.0; 3];
        let rc = quad.solve_point(&mut res, 2.5).unwrap();
        assert_eq!(rc, 1);
        let (x, _) = quad.point_at(res[0]);
        assert_abs_diff_eq!(x, 2.5, epsilon = 1e-9);
    }

    #[test]
    fn quad_extreme_is_apex() {
        let quad = QuadHelper::new(0.0, 0.0, 5.0, 10.0, 10.0, 0.0);
        let mut res = [0.0; 3];
        let rc = quad.solve_extreme(&mut res);
        // Linear in x, so only the y extremum exists.
        assert_eq!(rc, 1);
        assert_abs_diff_eq!(res[0], 0.5);
        let (x, y) = quad.point_at(res[0]);
        assert_abs_diff_eq!(x, 5.0);
        assert_abs_diff_eq!(y, 5.0);
    }

    #[test]
    fn quad_cross_counts_interior_root_below() {
        let quad = QuadHelper::new(0.0, 0.0, 5.0, 10.0, 10.0, 0.0);
        let mut res = [0.0; 3];
        let rc = quad.solve_point(&mut res, 5.0).unwrap();
        // Query point below the apex: curve is above it and moves in +x.
        assert_eq!(quad.cross(&res[..rc], 1.0, 1.0), 1);
        // Query point above the apex: no crossing.
        assert_eq!(quad.cross(&res[..rc], 6.0, 6.0), 0);
    }

    #[test]
    fn cubic_extremes() {
        // S-free arch with a single y maximum at t = 0.5.
        let cubic = CubicHelper::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0);
        let mut res = [0.0; 3];
        let rc = cubic.solve_extreme_y(&mut res).unwrap();
        assert_eq!(rc, 1);
        assert_abs_diff_eq!(res[0], 0.5, epsilon = 1e-12);
        let (x, y) = cubic.point_at(0.5);
        assert_abs_diff_eq!(x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 7.5, epsilon = 1e-12);
    }

    #[test]
    fn cubic_cross_counts_interior_root_below() {
        let cubic = CubicHelper::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0);
        let mut res = [0.0; 3];
        let rc = cubic.solve_point(&mut res, 5.0).unwrap();
        assert_eq!(cubic.cross(&res[..rc], 1.0, 1.0), 1);
        assert_eq!(cubic.cross(&res[..rc], 8.0, 8.0), 0);
    }

    #[test]
    fn bounds_outside_x_window_are_skipped() {
        let quad = QuadHelper::new(0.0, 0.0, 5.0, 10.0, 10.0, 0.0);
        let mut bound = Vec::new();
        quad.add_bound(&mut bound, &[0.25, 0.5, 0.75], 4.0, 6.0, true, 2);
        assert_eq!(bound.len(), 1);
        assert_eq!(bound[0].id, 2);
        assert_abs_diff_eq!(bound[0].x, 5.0);
    }
}
