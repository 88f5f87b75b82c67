//! Analytic solvers for quadratic and cubic polynomials.
//!
//! Coefficients are passed in ascending order (`eqn[0]` is the constant term)
//! and roots are written into a caller-owned buffer. The returned count is
//! `None` when the equation degenerates to `0 = c` and has no defined roots,
//! which callers must distinguish from `Some(0)` (no real roots).
use std::f64::consts::PI;

use super::util::cbrt;

/// Roots closer than this are treated as one repeated root.
pub const ROOT_DELTA: f64 = 1e-10;

/// Solves `eqn[2]·t² + eqn[1]·t + eqn[0] = 0`.
///
/// Returns the number of roots written to `res`, or `None` if both the
/// quadratic and the linear coefficient are zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn solve_quadratic(eqn: &[f64; 3], res: &mut [f64; 3]) -> Option<usize> {
    let a = eqn[2];
    let b = eqn[1];
    let c = eqn[0];
    let mut rc = 0;

    if a == 0.0 {
        if b == 0.0 {
            tracing::trace!(c, "degenerate quadratic: no defined roots");
            return None;
        }
        res[rc] = -c / b;
        rc += 1;
    } else {
        let d = b * b - 4.0 * a * c;
        if d < 0.0 {
            return Some(0);
        }
        let d = d.sqrt();
        res[rc] = (-b + d) / (a * 2.0);
        rc += 1;
        if d != 0.0 {
            res[rc] = (-b - d) / (a * 2.0);
            rc += 1;
        }
    }

    Some(fix_roots(res, rc))
}

/// Solves `eqn[3]·t³ + eqn[2]·t² + eqn[1]·t + eqn[0] = 0`.
///
/// Falls back to [`solve_quadratic`] when the cubic coefficient is zero.
#[must_use]
#[allow(clippy::many_single_char_names, clippy::float_cmp)]
pub fn solve_cubic(eqn: &[f64; 4], res: &mut [f64; 3]) -> Option<usize> {
    let d = eqn[3];
    if d == 0.0 {
        return solve_quadratic(&[eqn[0], eqn[1], eqn[2]], res);
    }

    let a = eqn[2] / d;
    let b = eqn[1] / d;
    let c = eqn[0] / d;
    let mut rc = 0;

    let q = (a * a - 3.0 * b) / 9.0;
    let r = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) / 54.0;
    let q3 = q * q * q;
    let r2 = r * r;
    let n = -a / 3.0;

    if r2 < q3 {
        // Three distinct real roots.
        let t = (r / q3.sqrt()).acos() / 3.0;
        let p = 2.0 * PI / 3.0;
        let m = -2.0 * q.sqrt();
        res[0] = m * t.cos() + n;
        res[1] = m * (t + p).cos() + n;
        res[2] = m * (t - p).cos() + n;
        rc = 3;
    } else {
        let mut big_a = cbrt(r.abs() + (r2 - q3).sqrt());
        if r > 0.0 {
            big_a = -big_a;
        }
        if -ROOT_DELTA < big_a && big_a < ROOT_DELTA {
            res[rc] = n;
            rc += 1;
        } else {
            let big_b = q / big_a;
            res[rc] = big_a + big_b + n;
            rc += 1;
            let delta = r2 - q3;
            if -ROOT_DELTA < delta && delta < ROOT_DELTA {
                res[rc] = -(big_a + big_b) / 2.0 + n;
                rc += 1;
            }
        }
    }

    Some(fix_roots(res, rc))
}

/// Collapses roots lying within [`ROOT_DELTA`] of an earlier root.
///
/// Survivors keep their insertion order. Returns the new count.
fn fix_roots(res: &mut [f64; 3], rc: usize) -> usize {
    let mut tc = 0;
    for i in 0..rc {
        let root = res[i];
        if res[..tc].iter().any(|&kept| (kept - root).abs() < ROOT_DELTA) {
            continue;
        }
        res[tc] = root;
        tc += 1;
    }
    tc
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sorted(res: &[f64; 3], rc: usize) -> Vec<f64> {
        let mut roots = res[..rc].to_vec();
        roots.sort_by(f64::total_cmp);
        roots
    }

    /// Coefficients of `(t - r1)(t - r2)(t - r3)` in ascending order.
    fn cubic_from_roots(r1: f64, r2: f64, r3: f64) -> [f64; 4] {
        [
            -r1 * r2 * r3,
            r1 * r2 + r1 * r3 + r2 * r3,
            -(r1 + r2 + r3),
            1.0,
        ]
    }

    #[test]
    fn quadratic_two_roots() {
        // (t - 1)(t - 3) = t² - 4t + 3
        let mut res = [0.0; 3];
        let rc = solve_quadratic(&[3.0, -4.0, 1.0], &mut res).unwrap();
        assert_eq!(rc, 2);
        let roots = sorted(&res, rc);
        assert_abs_diff_eq!(roots[0], 1.0, epsilon = ROOT_DELTA);
        assert_abs_diff_eq!(roots[1], 3.0, epsilon = ROOT_DELTA);
    }

    #[test]
    fn quadratic_plus_root_comes_first() {
        let mut res = [0.0; 3];
        let rc = solve_quadratic(&[3.0, -4.0, 1.0], &mut res).unwrap();
        assert_eq!(rc, 2);
        assert_abs_diff_eq!(res[0], 3.0, epsilon = ROOT_DELTA);
        assert_abs_diff_eq!(res[1], 1.0, epsilon = ROOT_DELTA);
    }

    #[test]
    fn quadratic_double_root_is_emitted_once() {
        // (t - 2)² = t² - 4t + 4
        let mut res = [0.0; 3];
        let rc = solve_quadratic(&[4.0, -4.0, 1.0], &mut res).unwrap();
        assert_eq!(rc, 1);
        assert_abs_diff_eq!(res[0], 2.0, epsilon = ROOT_DELTA);
    }

    #[test]
    fn quadratic_no_real_roots() {
        let mut res = [0.0; 3];
        assert_eq!(solve_quadratic(&[1.0, 0.0, 1.0], &mut res), Some(0));
    }

    #[test]
    fn quadratic_linear_fallback() {
        let mut res = [0.0; 3];
        assert_eq!(solve_quadratic(&[-6.0, 2.0, 0.0], &mut res), Some(1));
        assert_abs_diff_eq!(res[0], 3.0);
    }

    #[test]
    fn quadratic_degenerate_is_distinct_from_no_roots() {
        let mut res = [0.0; 3];
        assert_eq!(solve_quadratic(&[5.0, 0.0, 0.0], &mut res), None);
        assert_eq!(solve_quadratic(&[0.0, 0.0, 0.0], &mut res), None);
    }

    #[test]
    fn cubic_three_roots() {
        let mut res = [0.0; 3];
        let rc = solve_cubic(&cubic_from_roots(-1.0, 0.5, 2.0), &mut res).unwrap();
        assert_eq!(rc, 3);
        let roots = sorted(&res, rc);
        assert_abs_diff_eq!(roots[0], -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[1], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[2], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic_scaled_leading_coefficient() {
        let eqn = cubic_from_roots(0.25, 0.5, 0.75).map(|c| c * -4.0);
        let mut res = [0.0; 3];
        let rc = solve_cubic(&eqn, &mut res).unwrap();
        let roots = sorted(&res, rc);
        assert_eq!(roots.len(), 3);
        assert_abs_diff_eq!(roots[0], 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[1], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[2], 0.75, epsilon = 1e-9);
    }

    #[test]
    fn cubic_single_real_root() {
        // (t - 2)(t² + 1) = t³ - 2t² + t - 2
        let mut res = [0.0; 3];
        let rc = solve_cubic(&[-2.0, 1.0, -2.0, 1.0], &mut res).unwrap();
        assert_eq!(rc, 1);
        assert_abs_diff_eq!(res[0], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic_negative_single_root_uses_signed_cube_root() {
        // t³ + 8 = 0
        let mut res = [0.0; 3];
        let rc = solve_cubic(&[8.0, 0.0, 0.0, 1.0], &mut res).unwrap();
        assert_eq!(rc, 1);
        assert_abs_diff_eq!(res[0], -2.0, epsilon = 1e-9);
        assert!(!res[0].is_nan());
    }

    #[test]
    fn cubic_double_root_collapses() {
        // (t - 1)²(t + 2) = t³ - 3t + 2
        let mut res = [0.0; 3];
        let rc = solve_cubic(&[2.0, -3.0, 0.0, 1.0], &mut res).unwrap();
        assert_eq!(rc, 2);
        let roots = sorted(&res, rc);
        assert_abs_diff_eq!(roots[0], -2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(roots[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic_triple_root_collapses_to_one() {
        // (t - 1)³ = t³ - 3t² + 3t - 1
        let mut res = [0.0; 3];
        let rc = solve_cubic(&[-1.0, 3.0, -3.0, 1.0], &mut res).unwrap();
        assert_eq!(rc, 1);
        assert_abs_diff_eq!(res[0], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn cubic_delegates_to_quadratic() {
        let mut res = [0.0; 3];
        assert_eq!(solve_cubic(&[3.0, -4.0, 1.0, 0.0], &mut res), Some(2));
        assert_eq!(solve_cubic(&[3.0, 0.0, 0.0, 0.0], &mut res), None);
    }

    #[test]
    fn fix_roots_keeps_first_occurrence() {
        let mut res = [1.0, 1.0 + ROOT_DELTA / 4.0, 2.0];
        let rc = fix_roots(&mut res, 3);
        assert_eq!(rc, 2);
        assert_abs_diff_eq!(res[0], 1.0);
        assert_abs_diff_eq!(res[1], 2.0);
    }
}
