//! Scalar helpers: rounding, interpolation, angle normalization.
//!
//! Angles are in radians unless a function says otherwise.
use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use super::EPSILON;

/// Rounds to the nearest integer, halves away from zero.
///
/// Values outside the `i32` range saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Floor of `v` as an integer, without going through `f64::floor`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn ifloor(v: f64) -> i32 {
    let iv = v as i32;
    if v >= 0.0 || f64::from(iv) == v || iv == i32::MIN {
        iv
    } else {
        iv - 1
    }
}

/// Ceiling of `v` as an integer, without going through `f64::ceil`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn iceil(v: f64) -> i32 {
    let iv = v as i32;
    if v <= 0.0 || f64::from(iv) == v || iv == i32::MAX {
        iv
    } else {
        iv + 1
    }
}

/// Clamps `v` to `[lower, upper]`.
///
/// Unlike `f64::clamp` this never panics when `lower > upper`; `lower` wins.
#[must_use]
pub fn clamp(v: f64, lower: f64, upper: f64) -> f64 {
    if v < lower {
        lower
    } else if v > upper {
        upper
    } else {
        v
    }
}

/// Rounds `v` to the nearest multiple of `target`.
#[must_use]
pub fn round_nearest(v: f64, target: f64) -> f64 {
    let target = target.abs();
    if v >= 0.0 {
        target * ((v + 0.5 * target) / target).floor()
    } else {
        target * ((v - 0.5 * target) / target).ceil()
    }
}

/// Returns true if `v` lies in `[lower, upper]`.
#[must_use]
pub fn is_within(v: f64, lower: f64, upper: f64) -> bool {
    (lower..=upper).contains(&v)
}

/// Linear interpolation between `v1` and `v2`.
#[must_use]
pub fn lerp(v1: f64, v2: f64, t: f64) -> f64 {
    v1 + t * (v2 - v1)
}

/// Interpolates between two angles in `[-π, π]` along the shorter way around.
#[must_use]
pub fn lerpa(a1: f64, a2: f64, t: f64) -> f64 {
    let ma1 = mirror_angle(a1);
    let ma2 = mirror_angle(a2);
    let d = (a2 - a1).abs();
    let md = (ma1 - ma2).abs();
    if d <= md {
        lerp(a1, a2, t)
    } else {
        mirror_angle(lerp(ma1, ma2, t))
    }
}

/// Returns true if the two values differ by less than [`EPSILON`].
#[must_use]
pub fn epsilon_equals(v1: f64, v2: f64) -> bool {
    (v1 - v2).abs() < EPSILON
}

/// Shortest distance between two angles in `[-π, π]`.
#[must_use]
pub fn angular_distance(a1: f64, a2: f64) -> f64 {
    let ma1 = mirror_angle(a1);
    let ma2 = mirror_angle(a2);
    (a1 - a2).abs().min((ma1 - ma2).abs())
}

/// Shortest signed difference between two angles in `[-π, π]`.
#[must_use]
pub fn angular_difference(a1: f64, a2: f64) -> f64 {
    let ma1 = mirror_angle(a1);
    let ma2 = mirror_angle(a2);
    let diff = a1 - a2;
    let mdiff = ma2 - ma1;
    if diff.abs() < mdiff.abs() {
        diff
    } else {
        mdiff
    }
}

/// Normalizes an angle into `[-π, π)`.
#[must_use]
pub fn normalize_angle(mut a: f64) -> f64 {
    while a < -PI {
        a += TAU;
    }
    while a >= PI {
        a -= TAU;
    }
    a
}

/// Normalizes an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle_positive(mut a: f64) -> f64 {
    while a < 0.0 {
        a += TAU;
    }
    while a >= TAU {
        a -= TAU;
    }
    a
}

/// Mirrors an angle in `[-π, π]` around the y-axis.
#[must_use]
pub fn mirror_angle(a: f64) -> f64 {
    (if a > 0.0 { PI } else { -PI }) - a
}

/// Signed cube root. Zero and non-finite values pass through unchanged.
#[must_use]
pub fn cbrt(a: f64) -> f64 {
    if a == 0.0 || !a.is_finite() {
        a
    } else {
        a.cbrt()
    }
}

/// Formats `value` with an explicit sign, truncated to `decimal_places`.
///
/// Trailing zeros are trimmed down to a single decimal digit:
/// `format_value(1.0, 3) == "+1.0"`, `format_value(-PI, 3) == "-3.141"`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn format_value(value: f64, decimal_places: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }

    let mut buf = String::new();
    let mut value = if value >= 0.0 {
        buf.push('+');
        value
    } else {
        buf.push('-');
        -value
    };

    let mut ivalue = value as i64;
    let _ = write!(buf, "{ivalue}");
    if decimal_places == 0 {
        return buf;
    }

    buf.push('.');
    for _ in 0..decimal_places {
        value = (value - ivalue as f64) * 10.0;
        ivalue = value as i64;
        let _ = write!(buf, "{ivalue}");
    }

    let mut end = buf.len();
    for _ in 0..decimal_places - 1 {
        if buf.as_bytes()[end - 1] == b'0' {
            end -= 1;
        } else {
            break;
        }
    }
    buf.truncate(end);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8};

    #[test]
    fn ifloor_and_iceil() {
        assert_eq!(ifloor(1.5), 1);
        assert_eq!(ifloor(-1.5), -2);
        assert_eq!(ifloor(-2.0), -2);
        assert_eq!(iceil(1.5), 2);
        assert_eq!(iceil(-1.5), -1);
        assert_eq!(iceil(3.0), 3);
        assert_eq!(iceil(100.0 / 90.0), 2);
    }

    #[test]
    fn round_halves_away_from_zero() {
        assert_eq!(round(2.5), 3);
        assert_eq!(round(-2.5), -3);
        assert_eq!(round(0.4), 0);
    }

    #[test]
    fn round_nearest_multiple() {
        assert_abs_diff_eq!(round_nearest(7.0, 5.0), 5.0);
        assert_abs_diff_eq!(round_nearest(8.0, 5.0), 10.0);
        assert_abs_diff_eq!(round_nearest(-8.0, 5.0), -10.0);
    }

    #[test]
    fn lerpa_takes_shortest_route() {
        assert_abs_diff_eq!(lerpa(FRAC_PI_4, -FRAC_PI_4, 0.25), FRAC_PI_8, epsilon = EPSILON);
        assert_abs_diff_eq!(lerpa(FRAC_PI_4, -FRAC_PI_4, 0.75), -FRAC_PI_8, epsilon = EPSILON);
        assert_abs_diff_eq!(lerpa(-FRAC_PI_4, FRAC_PI_4, 0.25), -FRAC_PI_8, epsilon = EPSILON);
        assert_abs_diff_eq!(lerpa(3.0 * FRAC_PI_4, FRAC_PI_4, 0.5), FRAC_PI_2, epsilon = EPSILON);
        assert_abs_diff_eq!(lerpa(-3.0 * FRAC_PI_4, -FRAC_PI_4, 0.5), -FRAC_PI_2, epsilon = EPSILON);
        assert_abs_diff_eq!(lerpa(3.0 * FRAC_PI_4, -3.0 * FRAC_PI_4, 0.5), -PI, epsilon = EPSILON);
    }

    #[test]
    fn angle_normalization() {
        assert_abs_diff_eq!(normalize_angle(3.0 * FRAC_PI_2), -FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(-FRAC_PI_2), -FRAC_PI_2);
        assert_abs_diff_eq!(normalize_angle_positive(-FRAC_PI_2), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(angular_distance(3.0, -3.0), TAU - 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angular_difference(0.5, 0.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn cbrt_of_negative_is_negative() {
        assert_abs_diff_eq!(cbrt(-27.0), -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cbrt(8.0), 2.0, epsilon = 1e-12);
        assert!(cbrt(f64::INFINITY).is_infinite());
    }

    #[test]
    fn clamp_and_within() {
        assert_abs_diff_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_abs_diff_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert!(is_within(0.5, 0.0, 1.0));
        assert!(!is_within(1.5, 0.0, 1.0));
        assert!(epsilon_equals(1.0, 1.0 + EPSILON / 2.0));
    }

    #[test]
    fn format_value_places() {
        assert_eq!(format_value(1.0, 3), "+1.0");
        assert_eq!(format_value(-1.0, 3), "-1.0");
        assert_eq!(format_value(PI, 3), "+3.141");
        assert_eq!(format_value(-PI, 3), "-3.141");
        assert_eq!(format_value(PI, 5), "+3.14159");
        assert_eq!(format_value(2.0, 0), "+2");
        assert_eq!(format_value(f64::NAN, 3), "NaN");
    }
}
