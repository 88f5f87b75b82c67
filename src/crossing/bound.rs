//! Bound records collected while testing a curve against a horizontal band.
use super::Crossing;

/// A curve sample at parameter `t`, relative to the curve's start point.
///
/// `id` tags where the sample came from. Roots on the same band edge share an
/// id, extrema and endpoints get their own. A sign change between two samples
/// with the same id does not prove the curve passes through the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bound {
    pub(crate) t: f64,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) id: u8,
}

/// Classifies collected bounds against the band `[py1, py2]`.
///
/// Returns `None` when the bounds alone cannot decide and the caller has to
/// fall back to ray counting.
pub(crate) fn cross_bound(bound: &mut [Bound], py1: f64, py2: f64) -> Option<Crossing> {
    if bound.is_empty() {
        return Some(Crossing::Count(0));
    }

    let mut up = 0;
    let mut down = 0;
    for b in bound.iter() {
        if b.y < py1 {
            up += 1;
        } else if b.y > py2 {
            down += 1;
        } else {
            return Some(Crossing::Boundary);
        }
    }

    if down == 0 {
        return Some(Crossing::Count(0));
    }

    if up != 0 {
        // Stable: samples with equal t keep the order they were collected in.
        bound.sort_by(|a, b| a.t.total_cmp(&b.t));
        let mut sign = bound[0].y > py2;
        for pair in bound.windows(2) {
            let sign2 = pair[1].y > py2;
            if sign != sign2 && pair[1].id != pair[0].id {
                tracing::trace!(from = pair[0].id, to = pair[1].id, "band crossed between bounds");
                return Some(Crossing::Boundary);
            }
            sign = sign2;
        }
    }

    tracing::trace!(up, down, "band crossing undecided by bounds");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(t: f64, y: f64, id: u8) -> Bound {
        Bound { t, x: 0.0, y, id }
    }

    #[test]
    fn empty_bounds_do_not_cross() {
        assert_eq!(cross_bound(&mut [], 0.0, 1.0), Some(Crossing::Count(0)));
    }

    #[test]
    fn bound_inside_band_is_boundary() {
        let mut bounds = [b(0.1, -5.0, 0), b(0.5, 0.5, 1)];
        assert_eq!(cross_bound(&mut bounds, 0.0, 1.0), Some(Crossing::Boundary));
    }

    #[test]
    fn everything_above_band_is_zero() {
        let mut bounds = [b(0.1, -5.0, 0), b(0.5, -2.0, 1)];
        assert_eq!(cross_bound(&mut bounds, 0.0, 1.0), Some(Crossing::Count(0)));
    }

    #[test]
    fn sign_change_between_different_ids_is_boundary() {
        // Unsorted on purpose: sorting by t puts the above/below pair adjacent.
        let mut bounds = [b(0.9, 5.0, 1), b(0.2, -5.0, 0)];
        assert_eq!(cross_bound(&mut bounds, 0.0, 1.0), Some(Crossing::Boundary));
    }

    #[test]
    fn sign_change_on_one_band_edge_is_undecided() {
        // Two roots of the same edge, x differing only by rounding.
        let mut bounds = [
            Bound { t: 0.2, x: 1.0, y: -5.0, id: 0 },
            Bound { t: 0.9, x: 1.0 + 1e-15, y: 5.0, id: 0 },
        ];
        assert_eq!(cross_bound(&mut bounds, 0.0, 1.0), None);
    }

    #[test]
    fn only_below_is_undecided() {
        let mut bounds = [b(0.2, 5.0, 0), b(0.9, 6.0, 1)];
        assert_eq!(cross_bound(&mut bounds, 0.0, 1.0), None);
    }

    #[test]
    fn equal_t_keeps_collection_order() {
        // Kept order: the below-band sample with id 0 follows the id 0 sample
        // above the band, so no differing-id sign change is seen.
        let mut bounds = [b(0.5, 5.0, 0), b(0.5, 6.0, 1), b(0.2, -5.0, 0)];
        assert_eq!(cross_bound(&mut bounds, 0.0, 1.0), None);
        assert_eq!(bounds.map(|s| s.id), [0, 0, 1]);

        let mut swapped = [b(0.5, 6.0, 1), b(0.5, 5.0, 0), b(0.2, -5.0, 0)];
        assert_eq!(cross_bound(&mut swapped, 0.0, 1.0), Some(Crossing::Boundary));
    }
}
