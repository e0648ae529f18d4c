use geo::LineString;

use crate::geom::BBox;

/// Pick the candidate ring that best represents the real village.
///
/// A source feature may be a MultiPolygon carrying the village itself plus
/// offshore islets or cartographic artifacts. The winner is the ring whose
/// bounding box has the largest *absolute* overlap area with the reference
/// window; overlap ties go to the larger own bbox area, and remaining ties
/// to the earliest candidate (stable left-to-right scan, strict `>`).
///
/// Absolute overlap matters: a tiny islet sitting fully inside the window
/// would win any overlap-fraction score, but its absolute overlap is small
/// compared to a large village ring that only partially overlaps.
pub fn select_best_ring(candidates: Vec<LineString<f64>>, window: &BBox) -> Option<LineString<f64>> {
    let mut best: Option<(f64, f64, LineString<f64>)> = None;

    for ring in candidates {
        let bbox = BBox::of_ring(&ring.0);
        let overlap = bbox.intersection_area(window);
        let area = bbox.area();

        let better = match &best {
            None => true,
            Some((best_overlap, best_area, _)) => {
                overlap > *best_overlap || (overlap == *best_overlap && area > *best_area)
            }
        };
        if better {
            best = Some((overlap, area, ring));
        }
    }

    best.map(|(_, _, ring)| ring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ring;

    fn window() -> BBox {
        BBox::new(0.0, 0.0, 10.0, 10.0)
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> LineString<f64> {
        ring(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)])
    }

    #[test]
    fn empty_candidates_select_nothing() {
        assert!(select_best_ring(Vec::new(), &window()).is_none());
    }

    #[test]
    fn single_candidate_wins() {
        let r = rect(1.0, 1.0, 2.0, 2.0);
        assert_eq!(select_best_ring(vec![r.clone()], &window()), Some(r));
    }

    #[test]
    fn larger_overlap_wins() {
        let small = rect(0.0, 0.0, 1.0, 1.0); // overlap 1
        let large = rect(0.0, 0.0, 5.0, 5.0); // overlap 25
        let got = select_best_ring(vec![small, large.clone()], &window());
        assert_eq!(got, Some(large));
    }

    #[test]
    fn overlap_tie_broken_by_own_area() {
        // Both overlap the window by 10; b's own bbox is far larger.
        let a = rect(0.0, 0.0, 5.0, 2.0); // overlap 10, area 10
        let b = rect(0.0, 8.0, 5.0, 18.0); // overlap 10, area 50
        let got = select_best_ring(vec![a, b.clone()], &window());
        assert_eq!(got, Some(b));
    }

    #[test]
    fn absolute_overlap_beats_full_containment_fraction() {
        // The islet overlaps at 100% of its own area (1); the village ring
        // overlaps at only ~6% of its area but 25 in absolute terms.
        let islet = rect(1.0, 1.0, 2.0, 2.0);
        let village = rect(5.0, 5.0, 25.0, 25.0);
        let got = select_best_ring(vec![islet, village.clone()], &window());
        assert_eq!(got, Some(village));
    }

    #[test]
    fn full_tie_keeps_first_candidate() {
        let a = rect(0.0, 0.0, 4.0, 4.0);
        let b = rect(2.0, 2.0, 6.0, 6.0); // same overlap (16) and area (16)
        let got = select_best_ring(vec![a.clone(), b], &window());
        assert_eq!(got, Some(a));
    }
}
