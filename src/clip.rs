use std::panic::{AssertUnwindSafe, catch_unwind};

use geo::{BooleanOps, LineString, MultiPolygon, Polygon};

use crate::geom::{BBox, ensure_closed};
use crate::select::select_best_ring;

/// Clip a village ring against the reference coastline polygon to remove
/// ocean overshoot from imprecise source boundaries.
///
/// Clipping is a best-effort refinement: an empty intersection or any
/// failure of the boolean operation falls back to the original ring,
/// coordinates untouched. A MultiPolygon intersection (village straddling
/// an inlet or narrow channel) is resolved with the same overlap-then-area
/// tie-break as fragment selection, against `window`.
pub fn clip_to_coastline(
    ring: &LineString<f64>,
    coastline: &Polygon<f64>,
    window: &BBox,
) -> LineString<f64> {
    let mut closed = ring.clone();
    ensure_closed(&mut closed);
    if closed.0.len() < 4 {
        return ring.clone();
    }
    let village = Polygon::new(closed, Vec::new());

    // The boolean ops implementation can panic on degenerate or
    // self-intersecting input; treat that the same as an empty result.
    let pieces: MultiPolygon<f64> =
        match catch_unwind(AssertUnwindSafe(|| village.intersection(coastline))) {
            Ok(pieces) => pieces,
            Err(_) => {
                log::debug!("coastline intersection failed, keeping unclipped ring");
                return ring.clone();
            }
        };

    if pieces.0.is_empty() {
        return ring.clone();
    }

    let exteriors: Vec<LineString<f64>> = pieces
        .0
        .into_iter()
        .map(|piece| piece.into_inner().0)
        .collect();
    select_best_ring(exteriors, window).unwrap_or_else(|| ring.clone())
}
