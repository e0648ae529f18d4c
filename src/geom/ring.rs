use geo::{Coord, LineString, Point};

/// Ensure first and last vertex coincide, appending a copy of the first
/// vertex if they differ (exact coordinate equality, no epsilon).
/// Rings shorter than 2 vertices are left unchanged. Idempotent.
pub fn ensure_closed(ring: &mut LineString<f64>) {
    let coords = &mut ring.0;
    if coords.len() >= 2 && coords[0] != coords[coords.len() - 1] {
        let first = coords[0];
        coords.push(first);
    }
}

/// Even-odd ray-casting containment test.
///
/// Scans edges in order, wrapping from the last vertex back to the first,
/// so it works on both open and closed rings. Points exactly on an edge
/// have an undefined inside/outside result, which is inherent to the
/// algorithm and accepted here.
pub fn point_in_ring(ring: &LineString<f64>, lat: f64, lng: f64) -> bool {
    let coords = &ring.0;
    if coords.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = coords.len() - 1;
    for i in 0..coords.len() {
        let (xi, yi) = (coords[i].x, coords[i].y);
        let (xj, yj) = (coords[j].x, coords[j].y);
        if (yi > lat) != (yj > lat) && lng < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Shoelace-formula area-weighted centroid of a simple ring.
///
/// This is the geometric center, not the vertex average. Undefined for
/// degenerate (near-zero area) rings; callers must not pass those in.
pub fn centroid(ring: &LineString<f64>) -> Point<f64> {
    let coords = &ring.0;
    let mut area2 = 0.0; // twice the signed area
    let mut cx = 0.0;
    let mut cy = 0.0;

    for i in 0..coords.len() {
        let p = coords[i];
        let q = coords[(i + 1) % coords.len()];
        let cross = p.x * q.y - q.x * p.y;
        area2 += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }

    Point::new(cx / (3.0 * area2), cy / (3.0 * area2))
}

/// Signed shoelace area of a ring (wraps last vertex to first).
pub fn signed_area(ring: &LineString<f64>) -> f64 {
    let coords = &ring.0;
    let mut a = 0.0;
    for i in 0..coords.len() {
        let p = coords[i];
        let q = coords[(i + 1) % coords.len()];
        a += p.x * q.y - q.x * p.y;
    }
    a / 2.0
}

/// Convenience constructor for a ring from (lng, lat) pairs.
pub fn ring(coords: &[(f64, f64)]) -> LineString<f64> {
    LineString(coords.iter().map(|&(x, y)| Coord { x, y }).collect())
}
