use geo::Coord;

/// An axis-aligned bounding box in lng/lat degrees (x = longitude).
///
/// The empty box is represented inverted (+inf mins, -inf maxes) so that
/// folding vertices into it needs no special case. Callers must check
/// `is_empty` before feeding a box into area math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    /// The inverted (empty) box: folding any vertex into it yields that vertex.
    pub const EMPTY: BBox = BBox {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Compute the bounding box of a ring in a single pass.
    /// An empty ring yields `BBox::EMPTY`.
    pub fn of_ring(ring: &[Coord<f64>]) -> Self {
        ring.iter().fold(Self::EMPTY, |b, c| Self {
            min_x: b.min_x.min(c.x),
            min_y: b.min_y.min(c.y),
            max_x: b.max_x.max(c.x),
            max_y: b.max_y.max(c.y),
        })
    }

    /// Returns true for the inverted/degenerate box.
    #[inline]
    pub fn is_empty(&self) -> bool { self.min_x > self.max_x || self.min_y > self.max_y }

    /// Box area in square degrees; zero (never negative) for degenerate boxes.
    #[inline]
    pub fn area(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0) * (self.max_y - self.min_y).max(0.0)
    }

    /// Area of the rectangle intersection with `other`; zero when the boxes
    /// are disjoint on either axis.
    pub fn intersection_area(&self, other: &BBox) -> f64 {
        let w = self.max_x.min(other.max_x) - self.min_x.max(other.min_x);
        let h = self.max_y.min(other.max_y) - self.min_y.max(other.min_y);
        w.max(0.0) * h.max(0.0)
    }
}
