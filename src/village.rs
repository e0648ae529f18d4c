use geo::LineString;

use crate::geom::point_in_ring;

/// One canonical village: slug id, corrected display name, and a single
/// closed outer ring in `[lng, lat]` order. Built once per source document
/// load and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Village {
    pub id: String,
    pub name: String,
    pub ring: LineString<f64>,
}

impl Village {
    /// Ray-casting containment test against this village's ring.
    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        point_in_ring(&self.ring, lat, lng)
    }
}
