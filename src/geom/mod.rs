mod bbox;
mod ring;

pub use bbox::BBox;
pub use ring::{centroid, ensure_closed, point_in_ring, ring, signed_area};
