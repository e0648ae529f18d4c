#![doc = "Village boundary geometry pipeline: raw GeoJSON administrative \
boundaries in, canonical village polygons and point-in-village queries out."]
mod build;
mod clip;
mod config;
mod geom;
mod io;
mod locate;
mod names;
mod select;
mod village;

#[doc(inline)]
pub use build::build_villages;

#[doc(inline)]
pub use clip::clip_to_coastline;

#[doc(inline)]
pub use config::BuildConfig;

#[doc(inline)]
pub use geom::{BBox, centroid, ensure_closed, point_in_ring, ring, signed_area};

#[doc(inline)]
pub use io::{villages_from_slice, villages_to_geojson_bytes};

#[doc(inline)]
pub use locate::{ACCURACY_LIMIT_METERS, locate, locate_trusted};

#[doc(inline)]
pub use names::{display_name, slug};

#[doc(inline)]
pub use select::select_best_ring;

#[doc(inline)]
pub use village::Village;
