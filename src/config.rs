use crate::geom::BBox;

/// Tunable inputs of the village builder.
///
/// The reference window approximates the main landmass and disambiguates
/// which MultiPolygon fragment is the real village; the labels identify the
/// non-village administrative features present in open boundary datasets.
/// These are geography-specific data, so they live here rather than in the
/// selection logic.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Approximate extent of the main island, lng/lat degrees.
    pub reference_window: BBox,
    /// `properties.name` of the landmass feature (doubles as the coastline
    /// reference when its geometry is a single Polygon).
    pub landmass_label: String,
    /// `properties.name` of the encompassing-country feature.
    pub country_label: String,
}

impl Default for BuildConfig {
    /// Constants tuned for Guam's geography.
    fn default() -> Self {
        Self {
            reference_window: BBox::new(144.62, 13.23, 145.01, 13.71),
            landmass_label: "Guam".to_owned(),
            country_label: "United States".to_owned(),
        }
    }
}
