use geo::{Coord, LineString, Polygon};
use serde_json::Value;

use crate::clip::clip_to_coastline;
use crate::config::BuildConfig;
use crate::geom::ensure_closed;
use crate::names::{display_name, slug};
use crate::select::select_best_ring;
use crate::village::Village;

/// Geometry of one boundary feature, reduced to the outer rings the
/// pipeline cares about. Unknown geometry types land in `Unsupported` so
/// the builder handles them with an explicit branch instead of a silent
/// null somewhere downstream.
enum BoundaryGeometry {
    /// Outer ring of a Polygon, if usable.
    Polygon(Option<LineString<f64>>),
    /// Outer ring of each usable MultiPolygon member.
    MultiPolygon(Vec<LineString<f64>>),
    /// Point, LineString, etc., or a missing type tag.
    Unsupported,
}

/// Build the canonical village dataset from a parsed GeoJSON document.
///
/// Never fails: a missing or malformed feature list yields an empty result,
/// and any feature that cannot be used (no name, no geometry, wrong type,
/// no usable rings) is dropped without affecting its siblings. Villages are
/// emitted in input feature order; duplicate ids are kept as-is and only
/// logged, since source data is expected to be locally unique.
pub fn build_villages(doc: &Value, config: &BuildConfig) -> Vec<Village> {
    let Some(features) = doc.get("features").and_then(Value::as_array) else {
        log::debug!("document carries no feature list, emitting no villages");
        return Vec::new();
    };

    let coastline = find_coastline(features, &config.landmass_label);
    if coastline.is_none() {
        log::debug!("no usable coastline reference, rings stay unclipped");
    }

    let mut villages: Vec<Village> = Vec::new();
    for feature in features {
        let Some(name) = feature_name(feature) else { continue };
        if name == config.landmass_label || name == config.country_label {
            continue;
        }
        let Some(geometry) = feature.get("geometry") else { continue };

        let candidates = match parse_geometry(geometry) {
            BoundaryGeometry::Polygon(outer) => outer.into_iter().collect(),
            BoundaryGeometry::MultiPolygon(outers) => outers,
            BoundaryGeometry::Unsupported => {
                log::debug!("skipping feature {name}: unsupported geometry type");
                continue;
            }
        };
        let Some(selected) = select_best_ring(candidates, &config.reference_window) else {
            log::debug!("skipping feature {name}: no usable outer rings");
            continue;
        };

        let ring = match &coastline {
            Some(coast) => clip_to_coastline(&selected, coast, &config.reference_window),
            None => selected,
        };

        let id = slug(name);
        if villages.iter().any(|v| v.id == id) {
            log::warn!("duplicate village id {id:?} in source data");
        }
        villages.push(Village { id, name: display_name(name), ring });
    }

    log::debug!("built {} villages from {} features", villages.len(), features.len());
    villages
}

/// Locate the coastline reference: the first feature named after the
/// landmass whose geometry is a single Polygon. Any parse failure leaves
/// the reference absent and clipping disabled for the whole run.
fn find_coastline(features: &[Value], landmass_label: &str) -> Option<Polygon<f64>> {
    let feature = features.iter().find(|f| {
        feature_name(f) == Some(landmass_label)
            && f.pointer("/geometry/type").and_then(Value::as_str) == Some("Polygon")
    })?;
    let outer = parse_outer_ring(feature.pointer("/geometry/coordinates")?)?;
    Some(Polygon::new(outer, Vec::new()))
}

fn feature_name(feature: &Value) -> Option<&str> {
    feature.pointer("/properties/name").and_then(Value::as_str)
}

fn parse_geometry(geometry: &Value) -> BoundaryGeometry {
    let coordinates = geometry.get("coordinates");
    match geometry.get("type").and_then(Value::as_str) {
        Some("Polygon") => {
            BoundaryGeometry::Polygon(coordinates.and_then(parse_outer_ring))
        }
        Some("MultiPolygon") => {
            let outers = coordinates
                .and_then(Value::as_array)
                .map(|parts| parts.iter().filter_map(parse_outer_ring).collect())
                .unwrap_or_default();
            BoundaryGeometry::MultiPolygon(outers)
        }
        _ => BoundaryGeometry::Unsupported,
    }
}

/// Parse the outer ring of one GeoJSON polygon coordinate array, enforcing
/// closure. Returns `None` for anything without at least three distinct
/// vertices or with non-numeric coordinates.
fn parse_outer_ring(rings: &Value) -> Option<LineString<f64>> {
    let outer = rings.as_array()?.first()?.as_array()?;

    let mut coords = Vec::with_capacity(outer.len() + 1);
    for pair in outer {
        let pair = pair.as_array()?;
        if pair.len() < 2 {
            return None;
        }
        coords.push(Coord { x: pair[0].as_f64()?, y: pair[1].as_f64()? });
    }

    let mut ring = LineString(coords);
    ensure_closed(&mut ring);
    if ring.0.len() < 4 {
        return None;
    }
    Some(ring)
}
