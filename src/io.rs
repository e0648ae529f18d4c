use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::build::build_villages;
use crate::config::BuildConfig;
use crate::village::Village;

/// Build the village dataset from raw GeoJSON bytes.
///
/// Only a JSON syntax error surfaces here; everything past parsing follows
/// the builder's silent-degradation contract.
pub fn villages_from_slice(bytes: &[u8], config: &BuildConfig) -> Result<Vec<Village>> {
    let doc: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;
    Ok(build_villages(&doc, config))
}

/// Serialize villages to a GeoJSON FeatureCollection for the render layer.
/// Each village becomes one Polygon feature with `id` and `name` properties.
pub fn villages_to_geojson_bytes(villages: &[Village]) -> Result<Vec<u8>> {
    let features: Vec<Value> = villages
        .iter()
        .map(|village| {
            let ring: Vec<Vec<f64>> = village.ring.coords().map(|c| vec![c.x, c.y]).collect();
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [ring],
                },
                "properties": {
                    "id": village.id,
                    "name": village.name,
                },
            })
        })
        .collect();

    let collection = json!({
        "type": "FeatureCollection",
        "features": features,
    });

    serde_json::to_vec(&collection).context("Failed to serialize GeoJSON to bytes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ring;

    #[test]
    fn syntax_errors_surface() {
        assert!(villages_from_slice(b"{not json", &BuildConfig::default()).is_err());
    }

    #[test]
    fn valid_document_without_features_is_empty_not_an_error() {
        let villages = villages_from_slice(br#"{"type":"FeatureCollection"}"#, &BuildConfig::default())
            .expect("valid JSON");
        assert!(villages.is_empty());
    }

    #[test]
    fn geojson_output_carries_id_name_and_ring() {
        let villages = vec![Village {
            id: "piti".into(),
            name: "Piti".into(),
            ring: ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]),
        }];
        let bytes = villages_to_geojson_bytes(&villages).unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(doc["type"], "FeatureCollection");
        let feature = &doc["features"][0];
        assert_eq!(feature["properties"]["id"], "piti");
        assert_eq!(feature["properties"]["name"], "Piti");
        assert_eq!(feature["geometry"]["type"], "Polygon");
        assert_eq!(feature["geometry"]["coordinates"][0][1], json!([1.0, 0.0]));
    }
}
