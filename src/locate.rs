use crate::village::Village;

/// Reported device accuracy beyond which a locate result is not trusted.
/// Coarse IP-based geolocation should never force a village selection.
pub const ACCURACY_LIMIT_METERS: f64 = 1200.0;

/// Find the village containing the given point, if any.
///
/// Scans in dataset order and returns the first containing village.
/// Correctly built administrative boundaries do not overlap, but the
/// contract does not assume exclusivity: first containment wins and the
/// scan stops there. `None` (offshore, unmapped area) is a normal outcome.
pub fn locate(villages: &[Village], lat: f64, lng: f64) -> Option<&Village> {
    villages.iter().find(|village| village.contains(lat, lng))
}

/// Locate, gated on the fix's reported accuracy: fixes coarser than
/// [`ACCURACY_LIMIT_METERS`] yield `None` without consulting the dataset.
pub fn locate_trusted(
    villages: &[Village],
    lat: f64,
    lng: f64,
    accuracy_meters: f64,
) -> Option<&Village> {
    if accuracy_meters > ACCURACY_LIMIT_METERS {
        return None;
    }
    locate(villages, lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ring;

    fn villages() -> Vec<Village> {
        vec![
            Village {
                id: "piti".into(),
                name: "Piti".into(),
                ring: ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]),
            },
            Village {
                id: "yona".into(),
                name: "Yona".into(),
                ring: ring(&[(6.0, 6.0), (9.0, 6.0), (9.0, 9.0), (6.0, 9.0), (6.0, 6.0)]),
            },
        ]
    }

    #[test]
    fn finds_the_containing_village() {
        let vs = villages();
        let got = locate(&vs, 7.0, 7.0).expect("point lies inside yona");
        assert_eq!(got.id, "yona");
    }

    #[test]
    fn first_containment_wins_in_dataset_order() {
        // Overlapping rings should not occur in clean boundary data, but
        // when they do, the earlier village wins and the scan stops.
        let overlapping = vec![
            Village {
                id: "piti".into(),
                name: "Piti".into(),
                ring: ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]),
            },
            Village {
                id: "asan".into(),
                name: "Asan-Maina".into(),
                ring: ring(&[(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0), (2.0, 2.0)]),
            },
        ];
        assert_eq!(
            locate(&overlapping, 3.0, 3.0).map(|v| v.id.as_str()),
            Some("piti")
        );
    }

    #[test]
    fn offshore_point_locates_nowhere() {
        let vs = villages();
        assert!(locate(&vs, 5.0, 5.0).is_none());
        assert!(locate(&[], 2.0, 2.0).is_none());
    }

    #[test]
    fn coarse_fixes_are_not_trusted() {
        let vs = villages();
        assert!(locate_trusted(&vs, 7.0, 7.0, 5000.0).is_none());
        assert_eq!(
            locate_trusted(&vs, 7.0, 7.0, 30.0).map(|v| v.id.as_str()),
            Some("yona")
        );
    }
}
