use serde::{Deserialize, Serialize};

use super::{LatLng, NodeId};
use crate::constants::PLACEHOLDER;

/// One record of the point feed, before validation.
///
/// Every field is optional so that a single sparse or malformed record can be
/// inspected and rejected on its own instead of failing the whole batch.
/// The feed names the identifier either `asn` or `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPoint {
    #[serde(default, alias = "id")]
    pub asn: Option<NodeId>,
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub as_name: Option<String>,
    #[serde(default)]
    pub routes_count: Option<u32>,
}

/// A validated network node with a fixed geographic position.
///
/// Immutable after catalogue load. `route_count` is the number of routes the
/// feed says originate here; it is never recomputed (traversal counts are a
/// separate, selection-scoped statistic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: NodeId,
    pub coordinates: LatLng,
    pub name: String,
    pub ip: String,
    pub city: String,
    pub region: String,
    pub route_count: u32,
}

/// Why a point-feed record was dropped during catalogue load.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRejection {
    /// Position of the record in the feed.
    pub index: usize,
    pub id: Option<NodeId>,
    pub reason: String,
}

impl Point {
    /// Validate one raw feed record.
    ///
    /// # Errors
    ///
    /// Returns the reason the record is unusable: missing identifier, missing
    /// or malformed coordinates, or coordinates outside the valid
    /// latitude/longitude ranges.
    pub fn from_raw(raw: RawPoint) -> Result<Self, String> {
        let Some(id) = raw.asn else {
            return Err("missing asn".to_string());
        };

        let Some(coords) = raw.coordinates else {
            return Err("missing coordinates".to_string());
        };

        let [lat, lon] = coords[..] else {
            return Err(format!("expected [lat, lon], got {} values", coords.len()));
        };

        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude {lat} out of range"));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(format!("longitude {lon} out of range"));
        }

        Ok(Self {
            id,
            coordinates: (lat, lon),
            name: raw.as_name.unwrap_or_else(|| PLACEHOLDER.to_string()),
            ip: raw.ip.unwrap_or_else(|| PLACEHOLDER.to_string()),
            city: raw.city.unwrap_or_else(|| PLACEHOLDER.to_string()),
            region: raw.region.unwrap_or_else(|| PLACEHOLDER.to_string()),
            route_count: raw.routes_count.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(asn: Option<NodeId>, coordinates: Option<Vec<f64>>) -> RawPoint {
        RawPoint {
            asn,
            coordinates,
            ip: None,
            city: None,
            region: None,
            as_name: None,
            routes_count: None,
        }
    }

    #[test]
    fn test_valid_point_round_trips_coordinates() {
        let point = Point::from_raw(raw(Some(3356), Some(vec![48.1, 11.5]))).expect("valid");

        assert_eq!(point.id, 3356);
        assert_eq!(point.coordinates, (48.1, 11.5));
        assert_eq!(point.route_count, 0);
    }

    #[test]
    fn test_metadata_defaults_to_placeholder() {
        let point = Point::from_raw(raw(Some(1), Some(vec![0.0, 0.0]))).expect("valid");

        assert_eq!(point.name, PLACEHOLDER);
        assert_eq!(point.ip, PLACEHOLDER);
        assert_eq!(point.city, PLACEHOLDER);
        assert_eq!(point.region, PLACEHOLDER);
    }

    #[test]
    fn test_missing_asn_rejected() {
        let err = Point::from_raw(raw(None, Some(vec![0.0, 0.0]))).expect_err("must fail");
        assert!(err.contains("asn"));
    }

    #[test]
    fn test_missing_coordinates_rejected() {
        let err = Point::from_raw(raw(Some(1), None)).expect_err("must fail");
        assert!(err.contains("coordinates"));
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let err = Point::from_raw(raw(Some(1), Some(vec![10.0]))).expect_err("must fail");
        assert!(err.contains("1 values"));
    }

    #[test]
    fn test_latitude_out_of_range_rejected() {
        let err = Point::from_raw(raw(Some(1), Some(vec![91.0, 0.0]))).expect_err("must fail");
        assert!(err.contains("latitude"));
    }

    #[test]
    fn test_longitude_out_of_range_rejected() {
        let err = Point::from_raw(raw(Some(1), Some(vec![0.0, -180.5]))).expect_err("must fail");
        assert!(err.contains("longitude"));
    }

    #[test]
    fn test_boundary_coordinates_accepted() {
        assert!(Point::from_raw(raw(Some(1), Some(vec![-90.0, 180.0]))).is_ok());
        assert!(Point::from_raw(raw(Some(2), Some(vec![90.0, -180.0]))).is_ok());
    }

    #[test]
    fn test_id_alias_accepted() {
        let value = serde_json::json!({ "id": 174, "coordinates": [40.7, -74.0] });
        let raw: RawPoint = serde_json::from_value(value).expect("deserialize");
        assert_eq!(raw.asn, Some(174));
    }
}
