use indexmap::IndexMap;
use serde_json::Value;

use crate::models::{NodeId, Point, PointRejection, RawPoint};

/// In-memory index of every valid point in the feed, keyed by node id.
///
/// Built once per session from the point feed and immutable afterwards.
/// Iteration order is the insertion order of valid records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoCatalogue {
    points: IndexMap<NodeId, Point>,
}

impl GeoCatalogue {
    /// Build the catalogue from raw feed records.
    ///
    /// Each record is parsed and validated on its own; the ones that fail are
    /// dropped and reported alongside the catalogue with the record index and
    /// the reason. A bad record never aborts the load. The first record for a
    /// given id wins; later duplicates are rejected.
    #[must_use]
    pub fn load(raw_points: &[Value]) -> (Self, Vec<PointRejection>) {
        let mut points = IndexMap::new();
        let mut rejections = Vec::new();

        for (index, value) in raw_points.iter().enumerate() {
            let parsed = serde_json::from_value::<RawPoint>(value.clone())
                .map_err(|e| (None, e.to_string()))
                .and_then(|raw| {
                    let id = raw.asn;
                    Point::from_raw(raw).map_err(|reason| (id, reason))
                });

            match parsed {
                Ok(point) => {
                    if points.contains_key(&point.id) {
                        rejections.push(PointRejection {
                            index,
                            id: Some(point.id),
                            reason: format!("duplicate asn {}", point.id),
                        });
                    } else {
                        points.insert(point.id, point);
                    }
                }
                Err((id, reason)) => rejections.push(PointRejection { index, id, reason }),
            }
        }

        (Self { points }, rejections)
    }

    #[must_use]
    pub fn lookup(&self, node_id: NodeId) -> Option<&Point> {
        self.points.get(&node_id)
    }

    /// All valid points, in feed order.
    pub fn all(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
