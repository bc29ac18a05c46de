use serde::{Deserialize, Serialize};

use crate::models::{LatLng, NodeId};

/// One renderable polyline (a whole path or a single segment, depending on
/// the deduplication policy in force).
///
/// `id` is the identity key used for deduplication; it doubles as the handle
/// the rendering collaborator passes back on click. The route back-links are
/// sufficient to answer "which path does this represent" and "which
/// timestamp does this correspond to".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPrimitive {
    pub id: String,
    pub coordinates: Vec<LatLng>,
    pub color: String,
    pub weight: f64,
    pub is_highlighted: bool,
    /// Store indices of every route this primitive represents, first seen
    /// first.
    pub route_indices: Vec<usize>,
    /// Observation timestamps of those routes, aligned with `route_indices`.
    pub timestamps: Vec<Option<i64>>,
}

/// Row of the ranked traversal table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRow {
    pub node_id: NodeId,
    pub name: String,
    pub traversal_count: u32,
}

/// Row of the per-page route table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRow {
    pub target: String,
    pub path: String,
    pub hop_count: usize,
    pub observed: Option<String>,
    /// Identity key of the primitive this row corresponds to, used to
    /// re-trigger the highlight from the table. `None` when the route never
    /// became renderable.
    pub primitive_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub page_index: usize,
    pub total_pages: usize,
}

/// Everything the rendering collaborator needs for one aggregation request:
/// primitives for the current page, the ranked node table over the full
/// matching set, route rows for the current page, and the reveal set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub primitives: Vec<RenderPrimitive>,
    pub node_rows: Vec<NodeRow>,
    pub route_rows: Vec<RouteRow>,
    pub page: PageDescriptor,
    pub revealed_nodes: Vec<NodeId>,
    /// Set when the selected origin has no outgoing routes; the UI shows an
    /// explicit indicator instead of an empty map.
    pub no_matches: bool,
}

/// Swap of the emphasized primitive: restore the old one to default weight
/// first, then emphasize the new one. At most one primitive is emphasized at
/// any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightChange {
    pub restore: Option<String>,
    pub emphasize: String,
}

/// Diff language between the selection engine and the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderUpdate {
    /// Drop all primitives of the prior selection and close its popups.
    Clear,
    Draw(RenderPlan),
    Highlight(HighlightChange),
}

/// Marker payload handed to the map collaborator for one catalogue node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub id: NodeId,
    pub coordinates: LatLng,
    pub color: String,
    pub radius: f64,
    pub city: String,
    pub region: String,
    pub ip: String,
    pub route_count: u32,
}

impl MarkerSpec {
    #[must_use]
    pub fn for_point(point: &crate::models::Point) -> Self {
        Self {
            id: point.id,
            coordinates: point.coordinates,
            color: crate::palette::marker_color(point.route_count),
            radius: crate::constants::MARKER_RADIUS,
            city: point.city.clone(),
            region: point.region.clone(),
            ip: point.ip.clone(),
            route_count: point.route_count,
        }
    }
}
