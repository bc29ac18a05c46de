use crate::catalogue::GeoCatalogue;
use crate::models::{LatLng, NodeId, Route};

/// One AS-path mapped onto the catalogue.
///
/// `coordinates` and `hop_ids` stay aligned: both contain only the hops that
/// actually resolved, in announcement order. Null hops and hops without a
/// catalogue entry are skipped without discarding the rest of the path.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    /// Index of the originating route in the route store.
    pub route_index: usize,
    /// Position within the matching set of the aggregation request; drives
    /// default color assignment and stays fixed across page navigation.
    pub order: usize,
    pub coordinates: Vec<LatLng>,
    pub hop_ids: Vec<NodeId>,
}

impl ResolvedPath {
    /// A path needs at least two resolved coordinates to produce a visible
    /// segment.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.coordinates.len() >= 2
    }
}

/// Resolve a single route against the catalogue.
///
/// Evaluated per route, every time resolution runs; nothing is cached across
/// catalogue changes.
#[must_use]
pub fn resolve_route(
    route_index: usize,
    order: usize,
    route: &Route,
    catalogue: &GeoCatalogue,
) -> ResolvedPath {
    let mut coordinates = Vec::new();
    let mut hop_ids = Vec::new();

    for hop in route.as_path.iter().flatten() {
        let Some(point) = catalogue.lookup(*hop) else {
            continue;
        };
        coordinates.push(point.coordinates);
        hop_ids.push(*hop);
    }

    ResolvedPath {
        route_index,
        order,
        coordinates,
        hop_ids,
    }
}

/// Resolve a whole matching set, preserving its order.
#[must_use]
pub fn resolve_all(
    matching: &[usize],
    routes: &[&Route],
    catalogue: &GeoCatalogue,
) -> Vec<ResolvedPath> {
    matching
        .iter()
        .zip(routes)
        .enumerate()
        .map(|(order, (&route_index, route))| resolve_route(route_index, order, route, catalogue))
        .collect()
}
