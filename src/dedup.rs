use indexmap::IndexMap;

use crate::constants::ROUTE_WEIGHT;
use crate::models::LatLng;
use crate::palette::route_color;
use crate::render::RenderPrimitive;
use crate::resolve::ResolvedPath;
use crate::routes::RouteStore;

/// How overlapping render output is collapsed within one aggregation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// One polyline per distinct whole path; exact hop-sequence duplicates
    /// collapse onto the first occurrence.
    #[default]
    Path,
    /// One segment per unordered pair of endpoint coordinates; A→B and B→A
    /// collapse onto the first occurrence.
    Segment,
}

/// Identity key of a whole path: its resolved hop ids joined with `-`.
#[must_use]
pub fn path_key(path: &ResolvedPath) -> String {
    let hops: Vec<String> = path.hop_ids.iter().map(ToString::to_string).collect();
    hops.join("-")
}

/// Identity key of a single segment: both endpoints in lexicographic
/// `(lat, lon)` order, so direction does not matter.
#[must_use]
pub fn segment_key(a: LatLng, b: LatLng) -> String {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    format!("{},{}|{},{}", first.0, first.1, second.0, second.1)
}

/// Collapse the renderable paths of one aggregation request into a set of
/// primitives with unique identity keys.
///
/// First seen wins, color included. A path dropped as a duplicate still
/// registers its route on the surviving primitive, so table-row lookups keep
/// working for every route, and route-denominated totals are unaffected.
#[must_use]
pub fn dedupe(
    paths: &[&ResolvedPath],
    store: &RouteStore,
    policy: DedupPolicy,
) -> Vec<RenderPrimitive> {
    let mut primitives: IndexMap<String, RenderPrimitive> = IndexMap::new();

    for path in paths {
        debug_assert!(path.is_renderable());
        let color = route_color(path.order);
        let timestamp = store.get(path.route_index).and_then(|r| r.timestamp);

        match policy {
            DedupPolicy::Path => {
                attach(
                    &mut primitives,
                    path_key(path),
                    path.coordinates.clone(),
                    &color,
                    path.route_index,
                    timestamp,
                );
            }
            DedupPolicy::Segment => {
                for pair in path.coordinates.windows(2) {
                    attach(
                        &mut primitives,
                        segment_key(pair[0], pair[1]),
                        pair.to_vec(),
                        &color,
                        path.route_index,
                        timestamp,
                    );
                }
            }
        }
    }

    primitives.into_values().collect()
}

fn attach(
    primitives: &mut IndexMap<String, RenderPrimitive>,
    key: String,
    coordinates: Vec<LatLng>,
    color: &str,
    route_index: usize,
    timestamp: Option<i64>,
) {
    let primitive = primitives
        .entry(key.clone())
        .or_insert_with(|| RenderPrimitive {
            id: key,
            coordinates,
            color: color.to_string(),
            weight: ROUTE_WEIGHT,
            is_highlighted: false,
            route_indices: Vec::new(),
            timestamps: Vec::new(),
        });

    if !primitive.route_indices.contains(&route_index) {
        primitive.route_indices.push(route_index);
        primitive.timestamps.push(timestamp);
    }
}
