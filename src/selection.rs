use std::ops::Range;

use crate::aggregate::traversal_counts;
use crate::catalogue::GeoCatalogue;
use crate::constants::{HIGHLIGHT_WEIGHT, PAGE_SIZE, PLACEHOLDER};
use crate::dedup::{dedupe, path_key, segment_key, DedupPolicy};
use crate::models::{NodeId, SelectionState};
use crate::render::{
    HighlightChange, NodeRow, PageDescriptor, RenderPlan, RenderPrimitive, RenderUpdate, RouteRow,
};
use crate::resolve::{resolve_all, ResolvedPath};
use crate::routes::RouteStore;

/// Owns the loaded catalogue and route store plus all session interaction
/// state, and turns user commands into render instructions.
///
/// Every command is synchronous and returns the diff the rendering
/// collaborator should apply; the explorer itself never touches the map. The
/// matching set of the current selection is resolved once and cached, so page
/// navigation re-slices in memory instead of re-filtering the store.
#[derive(Debug, Clone)]
pub struct RouteExplorer {
    catalogue: GeoCatalogue,
    store: RouteStore,
    policy: DedupPolicy,
    state: SelectionState,
    /// Store indices of the routes matching the current origin, feed order.
    matching: Vec<usize>,
    /// Resolution of `matching`, aligned index for index.
    resolved: Vec<ResolvedPath>,
}

impl RouteExplorer {
    #[must_use]
    pub fn new(catalogue: GeoCatalogue, store: RouteStore, policy: DedupPolicy) -> Self {
        Self {
            catalogue,
            store,
            policy,
            state: SelectionState::default(),
            matching: Vec::new(),
            resolved: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn catalogue(&self) -> &GeoCatalogue {
        &self.catalogue
    }

    /// Handle a click on the node `node_id`.
    ///
    /// Clicking the currently selected origin toggles back to idle and clears
    /// everything drawn for it. Clicking any other node starts a fresh
    /// selection at page 0: the prior highlight and reveal set are dropped,
    /// the matching routes are fetched from the store once, resolved, and
    /// cached for subsequent page navigation.
    pub fn select(&mut self, node_id: NodeId) -> RenderUpdate {
        if self.state.start_node == Some(node_id) {
            self.state.clear();
            self.matching.clear();
            self.resolved.clear();
            return RenderUpdate::Clear;
        }

        self.state.begin(node_id);
        self.matching = self.store.routes_starting_at(node_id);

        let routes: Vec<_> = self
            .matching
            .iter()
            .filter_map(|&index| self.store.get(index))
            .collect();
        self.resolved = resolve_all(&self.matching, &routes, &self.catalogue);

        // Reveal zero-count nodes traversed anywhere in the full matching
        // set, not just on the current page.
        for path in &self.resolved {
            for &hop in &path.hop_ids {
                let Some(point) = self.catalogue.lookup(hop) else {
                    continue;
                };
                if point.route_count == 0 {
                    self.state.revealed_nodes.insert(hop);
                }
            }
        }

        RenderUpdate::Draw(self.render_plan())
    }

    /// Advance one page. A no-op (`None`) while idle or already on the last
    /// page. The highlight is dropped because its primitive leaves the map
    /// with the page.
    pub fn next_page(&mut self) -> Option<RenderUpdate> {
        self.state.start_node?;
        let last_page = self.total_pages().saturating_sub(1);
        if self.state.page >= last_page {
            return None;
        }
        self.state.page += 1;
        self.state.highlighted = None;
        Some(RenderUpdate::Draw(self.render_plan()))
    }

    /// Go back one page. A no-op (`None`) while idle or already on page 0.
    pub fn prev_page(&mut self) -> Option<RenderUpdate> {
        self.state.start_node?;
        if self.state.page == 0 {
            return None;
        }
        self.state.page -= 1;
        self.state.highlighted = None;
        Some(RenderUpdate::Draw(self.render_plan()))
    }

    /// Emphasize the primitive with identity key `primitive_id`.
    ///
    /// The previously emphasized primitive is restored first; at most one is
    /// emphasized at any time. Unknown keys and re-clicks of the current
    /// highlight are no-ops.
    pub fn highlight(&mut self, primitive_id: &str) -> Option<RenderUpdate> {
        self.state.start_node?;
        if self.state.highlighted.as_deref() == Some(primitive_id) {
            return None;
        }
        if !self
            .page_primitives()
            .iter()
            .any(|p| p.id == primitive_id)
        {
            return None;
        }

        let restore = self.state.highlighted.replace(primitive_id.to_string());
        Some(RenderUpdate::Highlight(HighlightChange {
            restore,
            emphasize: primitive_id.to_string(),
        }))
    }

    /// Pages needed for the current matching set; 0 while nothing matches.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.matching.len().div_ceil(PAGE_SIZE)
    }

    fn page_range(&self) -> Range<usize> {
        let start = (self.state.page * PAGE_SIZE).min(self.resolved.len());
        let end = (start + PAGE_SIZE).min(self.resolved.len());
        start..end
    }

    fn page_primitives(&self) -> Vec<RenderPrimitive> {
        let renderable: Vec<&ResolvedPath> = self.resolved[self.page_range()]
            .iter()
            .filter(|p| p.is_renderable())
            .collect();

        let mut primitives = dedupe(&renderable, &self.store, self.policy);
        if let Some(highlighted) = self.state.highlighted.as_deref() {
            for primitive in &mut primitives {
                if primitive.id == highlighted {
                    primitive.is_highlighted = true;
                    primitive.weight = HIGHLIGHT_WEIGHT;
                }
            }
        }
        primitives
    }

    fn node_rows(&self) -> Vec<NodeRow> {
        let renderable: Vec<&ResolvedPath> = self
            .resolved
            .iter()
            .filter(|p| p.is_renderable())
            .collect();

        traversal_counts(&renderable)
            .into_iter()
            .filter(|&(node_id, _)| Some(node_id) != self.state.start_node)
            .map(|(node_id, traversal_count)| NodeRow {
                node_id,
                name: self
                    .catalogue
                    .lookup(node_id)
                    .map_or_else(|| PLACEHOLDER.to_string(), |p| p.name.clone()),
                traversal_count,
            })
            .collect()
    }

    fn route_rows(&self) -> Vec<RouteRow> {
        let mut rows = Vec::new();

        for path in &self.resolved[self.page_range()] {
            let Some(route) = self.store.get(path.route_index) else {
                continue;
            };

            let primitive_id = match self.policy {
                DedupPolicy::Path => path.is_renderable().then(|| path_key(path)),
                DedupPolicy::Segment => path
                    .coordinates
                    .windows(2)
                    .next()
                    .map(|pair| segment_key(pair[0], pair[1])),
            };

            rows.push(RouteRow {
                target: route
                    .target_system
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER.to_string()),
                path: route.display_path(),
                hop_count: route.hop_count(),
                observed: route.observed_at(),
                primitive_id,
            });
        }

        rows
    }

    fn render_plan(&self) -> RenderPlan {
        RenderPlan {
            primitives: self.page_primitives(),
            node_rows: self.node_rows(),
            route_rows: self.route_rows(),
            page: PageDescriptor {
                page_index: self.state.page,
                total_pages: self.total_pages(),
            },
            revealed_nodes: self.state.revealed_nodes.iter().copied().collect(),
            no_matches: self.matching.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn explorer_with(points: Vec<Value>, routes: Vec<Value>, policy: DedupPolicy) -> RouteExplorer {
        let (catalogue, rejections) = GeoCatalogue::load(&points);
        assert!(rejections.is_empty(), "fixture points must be valid");
        RouteExplorer::new(catalogue, RouteStore::load(&routes), policy)
    }

    fn three_points() -> Vec<Value> {
        vec![
            json!({ "asn": 1, "coordinates": [10.0, 10.0], "routes_count": 2 }),
            json!({ "asn": 2, "coordinates": [20.0, 20.0], "routes_count": 1 }),
            json!({ "asn": 3, "coordinates": [30.0, 30.0], "routes_count": 1 }),
        ]
    }

    fn draw(update: RenderUpdate) -> RenderPlan {
        match update {
            RenderUpdate::Draw(plan) => plan,
            other => panic!("expected Draw, got {other:?}"),
        }
    }

    #[test]
    fn test_end_to_end_example() {
        let mut explorer = explorer_with(
            three_points(),
            vec![json!({ "as_path": [1, 2, 3] }), json!({ "as_path": [1, 2] })],
            DedupPolicy::Path,
        );

        let plan = draw(explorer.select(1));

        let ids: Vec<&str> = plan.primitives.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1-2-3", "1-2"]);

        let ranked: Vec<(NodeId, u32)> = plan
            .node_rows
            .iter()
            .map(|r| (r.node_id, r.traversal_count))
            .collect();
        assert_eq!(ranked, vec![(2, 2), (3, 1)]);

        assert_eq!(plan.route_rows.len(), 2);
        assert_eq!(plan.page, PageDescriptor { page_index: 0, total_pages: 1 });
        assert!(!plan.no_matches);
    }

    #[test]
    fn test_select_toggle_clears() {
        let mut explorer = explorer_with(
            three_points(),
            vec![json!({ "as_path": [1, 2] })],
            DedupPolicy::Path,
        );

        explorer.select(1);
        assert_eq!(explorer.state().start_node, Some(1));

        let update = explorer.select(1);
        assert_eq!(update, RenderUpdate::Clear);
        assert!(explorer.state().is_idle());
    }

    #[test]
    fn test_switching_origin_resets_page_and_highlight() {
        let routes: Vec<Value> = (0..45)
            .map(|i| json!({ "as_path": [1, 2, 3], "timestamp": i }))
            .chain(std::iter::once(json!({ "as_path": [2, 3] })))
            .collect();
        let mut explorer = explorer_with(three_points(), routes, DedupPolicy::Path);

        explorer.select(1);
        explorer.next_page();
        explorer.highlight("1-2-3");
        assert_eq!(explorer.state().page, 1);
        assert!(explorer.state().highlighted.is_some());

        let plan = draw(explorer.select(2));
        assert_eq!(explorer.state().page, 0);
        assert_eq!(explorer.state().highlighted, None);
        assert_eq!(plan.page.page_index, 0);
    }

    #[test]
    fn test_pagination_clamps_at_boundaries() {
        let routes: Vec<Value> = (0..45).map(|_| json!({ "as_path": [1, 2] })).collect();
        let mut explorer = explorer_with(three_points(), routes, DedupPolicy::Path);

        explorer.select(1);
        assert_eq!(explorer.total_pages(), 3);

        // prev at page 0 is a no-op
        assert!(explorer.prev_page().is_none());
        assert_eq!(explorer.state().page, 0);

        assert!(explorer.next_page().is_some());
        let plan = draw(explorer.next_page().expect("page 2 exists"));
        assert_eq!(plan.page.page_index, 2);
        assert_eq!(plan.route_rows.len(), 5);

        // next at the last page is a no-op
        assert!(explorer.next_page().is_none());
        assert_eq!(explorer.state().page, 2);
    }

    #[test]
    fn test_pagination_while_idle_is_noop() {
        let mut explorer = explorer_with(three_points(), vec![], DedupPolicy::Path);
        assert!(explorer.next_page().is_none());
        assert!(explorer.prev_page().is_none());
    }

    #[test]
    fn test_empty_selection_is_valid_result() {
        let mut explorer = explorer_with(
            three_points(),
            vec![json!({ "as_path": [2, 3] })],
            DedupPolicy::Path,
        );

        let plan = draw(explorer.select(3));
        assert!(plan.no_matches);
        assert!(plan.primitives.is_empty());
        assert!(plan.node_rows.is_empty());
        assert_eq!(plan.page.total_pages, 0);
        assert_eq!(explorer.state().start_node, Some(3));
    }

    #[test]
    fn test_short_route_excluded_from_render_but_paginated() {
        let mut explorer = explorer_with(
            three_points(),
            vec![
                json!({ "as_path": [1] }),
                json!({ "as_path": [1, 999] }),
                json!({ "as_path": [1, 2] }),
            ],
            DedupPolicy::Path,
        );

        let plan = draw(explorer.select(1));

        // Only the resolvable pair is drawn, but all three matches fill the
        // route table and count toward pagination.
        assert_eq!(plan.primitives.len(), 1);
        assert_eq!(plan.route_rows.len(), 3);
        assert_eq!(plan.page.total_pages, 1);
        assert_eq!(plan.route_rows[0].primitive_id, None);
        assert_eq!(plan.route_rows[1].primitive_id, None);
        assert_eq!(plan.route_rows[2].primitive_id.as_deref(), Some("1-2"));
    }

    #[test]
    fn test_zero_count_nodes_revealed_from_full_matching_set() {
        let points = vec![
            json!({ "asn": 1, "coordinates": [10.0, 10.0], "routes_count": 25 }),
            json!({ "asn": 2, "coordinates": [20.0, 20.0], "routes_count": 0 }),
            json!({ "asn": 3, "coordinates": [30.0, 30.0], "routes_count": 1 }),
        ];
        // 25 routes so the route through the zero-count node 2 lands on page
        // 1 while page 0 is displayed.
        let mut routes: Vec<Value> = (0..24).map(|_| json!({ "as_path": [1, 3] })).collect();
        routes.push(json!({ "as_path": [1, 2, 3] }));
        let mut explorer = explorer_with(points, routes, DedupPolicy::Path);

        let plan = draw(explorer.select(1));
        assert_eq!(plan.revealed_nodes, vec![2]);

        // Reveals are un-revealed once the selection changes.
        let plan = draw(explorer.select(3));
        assert!(plan.revealed_nodes.is_empty());
    }

    #[test]
    fn test_highlight_is_mutually_exclusive() {
        let mut explorer = explorer_with(
            three_points(),
            vec![json!({ "as_path": [1, 2, 3] }), json!({ "as_path": [1, 2] })],
            DedupPolicy::Path,
        );
        explorer.select(1);

        let Some(RenderUpdate::Highlight(first)) = explorer.highlight("1-2") else {
            panic!("expected a highlight change");
        };
        assert_eq!(first.restore, None);
        assert_eq!(first.emphasize, "1-2");

        let Some(RenderUpdate::Highlight(second)) = explorer.highlight("1-2-3") else {
            panic!("expected a highlight change");
        };
        assert_eq!(second.restore.as_deref(), Some("1-2"));
        assert_eq!(second.emphasize, "1-2-3");

        // Re-clicking the emphasized primitive changes nothing.
        assert!(explorer.highlight("1-2-3").is_none());
        // Unknown keys are ignored.
        assert!(explorer.highlight("7-8-9").is_none());
    }

    #[test]
    fn test_highlighted_primitive_marked_in_plan() {
        let mut explorer = explorer_with(
            three_points(),
            vec![json!({ "as_path": [1, 2, 3] }), json!({ "as_path": [1, 2] })],
            DedupPolicy::Path,
        );
        explorer.select(1);
        explorer.highlight("1-2");

        // Re-derive the plan the way page navigation would.
        let plan = explorer.render_plan();
        let highlighted: Vec<&RenderPrimitive> = plan
            .primitives
            .iter()
            .filter(|p| p.is_highlighted)
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].id, "1-2");
        assert!(highlighted[0].weight > crate::constants::ROUTE_WEIGHT);
    }

    #[test]
    fn test_page_change_drops_highlight() {
        let routes: Vec<Value> = (0..21)
            .map(|i| json!({ "as_path": [1, 2, 3], "timestamp": i }))
            .collect();
        let mut explorer = explorer_with(three_points(), routes, DedupPolicy::Path);

        explorer.select(1);
        explorer.highlight("1-2-3");
        explorer.next_page();
        assert_eq!(explorer.state().highlighted, None);
    }

    #[test]
    fn test_segment_mode_route_rows_link_first_segment() {
        let mut explorer = explorer_with(
            three_points(),
            vec![json!({ "as_path": [1, 2, 3] })],
            DedupPolicy::Segment,
        );

        let plan = draw(explorer.select(1));
        assert_eq!(plan.primitives.len(), 2);
        assert_eq!(
            plan.route_rows[0].primitive_id.as_deref(),
            Some(segment_key((10.0, 10.0), (20.0, 20.0)).as_str())
        );
    }
}
