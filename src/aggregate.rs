use indexmap::IndexMap;

use crate::models::NodeId;
use crate::resolve::ResolvedPath;

/// Count, per node, how many times the renderable routes of the current
/// selection pass through it.
///
/// Every occurrence in a resolved hop sequence counts, so a node a path
/// legitimately visits twice is incremented twice for that route. Output is
/// ranked by count descending; ties keep first-seen order, which is the feed
/// order of the matching set and therefore deterministic. Nodes with zero
/// traversals are simply absent.
#[must_use]
pub fn traversal_counts(paths: &[&ResolvedPath]) -> Vec<(NodeId, u32)> {
    let mut counts: IndexMap<NodeId, u32> = IndexMap::new();

    for path in paths {
        for &hop in &path.hop_ids {
            *counts.entry(hop).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(NodeId, u32)> = counts.into_iter().collect();
    // Stable sort keeps insertion (first-seen) order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(order: usize, hops: &[NodeId]) -> ResolvedPath {
        ResolvedPath {
            route_index: order,
            order,
            coordinates: hops.iter().map(|&h| (f64::from(h), f64::from(h))).collect(),
            hop_ids: hops.to_vec(),
        }
    }

    #[test]
    fn test_repeated_hop_counts_each_occurrence() {
        let p = path(0, &[1, 2, 3, 2]);
        let ranked = traversal_counts(&[&p]);

        assert_eq!(ranked, vec![(2, 2), (1, 1), (3, 1)]);
    }

    #[test]
    fn test_counts_accumulate_across_routes() {
        let a = path(0, &[1, 2, 3]);
        let b = path(1, &[1, 2]);
        let ranked = traversal_counts(&[&a, &b]);

        assert_eq!(ranked, vec![(1, 2), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let a = path(0, &[5, 9]);
        let b = path(1, &[7]);
        let ranked = traversal_counts(&[&a, &b]);

        assert_eq!(ranked, vec![(5, 1), (9, 1), (7, 1)]);
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(traversal_counts(&[]).is_empty());
    }
}
