use indexmap::IndexSet;

use super::NodeId;

/// Session-scoped interaction state, owned by the route explorer.
///
/// All fields are mutated exclusively through explorer commands; nothing here
/// lives in ambient scope. Resetting to `Idle` drops every per-selection
/// artifact at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Origin whose routes are currently displayed, `None` while idle.
    pub start_node: Option<NodeId>,
    /// Current page of the matching-route set, 0-indexed.
    pub page: usize,
    /// Identity key of the primitive currently drawn emphasized, if any.
    pub highlighted: Option<String>,
    /// Nodes with a stored route count of zero that are shown only because a
    /// currently-displayed path passes through them. First-seen order.
    pub revealed_nodes: IndexSet<NodeId>,
}

impl SelectionState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.start_node.is_none()
    }

    /// Drop the whole selection, returning to `Idle`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Begin a fresh selection for `node`: page 0, no highlight, no reveals
    /// carried over from the prior origin.
    pub fn begin(&mut self, node: NodeId) {
        self.clear();
        self.start_node = Some(node);
    }
}
