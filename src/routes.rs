use serde_json::Value;

use crate::models::{NodeId, Route};

/// The full route collection, loaded once per session and reused by every
/// aggregation request afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteStore {
    routes: Vec<Route>,
}

impl RouteStore {
    /// Load the route feed without validating individual records; a route
    /// with a malformed path still occupies its slot and is sorted out at
    /// resolution time.
    #[must_use]
    pub fn load(raw_routes: &[Value]) -> Self {
        Self {
            routes: raw_routes.iter().map(Route::from_value).collect(),
        }
    }

    /// Indices of the routes originating at `node_id`, in feed order.
    ///
    /// The filter is a pure predicate on the route origin and is stable: the
    /// relative order of matches is the loaded order, which downstream
    /// determines pagination and default color assignment.
    #[must_use]
    pub fn routes_starting_at(&self, node_id: NodeId) -> Vec<usize> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(_, route)| route.origin() == Some(node_id))
            .map(|(index, _)| index)
            .collect()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
