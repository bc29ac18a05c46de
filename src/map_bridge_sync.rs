use std::cell::RefCell;

use crate::models::NodeId;
use crate::render::{MarkerSpec, RenderUpdate};

/// Non-wasm twin of the browser map bridge, for tests.
///
/// Same surface as the wasm module, but instructions are recorded in memory
/// instead of crossing into JS, so a test can assert on exactly what the
/// rendering collaborator would have been told to do.
#[derive(Debug, Default)]
pub struct MapBridge {
    markers: RefCell<Vec<MarkerSpec>>,
    revealed: RefCell<Vec<MarkerSpec>>,
    applied: RefCell<Vec<RenderUpdate>>,
}

impl MapBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_markers(&self, markers: &[MarkerSpec]) {
        *self.markers.borrow_mut() = markers.to_vec();
    }

    pub fn set_revealed_markers(&self, markers: &[MarkerSpec]) {
        *self.revealed.borrow_mut() = markers.to_vec();
    }

    pub fn apply(&self, update: &RenderUpdate) {
        self.applied.borrow_mut().push(update.clone());
    }

    pub fn on_marker_click(&self, _callback: impl Fn(NodeId) + 'static) {}

    pub fn on_route_click(&self, _callback: impl Fn(String) + 'static) {}

    /// Everything applied so far, in order.
    #[must_use]
    pub fn applied(&self) -> Vec<RenderUpdate> {
        self.applied.borrow().clone()
    }

    #[must_use]
    pub fn markers(&self) -> Vec<MarkerSpec> {
        self.markers.borrow().clone()
    }

    #[must_use]
    pub fn revealed_markers(&self) -> Vec<MarkerSpec> {
        self.revealed.borrow().clone()
    }
}
