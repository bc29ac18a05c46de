use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::NodeId;
use crate::render::{MarkerSpec, RenderUpdate};

// The map itself (Leaflet, tile layer, popups) lives on the JS side; the
// `atlasMap` namespace is the whole surface the engine talks to.
#[wasm_bindgen(js_namespace = atlasMap)]
extern "C" {
    #[wasm_bindgen(js_name = setMarkers)]
    fn js_set_markers(json: &str);

    #[wasm_bindgen(js_name = setRevealedMarkers)]
    fn js_set_revealed_markers(json: &str);

    #[wasm_bindgen(js_name = drawRoutes)]
    fn js_draw_routes(json: &str);

    #[wasm_bindgen(js_name = clearRoutes)]
    fn js_clear_routes();

    #[wasm_bindgen(js_name = applyHighlight)]
    fn js_apply_highlight(json: &str);

    #[wasm_bindgen(js_name = onMarkerClick)]
    fn js_on_marker_click(callback: &js_sys::Function);

    #[wasm_bindgen(js_name = onRouteClick)]
    fn js_on_route_click(callback: &js_sys::Function);
}

/// Browser-side handle to the external rendering collaborator.
///
/// Render instructions cross as JSON strings; clicks come back through the
/// registered callbacks. A non-wasm twin with the same surface records the
/// applied updates for tests.
#[derive(Default)]
pub struct MapBridge;

impl MapBridge {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Replace the base marker set (nodes with at least one stored route).
    pub fn set_markers(&self, markers: &[MarkerSpec]) {
        let Ok(json) = serde_json::to_string(markers) else {
            return;
        };
        js_set_markers(&json);
    }

    /// Replace the temporarily revealed marker set.
    pub fn set_revealed_markers(&self, markers: &[MarkerSpec]) {
        let Ok(json) = serde_json::to_string(markers) else {
            return;
        };
        js_set_revealed_markers(&json);
    }

    /// Apply one engine update to the map.
    pub fn apply(&self, update: &RenderUpdate) {
        match update {
            RenderUpdate::Clear => js_clear_routes(),
            RenderUpdate::Draw(plan) => {
                let Ok(json) = serde_json::to_string(&plan.primitives) else {
                    return;
                };
                js_draw_routes(&json);
            }
            RenderUpdate::Highlight(change) => {
                let Ok(json) = serde_json::to_string(change) else {
                    return;
                };
                js_apply_highlight(&json);
            }
        }
    }

    /// Register the node-click handler. The collaborator reports the ASN of
    /// the clicked marker.
    pub fn on_marker_click(&self, callback: impl Fn(NodeId) + 'static) {
        let closure = Closure::wrap(Box::new(move |asn: f64| {
            // JS numbers arrive as f64; ASNs fit losslessly.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            callback(asn as NodeId);
        }) as Box<dyn Fn(f64)>);
        js_on_marker_click(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Register the polyline-click handler. The collaborator reports the
    /// identity key of the clicked primitive.
    pub fn on_route_click(&self, callback: impl Fn(String) + 'static) {
        let closure = Closure::wrap(Box::new(move |id: JsValue| {
            let Some(id) = id.as_string() else { return };
            callback(id);
        }) as Box<dyn Fn(JsValue)>);
        js_on_route_click(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
