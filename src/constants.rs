/// Number of route-table rows per page.
pub const PAGE_SIZE: usize = 20;

/// Feed locations served by the static file server.
pub const POINTS_URL: &str = "/points";
pub const ROUTES_URL: &str = "/routes";

/// Stroke weight of a rendered route polyline.
pub const ROUTE_WEIGHT: f64 = 2.0;

/// Stroke weight of the single highlighted polyline.
pub const HIGHLIGHT_WEIGHT: f64 = 10.0;

/// Marker radius in pixels for catalogue nodes.
pub const MARKER_RADIUS: f64 = 6.0;

/// Display fallback for absent point metadata.
pub const PLACEHOLDER: &str = "Unknown";
