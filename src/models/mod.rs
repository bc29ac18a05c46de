mod point;
mod route;
mod selection;

pub use point::{Point, PointRejection, RawPoint};
pub use route::Route;
pub use selection::SelectionState;

/// Autonomous-system number identifying one network node.
pub type NodeId = u32;

/// Geographic position as `(latitude, longitude)` in degrees.
pub type LatLng = (f64, f64);
