pub mod aggregate;
pub mod catalogue;
pub mod components;
pub mod constants;
pub mod data;
pub mod dedup;
pub mod logging;
pub mod models;
pub mod palette;
pub mod render;
pub mod resolve;
pub mod routes;
pub mod selection;

#[cfg(target_arch = "wasm32")]
#[path = "map_bridge.rs"]
pub mod map_bridge;

#[cfg(not(target_arch = "wasm32"))]
#[path = "map_bridge_sync.rs"]
pub mod map_bridge;

pub use components::app::App;
