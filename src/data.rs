use serde_json::Value;

use crate::constants::{POINTS_URL, ROUTES_URL};

/// Fetch the point feed once.
///
/// The feed is returned as raw JSON values so that one malformed record can
/// be rejected on its own during catalogue load instead of failing the whole
/// document.
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the response body is not a
/// JSON array. A failed fetch leaves nothing cached.
pub async fn fetch_points() -> Result<Vec<Value>, String> {
    fetch_feed(POINTS_URL).await
}

/// Fetch the route feed once. Same contract as [`fetch_points`].
///
/// # Errors
///
/// Returns an error if the HTTP request fails or the response body is not a
/// JSON array.
pub async fn fetch_routes() -> Result<Vec<Value>, String> {
    fetch_feed(ROUTES_URL).await
}

async fn fetch_feed(url: &str) -> Result<Vec<Value>, String> {
    reqwest::get(url)
        .await
        .map_err(|e| format!("Request for {url} failed: {e}"))?
        .json::<Vec<Value>>()
        .await
        .map_err(|e| format!("Failed to deserialize {url}: {e}"))
}
