use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::NodeId;

/// One directed AS-path as observed in the route feed.
///
/// Loaded leniently: the feed is kept as-is and problems (null hops, hops
/// without a catalogue entry, paths too short to draw) surface at resolution
/// time so a single bad record never aborts a batch. Read-only for the
/// lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Hop sequence in announcement order. Hops the feed could not express as
    /// a number are kept as `None` placeholders so positions stay meaningful.
    #[serde(default)]
    pub as_path: Vec<Option<NodeId>>,
    /// Explicit origin field; equals `as_path[0]` when both are present.
    #[serde(default)]
    pub start_system: Option<NodeId>,
    #[serde(default)]
    pub target_system: Option<String>,
    /// Epoch seconds of the observation, used to correlate a route record
    /// with its rendered representation (table-row click → highlight).
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl Route {
    /// Build a route from one feed record without validating it.
    ///
    /// Unusable fields collapse to `None`; an entirely malformed record
    /// becomes an empty route, which simply never resolves to anything
    /// renderable.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let as_path = value
            .get("as_path")
            .and_then(Value::as_array)
            .map(|hops| {
                hops.iter()
                    .map(|hop| hop.as_u64().and_then(|n| NodeId::try_from(n).ok()))
                    .collect()
            })
            .unwrap_or_default();

        let start_system = value
            .get("start_system")
            .and_then(Value::as_u64)
            .and_then(|n| NodeId::try_from(n).ok());

        let target_system = value
            .get("target_system")
            .and_then(Value::as_str)
            .map(ToString::to_string);

        let timestamp = value.get("timestamp").and_then(|ts| match ts {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        });

        Self {
            as_path,
            start_system,
            target_system,
            timestamp,
        }
    }

    /// Originating node of the path.
    ///
    /// The feed carries two equivalent representations; the explicit
    /// `start_system` field wins, falling back to the first path element.
    #[must_use]
    pub fn origin(&self) -> Option<NodeId> {
        self.start_system
            .or_else(|| self.as_path.first().copied().flatten())
    }

    /// Number of hops the feed actually named (null placeholders excluded).
    #[must_use]
    pub fn hop_count(&self) -> usize {
        self.as_path.iter().flatten().count()
    }

    /// Path rendered for display, announcement order, null hops skipped.
    #[must_use]
    pub fn display_path(&self) -> String {
        let hops: Vec<String> = self
            .as_path
            .iter()
            .flatten()
            .map(ToString::to_string)
            .collect();
        hops.join(" ")
    }

    /// Observation time formatted for the route table, if the record had one.
    #[must_use]
    pub fn observed_at(&self) -> Option<String> {
        let ts = self.timestamp?;
        let time = DateTime::from_timestamp(ts, 0)?;
        Some(time.format("%Y-%m-%d %H:%M").to_string())
    }
}
