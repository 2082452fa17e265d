//! Telemetry events handed to an event sink

use serde::{Deserialize, Serialize};

use super::capability::CapabilitySet;
use super::viewport::ViewportSnapshot;

/// An event produced by a post-build collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Scene view layout changed since the last report
    SceneViewInfo(ViewportSnapshot),
    /// Capabilities declared in the Android manifest of a build
    BuildTargetPermissions(CapabilitySet),
}

impl TelemetryEvent {
    /// Stable event name, also used as the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            TelemetryEvent::SceneViewInfo(_) => "scene_view_info",
            TelemetryEvent::BuildTargetPermissions(_) => "build_target_permissions",
        }
    }
}

impl std::fmt::Display for TelemetryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = TelemetryEvent::SceneViewInfo(ViewportSnapshot {
            total_views: 1,
            two_d_views: 0,
            default_is_two_d: false,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "scene_view_info");
        assert_eq!(json["data"]["total_scene_views"], 1);

        let back: TelemetryEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_event_name_matches_tag() {
        let event = TelemetryEvent::BuildTargetPermissions(CapabilitySet::default());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], event.name());
        assert_eq!(event.to_string(), "build_target_permissions");
    }
}
