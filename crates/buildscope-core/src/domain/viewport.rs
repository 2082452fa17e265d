//! Scene view domain types
//!
//! `ViewportState` remembers the counts that were last reported so that
//! repeated builds with an unchanged editor layout do not emit duplicate
//! events. It is owned by whoever drives the collectors and lives as long
//! as the editor process.

use serde::{Deserialize, Serialize};

/// One open scene view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewportDescriptor {
    /// Whether the view is in 2D mode
    pub in_2d_mode: bool,
}

impl ViewportDescriptor {
    pub fn new(in_2d_mode: bool) -> Self {
        Self { in_2d_mode }
    }
}

/// Last reported scene view counts
///
/// Not synchronized: callers sharing one state between threads must wrap
/// it in a `Mutex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    pub view_count: usize,
    pub two_d_view_count: usize,
    /// Set once the first snapshot has been emitted
    pub sent_once: bool,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the given counts must be reported.
    pub fn should_emit(&self, view_count: usize, two_d_view_count: usize) -> bool {
        !self.sent_once
            || self.view_count != view_count
            || self.two_d_view_count != two_d_view_count
    }

    /// Records counts as reported.
    pub fn record(&mut self, view_count: usize, two_d_view_count: usize) {
        self.sent_once = true;
        self.view_count = view_count;
        self.two_d_view_count = two_d_view_count;
    }
}

/// Scene view summary sent when the layout changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    #[serde(rename = "total_scene_views")]
    pub total_views: usize,
    #[serde(rename = "num_of_2d_views")]
    pub two_d_views: usize,
    #[serde(rename = "is_default_2d_mode")]
    pub default_is_two_d: bool,
}
