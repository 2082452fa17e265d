//! Scene view change tracking
//!
//! Reports the scene view layout only on the first build of a process and
//! afterwards only when the number of views or of 2D views changed.

use buildscope_core::domain::{ViewportDescriptor, ViewportSnapshot, ViewportState};
use tracing::debug;

/// Compares the current scene views against the last reported counts.
pub struct ViewportChangeTracker;

impl ViewportChangeTracker {
    /// Returns a snapshot when the layout must be reported, updating `state`.
    ///
    /// A change of `default_is_two_d` alone does not trigger a report.
    pub fn report(
        state: &mut ViewportState,
        views: &[ViewportDescriptor],
        default_is_two_d: bool,
    ) -> Option<ViewportSnapshot> {
        let view_count = views.len();
        let two_d_view_count = views.iter().filter(|v| v.in_2d_mode).count();

        if !state.should_emit(view_count, two_d_view_count) {
            debug!(view_count, two_d_view_count, "Scene view layout unchanged");
            return None;
        }

        state.record(view_count, two_d_view_count);
        Some(ViewportSnapshot {
            total_views: view_count,
            two_d_views: two_d_view_count,
            default_is_two_d,
        })
    }
}
