//! Event sink port (driven/secondary port)
//!
//! This module defines the interface through which collectors hand their
//! events to the analytics layer. Serialization and transport of the events
//! belong to the implementation.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because delivery failures are adapter-specific.
//! - Sending is synchronous; collectors run once per completed build and
//!   the caller does not wait for any remote acknowledgement.

use crate::domain::TelemetryEvent;

/// Port trait for delivering telemetry events
///
/// ## Implementation Notes
///
/// - `send` is called at most once per event kind per build.
/// - Failures are reported to the caller, which logs and discards them;
///   an implementation must not panic on delivery problems.
pub trait IEventSink: Send + Sync {
    /// Delivers one event
    ///
    /// # Arguments
    /// * `event` - The event to deliver
    fn send(&self, event: &TelemetryEvent) -> anyhow::Result<()>;
}
