//! Domain entities
//!
//! This module contains the core domain types for buildscope:
//! - Build settings supplied by the build pipeline
//! - Scene view state and snapshots
//! - Declared manifest capabilities
//! - Telemetry events
//! - Collector error types

pub mod build;
pub mod capability;
pub mod errors;
pub mod event;
pub mod viewport;

// Re-export commonly used types
pub use build::{
    BuildConfig, BuildSystem, BuildTarget, BuildVariant, EditorBehaviorMode, PostBuildContext,
};
pub use capability::CapabilitySet;
pub use errors::CollectorError;
pub use event::TelemetryEvent;
pub use viewport::{ViewportDescriptor, ViewportSnapshot, ViewportState};
