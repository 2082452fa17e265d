//! buildscope Telemetry - Post-build collectors
//!
//! Provides:
//! - `ViewportChangeTracker`: Scene view layout reports, sent only on change
//! - `ManifestCapabilityExtractor`: Permissions and features from `AndroidManifest.xml`
//! - `PlatformRegistry`: Platform-specific extractors selected by build target
//! - `PostBuildCollector`: Runs the collectors after each build and feeds a sink
//! - `JsonFileSink` / `MemorySink`: `IEventSink` adapters

pub mod collector;
pub mod logging;
pub mod manifest;
pub mod platform;
pub mod sink;
pub mod viewport;

pub use collector::{PostBuildCollector, PostBuildOutcome};
pub use manifest::{ManifestCapabilityExtractor, ManifestLocation};
pub use platform::{AndroidManifestExtractor, PlatformExtractor, PlatformRegistry};
pub use sink::{EventEnvelope, JsonFileSink, MemorySink};
pub use viewport::ViewportChangeTracker;
