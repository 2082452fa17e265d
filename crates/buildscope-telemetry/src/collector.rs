//! PostBuildCollector - runs the collectors after every completed build
//!
//! The scene view tracker always runs. The platform extractor registered
//! for the build target runs afterwards, if there is one. Events are handed
//! to the configured sink; sink failures are logged and never fail the build.

use std::sync::Arc;

use buildscope_core::config::Config;
use buildscope_core::domain::{
    CapabilitySet, CollectorError, PostBuildContext, TelemetryEvent, ViewportSnapshot,
    ViewportState,
};
use buildscope_core::ports::IEventSink;
use tracing::{debug, info, warn};

use crate::platform::PlatformRegistry;
use crate::viewport::ViewportChangeTracker;

/// Events produced by one post-build run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostBuildOutcome {
    pub viewport: Option<ViewportSnapshot>,
    pub capabilities: Option<CapabilitySet>,
}

/// Drives the collectors for a long-lived editor process.
///
/// Owns the scene view state remembered between builds. Calls must be
/// serialized; `on_post_build` takes `&mut self` for that reason.
pub struct PostBuildCollector {
    viewport_state: ViewportState,
    platforms: PlatformRegistry,
    sink: Arc<dyn IEventSink>,
}

impl PostBuildCollector {
    pub fn new(platforms: PlatformRegistry, sink: Arc<dyn IEventSink>) -> Self {
        Self {
            viewport_state: ViewportState::new(),
            platforms,
            sink,
        }
    }

    /// Collector with the built-in platform extractors configured from `config`.
    pub fn from_config(config: &Config, sink: Arc<dyn IEventSink>) -> Self {
        Self::new(PlatformRegistry::with_defaults(&config.paths), sink)
    }

    /// Scene view counts last reported.
    pub fn viewport_state(&self) -> &ViewportState {
        &self.viewport_state
    }

    /// Runs all collectors for a completed build.
    ///
    /// A corrupt manifest is returned as an error after the scene view
    /// event (if any) has already been sent.
    pub fn on_post_build(
        &mut self,
        ctx: &PostBuildContext,
    ) -> Result<PostBuildOutcome, CollectorError> {
        let viewport = ViewportChangeTracker::report(
            &mut self.viewport_state,
            &ctx.viewports,
            ctx.default_behavior_mode.is_2d(),
        );
        if let Some(snapshot) = viewport {
            self.emit(&TelemetryEvent::SceneViewInfo(snapshot));
        }

        let mut outcome = PostBuildOutcome {
            viewport,
            capabilities: None,
        };

        let Some(extractor) = self.platforms.get(ctx.target) else {
            debug!(build_target = %ctx.target, "No platform extractor registered");
            return Ok(outcome);
        };

        if let Some(event) = extractor.collect(ctx)? {
            self.emit(&event);
            if let TelemetryEvent::BuildTargetPermissions(capabilities) = event {
                outcome.capabilities = Some(capabilities);
            }
        }

        Ok(outcome)
    }

    fn emit(&self, event: &TelemetryEvent) {
        match self.sink.send(event) {
            Ok(()) => info!(event = %event, "Telemetry event sent"),
            Err(e) => warn!(event = %event, error = %e, "Failed to send telemetry event"),
        }
    }
}
