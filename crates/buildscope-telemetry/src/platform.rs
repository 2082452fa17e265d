//! Platform-specific collectors
//!
//! Each `PlatformExtractor` is tagged with the build target it understands.
//! `PlatformRegistry` selects the extractor for the target of the build that
//! just completed, so supporting another platform means registering one
//! more extractor.

use std::collections::HashMap;
use std::path::PathBuf;

use buildscope_core::config::PathsConfig;
use buildscope_core::domain::{
    BuildConfig, BuildTarget, CollectorError, PostBuildContext, TelemetryEvent,
};

use crate::manifest::ManifestCapabilityExtractor;

/// A collector that only runs for builds of one platform
pub trait PlatformExtractor: Send + Sync {
    /// Build target this extractor handles.
    fn platform(&self) -> BuildTarget;

    /// Inspects the build output and returns an event if there is something to report.
    fn collect(&self, ctx: &PostBuildContext) -> Result<Option<TelemetryEvent>, CollectorError>;
}

/// Reports permissions and features declared in the Android manifest.
pub struct AndroidManifestExtractor {
    staging_root: PathBuf,
    gradle_output_root: PathBuf,
}

impl AndroidManifestExtractor {
    pub fn new(staging_root: PathBuf, gradle_output_root: PathBuf) -> Self {
        Self {
            staging_root,
            gradle_output_root,
        }
    }

    /// Creates an extractor using the roots from the `paths` configuration section.
    pub fn from_config(paths: &PathsConfig) -> Self {
        Self::new(paths.staging_root(), paths.gradle_output_root())
    }

    /// Manifest lookup settings for the given build.
    pub fn build_config(&self, ctx: &PostBuildContext) -> BuildConfig {
        BuildConfig {
            build_system: ctx.build_system,
            variant: ctx.variant,
            staging_root: self.staging_root.clone(),
            gradle_output_root: self.gradle_output_root.clone(),
        }
    }
}

impl PlatformExtractor for AndroidManifestExtractor {
    fn platform(&self) -> BuildTarget {
        BuildTarget::Android
    }

    fn collect(&self, ctx: &PostBuildContext) -> Result<Option<TelemetryEvent>, CollectorError> {
        let capabilities = ManifestCapabilityExtractor::extract(&self.build_config(ctx))?;
        Ok(capabilities.map(TelemetryEvent::BuildTargetPermissions))
    }
}

/// Platform extractors keyed by build target
#[derive(Default)]
pub struct PlatformRegistry {
    extractors: HashMap<BuildTarget, Box<dyn PlatformExtractor>>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in extractor, configured from `paths`.
    pub fn with_defaults(paths: &PathsConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(AndroidManifestExtractor::from_config(paths)));
        registry
    }

    /// Registers an extractor, replacing any previous one for the same target.
    pub fn register(&mut self, extractor: Box<dyn PlatformExtractor>) {
        self.extractors.insert(extractor.platform(), extractor);
    }

    pub fn get(&self, target: BuildTarget) -> Option<&dyn PlatformExtractor> {
        self.extractors.get(&target).map(|e| e.as_ref())
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}
