//! Build settings domain types
//!
//! Describes the build that just completed: which platform it targeted,
//! which Android build system produced it, and which variant was built.
//! These values are supplied by the build pipeline on every invocation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::viewport::ViewportDescriptor;

/// Platform a build was produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildTarget {
    Android,
    Ios,
    StandaloneWindows,
    StandaloneOsx,
    StandaloneLinux,
    WebGl,
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BuildTarget::Android => "android",
            BuildTarget::Ios => "ios",
            BuildTarget::StandaloneWindows => "standalone_windows",
            BuildTarget::StandaloneOsx => "standalone_osx",
            BuildTarget::StandaloneLinux => "standalone_linux",
            BuildTarget::WebGl => "web_gl",
        };
        write!(f, "{}", s)
    }
}

/// Android build system used to assemble the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildSystem {
    /// The editor's built-in builder, which stages files before packaging
    #[default]
    Internal,
    /// Gradle, which writes merged manifests per variant
    Gradle,
}

/// Build variant (Gradle build type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildVariant {
    #[default]
    Debug,
    Release,
}

impl BuildVariant {
    /// Directory name used for this variant below the Gradle output root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            BuildVariant::Debug => "debug",
            BuildVariant::Release => "release",
        }
    }
}

/// Default editor behavior mode for new scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorBehaviorMode {
    #[default]
    #[serde(rename = "3d")]
    Mode3D,
    #[serde(rename = "2d")]
    Mode2D,
}

impl EditorBehaviorMode {
    pub fn is_2d(&self) -> bool {
        matches!(self, EditorBehaviorMode::Mode2D)
    }
}

/// Inputs needed to locate the Android manifest produced by a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub build_system: BuildSystem,
    pub variant: BuildVariant,
    /// Staging directory of the internal build system
    pub staging_root: PathBuf,
    /// Merged-manifest root of Gradle builds
    pub gradle_output_root: PathBuf,
}

/// Everything the build pipeline hands over when a build completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostBuildContext {
    pub target: BuildTarget,
    #[serde(default)]
    pub build_system: BuildSystem,
    #[serde(default)]
    pub variant: BuildVariant,
    /// Scene views open in the editor when the build finished
    #[serde(default)]
    pub viewports: Vec<ViewportDescriptor>,
    #[serde(default)]
    pub default_behavior_mode: EditorBehaviorMode,
}

impl PostBuildContext {
    /// Creates a context for `target` with default Android settings and no open views.
    pub fn new(target: BuildTarget) -> Self {
        Self {
            target,
            build_system: BuildSystem::default(),
            variant: BuildVariant::default(),
            viewports: Vec::new(),
            default_behavior_mode: EditorBehaviorMode::default(),
        }
    }

    pub fn with_build_system(mut self, build_system: BuildSystem) -> Self {
        self.build_system = build_system;
        self
    }

    pub fn with_variant(mut self, variant: BuildVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_viewports(mut self, viewports: Vec<ViewportDescriptor>) -> Self {
        self.viewports = viewports;
        self
    }

    pub fn with_default_behavior_mode(mut self, mode: EditorBehaviorMode) -> Self {
        self.default_behavior_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_target_display() {
        assert_eq!(BuildTarget::Android.to_string(), "android");
        assert_eq!(BuildTarget::StandaloneLinux.to_string(), "standalone_linux");
    }

    #[test]
    fn test_build_target_serialization() {
        let json = serde_json::to_string(&BuildTarget::WebGl).unwrap();
        assert_eq!(json, "\"web_gl\"");
        let back: BuildTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BuildTarget::WebGl);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(BuildSystem::default(), BuildSystem::Internal);
        assert_eq!(BuildVariant::default(), BuildVariant::Debug);
        assert!(!EditorBehaviorMode::default().is_2d());
        assert!(EditorBehaviorMode::Mode2D.is_2d());
    }

    #[test]
    fn test_variant_dir_name() {
        assert_eq!(BuildVariant::Debug.dir_name(), "debug");
        assert_eq!(BuildVariant::Release.dir_name(), "release");
    }

    #[test]
    fn test_context_deserializes_with_defaults() {
        let ctx: PostBuildContext = serde_json::from_str(r#"{"target":"android"}"#).unwrap();
        assert_eq!(ctx, PostBuildContext::new(BuildTarget::Android));
    }

    #[test]
    fn test_context_builder() {
        let ctx = PostBuildContext::new(BuildTarget::Android)
            .with_build_system(BuildSystem::Gradle)
            .with_variant(BuildVariant::Release)
            .with_viewports(vec![ViewportDescriptor::new(true)])
            .with_default_behavior_mode(EditorBehaviorMode::Mode2D);
        assert_eq!(ctx.build_system, BuildSystem::Gradle);
        assert_eq!(ctx.variant, BuildVariant::Release);
        assert_eq!(ctx.viewports.len(), 1);
        assert!(ctx.default_behavior_mode.is_2d());
    }
}
