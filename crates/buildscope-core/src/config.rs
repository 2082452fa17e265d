//! Configuration module for buildscope.
//!
//! Provides typed configuration structs that map to the YAML configuration file,
//! with loading, validation, defaults, and a builder pattern for programmatic use.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for buildscope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
    pub sink: SinkConfig,
}

/// Locations of build output inspected after a build.
///
/// `staging_area` and `gradle_output` are relative to `project_root`
/// unless they are absolute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root of the editor project the build ran in.
    pub project_root: PathBuf,
    /// Staging directory used by the internal Android build system.
    pub staging_area: PathBuf,
    /// Merged-manifest output directory of Gradle builds (per variant below it).
    pub gradle_output: PathBuf,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
    /// Emit JSON-formatted log lines instead of human-readable ones.
    pub json: bool,
}

/// Event sink settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Directory where emitted events are written as JSON files.
    pub events_dir: PathBuf,
}

impl PathsConfig {
    /// Absolute (or project-relative) staging root.
    pub fn staging_root(&self) -> PathBuf {
        self.project_root.join(&self.staging_area)
    }

    /// Absolute (or project-relative) Gradle manifest output root.
    pub fn gradle_output_root(&self) -> PathBuf {
        self.project_root.join(&self.gradle_output)
    }
}

// ---------------------------------------------------------------------------
// Config::load()
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/buildscope/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("buildscope")
            .join("config.yaml")
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            staging_area: PathBuf::from("Temp/StagingArea"),
            gradle_output: PathBuf::from("Temp/gradleOut/build/intermediates/manifests/full"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            events_dir: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("~/.local/share"))
                .join("buildscope")
                .join("events"),
        }
    }
}

// ---------------------------------------------------------------------------
// Config::validate()
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"paths.staging_area"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- paths ---
        for (field, value) in [
            ("paths.project_root", &self.paths.project_root),
            ("paths.staging_area", &self.paths.staging_area),
            ("paths.gradle_output", &self.paths.gradle_output),
        ] {
            if value.as_os_str().is_empty() {
                errors.push(ValidationError {
                    field: field.into(),
                    message: "must not be empty".into(),
                });
            }
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        // --- sink ---
        if self.sink.events_dir.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "sink.events_dir".into(),
                message: "must not be empty".into(),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`Config`] programmatically.
///
/// Starts from [`Config::default`] and allows selective overrides.
///
/// # Example
///
/// ```rust,no_run
/// use buildscope_core::config::ConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = ConfigBuilder::new()
///     .project_root(PathBuf::from("/home/user/MyGame"))
///     .logging_level("debug")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder initialised with [`Config::default`] values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    // --- paths ---

    pub fn project_root(mut self, root: PathBuf) -> Self {
        self.config.paths.project_root = root;
        self
    }

    pub fn staging_area(mut self, dir: PathBuf) -> Self {
        self.config.paths.staging_area = dir;
        self
    }

    pub fn gradle_output(mut self, dir: PathBuf) -> Self {
        self.config.paths.gradle_output = dir;
        self
    }

    // --- logging ---

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn logging_json(mut self, json: bool) -> Self {
        self.config.logging.json = json;
        self
    }

    // --- sink ---

    pub fn events_dir(mut self, dir: PathBuf) -> Self {
        self.config.sink.events_dir = dir;
        self
    }

    // --- build ---

    /// Consume the builder and return the finished [`Config`].
    pub fn build(self) -> Config {
        self.config
    }

    /// Build and validate in one step. Returns `Err` with the list of
    /// validation errors if the configuration is invalid.
    pub fn build_validated(self) -> Result<Config, Vec<ValidationError>> {
        let config = self.build();
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors)
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    // -- Defaults --

    #[test]
    fn default_config_has_sensible_values() {
        let cfg = Config::default();
        assert_eq!(cfg.paths.project_root, PathBuf::from("."));
        assert_eq!(cfg.paths.staging_area, PathBuf::from("Temp/StagingArea"));
        assert_eq!(
            cfg.paths.gradle_output,
            PathBuf::from("Temp/gradleOut/build/intermediates/manifests/full")
        );
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.logging.json);
        assert!(cfg.sink.events_dir.ends_with("buildscope/events"));
    }

    #[test]
    fn default_config_passes_validation() {
        let errors = Config::default().validate();
        assert!(errors.is_empty(), "unexpected validation errors: {errors:?}");
    }

    #[test]
    fn roots_are_joined_onto_project_root() {
        let cfg = ConfigBuilder::new()
            .project_root(PathBuf::from("/work/game"))
            .build();
        assert_eq!(
            cfg.paths.staging_root(),
            PathBuf::from("/work/game/Temp/StagingArea")
        );
        assert_eq!(
            cfg.paths.gradle_output_root(),
            PathBuf::from("/work/game/Temp/gradleOut/build/intermediates/manifests/full")
        );
    }

    #[test]
    fn absolute_staging_area_overrides_project_root() {
        let cfg = ConfigBuilder::new()
            .project_root(PathBuf::from("/work/game"))
            .staging_area(PathBuf::from("/ci/staging"))
            .build();
        assert_eq!(cfg.paths.staging_root(), PathBuf::from("/ci/staging"));
    }

    // -- Loading --

    #[test]
    fn load_from_yaml_file() {
        let yaml = r#"
paths:
  project_root: /tmp/game
  staging_area: Build/Staging
  gradle_output: Build/gradle/manifests
logging:
  level: debug
  json: true
sink:
  events_dir: /tmp/events
"#;
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(yaml.as_bytes()).unwrap();
        tmp.flush().unwrap();

        let cfg = Config::load(tmp.path()).expect("load config");
        assert_eq!(cfg.paths.project_root, PathBuf::from("/tmp/game"));
        assert_eq!(cfg.paths.staging_area, PathBuf::from("Build/Staging"));
        assert_eq!(cfg.paths.gradle_output, PathBuf::from("Build/gradle/manifests"));
        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.logging.json);
        assert_eq!(cfg.sink.events_dir, PathBuf::from("/tmp/events"));
    }

    #[test]
    fn load_partial_yaml_fills_defaults() {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(b"logging:\n  level: warn\n").unwrap();
        tmp.flush().unwrap();

        let cfg = Config::load(tmp.path()).expect("load config");
        assert_eq!(cfg.logging.level, "warn");
        assert!(!cfg.logging.json);
        assert_eq!(cfg.paths.staging_area, PathBuf::from("Temp/StagingArea"));
    }

    #[test]
    fn load_or_default_returns_default_on_missing_file() {
        let cfg = Config::load_or_default(Path::new("/nonexistent/config.yaml"));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn load_returns_error_on_invalid_yaml() {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(b"not: [valid: yaml: {{{").unwrap();
        tmp.flush().unwrap();

        assert!(Config::load(tmp.path()).is_err());
    }

    #[test]
    fn default_path_ends_with_config_yaml() {
        let path = Config::default_path();
        assert!(path.ends_with("buildscope/config.yaml"));
    }

    // -- Validation --

    #[test]
    fn validate_catches_invalid_log_level() {
        let mut cfg = Config::default();
        cfg.logging.level = "verbose".into();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "logging.level"));
    }

    #[test]
    fn validate_catches_empty_paths() {
        let mut cfg = Config::default();
        cfg.paths.staging_area = PathBuf::new();
        cfg.sink.events_dir = PathBuf::new();
        let fields: Vec<String> = cfg.validate().into_iter().map(|e| e.field).collect();
        assert!(fields.contains(&"paths.staging_area".to_string()));
        assert!(fields.contains(&"sink.events_dir".to_string()));
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError {
            field: "logging.level".into(),
            message: "bad".into(),
        };
        assert_eq!(err.to_string(), "logging.level: bad");
    }

    // -- Builder --

    #[test]
    fn builder_validated_rejects_bad_config() {
        let result = ConfigBuilder::new().logging_level("loud").build_validated();
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "logging.level");
    }

    #[test]
    fn builder_overrides_sink_and_logging() {
        let cfg = ConfigBuilder::new()
            .events_dir(PathBuf::from("/tmp/ev"))
            .logging_json(true)
            .build_validated()
            .expect("valid config");
        assert_eq!(cfg.sink.events_dir, PathBuf::from("/tmp/ev"));
        assert!(cfg.logging.json);
    }
}
