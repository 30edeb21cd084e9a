//! Generator configuration
//!
//! Loaded from TOML; every field has a default so an empty file (or no file)
//! is a valid configuration:
//!
//! ```toml
//! output-dir = "tests/generated"
//! failure-policy = "abort"        # or "continue"
//! annotation-policy = "warn"      # "ignore", "warn" or "deny"
//! write-mode = "if-changed"       # or "always"
//! ```

use crate::error::ConfigError;
use benchgen_artifact::WriteMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "tests/generated";

/// What a run does after a variant fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop at the first failure
    #[default]
    Abort,
    /// Record the failure and emit the remaining variants
    Continue,
}

/// Treatment of annotation keys that match no benchmark step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationPolicy {
    /// Accept silently
    Ignore,
    /// Log a warning and continue
    #[default]
    Warn,
    /// Fail the variant
    Deny,
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory receiving `.ads` / `.adb` files
    pub output_dir: PathBuf,
    /// Run behaviour on variant failure
    pub failure_policy: FailurePolicy,
    /// Unknown annotation key handling
    pub annotation_policy: AnnotationPolicy,
    /// File rewrite behaviour
    pub write_mode: WriteMode,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on syntax errors or unknown fields
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// With output directory
    #[inline]
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// With failure policy
    #[inline]
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// With annotation policy
    #[inline]
    #[must_use]
    pub fn with_annotation_policy(mut self, policy: AnnotationPolicy) -> Self {
        self.annotation_policy = policy;
        self
    }

    /// With write mode
    #[inline]
    #[must_use]
    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            failure_policy: FailurePolicy::Abort,
            annotation_policy: AnnotationPolicy::Warn,
            write_mode: WriteMode::IfChanged,
        }
    }
}
