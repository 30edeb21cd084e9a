//! Error types for fixture generation
//!
//! Every kind here is fatal for the variant it concerns; whether the rest of
//! the run continues is decided by [`crate::FailurePolicy`].

use benchgen_artifact::{ArtifactError, IdError, SinkError};
use benchgen_template::{ContainerKind, TemplateError};
use std::path::PathBuf;

/// Main generation error type
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Element type or key/value shape not handled by the kind's builder
    #[error("unsupported element category '{element}' for {kind}")]
    UnsupportedCategory {
        /// Container kind whose builder rejected the input
        kind: ContainerKind,
        /// The element type or shape as written
        element: String,
    },

    /// A template references a parameter the builder did not derive
    #[error("rendering {variant}: {source}")]
    Template {
        /// Variant identifier
        variant: String,
        /// Underlying template error (names the fragment and key)
        #[source]
        source: TemplateError,
    },

    /// Two descriptors derive the same artifact name
    #[error("identifier collision on '{stem}': {first} and {second}")]
    IdentifierCollision {
        /// Shared lower-cased file stem
        stem: String,
        /// First identifier
        first: String,
        /// Second identifier
        second: String,
    },

    /// Writing an artifact failed
    #[error("persisting {variant}: {source}")]
    Persist {
        /// Variant identifier
        variant: String,
        /// Underlying sink error
        #[source]
        source: SinkError,
    },

    /// Derived identifier is not usable as a procedure name
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdError),

    /// Rendered artifact failed validation
    #[error("invalid artifact for {variant}: {source}")]
    Artifact {
        /// Variant identifier
        variant: String,
        /// Underlying artifact error
        #[source]
        source: ArtifactError,
    },

    /// Annotation key matches no benchmark step (strict policy only)
    #[error("{variant}: annotation '{key}' matches no benchmark step")]
    UnknownAnnotation {
        /// Variant identifier
        variant: String,
        /// Key as written
        key: String,
    },
}

impl GenerateError {
    /// Create unsupported category error
    #[inline]
    pub fn unsupported(kind: ContainerKind, element: impl Into<String>) -> Self {
        Self::UnsupportedCategory {
            kind,
            element: element.into(),
        }
    }

    /// Check if this is a configuration mismatch rather than an IO failure
    #[inline]
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Persist { .. })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("io error reading {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
