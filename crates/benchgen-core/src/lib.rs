//! benchgen Core
//!
//! Generates the Ada benchmark fixtures of a container library: one
//! declaration (`.ads`) and one body (`.adb`) per container configuration.
//!
//! # Core Concepts
//!
//! - [`VariantDescriptor`]: one container configuration (kind, elements,
//!   wrapper base, storage, instantiation, algorithms binding, annotations)
//! - [`derive`]: the per-kind parameter builders
//! - [`Emitter`]: fragment selection, validation, rendering and persistence
//! - [`default_catalog`]: every configuration benchmarked by default
//! - [`GeneratorConfig`]: output directory and run policies, from TOML
//!
//! # Example
//!
//! ```rust,ignore
//! use benchgen_artifact::{DirectorySink, WriteMode};
//! use benchgen_core::{default_catalog, Emitter, FailurePolicy};
//!
//! let mut sink = DirectorySink::new("tests/generated", WriteMode::IfChanged);
//! let report = Emitter::standard().run(&default_catalog(), &mut sink, FailurePolicy::Abort)?;
//! assert!(report.passed());
//! ```

#![warn(unreachable_pub)]

pub mod catalog;
pub mod config;
pub mod emit;
pub mod error;
pub mod params;
pub mod report;
pub mod variant;

pub use catalog::{default_catalog, CATALOG_SIZE};
pub use config::{AnnotationPolicy, FailurePolicy, GeneratorConfig, DEFAULT_OUTPUT_DIR};
pub use emit::{check_identifiers, check_unique, Emitter, Rendered};
pub use error::{ConfigError, GenerateError};
pub use params::{derive, expected_count, VariantParams};
pub use report::{FailureRecord, RunReport, VariantRecord};
pub use variant::{
    AccessConvention, Base, Binding, CopySemantics, ElementType, Elements, MapShape, PropertyMap,
    StorageMode, VariantDescriptor,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
