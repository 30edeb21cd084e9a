//! benchgen Artifact System
//!
//! Typed, content-hashed fixture artifacts and the sinks that persist them.
//!
//! # Core Concepts
//!
//! - [`ArtifactId`]: validated identifier of one variant's fixture
//! - [`Artifact<T>`]: hashed text of a sealed [`ArtifactKind`] ([`Declaration`] or [`Body`])
//! - [`ArtifactPair`]: the declaration and body generated for one variant
//! - [`ContentHash`]: 32-byte Blake3 hash
//! - [`ArtifactSink`]: persistence boundary ([`DirectorySink`], [`MemorySink`])
//!
//! # Example
//!
//! ```rust,ignore
//! use benchgen_artifact::{ArtifactId, ArtifactPair, ArtifactSink, DirectorySink, WriteMode};
//!
//! let id = ArtifactId::new("List_Ada12_Def_Unbounded_Integer")?;
//! let pair = ArtifactPair::new(id, decl_text, body_text)?;
//! DirectorySink::new("tests/generated", WriteMode::IfChanged).persist(&pair)?;
//! ```

#![warn(unreachable_pub)]

mod artifact;
mod hash;
mod id;
mod sink;

pub use artifact::{Artifact, ArtifactError, ArtifactKind, ArtifactPair, Body, Declaration};
pub use hash::{ContentHash, HashError};
pub use id::{ArtifactId, IdError};
pub use sink::{ArtifactSink, DirectorySink, MemorySink, PersistOutcome, SinkError, WriteMode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
