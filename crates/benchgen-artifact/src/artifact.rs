//! Artifact kinds and the artifact pair
//!
//! Defines the sealed [`ArtifactKind`] trait and the two kinds a variant
//! produces: a [`Declaration`] (interface-only surface) and a [`Body`]
//! (the full benchmark procedure).

use crate::hash::ContentHash;
use crate::id::ArtifactId;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Trait for artifact kinds
///
/// This trait is **sealed** - only kinds defined within this crate can
/// implement it.
///
/// # Contract
/// - `TYPE_ID` is unique across kinds and stable
/// - `EXTENSION` is the file extension used when persisting
pub trait ArtifactKind: Send + Sync + 'static + Debug + private::Sealed {
    /// Kind identifier
    const TYPE_ID: &'static str;

    /// File extension (without the dot)
    const EXTENSION: &'static str;

    /// Validate text invariants
    ///
    /// Default implementation rejects blank text.
    ///
    /// # Errors
    /// Returns error if the text violates the kind's invariants
    fn validate(text: &str) -> Result<(), ArtifactError> {
        if text.trim().is_empty() {
            return Err(ArtifactError::InvariantViolation(format!(
                "{} artifact is empty",
                Self::TYPE_ID
            )));
        }
        Ok(())
    }
}

#[doc(hidden)]
pub mod private {
    /// Sealed trait marker
    pub trait Sealed {}
}

/// Declaration artifact: a single procedure taking the output sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration;

impl private::Sealed for Declaration {}

impl ArtifactKind for Declaration {
    const TYPE_ID: &'static str = "declaration";
    const EXTENSION: &'static str = "ads";
}

/// Body artifact: the benchmark procedure itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body;

impl private::Sealed for Body {}

impl ArtifactKind for Body {
    const TYPE_ID: &'static str = "body";
    const EXTENSION: &'static str = "adb";
}

/// Errors related to artifact construction
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// Text invariant violation
    #[error("content invariant violated: {0}")]
    InvariantViolation(String),
}

/// Content-hashed artifact text of kind `T`
///
/// # Invariants
/// - `hash` is always the Blake3 hash of `text`
/// - Immutable after construction
#[derive(Debug, PartialEq, Eq)]
pub struct Artifact<T: ArtifactKind> {
    hash: ContentHash,
    text: String,
    _phantom: PhantomData<T>,
}

impl<T: ArtifactKind> Clone for Artifact<T> {
    fn clone(&self) -> Self {
        Self {
            hash: self.hash,
            text: self.text.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: ArtifactKind> Artifact<T> {
    /// Create new artifact (validates and hashes the text)
    ///
    /// # Errors
    /// Returns error if text validation fails
    pub fn new(text: impl Into<String>) -> Result<Self, ArtifactError> {
        let text = text.into();
        T::validate(&text)?;
        Ok(Self {
            hash: ContentHash::compute(text.as_bytes()),
            text,
            _phantom: PhantomData,
        })
    }

    /// Content hash
    #[inline]
    #[must_use]
    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// Artifact text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Move text out of the artifact
    #[inline]
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Verify integrity (hash matches text)
    #[inline]
    #[must_use]
    pub fn verify(&self) -> bool {
        self.hash == ContentHash::compute(self.text.as_bytes())
    }

    /// File name for this artifact under the given identifier
    #[must_use]
    pub fn file_name(id: &ArtifactId) -> String {
        format!("{}.{}", id.stem(), T::EXTENSION)
    }
}

/// The two artifacts generated for one variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPair {
    /// Derived identifier (procedure name)
    pub id: ArtifactId,
    /// Declaration text
    pub declaration: Artifact<Declaration>,
    /// Body text
    pub body: Artifact<Body>,
}

impl ArtifactPair {
    /// Assemble a pair from rendered texts
    ///
    /// # Errors
    /// Returns error if either text fails validation
    pub fn new(
        id: ArtifactId,
        declaration: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, ArtifactError> {
        Ok(Self {
            id,
            declaration: Artifact::new(declaration)?,
            body: Artifact::new(body)?,
        })
    }

    /// Declaration file name (`<stem>.ads`)
    #[inline]
    #[must_use]
    pub fn declaration_file(&self) -> String {
        Artifact::<Declaration>::file_name(&self.id)
    }

    /// Body file name (`<stem>.adb`)
    #[inline]
    #[must_use]
    pub fn body_file(&self) -> String {
        Artifact::<Body>::file_name(&self.id)
    }
}
