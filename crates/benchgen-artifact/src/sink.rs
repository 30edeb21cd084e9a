//! Persistence of artifact pairs
//!
//! [`ArtifactSink`] is the only boundary through which generated text leaves
//! the process. [`DirectorySink`] writes `<stem>.ads` / `<stem>.adb` files;
//! [`MemorySink`] keeps them in memory.

use crate::artifact::ArtifactPair;
use crate::hash::ContentHash;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Destination for generated artifact pairs
pub trait ArtifactSink {
    /// Persist both artifacts of a pair
    ///
    /// # Errors
    /// Returns [`SinkError`] if either artifact cannot be stored
    fn persist(&mut self, pair: &ArtifactPair) -> Result<PersistOutcome, SinkError>;
}

/// What a sink did with a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistOutcome {
    /// At least one file was (re)written
    Written,
    /// Both files already held identical content
    Unchanged,
}

/// When a [`DirectorySink`] rewrites existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Always write
    Always,
    /// Skip files whose content hash already matches
    #[default]
    IfChanged,
}

/// Sink writing files into one output directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
    mode: WriteMode,
}

impl DirectorySink {
    /// Create sink rooted at `root` (created on first write)
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            root: root.into(),
            mode,
        }
    }

    fn write_file(&self, name: &str, text: &str, hash: &ContentHash) -> Result<bool, SinkError> {
        let path = self.root.join(name);
        if self.mode == WriteMode::IfChanged {
            if let Ok(existing) = std::fs::read(&path) {
                if ContentHash::compute(&existing) == *hash {
                    tracing::trace!(path = %path.display(), "unchanged");
                    return Ok(false);
                }
            }
        }
        std::fs::write(&path, text).map_err(|e| SinkError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "written");
        Ok(true)
    }
}

impl ArtifactSink for DirectorySink {
    fn persist(&mut self, pair: &ArtifactPair) -> Result<PersistOutcome, SinkError> {
        std::fs::create_dir_all(&self.root).map_err(|e| SinkError::io(&self.root, e))?;

        let wrote_decl = self.write_file(
            &pair.declaration_file(),
            pair.declaration.text(),
            pair.declaration.hash(),
        )?;
        let wrote_body = self.write_file(&pair.body_file(), pair.body.text(), pair.body.hash())?;

        Ok(if wrote_decl || wrote_body {
            PersistOutcome::Written
        } else {
            PersistOutcome::Unchanged
        })
    }
}

/// In-memory sink keyed by file name
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    /// Create empty sink
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored text for a file name
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name).map(String::as_str)
    }

    /// All stored files, ordered by name
    #[inline]
    #[must_use]
    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    /// Number of stored files
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if nothing has been stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn persist(&mut self, pair: &ArtifactPair) -> Result<PersistOutcome, SinkError> {
        let decl = self
            .files
            .insert(pair.declaration_file(), pair.declaration.text().to_string());
        let body = self
            .files
            .insert(pair.body_file(), pair.body.text().to_string());

        let unchanged = decl.as_deref() == Some(pair.declaration.text())
            && body.as_deref() == Some(pair.body.text());
        Ok(if unchanged {
            PersistOutcome::Unchanged
        } else {
            PersistOutcome::Written
        })
    }
}

/// Errors raised while persisting
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// IO error on a path
    #[error("io error writing {path}: {source}")]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    /// Create IO error for path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ArtifactId;

    fn pair(body: &str) -> ArtifactPair {
        ArtifactPair::new(
            ArtifactId::new("List_Ada12_Def_Unbounded_Integer").unwrap(),
            "procedure List_Ada12_Def_Unbounded_Integer;",
            body,
        )
        .unwrap()
    }

    #[test]
    fn directory_sink_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("generated"), WriteMode::IfChanged);

        let outcome = sink.persist(&pair("body v1")).unwrap();
        assert_eq!(outcome, PersistOutcome::Written);

        let root = dir.path().join("generated");
        let body = std::fs::read_to_string(root.join("list_ada12_def_unbounded_integer.adb")).unwrap();
        assert_eq!(body, "body v1");
        assert!(root.join("list_ada12_def_unbounded_integer.ads").exists());
    }

    #[test]
    fn if_changed_skips_identical_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path(), WriteMode::IfChanged);

        sink.persist(&pair("same")).unwrap();
        assert_eq!(sink.persist(&pair("same")).unwrap(), PersistOutcome::Unchanged);
        assert_eq!(sink.persist(&pair("other")).unwrap(), PersistOutcome::Written);
    }

    #[test]
    fn always_mode_rewrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path(), WriteMode::Always);

        sink.persist(&pair("same")).unwrap();
        assert_eq!(sink.persist(&pair("same")).unwrap(), PersistOutcome::Written);
    }

    #[test]
    fn directory_sink_reports_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let mut sink = DirectorySink::new(blocker.join("sub"), WriteMode::Always);
        let err = sink.persist(&pair("x")).unwrap_err();
        assert!(matches!(err, SinkError::Io { .. }));
    }

    #[test]
    fn memory_sink_tracks_changes() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());

        assert_eq!(sink.persist(&pair("a")).unwrap(), PersistOutcome::Written);
        assert_eq!(sink.persist(&pair("a")).unwrap(), PersistOutcome::Unchanged);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.get("list_ada12_def_unbounded_integer.adb"), Some("a"));
    }
}
