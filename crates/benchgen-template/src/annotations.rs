//! Per-step annotations
//!
//! Free-text remarks attached to benchmark steps of one variant and emitted
//! next to the step's timing. Lookups never fail: an unset step simply gets
//! an empty annotation.
//!
//! Keys are normalised (ASCII-lowercased, non-alphanumerics dropped) on both
//! insert and lookup, so `cursorloop`, `Cursor Loop` and `cursor loop` all
//! address the `cursor loop` step.

use crate::library::FragmentLibrary;
use std::collections::BTreeMap;

/// Sparse step-name -> annotation map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    notes: BTreeMap<String, Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    text: String,
}

fn normalize(key: &str) -> String {
    key.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl Annotations {
    /// Create empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an annotation, replacing any previous one for the same step
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        self.notes.insert(
            normalize(&key),
            Entry {
                key,
                text: text.into(),
            },
        );
    }

    /// Builder-style [`Annotations::insert`]
    #[inline]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Annotation for a step, or `""` if unset
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.notes
            .get(&normalize(key))
            .map_or("", |entry| entry.text.as_str())
    }

    /// Keys that address no step of `library`
    #[must_use]
    pub fn unknown_keys(&self, library: &FragmentLibrary) -> Vec<&str> {
        let steps: Vec<String> = library.step_names().into_iter().map(normalize).collect();
        self.notes
            .iter()
            .filter(|(normalized, _)| !steps.contains(normalized))
            .map(|(_, entry)| entry.key.as_str())
            .collect()
    }

    /// Number of annotations
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Annotations
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut notes = Self::new();
        for (k, v) in iter {
            notes.insert(k, v);
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unset_key_is_empty() {
        let notes = Annotations::new().with("fill", "slow path");
        assert_eq!(notes.get("unset_key"), "");
        assert_eq!(notes.get("fill"), "slow path");
    }

    #[test]
    fn keys_match_across_spelling() {
        let notes = Annotations::new().with("cursorloop", "copies the string");
        assert_eq!(notes.get("cursor loop"), "copies the string");

        let notes = Annotations::new().with("forofloop", "dispatching");
        assert_eq!(notes.get("for-of loop"), "dispatching");

        let notes = Annotations::new().with("countif", "conversion");
        assert_eq!(notes.get("count_if"), "conversion");
    }

    #[test]
    fn unknown_keys_reported_as_written() {
        let notes: Annotations = [("countif", "ok"), ("cursor_lop", "typo")].into_iter().collect();
        assert_eq!(notes.unknown_keys(FragmentLibrary::standard()), ["cursor_lop"]);
    }

    #[test]
    fn later_insert_wins() {
        let notes = Annotations::new().with("Fill", "a").with("fill", "b");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.get("FILL"), "b");
    }

    proptest! {
        #[test]
        fn lookup_never_fails(key in ".*", stored in "[a-z]{1,10}") {
            let notes = Annotations::new().with(stored.clone(), "note");
            let got = notes.get(&key);
            prop_assert!(got.is_empty() || got == "note");
        }

        #[test]
        fn empty_set_always_empty(key in ".*") {
            let notes = Annotations::new();
            prop_assert_eq!(notes.get(&key), "");
        }
    }
}
