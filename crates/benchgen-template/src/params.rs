//! Parameter mapping
//!
//! Flat placeholder -> replacement map produced by a variant's parameter
//! builder. Insertion order is kept so listings read in builder order.

use crate::error::TemplateError;
use indexmap::IndexMap;

/// Placeholder values for one variant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    values: IndexMap<String, String>,
}

impl ParameterMap {
    /// Create empty map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`ParameterMap::insert`]
    #[inline]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value for `key`, if set
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for `key`, or a missing key error naming `template`
    ///
    /// # Errors
    /// Returns [`TemplateError::MissingKey`] if `key` is unset
    pub fn require(&self, template: &str, key: &str) -> Result<&str, TemplateError> {
        self.get(key)
            .ok_or_else(|| TemplateError::missing_key(template, key))
    }

    /// Check if `key` is set
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_and_keeps_position() {
        let mut map = ParameterMap::new();
        map.insert("copy", "");
        map.insert("prefix", "V2.");
        map.insert("copy", ".Copy");

        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["copy", "prefix"]);
        assert_eq!(map.get("copy"), Some(".Copy"));
    }

    #[test]
    fn require_names_template_on_miss() {
        let map = ParameterMap::new().with("append", "V2.Append (C);");
        let err = map.require("fill", "expected").unwrap_err();
        assert_eq!(err, TemplateError::missing_key("fill", "expected"));
    }

    #[test]
    fn empty_value_is_present() {
        let map: ParameterMap = [("clear", "")].into_iter().collect();
        assert!(map.contains("clear"));
        assert_eq!(map.require("footer", "clear"), Ok(""));
    }
}
