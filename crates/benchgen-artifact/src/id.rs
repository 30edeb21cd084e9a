//! Artifact identifiers
//!
//! Provides [`ArtifactId`], the derived name of one variant's fixture. The
//! identifier doubles as the generated procedure name, so it must be a valid
//! Ada identifier; file names use its lower-cased form ([`ArtifactId::stem`]).

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Identifier of a generated artifact pair
///
/// # Invariants
/// - Starts with an ASCII letter
/// - Only `[A-Za-z0-9_]`
/// - No doubled underscore, no trailing underscore
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    /// Validate and wrap an identifier
    ///
    /// # Errors
    /// Returns [`IdError`] if `name` is not a valid Ada identifier
    pub fn new(name: impl Into<String>) -> Result<Self, IdError> {
        let name = name.into();
        validate(&name)?;
        Ok(Self(name))
    }

    /// Join segments with `_` into an identifier
    ///
    /// # Errors
    /// Returns [`IdError`] if the joined text is not a valid identifier
    pub fn from_segments<I, S>(segments: I) -> Result<Self, IdError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("_");
        Self::new(joined)
    }

    /// Identifier as written (case preserved)
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for file names and collision checks
    #[inline]
    #[must_use]
    pub fn stem(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

fn validate(name: &str) -> Result<(), IdError> {
    let Some(first) = name.chars().next() else {
        return Err(IdError::Empty);
    };
    if !first.is_ascii_alphabetic() {
        return Err(IdError::InvalidStart(name.to_string()));
    }
    if let Some(c) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(IdError::InvalidChar {
            name: name.to_string(),
            found: c,
        });
    }
    if name.contains("__") || name.ends_with('_') {
        return Err(IdError::BadUnderscore(name.to_string()));
    }
    Ok(())
}

impl Display for ArtifactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ArtifactId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ArtifactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors for invalid identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// Empty identifier
    #[error("identifier is empty")]
    Empty,

    /// Does not start with a letter
    #[error("identifier must start with a letter: '{0}'")]
    InvalidStart(String),

    /// Contains a character outside `[A-Za-z0-9_]`
    #[error("invalid character '{found}' in identifier '{name}'")]
    InvalidChar {
        /// Offending identifier
        name: String,
        /// First invalid character
        found: char,
    },

    /// Doubled or trailing underscore
    #[error("identifier has a doubled or trailing underscore: '{0}'")]
    BadUnderscore(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_catalog_style_names() {
        let id = ArtifactId::new("List_Limited_Indef_Spark_Unbounded_Spark_Integer").unwrap();
        assert_eq!(id.stem(), "list_limited_indef_spark_unbounded_spark_integer");
    }

    #[test]
    fn from_segments_joins_with_underscore() {
        let id = ArtifactId::from_segments(["Map", "hashed", "Def", "Def", "Unbounded", "IntInt"])
            .unwrap();
        assert_eq!(id.as_str(), "Map_hashed_Def_Def_Unbounded_IntInt");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(ArtifactId::new(""), Err(IdError::Empty));
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(matches!(ArtifactId::new("12_List"), Err(IdError::InvalidStart(_))));
    }

    #[test]
    fn rejects_dash() {
        assert!(matches!(
            ArtifactId::new("Map_Def-Def"),
            Err(IdError::InvalidChar { found: '-', .. })
        ));
    }

    #[test]
    fn rejects_empty_segment() {
        let result = ArtifactId::from_segments(["List", "", "Def"]);
        assert!(matches!(result, Err(IdError::BadUnderscore(_))));
    }

    proptest! {
        #[test]
        fn stem_is_lowercase_of_name(name in "[A-Za-z][A-Za-z0-9]{0,8}(_[A-Za-z0-9]{1,8}){0,5}") {
            let id = ArtifactId::new(name.clone()).unwrap();
            prop_assert_eq!(id.stem(), name.to_ascii_lowercase());
        }
    }
}
