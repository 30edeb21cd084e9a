//! Template errors

/// Errors raised while parsing or rendering templates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A placeholder has no value in the parameter map
    #[error("template '{template}' references missing parameter '{key}'")]
    MissingKey {
        /// Template or fragment name
        template: String,
        /// Placeholder name
        key: String,
    },

    /// Unbalanced or unparsable brace
    #[error("malformed template '{template}' at byte {offset}: {reason}")]
    Malformed {
        /// Template name
        template: String,
        /// Byte offset of the offending brace
        offset: usize,
        /// What was wrong
        reason: &'static str,
    },
}

impl TemplateError {
    /// Create missing key error
    #[inline]
    pub fn missing_key(template: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingKey {
            template: template.into(),
            key: key.into(),
        }
    }

    /// Placeholder name for [`TemplateError::MissingKey`]
    #[must_use]
    pub fn missing(&self) -> Option<&str> {
        match self {
            Self::MissingKey { key, .. } => Some(key),
            Self::Malformed { .. } => None,
        }
    }
}
