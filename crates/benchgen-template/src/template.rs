//! Named-placeholder templates
//!
//! A [`Template`] is parsed once into literal and placeholder segments.
//! Placeholders are written `{name}`; `{{` and `}}` stand for literal braces.
//! Rendering checks every placeholder against the [`ParameterMap`] before
//! producing any output, so a template either renders completely or fails
//! with the first missing key.

use crate::error::TemplateError;
use crate::params::ParameterMap;
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z_][A-Za-z0-9_]*)\}|[{}]").expect("token pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `text` into a template called `name`
    ///
    /// # Errors
    /// Returns [`TemplateError::Malformed`] on a lone `{` or `}` or an
    /// invalid placeholder name
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, TemplateError> {
        let name = name.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in TOKEN.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            literal.push_str(&text[last..whole.start()]);
            last = whole.end();

            match (whole.as_str(), caps.get(1)) {
                (_, Some(key)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(key.as_str().to_string()));
                }
                ("{{", None) => literal.push('{'),
                ("}}", None) => literal.push('}'),
                (brace, None) => {
                    return Err(TemplateError::Malformed {
                        template: name,
                        offset: whole.start(),
                        reason: if brace == "{" {
                            "unclosed or invalid placeholder"
                        } else {
                            "unmatched closing brace"
                        },
                    });
                }
            }
        }

        literal.push_str(&text[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { name, segments })
    }

    /// Template name (used in error messages)
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placeholder names in order of first appearance
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(key) = segment {
                if !seen.contains(&key.as_str()) {
                    seen.push(key);
                }
            }
        }
        seen
    }

    /// Check that `params` covers every placeholder
    ///
    /// # Errors
    /// Returns [`TemplateError::MissingKey`] for the first uncovered placeholder
    pub fn check(&self, params: &ParameterMap) -> Result<(), TemplateError> {
        match self.placeholders().into_iter().find(|key| !params.contains(key)) {
            Some(key) => Err(TemplateError::missing_key(&self.name, key)),
            None => Ok(()),
        }
    }

    /// Render with `params`
    ///
    /// # Errors
    /// Returns [`TemplateError::MissingKey`] if any placeholder is unset;
    /// nothing is rendered in that case
    pub fn render(&self, params: &ParameterMap) -> Result<String, TemplateError> {
        let mut out = String::new();
        self.render_into(params, &mut out)?;
        Ok(out)
    }

    /// Render with `params`, appending to `out`
    ///
    /// # Errors
    /// Returns [`TemplateError::MissingKey`] if any placeholder is unset;
    /// `out` is untouched in that case
    pub fn render_into(&self, params: &ParameterMap, out: &mut String) -> Result<(), TemplateError> {
        self.check(params)?;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(key) => out.push_str(params.require(&self.name, key)?),
            }
        }
        Ok(())
    }
}
