//! Benchmark-step fragments
//!
//! A [`Fragment`] is one timed step of the generated benchmark. Besides its
//! body template it carries two structural flags:
//!
//! - `starts_group`: the step opens a new timing group in the report
//! - `has_expected_count`: the step's counter is asserted against the
//!   variant's `{expected}` value once timing ends

use crate::annotations::Annotations;
use crate::error::TemplateError;
use crate::params::ParameterMap;
use crate::template::Template;
use std::fmt::{self, Display, Formatter};

/// Parameter asserted by counting fragments
pub const EXPECTED_KEY: &str = "expected";

/// Identity of a fragment in the library
///
/// Several ids share a step name (`cursor loop`, `indexed`, ...): they are
/// the numeric-threshold and predicate flavours of the same family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum FragmentId {
    /// Fill the container with `Items_Count` elements
    Fill,
    /// Copy the container and destroy the copy
    Copy,
    /// Cursor loop counting elements `<= 2`
    CursorLoopThreshold,
    /// Cursor loop counting elements matching `Predicate`
    CursorLoopPredicate,
    /// `for E of` loop counting elements `<= 2`
    ForOfThreshold,
    /// `for E of` loop counting elements matching `Predicate`
    ForOfPredicate,
    /// Generic `Count_If` algorithm
    CountIf,
    /// Positional indexing counting elements `<= 2`
    IndexedThreshold,
    /// Positional indexing counting elements matching `Predicate`
    IndexedPredicate,
    /// String-key indexing counting values matching `Predicate`
    KeyedIndexedPredicate,
    /// Keyed lookup of every inserted key
    Find,
}

impl FragmentId {
    /// All fragment ids, in library order
    pub const ALL: [Self; 11] = [
        Self::Fill,
        Self::Copy,
        Self::CursorLoopThreshold,
        Self::CursorLoopPredicate,
        Self::ForOfThreshold,
        Self::ForOfPredicate,
        Self::CountIf,
        Self::IndexedThreshold,
        Self::IndexedPredicate,
        Self::KeyedIndexedPredicate,
        Self::Find,
    ];

    /// Step name as reported by the generated benchmark
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Copy => "copy",
            Self::CursorLoopThreshold | Self::CursorLoopPredicate => "cursor loop",
            Self::ForOfThreshold | Self::ForOfPredicate => "for-of loop",
            Self::CountIf => "count_if",
            Self::IndexedThreshold | Self::IndexedPredicate | Self::KeyedIndexedPredicate => {
                "indexed"
            }
            Self::Find => "find",
        }
    }
}

impl Display for FragmentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named, parameterized benchmark step
#[derive(Debug, Clone)]
pub struct Fragment {
    id: FragmentId,
    body: Template,
    starts_group: bool,
    has_expected_count: bool,
}

impl Fragment {
    /// Parse a fragment body
    ///
    /// # Errors
    /// Returns [`TemplateError::Malformed`] if the body does not parse
    pub fn new(
        id: FragmentId,
        body: &str,
        starts_group: bool,
        has_expected_count: bool,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            id,
            body: Template::parse(id.name(), body)?,
            starts_group,
            has_expected_count,
        })
    }

    /// Fragment id
    #[inline]
    #[must_use]
    pub fn id(&self) -> FragmentId {
        self.id
    }

    /// Step name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Whether the step opens a timing group
    #[inline]
    #[must_use]
    pub fn starts_group(&self) -> bool {
        self.starts_group
    }

    /// Whether the step asserts its counter
    #[inline]
    #[must_use]
    pub fn has_expected_count(&self) -> bool {
        self.has_expected_count
    }

    /// Every parameter this fragment reads
    #[must_use]
    pub fn required_keys(&self) -> Vec<&str> {
        let mut keys = self.body.placeholders();
        if self.has_expected_count && !keys.contains(&EXPECTED_KEY) {
            keys.push(EXPECTED_KEY);
        }
        keys
    }

    /// Render the decorated step
    ///
    /// The annotation for the step is looked up by step name; an unset
    /// annotation renders as an empty comment string.
    ///
    /// # Errors
    /// Returns [`TemplateError::MissingKey`] naming this fragment if a
    /// required parameter is unset
    pub fn render(
        &self,
        params: &ParameterMap,
        annotations: &Annotations,
    ) -> Result<String, TemplateError> {
        self.body.check(params)?;
        let expected = if self.has_expected_count {
            Some(params.require(self.name(), EXPECTED_KEY)?)
        } else {
            None
        };

        let mut out = format!(
            "\n\n      Co := 0;\n      Stdout.Start_Test (\"{}\", {}, Start_Group => {});",
            self.name(),
            ada_string(annotations.get(self.name())),
            ada_bool(self.starts_group),
        );
        self.body.render_into(params, &mut out)?;
        out.push_str("\n      Stdout.End_Test;");
        if let Some(expected) = expected {
            out.push_str(&format!(
                "\n      Assert (Co, {expected}, \"{}\");",
                self.name()
            ));
        }
        Ok(out)
    }
}

/// Ada string literal for `text`
///
/// Embedded quotes are doubled. Literals hold graphic characters only, so
/// line breaks and other control characters become spaces.
#[must_use]
pub fn ada_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\"\""),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Ada boolean literal
#[inline]
#[must_use]
pub const fn ada_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count_fragment() -> Fragment {
        Fragment::new(
            FragmentId::CountIf,
            "\n      Co := Count_If (V2, Predicate'Access);",
            false,
            true,
        )
        .unwrap()
    }

    #[test]
    fn renders_decorations_around_body() {
        let params = ParameterMap::new().with("expected", "2");
        let out = count_fragment().render(&params, &Annotations::new()).unwrap();
        assert_eq!(
            out,
            "\n\n      Co := 0;\n      Stdout.Start_Test (\"count_if\", \"\", Start_Group => False);\
             \n      Co := Count_If (V2, Predicate'Access);\
             \n      Stdout.End_Test;\
             \n      Assert (Co, 2, \"count_if\");"
        );
    }

    #[test]
    fn annotation_is_quoted() {
        let notes = Annotations::new().with("count_if", "conversion to \"String\"");
        let params = ParameterMap::new().with("expected", "Items_Count");
        let out = count_fragment().render(&params, &notes).unwrap();
        assert!(out.contains("\"conversion to \"\"String\"\"\""));
    }

    #[test]
    fn multi_line_annotation_stays_on_one_line() {
        let notes = Annotations::new().with("count_if", "first line\nsecond\r\tline");
        let params = ParameterMap::new().with("expected", "2");
        let out = count_fragment().render(&params, &notes).unwrap();
        assert!(out.contains(
            "Stdout.Start_Test (\"count_if\", \"first line second  line\", Start_Group => False);"
        ));
    }

    #[test]
    fn ada_string_escapes() {
        assert_eq!(ada_string(""), "\"\"");
        assert_eq!(ada_string("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(ada_string("a\nb"), "\"a b\"");
    }

    #[test]
    fn no_assert_without_expected_count() {
        let fill = Fragment::new(FragmentId::Fill, "\n         {append}", true, false).unwrap();
        let params = ParameterMap::new().with("append", "V2.Append (C);");
        let out = fill.render(&params, &Annotations::new()).unwrap();
        assert!(out.contains("Start_Group => True"));
        assert!(!out.contains("Assert"));
    }

    #[test]
    fn missing_expected_is_reported_for_fragment() {
        let err = count_fragment()
            .render(&ParameterMap::new(), &Annotations::new())
            .unwrap_err();
        assert_eq!(err, TemplateError::missing_key("count_if", "expected"));
    }

    #[test]
    fn required_keys_include_expected() {
        let find = Fragment::new(FragmentId::Find, "Predicate (V2{get})", true, true).unwrap();
        assert_eq!(find.required_keys(), ["get", "expected"]);
    }

    #[test]
    fn names_are_shared_within_family() {
        assert_eq!(FragmentId::IndexedThreshold.name(), FragmentId::KeyedIndexedPredicate.name());
        assert_ne!(FragmentId::Fill.name(), FragmentId::Find.name());
    }
}
