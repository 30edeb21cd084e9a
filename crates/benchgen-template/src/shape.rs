//! Container shape: the inputs of fragment selection

use std::fmt::{self, Display, Formatter};

/// Container category under benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum ContainerKind {
    /// Doubly linked list
    List,
    /// Indexable vector
    Vector,
    /// Key/value map
    Map,
}

impl ContainerKind {
    /// All kinds
    pub const ALL: [Self; 3] = [Self::List, Self::Vector, Self::Map];

    /// Name as used in generated identifiers and type names
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Vector => "Vector",
            Self::Map => "Map",
        }
    }
}

impl Display for ContainerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element class driving predicate choice
///
/// Numeric elements are counted with a `<= 2` threshold; textual elements
/// go through the `Predicate` function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum ElementClass {
    /// Integers (or integer key/value pairs)
    Numeric,
    /// Strings of any storage flavour (or string key/value pairs)
    Textual,
}

impl ElementClass {
    /// All classes
    pub const ALL: [Self; 2] = [Self::Numeric, Self::Textual];
}

impl Display for ElementClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Numeric => "numeric",
            Self::Textual => "textual",
        })
    }
}
