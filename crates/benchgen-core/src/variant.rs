//! Variant descriptors
//!
//! A [`VariantDescriptor`] names one concrete container configuration to
//! benchmark. It is built once per configured combination and never mutated
//! afterwards; the `with_*` methods only apply while constructing it.

use crate::error::GenerateError;
use benchgen_template::{Annotations, ContainerKind, ElementClass};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Element type of a list or vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// `Integer`
    Integer,
    /// Indefinite `String`
    String,
    /// `Unbounded_String`
    UnboundedString,
}

impl ElementType {
    /// Name as used in identifiers
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::String => "String",
            Self::UnboundedString => "Unbounded_String",
        }
    }

    /// Element class for fragment selection
    #[must_use]
    pub const fn class(&self) -> ElementClass {
        match self {
            Self::Integer => ElementClass::Numeric,
            Self::String | Self::UnboundedString => ElementClass::Textual,
        }
    }
}

impl ElementType {
    /// Parse an element type for a `kind` container, case-insensitively
    ///
    /// # Errors
    /// [`GenerateError::UnsupportedCategory`] naming `kind` when the type is
    /// unknown or `kind` holds pairs
    pub fn parse(kind: ContainerKind, s: &str) -> Result<Self, GenerateError> {
        match (kind, s.to_ascii_lowercase().as_str()) {
            (ContainerKind::Map, _) => Err(GenerateError::unsupported(kind, s)),
            (_, "integer") => Ok(Self::Integer),
            (_, "string") => Ok(Self::String),
            (_, "unbounded_string") => Ok(Self::UnboundedString),
            _ => Err(GenerateError::unsupported(kind, s)),
        }
    }
}

/// Key/value element types of a map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapShape {
    /// `Integer` keys and values
    IntInt,
    /// `String` keys and values
    StrStr,
}

impl MapShape {
    /// Name as used in identifiers
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IntInt => "IntInt",
            Self::StrStr => "StrStr",
        }
    }

    /// Element class for fragment selection
    #[must_use]
    pub const fn class(&self) -> ElementClass {
        match self {
            Self::IntInt => ElementClass::Numeric,
            Self::StrStr => ElementClass::Textual,
        }
    }
}

impl FromStr for MapShape {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "intint" => Ok(Self::IntInt),
            "strstr" => Ok(Self::StrStr),
            _ => Err(GenerateError::unsupported(ContainerKind::Map, s)),
        }
    }
}

/// How the container type gets copied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopySemantics {
    /// `:=` copies the container
    #[default]
    Implicit,
    /// Limited type: needs `.Copy` and explicit `Clear` calls
    Explicit,
}

/// Wrapper discipline of the container (`Ada12`, `Controlled`, `Limited`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    name: String,
    copy: CopySemantics,
}

impl Base {
    /// Base named `name`; `Limited` bases require explicit copies
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let copy = if name.eq_ignore_ascii_case("limited") {
            CopySemantics::Explicit
        } else {
            CopySemantics::Implicit
        };
        Self { name, copy }
    }

    /// Base name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy semantics
    #[inline]
    #[must_use]
    pub fn copy(&self) -> CopySemantics {
        self.copy
    }
}

/// Node storage strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageMode {
    /// Fixed capacity, set by discriminant
    Bounded,
    /// Heap-allocated nodes
    Unbounded,
    /// Unbounded, elements returned by reference
    UnboundedRef,
    /// Unbounded SPARK-compatible implementation
    UnboundedSpark,
}

impl StorageMode {
    /// Name as used in identifiers
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bounded => "Bounded",
            Self::Unbounded => "Unbounded",
            Self::UnboundedRef => "Unbounded_Ref",
            Self::UnboundedSpark => "Unbounded_Spark",
        }
    }

    /// Whether construction needs a capacity discriminant
    #[inline]
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded)
    }
}

impl Display for StorageMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property map used by the generic `Count_If`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyMap {
    /// Element returned by value
    #[default]
    Returned,
    /// Element accessor
    Element,
    /// Key/value pair (library maps)
    Pair,
}

impl PropertyMap {
    /// Package name within `Maps`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Returned => "Returned",
            Self::Element => "Element",
            Self::Pair => "Pair",
        }
    }
}

/// How the container is plugged into the generic algorithms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Library-native container: cursors are called through `V2.`
    Native {
        /// Property map for `Count_If`
        property_map: PropertyMap,
    },
    /// Standard container wrapped in a `Conts.Adaptors` package
    Standard {
        /// Adaptor package; defaults to `<Type>_Adaptors`
        adaptors: Option<String>,
        /// Property map for `Count_If`
        property_map: PropertyMap,
        /// Emit `pragma Suppress (Container_Checks)`
        suppress_checks: bool,
    },
}

impl Binding {
    /// Native binding
    #[inline]
    #[must_use]
    pub const fn native(property_map: PropertyMap) -> Self {
        Self::Native { property_map }
    }

    /// Standard binding with the default adaptor package
    #[inline]
    #[must_use]
    pub const fn standard(property_map: PropertyMap) -> Self {
        Self::Standard {
            adaptors: None,
            property_map,
            suppress_checks: false,
        }
    }

    /// Override the adaptor package (standard bindings only)
    #[must_use]
    pub fn adaptors(self, package: impl Into<String>) -> Self {
        match self {
            Self::Standard {
                property_map,
                suppress_checks,
                ..
            } => Self::Standard {
                adaptors: Some(package.into()),
                property_map,
                suppress_checks,
            },
            native @ Self::Native { .. } => native,
        }
    }

    /// Suppress container checks (standard bindings only)
    #[must_use]
    pub fn without_checks(self) -> Self {
        match self {
            Self::Standard {
                adaptors,
                property_map,
                ..
            } => Self::Standard {
                adaptors,
                property_map,
                suppress_checks: true,
            },
            native @ Self::Native { .. } => native,
        }
    }
}

impl Default for Binding {
    fn default() -> Self {
        Self::native(PropertyMap::Returned)
    }
}

/// Map insertion/lookup primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessConvention {
    /// `Set` / `.Get (K)`
    #[default]
    Legacy,
    /// `Include` / `.Element (K)`
    Ada2012,
}

/// Element description, by container family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Elements {
    /// List or vector elements
    Sequence {
        /// Element type
        element: ElementType,
        /// Definiteness label (`Def`, `Indef`, ...)
        definite: String,
    },
    /// Map keys and values
    Pairs {
        /// Key/value types
        shape: MapShape,
        /// Key definiteness label
        key: String,
        /// Value definiteness label
        value: String,
        /// Insertion/lookup primitives
        access: AccessConvention,
    },
}

impl Elements {
    /// Element class for fragment selection
    #[must_use]
    pub const fn class(&self) -> ElementClass {
        match self {
            Self::Sequence { element, .. } => element.class(),
            Self::Pairs { shape, .. } => shape.class(),
        }
    }

    /// Element type or shape name
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Sequence { element, .. } => element.as_str(),
            Self::Pairs { shape, .. } => shape.as_str(),
        }
    }
}

/// One benchmark target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDescriptor {
    kind: ContainerKind,
    elements: Elements,
    base: Base,
    storage: StorageMode,
    instance: String,
    withs: String,
    binding: Binding,
    annotations: Annotations,
    favorite: bool,
}

impl VariantDescriptor {
    /// Descriptor from its parts
    #[must_use]
    pub fn new(
        kind: ContainerKind,
        elements: Elements,
        base: Base,
        storage: StorageMode,
        instance: impl Into<String>,
        withs: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            elements,
            base,
            storage,
            instance: instance.into(),
            withs: withs.into(),
            binding: Binding::default(),
            annotations: Annotations::new(),
            favorite: false,
        }
    }

    /// List descriptor
    #[must_use]
    pub fn list(
        element: ElementType,
        base: &str,
        definite: &str,
        storage: StorageMode,
        instance: impl Into<String>,
        withs: impl Into<String>,
    ) -> Self {
        Self::sequence(ContainerKind::List, element, base, definite, storage, instance, withs)
    }

    /// Vector descriptor
    #[must_use]
    pub fn vector(
        element: ElementType,
        base: &str,
        definite: &str,
        storage: StorageMode,
        instance: impl Into<String>,
        withs: impl Into<String>,
    ) -> Self {
        Self::sequence(ContainerKind::Vector, element, base, definite, storage, instance, withs)
    }

    fn sequence(
        kind: ContainerKind,
        element: ElementType,
        base: &str,
        definite: &str,
        storage: StorageMode,
        instance: impl Into<String>,
        withs: impl Into<String>,
    ) -> Self {
        Self::new(
            kind,
            Elements::Sequence {
                element,
                definite: definite.to_string(),
            },
            Base::new(base),
            storage,
            instance,
            withs,
        )
    }

    /// Map descriptor (legacy access convention)
    #[must_use]
    pub fn map(
        shape: MapShape,
        base: &str,
        (key, value): (&str, &str),
        storage: StorageMode,
        instance: impl Into<String>,
        withs: impl Into<String>,
    ) -> Self {
        Self::new(
            ContainerKind::Map,
            Elements::Pairs {
                shape,
                key: key.to_string(),
                value: value.to_string(),
                access: AccessConvention::Legacy,
            },
            Base::new(base),
            storage,
            instance,
            withs,
        )
    }

    /// Set the algorithms binding
    #[inline]
    #[must_use]
    pub fn with_binding(mut self, binding: Binding) -> Self {
        self.binding = binding;
        self
    }

    /// Set the map access convention (no effect on lists and vectors)
    #[must_use]
    pub fn with_access(mut self, convention: AccessConvention) -> Self {
        if let Elements::Pairs { access, .. } = &mut self.elements {
            *access = convention;
        }
        self
    }

    /// Attach step annotations
    #[inline]
    #[must_use]
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Mark as favorite in result displays
    #[inline]
    #[must_use]
    pub fn favorite(mut self) -> Self {
        self.favorite = true;
        self
    }

    /// Container kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Element description
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Element class
    #[inline]
    #[must_use]
    pub fn class(&self) -> ElementClass {
        self.elements.class()
    }

    /// Wrapper discipline
    #[inline]
    #[must_use]
    pub fn base(&self) -> &Base {
        &self.base
    }

    /// Storage mode
    #[inline]
    #[must_use]
    pub fn storage(&self) -> StorageMode {
        self.storage
    }

    /// Container instantiation text
    #[inline]
    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Extra context clauses
    #[inline]
    #[must_use]
    pub fn withs(&self) -> &str {
        &self.withs
    }

    /// Algorithms binding
    #[inline]
    #[must_use]
    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// Step annotations
    #[inline]
    #[must_use]
    pub fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    /// Display hint
    #[inline]
    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.favorite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limited_base_requires_explicit_copy() {
        assert_eq!(Base::new("Limited").copy(), CopySemantics::Explicit);
        assert_eq!(Base::new("limited").copy(), CopySemantics::Explicit);
        assert_eq!(Base::new("Controlled").copy(), CopySemantics::Implicit);
    }

    #[test]
    fn element_types_parse_case_insensitively() {
        assert_eq!(
            ElementType::parse(ContainerKind::List, "integer").unwrap(),
            ElementType::Integer
        );
        assert_eq!(
            ElementType::parse(ContainerKind::Vector, "Unbounded_String").unwrap(),
            ElementType::UnboundedString
        );
        assert_eq!("STRSTR".parse::<MapShape>().unwrap(), MapShape::StrStr);
    }

    #[test]
    fn unknown_element_type_is_unsupported() {
        let err = ElementType::parse(ContainerKind::List, "Float").unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedCategory { .. }));
        assert!("IntStr".parse::<MapShape>().is_err());
    }

    #[test]
    fn unknown_element_type_names_requesting_kind() {
        let err = ElementType::parse(ContainerKind::Vector, "Float").unwrap_err();
        assert!(matches!(
            err,
            GenerateError::UnsupportedCategory {
                kind: ContainerKind::Vector,
                ..
            }
        ));
        assert_eq!(err.to_string(), "unsupported element category 'Float' for Vector");

        let err = ElementType::parse(ContainerKind::Map, "Integer").unwrap_err();
        assert!(matches!(
            err,
            GenerateError::UnsupportedCategory {
                kind: ContainerKind::Map,
                ..
            }
        ));
    }

    #[test]
    fn classes_follow_element_types() {
        assert_eq!(ElementType::Integer.class(), ElementClass::Numeric);
        assert_eq!(ElementType::UnboundedString.class(), ElementClass::Textual);
        assert_eq!(MapShape::IntInt.class(), ElementClass::Numeric);
    }

    #[test]
    fn access_only_applies_to_maps() {
        let list = VariantDescriptor::list(
            ElementType::Integer,
            "Ada12",
            "Def",
            StorageMode::Unbounded,
            "",
            "",
        )
        .with_access(AccessConvention::Ada2012);
        assert!(matches!(list.elements(), Elements::Sequence { .. }));

        let map = VariantDescriptor::map(
            MapShape::IntInt,
            "Ada12_ordered",
            ("Def", "Def"),
            StorageMode::Unbounded,
            "",
            "",
        )
        .with_access(AccessConvention::Ada2012);
        assert!(matches!(
            map.elements(),
            Elements::Pairs {
                access: AccessConvention::Ada2012,
                ..
            }
        ));
    }

    #[test]
    fn binding_modifiers_ignore_native() {
        let native = Binding::native(PropertyMap::Pair).without_checks().adaptors("X");
        assert_eq!(native, Binding::native(PropertyMap::Pair));

        let standard = Binding::standard(PropertyMap::Element)
            .adaptors("Indefinite_List_Adaptors")
            .without_checks();
        assert_eq!(
            standard,
            Binding::Standard {
                adaptors: Some("Indefinite_List_Adaptors".to_string()),
                property_map: PropertyMap::Element,
                suppress_checks: true,
            }
        );
    }
}
