//! Variant parameter builders
//!
//! Derives the full [`ParameterMap`] for a descriptor. Keys shared by every
//! container kind are filled here; the kind-specific ones (`append`,
//! `expected`, `discriminant`, accessors, the identifier) come from the
//! [`sequence`] and [`map`] builders.

mod binding;
mod map;
mod sequence;

use crate::error::GenerateError;
use crate::variant::{CopySemantics, Elements, VariantDescriptor};
use benchgen_artifact::ArtifactId;
use benchgen_template::{ada_bool, ContainerKind, ElementClass, ParameterMap};

/// Parameters derived for one variant
#[derive(Debug, Clone)]
pub struct VariantParams {
    id: ArtifactId,
    kind: ContainerKind,
    class: ElementClass,
    params: ParameterMap,
}

impl VariantParams {
    /// Derived identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ArtifactId {
        &self.id
    }

    /// Container kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Element class
    #[inline]
    #[must_use]
    pub fn class(&self) -> ElementClass {
        self.class
    }

    /// The parameter map
    #[inline]
    #[must_use]
    pub fn params(&self) -> &ParameterMap {
        &self.params
    }

    /// Shorthand for `params().get(key)`
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }
}

/// Derive the parameters for `descriptor`
///
/// # Errors
/// - [`GenerateError::UnsupportedCategory`] if the elements do not fit the kind
/// - [`GenerateError::InvalidIdentifier`] if the derived name is not an identifier
pub fn derive(descriptor: &VariantDescriptor) -> Result<VariantParams, GenerateError> {
    let kind = descriptor.kind();
    let mut params = common(descriptor);

    let id = match (kind, descriptor.elements()) {
        (ContainerKind::List | ContainerKind::Vector, Elements::Sequence { element, definite }) => {
            sequence::derive(descriptor, *element, definite, &mut params)?
        }
        (ContainerKind::Map, Elements::Pairs { shape, key, value, access }) => {
            map::derive(descriptor, *shape, (key.as_str(), value.as_str()), *access, &mut params)?
        }
        (kind, elements) => {
            return Err(GenerateError::unsupported(kind, elements.type_name()));
        }
    };
    params.insert("test_name", id.as_str());

    tracing::debug!(variant = %id, keys = params.len(), "derived parameters");
    Ok(VariantParams {
        id,
        kind,
        class: descriptor.class(),
        params,
    })
}

/// Counter value asserted by counting steps
///
/// Numeric fills insert `1 ..= Items_Count`, so only two values satisfy
/// `<= 2`; every textual element satisfies `Predicate`.
#[must_use]
pub const fn expected_count(class: ElementClass) -> &'static str {
    match class {
        ElementClass::Numeric => "2",
        ElementClass::Textual => "Items_Count",
    }
}

fn common(descriptor: &VariantDescriptor) -> ParameterMap {
    let type_name = descriptor.kind().as_str();
    let (prefix, adaptors) = binding::clauses(descriptor.binding(), type_name);

    let mut params = ParameterMap::new()
        .with("base", descriptor.base().name())
        .with("nodes", descriptor.storage().as_str())
        .with("type", type_name)
        .with("instance", descriptor.instance())
        .with("withs", descriptor.withs())
        .with("favorite", ada_bool(descriptor.is_favorite()))
        .with("expected", expected_count(descriptor.class()))
        .with("prefix", prefix)
        .with("adaptors", adaptors);

    match descriptor.base().copy() {
        CopySemantics::Explicit => {
            params.insert("copy", ".Copy");
            params.insert("clear", "\n      V.Clear;");
            params.insert("clear_copy", "\n         V_Copy.Clear;");
        }
        CopySemantics::Implicit => {
            params.insert("copy", "");
            params.insert("clear", "");
            params.insert("clear_copy", "");
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Base, ElementType, MapShape, StorageMode};
    use pretty_assertions::assert_eq;

    fn list(element: ElementType, base: &str, storage: StorageMode) -> VariantDescriptor {
        VariantDescriptor::list(
            element,
            base,
            "Def",
            storage,
            "package Container is new Conts.Lists.Definite_Unbounded (Integer);",
            "with Conts.Lists.Definite_Unbounded;",
        )
    }

    #[test]
    fn implicit_copy_leaves_clauses_empty() {
        let derived = derive(&list(ElementType::Integer, "Controlled", StorageMode::Unbounded)).unwrap();
        assert_eq!(derived.get("copy"), Some(""));
        assert_eq!(derived.get("clear"), Some(""));
        assert_eq!(derived.get("clear_copy"), Some(""));
        assert_eq!(derived.get("expected"), Some("2"));
    }

    #[test]
    fn explicit_copy_adds_clears() {
        let derived = derive(&list(ElementType::Integer, "Limited", StorageMode::Unbounded)).unwrap();
        assert_eq!(derived.get("copy"), Some(".Copy"));
        assert_eq!(derived.get("clear"), Some("\n      V.Clear;"));
        assert_eq!(derived.get("clear_copy"), Some("\n         V_Copy.Clear;"));
    }

    #[test]
    fn test_name_matches_identifier() {
        let derived = derive(&list(ElementType::Integer, "Ada12", StorageMode::Bounded)).unwrap();
        assert_eq!(derived.id().as_str(), "List_Ada12_Def_Bounded_Integer");
        assert_eq!(derived.get("test_name"), Some("List_Ada12_Def_Bounded_Integer"));
        assert_eq!(derived.get("favorite"), Some("False"));
    }

    #[test]
    fn mismatched_elements_are_unsupported() {
        let descriptor = VariantDescriptor::new(
            ContainerKind::List,
            Elements::Pairs {
                shape: MapShape::IntInt,
                key: "Def".into(),
                value: "Def".into(),
                access: crate::variant::AccessConvention::Legacy,
            },
            Base::new("Ada12"),
            StorageMode::Unbounded,
            "",
            "",
        );
        let err = derive(&descriptor).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::UnsupportedCategory {
                kind: ContainerKind::List,
                ..
            }
        ));
    }

    #[test]
    fn invalid_identifier_is_rejected() {
        let descriptor = list(ElementType::Integer, "Ada 12", StorageMode::Unbounded);
        assert!(matches!(
            derive(&descriptor).unwrap_err(),
            GenerateError::InvalidIdentifier(_)
        ));
    }

    #[test]
    fn expected_count_by_class() {
        assert_eq!(expected_count(ElementClass::Numeric), "2");
        assert_eq!(expected_count(ElementClass::Textual), "Items_Count");
    }
}
