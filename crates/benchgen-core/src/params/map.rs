//! Map parameters

use crate::error::GenerateError;
use crate::variant::{AccessConvention, MapShape, VariantDescriptor};
use benchgen_artifact::ArtifactId;
use benchgen_template::ParameterMap;

pub(super) fn derive(
    descriptor: &VariantDescriptor,
    shape: MapShape,
    (key, value): (&str, &str),
    access: AccessConvention,
    params: &mut ParameterMap,
) -> Result<ArtifactId, GenerateError> {
    let (set, get) = match access {
        AccessConvention::Ada2012 => ("Include", "Element"),
        AccessConvention::Legacy => ("Set", "Get"),
    };
    let (key_expr, append) = match shape {
        MapShape::IntInt => ("C", format!("V2.{set} (C, C);")),
        MapShape::StrStr => ("Image (C)", format!("V2.{set} (Image (C), \"foo\");")),
    };

    params.insert("key", key);
    params.insert("value", value);
    params.insert("definite", format!("{key}-{value}"));
    params.insert("elem_type", shape.as_str());
    params.insert("category", format!("{} Map", shape.as_str()));
    params.insert("set", set);
    params.insert("get", format!(".{get} ({key_expr})"));
    params.insert("append", append);
    params.insert(
        "discriminant",
        if descriptor.storage().is_bounded() {
            " (Capacity => Items_Count, Modulus => Default_Modulus (Items_Count))"
        } else {
            ""
        },
    );

    let id = ArtifactId::from_segments([
        "Map",
        descriptor.base().name(),
        key,
        value,
        descriptor.storage().as_str(),
        shape.as_str(),
    ])?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::StorageMode;
    use pretty_assertions::assert_eq;

    fn derive_for(
        shape: MapShape,
        access: AccessConvention,
        storage: StorageMode,
    ) -> (ArtifactId, ParameterMap) {
        let descriptor =
            VariantDescriptor::map(shape, "Ada12_hashed", ("Def", "Def"), storage, "", "")
                .with_access(access);
        let mut params = ParameterMap::new();
        let id = derive(&descriptor, shape, ("Def", "Def"), access, &mut params).unwrap();
        (id, params)
    }

    #[test]
    fn ada2012_uses_include_and_element() {
        let (_, params) = derive_for(MapShape::IntInt, AccessConvention::Ada2012, StorageMode::Unbounded);
        assert_eq!(params.get("set"), Some("Include"));
        assert_eq!(params.get("get"), Some(".Element (C)"));
        assert_eq!(params.get("append"), Some("V2.Include (C, C);"));
    }

    #[test]
    fn legacy_uses_set_and_get() {
        let (_, params) = derive_for(MapShape::StrStr, AccessConvention::Legacy, StorageMode::Unbounded);
        assert_eq!(params.get("set"), Some("Set"));
        assert_eq!(params.get("get"), Some(".Get (Image (C))"));
        assert_eq!(params.get("append"), Some("V2.Set (Image (C), \"foo\");"));
        assert_eq!(params.get("category"), Some("StrStr Map"));
    }

    #[test]
    fn bounded_maps_set_modulus() {
        let (id, params) = derive_for(MapShape::IntInt, AccessConvention::Ada2012, StorageMode::Bounded);
        assert_eq!(
            params.get("discriminant"),
            Some(" (Capacity => Items_Count, Modulus => Default_Modulus (Items_Count))")
        );
        assert_eq!(id.as_str(), "Map_Ada12_hashed_Def_Def_Bounded_IntInt");
        assert_eq!(params.get("definite"), Some("Def-Def"));
    }
}
