//! Default variant catalog
//!
//! Every container configuration benchmarked by default: the standard Ada
//! 2012 containers (through `Conts.Adaptors`) and the library's own lists,
//! vectors and maps.

use crate::variant::{
    AccessConvention, Binding, ElementType, MapShape, PropertyMap, StorageMode, VariantDescriptor,
};
use benchgen_template::Annotations;

use ElementType::{Integer, String as Str, UnboundedString};
use StorageMode::{Bounded, Unbounded, UnboundedRef, UnboundedSpark};

/// Number of descriptors in [`default_catalog`]
pub const CATALOG_SIZE: usize = 34;

const INT_HASH: &str = "function Hash (K : Integer) return Conts.Hash_Type is\n   (Conts.Hash_Type (K)) with Inline;\n";

const PAIR_PREDICATE: &str = "function Predicate (P : Container.Pair_Type) return Boolean\n   is (Predicate (Container.Value (P))) with Inline;";

fn standard(adaptors: &str, property_map: PropertyMap) -> Binding {
    Binding::standard(property_map).adaptors(adaptors)
}

fn native(property_map: PropertyMap) -> Binding {
    Binding::native(property_map)
}

fn note(key: &str, text: &str) -> Annotations {
    Annotations::new().with(key, text)
}

/// All default descriptors, in generation order
#[must_use]
pub fn default_catalog() -> Vec<VariantDescriptor> {
    let mut catalog = Vec::with_capacity(CATALOG_SIZE);
    catalog.extend(integer_lists());
    catalog.extend(string_lists());
    catalog.extend(integer_vectors());
    catalog.extend(string_vectors());
    catalog.extend(intint_maps());
    catalog.extend(strstr_maps());
    catalog
}

fn integer_lists() -> Vec<VariantDescriptor> {
    let inst = |package: &str| format!("package Container is new {package} (Integer);");
    let with = |package: &str| format!("with {package};");
    vec![
        VariantDescriptor::list(
            Integer,
            "Ada12",
            "Def",
            Bounded,
            inst("Ada.Containers.Bounded_Doubly_Linked_Lists"),
            with("Ada.Containers.Bounded_Doubly_Linked_Lists"),
        )
        .with_binding(standard("Bounded_List_Adaptors", PropertyMap::Returned)),
        VariantDescriptor::list(
            Integer,
            "Ada12",
            "Def",
            Unbounded,
            inst("Ada.Containers.Doubly_Linked_Lists"),
            with("Ada.Containers.Doubly_Linked_Lists"),
        )
        .with_binding(Binding::standard(PropertyMap::Returned)),
        VariantDescriptor::list(
            Integer,
            "Ada12",
            "Indef",
            Unbounded,
            inst("Ada.Containers.Indefinite_Doubly_Linked_Lists"),
            with("Ada.Containers.Indefinite_Doubly_Linked_Lists"),
        )
        .with_binding(standard("Indefinite_List_Adaptors", PropertyMap::Element)),
        VariantDescriptor::list(
            Integer,
            "Ada12_No_Checks",
            "Def",
            Unbounded,
            inst("Ada.Containers.Doubly_Linked_Lists"),
            with("Ada.Containers.Doubly_Linked_Lists"),
        )
        .with_binding(Binding::standard(PropertyMap::Returned).without_checks())
        .favorite(),
        VariantDescriptor::list(
            Integer,
            "Controlled",
            "Indef",
            Unbounded,
            inst("Conts.Lists.Indefinite_Unbounded"),
            with("Conts.Lists.Indefinite_Unbounded"),
        )
        .with_binding(native(PropertyMap::Returned)),
        VariantDescriptor::list(
            Integer,
            "Controlled",
            "Def",
            Unbounded,
            inst("Conts.Lists.Definite_Unbounded"),
            with("Conts.Lists.Definite_Unbounded"),
        )
        .with_binding(native(PropertyMap::Returned))
        .with_annotations(note(
            "forofloop",
            "Because of dynamic dispatching -- When avoided, we gain 40%",
        ))
        .favorite(),
        VariantDescriptor::list(
            Integer,
            "Controlled",
            "Def",
            Bounded,
            inst("Conts.Lists.Definite_Bounded"),
            with("Conts.Lists.Definite_Bounded"),
        )
        .with_binding(native(PropertyMap::Returned)),
        VariantDescriptor::list(
            Integer,
            "Limited",
            "Indef_Spark",
            UnboundedSpark,
            inst("Conts.Lists.Indefinite_Unbounded_SPARK"),
            with("Conts.Lists.Indefinite_Unbounded_SPARK"),
        )
        .with_binding(native(PropertyMap::Returned)),
    ]
}

fn string_lists() -> Vec<VariantDescriptor> {
    let inst = |package: &str| format!("package Container is new {package} (String);");
    let with = |package: &str| format!("with {package};");
    vec![
        VariantDescriptor::list(
            Str,
            "Ada12",
            "Indef",
            Unbounded,
            inst("Ada.Containers.Indefinite_Doubly_Linked_Lists"),
            with("Ada.Containers.Indefinite_Doubly_Linked_Lists"),
        )
        .with_binding(standard("Indefinite_List_Adaptors", PropertyMap::Element)),
        VariantDescriptor::list(
            Str,
            "Ada12_No_Checks",
            "Indef",
            Unbounded,
            inst("Ada.Containers.Indefinite_Doubly_Linked_Lists"),
            with("Ada.Containers.Indefinite_Doubly_Linked_Lists"),
        )
        .with_binding(standard("Indefinite_List_Adaptors", PropertyMap::Element).without_checks())
        .favorite(),
        VariantDescriptor::list(
            Str,
            "Controlled",
            "Indef",
            Unbounded,
            inst("Conts.Lists.Indefinite_Unbounded"),
            with("Conts.Lists.Indefinite_Unbounded"),
        )
        .with_binding(native(PropertyMap::Returned))
        .with_annotations(note("cursorloop", "Cost if for copying the string")),
        VariantDescriptor::list(
            Str,
            "Controlled",
            "Indef",
            UnboundedRef,
            inst("Conts.Lists.Indefinite_Unbounded_Ref"),
            with("Conts.Lists.Indefinite_Unbounded_Ref"),
        )
        .with_binding(native(PropertyMap::Element))
        .with_annotations(note("countif", "Conversion from Reference_Type to Element_Type"))
        .favorite(),
        VariantDescriptor::list(
            UnboundedString,
            "Controlled",
            "Def",
            Unbounded,
            "package Container is new Conts.Lists.Definite_Unbounded(Unbounded_String);",
            "with Ada.Strings.Unbounded; use Ada.Strings.Unbounded;\nwith Conts.Lists.Definite_Unbounded;",
        )
        .with_binding(native(PropertyMap::Returned))
        .with_annotations(note(
            "cursorloop",
            "Maybe because of the atomic counters or controlled elements",
        )),
        VariantDescriptor::list(
            Str,
            "Controlled",
            "Strings_Specific",
            Unbounded,
            "package Container renames Conts.Lists.Strings;",
            "with Conts.Lists.Strings;",
        )
        .with_binding(native(PropertyMap::Element))
        .with_annotations(
            Annotations::new()
                .with("countif", "conversion to String")
                .with(
                    "fill",
                    "strange, since we are doing fewer mallocs. Faster if we only\
                     preallocate a 1 element array",
                ),
        ),
    ]
}

fn integer_vectors() -> Vec<VariantDescriptor> {
    let inst = |package: &str, formals: &str| {
        format!("package Container is new {package} (Positive, Integer{formals});")
    };
    let with = |package: &str| format!("with {package};");
    vec![
        VariantDescriptor::vector(
            Integer,
            "Ada12",
            "Def",
            Bounded,
            inst("Ada.Containers.Bounded_Vectors", ""),
            with("Ada.Containers.Bounded_Vectors"),
        )
        .with_binding(standard("Bounded_Vector_Adaptors", PropertyMap::Returned)),
        VariantDescriptor::vector(
            Integer,
            "Ada12",
            "Def",
            Unbounded,
            inst("Ada.Containers.Vectors", ""),
            with("Ada.Containers.Vectors"),
        )
        .with_binding(Binding::standard(PropertyMap::Returned)),
        VariantDescriptor::vector(
            Integer,
            "Ada12",
            "Indef",
            Unbounded,
            inst("Ada.Containers.Indefinite_Vectors", ""),
            with("Ada.Containers.Indefinite_Vectors"),
        )
        .with_binding(standard("Indefinite_Vector_Adaptors", PropertyMap::Element)),
        VariantDescriptor::vector(
            Integer,
            "Ada12_No_Checks",
            "Def",
            Unbounded,
            inst("Ada.Containers.Vectors", ""),
            with("Ada.Containers.Vectors"),
        )
        .with_binding(Binding::standard(PropertyMap::Returned).without_checks())
        .favorite(),
        VariantDescriptor::vector(
            Integer,
            "Controlled",
            "Indef",
            Unbounded,
            inst("Conts.Vectors.Indefinite_Unbounded", ""),
            with("Conts.Vectors.Indefinite_Unbounded"),
        )
        .with_binding(native(PropertyMap::Returned)),
        VariantDescriptor::vector(
            Integer,
            "Controlled",
            "Def",
            Unbounded,
            inst("Conts.Vectors.Definite_Unbounded", ", Ada.Finalization.Controlled"),
            with("Conts.Vectors.Definite_Unbounded"),
        )
        .with_binding(native(PropertyMap::Returned))
        .with_annotations(note("cursorloop", "test in Next to see if we reached end of loop"))
        .favorite(),
        VariantDescriptor::vector(
            Integer,
            "Controlled",
            "Def",
            Bounded,
            inst("Conts.Vectors.Definite_Bounded", ""),
            with("Conts.Vectors.Definite_Bounded"),
        )
        .with_binding(native(PropertyMap::Returned)),
    ]
}

fn string_vectors() -> Vec<VariantDescriptor> {
    let inst = |package: &str, formals: &str| {
        format!("package Container is new {package} (Positive, String{formals});")
    };
    let with = |package: &str| format!("with {package};");
    vec![
        VariantDescriptor::vector(
            Str,
            "Ada12",
            "Indef",
            Unbounded,
            inst("Ada.Containers.Indefinite_Vectors", ""),
            with("Ada.Containers.Indefinite_Vectors"),
        )
        .with_binding(standard("Indefinite_Vector_Adaptors", PropertyMap::Element)),
        VariantDescriptor::vector(
            Str,
            "Ada12_No_Checks",
            "Indef",
            Unbounded,
            inst("Ada.Containers.Indefinite_Vectors", ""),
            with("Ada.Containers.Indefinite_Vectors"),
        )
        .with_binding(
            standard("Indefinite_Vector_Adaptors", PropertyMap::Element).without_checks(),
        )
        .favorite(),
        VariantDescriptor::vector(
            Str,
            "Controlled",
            "Indef",
            Unbounded,
            inst("Conts.Vectors.Indefinite_Unbounded", ""),
            with("Conts.Vectors.Indefinite_Unbounded"),
        )
        .with_binding(native(PropertyMap::Returned)),
        VariantDescriptor::vector(
            Str,
            "Controlled",
            "Indef",
            UnboundedRef,
            inst("Conts.Vectors.Indefinite_Unbounded_Ref", ", Ada.Finalization.Controlled"),
            with("Conts.Vectors.Indefinite_Unbounded_Ref"),
        )
        .with_binding(native(PropertyMap::Element))
        .favorite(),
    ]
}

fn intint_maps() -> Vec<VariantDescriptor> {
    let hashed = |package: &str| {
        format!("{INT_HASH}package Container is new {package} (Integer, Integer, Hash, \"=\");")
    };
    let library = format!(
        "{INT_HASH}package Container is new Conts.Maps.Def_Def_Unbounded\n   \
         (Integer, Integer, Ada.Finalization.Controlled, Hash);{PAIR_PREDICATE}"
    );
    vec![
        VariantDescriptor::map(
            MapShape::IntInt,
            "Ada12_ordered",
            ("Def", "Def"),
            Unbounded,
            "package Container is new Ada.Containers.Ordered_Maps (Integer, Integer);",
            "with Ada.Containers.Ordered_Maps;",
        )
        .with_access(AccessConvention::Ada2012)
        .with_binding(standard("Ordered_Maps_Adaptors", PropertyMap::Element)),
        VariantDescriptor::map(
            MapShape::IntInt,
            "Ada12_hashed",
            ("Def", "Def"),
            Unbounded,
            hashed("Ada.Containers.Hashed_Maps"),
            "with Ada.Containers.Hashed_Maps;",
        )
        .with_access(AccessConvention::Ada2012)
        .with_binding(standard("Hashed_Maps_Adaptors", PropertyMap::Element)),
        VariantDescriptor::map(
            MapShape::IntInt,
            "Ada12_hashed",
            ("Def", "Def"),
            Bounded,
            hashed("Ada.Containers.Bounded_Hashed_Maps"),
            "with Ada.Containers.Bounded_Hashed_Maps;",
        )
        .with_access(AccessConvention::Ada2012)
        .with_binding(standard("Bounded_Hashed_Maps_Adaptors", PropertyMap::Element)),
        VariantDescriptor::map(
            MapShape::IntInt,
            "hashed",
            ("Def", "Def"),
            Unbounded,
            library.clone(),
            "with Conts.Maps.Def_Def_Unbounded;",
        )
        .with_binding(native(PropertyMap::Pair))
        .favorite(),
        VariantDescriptor::map(
            MapShape::IntInt,
            "hashed_linear_probing",
            ("Def", "Def"),
            Unbounded,
            library,
            "with Conts.Maps.Def_Def_Unbounded;",
        )
        .with_binding(native(PropertyMap::Pair))
        .favorite(),
    ]
}

fn strstr_maps() -> Vec<VariantDescriptor> {
    let library = format!(
        "package Container is new Conts.Maps.Indef_Indef_Unbounded\n   \
         (String, String, Ada.Finalization.Controlled, Ada.Strings.Hash);{PAIR_PREDICATE}"
    );
    vec![
        VariantDescriptor::map(
            MapShape::StrStr,
            "Ada12_ordered",
            ("Indef", "Indef"),
            Unbounded,
            "package Container is new Ada.Containers.Indefinite_Ordered_Maps (String, String);",
            "with Ada.Containers.Indefinite_Ordered_Maps;",
        )
        .with_access(AccessConvention::Ada2012)
        .with_binding(standard("Indefinite_Ordered_Maps_Adaptors", PropertyMap::Element)),
        VariantDescriptor::map(
            MapShape::StrStr,
            "Ada12_hashed",
            ("Indef", "Indef"),
            Unbounded,
            "package Container is new Ada.Containers.Indefinite_Hashed_Maps \
             (String, String, Ada.Strings.Hash, \"=\");",
            "with Ada.Strings.Hash;\nwith Ada.Containers.Indefinite_Hashed_Maps;",
        )
        .with_access(AccessConvention::Ada2012)
        .with_binding(standard("Indefinite_Hashed_Maps_Adaptors", PropertyMap::Element)),
        VariantDescriptor::map(
            MapShape::StrStr,
            "hashed",
            ("Indef", "Indef"),
            Unbounded,
            library.clone(),
            "with Conts.Maps.Indef_Indef_Unbounded, Ada.Strings.Hash;",
        )
        .with_binding(native(PropertyMap::Pair))
        .favorite(),
        VariantDescriptor::map(
            MapShape::StrStr,
            "hashed_linear_probing",
            ("Indef", "Indef"),
            Unbounded,
            library,
            "with Conts.Maps.Indef_Indef_Unbounded, Ada.Strings.Hash;",
        )
        .with_binding(native(PropertyMap::Pair))
        .favorite(),
    ]
}
