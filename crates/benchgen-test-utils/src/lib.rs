//! Testing utilities for the benchgen workspace
//!
//! Shared descriptor fixtures, in-memory rendering helpers and proptest
//! strategies.

#![allow(missing_docs)]

use benchgen_artifact::{ArtifactPair, ArtifactSink, MemorySink, PersistOutcome, SinkError};
use benchgen_core::{
    AccessConvention, Binding, ElementType, Emitter, FailurePolicy, MapShape, PropertyMap,
    Rendered, RunReport, StorageMode, VariantDescriptor,
};
use proptest::prelude::*;

/// List of integers, implicit copy, native binding
pub fn integer_list() -> VariantDescriptor {
    VariantDescriptor::list(
        ElementType::Integer,
        "Controlled",
        "Def",
        StorageMode::Unbounded,
        "package Container is new Conts.Lists.Definite_Unbounded (Integer);",
        "with Conts.Lists.Definite_Unbounded;",
    )
    .with_binding(Binding::native(PropertyMap::Returned))
}

/// Bounded vector of strings with a limited (explicit copy) base
pub fn limited_string_vector() -> VariantDescriptor {
    VariantDescriptor::vector(
        ElementType::String,
        "Limited",
        "Indef",
        StorageMode::Bounded,
        "package Container is new Conts.Vectors.Indefinite_Bounded (Positive, String);",
        "with Conts.Vectors.Indefinite_Bounded;",
    )
    .with_binding(Binding::native(PropertyMap::Element))
}

/// Bounded integer map under the given access convention
pub fn bounded_intint_map(access: AccessConvention) -> VariantDescriptor {
    VariantDescriptor::map(
        MapShape::IntInt,
        "Ada12_hashed",
        ("Def", "Def"),
        StorageMode::Bounded,
        "package Container is new Ada.Containers.Bounded_Hashed_Maps (Integer, Integer, Hash, \"=\");",
        "with Ada.Containers.Bounded_Hashed_Maps;",
    )
    .with_access(access)
    .with_binding(Binding::standard(PropertyMap::Element).adaptors("Bounded_Hashed_Maps_Adaptors"))
}

pub fn render(descriptor: &VariantDescriptor) -> Rendered {
    Emitter::standard().render(descriptor).unwrap()
}

pub fn body_of(descriptor: &VariantDescriptor) -> String {
    render(descriptor).pair.body.into_text()
}

/// Run into a fresh memory sink
pub fn run_in_memory(
    descriptors: &[VariantDescriptor],
    policy: FailurePolicy,
) -> (RunReport, MemorySink) {
    let mut sink = MemorySink::new();
    let report = Emitter::standard()
        .run(descriptors, &mut sink, policy)
        .unwrap();
    (report, sink)
}

/// Sink failing for every identifier containing `needle`
#[derive(Debug, Default)]
pub struct FailingSink {
    pub needle: String,
    pub inner: MemorySink,
}

impl FailingSink {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            inner: MemorySink::new(),
        }
    }
}

impl ArtifactSink for FailingSink {
    fn persist(&mut self, pair: &ArtifactPair) -> Result<PersistOutcome, SinkError> {
        if pair.id.as_str().contains(&self.needle) {
            return Err(SinkError::io(
                pair.declaration_file(),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        self.inner.persist(pair)
    }
}

pub fn arb_element_type() -> impl Strategy<Value = ElementType> {
    prop_oneof![
        Just(ElementType::Integer),
        Just(ElementType::String),
        Just(ElementType::UnboundedString),
    ]
}

pub fn arb_storage() -> impl Strategy<Value = StorageMode> {
    prop_oneof![
        Just(StorageMode::Bounded),
        Just(StorageMode::Unbounded),
        Just(StorageMode::UnboundedRef),
        Just(StorageMode::UnboundedSpark),
    ]
}

pub fn arb_base() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Ada12".to_string()),
        Just("Controlled".to_string()),
        Just("Limited".to_string()),
        "[A-Z][a-z]{1,8}",
    ]
}

pub fn arb_binding() -> impl Strategy<Value = Binding> {
    let map = prop_oneof![
        Just(PropertyMap::Returned),
        Just(PropertyMap::Element),
        Just(PropertyMap::Pair),
    ];
    (map, any::<bool>(), any::<bool>()).prop_map(|(pm, native, suppress)| {
        if native {
            Binding::native(pm)
        } else if suppress {
            Binding::standard(pm).without_checks()
        } else {
            Binding::standard(pm)
        }
    })
}

/// Any well-formed list, vector or map descriptor
pub fn arb_descriptor() -> impl Strategy<Value = VariantDescriptor> {
    let sequence = (
        any::<bool>(),
        arb_element_type(),
        arb_base(),
        prop_oneof![Just("Def"), Just("Indef")],
        arb_storage(),
        arb_binding(),
    )
        .prop_map(|(vector, element, base, definite, storage, binding)| {
            let descriptor = if vector {
                VariantDescriptor::vector(element, &base, definite, storage, "", "")
            } else {
                VariantDescriptor::list(element, &base, definite, storage, "", "")
            };
            descriptor.with_binding(binding)
        });
    let map = (
        prop_oneof![Just(MapShape::IntInt), Just(MapShape::StrStr)],
        arb_base(),
        arb_storage(),
        any::<bool>(),
        arb_binding(),
    )
        .prop_map(|(shape, base, storage, ada2012, binding)| {
            let access = if ada2012 {
                AccessConvention::Ada2012
            } else {
                AccessConvention::Legacy
            };
            VariantDescriptor::map(shape, &base, ("Def", "Def"), storage, "", "")
                .with_access(access)
                .with_binding(binding)
        });
    prop_oneof![sequence, map]
}
