//! Fragment selection
//!
//! Maps a container shape to the ordered benchmark steps it runs. The result
//! depends on `(kind, class)` only: two variants of the same shape always
//! emit the same step sequence, differing only in substituted values.

use crate::fragment::FragmentId;
use crate::shape::{ContainerKind, ElementClass};

use FragmentId as F;

const LIST_NUMERIC: &[FragmentId] = &[
    F::Fill,
    F::Copy,
    F::CursorLoopThreshold,
    F::ForOfThreshold,
    F::CountIf,
];

const LIST_TEXTUAL: &[FragmentId] = &[
    F::Fill,
    F::Copy,
    F::CursorLoopPredicate,
    F::ForOfPredicate,
    F::CountIf,
];

const VECTOR_NUMERIC: &[FragmentId] = &[
    F::Fill,
    F::Copy,
    F::CursorLoopThreshold,
    F::ForOfThreshold,
    F::CountIf,
    F::IndexedThreshold,
];

const VECTOR_TEXTUAL: &[FragmentId] = &[
    F::Fill,
    F::Copy,
    F::CursorLoopPredicate,
    F::ForOfPredicate,
    F::CountIf,
    F::IndexedPredicate,
];

// Map cursor and for-of loops always go through `Predicate`, which is
// instantiated over pairs for every map flavour.
const MAP_NUMERIC: &[FragmentId] = &[
    F::Fill,
    F::Copy,
    F::CursorLoopPredicate,
    F::ForOfPredicate,
    F::CountIf,
    F::IndexedThreshold,
    F::Find,
];

const MAP_TEXTUAL: &[FragmentId] = &[
    F::Fill,
    F::Copy,
    F::CursorLoopPredicate,
    F::ForOfPredicate,
    F::CountIf,
    F::KeyedIndexedPredicate,
    F::Find,
];

/// Ordered benchmark steps for a container shape
#[must_use]
pub const fn select(kind: ContainerKind, class: ElementClass) -> &'static [FragmentId] {
    match (kind, class) {
        (ContainerKind::List, ElementClass::Numeric) => LIST_NUMERIC,
        (ContainerKind::List, ElementClass::Textual) => LIST_TEXTUAL,
        (ContainerKind::Vector, ElementClass::Numeric) => VECTOR_NUMERIC,
        (ContainerKind::Vector, ElementClass::Textual) => VECTOR_TEXTUAL,
        (ContainerKind::Map, ElementClass::Numeric) => MAP_NUMERIC,
        (ContainerKind::Map, ElementClass::Textual) => MAP_TEXTUAL,
    }
}

/// Step names for a container shape
#[must_use]
pub fn step_names(kind: ContainerKind, class: ElementClass) -> Vec<&'static str> {
    select(kind, class).iter().map(FragmentId::name).collect()
}
