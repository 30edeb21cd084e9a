//! benchgen Template System
//!
//! Template composition for benchmark fixtures: which steps a container
//! shape runs, and how each step's text is substituted.
//!
//! # Core Concepts
//!
//! - [`Template`]: parsed text with `{name}` placeholders, fail-fast rendering
//! - [`ParameterMap`]: placeholder values derived for one variant
//! - [`Fragment`] / [`FragmentLibrary`]: the catalog of benchmark steps
//! - [`select`]: `(ContainerKind, ElementClass)` -> ordered [`FragmentId`]s
//! - [`Annotations`]: optional per-step remarks, empty on miss
//! - [`Scaffold`]: declaration, header and footer templates
//!
//! # Example
//!
//! ```rust,ignore
//! use benchgen_template::{select, Annotations, ContainerKind, ElementClass, FragmentLibrary};
//!
//! let library = FragmentLibrary::standard();
//! for id in select(ContainerKind::Vector, ElementClass::Textual) {
//!     body.push_str(&library.get(*id).render(&params, &Annotations::new())?);
//! }
//! ```

#![warn(unreachable_pub)]

mod annotations;
mod error;
mod fragment;
mod library;
mod params;
mod selector;
mod shape;
mod template;

pub use annotations::Annotations;
pub use error::TemplateError;
pub use fragment::{ada_bool, ada_string, Fragment, FragmentId, EXPECTED_KEY};
pub use library::{FragmentLibrary, Scaffold};
pub use params::ParameterMap;
pub use selector::{select, step_names};
pub use shape::{ContainerKind, ElementClass};
pub use template::Template;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
