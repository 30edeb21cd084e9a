//! Emission engine
//!
//! Turns descriptors into artifact pairs:
//!
//! 1. derive the parameter map ([`crate::params::derive`])
//! 2. select the step sequence for `(kind, class)`
//! 3. validate every template against the map, then render
//! 4. hand the pair to an [`ArtifactSink`]
//!
//! [`Emitter::run`] adds the whole-list concerns: identifier uniqueness is
//! checked before anything is written, and the [`FailurePolicy`] decides
//! whether one failing variant stops the run.

use crate::config::{AnnotationPolicy, FailurePolicy};
use crate::error::GenerateError;
use crate::params::{self, VariantParams};
use crate::report::{FailureRecord, RunReport, VariantRecord};
use crate::variant::VariantDescriptor;
use benchgen_artifact::{ArtifactId, ArtifactPair, ArtifactSink};
use benchgen_template::{
    select, Annotations, ContainerKind, ElementClass, FragmentId, FragmentLibrary, Scaffold,
    TemplateError,
};
use std::collections::HashMap;

/// Rendered, not yet persisted, variant
#[derive(Debug, Clone)]
pub struct Rendered {
    /// The two artifacts
    pub pair: ArtifactPair,
    /// Container kind
    pub kind: ContainerKind,
    /// Element class
    pub class: ElementClass,
    /// Steps rendered into the body, in order
    pub steps: &'static [FragmentId],
}

impl Rendered {
    /// Step names, in order
    #[must_use]
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(FragmentId::name).collect()
    }
}

/// Renders descriptors with a fragment library and scaffold
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'a> {
    library: &'a FragmentLibrary,
    scaffold: &'a Scaffold,
    annotation_policy: AnnotationPolicy,
}

impl Emitter<'static> {
    /// Emitter over the built-in library and scaffold
    #[must_use]
    pub fn standard() -> Self {
        Self::new(FragmentLibrary::standard(), Scaffold::standard())
    }
}

impl Default for Emitter<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> Emitter<'a> {
    /// Emitter over a custom library and scaffold
    #[must_use]
    pub fn new(library: &'a FragmentLibrary, scaffold: &'a Scaffold) -> Self {
        Self {
            library,
            scaffold,
            annotation_policy: AnnotationPolicy::default(),
        }
    }

    /// With annotation policy
    #[inline]
    #[must_use]
    pub fn with_annotation_policy(mut self, policy: AnnotationPolicy) -> Self {
        self.annotation_policy = policy;
        self
    }

    /// Render one descriptor
    ///
    /// # Errors
    /// Any [`GenerateError`] except `Persist` and `IdentifierCollision`
    pub fn render(&self, descriptor: &VariantDescriptor) -> Result<Rendered, GenerateError> {
        let derived = params::derive(descriptor)?;
        self.render_derived(&derived, descriptor.annotations())
    }

    fn render_derived(
        &self,
        derived: &VariantParams,
        annotations: &Annotations,
    ) -> Result<Rendered, GenerateError> {
        let id = derived.id();
        let steps = select(derived.kind(), derived.class());
        tracing::debug!(
            variant = %id,
            kind = %derived.kind(),
            class = %derived.class(),
            steps = steps.len(),
            "selected fragments"
        );

        self.check_annotations(id, annotations)?;
        let with_variant = |source: TemplateError| GenerateError::Template {
            variant: id.to_string(),
            source,
        };
        self.validate(derived, steps).map_err(with_variant)?;

        let params = derived.params();
        let declaration = self.scaffold.declaration.render(params).map_err(with_variant)?;

        let mut body = self.scaffold.header.render(params).map_err(with_variant)?;
        for step in steps {
            let text = self
                .library
                .get(*step)
                .render(params, annotations)
                .map_err(with_variant)?;
            body.push_str(&text);
        }
        self.scaffold
            .footer
            .render_into(params, &mut body)
            .map_err(with_variant)?;

        let pair = ArtifactPair::new(id.clone(), declaration, body).map_err(|source| {
            GenerateError::Artifact {
                variant: id.to_string(),
                source,
            }
        })?;
        Ok(Rendered {
            pair,
            kind: derived.kind(),
            class: derived.class(),
            steps,
        })
    }

    /// Every template this variant uses, checked before anything renders
    fn validate(&self, derived: &VariantParams, steps: &[FragmentId]) -> Result<(), TemplateError> {
        let params = derived.params();
        self.scaffold.check(params)?;
        for step in steps {
            let fragment = self.library.get(*step);
            for key in fragment.required_keys() {
                params.require(fragment.name(), key)?;
            }
        }
        Ok(())
    }

    fn check_annotations(
        &self,
        id: &ArtifactId,
        annotations: &Annotations,
    ) -> Result<(), GenerateError> {
        if self.annotation_policy == AnnotationPolicy::Ignore {
            return Ok(());
        }
        for key in annotations.unknown_keys(self.library) {
            match self.annotation_policy {
                AnnotationPolicy::Deny => {
                    return Err(GenerateError::UnknownAnnotation {
                        variant: id.to_string(),
                        key: key.to_string(),
                    });
                }
                AnnotationPolicy::Warn => {
                    tracing::warn!(variant = %id, key, "annotation matches no benchmark step");
                }
                AnnotationPolicy::Ignore => {}
            }
        }
        Ok(())
    }

    /// Render one descriptor and persist it
    ///
    /// # Errors
    /// Any [`GenerateError`] except `IdentifierCollision`
    pub fn emit<S: ArtifactSink + ?Sized>(
        &self,
        descriptor: &VariantDescriptor,
        sink: &mut S,
    ) -> Result<VariantRecord, GenerateError> {
        let rendered = self.render(descriptor)?;
        persist(rendered, sink)
    }

    /// Emit every descriptor, in order
    ///
    /// Identifiers are checked for collisions over the whole list first; a
    /// collision fails the run before any file is written, regardless of
    /// `policy`.
    ///
    /// # Errors
    /// - [`GenerateError::IdentifierCollision`] always
    /// - the first variant failure under [`FailurePolicy::Abort`]
    pub fn run<S: ArtifactSink + ?Sized>(
        &self,
        descriptors: &[VariantDescriptor],
        sink: &mut S,
        policy: FailurePolicy,
    ) -> Result<RunReport, GenerateError> {
        tracing::info!(variants = descriptors.len(), ?policy, "generation started");
        let mut report = RunReport::new();

        let derived = descriptors
            .iter()
            .map(params::derive)
            .collect::<Vec<Result<VariantParams, GenerateError>>>();
        check_unique(derived.iter().filter_map(|d| d.as_ref().ok()).map(VariantParams::id))?;

        for (index, (descriptor, derived)) in descriptors.iter().zip(derived).enumerate() {
            let label = derived
                .as_ref()
                .map_or_else(|_| format!("#{index}"), |d| d.id().to_string());
            let outcome = derived
                .and_then(|d| self.render_derived(&d, descriptor.annotations()))
                .and_then(|rendered| persist(rendered, sink));

            match outcome {
                Ok(record) => report.variants.push(record),
                Err(err) => {
                    tracing::error!(variant = %label, error = %err, "variant failed");
                    if policy == FailurePolicy::Abort {
                        return Err(err);
                    }
                    tracing::warn!(variant = %label, "skipped, continuing");
                    report.failures.push(FailureRecord {
                        variant: label,
                        error: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            emitted = report.variants.len(),
            written = report.written(),
            unchanged = report.unchanged(),
            failed = report.failures.len(),
            "generation finished"
        );
        Ok(report)
    }
}

fn persist<S: ArtifactSink + ?Sized>(
    rendered: Rendered,
    sink: &mut S,
) -> Result<VariantRecord, GenerateError> {
    let pair = &rendered.pair;
    let outcome = sink.persist(pair).map_err(|source| GenerateError::Persist {
        variant: pair.id.to_string(),
        source,
    })?;
    tracing::debug!(variant = %pair.id, ?outcome, "persisted");
    Ok(VariantRecord {
        id: pair.id.clone(),
        stem: pair.id.stem(),
        kind: rendered.kind,
        class: rendered.class,
        steps: rendered.step_names(),
        declaration_hash: *pair.declaration.hash(),
        body_hash: *pair.body.hash(),
        outcome,
    })
}

/// Fail on two identifiers sharing a file stem
///
/// # Errors
/// Returns [`GenerateError::IdentifierCollision`] for the first clash
pub fn check_unique<'a>(ids: impl IntoIterator<Item = &'a ArtifactId>) -> Result<(), GenerateError> {
    let mut seen: HashMap<String, &ArtifactId> = HashMap::new();
    for id in ids {
        let stem = id.stem();
        if let Some(first) = seen.get(&stem) {
            return Err(GenerateError::IdentifierCollision {
                stem,
                first: first.to_string(),
                second: id.to_string(),
            });
        }
        seen.insert(stem, id);
    }
    Ok(())
}

/// Derive and check identifiers for a descriptor list
///
/// # Errors
/// Returns the first derivation error, or a collision
pub fn check_identifiers(descriptors: &[VariantDescriptor]) -> Result<Vec<ArtifactId>, GenerateError> {
    let ids = descriptors
        .iter()
        .map(|d| params::derive(d).map(|p| p.id().clone()))
        .collect::<Result<Vec<_>, _>>()?;
    check_unique(&ids)?;
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{Binding, ElementType, PropertyMap, StorageMode};
    use benchgen_artifact::MemorySink;

    fn list(base: &str) -> VariantDescriptor {
        VariantDescriptor::list(
            ElementType::Integer,
            base,
            "Def",
            StorageMode::Unbounded,
            "package Container is new Conts.Lists.Definite_Unbounded (Integer);",
            "with Conts.Lists.Definite_Unbounded;",
        )
        .with_binding(Binding::native(PropertyMap::Returned))
    }

    #[test]
    fn render_orders_header_steps_footer() {
        let rendered = Emitter::standard().render(&list("Controlled")).unwrap();
        let body = rendered.pair.body.text();
        let header_end = body.find("   begin").unwrap();
        let fill = body.find("Start_Test (\"fill\"").unwrap();
        let count_if = body.find("Start_Test (\"count_if\"").unwrap();
        let footer = body.find("end Run;").unwrap();
        assert!(header_end < fill && fill < count_if && count_if < footer);
        assert!(body.ends_with("end List_Controlled_Def_Unbounded_Integer;\n"));
    }

    #[test]
    fn declaration_names_the_procedure() {
        let rendered = Emitter::standard().render(&list("Controlled")).unwrap();
        assert!(rendered
            .pair
            .declaration
            .text()
            .contains("procedure List_Controlled_Def_Unbounded_Integer\n"));
    }

    #[test]
    fn case_only_differences_collide() {
        let err = check_identifiers(&[list("Ada12"), list("ADA12")]).unwrap_err();
        match err {
            GenerateError::IdentifierCollision { stem, first, second } => {
                assert_eq!(stem, "list_ada12_def_unbounded_integer");
                assert_eq!(first, "List_Ada12_Def_Unbounded_Integer");
                assert_eq!(second, "List_ADA12_Def_Unbounded_Integer");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn collision_prevents_any_write() {
        let mut sink = MemorySink::new();
        let result = Emitter::standard().run(
            &[list("Ada12"), list("Controlled"), list("ada12")],
            &mut sink,
            FailurePolicy::Continue,
        );
        assert!(result.is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn deny_policy_rejects_unknown_annotation() {
        let descriptor =
            list("Controlled").with_annotations(Annotations::new().with("sorting", "n/a"));
        let emitter = Emitter::standard().with_annotation_policy(AnnotationPolicy::Deny);
        assert!(matches!(
            emitter.render(&descriptor).unwrap_err(),
            GenerateError::UnknownAnnotation { key, .. } if key == "sorting"
        ));
        assert!(Emitter::standard().render(&descriptor).is_ok());
    }
}
