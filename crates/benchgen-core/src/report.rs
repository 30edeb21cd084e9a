//! Run reports

use benchgen_artifact::{ArtifactId, ContentHash, PersistOutcome};
use benchgen_template::{ContainerKind, ElementClass};
use serde::Serialize;

/// One emitted variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantRecord {
    /// Procedure name
    pub id: ArtifactId,
    /// File stem (`<stem>.ads`, `<stem>.adb`)
    pub stem: String,
    /// Container kind
    pub kind: ContainerKind,
    /// Element class
    pub class: ElementClass,
    /// Step names, in emission order
    pub steps: Vec<&'static str>,
    /// Declaration content hash
    pub declaration_hash: ContentHash,
    /// Body content hash
    pub body_hash: ContentHash,
    /// What the sink did
    pub outcome: PersistOutcome,
}

/// One failed variant (only recorded under `FailurePolicy::Continue`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    /// Variant identifier, or its position when none could be derived
    pub variant: String,
    /// Rendered error chain
    pub error: String,
}

/// Outcome of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Emitted variants, in descriptor order
    pub variants: Vec<VariantRecord>,
    /// Failed variants, in descriptor order
    pub failures: Vec<FailureRecord>,
}

impl RunReport {
    /// Create empty report
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every variant was emitted
    #[inline]
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Variants whose files were (re)written
    #[must_use]
    pub fn written(&self) -> usize {
        self.count(PersistOutcome::Written)
    }

    /// Variants whose files were already up to date
    #[must_use]
    pub fn unchanged(&self) -> usize {
        self.count(PersistOutcome::Unchanged)
    }

    fn count(&self, outcome: PersistOutcome) -> usize {
        self.variants.iter().filter(|v| v.outcome == outcome).count()
    }

    /// Pretty JSON rendering
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(outcome: PersistOutcome) -> VariantRecord {
        let id = ArtifactId::new("List_Ada12_Def_Unbounded_Integer").unwrap();
        VariantRecord {
            stem: id.stem(),
            id,
            kind: ContainerKind::List,
            class: ElementClass::Numeric,
            steps: vec!["fill", "copy"],
            declaration_hash: ContentHash::compute(b"decl"),
            body_hash: ContentHash::compute(b"body"),
            outcome,
        }
    }

    #[test]
    fn counts_by_outcome() {
        let report = RunReport {
            variants: vec![
                record(PersistOutcome::Written),
                record(PersistOutcome::Unchanged),
                record(PersistOutcome::Written),
            ],
            failures: Vec::new(),
        };
        assert!(report.passed());
        assert_eq!(report.written(), 2);
        assert_eq!(report.unchanged(), 1);
    }

    #[test]
    fn failures_fail_the_run() {
        let mut report = RunReport::new();
        report.failures.push(FailureRecord {
            variant: "#3".into(),
            error: "boom".into(),
        });
        assert!(!report.passed());
    }

    #[test]
    fn json_uses_hex_hashes() {
        let report = RunReport {
            variants: vec![record(PersistOutcome::Unchanged)],
            failures: Vec::new(),
        };
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        let entry = &value["variants"][0];
        assert_eq!(entry["id"], "List_Ada12_Def_Unbounded_Integer");
        assert_eq!(entry["stem"], "list_ada12_def_unbounded_integer");
        assert_eq!(entry["outcome"], "unchanged");
        assert_eq!(
            entry["body_hash"].as_str().unwrap(),
            ContentHash::compute(b"body").to_string()
        );
    }
}
