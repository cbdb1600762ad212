//! Ingestion adapters: turn raw key-value records into registered acronym entities.
//!
//! The host parses front matter or external definition files into primitive records; the
//! adapters here are the only code that feeds [`Registry::add`]. Two raw formats are
//! accepted: an explicit list of records (with optional `key` and plural fields) and a
//! simplified `shortname -> longname` map.

use serde_json::{Map, Value};
use tracing::debug;

use crate::diagnostics::{DuplicateWarning, RegistryError, ValidationError};
use crate::entity::Acronym;
use crate::registry::{AddOutcome, DuplicatePolicy, Registry};

/// Field names the explicit record format understands. Anything else on a record is kept
/// only for diagnostics.
const KNOWN_FIELDS: &[&str] = &["key", "shortname", "longname", "shortplural", "longplural"];

const RECORD_PREVIEW_LEN: usize = 120;

/// Aggregate of [`AddOutcome`]s for one ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub added: usize,
    pub replaced: usize,
    pub kept: usize,
    /// Non-fatal duplicate reports produced under [`DuplicatePolicy::Warn`].
    pub warnings: Vec<DuplicateWarning>,
}

impl IngestReport {
    fn absorb(&mut self, outcome: AddOutcome) {
        match outcome {
            AddOutcome::Inserted { .. } => self.added += 1,
            AddOutcome::Replaced { .. } => self.replaced += 1,
            AddOutcome::Kept => self.kept += 1,
            AddOutcome::Warned(warning) => {
                self.kept += 1;
                self.warnings.push(warning);
            }
        }
    }
}

/// Ingest the explicit record-list format.
///
/// Each record is an object with optional `key`, required `shortname`, required
/// `longname`, and optional `shortplural`/`longplural`. An invalid record aborts the pass
/// with a [`ValidationError`] naming every missing required field and every unrecognized
/// field on that record; unrecognized fields on an otherwise valid record are tolerated.
pub fn ingest_records(
    registry: &mut Registry,
    records: &[Value],
    on_duplicate: DuplicatePolicy,
) -> Result<IngestReport, RegistryError> {
    let mut report = IngestReport::default();
    for record in records {
        let acronym = record_to_acronym(record)?;
        report.absorb(registry.add(acronym, on_duplicate)?);
    }
    debug!(
        added = report.added,
        replaced = report.replaced,
        kept = report.kept,
        "acronym records ingested"
    );
    Ok(report)
}

/// Ingest the simplified `shortname -> longname` map format (no key or plural support).
///
/// Pairs are registered in the map's iteration order, so definition order follows the
/// order in which the host parsed them.
pub fn ingest_map(
    registry: &mut Registry,
    pairs: &Map<String, Value>,
    on_duplicate: DuplicatePolicy,
) -> Result<IngestReport, RegistryError> {
    let mut report = IngestReport::default();
    for (short, long) in pairs {
        let Some(long) = long.as_str().filter(|l| !l.is_empty()) else {
            return Err(ValidationError {
                missing: vec!["longname"],
                unrecognized: Vec::new(),
                record: preview(&format!("\"{short}\": {long}")),
            }
            .into());
        };
        let acronym = Acronym::new(None, short, long, None, None)?;
        report.absorb(registry.add(acronym, on_duplicate)?);
    }
    debug!(
        added = report.added,
        replaced = report.replaced,
        kept = report.kept,
        "acronym map ingested"
    );
    Ok(report)
}

fn record_to_acronym(record: &Value) -> Result<Acronym, RegistryError> {
    let Some(object) = record.as_object() else {
        return Err(ValidationError {
            missing: vec!["shortname", "longname"],
            unrecognized: Vec::new(),
            record: preview(&record.to_string()),
        }
        .into());
    };

    let field = |name: &str| object.get(name).and_then(Value::as_str).filter(|v| !v.is_empty());
    let unrecognized: Vec<String> = object
        .keys()
        .filter(|name| !KNOWN_FIELDS.contains(&name.as_str()))
        .cloned()
        .collect();

    let (short, long) = match (field("shortname"), field("longname")) {
        (Some(short), Some(long)) => (short, long),
        (short, long) => {
            let mut missing = Vec::new();
            if short.is_none() {
                missing.push("shortname");
            }
            if long.is_none() {
                missing.push("longname");
            }
            return Err(ValidationError {
                missing,
                unrecognized,
                record: preview(&record.to_string()),
            }
            .into());
        }
    };

    if !unrecognized.is_empty() {
        debug!(
            shortname = short,
            fields = ?unrecognized,
            "ignoring unrecognized acronym record fields"
        );
    }

    Ok(Acronym::new(
        field("key"),
        short,
        long,
        field("shortplural"),
        field("longplural"),
    )?)
}

fn preview(rendered: &str) -> String {
    if rendered.len() <= RECORD_PREVIEW_LEN {
        return rendered.to_owned();
    }
    let cut = rendered
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= RECORD_PREVIEW_LEN)
        .last()
        .unwrap_or(0);
    format!("{}...", &rendered[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_list_registers_in_document_order() {
        let mut registry = Registry::new();
        let records = vec![
            json!({"shortname": "RL", "longname": "Reinforcement Learning"}),
            json!({
                "key": "gpu",
                "shortname": "GPU",
                "longname": "Graphics Processing Unit",
                "shortplural": "GPUs",
                "longplural": "Graphics Processing Units"
            }),
        ];
        let report = ingest_records(&mut registry, &records, DuplicatePolicy::Error).unwrap();
        assert_eq!(report.added, 2);
        assert!(report.warnings.is_empty());

        assert_eq!(registry.get("RL").unwrap().definition_order(), Some(1));
        let gpu = registry.get("gpu").unwrap();
        assert_eq!(gpu.definition_order(), Some(2));
        assert_eq!(gpu.short_plural(), Some("GPUs"));
    }

    #[test]
    fn invalid_record_reports_missing_and_unrecognized_fields() {
        let mut registry = Registry::new();
        let records = vec![json!({"shortname": "RL", "source": "glossary.yml"})];
        let err = ingest_records(&mut registry, &records, DuplicatePolicy::Error).unwrap_err();
        match err {
            RegistryError::Validation(err) => {
                assert_eq!(err.missing, vec!["longname"]);
                assert_eq!(err.unrecognized, vec!["source".to_owned()]);
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn non_object_record_is_a_validation_error() {
        let mut registry = Registry::new();
        let records = vec![json!("RL")];
        let err = ingest_records(&mut registry, &records, DuplicatePolicy::Error).unwrap_err();
        assert!(matches!(err, RegistryError::Validation(_)));
    }

    #[test]
    fn unrecognized_fields_alone_are_tolerated() {
        let mut registry = Registry::new();
        let records = vec![json!({
            "shortname": "RL",
            "longname": "Reinforcement Learning",
            "source": "glossary.yml"
        })];
        let report = ingest_records(&mut registry, &records, DuplicatePolicy::Error).unwrap();
        assert_eq!(report.added, 1);
        assert!(registry.contains("RL"));
    }

    #[test]
    fn map_format_registers_short_to_long_pairs() {
        let mut registry = Registry::new();
        let Value::Object(pairs) = json!({
            "RL": "Reinforcement Learning",
            "GPU": "Graphics Processing Unit"
        }) else {
            unreachable!()
        };
        let report = ingest_map(&mut registry, &pairs, DuplicatePolicy::Error).unwrap();
        assert_eq!(report.added, 2);
        assert_eq!(registry.get("RL").unwrap().definition_order(), Some(1));
        assert_eq!(registry.get("GPU").unwrap().definition_order(), Some(2));
        assert_eq!(registry.get("GPU").unwrap().short_plural(), None);
    }

    #[test]
    fn map_format_rejects_non_string_long_forms() {
        let mut registry = Registry::new();
        let Value::Object(pairs) = json!({"RL": 7}) else {
            unreachable!()
        };
        let err = ingest_map(&mut registry, &pairs, DuplicatePolicy::Error).unwrap_err();
        match err {
            RegistryError::Validation(err) => assert_eq!(err.missing, vec!["longname"]),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_warnings_surface_in_the_report() {
        let mut registry = Registry::new();
        let records = vec![
            json!({"shortname": "RL", "longname": "Reinforcement Learning"}),
            json!({"shortname": "RL", "longname": "Real Life"}),
        ];
        let report = ingest_records(&mut registry, &records, DuplicatePolicy::Warn).unwrap();
        assert_eq!(report.added, 1);
        assert_eq!(report.kept, 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].key, "RL");
    }
}
