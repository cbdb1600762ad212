//! Error and warning types for registration, ingestion, and style dispatch.
//!
//! Errors here are precondition violations: they surface immediately at the call that
//! triggered them and are never swallowed or retried. The only graded severity is
//! duplicate-key handling, which is caller-selected policy (see
//! [`DuplicatePolicy`](crate::registry::DuplicatePolicy)).

use std::fmt;

use thiserror::Error;

/// A raw acronym record failed validation at construction time.
///
/// Lists every missing (or empty) required field and any unrecognized field names found on
/// the record, so one diagnostic covers the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Required fields that were absent or empty (`"shortname"`, `"longname"`).
    pub missing: Vec<&'static str>,
    /// Field names on the raw record that this engine does not know.
    pub unrecognized: Vec<String>,
    /// Short diagnostic rendering of the offending record.
    pub record: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid acronym record {}", self.record)?;
        if !self.missing.is_empty() {
            write!(f, ": missing required field(s) {}", self.missing.join(", "))?;
        }
        if !self.unrecognized.is_empty() {
            write!(f, "; unrecognized field(s) {}", self.unrecognized.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Fatal errors raised by the registry, ingestion adapters, and style dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Duplicate key under the `error` duplicate policy.
    #[error("duplicate acronym key '{key}'")]
    DuplicateKey { key: String },

    /// Lookup or usage resolution named a key the registry does not hold.
    #[error("unknown acronym key '{key}'")]
    UnknownKey { key: String },

    /// Style dispatch named a style outside the catalog (a configuration error, not a
    /// runtime data error).
    #[error("unknown rendering style '{name}'")]
    UnknownStyle { name: String },

    /// A duplicate-key policy spelling outside `replace`/`keep`/`warn`/`error`.
    #[error("unknown duplicate-key policy '{name}'")]
    UnknownPolicy { name: String },
}

/// Non-fatal duplicate report produced under the `warn` duplicate policy.
///
/// Returned to the caller (and logged via `tracing`) instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateWarning {
    pub key: String,
    pub message: String,
}

impl fmt::Display for DuplicateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
