//! The acronym entity: one abbreviation's identity, textual forms, and usage counters.
//!
//! Entities are simple value-like records until a [`Registry`](crate::registry::Registry)
//! takes ownership of them; definition and usage order are assigned by the registry, never
//! at construction time.

use std::fmt::Write as _;

use siglum_core::forms::Forms;

use crate::diagnostics::ValidationError;

/// One abbreviation definition plus its usage bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acronym {
    key: String,
    short: String,
    long: String,
    short_plural: Option<String>,
    long_plural: Option<String>,
    occurrences: u32,
    definition_order: Option<u32>,
    usage_order: Option<u32>,
}

impl Acronym {
    /// Construct a validated entity.
    ///
    /// `short` and `long` are required and must be non-empty; the returned
    /// [`ValidationError`] names every violated field (both, when both are empty). `key`
    /// defaults to `short` when absent or empty. Plural forms stay unset unless supplied.
    pub fn new(
        key: Option<&str>,
        short: &str,
        long: &str,
        short_plural: Option<&str>,
        long_plural: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();
        if short.is_empty() {
            missing.push("shortname");
        }
        if long.is_empty() {
            missing.push("longname");
        }
        if !missing.is_empty() {
            let record = match (short, key) {
                (s, _) if !s.is_empty() => format!("'{s}'"),
                (_, Some(k)) if !k.is_empty() => format!("'{k}'"),
                _ => "<unnamed record>".to_owned(),
            };
            return Err(ValidationError {
                missing,
                unrecognized: Vec::new(),
                record,
            });
        }

        Ok(Self {
            key: key
                .filter(|k| !k.is_empty())
                .unwrap_or(short)
                .to_owned(),
            short: short.to_owned(),
            long: long.to_owned(),
            short_plural: short_plural.map(str::to_owned),
            long_plural: long_plural.map(str::to_owned),
            occurrences: 0,
            definition_order: None,
            usage_order: None,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn short_plural(&self) -> Option<&str> {
        self.short_plural.as_deref()
    }

    pub fn long_plural(&self) -> Option<&str> {
        self.long_plural.as_deref()
    }

    /// Number of references resolved through the registry so far.
    pub fn occurrences(&self) -> u32 {
        self.occurrences
    }

    /// 1-based registration index, set once by the registry.
    pub fn definition_order(&self) -> Option<u32> {
        self.definition_order
    }

    /// 1-based first-reference index, set once by the registry; `None` until referenced.
    pub fn usage_order(&self) -> Option<u32> {
        self.usage_order
    }

    /// Whether this entity has never been referenced. Queried *before* incrementing.
    pub fn is_first_use(&self) -> bool {
        self.occurrences == 0
    }

    /// Record one resolved reference.
    pub fn increment_occurrences(&mut self) {
        self.occurrences += 1;
    }

    /// Borrowed view of the textual forms, as consumed by
    /// [`select_form`](siglum_core::forms::select_form).
    pub fn forms(&self) -> Forms<'_> {
        Forms {
            short: &self.short,
            long: &self.long,
            short_plural: self.short_plural.as_deref(),
            long_plural: self.long_plural.as_deref(),
        }
    }

    /// Deterministic diagnostic rendering of all fields; unset optionals are omitted.
    pub fn describe(&self) -> String {
        let mut out = format!(
            "acronym '{}': shortname=\"{}\", longname=\"{}\"",
            self.key, self.short, self.long
        );
        if let Some(p) = &self.short_plural {
            let _ = write!(out, ", shortplural=\"{p}\"");
        }
        if let Some(p) = &self.long_plural {
            let _ = write!(out, ", longplural=\"{p}\"");
        }
        let _ = write!(out, ", occurrences={}", self.occurrences);
        if let Some(d) = self.definition_order {
            let _ = write!(out, ", definition_order={d}");
        }
        if let Some(u) = self.usage_order {
            let _ = write!(out, ", usage_order={u}");
        }
        out
    }

    pub(crate) fn assign_definition_order(&mut self, order: u32) {
        debug_assert!(
            self.definition_order.is_none(),
            "definition order is assigned exactly once"
        );
        self.definition_order = Some(order);
    }

    pub(crate) fn assign_usage_order(&mut self, order: u32) {
        debug_assert!(
            self.usage_order.is_none(),
            "usage order is assigned exactly once"
        );
        self.usage_order = Some(order);
    }
}
