//! The acronym registry: exclusive owner of all entities for one document-processing run.
//!
//! The registry assigns definition order at insertion time and usage order at
//! first-reference time, enforces the duplicate-key policy, and provides lookup. It is
//! process-local state with an explicit lifecycle: construct, populate during ingestion,
//! query/mutate during rendering, discard at end of run. A fresh run starts from
//! [`Registry::new`]; nothing persists across runs.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::warn;

use crate::diagnostics::{DuplicateWarning, RegistryError};
use crate::entity::Acronym;

/// Registration-time policy for a key that is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuplicatePolicy {
    /// Overwrite the existing entry; the new entity gets a freshly assigned definition
    /// order (the replaced entry's order is retired, never reused).
    Replace,
    /// Silently keep the existing entry.
    Keep,
    /// Keep the existing entry and report a non-fatal [`DuplicateWarning`].
    Warn,
    /// Abort ingestion with [`RegistryError::DuplicateKey`].
    Error,
}

impl DuplicatePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            DuplicatePolicy::Replace => "replace",
            DuplicatePolicy::Keep => "keep",
            DuplicatePolicy::Warn => "warn",
            DuplicatePolicy::Error => "error",
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = RegistryError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            n if n.eq_ignore_ascii_case("replace") => Ok(DuplicatePolicy::Replace),
            n if n.eq_ignore_ascii_case("keep") => Ok(DuplicatePolicy::Keep),
            n if n.eq_ignore_ascii_case("warn") => Ok(DuplicatePolicy::Warn),
            n if n.eq_ignore_ascii_case("error") => Ok(DuplicatePolicy::Error),
            _ => Err(RegistryError::UnknownPolicy {
                name: name.to_owned(),
            }),
        }
    }
}

/// What [`Registry::add`] did with the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted { definition_order: u32 },
    Replaced { definition_order: u32 },
    /// Duplicate silently ignored under [`DuplicatePolicy::Keep`].
    Kept,
    /// Duplicate ignored under [`DuplicatePolicy::Warn`]; the warning travels to the caller.
    Warned(DuplicateWarning),
}

/// Result of resolving one reference: the entity plus whether this was its first use.
#[derive(Debug)]
pub struct Usage<'a> {
    pub acronym: &'a Acronym,
    pub first_use: bool,
}

/// Per-run registry of acronym entities.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, Acronym>,
    next_definition_order: u32,
    next_usage_order: u32,
}

impl Registry {
    /// Fresh, empty registry with both order counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure lookup, no side effects.
    pub fn get(&self, key: &str) -> Option<&Acronym> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register `acronym` under its key, applying `on_duplicate` when the key is taken.
    ///
    /// A fresh key is always inserted and assigned the next definition order; the policy
    /// only matters for duplicates. Only [`DuplicatePolicy::Error`] is fatal.
    pub fn add(
        &mut self,
        acronym: Acronym,
        on_duplicate: DuplicatePolicy,
    ) -> Result<AddOutcome, RegistryError> {
        let key = acronym.key().to_owned();
        if self.entries.contains_key(&key) {
            match on_duplicate {
                DuplicatePolicy::Keep => return Ok(AddOutcome::Kept),
                DuplicatePolicy::Warn => {
                    warn!(key = %key, "duplicate acronym key; keeping the existing definition");
                    return Ok(AddOutcome::Warned(DuplicateWarning {
                        message: format!(
                            "acronym key '{key}' is already registered; keeping the existing definition"
                        ),
                        key,
                    }));
                }
                DuplicatePolicy::Error => {
                    return Err(RegistryError::DuplicateKey { key });
                }
                DuplicatePolicy::Replace => {
                    let order = self.insert(key, acronym);
                    return Ok(AddOutcome::Replaced {
                        definition_order: order,
                    });
                }
            }
        }

        let order = self.insert(key, acronym);
        Ok(AddOutcome::Inserted {
            definition_order: order,
        })
    }

    fn insert(&mut self, key: String, mut acronym: Acronym) -> u32 {
        self.next_definition_order += 1;
        acronym.assign_definition_order(self.next_definition_order);
        self.entries.insert(key, acronym);
        self.next_definition_order
    }

    /// The canonical "reference this acronym" operation.
    ///
    /// Fails with [`RegistryError::UnknownKey`] when the key is absent; callers must detect
    /// that before invoking style resolution. On the entity's first use the next usage
    /// order is assigned. `occurrences` is **not** incremented here: callers call
    /// [`Registry::record_occurrence`] only after style resolution succeeded, so a failed
    /// render leaves no partial state.
    pub fn resolve_usage(&mut self, key: &str) -> Result<Usage<'_>, RegistryError> {
        let next_usage_order = self.next_usage_order + 1;
        let acronym = self
            .entries
            .get_mut(key)
            .ok_or_else(|| RegistryError::UnknownKey {
                key: key.to_owned(),
            })?;

        let first_use = acronym.is_first_use();
        if first_use && acronym.usage_order().is_none() {
            acronym.assign_usage_order(next_usage_order);
            self.next_usage_order = next_usage_order;
        }

        Ok(Usage {
            acronym,
            first_use,
        })
    }

    /// The explicit post-render step: count one resolved reference against `key`.
    pub fn record_occurrence(&mut self, key: &str) -> Result<(), RegistryError> {
        let acronym = self
            .entries
            .get_mut(key)
            .ok_or_else(|| RegistryError::UnknownKey {
                key: key.to_owned(),
            })?;
        acronym.increment_occurrences();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acronym(key: &str, long: &str) -> Acronym {
        Acronym::new(None, key, long, None, None).unwrap()
    }

    #[test]
    fn definition_order_follows_insertion_order() {
        let mut registry = Registry::new();
        for (i, key) in ["RL", "GPU", "API"].iter().enumerate() {
            let outcome = registry
                .add(acronym(key, "placeholder long form"), DuplicatePolicy::Error)
                .unwrap();
            assert_eq!(
                outcome,
                AddOutcome::Inserted {
                    definition_order: i as u32 + 1
                }
            );
        }
        assert_eq!(registry.get("GPU").unwrap().definition_order(), Some(2));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn keep_policy_retains_the_original() {
        let mut registry = Registry::new();
        registry
            .add(acronym("RL", "Reinforcement Learning"), DuplicatePolicy::Error)
            .unwrap();
        let outcome = registry
            .add(acronym("RL", "Real Life"), DuplicatePolicy::Keep)
            .unwrap();
        assert_eq!(outcome, AddOutcome::Kept);
        let kept = registry.get("RL").unwrap();
        assert_eq!(kept.long(), "Reinforcement Learning");
        assert_eq!(kept.definition_order(), Some(1));
    }

    #[test]
    fn warn_policy_reports_but_does_not_abort() {
        let mut registry = Registry::new();
        registry
            .add(acronym("RL", "Reinforcement Learning"), DuplicatePolicy::Error)
            .unwrap();
        let outcome = registry
            .add(acronym("RL", "Real Life"), DuplicatePolicy::Warn)
            .unwrap();
        match outcome {
            AddOutcome::Warned(warning) => {
                assert_eq!(warning.key, "RL");
                assert!(warning.message.contains("already registered"));
            }
            other => panic!("expected a warning outcome, got {other:?}"),
        }
        assert_eq!(registry.get("RL").unwrap().long(), "Reinforcement Learning");
    }

    #[test]
    fn replace_policy_assigns_a_fresh_definition_order() {
        let mut registry = Registry::new();
        registry
            .add(acronym("RL", "Reinforcement Learning"), DuplicatePolicy::Error)
            .unwrap();
        registry
            .add(acronym("GPU", "Graphics Processing Unit"), DuplicatePolicy::Error)
            .unwrap();
        let outcome = registry
            .add(acronym("RL", "Real Life"), DuplicatePolicy::Replace)
            .unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Replaced {
                definition_order: 3
            }
        );
        let replaced = registry.get("RL").unwrap();
        assert_eq!(replaced.long(), "Real Life");
        assert_eq!(replaced.definition_order(), Some(3));
    }

    #[test]
    fn error_policy_aborts_and_leaves_the_original_intact() {
        let mut registry = Registry::new();
        registry
            .add(acronym("RL", "Reinforcement Learning"), DuplicatePolicy::Error)
            .unwrap();
        let err = registry
            .add(acronym("RL", "Real Life"), DuplicatePolicy::Error)
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateKey {
                key: "RL".to_owned()
            }
        );
        assert_eq!(registry.get("RL").unwrap().long(), "Reinforcement Learning");
    }

    #[test]
    fn usage_order_tracks_first_references_only() {
        let mut registry = Registry::new();
        for key in ["A", "B", "C"] {
            registry
                .add(acronym(key, "placeholder long form"), DuplicatePolicy::Error)
                .unwrap();
        }

        // Reference B, then A, then B again.
        let usage = registry.resolve_usage("B").unwrap();
        assert!(usage.first_use);
        assert_eq!(usage.acronym.usage_order(), Some(1));
        registry.record_occurrence("B").unwrap();

        let usage = registry.resolve_usage("A").unwrap();
        assert!(usage.first_use);
        assert_eq!(usage.acronym.usage_order(), Some(2));
        registry.record_occurrence("A").unwrap();

        let usage = registry.resolve_usage("B").unwrap();
        assert!(!usage.first_use);
        assert_eq!(usage.acronym.usage_order(), Some(1));
        registry.record_occurrence("B").unwrap();

        // C was never referenced.
        assert_eq!(registry.get("C").unwrap().usage_order(), None);
        assert_eq!(registry.get("B").unwrap().occurrences(), 2);
    }

    #[test]
    fn unknown_keys_are_reported_not_defaulted() {
        let mut registry = Registry::new();
        assert!(registry.get("missing").is_none());
        assert!(!registry.contains("missing"));
        let err = registry.resolve_usage("missing").unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownKey {
                key: "missing".to_owned()
            }
        );
        let err = registry.record_occurrence("missing").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownKey { .. }));
    }

    #[test]
    fn duplicate_policy_spellings_parse_case_insensitively() {
        assert_eq!("replace".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Replace);
        assert_eq!("KEEP".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Keep);
        assert_eq!("Warn".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Warn);
        assert_eq!("error".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Error);
        let err = "overwrite".parse::<DuplicatePolicy>().unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownPolicy {
                name: "overwrite".to_owned()
            }
        );
    }
}
