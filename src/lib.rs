#![forbid(unsafe_code)]
//! Siglum — acronym registry and style resolution for technical documents.
//!
//! Siglum is the engine behind "write the long form once, the short form thereafter": a
//! per-document registry of abbreviation definitions with usage bookkeeping (first use,
//! occurrence counts, definition/usage order) and a closed catalog of rendering styles that
//! turn each occurrence into display text, optionally wrapped as a cross-reference.
//!
//! The host document model stays outside this crate: ingestion consumes primitive key-value
//! records (the host parses front matter or definition files into those), and rendering
//! produces opaque output nodes (`Text`, `CrossRef`, optional footnote) the host turns into
//! its own inline nodes.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents an engine bug (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod diagnostics;
pub mod entity;
pub mod ingest;
pub mod registry;
pub mod style;

pub use diagnostics::{DuplicateWarning, RegistryError, ValidationError};
pub use entity::Acronym;
pub use ingest::{IngestReport, ingest_map, ingest_records};
pub use registry::{AddOutcome, DuplicatePolicy, Registry, Usage};
pub use style::{Inline, RenderContext, Rendered, resolve, resolve_named};

pub use siglum_core::styles::StyleId;
