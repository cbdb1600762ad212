#![forbid(unsafe_code)]
//! Provide the canonical style vocabulary and pure text-selection helpers for the siglum engine.
//!
//! This crate is intentionally small and dependency-free. It contains the deterministic pieces
//! that both:
//! - the registry/rendering engine uses to pick the display form of an abbreviation, and
//! - host tooling (docs, linters, completion) can use to enumerate the supported styles.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, and no engine-specific types.
//! - Current scope: the style vocabulary (canonical spellings + metadata) and the shared
//!   `select_form` rule (plural/first-use selection, pluralizing fallback, capitalization).

pub mod forms;
pub mod styles;

pub use forms::{FormContext, Forms, select_form};
pub use styles::StyleId;
