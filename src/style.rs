//! Style resolution: turn one acronym occurrence into an output node.
//!
//! Each style is a pure function of the entity and the usage context. Dispatch is an
//! exhaustive match over the closed [`StyleId`] catalog; unknown style spellings are
//! rejected at the [`resolve_named`] boundary, so rendering code never sees one.
//!
//! Output nodes are opaque to the host beyond two shapes, plain text and
//! cross-reference-wrapped text, plus an optionally attached footnote. The host document
//! model owns the concrete inline representation and cross-reference target resolution.

use siglum_core::forms::{FormContext, select_form};
use siglum_core::styles::{self, StyleId};

use crate::diagnostics::RegistryError;
use crate::entity::Acronym;

/// Inline output shape handed to the host document model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Text wrapped as a cross-reference to the acronym's key.
    CrossRef { target: String, text: String },
}

impl Inline {
    /// The display text regardless of wrapping.
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text) => text,
            Inline::CrossRef { text, .. } => text,
        }
    }
}

/// One resolved occurrence: the inline node plus an optional attached footnote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub inline: Inline,
    pub note: Option<String>,
}

/// Usage context for one occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Wrap the output as a cross-reference to the entity's key.
    pub cross_ref: bool,
    /// `None` means "compute from `entity.is_first_use()` at call time". Callers that care
    /// about usage order must still go through the registry's `resolve_usage`.
    pub first_use: Option<bool>,
    pub plural: bool,
    pub capitalize: bool,
}

/// Resolve one occurrence with a typed style identifier.
///
/// Deterministic and pure: identical inputs produce an identical output node, and nothing
/// besides the entity's own fields is consulted.
pub fn resolve(acronym: &Acronym, style: StyleId, ctx: &RenderContext) -> Rendered {
    let first_use = ctx.first_use.unwrap_or_else(|| acronym.is_first_use());
    let forms = acronym.forms();
    let select = |first_use: bool, capitalize: bool| {
        select_form(
            &forms,
            FormContext {
                plural: ctx.plural,
                first_use,
                capitalize,
            },
        )
    };

    match style {
        StyleId::LongShort => {
            let text = if first_use {
                format!("{} ({})", select(true, ctx.capitalize), select(false, false))
            } else {
                select(false, ctx.capitalize)
            };
            plain_or_cross_ref(acronym, text, ctx.cross_ref)
        }
        StyleId::ShortLong => {
            let text = if first_use {
                format!("{} ({})", select(false, ctx.capitalize), select(true, false))
            } else {
                select(false, ctx.capitalize)
            };
            plain_or_cross_ref(acronym, text, ctx.cross_ref)
        }
        StyleId::LongLong => {
            // Context-insensitive: the first-use flag is not consulted.
            let text = select(true, ctx.capitalize);
            plain_or_cross_ref(acronym, text, ctx.cross_ref)
        }
        StyleId::ShortFootnote => {
            let text = select(false, ctx.capitalize);
            let note = first_use.then(|| select(true, false));
            // The inline text links to its definition whether or not cross_ref is set;
            // the note content is never a cross-reference.
            Rendered {
                inline: Inline::CrossRef {
                    target: acronym.key().to_owned(),
                    text,
                },
                note,
            }
        }
    }
}

/// Resolve one occurrence from a style *name*, rejecting spellings outside the catalog.
pub fn resolve_named(
    acronym: &Acronym,
    style_name: &str,
    ctx: &RenderContext,
) -> Result<Rendered, RegistryError> {
    let style = styles::from_str(style_name).ok_or_else(|| RegistryError::UnknownStyle {
        name: style_name.to_owned(),
    })?;
    Ok(resolve(acronym, style, ctx))
}

fn plain_or_cross_ref(acronym: &Acronym, text: String, cross_ref: bool) -> Rendered {
    let inline = if cross_ref {
        Inline::CrossRef {
            target: acronym.key().to_owned(),
            text,
        }
    } else {
        Inline::Text(text)
    };
    Rendered { inline, note: None }
}
