//! Shared text-form selection used by every rendering style.
//!
//! The selection rule is the one piece of behavior all styles have in common: given whether the
//! occurrence is plural, a first use, and capitalized, pick the right textual form and apply the
//! pluralizing/capitalizing fallbacks deterministically.
//!
//! ## Notes
//! - Explicit plural forms win; otherwise the base form gets [`PLURAL_SUFFIX`] appended.
//! - An absent base form (empty string) selects the empty string; capitalization leaves empty
//!   selections empty.
//!
//! ## Examples
//! ```rust
//! use siglum_core::forms::{select_form, FormContext, Forms};
//!
//! let forms = Forms {
//!     short: "RL",
//!     long: "reinforcement learning",
//!     short_plural: None,
//!     long_plural: None,
//! };
//! let ctx = FormContext { plural: false, first_use: true, capitalize: true };
//! assert_eq!(select_form(&forms, ctx), "Reinforcement learning");
//! ```

/// Suffix appended when no explicit plural form is provided.
pub const PLURAL_SUFFIX: &str = "s";

/// Borrowed view of an abbreviation's textual forms.
///
/// Required forms are plain `&str` (an absent form is represented by the empty string);
/// plural forms are optional and fall back to the base form plus [`PLURAL_SUFFIX`].
#[derive(Debug, Clone, Copy)]
pub struct Forms<'a> {
    pub short: &'a str,
    pub long: &'a str,
    pub short_plural: Option<&'a str>,
    pub long_plural: Option<&'a str>,
}

/// Usage context for a single occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormContext {
    pub plural: bool,
    pub first_use: bool,
    pub capitalize: bool,
}

/// Select the display text for one occurrence.
///
/// ## Parameters
/// - `forms`: the abbreviation's textual forms.
/// - `ctx`: plural/first-use/capitalize flags for this occurrence.
///
/// ## Returns
/// - (`String`): the selected text, possibly empty when the underlying form is absent.
///
/// ## Notes
/// - First uses select long forms, subsequent uses short forms.
/// - Plural selection prefers the explicit plural and falls back to base + [`PLURAL_SUFFIX`];
///   an empty base stays empty rather than becoming a bare suffix.
/// - Capitalization uppercases only the first character and is Unicode-scalar aware.
pub fn select_form(forms: &Forms<'_>, ctx: FormContext) -> String {
    let selected = match (ctx.plural, ctx.first_use) {
        (true, true) => forms
            .long_plural
            .map(str::to_owned)
            .unwrap_or_else(|| pluralize(forms.long)),
        (true, false) => forms
            .short_plural
            .map(str::to_owned)
            .unwrap_or_else(|| pluralize(forms.short)),
        (false, true) => forms.long.to_owned(),
        (false, false) => forms.short.to_owned(),
    };

    if ctx.capitalize {
        capitalize_first(&selected)
    } else {
        selected
    }
}

/// Append [`PLURAL_SUFFIX`] to a base form.
///
/// ## Returns
/// - (`String`): `base` + suffix, or the empty string when `base` is empty.
pub fn pluralize(base: &str) -> String {
    if base.is_empty() {
        String::new()
    } else {
        format!("{base}{PLURAL_SUFFIX}")
    }
}

/// Uppercase the first character of `text`, leaving the rest untouched.
///
/// ## Notes
/// - Operates on Unicode scalars, so multi-byte first characters are handled correctly.
/// - The empty string maps to itself.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
