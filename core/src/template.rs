//! Placeholder substitution for benchmark command templates.
//!
//! Templates carry two tokens: `{foro}` for the formatter under test and
//! `{size}` for the fixture size tag. Substitution must alter nothing else.

pub const FORO_TOKEN: &str = "{foro}";
pub const SIZE_TOKEN: &str = "{size}";

/// Replaces every `{foro}` occurrence with `foro` and every `{size}`
/// occurrence with the size tag, leaving all other characters untouched.
pub fn resolve(template: &str, foro: &str, size: &str) -> String {
    template.replace(FORO_TOKEN, foro).replace(SIZE_TOKEN, size)
}

pub fn mentions_size(template: &str) -> bool {
    template.contains(SIZE_TOKEN)
}

/// True when a resolved command still carries an unsubstituted token.
pub fn has_unresolved(command: &str) -> bool {
    command.contains(FORO_TOKEN) || command.contains(SIZE_TOKEN)
}
