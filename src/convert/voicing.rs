//! Voicing mark (dakuten / handakuten) combination.
//!
//! The only multi-character behavior in the engine: one base character
//! plus one following half-width mark, never more. A pair that does not
//! combine must be kept as two independent characters by the caller.

use super::table::Tables;

/// Half-width voicing mark ﾞ.
pub const VOICED_MARK: char = '\u{FF9E}';
/// Half-width semi-voicing mark ﾟ.
pub const SEMI_VOICED_MARK: char = '\u{FF9F}';

/// Combine a half-width base with a following half-width mark into the
/// precomposed full-width glyph. `None` when the mark is not one of the
/// two designated code points or the base has no voiced form.
pub fn combine(tables: &Tables, base: char, mark: char) -> Option<char> {
    match mark {
        VOICED_MARK => tables.voiced(base),
        SEMI_VOICED_MARK => tables.semi_voiced(base),
        _ => None,
    }
}

/// Inverse of `combine`: split a precomposed glyph into its half-width
/// base plus mark.
pub fn decompose(tables: &Tables, glyph: char) -> Option<(char, char)> {
    if let Some(base) = tables.voiced_base(glyph) {
        return Some((base, VOICED_MARK));
    }
    tables
        .semi_voiced_base(glyph)
        .map(|base| (base, SEMI_VOICED_MARK))
}
