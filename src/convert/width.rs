//! Half-width / full-width duals.
//!
//! ASCII and its fullwidth block are a fixed code point offset apart, so
//! that direction is arithmetic; kana and punctuation go through the
//! tables. Width conversion never touches the syllabary: a katakana
//! character stays katakana in either width.

use super::table::Tables;

/// Distance between printable ASCII and the fullwidth forms block.
const ASCII_WIDE_OFFSET: u32 = 0xFEE0;

/// Result of narrowing one wide character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrowed {
    Single(char),
    /// A voiced glyph decomposed into its base plus trailing mark.
    WithMark(char, char),
}

/// Full-width counterpart of a half-width character, if one exists.
/// Standalone marks widen to ゛ and ゜; combination is the caller's job.
pub(super) fn to_wide(tables: &Tables, c: char) -> Option<char> {
    match c {
        ' ' => Some('\u{3000}'),
        '!'..='~' => char::from_u32(c as u32 + ASCII_WIDE_OFFSET),
        '\u{FF61}'..='\u{FF9F}' => tables.half_to_wide(c),
        _ => None,
    }
}

/// Half-width counterpart of a wide character, if one exists. Voiced and
/// semi-voiced glyphs expand to a base plus trailing mark.
pub(super) fn to_narrow(tables: &Tables, c: char) -> Option<Narrowed> {
    match c {
        '\u{3000}' => Some(Narrowed::Single(' ')),
        '\u{FF01}'..='\u{FF5E}' => {
            char::from_u32(c as u32 - ASCII_WIDE_OFFSET).map(Narrowed::Single)
        }
        _ => {
            if let Some(half) = tables.wide_to_half(c) {
                return Some(Narrowed::Single(half));
            }
            super::voicing::decompose(tables, c).map(|(base, mark)| Narrowed::WithMark(base, mark))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_widens_by_offset() {
        let tables = Tables::new();
        assert_eq!(to_wide(&tables, 'A'), Some('Ａ'));
        assert_eq!(to_wide(&tables, '0'), Some('０'));
        assert_eq!(to_wide(&tables, '?'), Some('？'));
        assert_eq!(to_wide(&tables, ' '), Some('　'));
        assert_eq!(to_wide(&tables, '~'), Some('～'));
    }

    #[test]
    fn half_kana_widens_through_the_table() {
        let tables = Tables::new();
        assert_eq!(to_wide(&tables, 'ｶ'), Some('カ'));
        assert_eq!(to_wide(&tables, '｡'), Some('。'));
        assert_eq!(to_wide(&tables, 'ｰ'), Some('ー'));
        assert_eq!(to_wide(&tables, 'ﾞ'), Some('゛'));
    }

    #[test]
    fn wide_only_characters_have_no_wide_form() {
        let tables = Tables::new();
        assert_eq!(to_wide(&tables, 'カ'), None);
        assert_eq!(to_wide(&tables, 'あ'), None);
        assert_eq!(to_wide(&tables, '漢'), None);
        assert_eq!(to_wide(&tables, '\u{7F}'), None);
    }

    #[test]
    fn narrowing_inverts_widening() {
        let tables = Tables::new();
        assert_eq!(to_narrow(&tables, 'Ａ'), Some(Narrowed::Single('A')));
        assert_eq!(to_narrow(&tables, '　'), Some(Narrowed::Single(' ')));
        assert_eq!(to_narrow(&tables, 'カ'), Some(Narrowed::Single('ｶ')));
        assert_eq!(to_narrow(&tables, '。'), Some(Narrowed::Single('｡')));
        assert_eq!(to_narrow(&tables, '゜'), Some(Narrowed::Single('ﾟ')));
    }

    #[test]
    fn voiced_glyphs_narrow_to_base_plus_mark() {
        let tables = Tables::new();
        assert_eq!(to_narrow(&tables, 'ガ'), Some(Narrowed::WithMark('ｶ', 'ﾞ')));
        assert_eq!(to_narrow(&tables, 'パ'), Some(Narrowed::WithMark('ﾊ', 'ﾟ')));
        assert_eq!(to_narrow(&tables, 'ヴ'), Some(Narrowed::WithMark('ｳ', 'ﾞ')));
        assert_eq!(to_narrow(&tables, 'ヺ'), Some(Narrowed::WithMark('ｦ', 'ﾞ')));
    }

    #[test]
    fn characters_without_narrow_duals() {
        let tables = Tables::new();
        assert_eq!(to_narrow(&tables, 'ヮ'), None);
        assert_eq!(to_narrow(&tables, 'ヸ'), None);
        assert_eq!(to_narrow(&tables, 'あ'), None);
        assert_eq!(to_narrow(&tables, 'ヿ'), None);
        assert_eq!(to_narrow(&tables, 'a'), None);
    }
}
