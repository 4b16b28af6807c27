//! Character mapping tables.
//!
//! The literal half-width/full-width associations and the voicing-mark
//! combination entries, compiled once into sorted lookup vectors. The
//! shared instance follows the same `OnceLock` discipline as the rest of
//! the crate's one-time state: built on first use, read-only afterwards,
//! and also constructible directly for isolated tests.

use std::sync::OnceLock;

use unicode_width::UnicodeWidthChar;

/// Half-width katakana and punctuation (U+FF61..=U+FF9F) to their
/// full-width duals, in code point order.
const HALF_TO_WIDE: &[(char, char)] = &[
    ('｡', '。'),
    ('｢', '「'),
    ('｣', '」'),
    ('､', '、'),
    ('･', '・'),
    ('ｦ', 'ヲ'),
    ('ｧ', 'ァ'),
    ('ｨ', 'ィ'),
    ('ｩ', 'ゥ'),
    ('ｪ', 'ェ'),
    ('ｫ', 'ォ'),
    ('ｬ', 'ャ'),
    ('ｭ', 'ュ'),
    ('ｮ', 'ョ'),
    ('ｯ', 'ッ'),
    ('ｰ', 'ー'),
    ('ｱ', 'ア'),
    ('ｲ', 'イ'),
    ('ｳ', 'ウ'),
    ('ｴ', 'エ'),
    ('ｵ', 'オ'),
    ('ｶ', 'カ'),
    ('ｷ', 'キ'),
    ('ｸ', 'ク'),
    ('ｹ', 'ケ'),
    ('ｺ', 'コ'),
    ('ｻ', 'サ'),
    ('ｼ', 'シ'),
    ('ｽ', 'ス'),
    ('ｾ', 'セ'),
    ('ｿ', 'ソ'),
    ('ﾀ', 'タ'),
    ('ﾁ', 'チ'),
    ('ﾂ', 'ツ'),
    ('ﾃ', 'テ'),
    ('ﾄ', 'ト'),
    ('ﾅ', 'ナ'),
    ('ﾆ', 'ニ'),
    ('ﾇ', 'ヌ'),
    ('ﾈ', 'ネ'),
    ('ﾉ', 'ノ'),
    ('ﾊ', 'ハ'),
    ('ﾋ', 'ヒ'),
    ('ﾌ', 'フ'),
    ('ﾍ', 'ヘ'),
    ('ﾎ', 'ホ'),
    ('ﾏ', 'マ'),
    ('ﾐ', 'ミ'),
    ('ﾑ', 'ム'),
    ('ﾒ', 'メ'),
    ('ﾓ', 'モ'),
    ('ﾔ', 'ヤ'),
    ('ﾕ', 'ユ'),
    ('ﾖ', 'ヨ'),
    ('ﾗ', 'ラ'),
    ('ﾘ', 'リ'),
    ('ﾙ', 'ル'),
    ('ﾚ', 'レ'),
    ('ﾛ', 'ロ'),
    ('ﾜ', 'ワ'),
    ('ﾝ', 'ン'),
    ('ﾞ', '゛'),
    ('ﾟ', '゜'),
];

/// Half-width base + ﾞ to the precomposed voiced glyph.
const VOICED: &[(char, char)] = &[
    ('ｳ', 'ヴ'),
    ('ｶ', 'ガ'),
    ('ｷ', 'ギ'),
    ('ｸ', 'グ'),
    ('ｹ', 'ゲ'),
    ('ｺ', 'ゴ'),
    ('ｻ', 'ザ'),
    ('ｼ', 'ジ'),
    ('ｽ', 'ズ'),
    ('ｾ', 'ゼ'),
    ('ｿ', 'ゾ'),
    ('ﾀ', 'ダ'),
    ('ﾁ', 'ヂ'),
    ('ﾂ', 'ヅ'),
    ('ﾃ', 'デ'),
    ('ﾄ', 'ド'),
    ('ﾊ', 'バ'),
    ('ﾋ', 'ビ'),
    ('ﾌ', 'ブ'),
    ('ﾍ', 'ベ'),
    ('ﾎ', 'ボ'),
    ('ﾜ', 'ヷ'),
    ('ｦ', 'ヺ'),
];

/// Half-width base + ﾟ to the precomposed semi-voiced glyph.
const SEMI_VOICED: &[(char, char)] = &[
    ('ﾊ', 'パ'),
    ('ﾋ', 'ピ'),
    ('ﾌ', 'プ'),
    ('ﾍ', 'ペ'),
    ('ﾎ', 'ポ'),
];

/// Immutable lookup tables for the form converters.
///
/// Safe to share across threads: nothing is mutated after construction.
pub struct Tables {
    half_to_wide: Vec<(char, char)>,
    wide_to_half: Vec<(char, char)>,
    voiced: Vec<(char, char)>,
    semi_voiced: Vec<(char, char)>,
    voiced_by_glyph: Vec<(char, char)>,
    semi_voiced_by_glyph: Vec<(char, char)>,
}

impl Tables {
    /// Build the lookup vectors from the literal entries.
    pub fn new() -> Self {
        let tables = Tables {
            half_to_wide: sorted(HALF_TO_WIDE),
            wide_to_half: inverted(HALF_TO_WIDE),
            voiced: sorted(VOICED),
            semi_voiced: sorted(SEMI_VOICED),
            voiced_by_glyph: inverted(VOICED),
            semi_voiced_by_glyph: inverted(SEMI_VOICED),
        };
        tables.check_invariants();
        tables
    }

    /// Process-wide shared instance, built on first use.
    pub fn shared() -> &'static Tables {
        static INSTANCE: OnceLock<Tables> = OnceLock::new();
        INSTANCE.get_or_init(Tables::new)
    }

    pub(crate) fn half_to_wide(&self, c: char) -> Option<char> {
        lookup(&self.half_to_wide, c)
    }

    pub(crate) fn wide_to_half(&self, c: char) -> Option<char> {
        lookup(&self.wide_to_half, c)
    }

    pub(crate) fn voiced(&self, base: char) -> Option<char> {
        lookup(&self.voiced, base)
    }

    pub(crate) fn semi_voiced(&self, base: char) -> Option<char> {
        lookup(&self.semi_voiced, base)
    }

    pub(crate) fn voiced_base(&self, glyph: char) -> Option<char> {
        lookup(&self.voiced_by_glyph, glyph)
    }

    pub(crate) fn semi_voiced_base(&self, glyph: char) -> Option<char> {
        lookup(&self.semi_voiced_by_glyph, glyph)
    }

    /// Every half-width source must be single-cell and every wide dual
    /// double-cell; the voicing entries must invert cleanly.
    fn check_invariants(&self) {
        for &(half, wide) in &self.half_to_wide {
            debug_assert_eq!(half.width(), Some(1), "half form {half:?} must be narrow");
            debug_assert_eq!(wide.width(), Some(2), "wide dual {wide:?} must be wide");
        }
        for &(base, glyph) in self.voiced.iter().chain(&self.semi_voiced) {
            debug_assert_eq!(base.width(), Some(1), "mark base {base:?} must be narrow");
            debug_assert_eq!(glyph.width(), Some(2), "glyph {glyph:?} must be wide");
        }
        debug_assert_eq!(self.half_to_wide.len(), self.wide_to_half.len());
        debug_assert_eq!(self.voiced.len(), self.voiced_by_glyph.len());
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted(entries: &[(char, char)]) -> Vec<(char, char)> {
    let mut v = entries.to_vec();
    v.sort_by_key(|&(k, _)| k);
    v
}

fn inverted(entries: &[(char, char)]) -> Vec<(char, char)> {
    let mut v: Vec<(char, char)> = entries.iter().map(|&(k, t)| (t, k)).collect();
    v.sort_by_key(|&(k, _)| k);
    v
}

fn lookup(table: &[(char, char)], c: char) -> Option<char> {
    table
        .binary_search_by_key(&c, |&(k, _)| k)
        .ok()
        .map(|i| table[i].1)
}
