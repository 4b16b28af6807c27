//! Character form conversion pipeline.
//!
//! Composes the width, syllabary, and voicing-mark converters according to
//! the request mode. Wide-flagged modes combine half-width base+mark pairs
//! and widen before the syllabary swap; narrow-flagged modes swap first
//! and narrow (possibly decomposing a voiced glyph) last. Conversion is
//! total: every input yields a defined output, with the replacement marker
//! standing in for half-width and full-width forms outside the Japanese
//! repertoire.

pub mod kana;
mod table;
mod voicing;
mod width;


use tracing::{debug, debug_span};

use crate::mode::{ConvMode, Kana, Width};
use crate::unicode::{classify, CharClass};

pub use table::Tables;
pub use voicing::{combine, decompose, SEMI_VOICED_MARK, VOICED_MARK};
pub use width::Narrowed;

/// Outcome of converting a single character (no mark lookahead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converted {
    /// The character does not participate in the requested mode.
    Unchanged(char),
    /// A converted single character.
    Char(char),
    /// A narrowed base plus trailing voicing mark.
    Pair(char, char),
    /// The replacement marker for the mode's target width.
    Fallback(char),
}

impl Converted {
    /// Append the outcome to `out`.
    pub fn push_to(&self, out: &mut String) {
        match *self {
            Converted::Unchanged(c) | Converted::Char(c) | Converted::Fallback(c) => out.push(c),
            Converted::Pair(base, mark) => {
                out.push(base);
                out.push(mark);
            }
        }
    }
}

/// Character form converter over an immutable table set.
pub struct Converter<'t> {
    tables: &'t Tables,
}

impl Converter<'static> {
    /// Converter over the process-wide shared tables.
    pub fn new() -> Self {
        Converter {
            tables: Tables::shared(),
        }
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Converter<'t> {
    /// Converter over an explicitly supplied table set.
    pub fn with_tables(tables: &'t Tables) -> Self {
        Converter { tables }
    }

    /// Convert a string. Under a wide-flagged mode, a half-width base
    /// followed by ﾞ or ﾟ collapses into the precomposed glyph before
    /// anything else; a pair that does not combine is converted as two
    /// independent characters.
    pub fn convert(&self, input: &str, mode: ConvMode) -> String {
        let _span = debug_span!("convert", len = input.len()).entered();
        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            if mode.is_wide() {
                if let Some(&mark) = chars.peek() {
                    if let Some(glyph) = voicing::combine(self.tables, c, mark) {
                        chars.next();
                        out.push(kana_swap(glyph, mode.kana()));
                        continue;
                    }
                }
            }
            self.convert_char(c, mode).push_to(&mut out);
        }
        debug!(out_len = out.len());
        out
    }

    /// Convert one character with no lookahead.
    pub fn convert_char(&self, c: char, mode: ConvMode) -> Converted {
        match mode.width() {
            Some(Width::Wide) => self.widen(c, mode.kana()),
            Some(Width::Narrow) => self.narrow(c, mode.kana()),
            None => match kana_swap(c, mode.kana()) {
                swapped if swapped != c => Converted::Char(swapped),
                _ => Converted::Unchanged(c),
            },
        }
    }

    fn widen(&self, c: char, kana: Option<Kana>) -> Converted {
        if let Some(wide) = width::to_wide(self.tables, c) {
            return Converted::Char(kana_swap(wide, kana));
        }
        if classify(c) == CharClass::HalfForm {
            return Converted::Fallback('？');
        }
        let swapped = kana_swap(c, kana);
        if swapped != c {
            Converted::Char(swapped)
        } else {
            Converted::Unchanged(c)
        }
    }

    fn narrow(&self, c: char, kana: Option<Kana>) -> Converted {
        let swapped = kana_swap(c, kana);
        if let Some(narrowed) = width::to_narrow(self.tables, swapped) {
            return match narrowed {
                Narrowed::Single(half) => Converted::Char(half),
                Narrowed::WithMark(base, mark) => Converted::Pair(base, mark),
            };
        }
        if classify(swapped) == CharClass::WideSign {
            return Converted::Fallback('?');
        }
        if swapped != c {
            Converted::Char(swapped)
        } else {
            Converted::Unchanged(c)
        }
    }
}

fn kana_swap(c: char, kana: Option<Kana>) -> char {
    match kana {
        Some(Kana::Katakana) => kana::to_katakana(c),
        Some(Kana::Hiragana) => kana::to_hiragana(c),
        None => c,
    }
}

/// Convert a string with the shared tables.
pub fn convert(input: &str, mode: ConvMode) -> String {
    Converter::new().convert(input, mode)
}
