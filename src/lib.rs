//! Character form conversion for Japanese text.
//!
//! Converts individual characters between half-width and full-width forms
//! and between the katakana and hiragana syllabaries, including the
//! recombination of half-width voicing marks (ﾞ ﾟ) into precomposed
//! glyphs. The flag set mirrors the classic VB `StrConv` width and kana
//! conversions.
//!
//! Conversion is total: characters with no dual in the requested
//! direction pass through unchanged, and half-width or full-width forms
//! outside the Japanese repertoire become the replacement marker (？ for
//! wide targets, ? for narrow targets). There is no error path.

pub mod convert;
pub mod mode;
pub mod report;
pub mod unicode;

pub use convert::{convert, Converted, Converter, Tables};
pub use mode::{ConvFlags, ConvMode, ModeError};
