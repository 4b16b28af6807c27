//! Full-range divergence scanning.
//!
//! Reimplements the original brute-force verification harness as a library
//! collaborator: enumerate every 16-bit character, convert it under one
//! mode, and collect everything that changed. The "interesting set" filter
//! suppresses the expected mass fallback of foreign characters; it lives
//! here, not in the engine, which falls back unconditionally.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::convert::Converter;
use crate::mode::ConvMode;

/// One changed character under a scanned mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divergence {
    pub before: char,
    pub after: String,
}

impl Divergence {
    /// `(<decimal>-<hex>) <char> > <char> (<decimal>-<hex>)`, the line
    /// format of the original reports. Multi-character results print
    /// without the trailing code pair.
    pub fn line(&self) -> String {
        let before = self.before as u32;
        let mut after_chars = self.after.chars();
        match (after_chars.next(), after_chars.next()) {
            (Some(a), None) => format!(
                "({:05}-{:04X}) {} > {} ({:05}-{:04X})",
                before, before, self.before, a, a as u32, a as u32
            ),
            _ => format!("({:05}-{:04X}) {} > {}", before, before, self.before, self.after),
        }
    }
}

/// Characters whose divergences are always reported, even when they fall
/// back: ASCII printable, the wide punctuation block (minus 〄), hiragana,
/// the kana marks through ヿ, the fullwidth ASCII duals, and half-width
/// kana.
pub fn interesting(c: char) -> bool {
    matches!(c,
        ' '..='~'
            | '\u{3000}'..='\u{3015}'
            | 'ぁ'..='ゖ'
            | '゛'..='ヿ'
            | '！'..='～'
            | '｡'..='ﾟ'
    ) && c != '〄'
}

/// All 16-bit scalar values, in code point order.
fn bmp() -> impl Iterator<Item = char> {
    (0u32..=0xFFFF).filter_map(char::from_u32)
}

/// Convert every 16-bit character under `mode` and collect the changes,
/// suppressing fallback noise outside the interesting set.
pub fn scan(mode: ConvMode) -> Vec<Divergence> {
    let _span = debug_span!("scan", ?mode).entered();
    let conv = Converter::new();
    let noise = mode.fallback().unwrap_or('?').to_string();
    let mut out = Vec::new();
    for c in bmp() {
        let mut after = String::new();
        conv.convert_char(c, mode).push_to(&mut after);
        if after == c.to_string() {
            continue;
        }
        if interesting(c) || after != noise {
            out.push(Divergence { before: c, after });
        }
    }
    debug!(count = out.len());
    out
}

/// Scan every 16-bit character followed by `mark`, keeping the pairs the
/// combiner collapsed into a single glyph.
pub fn scan_combined(mark: char, mode: ConvMode) -> Vec<Divergence> {
    let _span = debug_span!("scan_combined", ?mode).entered();
    let conv = Converter::new();
    let mut out = Vec::new();
    for c in bmp() {
        let mut input = String::new();
        input.push(c);
        input.push(mark);
        let after = conv.convert(&input, mode);
        if after.chars().count() == 1 {
            out.push(Divergence { before: c, after });
        }
    }
    debug!(count = out.len());
    out
}

/// Write divergences as a UTF-8 line list, one entry per line.
pub fn write_lines(path: &Path, divergences: &[Divergence]) -> io::Result<()> {
    let mut out = String::new();
    for d in divergences {
        out.push_str(&d.line());
        out.push('\n');
    }
    fs::write(path, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{SEMI_VOICED_MARK, VOICED_MARK};

    #[test]
    fn line_format_matches_the_report_layout() {
        let d = Divergence {
            before: 'ｱ',
            after: "ア".to_string(),
        };
        assert_eq!(d.line(), "(65393-FF71) ｱ > ア (12450-30A2)");

        let d = Divergence {
            before: 'ガ',
            after: "ｶﾞ".to_string(),
        };
        assert_eq!(d.line(), "(12460-30AC) ガ > ｶﾞ");
    }

    #[test]
    fn interesting_set_boundaries() {
        assert!(interesting(' '));
        assert!(interesting('~'));
        assert!(interesting('　'));
        assert!(interesting('〕'));
        assert!(!interesting('〄'));
        assert!(interesting('ぁ'));
        assert!(interesting('ヿ'));
        assert!(interesting('！'));
        assert!(interesting('ﾟ'));
        assert!(!interesting('\u{7F}'));
        assert!(!interesting('漢'));
        assert!(!interesting('\u{FFA1}'));
        assert!(!interesting('￥'));
    }

    #[test]
    fn scan_records_real_conversions() {
        let divs = scan(ConvMode::WIDE);
        assert!(divs.contains(&Divergence {
            before: 'a',
            after: "ａ".to_string()
        }));
        assert!(divs.contains(&Divergence {
            before: 'ｶ',
            after: "カ".to_string()
        }));
        // Wide canonical forms do not diverge.
        assert!(!divs.iter().any(|d| d.before == 'Ａ'));
    }

    #[test]
    fn scan_suppresses_fallback_noise_outside_the_interesting_set() {
        let divs = scan(ConvMode::WIDE);
        assert!(!divs.iter().any(|d| ('\u{FFA0}'..='\u{FFDC}').contains(&d.before)));

        let divs = scan(ConvMode::NARROW);
        assert!(!divs.iter().any(|d| ('\u{FFE0}'..='\u{FFE6}').contains(&d.before)));
        // The decomposing glyphs are interesting and stay.
        assert!(divs.contains(&Divergence {
            before: 'ガ',
            after: "ｶﾞ".to_string()
        }));
    }

    #[test]
    fn combined_scan_finds_exactly_the_voiceable_bases() {
        let divs = scan_combined(VOICED_MARK, ConvMode::WIDE_KATAKANA);
        assert_eq!(divs.len(), 23);
        assert!(divs.contains(&Divergence {
            before: 'ﾊ',
            after: "バ".to_string()
        }));

        let divs = scan_combined(SEMI_VOICED_MARK, ConvMode::WIDE_HIRAGANA);
        assert_eq!(divs.len(), 5);
        assert!(divs.contains(&Divergence {
            before: 'ﾊ',
            after: "ぱ".to_string()
        }));
    }

    #[test]
    fn write_lines_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let divs = vec![
            Divergence {
                before: 'ｱ',
                after: "ア".to_string(),
            },
            Divergence {
                before: 'ガ',
                after: "ｶﾞ".to_string(),
            },
        ];
        write_lines(&path, &divs).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "(65393-FF71) ｱ > ア (12450-30A2)");
        assert_eq!(lines[1], "(12460-30AC) ガ > ｶﾞ");
    }

    #[test]
    fn full_range_scan_is_total() {
        // Every width-bearing mode scans the whole range without panicking
        // and never records an unchanged character.
        for mode in [
            ConvMode::WIDE,
            ConvMode::NARROW,
            ConvMode::WIDE_KATAKANA,
            ConvMode::WIDE_HIRAGANA,
            ConvMode::NARROW_KATAKANA,
            ConvMode::NARROW_HIRAGANA,
        ] {
            for d in scan(mode) {
                assert_ne!(d.after, d.before.to_string(), "mode {mode:?}");
            }
        }
    }
}
