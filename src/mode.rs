//! Conversion request flags.
//!
//! Mirrors the classic `StrConv` flag set: one optional width direction
//! plus one optional syllabary direction, combinable (e.g. wide+katakana).
//! Contradictory combinations are rejected at construction so the
//! converters themselves never see an invalid mode.

use bitflags::bitflags;

bitflags! {
    /// Raw request flags, before validation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ConvFlags: u8 {
        const WIDE = 0b0001;
        const NARROW = 0b0010;
        const KATAKANA = 0b0100;
        const HIRAGANA = 0b1000;
    }
}

/// Width direction of a validated mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Wide,
    Narrow,
}

/// Syllabary direction of a validated mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kana {
    Katakana,
    Hiragana,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("wide and narrow are mutually exclusive")]
    ConflictingWidth,
    #[error("katakana and hiragana are mutually exclusive")]
    ConflictingKana,
}

/// A validated conversion mode: at most one width flag and at most one
/// kana flag. The empty mode is valid and converts nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvMode {
    width: Option<Width>,
    kana: Option<Kana>,
}

impl ConvMode {
    pub const WIDE: ConvMode = ConvMode {
        width: Some(Width::Wide),
        kana: None,
    };
    pub const NARROW: ConvMode = ConvMode {
        width: Some(Width::Narrow),
        kana: None,
    };
    pub const KATAKANA: ConvMode = ConvMode {
        width: None,
        kana: Some(Kana::Katakana),
    };
    pub const HIRAGANA: ConvMode = ConvMode {
        width: None,
        kana: Some(Kana::Hiragana),
    };
    pub const WIDE_KATAKANA: ConvMode = ConvMode {
        width: Some(Width::Wide),
        kana: Some(Kana::Katakana),
    };
    pub const WIDE_HIRAGANA: ConvMode = ConvMode {
        width: Some(Width::Wide),
        kana: Some(Kana::Hiragana),
    };
    pub const NARROW_KATAKANA: ConvMode = ConvMode {
        width: Some(Width::Narrow),
        kana: Some(Kana::Katakana),
    };
    pub const NARROW_HIRAGANA: ConvMode = ConvMode {
        width: Some(Width::Narrow),
        kana: Some(Kana::Hiragana),
    };

    /// Validate a raw flag set into a mode.
    pub fn from_flags(flags: ConvFlags) -> Result<Self, ModeError> {
        if flags.contains(ConvFlags::WIDE | ConvFlags::NARROW) {
            return Err(ModeError::ConflictingWidth);
        }
        if flags.contains(ConvFlags::KATAKANA | ConvFlags::HIRAGANA) {
            return Err(ModeError::ConflictingKana);
        }
        let width = if flags.contains(ConvFlags::WIDE) {
            Some(Width::Wide)
        } else if flags.contains(ConvFlags::NARROW) {
            Some(Width::Narrow)
        } else {
            None
        };
        let kana = if flags.contains(ConvFlags::KATAKANA) {
            Some(Kana::Katakana)
        } else if flags.contains(ConvFlags::HIRAGANA) {
            Some(Kana::Hiragana)
        } else {
            None
        };
        Ok(ConvMode { width, kana })
    }

    pub fn width(&self) -> Option<Width> {
        self.width
    }

    pub fn kana(&self) -> Option<Kana> {
        self.kana
    }

    pub fn is_wide(&self) -> bool {
        self.width == Some(Width::Wide)
    }

    pub fn is_narrow(&self) -> bool {
        self.width == Some(Width::Narrow)
    }

    /// Replacement marker for this mode's target width, if it has one:
    /// full-width ？ for wide targets, ASCII ? for narrow targets.
    pub fn fallback(&self) -> Option<char> {
        match self.width {
            Some(Width::Wide) => Some('？'),
            Some(Width::Narrow) => Some('?'),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_combinations() {
        let m = ConvMode::from_flags(ConvFlags::WIDE | ConvFlags::KATAKANA).unwrap();
        assert_eq!(m, ConvMode::WIDE_KATAKANA);
        assert_eq!(m.width(), Some(Width::Wide));
        assert_eq!(m.kana(), Some(Kana::Katakana));

        let m = ConvMode::from_flags(ConvFlags::NARROW | ConvFlags::HIRAGANA).unwrap();
        assert_eq!(m, ConvMode::NARROW_HIRAGANA);

        let m = ConvMode::from_flags(ConvFlags::HIRAGANA).unwrap();
        assert_eq!(m, ConvMode::HIRAGANA);
        assert_eq!(m.width(), None);
    }

    #[test]
    fn empty_mode_is_valid() {
        let m = ConvMode::from_flags(ConvFlags::empty()).unwrap();
        assert_eq!(m.width(), None);
        assert_eq!(m.kana(), None);
        assert_eq!(m.fallback(), None);
    }

    #[test]
    fn conflicting_flags_rejected() {
        assert_eq!(
            ConvMode::from_flags(ConvFlags::WIDE | ConvFlags::NARROW),
            Err(ModeError::ConflictingWidth)
        );
        assert_eq!(
            ConvMode::from_flags(ConvFlags::KATAKANA | ConvFlags::HIRAGANA),
            Err(ModeError::ConflictingKana)
        );
        assert_eq!(
            ConvMode::from_flags(ConvFlags::all()),
            Err(ModeError::ConflictingWidth)
        );
    }

    #[test]
    fn fallback_follows_target_width() {
        assert_eq!(ConvMode::WIDE.fallback(), Some('？'));
        assert_eq!(ConvMode::WIDE_HIRAGANA.fallback(), Some('？'));
        assert_eq!(ConvMode::NARROW.fallback(), Some('?'));
        assert_eq!(ConvMode::NARROW_KATAKANA.fallback(), Some('?'));
        assert_eq!(ConvMode::KATAKANA.fallback(), None);
    }
}
