// src/core/types.rs
use crate::error::{Error, FormatError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Index of a word in a language's word table. 0 is reserved and means "unused".
pub type WordIndex = u8;

/// Every language ships exactly this many word slots, index 0 included.
pub const WORD_COUNT: usize = 54;
/// Rows of the character square.
pub const GRID_ROWS: u8 = 9;
/// Columns of the character square.
pub const GRID_COLS: u8 = 12;
/// Bytes reserved for one text field, terminator included.
pub const TEXT_FIELD_LEN: usize = 16;
/// Longest text that fits in a field.
pub const MAX_TEXT_LEN: usize = TEXT_FIELD_LEN - 1;

/// A short UTF-8 string stored inline in a fixed 16-byte buffer.
///
/// Mirrors the on-disk field, so encoding never has to truncate.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct WordText {
    bytes: [u8; TEXT_FIELD_LEN],
    len: u8,
}

impl WordText {
    pub const EMPTY: Self = Self {
        bytes: [0u8; TEXT_FIELD_LEN],
        len: 0,
    };

    /// Builds a text at compile time. Panics (during const evaluation) if
    /// `text` does not fit.
    pub const fn new(text: &str) -> Self {
        let src = text.as_bytes();
        assert!(src.len() <= MAX_TEXT_LEN, "word text longer than 15 bytes");
        let mut bytes = [0u8; TEXT_FIELD_LEN];
        let mut i = 0;
        while i < src.len() {
            assert!(src[i] != 0, "word text contains a NUL byte");
            bytes[i] = src[i];
            i += 1;
        }
        Self {
            bytes,
            len: src.len() as u8,
        }
    }

    /// Reads a zero-terminated field as written by the packer.
    pub(crate) fn from_field(field: &[u8; TEXT_FIELD_LEN]) -> Result<Self, &'static str> {
        let len = field
            .iter()
            .position(|&b| b == 0)
            .ok_or("missing terminator")?;
        std::str::from_utf8(&field[..len]).map_err(|_| "not valid UTF-8")?;
        // Anything after the terminator is padding; normalise it to zeros.
        let mut bytes = [0u8; TEXT_FIELD_LEN];
        bytes[..len].copy_from_slice(&field[..len]);
        Ok(Self {
            bytes,
            len: len as u8,
        })
    }

    /// The zero-padded field representation.
    pub fn as_field(&self) -> &[u8; TEXT_FIELD_LEN] {
        &self.bytes
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Width in character cells.
    pub fn width(&self) -> usize {
        self.as_str().chars().count()
    }
}

impl TryFrom<&str> for WordText {
    type Error = FormatError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        if text.len() > MAX_TEXT_LEN {
            return Err(FormatError::TextTooLong { len: text.len() });
        }
        // A NUL would terminate the field on disk.
        if let Some(offset) = text.bytes().position(|b| b == 0) {
            return Err(FormatError::InteriorNul { offset });
        }
        let mut bytes = [0u8; TEXT_FIELD_LEN];
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        Ok(Self {
            bytes,
            len: text.len() as u8,
        })
    }
}

impl fmt::Debug for WordText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for WordText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WordText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WordText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        WordText::try_from(text.as_str()).map_err(serde::de::Error::custom)
    }
}

/// One displayable token of the word square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Word {
    /// Row of the word's first letter.
    pub row: u8,
    /// Column of the word's first letter.
    pub col: u8,
    /// Shown when the word is lit.
    pub text_on: WordText,
    /// Shown when the word is dark. May be empty when another word's
    /// off-text already covers these cells.
    pub text_off: WordText,
}

impl Word {
    pub const EMPTY: Self = Self {
        row: 0,
        col: 0,
        text_on: WordText::EMPTY,
        text_off: WordText::EMPTY,
    };

    pub const fn new(row: u8, col: u8, text_on: &str, text_off: &str) -> Self {
        Self {
            row,
            col,
            text_on: WordText::new(text_on),
            text_off: WordText::new(text_off),
        }
    }

    /// An unused slot: nothing to draw in either state.
    pub fn is_blank(&self) -> bool {
        self.text_on.is_empty() && self.text_off.is_empty()
    }

    /// Cells covered by the word.
    pub fn width(&self) -> usize {
        self.text_on.width().max(self.text_off.width())
    }

    /// Text to draw for the given state. With `all_caps` set, dark words use
    /// their lit spelling so the whole square reads in capitals.
    pub fn display_text(&self, on: bool, all_caps: bool) -> &str {
        if on || (all_caps && !self.text_off.is_empty()) {
            self.text_on.as_str()
        } else {
            self.text_off.as_str()
        }
    }
}

/// Languages compiled into the watchface. The discriminants are the ids used
/// by settings and sync messages and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum LanguageId {
    #[default]
    EnUs = 0,
    DaDk = 1,
    DeDe = 2,
    EsEs = 3,
    FrFr = 4,
    ItIt = 5,
    NlNl = 6,
    SvSe = 7,
    NlBe = 8,
    PtPt = 9,
    NbNo = 10,
}

impl LanguageId {
    pub const ALL: [LanguageId; 11] = [
        LanguageId::EnUs,
        LanguageId::DaDk,
        LanguageId::DeDe,
        LanguageId::EsEs,
        LanguageId::FrFr,
        LanguageId::ItIt,
        LanguageId::NlNl,
        LanguageId::SvSe,
        LanguageId::NlBe,
        LanguageId::PtPt,
        LanguageId::NbNo,
    ];

    pub fn from_u8(id: u8) -> Result<Self, Error> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or_else(|| Error::UnknownLanguage(id.to_string()))
    }

    /// Accepts a locale code (`de_DE`, `de-de`) or a numeric id.
    pub fn from_code(code: &str) -> Result<Self, Error> {
        let wanted = code.trim().replace('-', "_");
        if let Ok(id) = wanted.parse::<u8>() {
            return Self::from_u8(id);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::UnknownLanguage(code.to_string()))
    }

    pub fn code(self) -> &'static str {
        match self {
            LanguageId::EnUs => "en_US",
            LanguageId::DaDk => "da_DK",
            LanguageId::DeDe => "de_DE",
            LanguageId::EsEs => "es_ES",
            LanguageId::FrFr => "fr_FR",
            LanguageId::ItIt => "it_IT",
            LanguageId::NlNl => "nl_NL",
            LanguageId::SvSe => "sv_SE",
            LanguageId::NlBe => "nl_BE",
            LanguageId::PtPt => "pt_PT",
            LanguageId::NbNo => "nb_NO",
        }
    }
}

impl From<LanguageId> for u8 {
    fn from(id: LanguageId) -> u8 {
        id as u8
    }
}

impl TryFrom<u8> for LanguageId {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_u8(id)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_text_keeps_utf8_and_reports_cell_width() {
        let text = WordText::new("DETÄRENPBBLE");
        assert_eq!(text.as_str(), "DETÄRENPBBLE");
        assert_eq!(text.width(), 12);
        assert_eq!(text.as_field()[13], 0);
    }

    #[test]
    fn word_text_rejects_overlong_input() {
        let err = WordText::try_from("SIXTEEN_BYTES_XX").unwrap_err();
        assert_eq!(err, FormatError::TextTooLong { len: 16 });
    }

    #[test]
    fn word_text_rejects_interior_nul() {
        let err = WordText::try_from("I\0T").unwrap_err();
        assert_eq!(err, FormatError::InteriorNul { offset: 1 });

        let json = r#"{"row": 0, "col": 0, "text_on": "I\u0000T", "text_off": "it"}"#;
        assert!(serde_json::from_str::<Word>(json).is_err());
    }

    #[test]
    fn field_without_terminator_is_rejected() {
        let field = [b'A'; TEXT_FIELD_LEN];
        assert!(WordText::from_field(&field).is_err());
    }

    #[test]
    fn all_caps_only_affects_dark_words_with_off_text() {
        let word = Word::new(0, 0, "IT", "it");
        assert_eq!(word.display_text(true, false), "IT");
        assert_eq!(word.display_text(false, false), "it");
        assert_eq!(word.display_text(false, true), "IT");

        let hidden = Word::new(5, 6, "HEURE", "");
        assert_eq!(hidden.display_text(false, true), "");
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in LanguageId::ALL {
            assert_eq!(LanguageId::from_code(lang.code()).unwrap(), lang);
            assert_eq!(LanguageId::from_u8(lang as u8).unwrap(), lang);
        }
        assert_eq!(LanguageId::from_code("de-de").unwrap(), LanguageId::DeDe);
        assert_eq!(LanguageId::from_code("9").unwrap(), LanguageId::PtPt);
        assert!(matches!(
            LanguageId::from_u8(11),
            Err(Error::UnknownLanguage(_))
        ));
    }
}
