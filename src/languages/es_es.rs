// src/languages/es_es.rs
//! Spanish. Nothing is always on: "es la una" and "son las dos" share the
//! top row and the overlay picks the pair that agrees with the hour.
use super::{next_hour, this_hour, DEFAULT_FILLER_START};
use crate::core::intervals::IntervalTable;
use crate::core::overlay::{BucketMatch, ExceptionRule, HourMatch};
use crate::core::pack::LanguagePack;
use crate::core::types::{LanguageId, Word, WordIndex};
use crate::core::word_table::WordTable;

pub const ES: WordIndex = 13;
pub const LA: WordIndex = 14;
pub const SON: WordIndex = 15;
pub const LAS: WordIndex = 16;
pub const CINCO: WordIndex = 17;
pub const DIEZ: WordIndex = 18;
pub const CUARTO: WordIndex = 19;
pub const VEINTE: WordIndex = 20;
pub const VEINTICINCO: WordIndex = 21;
pub const MEDIA: WordIndex = 22;
pub const Y: WordIndex = 23;
pub const MENOS: WordIndex = 24;

const WORDS: &[(WordIndex, Word)] = &[
    (1, Word::new(0, 8, "UNA", "una")),
    (2, Word::new(4, 0, "DOS", "dos")),
    (3, Word::new(1, 0, "TRES", "tres")),
    (4, Word::new(2, 6, "CUATRO", "cuatro")),
    (5, Word::new(3, 5, "CINCO", "cinco")),
    (6, Word::new(2, 1, "SEIS", "seis")),
    (7, Word::new(4, 7, "SIETE", "siete")),
    (8, Word::new(3, 0, "OCHO", "ocho")),
    (9, Word::new(5, 0, "NUEVE", "nueve")),
    (10, Word::new(1, 8, "DIEZ", "diez")),
    (11, Word::new(1, 4, "ONCE", "once")),
    (12, Word::new(4, 3, "DOCE", "doce")),
    // ES and SON overlap at (0, 1), as do LA and LAS; the dark text of
    // the shorter form leaves the shared cells to the longer one.
    (ES, Word::new(0, 0, "ES", "e ")),
    (LA, Word::new(0, 5, "LA", "  ")),
    (SON, Word::new(0, 1, "SON", " on")),
    (LAS, Word::new(0, 5, "LAS", "  s")),
    (CINCO, Word::new(6, 7, "CINCO", "cinco")),
    (DIEZ, Word::new(7, 0, "DIEZ", "diez")),
    (CUARTO, Word::new(8, 0, "CUARTO", "cuarto")),
    (VEINTE, Word::new(7, 5, "VEINTE", "veinte")),
    (VEINTICINCO, Word::new(6, 1, "VEINTICINCO", "veinticinco")),
    (MEDIA, Word::new(8, 7, "MEDIA", "media")),
    (Y, Word::new(5, 11, "Y", "y")),
    (MENOS, Word::new(5, 6, "MENOS", "menos")),
];

const FILLER: &[Word] = &[
    Word::new(0, 4, "Z", "z"),
    Word::new(0, 11, "H", "h"),
    Word::new(2, 0, "X", "x"),
    Word::new(2, 5, "P", "p"),
    Word::new(3, 4, "Ñ", "ñ"),
    Word::new(3, 10, "L", "l"),
    Word::new(3, 11, "X", "x"),
    Word::new(5, 5, "F", "f"),
    Word::new(6, 0, "J", "j"),
    Word::new(7, 4, "Ó", "ó"),
    Word::new(7, 11, "G", "g"),
    Word::new(8, 6, "K", "k"),
];

pub const INTERVALS: IntervalTable = IntervalTable::new([
    this_hour(&[]),
    this_hour(&[]),
    this_hour(&[Y, CINCO]),
    this_hour(&[Y, DIEZ]),
    this_hour(&[Y, CUARTO]),
    this_hour(&[Y, VEINTE]),
    // VEINTICINCO is VEINTI laid over CINCO
    this_hour(&[Y, VEINTICINCO, CINCO]),
    this_hour(&[Y, MEDIA]),
    next_hour(&[MENOS, VEINTICINCO, CINCO]),
    next_hour(&[MENOS, VEINTE]),
    next_hour(&[MENOS, CUARTO]),
    next_hour(&[MENOS, DIEZ]),
    next_hour(&[MENOS, CINCO]),
]);

pub const RULES: &[ExceptionRule] = &[
    ExceptionRule::when(HourMatch::Is(1), BucketMatch::Any).light(&[ES, LA]),
    ExceptionRule::when(HourMatch::IsNot(1), BucketMatch::Any).light(&[SON, LAS]),
];

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::EsEs,
        WordTable::from_layout(WORDS, DEFAULT_FILLER_START, FILLER),
        INTERVALS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::{PhraseResolver, WordSet};

    #[test]
    fn singular_and_plural_articles_follow_the_hour() {
        let resolver = PhraseResolver::default();

        let one = resolver.resolve(&pack(), 1, 10);
        assert_eq!(one.active, WordSet::from_indices([ES, LA, 1, Y, DIEZ]));

        let two = resolver.resolve(&pack(), 14, 0);
        assert_eq!(two.active, WordSet::from_indices([SON, LAS, 2]));
    }

    #[test]
    fn menos_phrases_agree_with_the_next_hour() {
        // 12:50 is "es la una menos diez"
        let resolved = PhraseResolver::default().resolve(&pack(), 12, 50);
        assert_eq!(resolved.display_hour, 1);
        assert!(resolved.active.contains(ES));
        assert!(!resolved.active.contains(SON));
    }
}
