// src/languages/fr_fr.rs
//! French: "il est une heure", "il est deux heures".
use super::{next_hour, this_hour, DEFAULT_FILLER_START};
use crate::core::intervals::IntervalTable;
use crate::core::overlay::{BucketMatch, ExceptionRule, HourMatch};
use crate::core::pack::LanguagePack;
use crate::core::types::{LanguageId, Word, WordIndex};
use crate::core::word_table::WordTable;

pub const IL: WordIndex = 13;
pub const EST: WordIndex = 14;
pub const CINQ: WordIndex = 15;
pub const DIX: WordIndex = 16;
pub const QUART: WordIndex = 17;
pub const VINGT: WordIndex = 18;
pub const TRAIT: WordIndex = 19;
pub const DEMIE: WordIndex = 20;
pub const ET: WordIndex = 21;
pub const LE: WordIndex = 22;
pub const MOINS: WordIndex = 23;
pub const HEURE: WordIndex = 24;
pub const HEURES: WordIndex = 25;

const WORDS: &[(WordIndex, Word)] = &[
    (1, Word::new(4, 5, "UNE", "une")),
    (2, Word::new(3, 6, "DEUX", "deux")),
    (3, Word::new(0, 7, "TROIS", "trois")),
    (4, Word::new(2, 0, "QUATRE", "quatre")),
    (5, Word::new(5, 0, "CINQ", "cinq")),
    (6, Word::new(4, 9, "SIX", "six")),
    (7, Word::new(1, 4, "SEPT", "sept")),
    (8, Word::new(3, 1, "HUIT", "huit")),
    (9, Word::new(1, 0, "NEUF", "neuf")),
    (10, Word::new(4, 1, "DIX", "dix")),
    (11, Word::new(1, 8, "ONZE", "onze")),
    (12, Word::new(2, 7, "DOUZE", "douze")),
    (IL, Word::new(0, 0, "IL", "il")),
    (EST, Word::new(0, 3, "EST", "est")),
    (CINQ, Word::new(7, 8, "CINQ", "cinq")),
    (DIX, Word::new(6, 8, "DIX", "dix")),
    (QUART, Word::new(8, 7, "QUART", "quart")),
    (VINGT, Word::new(7, 2, "VINGT", "vingt")),
    (TRAIT, Word::new(7, 7, "-", "-")),
    (DEMIE, Word::new(8, 2, "DEMIE", "demie")),
    (ET, Word::new(7, 0, "ET", "et")),
    (LE, Word::new(8, 0, "LE", "le")),
    (MOINS, Word::new(6, 2, "MOINS", "moins")),
    // HEURES draws the dark text for both
    (HEURE, Word::new(5, 6, "HEURE", "")),
    (HEURES, Word::new(5, 6, "HEURES", "     s")),
];

const FILLER: &[Word] = &[
    Word::new(0, 2, "X", "x"),
    Word::new(0, 6, "Ç", "ç"),
    Word::new(2, 6, "F", "f"),
    Word::new(3, 0, "K", "k"),
    Word::new(3, 5, "O", "o"),
    Word::new(3, 10, "A", "a"),
    Word::new(3, 11, "P", "p"),
    Word::new(4, 0, "M", "m"),
    Word::new(4, 4, "V", "v"),
    Word::new(4, 8, "T", "t"),
    Word::new(5, 4, "O", "o"),
    Word::new(5, 5, "F", "f"),
    Word::new(6, 0, "G", "g"),
    Word::new(6, 1, "K", "k"),
    Word::new(6, 7, "W", "w"),
    Word::new(6, 11, "L", "l"),
];

pub const INTERVALS: IntervalTable = IntervalTable::new([
    this_hour(&[IL, EST]),
    this_hour(&[]),
    this_hour(&[CINQ]),
    this_hour(&[DIX]),
    this_hour(&[ET, QUART]),
    this_hour(&[VINGT]),
    this_hour(&[VINGT, TRAIT, CINQ]),
    this_hour(&[ET, DEMIE]),
    next_hour(&[MOINS, VINGT, TRAIT, CINQ]),
    next_hour(&[MOINS, VINGT]),
    next_hour(&[MOINS, LE, QUART]),
    next_hour(&[MOINS, DIX]),
    next_hour(&[MOINS, CINQ]),
]);

pub const RULES: &[ExceptionRule] = &[
    ExceptionRule::when(HourMatch::Is(1), BucketMatch::Any).light(&[HEURE]),
    ExceptionRule::when(HourMatch::IsNot(1), BucketMatch::Any).light(&[HEURES]),
];

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::FrFr,
        WordTable::from_layout(WORDS, DEFAULT_FILLER_START, FILLER),
        INTERVALS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::PhraseResolver;

    #[test]
    fn exactly_one_of_heure_and_heures_is_lit() {
        let resolver = PhraseResolver::default();
        for hour in 0..24 {
            for minute in (0..60).step_by(5) {
                let active = resolver.resolve(&pack(), hour, minute).active;
                assert!(
                    active.contains(HEURE) ^ active.contains(HEURES),
                    "{hour}:{minute:02}"
                );
            }
        }
    }

    #[test]
    fn quarter_to_one_is_singular() {
        // "il est une heure moins le quart"
        let resolved = PhraseResolver::default().resolve(&pack(), 0, 45);
        assert!(resolved.active.contains(HEURE));
        assert!(resolved.active.contains(LE));
        assert!(resolved.active.contains(1));
    }
}
