// src/languages/nl_be.rs
//! Belgian Dutch. Same hours as nl_NL, but the twenties are counted from the
//! hour ("twintig na") and "na" replaces "over".
use super::{next_hour, this_hour, DEFAULT_FILLER_START};
use crate::core::intervals::IntervalTable;
use crate::core::pack::LanguagePack;
use crate::core::types::{LanguageId, Word, WordIndex};
use crate::core::word_table::WordTable;

pub const HET: WordIndex = 13;
pub const IS: WordIndex = 14;
pub const VIJF: WordIndex = 15;
pub const TIEN: WordIndex = 16;
pub const KWART: WordIndex = 17;
pub const TWINTIG: WordIndex = 18;
pub const HALF: WordIndex = 19;
pub const NA: WordIndex = 20;
pub const VOOR: WordIndex = 21;
pub const UUR: WordIndex = 22;

const WORDS: &[(WordIndex, Word)] = &[
    (1, Word::new(3, 9, "ÉÉN", "één")),
    (2, Word::new(6, 1, "TWEE", "twee")),
    (3, Word::new(4, 8, "DRIE", "drie")),
    (4, Word::new(6, 7, "VIER", "vier")),
    (5, Word::new(5, 7, "VIJF", "vijf")),
    (6, Word::new(3, 5, "ZES", "zes")),
    (7, Word::new(5, 0, "ZEVEN", "zeven")),
    (8, Word::new(8, 0, "ACHT", "acht")),
    (9, Word::new(7, 5, "NEGEN", "negen")),
    (10, Word::new(8, 4, "TIEN", "tien")),
    (11, Word::new(7, 0, "ELF", "elf")),
    (12, Word::new(4, 1, "TWAALF", "twaalf")),
    (HET, Word::new(0, 0, "HET", "het")),
    (IS, Word::new(0, 4, "IS", "is")),
    (VIJF, Word::new(0, 7, "VIJF", "vijf")),
    (TIEN, Word::new(1, 8, "TIEN", "tien")),
    (KWART, Word::new(2, 0, "KWART", "kwart")),
    (TWINTIG, Word::new(1, 0, "TWINTIG", "twintig")),
    (HALF, Word::new(3, 0, "HALF", "half")),
    (NA, Word::new(2, 6, "NA", "na")),
    (VOOR, Word::new(2, 8, "VOOR", "voor")),
    (UUR, Word::new(8, 9, "UUR", "uur")),
];

const FILLER: &[Word] = &[
    Word::new(0, 3, "R", "r"),
    Word::new(0, 6, "J", "j"),
    Word::new(0, 11, "Z", "z"),
    Word::new(1, 7, "L", "l"),
    Word::new(2, 5, "X", "x"),
    Word::new(3, 4, "P", "p"),
    Word::new(3, 8, "U", "u"),
    Word::new(4, 0, "R", "r"),
    Word::new(4, 7, "M", "m"),
    Word::new(5, 5, "O", "o"),
    Word::new(5, 6, "G", "g"),
    Word::new(5, 11, "X", "x"),
    Word::new(6, 0, "C", "c"),
    Word::new(6, 5, "Q", "q"),
    Word::new(6, 6, "B", "b"),
    Word::new(6, 11, "W", "w"),
    Word::new(7, 3, "J", "j"),
    Word::new(7, 4, "U", "u"),
    Word::new(7, 10, "K", "k"),
    Word::new(7, 11, "D", "d"),
    Word::new(8, 8, "O", "o"),
];

pub const INTERVALS: IntervalTable = IntervalTable::new([
    this_hour(&[HET, IS]),
    this_hour(&[UUR]),
    this_hour(&[VIJF, NA]),
    this_hour(&[TIEN, NA]),
    this_hour(&[KWART, NA]),
    this_hour(&[TWINTIG, NA]),
    next_hour(&[VIJF, VOOR, HALF]),
    next_hour(&[HALF]),
    next_hour(&[VIJF, NA, HALF]),
    next_hour(&[TWINTIG, VOOR]),
    next_hour(&[KWART, VOOR]),
    next_hour(&[TIEN, VOOR]),
    next_hour(&[VIJF, VOOR]),
]);

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::NlBe,
        WordTable::from_layout(WORDS, DEFAULT_FILLER_START, FILLER),
        INTERVALS,
    )
}
