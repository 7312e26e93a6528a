// src/languages/da_dk.rs
//! Danish. Reads "klokken er fem minutter i halv tre" and friends; the
//! minute count is always followed by MINUTTER except for the quarters.
use super::{next_hour, this_hour, DEFAULT_FILLER_START};
use crate::core::intervals::IntervalTable;
use crate::core::pack::LanguagePack;
use crate::core::types::{LanguageId, Word, WordIndex};
use crate::core::word_table::WordTable;

pub const KLOKKEN: WordIndex = 13;
pub const ER: WordIndex = 14;
pub const FEM: WordIndex = 15;
pub const TI: WordIndex = 16;
pub const KVART: WordIndex = 17;
pub const TYVE: WordIndex = 18;
pub const HALV: WordIndex = 19;
pub const OVER: WordIndex = 20;
pub const I: WordIndex = 21;
pub const MINUTTER: WordIndex = 22;

const WORDS: &[(WordIndex, Word)] = &[
    (1, Word::new(5, 0, "ET", "et")),
    (2, Word::new(8, 0, "TO", "to")),
    (3, Word::new(6, 0, "TRE", "tre")),
    (4, Word::new(7, 1, "FIRE", "fire")),
    (5, Word::new(6, 9, "FEM", "fem")),
    (6, Word::new(8, 3, "SEKS", "seks")),
    (7, Word::new(7, 9, "SYV", "syv")),
    (8, Word::new(8, 8, "OTTE", "otte")),
    (9, Word::new(7, 6, "NI", "ni")),
    (10, Word::new(5, 10, "TI", "ti")),
    (11, Word::new(5, 3, "ELLEVE", "elleve")),
    (12, Word::new(6, 3, "TOLV", "tolv")),
    (KLOKKEN, Word::new(0, 0, "KLOKKEN", "klokken")),
    (ER, Word::new(0, 8, "ER", "er")),
    (FEM, Word::new(2, 0, "FEM", "fem")),
    (TI, Word::new(1, 5, "TI", "ti")),
    (KVART, Word::new(1, 7, "KVART", "kvart")),
    (TYVE, Word::new(1, 0, "TYVE", "tyve")),
    (HALV, Word::new(4, 7, "HALV", "halv")),
    (OVER, Word::new(4, 0, "OVER", "over")),
    (I, Word::new(4, 5, "I", "i")),
    (MINUTTER, Word::new(2, 4, "MINUTTER", "minutter")),
];

const FILLER: &[Word] = &[
    Word::new(0, 7, "P", "p"),
    Word::new(0, 10, "YT", "yt"),
    Word::new(1, 4, "C", "c"),
    Word::new(2, 3, "Z", "z"),
    Word::new(3, 0, "DETERENPBBLE", "deterenpbble"),
    Word::new(4, 4, "G", "g"),
    Word::new(4, 6, "P", "p"),
    Word::new(4, 11, "Z", "z"),
    Word::new(5, 2, "J", "j"),
    Word::new(5, 9, "Ø", "ø"),
    Word::new(6, 7, "B", "b"),
    Word::new(6, 8, "U", "u"),
    Word::new(7, 0, "S", "s"),
    Word::new(7, 5, "C", "c"),
    Word::new(7, 8, "Å", "å"),
    Word::new(8, 2, "L", "l"),
    Word::new(8, 7, "Y", "y"),
];

pub const INTERVALS: IntervalTable = IntervalTable::new([
    this_hour(&[KLOKKEN, ER]),
    this_hour(&[]),
    this_hour(&[FEM, MINUTTER, OVER]),
    this_hour(&[TI, MINUTTER, OVER]),
    this_hour(&[KVART, OVER]),
    this_hour(&[TYVE, MINUTTER, OVER]),
    next_hour(&[FEM, MINUTTER, I, HALV]),
    next_hour(&[HALV]),
    next_hour(&[FEM, MINUTTER, OVER, HALV]),
    next_hour(&[TYVE, MINUTTER, I]),
    next_hour(&[KVART, I]),
    next_hour(&[TI, MINUTTER, I]),
    next_hour(&[FEM, MINUTTER, I]),
]);

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::DaDk,
        WordTable::from_layout(WORDS, DEFAULT_FILLER_START, FILLER),
        INTERVALS,
    )
}
