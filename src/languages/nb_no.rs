// src/languages/nb_no.rs
//! Norwegian Bokmål: "klokken er ti på halv fire".
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
pub const TJUE: WordIndex = 18;
pub const HALV: WordIndex = 19;
pub const OVER: WordIndex = 20;
pub const PA: WordIndex = 21;

const WORDS: &[(WordIndex, Word)] = &[
    (1, Word::new(8, 0, "EN", "en")),
    (2, Word::new(5, 0, "TO", "to")),
    (3, Word::new(6, 0, "TRE", "tre")),
    (4, Word::new(7, 1, "FIRE", "fire")),
    (5, Word::new(6, 9, "FEM", "fem")),
    (6, Word::new(8, 3, "SEKS", "seks")),
    (7, Word::new(7, 9, "SJU", "sju")),
    (8, Word::new(8, 8, "ÅTTE", "åtte")),
    (9, Word::new(7, 6, "NI", "ni")),
    (10, Word::new(5, 10, "TI", "ti")),
    (11, Word::new(5, 3, "ELLEVE", "elleve")),
    (12, Word::new(6, 4, "TOLV", "tolv")),
    (KLOKKEN, Word::new(0, 0, "KLOKKEN", "klokken")),
    (ER, Word::new(0, 8, "ER", "er")),
    (FEM, Word::new(2, 1, "FEM", "fem")),
    (TI, Word::new(1, 9, "TI", "ti")),
    (KVART, Word::new(2, 6, "KVART", "kvart")),
    (TJUE, Word::new(1, 2, "TJUE", "tjue")),
    (HALV, Word::new(4, 7, "HALV", "halv")),
    (OVER, Word::new(4, 0, "OVER", "over")),
    (PA, Word::new(4, 4, "PÅ", "på")),
];

const FILLER: &[Word] = &[
    Word::new(0, 7, "P", "p"),
    Word::new(0, 10, "YT", "yt"),
    Word::new(1, 0, "SH", "sh"),
    Word::new(1, 6, "CMF", "cmf"),
    Word::new(1, 11, "X", "x"),
    Word::new(2, 0, "U", "u"),
    Word::new(2, 4, "Z", "z"),
    Word::new(2, 5, "I", "i"),
    Word::new(2, 11, "J", "j"),
    Word::new(3, 0, "DETERENPBBLE", "deterenpbble"),
    Word::new(4, 6, "P", "p"),
    Word::new(4, 11, "Z", "z"),
    Word::new(5, 2, "H", "h"),
    Word::new(5, 9, "B", "b"),
    Word::new(6, 3, "B", "b"),
    Word::new(6, 8, "U", "u"),
    Word::new(7, 0, "S", "s"),
    Word::new(7, 5, "C", "c"),
    Word::new(7, 8, "R", "r"),
    Word::new(8, 2, "L", "l"),
    Word::new(8, 7, "Y", "y"),
];

pub const INTERVALS: IntervalTable = IntervalTable::new([
    this_hour(&[KLOKKEN, ER]),
    this_hour(&[]),
    this_hour(&[FEM, OVER]),
    this_hour(&[TI, OVER]),
    this_hour(&[KVART, OVER]),
    next_hour(&[TI, PA, HALV]),
    next_hour(&[FEM, PA, HALV]),
    next_hour(&[HALV]),
    next_hour(&[FEM, OVER, HALV]),
    next_hour(&[TI, OVER, HALV]),
    next_hour(&[KVART, PA]),
    next_hour(&[TI, PA]),
    next_hour(&[FEM, PA]),
]);

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::NbNo,
        WordTable::from_layout(WORDS, DEFAULT_FILLER_START, FILLER),
        INTERVALS,
    )
}
