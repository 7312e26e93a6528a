// src/languages/it_it.rs
//! Italian: "è l'una", "sono le due". The apostrophe lives in the hour word.
use super::{next_hour, this_hour, DEFAULT_FILLER_START};
use crate::core::intervals::IntervalTable;
use crate::core::overlay::{BucketMatch, ExceptionRule, HourMatch};
use crate::core::pack::LanguagePack;
use crate::core::types::{LanguageId, Word, WordIndex};
use crate::core::word_table::WordTable;

pub const E_GRAVE: WordIndex = 13;
pub const SONO: WordIndex = 14;
pub const LE: WordIndex = 15;
pub const CINQUE: WordIndex = 16;
pub const DIECI: WordIndex = 17;
pub const QUARTO: WordIndex = 18;
pub const VENTI: WordIndex = 19;
pub const MEZZO: WordIndex = 20;
pub const E: WordIndex = 21;
pub const UN: WordIndex = 22;
pub const MENO: WordIndex = 23;

const WORDS: &[(WordIndex, Word)] = &[
    (1, Word::new(1, 2, "L'UNA", "l'una")),
    (2, Word::new(3, 9, "DUE", "due")),
    (3, Word::new(3, 1, "TRE", "tre")),
    (4, Word::new(4, 5, "QUATTRO", "quattro")),
    (5, Word::new(2, 6, "CINQUE", "cinque")),
    (6, Word::new(3, 5, "SEI", "sei")),
    (7, Word::new(5, 7, "SETTE", "sette")),
    (8, Word::new(1, 8, "OTTO", "otto")),
    (9, Word::new(0, 8, "NOVE", "nove")),
    (10, Word::new(4, 0, "DIECI", "dieci")),
    (11, Word::new(2, 0, "UNDICI", "undici")),
    (12, Word::new(5, 1, "DODICI", "dodici")),
    (E_GRAVE, Word::new(1, 0, "È", "è")),
    (SONO, Word::new(0, 0, "SONO", "sono")),
    (LE, Word::new(0, 5, "LE", "le")),
    (CINQUE, Word::new(7, 6, "CINQUE", "cinque")),
    (DIECI, Word::new(6, 7, "DIECI", "dieci")),
    (QUARTO, Word::new(8, 6, "QUARTO", "quarto")),
    (VENTI, Word::new(7, 1, "VENTI", "venti")),
    (MEZZO, Word::new(8, 0, "MEZZO", "mezzo")),
    (E, Word::new(6, 0, "E", "e")),
    (UN, Word::new(6, 5, "UN", "un")),
    (MENO, Word::new(6, 1, "MENO", "meno")),
];

const FILLER: &[Word] = &[
    Word::new(0, 4, "F", "f"),
    Word::new(0, 7, "R", "r"),
    Word::new(1, 1, "Z", "z"),
    Word::new(1, 7, "P", "p"),
    Word::new(3, 0, "A", "a"),
    Word::new(3, 4, "M", "m"),
    Word::new(3, 8, "G", "g"),
    Word::new(5, 0, "L", "l"),
    Word::new(7, 0, "H", "h"),
    Word::new(8, 5, "V", "v"),
];

pub const INTERVALS: IntervalTable = IntervalTable::new([
    this_hour(&[]),
    this_hour(&[]),
    this_hour(&[E, CINQUE]),
    this_hour(&[E, DIECI]),
    this_hour(&[E, UN, QUARTO]),
    this_hour(&[E, VENTI]),
    this_hour(&[E, VENTI, CINQUE]),
    this_hour(&[E, MEZZO]),
    next_hour(&[MENO, VENTI, CINQUE]),
    next_hour(&[MENO, VENTI]),
    next_hour(&[MENO, UN, QUARTO]),
    next_hour(&[MENO, DIECI]),
    next_hour(&[MENO, CINQUE]),
]);

pub const RULES: &[ExceptionRule] = &[
    ExceptionRule::when(HourMatch::Is(1), BucketMatch::Any).light(&[E_GRAVE]),
    ExceptionRule::when(HourMatch::IsNot(1), BucketMatch::Any).light(&[SONO, LE]),
];

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::ItIt,
        WordTable::from_layout(WORDS, DEFAULT_FILLER_START, FILLER),
        INTERVALS,
    )
}
