// src/languages/nl_nl.rs
//! ```text
//!       nl_NL
//!   0123456789ab
//! 0 HETRISJVIJFZ
//! 1 OKWARTPLTIEN
//! 2 VOORXAOVERKA
//! 3 HALFPZESUÉÉN
//! 4 RTWAALFMDRIE
//! 5 ZEVENOGVIJFX
//! 6 CTWEEQBVIERW
//! 7 ELFJUNEGENKD
//! 8 ACHTTIENOUUR
//! ```
//!
//! Netherlands Dutch counts the twenties against the half hour: 12:20 is
//! "tien voor half een".
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
pub const HALF: WordIndex = 18;
pub const OVER: WordIndex = 19;
pub const VOOR: WordIndex = 20;
pub const UUR: WordIndex = 21;

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
    (KWART, Word::new(1, 1, "KWART", "kwart")),
    (HALF, Word::new(3, 0, "HALF", "half")),
    (OVER, Word::new(2, 6, "OVER", "over")),
    (VOOR, Word::new(2, 0, "VOOR", "voor")),
    (UUR, Word::new(8, 9, "UUR", "uur")),
];

const FILLER: &[Word] = &[
    Word::new(0, 3, "R", "r"),
    Word::new(0, 6, "J", "j"),
    Word::new(0, 11, "Z", "z"),
    Word::new(1, 0, "O", "o"),
    Word::new(1, 6, "P", "p"),
    Word::new(1, 7, "L", "l"),
    Word::new(2, 4, "X", "x"),
    Word::new(2, 5, "A", "a"),
    Word::new(2, 10, "K", "k"),
    Word::new(2, 11, "A", "a"),
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
    this_hour(&[VIJF, OVER]),
    this_hour(&[TIEN, OVER]),
    this_hour(&[KWART, OVER]),
    next_hour(&[TIEN, VOOR, HALF]),
    next_hour(&[VIJF, VOOR, HALF]),
    next_hour(&[HALF]),
    next_hour(&[VIJF, OVER, HALF]),
    next_hour(&[TIEN, OVER, HALF]),
    next_hour(&[KWART, VOOR]),
    next_hour(&[TIEN, VOOR]),
    next_hour(&[VIJF, VOOR]),
]);

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::NlNl,
        WordTable::from_layout(WORDS, DEFAULT_FILLER_START, FILLER),
        INTERVALS,
    )
}
