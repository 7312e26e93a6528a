// src/languages/de_de.rs
//! German. "Es ist ein Uhr" on the hour but "fünf nach eins" after it, so
//! the square carries a second spelling of one at slot 13.
use super::{next_hour, this_hour, DEFAULT_FILLER_START};
use crate::core::intervals::IntervalTable;
use crate::core::overlay::{BucketMatch, ExceptionRule, HourMatch};
use crate::core::pack::LanguagePack;
use crate::core::types::{LanguageId, Word, WordIndex};
use crate::core::word_table::WordTable;

pub const EIN: WordIndex = 1;
pub const EINS: WordIndex = 13;
pub const ES: WordIndex = 14;
pub const IST: WordIndex = 15;
pub const FUENF: WordIndex = 16;
pub const ZEHN: WordIndex = 17;
pub const VIERTEL: WordIndex = 18;
pub const ZWANZIG: WordIndex = 19;
pub const HALB: WordIndex = 20;
pub const NACH: WordIndex = 21;
pub const VOR: WordIndex = 22;
pub const UHR: WordIndex = 23;

const WORDS: &[(WordIndex, Word)] = &[
    (EIN, Word::new(3, 9, "EIN", "ein")),
    (2, Word::new(6, 0, "ZWEI", "zwei")),
    (3, Word::new(4, 8, "DREI", "drei")),
    (4, Word::new(7, 0, "VIER", "vier")),
    (5, Word::new(5, 8, "FÜNF", "fünf")),
    (6, Word::new(8, 0, "SECHS", "sechs")),
    (7, Word::new(5, 0, "SIEBEN", "sieben")),
    (8, Word::new(7, 4, "ACHT", "acht")),
    (9, Word::new(6, 8, "NEUN", "neun")),
    (10, Word::new(7, 8, "ZEHN", "zehn")),
    (11, Word::new(6, 5, "ELF", "elf")),
    (12, Word::new(4, 0, "ZWÖLF", "zwölf")),
    (EINS, Word::new(8, 5, "EINS", "eins")),
    (ES, Word::new(0, 0, "ES", "es")),
    (IST, Word::new(0, 3, "IST", "ist")),
    (FUENF, Word::new(0, 7, "FÜNF", "fünf")),
    (ZEHN, Word::new(1, 0, "ZEHN", "zehn")),
    (VIERTEL, Word::new(2, 0, "VIERTEL", "viertel")),
    (ZWANZIG, Word::new(1, 5, "ZWANZIG", "zwanzig")),
    (HALB, Word::new(3, 4, "HALB", "halb")),
    (NACH, Word::new(2, 8, "NACH", "nach")),
    (VOR, Word::new(3, 0, "VOR", "vor")),
    (UHR, Word::new(8, 9, "UHR", "uhr")),
];

const FILLER: &[Word] = &[
    Word::new(0, 2, "Z", "z"),
    Word::new(0, 6, "A", "a"),
    Word::new(0, 11, "T", "t"),
    Word::new(1, 4, "L", "l"),
    Word::new(2, 7, "K", "k"),
    Word::new(3, 3, "S", "s"),
    Word::new(3, 8, "O", "o"),
    Word::new(4, 5, "G", "g"),
    Word::new(4, 6, "K", "k"),
    Word::new(4, 7, "P", "p"),
    Word::new(5, 6, "J", "j"),
    Word::new(5, 7, "T", "t"),
    Word::new(6, 4, "U", "u"),
];

pub const INTERVALS: IntervalTable = IntervalTable::new([
    this_hour(&[ES, IST]),
    this_hour(&[UHR]),
    this_hour(&[FUENF, NACH]),
    this_hour(&[ZEHN, NACH]),
    this_hour(&[VIERTEL, NACH]),
    this_hour(&[ZWANZIG, NACH]),
    next_hour(&[FUENF, VOR, HALB]),
    next_hour(&[HALB]),
    next_hour(&[FUENF, NACH, HALB]),
    next_hour(&[ZWANZIG, VOR]),
    next_hour(&[VIERTEL, VOR]),
    next_hour(&[ZEHN, VOR]),
    next_hour(&[FUENF, VOR]),
]);

pub const RULES: &[ExceptionRule] = &[
    // "ein Uhr" only on the hour
    ExceptionRule::when(HourMatch::Is(1), BucketMatch::Within(2, 12))
        .darken(&[EIN])
        .light(&[EINS]),
];

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::DeDe,
        WordTable::from_layout(WORDS, DEFAULT_FILLER_START, FILLER),
        INTERVALS,
    )
}
