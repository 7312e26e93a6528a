// src/languages/sv_se.rs
//! Swedish: "klockan är fem i halv tre".
use super::{next_hour, this_hour, DEFAULT_FILLER_START};
use crate::core::intervals::IntervalTable;
use crate::core::pack::LanguagePack;
use crate::core::types::{LanguageId, Word, WordIndex};
use crate::core::word_table::WordTable;

pub const KLOCKAN: WordIndex = 13;
pub const AR: WordIndex = 14;
pub const FEM: WordIndex = 15;
pub const TIO: WordIndex = 16;
pub const KVART: WordIndex = 17;
pub const TJUGO: WordIndex = 18;
pub const HALV: WordIndex = 19;
pub const OVER: WordIndex = 20;
pub const I: WordIndex = 21;

const WORDS: &[(WordIndex, Word)] = &[
    (1, Word::new(8, 0, "ETT", "ett")),
    (2, Word::new(5, 0, "TVÅ", "två")),
    (3, Word::new(6, 0, "TRE", "tre")),
    (4, Word::new(7, 1, "FYRA", "fyra")),
    (5, Word::new(6, 9, "FEM", "fem")),
    (6, Word::new(8, 4, "SEX", "sex")),
    (7, Word::new(7, 9, "SJU", "sju")),
    (8, Word::new(8, 8, "ÅTTA", "åtta")),
    (9, Word::new(7, 6, "NIO", "nio")),
    (10, Word::new(5, 9, "TIO", "tio")),
    (11, Word::new(5, 4, "ELVA", "elva")),
    (12, Word::new(6, 3, "TOLV", "tolv")),
    (KLOCKAN, Word::new(0, 0, "KLOCKAN", "klockan")),
    (AR, Word::new(0, 8, "ÄR", "är")),
    (FEM, Word::new(2, 1, "FEM", "fem")),
    (TIO, Word::new(1, 8, "TIO", "tio")),
    (KVART, Word::new(2, 6, "KVART", "kvart")),
    (TJUGO, Word::new(1, 2, "TJUGO", "tjugo")),
    (HALV, Word::new(4, 7, "HALV", "halv")),
    (OVER, Word::new(4, 0, "ÖVER", "över")),
    (I, Word::new(4, 5, "I", "i")),
];

const FILLER: &[Word] = &[
    Word::new(0, 7, "P", "p"),
    Word::new(0, 10, "YT", "yt"),
    Word::new(1, 0, "S", "s"),
    Word::new(1, 1, "H", "h"),
    Word::new(1, 7, "C", "c"),
    Word::new(1, 11, "X", "x"),
    Word::new(2, 0, "U", "u"),
    Word::new(2, 4, "Z", "z"),
    Word::new(2, 5, "I", "i"),
    Word::new(2, 11, "J", "j"),
    Word::new(3, 0, "DETÄRENPBBLE", "detärenpbble"),
    Word::new(4, 4, "M", "m"),
    Word::new(4, 6, "P", "p"),
    Word::new(4, 11, "Z", "z"),
    Word::new(5, 3, "J", "j"),
    Word::new(5, 8, "O", "o"),
    Word::new(6, 7, "B", "b"),
    Word::new(6, 8, "U", "u"),
    Word::new(7, 0, "S", "s"),
    Word::new(7, 5, "C", "c"),
    Word::new(8, 3, "L", "l"),
    Word::new(8, 7, "Y", "y"),
];

pub const INTERVALS: IntervalTable = IntervalTable::new([
    this_hour(&[KLOCKAN, AR]),
    this_hour(&[]),
    this_hour(&[FEM, OVER]),
    this_hour(&[TIO, OVER]),
    this_hour(&[KVART, OVER]),
    this_hour(&[TJUGO, OVER]),
    next_hour(&[FEM, I, HALV]),
    next_hour(&[HALV]),
    next_hour(&[FEM, OVER, HALV]),
    next_hour(&[TJUGO, I]),
    next_hour(&[KVART, I]),
    next_hour(&[TIO, I]),
    next_hour(&[FEM, I]),
]);

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::SvSe,
        WordTable::from_layout(WORDS, DEFAULT_FILLER_START, FILLER),
        INTERVALS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::{PhraseResolver, WordSet};

    #[test]
    fn five_past_half_never_lights_the_hour_one() {
        let resolved = PhraseResolver::default().resolve(&pack(), 5, 37);
        assert_eq!(resolved.display_hour, 6);
        assert_eq!(resolved.active, WordSet::from_indices([KLOCKAN, AR, FEM, OVER, HALV, 6]));
    }
}
