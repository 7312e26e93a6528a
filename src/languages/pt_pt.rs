// src/languages/pt_pt.rs
//! ```text
//!       pt_PT
//!   0123456789ab
//! 0 ÉSÃOZVINTEHE
//! 1 QUINZETCINCO
//! 2 DEZXPARAFASN
//! 3 QUATRONZEUMA
//! 4 DEZSEISCINCO
//! 5 DUASETELTRÊS
//! 6 NOVEDOZEJEÓG
//! 7 MEIADEZVINTE
//! 8 QUINZERCINCO
//! ```
//!
//! Several hours share letters. DUAS, SETE, SEIS, QUATRO, ONZE and DOZE
//! are stems with a gap that a single-glyph word fills in, and OITO has no
//! word of its own: it is read down column 5 from four such glyphs.
use super::{next_hour, this_hour};
use crate::core::intervals::IntervalTable;
use crate::core::overlay::{BucketMatch, ExceptionRule, HourMatch};
use crate::core::pack::LanguagePack;
use crate::core::types::{LanguageId, Word, WordIndex};
use crate::core::word_table::WordTable;

pub const EE: WordIndex = 13;
pub const SAO: WordIndex = 14;
/// S of DUAS and SETE.
pub const DUAS_SETE_S: WordIndex = 15;
/// O of QUATRO and ONZE, first O of OITO.
pub const OITO_O: WordIndex = 16;
/// I of SEIS and OITO.
pub const OITO_I: WordIndex = 17;
/// T of SETE and OITO.
pub const OITO_T: WordIndex = 18;
/// O of DOZE, last O of OITO.
pub const OITO_O2: WordIndex = 19;
pub const A_CINCO: WordIndex = 20;
pub const D_CINCO: WordIndex = 21;
pub const A_DEZ: WordIndex = 22;
pub const D_DEZ: WordIndex = 23;
pub const A_QUINZE: WordIndex = 24;
pub const D_QUINZE: WordIndex = 25;
pub const A_VINTE: WordIndex = 26;
pub const D_VINTE: WordIndex = 27;
/// E of "vinte e cinco" before the hour.
pub const A_VCE_E: WordIndex = 28;
/// E of "vinte e cinco" after the hour; also completes QUINZ.
pub const D_VCE_E: WordIndex = 29;
pub const MEIA: WordIndex = 30;
pub const E: WordIndex = 31;
pub const PARA: WordIndex = 32;
pub const A: WordIndex = 33;
/// Plural S of "para as".
pub const AS: WordIndex = 34;

pub const FILLER_START: WordIndex = 35;

const WORDS: &[(WordIndex, Word)] = &[
    (1, Word::new(3, 9, "UMA", "uma")),
    (2, Word::new(5, 0, "DUA ", "dua ")),
    (3, Word::new(5, 8, "TRÊS", "três")),
    (4, Word::new(3, 0, "QUATR ", "quatr ")),
    (5, Word::new(4, 7, "CINCO", "cinco")),
    (6, Word::new(4, 3, "SE S", "se s")),
    (7, Word::new(5, 3, " E E", " e e")),
    (9, Word::new(6, 0, "NOVE", "nove")),
    (10, Word::new(4, 0, "DEZ", "dez")),
    (11, Word::new(3, 5, " NZE", " nze")),
    (12, Word::new(6, 4, "D ZE", "d ze")),
    (DUAS_SETE_S, Word::new(5, 3, "S", "s")),
    (OITO_O, Word::new(3, 5, "O", "o")),
    (OITO_I, Word::new(4, 5, "I", "i")),
    (OITO_T, Word::new(5, 5, "T", "t")),
    (OITO_O2, Word::new(6, 5, "O", "o")),
    (A_CINCO, Word::new(1, 7, "CINCO", "cinco")),
    (D_CINCO, Word::new(8, 7, "CINCO", "cinco")),
    (A_DEZ, Word::new(2, 0, "DEZ", "dez")),
    (D_DEZ, Word::new(7, 4, "DEZ", "dez")),
    (A_QUINZE, Word::new(1, 0, "QUINZE", "quinze")),
    (D_QUINZE, Word::new(8, 0, "QUINZ ", "quinz ")),
    (A_VINTE, Word::new(0, 5, "VINTE", "vinte")),
    (D_VINTE, Word::new(7, 7, "VINTE", "vinte")),
    (A_VCE_E, Word::new(0, 11, "E", "e")),
    (D_VCE_E, Word::new(8, 5, "E", "e")),
    (MEIA, Word::new(7, 0, "MEIA", "meia")),
    (EE, Word::new(0, 0, "É", "é")),
    (SAO, Word::new(0, 1, "SÃO", "são")),
    (E, Word::new(6, 9, "E", "e")),
    (PARA, Word::new(2, 4, "PARA", "para")),
    (A, Word::new(2, 9, "A", "a")),
    (AS, Word::new(2, 10, "S", "s")),
];

const FILLER: &[Word] = &[
    Word::new(0, 4, "Z", "z"),
    Word::new(0, 10, "H", "h"),
    Word::new(1, 6, "T", "t"),
    Word::new(2, 3, "X", "x"),
    Word::new(2, 8, "F", "f"),
    Word::new(2, 11, "N", "n"),
    Word::new(5, 7, "L", "l"),
    Word::new(6, 8, "J", "j"),
    Word::new(6, 10, "Ó", "ó"),
    Word::new(6, 11, "G", "g"),
    Word::new(8, 6, "R", "r"),
];

pub const INTERVALS: IntervalTable = IntervalTable::new([
    this_hour(&[]),
    this_hour(&[]),
    this_hour(&[E, D_CINCO]),
    this_hour(&[E, D_DEZ]),
    this_hour(&[E, D_QUINZE, D_VCE_E]),
    this_hour(&[E, D_VINTE]),
    this_hour(&[E, D_VINTE, D_VCE_E, D_CINCO]),
    this_hour(&[E, MEIA]),
    next_hour(&[A_VINTE, A_VCE_E, A_CINCO, PARA]),
    next_hour(&[A_VINTE, PARA]),
    next_hour(&[A_QUINZE, PARA]),
    next_hour(&[A_DEZ, PARA]),
    next_hour(&[A_CINCO, PARA]),
]);

const PARA_BUCKETS: BucketMatch = BucketMatch::Within(8, 12);

pub const RULES: &[ExceptionRule] = &[
    ExceptionRule::when(HourMatch::Is(1), BucketMatch::Any).light(&[EE]),
    ExceptionRule::when(HourMatch::IsNot(1), BucketMatch::Any).light(&[SAO]),
    ExceptionRule::when(HourMatch::Is(2), BucketMatch::Any).light(&[DUAS_SETE_S]),
    ExceptionRule::when(HourMatch::Is(4), BucketMatch::Any).light(&[OITO_O]),
    ExceptionRule::when(HourMatch::Is(6), BucketMatch::Any).light(&[OITO_I]),
    ExceptionRule::when(HourMatch::Is(7), BucketMatch::Any).light(&[DUAS_SETE_S, OITO_T]),
    ExceptionRule::when(HourMatch::Is(8), BucketMatch::Any)
        .light(&[OITO_O, OITO_I, OITO_T, OITO_O2]),
    ExceptionRule::when(HourMatch::Is(11), BucketMatch::Any).light(&[OITO_O]),
    ExceptionRule::when(HourMatch::Is(12), BucketMatch::Any).light(&[OITO_O2]),
    // "para a uma", "para as duas"
    ExceptionRule::when(HourMatch::Any, PARA_BUCKETS).light(&[A]),
    ExceptionRule::when(HourMatch::IsNot(1), PARA_BUCKETS).light(&[AS]),
];

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::PtPt,
        WordTable::from_layout(WORDS, FILLER_START, FILLER),
        INTERVALS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::{PhraseResolver, WordSet};

    #[test]
    fn eight_is_spelled_from_four_glyphs() {
        let resolved = PhraseResolver::default().resolve(&pack(), 20, 0);
        assert_eq!(resolved.display_hour, 8);
        assert_eq!(
            resolved.active,
            WordSet::from_indices([SAO, OITO_O, OITO_I, OITO_T, OITO_O2])
        );
    }

    #[test]
    fn seven_completes_its_stem() {
        let resolved = PhraseResolver::default().resolve(&pack(), 7, 30);
        assert_eq!(
            resolved.active,
            WordSet::from_indices([SAO, 7, DUAS_SETE_S, OITO_T, E, MEIA])
        );
    }

    #[test]
    fn para_takes_a_plural_article_except_before_one() {
        let resolver = PhraseResolver::default();

        let before_one = resolver.resolve(&pack(), 0, 50);
        assert_eq!(before_one.display_hour, 1);
        assert_eq!(
            before_one.active,
            WordSet::from_indices([EE, 1, A_DEZ, PARA, A])
        );

        let before_three = resolver.resolve(&pack(), 2, 45);
        assert_eq!(
            before_three.active,
            WordSet::from_indices([SAO, 3, A_QUINZE, PARA, A, AS])
        );
    }

    #[test]
    fn no_article_after_the_hour() {
        let resolved = PhraseResolver::default().resolve(&pack(), 3, 25);
        assert!(!resolved.active.contains(A));
        assert!(!resolved.active.contains(AS));
        assert!(resolved.active.contains(D_VCE_E));
    }
}
