// src/languages/mod.rs
//! The word squares compiled into the watchface, one module per language.
//!
//! Every module lays out its words, names the indices its phrases use and
//! lists the interval rows. Languages whose grammar the interval table cannot
//! express also carry a `RULES` overlay.

pub mod da_dk;
pub mod de_de;
pub mod en_us;
pub mod es_es;
pub mod fr_fr;
pub mod it_it;
pub mod nb_no;
pub mod nl_be;
pub mod nl_nl;
pub mod pt_pt;
pub mod sv_se;

use crate::core::intervals::{IntervalRow, WORDS_PER_ROW};
use crate::core::pack::LanguagePack;
use crate::core::types::{LanguageId, WordIndex};

/// First filler slot for languages that don't need more than fourteen
/// relative words.
pub const DEFAULT_FILLER_START: WordIndex = 27;

/// The compiled-in pack for `id`.
pub fn builtin(id: LanguageId) -> LanguagePack {
    match id {
        LanguageId::EnUs => en_us::pack(),
        LanguageId::DaDk => da_dk::pack(),
        LanguageId::DeDe => de_de::pack(),
        LanguageId::EsEs => es_es::pack(),
        LanguageId::FrFr => fr_fr::pack(),
        LanguageId::ItIt => it_it::pack(),
        LanguageId::NlNl => nl_nl::pack(),
        LanguageId::SvSe => sv_se::pack(),
        LanguageId::NlBe => nl_be::pack(),
        LanguageId::PtPt => pt_pt::pack(),
        LanguageId::NbNo => nb_no::pack(),
    }
}

/// Every shipped pack, in id order.
pub fn all() -> impl Iterator<Item = LanguagePack> {
    LanguageId::ALL.into_iter().map(builtin)
}

const fn row(hour_carry: bool, words: &[WordIndex]) -> IntervalRow {
    assert!(words.len() <= WORDS_PER_ROW, "interval row holds at most four words");
    let mut slots = [0; WORDS_PER_ROW];
    let mut i = 0;
    while i < words.len() {
        slots[i] = words[i];
        i += 1;
    }
    IntervalRow::new(hour_carry, slots)
}

/// A row naming the current hour.
pub(crate) const fn this_hour(words: &[WordIndex]) -> IntervalRow {
    row(false, words)
}

/// A row whose phrase counts towards the next hour ("twenty to ...").
pub(crate) const fn next_hour(words: &[WordIndex]) -> IntervalRow {
    row(true, words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::overlay::rules_for;

    #[test]
    fn every_shipped_pack_is_valid() {
        for pack in all() {
            if let Err(err) = pack.validate() {
                panic!("{}: {err}", pack.id());
            }
        }
    }

    #[test]
    fn packs_report_their_own_language() {
        for id in LanguageId::ALL {
            assert_eq!(builtin(id).id(), id);
        }
    }

    #[test]
    fn overlay_rules_only_touch_real_words() {
        for pack in all() {
            for rule in rules_for(pack.id()) {
                for index in rule.words() {
                    assert!(
                        pack.words().contains(index),
                        "{}: rule touches blank word {index}",
                        pack.id()
                    );
                }
            }
        }
    }

    #[test]
    fn every_hour_is_spelled_except_the_portuguese_eight() {
        for pack in all() {
            for hour in 1..=12 {
                let spelled = pack.words().contains(hour);
                let expected = !(pack.id() == LanguageId::PtPt && hour == 8);
                assert_eq!(spelled, expected, "{} hour {hour}", pack.id());
            }
        }
    }
}
