// src/core/overlay.rs
use crate::core::resolver::WordSet;
use crate::core::types::{LanguageId, WordIndex};
use crate::languages;

/// Which resolved (12-hour) display hours a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourMatch {
    Any,
    Is(u8),
    IsNot(u8),
}

impl HourMatch {
    fn matches(self, hour: u8) -> bool {
        match self {
            HourMatch::Any => true,
            HourMatch::Is(h) => hour == h,
            HourMatch::IsNot(h) => hour != h,
        }
    }
}

/// Which five-minute buckets a rule applies to.
///
/// Rules are keyed on the bucket rather than the raw minute so that the
/// centred bucketing used with the two-minute dots picks the same grammar as
/// the phrase it lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketMatch {
    Any,
    /// Inclusive range of buckets, 1..=12.
    Within(u8, u8),
}

impl BucketMatch {
    fn matches(self, bucket: u8) -> bool {
        match self {
            BucketMatch::Any => true,
            BucketMatch::Within(from, to) => (from..=to).contains(&bucket),
        }
    }
}

/// A grammatical irregularity the interval table cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExceptionRule {
    pub hour: HourMatch,
    pub buckets: BucketMatch,
    pub force_on: &'static [WordIndex],
    pub force_off: &'static [WordIndex],
}

impl ExceptionRule {
    pub const fn when(hour: HourMatch, buckets: BucketMatch) -> Self {
        Self {
            hour,
            buckets,
            force_on: &[],
            force_off: &[],
        }
    }

    pub const fn light(mut self, words: &'static [WordIndex]) -> Self {
        self.force_on = words;
        self
    }

    pub const fn darken(mut self, words: &'static [WordIndex]) -> Self {
        self.force_off = words;
        self
    }

    pub fn matches(&self, display_hour: u8, bucket: u8) -> bool {
        self.hour.matches(display_hour) && self.buckets.matches(bucket)
    }

    /// Every word the rule touches.
    pub fn words(&self) -> impl Iterator<Item = WordIndex> + '_ {
        self.force_on.iter().chain(self.force_off).copied()
    }
}

/// The overlay for a language; empty for languages that need none.
pub fn rules_for(id: LanguageId) -> &'static [ExceptionRule] {
    match id {
        LanguageId::DeDe => languages::de_de::RULES,
        LanguageId::EsEs => languages::es_es::RULES,
        LanguageId::FrFr => languages::fr_fr::RULES,
        LanguageId::ItIt => languages::it_it::RULES,
        LanguageId::PtPt => languages::pt_pt::RULES,
        LanguageId::EnUs
        | LanguageId::DaDk
        | LanguageId::NlNl
        | LanguageId::SvSe
        | LanguageId::NlBe
        | LanguageId::NbNo => &[],
    }
}

/// Applies every matching rule in declaration order. Within a rule, words are
/// switched off before the rule's own words are switched on.
pub fn apply(rules: &[ExceptionRule], display_hour: u8, bucket: u8, active: &mut WordSet) {
    for rule in rules.iter().filter(|rule| rule.matches(display_hour, bucket)) {
        for &index in rule.force_off {
            active.remove(index);
        }
        for &index in rule.force_on {
            active.insert(index);
        }
    }
}
