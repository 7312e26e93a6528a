// src/core/resolver.rs
use crate::core::intervals::{centred_bucket, floor_bucket, IntervalRow};
use crate::core::overlay;
use crate::core::pack::LanguagePack;
use crate::core::types::{WordIndex, WORD_COUNT};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

/// A set of word indices, one bit per slot of the 54-word table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WordSet(u64);

impl WordSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn from_indices(indices: impl IntoIterator<Item = WordIndex>) -> Self {
        let mut set = Self::new();
        for index in indices {
            set.insert(index);
        }
        set
    }

    /// Raw bitmask; bit `n` is word `n`.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Adds `index`. Indices past the table are ignored and reported as `false`.
    pub fn insert(&mut self, index: WordIndex) -> bool {
        if (index as usize) < WORD_COUNT {
            self.0 |= 1 << index;
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, index: WordIndex) {
        if (index as usize) < WORD_COUNT {
            self.0 &= !(1 << index);
        }
    }

    pub fn contains(&self, index: WordIndex) -> bool {
        (index as usize) < WORD_COUNT && self.0 & (1 << index) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = WordIndex> + '_ {
        (0..WORD_COUNT as WordIndex).filter(move |&index| self.contains(index))
    }
}

impl fmt::Debug for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for WordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for index in self.iter() {
            seq.serialize_element(&index)?;
        }
        seq.end()
    }
}

/// Caller-selected resolution behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveOptions {
    /// Centre buckets on the five-minute mark instead of starting them there.
    pub fine_grained_buckets: bool,
}

/// The result of telling one time: which words to light and what the
/// minute indicator should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivationSet {
    pub active: WordSet,
    /// 1..=12
    pub display_hour: u8,
    /// Minutes past the last five-minute mark, 0..=4.
    pub minute_offset: u8,
    /// Bucket the phrase was taken from, 1..=12.
    pub bucket: u8,
}

/// Adds one hour when `carry` is set, wrapping 23 to 0.
pub fn carry_hour(hour: u8, carry: bool) -> u8 {
    if carry {
        (hour + 1) % 24
    } else {
        hour
    }
}

/// 24-hour to 12-hour clock: 0 becomes 12, 13..=23 become 1..=11.
pub fn twelve_hour(hour: u8) -> u8 {
    match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    }
}

/// Maps a clock time onto a language's words. Stateless: the same pack and
/// time always give the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhraseResolver {
    pub options: ResolveOptions,
}

impl PhraseResolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// Resolves `hour` (0..=23) and `minute` (0..=59). Larger values are
    /// reduced modulo 24 and 60.
    pub fn resolve(&self, pack: &LanguagePack, hour: u8, minute: u8) -> ActivationSet {
        debug_assert!(hour < 24 && minute < 60, "invalid time {hour}:{minute}");
        let (hour, minute) = (hour % 24, minute % 60);

        let (bucket, wrapped) = if self.options.fine_grained_buckets {
            centred_bucket(minute)
        } else {
            (floor_bucket(minute), false)
        };
        let hour = carry_hour(hour, wrapped);

        let intervals = pack.intervals();
        let row = intervals.bucket(bucket).copied().unwrap_or(IntervalRow::EMPTY);

        let mut active = WordSet::new();
        for index in intervals.always_on().active_words().chain(row.active_words()) {
            light(&mut active, index);
        }

        // The carry only moves the numeral; the always-on row is untouched.
        let display_hour = twelve_hour(carry_hour(hour, row.hour_carry));
        if pack.words().contains(display_hour) {
            active.insert(display_hour);
        }

        overlay::apply(overlay::rules_for(pack.id()), display_hour, bucket, &mut active);

        let resolved = ActivationSet {
            active,
            display_hour,
            minute_offset: minute % 5,
            bucket,
        };
        tracing::debug!(
            language = %pack.id(),
            hour,
            minute,
            bucket,
            display_hour,
            words = ?resolved.active,
            "resolved phrase"
        );
        resolved
    }
}

fn light(active: &mut WordSet, index: WordIndex) {
    debug_assert!((index as usize) < WORD_COUNT, "interval references word {index}");
    if !active.insert(index) {
        tracing::warn!(index, "ignoring interval reference outside the word table");
    }
}
