// src/core/intervals.rs
use crate::core::types::WordIndex;
use serde::{Deserialize, Serialize};

/// Rows in an interval table: the always-on row plus twelve five-minute buckets.
pub const INTERVAL_ROWS: usize = 13;
/// Hard limit of words one row can switch on.
pub const WORDS_PER_ROW: usize = 4;
/// Row holding the words that are lit at every minute.
pub const ALWAYS_ON_ROW: usize = 0;

/// Words to light for one bucket and whether the phrase names the next hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntervalRow {
    pub hour_carry: bool,
    /// Word references; 0 marks an unused slot.
    pub words: [WordIndex; WORDS_PER_ROW],
}

impl IntervalRow {
    pub const EMPTY: Self = Self {
        hour_carry: false,
        words: [0; WORDS_PER_ROW],
    };

    pub const fn new(hour_carry: bool, words: [WordIndex; WORDS_PER_ROW]) -> Self {
        Self { hour_carry, words }
    }

    /// The referenced words, unused slots skipped.
    pub fn active_words(&self) -> impl Iterator<Item = WordIndex> + '_ {
        self.words.iter().copied().filter(|&index| index != 0)
    }
}

/// Which words light up for each five-minute bucket of the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntervalTable {
    rows: [IntervalRow; INTERVAL_ROWS],
}

impl IntervalTable {
    pub const fn new(rows: [IntervalRow; INTERVAL_ROWS]) -> Self {
        Self { rows }
    }

    pub fn always_on(&self) -> &IntervalRow {
        &self.rows[ALWAYS_ON_ROW]
    }

    /// Row for `bucket` (1..=12). Out-of-range buckets yield `None`.
    pub fn bucket(&self, bucket: u8) -> Option<&IntervalRow> {
        match bucket {
            1..=12 => self.rows.get(bucket as usize),
            _ => None,
        }
    }

    pub fn rows(&self) -> &[IntervalRow; INTERVAL_ROWS] {
        &self.rows
    }
}

/// Bucket (1..=12) holding `minute` when buckets start on the five-minute mark.
pub fn floor_bucket(minute: u8) -> u8 {
    minute / 5 + 1
}

/// Bucket for the centred mode used with the two-minute dots.
///
/// Defined as `(minute + 2.5) / 5 + 1` truncated. Operands are non-negative,
/// so truncation is a floor and the same value is `(2 * minute + 5) / 10 + 1`
/// in integers. Minutes 58 and 59 land in 13, reported as bucket 1 of the
/// next hour with the second value set.
pub fn centred_bucket(minute: u8) -> (u8, bool) {
    let bucket = (2 * minute as u16 + 5) / 10 + 1;
    if bucket > 12 {
        (1, true)
    } else {
        (bucket as u8, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_buckets_turn_over_on_the_five_minute_seams() {
        assert_eq!(floor_bucket(0), 1);
        assert_eq!(floor_bucket(4), 1);
        assert_eq!(floor_bucket(5), 2);
        assert_eq!(floor_bucket(9), 2);
        assert_eq!(floor_bucket(10), 3);
        assert_eq!(floor_bucket(59), 12);
    }

    #[test]
    fn centred_buckets_match_the_truncated_float_formula() {
        for minute in 0u8..60 {
            let expected = ((minute as f32 + 2.5) / 5.0) as u8 + 1;
            let (bucket, wrapped) = centred_bucket(minute);
            if expected > 12 {
                assert!(wrapped, "minute {minute}");
                assert_eq!(bucket, 1);
            } else {
                assert!(!wrapped, "minute {minute}");
                assert_eq!(bucket, expected, "minute {minute}");
            }
        }
    }

    #[test]
    fn centred_bucket_vectors_near_the_seams() {
        assert_eq!(centred_bucket(0), (1, false));
        assert_eq!(centred_bucket(2), (1, false));
        assert_eq!(centred_bucket(3), (2, false));
        assert_eq!(centred_bucket(7), (2, false));
        assert_eq!(centred_bucket(8), (3, false));
        assert_eq!(centred_bucket(57), (12, false));
        assert_eq!(centred_bucket(58), (1, true));
        assert_eq!(centred_bucket(59), (1, true));
    }

    #[test]
    fn bucket_lookup_skips_the_always_on_row() {
        let mut rows = [IntervalRow::EMPTY; INTERVAL_ROWS];
        rows[0] = IntervalRow::new(false, [13, 14, 0, 0]);
        rows[12] = IntervalRow::new(true, [16, 22, 0, 0]);
        let table = IntervalTable::new(rows);

        assert_eq!(table.always_on().active_words().collect::<Vec<_>>(), vec![13, 14]);
        assert!(table.bucket(0).is_none());
        assert!(table.bucket(13).is_none());
        assert!(table.bucket(12).unwrap().hour_carry);
    }
}
