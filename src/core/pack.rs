// src/core/pack.rs
use crate::core::intervals::IntervalTable;
use crate::core::types::{LanguageId, GRID_COLS, GRID_ROWS, WORD_COUNT};
use crate::core::word_table::WordTable;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Everything needed to tell the time in one language. Packs are never
/// mutated; switching language replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePack {
    id: LanguageId,
    words: WordTable,
    intervals: IntervalTable,
}

impl LanguagePack {
    pub fn new(id: LanguageId, words: WordTable, intervals: IntervalTable) -> Self {
        Self { id, words, intervals }
    }

    pub fn id(&self) -> LanguageId {
        self.id
    }

    pub fn words(&self) -> &WordTable {
        &self.words
    }

    pub fn intervals(&self) -> &IntervalTable {
        &self.intervals
    }

    /// Checks the authoring invariants: every word fits the grid with equal
    /// lit and dark widths, and every interval reference names a real word.
    pub fn validate(&self) -> Result<()> {
        for (index, word) in self.words.iter().filter(|(_, w)| !w.is_blank()) {
            if word.row >= GRID_ROWS || word.col >= GRID_COLS {
                return Err(Error::Invalid(format!(
                    "{}: word {index} anchored at ({}, {}) outside the grid",
                    self.id, word.row, word.col
                )));
            }
            if word.col as usize + word.width() > GRID_COLS as usize {
                return Err(Error::Invalid(format!(
                    "{}: word {index} ({}) runs past column {}",
                    self.id,
                    word.text_on,
                    GRID_COLS - 1
                )));
            }
            if !word.text_off.is_empty() && word.text_on.width() != word.text_off.width() {
                return Err(Error::Invalid(format!(
                    "{}: word {index} changes width when toggled ({:?} / {:?})",
                    self.id, word.text_on, word.text_off
                )));
            }
        }

        for (row, interval) in self.intervals.rows().iter().enumerate() {
            for index in interval.active_words() {
                if index as usize >= WORD_COUNT {
                    return Err(Error::IndexOutOfRange { row, index });
                }
                if !self.words.contains(index) {
                    return Err(Error::Invalid(format!(
                        "{}: interval row {row} references blank word {index}",
                        self.id
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intervals::{IntervalRow, INTERVAL_ROWS};
    use crate::core::types::Word;

    fn pack_with(words: WordTable, rows: [IntervalRow; INTERVAL_ROWS]) -> LanguagePack {
        LanguagePack::new(LanguageId::EnUs, words, IntervalTable::new(rows))
    }

    #[test]
    fn dangling_interval_reference_is_reported() {
        let words = WordTable::from_layout(&[(13, Word::new(0, 0, "IT", "it"))], 27, &[]);
        let mut rows = [IntervalRow::EMPTY; INTERVAL_ROWS];
        rows[0] = IntervalRow::new(false, [13, 14, 0, 0]);
        let err = pack_with(words, rows).validate().unwrap_err();
        assert!(matches!(err, Error::Invalid(_)), "{err}");
    }

    #[test]
    fn reference_past_the_table_is_out_of_range() {
        let words = WordTable::from_layout(&[(13, Word::new(0, 0, "IT", "it"))], 27, &[]);
        let mut rows = [IntervalRow::EMPTY; INTERVAL_ROWS];
        rows[4] = IntervalRow::new(false, [13, 54, 0, 0]);
        let err = pack_with(words, rows).validate().unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { row: 4, index: 54 }));
    }

    #[test]
    fn word_running_off_the_grid_is_rejected() {
        let words = WordTable::from_layout(&[(1, Word::new(0, 10, "ONE", "one"))], 27, &[]);
        let err = pack_with(words, [IntervalRow::EMPTY; INTERVAL_ROWS])
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("runs past"), "{err}");
    }

    #[test]
    fn hidden_off_text_may_be_empty() {
        let words = WordTable::from_layout(
            &[
                (24, Word::new(5, 6, "HEURE", "")),
                (25, Word::new(5, 6, "HEURES", "     s")),
            ],
            27,
            &[],
        );
        assert!(pack_with(words, [IntervalRow::EMPTY; INTERVAL_ROWS])
            .validate()
            .is_ok());
    }
}
