// src/core/word_table.rs
use crate::core::types::{Word, WordIndex, WORD_COUNT};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The vocabulary and layout of one language.
///
/// Slots 1..=12 are the hour names, 13 onwards the minute and relative words,
/// and a trailing block holds decorative filler that never lights up.
/// Slot 0 is reserved and always blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTable {
    words: [Word; WORD_COUNT],
}

impl Default for WordTable {
    fn default() -> Self {
        Self {
            words: [Word::EMPTY; WORD_COUNT],
        }
    }
}

impl WordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out a table from explicitly indexed words followed by a run of
    /// filler words placed consecutively from `filler_start`.
    ///
    /// Entries that fall outside the table are an authoring bug: they trip a
    /// debug assertion and are dropped in release builds.
    pub fn from_layout(entries: &[(WordIndex, Word)], filler_start: WordIndex, filler: &[Word]) -> Self {
        let mut table = Self::new();
        let fillers = filler
            .iter()
            .enumerate()
            .map(|(offset, word)| (filler_start as usize + offset, word));
        let indexed = entries.iter().map(|(index, word)| (*index as usize, word));

        for (index, word) in indexed.chain(fillers) {
            debug_assert!(
                (1..WORD_COUNT).contains(&index),
                "word slot {index} outside 1..{WORD_COUNT}"
            );
            if (1..WORD_COUNT).contains(&index) {
                table.words[index] = *word;
            } else {
                tracing::error!(index, "dropping word outside the table");
            }
        }
        table
    }

    pub fn get(&self, index: WordIndex) -> Option<&Word> {
        self.words.get(index as usize)
    }

    /// Replaces a slot. Returns `false` (and changes nothing) for slot 0 or an
    /// index past the end of the table.
    pub fn set(&mut self, index: WordIndex, word: Word) -> bool {
        match self.words.get_mut(index as usize) {
            Some(slot) if index != 0 => {
                *slot = word;
                true
            }
            _ => false,
        }
    }

    /// True when `index` names a slot that actually holds a word.
    pub fn contains(&self, index: WordIndex) -> bool {
        index != 0 && self.get(index).is_some_and(|word| !word.is_blank())
    }

    /// All usable slots, 1..=53, blank ones included.
    pub fn iter(&self) -> impl Iterator<Item = (WordIndex, &Word)> + '_ {
        self.words
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, word)| (index as WordIndex, word))
    }

    /// Number of slots holding a word.
    pub fn len(&self) -> usize {
        self.iter().filter(|(_, word)| !word.is_blank()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One non-blank slot as it appears in a JSON pack definition.
#[derive(Serialize, Deserialize)]
struct WordEntry {
    index: WordIndex,
    #[serde(flatten)]
    word: Word,
}

impl Serialize for WordTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<WordEntry> = self
            .iter()
            .filter(|(_, word)| !word.is_blank())
            .map(|(index, word)| WordEntry { index, word: *word })
            .collect();
        entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WordTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<WordEntry>::deserialize(deserializer)?;
        let mut table = WordTable::new();
        for entry in entries {
            if !table.set(entry.index, entry.word) {
                return Err(serde::de::Error::custom(format!(
                    "word index {} outside 1..{}",
                    entry.index, WORD_COUNT
                )));
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filler_is_laid_out_consecutively() {
        let table = WordTable::from_layout(
            &[(1, Word::new(5, 0, "ONE", "one"))],
            27,
            &[Word::new(0, 2, "Z", "z"), Word::new(0, 5, "APEBBLE", "apebble")],
        );
        assert_eq!(table.get(27).unwrap().text_on.as_str(), "Z");
        assert_eq!(table.get(28).unwrap().text_on.as_str(), "APEBBLE");
        assert!(table.get(29).unwrap().is_blank());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn slot_zero_is_never_usable() {
        let mut table = WordTable::new();
        assert!(!table.set(0, Word::new(0, 0, "X", "x")));
        assert!(!table.set(54, Word::new(0, 0, "X", "x")));
        assert!(!table.contains(0));
        assert_eq!(table.iter().count(), WORD_COUNT - 1);
    }

    #[test]
    fn json_lists_only_occupied_slots() {
        let table = WordTable::from_layout(&[(3, Word::new(8, 0, "THREE", "three"))], 27, &[]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"[{"index":3,"row":8,"col":0,"text_on":"THREE","text_off":"three"}]"#
        );
        let back: WordTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn json_with_bad_index_is_rejected() {
        let json = r#"[{"index":60,"row":0,"col":0,"text_on":"X","text_off":"x"}]"#;
        assert!(serde_json::from_str::<WordTable>(json).is_err());
    }
}
