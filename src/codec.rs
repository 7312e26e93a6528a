// File: src/codec.rs
//! Fixed-layout binary form of a [`LanguagePack`].
//!
//! ```text
//! offset 0     word 1   pos byte (row << 4 | col), 16-byte on text, 16-byte off text
//! offset 33    word 2
//! ...
//! offset 1716  word 53
//! offset 1749  interval row 0   carry byte, four word-index bytes
//! ...
//! offset 1814  end
//! ```
//!
//! Text fields are zero padded and always carry a terminator, so an empty
//! string still occupies its full sixteen bytes.
use crate::core::intervals::{IntervalRow, IntervalTable, INTERVAL_ROWS, WORDS_PER_ROW};
use crate::core::pack::LanguagePack;
use crate::core::types::{
    LanguageId, Word, WordText, GRID_COLS, GRID_ROWS, TEXT_FIELD_LEN, WORD_COUNT,
};
use crate::core::word_table::WordTable;
use crate::error::FormatError;

/// Bytes per encoded word.
pub const WORD_RECORD_LEN: usize = 1 + 2 * TEXT_FIELD_LEN;
/// Bytes per encoded interval row.
pub const INTERVAL_RECORD_LEN: usize = 1 + WORDS_PER_ROW;
/// Size of the word block; slot 0 is not stored.
pub const WORD_BLOCK_LEN: usize = (WORD_COUNT - 1) * WORD_RECORD_LEN;
/// Size of every encoded pack.
pub const PACK_SIZE: usize = WORD_BLOCK_LEN + INTERVAL_ROWS * INTERVAL_RECORD_LEN;

/// Encodes `pack` into its fixed 1814-byte layout.
pub fn encode(pack: &LanguagePack) -> [u8; PACK_SIZE] {
    let mut buf = [0u8; PACK_SIZE];

    for ((_, word), record) in pack
        .words()
        .iter()
        .zip(buf[..WORD_BLOCK_LEN].chunks_exact_mut(WORD_RECORD_LEN))
    {
        debug_assert!(word.row < 16 && word.col < 16, "word at ({}, {}) does not fit a nibble", word.row, word.col);
        record[0] = ((word.row & 0x0f) << 4) | (word.col & 0x0f);
        record[1..1 + TEXT_FIELD_LEN].copy_from_slice(word.text_on.as_field());
        record[1 + TEXT_FIELD_LEN..].copy_from_slice(word.text_off.as_field());
    }

    for (row, record) in pack
        .intervals()
        .rows()
        .iter()
        .zip(buf[WORD_BLOCK_LEN..].chunks_exact_mut(INTERVAL_RECORD_LEN))
    {
        record[0] = u8::from(row.hour_carry);
        record[1..].copy_from_slice(&row.words);
    }

    buf
}

/// Decodes a pack, checking sizes and bounds only. Cross references between
/// the interval table and the word table are not checked; see
/// [`LanguagePack::validate`].
pub fn decode(id: LanguageId, bytes: &[u8]) -> Result<LanguagePack, FormatError> {
    if bytes.len() != PACK_SIZE {
        return Err(FormatError::Size {
            expected: PACK_SIZE,
            actual: bytes.len(),
        });
    }
    let (word_block, interval_block) = bytes.split_at(WORD_BLOCK_LEN);

    let mut words = WordTable::new();
    for (offset, record) in word_block.chunks_exact(WORD_RECORD_LEN).enumerate() {
        let index = offset + 1;
        let (row, col) = (record[0] >> 4, record[0] & 0x0f);
        let text_on = read_text(index, &record[1..1 + TEXT_FIELD_LEN])?;
        let text_off = read_text(index, &record[1 + TEXT_FIELD_LEN..])?;
        let word = Word {
            row,
            col,
            text_on,
            text_off,
        };
        // Unused slots encode as all zeros, which is always in bounds.
        if !word.is_blank() && (row >= GRID_ROWS || col >= GRID_COLS) {
            return Err(FormatError::GridPosition { index, row, col });
        }
        words.set(index as u8, word);
    }

    let mut rows = [IntervalRow::EMPTY; INTERVAL_ROWS];
    for (row, (slot, record)) in rows
        .iter_mut()
        .zip(interval_block.chunks_exact(INTERVAL_RECORD_LEN))
        .enumerate()
    {
        let mut indices = [0u8; WORDS_PER_ROW];
        for (position, (&index, target)) in record[1..].iter().zip(indices.iter_mut()).enumerate() {
            if index as usize >= WORD_COUNT {
                return Err(FormatError::WordIndexOutOfRange {
                    row,
                    slot: position,
                    index,
                });
            }
            *target = index;
        }
        *slot = IntervalRow::new(record[0] != 0, indices);
    }

    tracing::debug!(language = %id, words = words.len(), "decoded language pack");
    Ok(LanguagePack::new(id, words, IntervalTable::new(rows)))
}

fn read_text(index: usize, field: &[u8]) -> Result<WordText, FormatError> {
    let field: &[u8; TEXT_FIELD_LEN] = field.try_into().map_err(|_| FormatError::Text {
        index,
        reason: "truncated field",
    })?;
    WordText::from_field(field).map_err(|reason| FormatError::Text { index, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages;

    #[test]
    fn layout_constants_match_the_wire_format() {
        assert_eq!(WORD_RECORD_LEN, 33);
        assert_eq!(WORD_BLOCK_LEN, 1749);
        assert_eq!(PACK_SIZE, 1814);
    }

    #[test]
    fn english_words_land_at_their_offsets() {
        let bytes = encode(&languages::builtin(LanguageId::EnUs));
        // word 3, THREE at (8, 0)
        let three = &bytes[2 * WORD_RECORD_LEN..3 * WORD_RECORD_LEN];
        assert_eq!(three[0], 0x80);
        assert_eq!(&three[1..7], b"THREE\0");
        assert_eq!(&three[17..23], b"three\0");
        // always-on row: IT, IS
        assert_eq!(&bytes[WORD_BLOCK_LEN..WORD_BLOCK_LEN + 5], &[0, 13, 14, 0, 0]);
        // last row carries
        assert_eq!(bytes[PACK_SIZE - 5], 1);
    }

    #[test]
    fn empty_off_text_survives_a_round_trip() {
        let pack = languages::builtin(LanguageId::FrFr);
        let decoded = decode(LanguageId::FrFr, &encode(&pack)).unwrap();
        let heure = decoded.words().get(languages::fr_fr::HEURE).unwrap();
        assert_eq!(heure.text_on.as_str(), "HEURE");
        assert!(heure.text_off.is_empty());
        assert_eq!(decoded, pack);
    }

    #[test]
    fn short_and_long_buffers_are_rejected() {
        let bytes = encode(&languages::builtin(LanguageId::EnUs));
        assert_eq!(
            decode(LanguageId::EnUs, &bytes[..PACK_SIZE - 1]),
            Err(FormatError::Size {
                expected: PACK_SIZE,
                actual: PACK_SIZE - 1
            })
        );
        let mut long = bytes.to_vec();
        long.push(0);
        assert!(matches!(
            decode(LanguageId::EnUs, &long),
            Err(FormatError::Size { .. })
        ));
    }

    #[test]
    fn interval_reference_past_the_table_is_rejected() {
        let mut bytes = encode(&languages::builtin(LanguageId::EnUs));
        // bucket 2, third slot
        bytes[WORD_BLOCK_LEN + 2 * INTERVAL_RECORD_LEN + 3] = 54;
        assert_eq!(
            decode(LanguageId::EnUs, &bytes),
            Err(FormatError::WordIndexOutOfRange {
                row: 2,
                slot: 2,
                index: 54
            })
        );
    }

    #[test]
    fn word_below_the_grid_is_rejected() {
        let mut bytes = encode(&languages::builtin(LanguageId::EnUs));
        bytes[0] = 0x90;
        assert!(matches!(
            decode(LanguageId::EnUs, &bytes),
            Err(FormatError::GridPosition { index: 1, row: 9, col: 0 })
        ));
    }

    #[test]
    fn unterminated_text_is_rejected() {
        let mut bytes = encode(&languages::builtin(LanguageId::EnUs));
        bytes[1..1 + TEXT_FIELD_LEN].fill(b'X');
        assert!(matches!(
            decode(LanguageId::EnUs, &bytes),
            Err(FormatError::Text { index: 1, .. })
        ));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut bytes = encode(&languages::builtin(LanguageId::EnUs));
        bytes[1] = 0xff;
        assert!(matches!(
            decode(LanguageId::EnUs, &bytes),
            Err(FormatError::Text { index: 1, .. })
        ));
    }

    fn pack_with_word_at(row: u8, col: u8) -> LanguagePack {
        let words = WordTable::from_layout(&[(1, Word::new(row, col, "A", "a"))], 27, &[]);
        LanguagePack::new(LanguageId::EnUs, words, IntervalTable::default())
    }

    #[test]
    fn grid_position_packs_into_one_byte() {
        let bytes = encode(&pack_with_word_at(8, 11));
        assert_eq!(bytes[0], 0x8b);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not fit a nibble")]
    fn row_past_a_nibble_trips_the_encoder() {
        encode(&pack_with_word_at(16, 0));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn row_past_a_nibble_does_not_spill_into_the_column() {
        let bytes = encode(&pack_with_word_at(17, 2));
        assert_eq!(bytes[0], 0x12);
    }
}
