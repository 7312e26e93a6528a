// File: src/render.rs
//! Display-side collaborators and a character-level model of the square.
use crate::core::pack::LanguagePack;
use crate::core::resolver::WordSet;
use crate::core::types::{WordIndex, GRID_COLS, GRID_ROWS};

/// Receives per-word state after every resolution.
pub trait WordRenderer {
    /// `index` is 1..=53.
    fn set_word_state(&mut self, index: WordIndex, on: bool);
}

/// Receives the minutes past the last five-minute mark.
pub trait MinuteIndicator {
    fn set_minute_offset(&mut self, offset: u8);
}

/// Which corner shows the minute dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// Offsets 1..=4 walk clockwise from the top-left corner; 0 (and anything
    /// out of range) shows no dot.
    pub fn for_offset(offset: u8) -> Option<Corner> {
        match offset {
            1 => Some(Corner::TopLeft),
            2 => Some(Corner::TopRight),
            3 => Some(Corner::BottomRight),
            4 => Some(Corner::BottomLeft),
            _ => None,
        }
    }
}

const ROWS: usize = GRID_ROWS as usize;
const COLS: usize = GRID_COLS as usize;

/// The 9x12 character square as it would appear on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCanvas {
    cells: [[char; COLS]; ROWS],
    lit: [[bool; COLS]; ROWS],
}

impl Default for GridCanvas {
    fn default() -> Self {
        Self {
            cells: [[' '; COLS]; ROWS],
            lit: [[false; COLS]; ROWS],
        }
    }
}

impl GridCanvas {
    /// Draws every word of `pack` in index order. Spaces are transparent, so
    /// words that share cells can each contribute their own letters, and a
    /// dark glyph never covers a lit one.
    pub fn compose(pack: &LanguagePack, active: &WordSet, all_caps: bool) -> Self {
        let mut canvas = Self::default();
        for (index, word) in pack.words().iter() {
            if word.is_blank() {
                continue;
            }
            let on = active.contains(index);
            let text = word.display_text(on, all_caps);
            let row = word.row as usize;
            for (offset, ch) in text.chars().enumerate() {
                let col = word.col as usize + offset;
                if ch == ' ' || row >= ROWS || col >= COLS {
                    continue;
                }
                if !on && canvas.lit[row][col] {
                    continue;
                }
                canvas.cells[row][col] = ch;
                canvas.lit[row][col] = on;
            }
        }
        canvas
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<(char, bool)> {
        let ch = *self.cells.get(row)?.get(col)?;
        Some((ch, self.lit[row][col]))
    }

    /// One string per grid row.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }

    /// The lit runs in reading order, separated by single spaces. Lit words
    /// that touch on the grid come out as one run.
    pub fn lit_text(&self) -> String {
        let mut runs: Vec<String> = Vec::new();
        for (cells, lit) in self.cells.iter().zip(self.lit.iter()) {
            let mut run = String::new();
            for (&ch, &on) in cells.iter().zip(lit.iter()) {
                if on {
                    run.push(ch);
                } else if !run.is_empty() {
                    runs.push(std::mem::take(&mut run));
                }
            }
            if !run.is_empty() {
                runs.push(run);
            }
        }
        runs.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::PhraseResolver;
    use crate::core::types::LanguageId;
    use crate::languages;

    fn sentence(id: LanguageId, hour: u8, minute: u8) -> String {
        let pack = languages::builtin(id);
        let resolved = PhraseResolver::default().resolve(&pack, hour, minute);
        GridCanvas::compose(&pack, &resolved.active, false).lit_text()
    }

    #[test]
    fn corners_walk_clockwise() {
        assert_eq!(Corner::for_offset(0), None);
        assert_eq!(Corner::for_offset(1), Some(Corner::TopLeft));
        assert_eq!(Corner::for_offset(2), Some(Corner::TopRight));
        assert_eq!(Corner::for_offset(3), Some(Corner::BottomRight));
        assert_eq!(Corner::for_offset(4), Some(Corner::BottomLeft));
        assert_eq!(Corner::for_offset(5), None);
    }

    #[test]
    fn english_square_reads_as_a_sentence() {
        assert_eq!(sentence(LanguageId::EnUs, 14, 47), "IT IS A QUARTER TO THREE");
        assert_eq!(sentence(LanguageId::EnUs, 9, 0), "IT IS NINE OCLOCK");
    }

    #[test]
    fn english_rows_fill_the_square() {
        let pack = languages::builtin(LanguageId::EnUs);
        let canvas = GridCanvas::compose(&pack, &WordSet::new(), true);
        let rows: Vec<String> = canvas.rows().collect();
        assert_eq!(rows[0], "ITZISAPEBBLE");
        assert_eq!(rows[8], "THREEHOCLOCK");
        assert!(rows.iter().all(|row| !row.contains(' ')));
    }

    #[test]
    fn overlapping_words_share_cells() {
        assert_eq!(sentence(LanguageId::EsEs, 14, 0), "SON LAS DOS");
        assert_eq!(sentence(LanguageId::EsEs, 1, 5), "ES LA UNA Y CINCO");
        assert_eq!(sentence(LanguageId::FrFr, 13, 0), "IL EST UNE HEURE");
        assert_eq!(sentence(LanguageId::FrFr, 2, 0), "IL EST DEUX HEURES");
    }

    #[test]
    fn portuguese_hours_are_spliced_together() {
        assert_eq!(sentence(LanguageId::PtPt, 7, 0), "SÃO SETE");
        assert_eq!(sentence(LanguageId::PtPt, 4, 0), "SÃO QUATRO");
        assert_eq!(sentence(LanguageId::PtPt, 12, 0), "SÃO DOZE");
        // OITO runs down a column, one lit cell per row
        assert_eq!(sentence(LanguageId::PtPt, 8, 0), "SÃO O I T O");
    }

    #[test]
    fn dark_words_are_lowercase_unless_all_caps() {
        let pack = languages::builtin(LanguageId::EnUs);
        let resolved = PhraseResolver::default().resolve(&pack, 9, 0);
        let canvas = GridCanvas::compose(&pack, &resolved.active, false);
        assert_eq!(canvas.cell(0, 0), Some(('I', true)));
        assert_eq!(canvas.cell(5, 0), Some(('o', false)));
        assert_eq!(canvas.cell(9, 0), None);
    }
}
