// File: src/error.rs
use thiserror::Error;

/// Problems with the fixed-size binary pack layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("pack buffer is {actual} bytes, expected {expected}")]
    Size { expected: usize, actual: usize },
    #[error("interval row {row} slot {slot} references word {index}, valid range is 0..=53")]
    WordIndexOutOfRange { row: usize, slot: usize, index: u8 },
    #[error("word {index} sits at ({row}, {col}), outside the 9x12 grid")]
    GridPosition { index: usize, row: u8, col: u8 },
    #[error("word {index} has unreadable text: {reason}")]
    Text { index: usize, reason: &'static str },
    #[error("word text is {len} bytes, at most 15 fit in a fixed-width field")]
    TextTooLong { len: usize },
    #[error("word text has a NUL byte at offset {offset}, which would end the field early")]
    InteriorNul { offset: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed language pack: {0}")]
    Format(#[from] FormatError),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("interval row {row} references word {index} which is outside the word table")]
    IndexOutOfRange { row: usize, index: u8 },
    #[error("invalid language pack: {0}")]
    Invalid(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("settings store: {0}")]
    Settings(#[from] bincode::Error),
    #[error("settings sync message: {0}")]
    Sync(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
