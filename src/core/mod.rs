// src/core/mod.rs
pub mod engine;
pub mod intervals;
pub mod overlay;
pub mod pack;
pub mod resolver;
pub mod types;
pub mod word_table;
