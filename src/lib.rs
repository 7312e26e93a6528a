// src/lib.rs

pub mod c_api;
pub mod codec;
pub mod core;
pub mod error;
pub mod languages;
pub mod logging;
pub mod persistence;
pub mod render;
pub mod settings;

pub use crate::core::engine::{BuiltinPacks, DirectoryPacks, PackSource, WatchFace};
pub use crate::core::pack::LanguagePack;
pub use crate::core::resolver::{ActivationSet, PhraseResolver, ResolveOptions, WordSet};
pub use crate::core::types::{LanguageId, Word, WordIndex};
pub use crate::error::{Error, FormatError, Result};
pub use crate::settings::Settings;
