// src/core/engine.rs
use crate::codec;
use crate::core::pack::LanguagePack;
use crate::core::resolver::{ActivationSet, PhraseResolver};
use crate::core::types::{LanguageId, WordIndex, WORD_COUNT};
use crate::error::{Error, Result};
use crate::languages;
use crate::persistence::pack_file_name;
use crate::render::{MinuteIndicator, WordRenderer};
use crate::settings::Settings;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Supplies encoded packs by language.
pub trait PackSource {
    /// Fails with [`Error::UnknownLanguage`] when there is nothing for `id`.
    fn load(&self, id: LanguageId) -> Result<Vec<u8>>;
}

/// The tables compiled into the crate, run through the encoder so they take
/// the same path as packs read from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPacks;

impl PackSource for BuiltinPacks {
    fn load(&self, id: LanguageId) -> Result<Vec<u8>> {
        Ok(codec::encode(&languages::builtin(id)).to_vec())
    }
}

/// Reads `chronocode.<code>.bin` files written by the packer.
#[derive(Debug, Clone)]
pub struct DirectoryPacks {
    dir: PathBuf,
}

impl DirectoryPacks {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PackSource for DirectoryPacks {
    fn load(&self, id: LanguageId) -> Result<Vec<u8>> {
        let path = self.dir.join(pack_file_name(id));
        fs::read(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::UnknownLanguage(id.code().to_string()),
            _ => Error::Io(e),
        })
    }
}

fn load_pack(source: &dyn PackSource, id: LanguageId) -> Result<LanguagePack> {
    let bytes = source.load(id)?;
    Ok(codec::decode(id, &bytes)?)
}

/// The running watchface: the active pack and settings, nothing global.
pub struct WatchFace {
    pack: Arc<LanguagePack>,
    settings: Settings,
    resolver: PhraseResolver,
}

impl WatchFace {
    /// Installs the pack for `settings.language`, falling back to the default
    /// language when it can't be loaded.
    pub fn new(settings: Settings, source: &dyn PackSource) -> Self {
        let pack = match load_pack(source, settings.language) {
            Ok(pack) => pack,
            Err(e) => {
                tracing::warn!(language = %settings.language, error = %e, "falling back to the default language");
                default_pack(source)
            }
        };
        let mut face = Self {
            pack: Arc::new(pack),
            settings,
            resolver: PhraseResolver::new(settings.resolve_options()),
        };
        face.settings.language = face.pack.id();
        tracing::debug!(language = %face.pack.id(), "watchface ready");
        face
    }

    pub fn pack(&self) -> Arc<LanguagePack> {
        Arc::clone(&self.pack)
    }

    pub fn language(&self) -> LanguageId {
        self.pack.id()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the active pack. The new pack is decoded in full before it is
    /// published, so a failed load never leaves a half-switched face:
    /// malformed data keeps the current pack, a missing language installs the
    /// default one. Either way the error is returned.
    pub fn set_language(&mut self, id: LanguageId, source: &dyn PackSource) -> Result<()> {
        match load_pack(source, id) {
            Ok(pack) => {
                self.install(pack);
                Ok(())
            }
            Err(Error::UnknownLanguage(name)) => {
                tracing::warn!(language = %name, "unknown language, installing the default");
                self.install(default_pack(source));
                Err(Error::UnknownLanguage(name))
            }
            Err(e) => {
                tracing::warn!(language = %id, error = %e, "keeping {} after a failed load", self.pack.id());
                Err(e)
            }
        }
    }

    /// Adopts new settings, reloading the pack only when the language changed.
    pub fn apply_settings(&mut self, settings: Settings, source: &dyn PackSource) -> Result<()> {
        let previous_language = self.pack.id();
        self.settings = settings;
        self.resolver = PhraseResolver::new(settings.resolve_options());
        let result = if settings.language != previous_language {
            self.set_language(settings.language, source)
        } else {
            Ok(())
        };
        self.settings.language = self.pack.id();
        result
    }

    pub fn resolve(&self, hour: u8, minute: u8) -> ActivationSet {
        self.resolver.resolve(&self.pack, hour, minute)
    }

    /// Resolves the time and pushes the result to the display: one call per
    /// word slot 1..=53, then the minute offset.
    pub fn update(
        &self,
        hour: u8,
        minute: u8,
        renderer: &mut impl WordRenderer,
        indicator: &mut impl MinuteIndicator,
    ) -> ActivationSet {
        let resolved = self.resolve(hour, minute);
        for index in 1..WORD_COUNT as WordIndex {
            renderer.set_word_state(index, resolved.active.contains(index));
        }
        indicator.set_minute_offset(resolved.minute_offset);
        resolved
    }

    fn install(&mut self, pack: LanguagePack) {
        tracing::debug!(from = %self.pack.id(), to = %pack.id(), "switching language pack");
        self.pack = Arc::new(pack);
        self.settings.language = self.pack.id();
    }
}

fn default_pack(source: &dyn PackSource) -> LanguagePack {
    let id = LanguageId::default();
    load_pack(source, id).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "default pack unavailable from source, using the compiled-in table");
        languages::builtin(id)
    })
}
