// File: src/persistence.rs
use crate::codec;
use crate::core::pack::LanguagePack;
use crate::core::types::LanguageId;
use crate::error::Result;
use crate::settings::Settings;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name a packed language is stored under, e.g. `chronocode.de_DE.bin`.
pub fn pack_file_name(id: LanguageId) -> String {
    format!("chronocode.{}.bin", id.code())
}

/// Writes `bytes` next to `path` and renames it into place, so readers see
/// either the old file or the complete new one.
fn write_atomically(path: &Path, write: impl FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<()>) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    write_atomically(path, |writer| Ok(bincode::serialize_into(writer, settings)?))?;
    tracing::debug!(path = %path.display(), "saved settings");
    Ok(())
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}

/// Loads settings, falling back to the defaults when the file is missing or
/// unreadable.
pub fn load_settings_or_default(path: &Path) -> Settings {
    match load_settings(path) {
        Ok(settings) => settings,
        Err(crate::error::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no saved settings, using defaults");
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "discarding unreadable settings");
            Settings::default()
        }
    }
}

/// Encodes `pack` into `dir` and returns the path written.
pub fn write_pack_file(pack: &LanguagePack, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(pack_file_name(pack.id()));
    let bytes = codec::encode(pack);
    write_atomically(&path, |writer| Ok(writer.write_all(&bytes)?))?;
    tracing::info!(language = %pack.id(), path = %path.display(), bytes = bytes.len(), "wrote language pack");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages;
    use crate::settings::{ALL_CAPS, TWO_MIN_DOTS};
    use tempfile::tempdir;

    #[test]
    fn settings_survive_a_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.bin");
        let settings = Settings::from_flags(ALL_CAPS | TWO_MIN_DOTS, LanguageId::NlBe);

        save_settings(&settings, &path).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn missing_or_corrupt_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.bin");
        assert_eq!(load_settings_or_default(&path), Settings::default());

        // language id 200 does not exist
        fs::write(&path, [1u8, 0, 0, 200]).unwrap();
        assert!(load_settings(&path).is_err());
        assert_eq!(load_settings_or_default(&path), Settings::default());
    }

    #[test]
    fn pack_files_hold_exactly_one_encoded_pack() {
        let dir = tempdir().unwrap();
        let pack = languages::builtin(LanguageId::DaDk);
        let path = write_pack_file(&pack, dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), "chronocode.da_DK.bin");
        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len(), codec::PACK_SIZE);
        assert_eq!(codec::decode(LanguageId::DaDk, &bytes).unwrap(), pack);
    }
}
