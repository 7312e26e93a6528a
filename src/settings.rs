// File: src/settings.rs
use crate::core::resolver::ResolveOptions;
use crate::core::types::LanguageId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Dark words are drawn with their lit spelling.
pub const ALL_CAPS: u8 = 1 << 0;
/// Light text on a dark square becomes dark text on a light one.
pub const INVERTED: u8 = 1 << 1;
/// Phrases follow the nearest five-minute mark instead of the last one passed.
pub const TWO_MIN_DOTS: u8 = 1 << 2;

/// Keys of the per-value sync tuples sent by the phone.
pub const SYNC_KEY_ALL_CAPS: u32 = 0;
pub const SYNC_KEY_INVERTED: u32 = 1;
pub const SYNC_KEY_LANGUAGE: u32 = 2;
pub const SYNC_KEY_TWO_MIN_DOTS: u32 = 3;

/// Display options and the active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub all_caps_when_off: bool,
    pub inverted_colors: bool,
    pub fine_grained_minute_buckets: bool,
    pub language: LanguageId,
}

impl Settings {
    /// The option bits in the watch's single settings byte.
    pub fn to_flags(&self) -> u8 {
        let mut flags = 0;
        if self.all_caps_when_off {
            flags |= ALL_CAPS;
        }
        if self.inverted_colors {
            flags |= INVERTED;
        }
        if self.fine_grained_minute_buckets {
            flags |= TWO_MIN_DOTS;
        }
        flags
    }

    /// Unknown bits are ignored.
    pub fn from_flags(flags: u8, language: LanguageId) -> Self {
        Self {
            all_caps_when_off: flags & ALL_CAPS != 0,
            inverted_colors: flags & INVERTED != 0,
            fine_grained_minute_buckets: flags & TWO_MIN_DOTS != 0,
            language,
        }
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            fine_grained_buckets: self.fine_grained_minute_buckets,
        }
    }

    /// Merges the keys present in `update`.
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(all_caps) = update.all_caps {
            self.all_caps_when_off = all_caps;
        }
        if let Some(inverted) = update.inverted {
            self.inverted_colors = inverted;
        }
        if let Some(two_min_dots) = update.two_min_dots {
            self.fine_grained_minute_buckets = two_min_dots;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
    }

    /// Applies one sync tuple. Any non-zero value switches a flag on.
    /// Unknown keys are logged and skipped.
    pub fn apply_tuple(&mut self, key: u32, value: u8) -> Result<()> {
        match key {
            SYNC_KEY_ALL_CAPS => self.all_caps_when_off = value != 0,
            SYNC_KEY_INVERTED => self.inverted_colors = value != 0,
            SYNC_KEY_LANGUAGE => self.language = LanguageId::from_u8(value)?,
            SYNC_KEY_TWO_MIN_DOTS => self.fine_grained_minute_buckets = value != 0,
            _ => tracing::warn!(key, value, "ignoring unknown settings key"),
        }
        Ok(())
    }
}

/// A partial settings change as sent by the configuration page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsUpdate {
    pub all_caps: Option<bool>,
    pub inverted: Option<bool>,
    pub two_min_dots: Option<bool>,
    pub language: Option<LanguageId>,
}

/// Flags arrive as JSON booleans or as 0/1.
#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Int(u64),
}

impl From<FlagValue> for bool {
    fn from(value: FlagValue) -> bool {
        match value {
            FlagValue::Bool(b) => b,
            FlagValue::Int(n) => n != 0,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LanguageValue {
    Id(u64),
    Code(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUpdate {
    all_caps: Option<FlagValue>,
    inverted: Option<FlagValue>,
    two_min_dots: Option<FlagValue>,
    language: Option<LanguageValue>,
}

impl SettingsUpdate {
    /// Parses a JSON object such as `{"allCaps": 1, "language": 2}`.
    /// Unknown keys are ignored; an unknown language rejects the whole update.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawUpdate = serde_json::from_str(json)?;
        let language = match raw.language {
            None => None,
            Some(LanguageValue::Id(id)) => {
                let id = u8::try_from(id).map_err(|_| Error::UnknownLanguage(id.to_string()))?;
                Some(LanguageId::from_u8(id)?)
            }
            Some(LanguageValue::Code(code)) => Some(LanguageId::from_code(&code)?),
        };
        Ok(Self {
            all_caps: raw.all_caps.map(bool::from),
            inverted: raw.inverted.map(bool::from),
            two_min_dots: raw.two_min_dots.map(bool::from),
            language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_round_trip() {
        for flags in 0..8u8 {
            let settings = Settings::from_flags(flags, LanguageId::SvSe);
            assert_eq!(settings.to_flags(), flags);
        }
        let settings = Settings::from_flags(ALL_CAPS | 0x80, LanguageId::EnUs);
        assert!(settings.all_caps_when_off);
        assert_eq!(settings.to_flags(), ALL_CAPS);
    }

    #[test]
    fn json_update_accepts_bools_and_integers() {
        let update = SettingsUpdate::from_json(r#"{"allCaps": 1, "inverted": false, "language": 2}"#)
            .unwrap();
        let mut settings = Settings {
            inverted_colors: true,
            ..Settings::default()
        };
        settings.apply(&update);
        assert!(settings.all_caps_when_off);
        assert!(!settings.inverted_colors);
        assert!(!settings.fine_grained_minute_buckets);
        assert_eq!(settings.language, LanguageId::DeDe);
    }

    #[test]
    fn missing_keys_leave_settings_alone() {
        let update = SettingsUpdate::from_json(r#"{"twoMinDots": true, "unrelated": 3}"#).unwrap();
        let mut settings = Settings::from_flags(ALL_CAPS, LanguageId::ItIt);
        settings.apply(&update);
        assert_eq!(settings.to_flags(), ALL_CAPS | TWO_MIN_DOTS);
        assert_eq!(settings.language, LanguageId::ItIt);
    }

    #[test]
    fn language_may_be_a_code() {
        let update = SettingsUpdate::from_json(r#"{"language": "nb_NO"}"#).unwrap();
        assert_eq!(update.language, Some(LanguageId::NbNo));
    }

    #[test]
    fn unknown_language_rejects_the_update() {
        assert!(matches!(
            SettingsUpdate::from_json(r#"{"allCaps": 1, "language": 42}"#),
            Err(Error::UnknownLanguage(_))
        ));
        assert!(matches!(
            SettingsUpdate::from_json(r#"{"language": 300}"#),
            Err(Error::UnknownLanguage(_))
        ));
        assert!(matches!(
            SettingsUpdate::from_json("not json"),
            Err(Error::Sync(_))
        ));
    }

    #[test]
    fn sync_tuples_update_one_value_each() {
        let mut settings = Settings::default();
        settings.apply_tuple(SYNC_KEY_INVERTED, 1).unwrap();
        settings.apply_tuple(SYNC_KEY_LANGUAGE, 9).unwrap();
        settings.apply_tuple(SYNC_KEY_TWO_MIN_DOTS, 7).unwrap();
        settings.apply_tuple(99, 1).unwrap();
        assert_eq!(settings.to_flags(), INVERTED | TWO_MIN_DOTS);
        assert_eq!(settings.language, LanguageId::PtPt);

        assert!(settings.apply_tuple(SYNC_KEY_LANGUAGE, 11).is_err());
        assert_eq!(settings.language, LanguageId::PtPt);
    }
}
