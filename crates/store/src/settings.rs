//! User settings: provider credential and language preference.

use std::str::FromStr;

use crate::error::StoreError;
use crate::kv::{keys, KvStore};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
    Es,
    Fr,
    De,
    Ja,
    Ko,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Ja => "ja",
            Language::Ko => "ko",
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "de" => Ok(Language::De),
            "ja" => Ok(Language::Ja),
            "ko" => Ok(Language::Ko),
            _ => Err(()),
        }
    }
}

/// Stateless repository for user settings over the [`KvStore`] port.
pub struct SettingsStore;

impl SettingsStore {
    /// The stored provider credential, if any. Blank values read as absent.
    pub fn api_key(kv: &impl KvStore) -> Result<Option<String>, StoreError> {
        Ok(kv
            .get(keys::API_KEY)?
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty()))
    }

    /// Store the provider credential (plain text, user-supplied).
    pub fn set_api_key(kv: &impl KvStore, key: &str) -> Result<(), StoreError> {
        kv.set(keys::API_KEY, key)
    }

    /// Forget the stored credential.
    pub fn clear_api_key(kv: &impl KvStore) -> Result<(), StoreError> {
        kv.delete(keys::API_KEY)
    }

    /// The language preference. Missing or unrecognized values fall back to
    /// English, mirroring the front end's behaviour.
    pub fn language(kv: &impl KvStore) -> Result<Language, StoreError> {
        let stored = kv.get(keys::LANGUAGE)?;
        Ok(stored
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default())
    }

    /// Persist the language preference.
    pub fn set_language(kv: &impl KvStore, language: Language) -> Result<(), StoreError> {
        kv.set(keys::LANGUAGE, language.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKvStore;

    #[test]
    fn api_key_round_trips() {
        let kv = MemoryKvStore::new();
        assert_eq!(SettingsStore::api_key(&kv).unwrap(), None);

        SettingsStore::set_api_key(&kv, "r8_secret").unwrap();
        assert_eq!(
            SettingsStore::api_key(&kv).unwrap().as_deref(),
            Some("r8_secret")
        );

        SettingsStore::clear_api_key(&kv).unwrap();
        assert_eq!(SettingsStore::api_key(&kv).unwrap(), None);
    }

    #[test]
    fn blank_api_key_reads_as_absent() {
        let kv = MemoryKvStore::new();
        SettingsStore::set_api_key(&kv, "   ").unwrap();
        assert_eq!(SettingsStore::api_key(&kv).unwrap(), None);
    }

    #[test]
    fn language_defaults_to_english() {
        let kv = MemoryKvStore::new();
        assert_eq!(SettingsStore::language(&kv).unwrap(), Language::En);
    }

    #[test]
    fn language_round_trips() {
        let kv = MemoryKvStore::new();
        SettingsStore::set_language(&kv, Language::Ja).unwrap();
        assert_eq!(SettingsStore::language(&kv).unwrap(), Language::Ja);
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let kv = MemoryKvStore::new();
        kv.set(keys::LANGUAGE, "tlh").unwrap();
        assert_eq!(SettingsStore::language(&kv).unwrap(), Language::En);
    }
}
