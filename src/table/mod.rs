//! Bidirectional mapping tables between kana script units and romaji
//! phoneme strings.
//!
//! The three forward tables ship as embedded TOML and are parsed at first
//! use; the three inverse tables are derived from them at construction time.
//! Inversion is lossy: several kana units may share one phoneme string
//! (ず and づ both map to "zu"). Forward tables iterate in sorted key order,
//! and the last entry visited wins as the canonical reverse mapping, so only
//! one kana is recoverable per phoneme string.

mod config;

pub use config::MappingConfigError;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use config::{parse_mappings_toml, RawMappings};

pub const DEFAULT_MAPPINGS_TOML: &str = include_str!("default_mappings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

pub struct MappingTables {
    hiragana_to_romaji: BTreeMap<String, String>,
    katakana_to_romaji: BTreeMap<String, String>,
    romaji_to_hiragana_map: HashMap<String, String>,
    romaji_to_katakana_map: HashMap<String, String>,
    hira_to_kata: HashMap<char, char>,
    kata_to_hira: HashMap<char, char>,
    max_hiragana_unit: usize,
    max_katakana_unit: usize,
    max_romaji_unit: usize,
}

impl MappingTables {
    /// Build a standalone table set from TOML text. Tests and embedders with
    /// custom tables use this; most callers go through [`MappingTables::global`].
    pub fn from_toml_str(toml_str: &str) -> Result<Self, MappingConfigError> {
        Ok(Self::from_raw(parse_mappings_toml(toml_str)?))
    }

    /// Set custom mapping TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), MappingConfigError> {
        // Validate eagerly
        parse_mappings_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| MappingConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static MappingTables {
        static INSTANCE: OnceLock<MappingTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_MAPPINGS_TOML);
            let raw = parse_mappings_toml(toml_str).expect("mapping TOML must be valid");
            Self::from_raw(raw)
        })
    }

    fn from_raw(raw: RawMappings) -> Self {
        let mut romaji_to_hiragana_map = HashMap::new();
        let mut max_romaji_unit = 1;
        for (kana, romaji) in &raw.hiragana_to_romaji {
            max_romaji_unit = max_romaji_unit.max(romaji.chars().count());
            romaji_to_hiragana_map.insert(romaji.clone(), kana.clone());
        }

        let mut romaji_to_katakana_map = HashMap::new();
        for (kana, romaji) in &raw.katakana_to_romaji {
            max_romaji_unit = max_romaji_unit.max(romaji.chars().count());
            romaji_to_katakana_map.insert(romaji.clone(), kana.clone());
        }

        let mut hira_to_kata = HashMap::new();
        let mut kata_to_hira = HashMap::new();
        for (hira, kata) in &raw.hiragana_to_katakana {
            // Single-char keys and values are enforced at parse time.
            let h = hira.chars().next().expect("validated direct key");
            let k = kata.chars().next().expect("validated direct value");
            hira_to_kata.insert(h, k);
            kata_to_hira.insert(k, h);
        }

        let max_hiragana_unit = raw
            .hiragana_to_romaji
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(1);
        let max_katakana_unit = raw
            .katakana_to_romaji
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(1);

        Self {
            hiragana_to_romaji: raw.hiragana_to_romaji,
            katakana_to_romaji: raw.katakana_to_romaji,
            romaji_to_hiragana_map,
            romaji_to_katakana_map,
            hira_to_kata,
            kata_to_hira,
            max_hiragana_unit,
            max_katakana_unit,
            max_romaji_unit,
        }
    }

    /// Romaji for a hiragana unit (single character or digraph).
    pub fn hiragana_unit(&self, unit: &str) -> Option<&str> {
        self.hiragana_to_romaji.get(unit).map(String::as_str)
    }

    /// Romaji for a katakana unit (single character, digraph, or extended digraph).
    pub fn katakana_unit(&self, unit: &str) -> Option<&str> {
        self.katakana_to_romaji.get(unit).map(String::as_str)
    }

    /// Canonical hiragana for a phoneme string, if one is recoverable.
    pub fn romaji_to_hiragana(&self, phoneme: &str) -> Option<&str> {
        self.romaji_to_hiragana_map.get(phoneme).map(String::as_str)
    }

    /// Canonical katakana for a phoneme string, if one is recoverable.
    pub fn romaji_to_katakana(&self, phoneme: &str) -> Option<&str> {
        self.romaji_to_katakana_map.get(phoneme).map(String::as_str)
    }

    pub fn hiragana_to_katakana(&self, c: char) -> Option<char> {
        self.hira_to_kata.get(&c).copied()
    }

    pub fn katakana_to_hiragana(&self, c: char) -> Option<char> {
        self.kata_to_hira.get(&c).copied()
    }

    /// Longest hiragana unit in the forward table, in characters (2 for the
    /// shipped tables).
    pub fn max_hiragana_unit(&self) -> usize {
        self.max_hiragana_unit
    }

    /// Longest katakana unit in the forward table, in characters (3 for the
    /// shipped tables, from the extended digraphs).
    pub fn max_katakana_unit(&self) -> usize {
        self.max_katakana_unit
    }

    /// Longest phoneme string across both reverse tables, in characters.
    /// Bounds the romaji scan window.
    pub fn max_romaji_unit(&self) -> usize {
        self.max_romaji_unit
    }

    #[cfg(test)]
    pub(crate) fn direct_pair_chars(&self) -> Vec<char> {
        self.hira_to_kata.keys().copied().collect()
    }
}
