use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::{is_hiragana, is_katakana};

/// Raw mapping tables as deserialized from TOML, before inverse derivation.
#[derive(Debug, Deserialize)]
pub(super) struct RawMappings {
    pub hiragana_to_romaji: BTreeMap<String, String>,
    pub katakana_to_romaji: BTreeMap<String, String>,
    pub hiragana_to_katakana: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MappingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("invalid key {key:?} in [{table}]: {reason}")]
    InvalidKey {
        table: &'static str,
        key: String,
        reason: &'static str,
    },
    #[error("invalid value {value:?} for key {key:?} in [{table}]: {reason}")]
    InvalidValue {
        table: &'static str,
        key: String,
        value: String,
        reason: &'static str,
    },
    #[error("mapping tables already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into the three forward tables. Duplicate keys within a
/// table are rejected by the TOML parser itself; everything else is checked
/// here so a bad custom table fails at load, not mid-conversion.
pub(super) fn parse_mappings_toml(toml_str: &str) -> Result<RawMappings, MappingConfigError> {
    let raw: RawMappings =
        toml::from_str(toml_str).map_err(|e| MappingConfigError::Parse(e.to_string()))?;

    check_kana_table("hiragana_to_romaji", &raw.hiragana_to_romaji, is_hiragana, 2)?;
    check_kana_table("katakana_to_romaji", &raw.katakana_to_romaji, is_katakana, 3)?;
    check_direct_table(&raw.hiragana_to_katakana)?;

    Ok(raw)
}

/// A kana-to-romaji table: keys are 1..=max_unit kana characters of the given
/// script, values are non-empty ASCII phoneme strings.
fn check_kana_table(
    table: &'static str,
    map: &BTreeMap<String, String>,
    in_script: fn(char) -> bool,
    max_unit: usize,
) -> Result<(), MappingConfigError> {
    if map.is_empty() {
        return Err(MappingConfigError::Empty(table));
    }
    for (key, value) in map {
        let len = key.chars().count();
        if len == 0 || len > max_unit {
            return Err(MappingConfigError::InvalidKey {
                table,
                key: key.clone(),
                reason: "unit length out of range",
            });
        }
        if !key.chars().all(in_script) {
            return Err(MappingConfigError::InvalidKey {
                table,
                key: key.clone(),
                reason: "unit contains characters outside its script block",
            });
        }
        if value.is_empty() || !value.is_ascii() {
            return Err(MappingConfigError::InvalidValue {
                table,
                key: key.clone(),
                value: value.clone(),
                reason: "romaji value must be non-empty ASCII",
            });
        }
    }
    Ok(())
}

/// The direct table is a strict one-character-to-one-character correspondence.
fn check_direct_table(map: &BTreeMap<String, String>) -> Result<(), MappingConfigError> {
    const TABLE: &str = "hiragana_to_katakana";
    if map.is_empty() {
        return Err(MappingConfigError::Empty(TABLE));
    }
    for (key, value) in map {
        if !single_char_of(key, is_hiragana) {
            return Err(MappingConfigError::InvalidKey {
                table: TABLE,
                key: key.clone(),
                reason: "key must be a single hiragana character",
            });
        }
        if !single_char_of(value, is_katakana) {
            return Err(MappingConfigError::InvalidValue {
                table: TABLE,
                key: key.clone(),
                value: value.clone(),
                reason: "value must be a single katakana character",
            });
        }
    }
    Ok(())
}

fn single_char_of(s: &str, in_script: fn(char) -> bool) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if in_script(c))
}
