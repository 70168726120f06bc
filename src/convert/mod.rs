//! Directional tokenizing converters and the all-formats entry point.
//!
//! Every converter is a single left-to-right scan that always tries the
//! longest mapping-table unit at the current position before shorter ones.
//! Characters with no table entry at any window length pass through
//! unchanged; malformed input never raises an error.

mod mixed;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detect::{detect_kana_type, KanaType};
use crate::table::MappingTables;
use crate::unicode::{normalize_romaji, KANA_PUNCTUATION, ROMAJI_PUNCTUATION};

/// Conversion behavior knobs, serialized into the result-cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Pass whitespace through unchanged instead of treating it as
    /// potential token content.
    pub preserve_spacing: bool,
    /// Pass the recognized punctuation set through unchanged (full-width
    /// ！？。、 for kana-sourced input, half-width !?.,- for romaji-sourced).
    pub preserve_punctuation: bool,
    /// Reserved. Carried through signatures and the cache key but not
    /// consulted by any conversion pass.
    pub convert_long_vowels: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            preserve_spacing: true,
            preserve_punctuation: true,
            convert_long_vowels: true,
        }
    }
}

/// One input rendered into all three scripts. All fields are always
/// populated together, even though one of them typically equals the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    pub hiragana: String,
    pub katakana: String,
    pub romaji: String,
}

/// The longest-match scan shared by all four tokenizing converters. At each
/// position: preserved whitespace, then preserved punctuation, then table
/// windows from `max_unit` down to one character, then pass-through.
fn scan<'t>(
    text: &str,
    options: &ConversionOptions,
    punctuation: &[char],
    max_unit: usize,
    lookup: impl Fn(&str) -> Option<&'t str>,
) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut unit = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if options.preserve_spacing && c.is_whitespace() {
            out.push(c);
            i += 1;
            continue;
        }
        if options.preserve_punctuation && punctuation.contains(&c) {
            out.push(c);
            i += 1;
            continue;
        }

        let window = max_unit.min(chars.len() - i);
        let mut matched = false;
        for len in (1..=window).rev() {
            unit.clear();
            unit.extend(&chars[i..i + len]);
            if let Some(mapped) = lookup(&unit) {
                out.push_str(mapped);
                i += len;
                matched = true;
                break;
            }
        }
        if !matched {
            out.push(c);
            i += 1;
        }
    }

    out
}

fn scan_kana<'t>(
    text: &str,
    options: &ConversionOptions,
    max_unit: usize,
    lookup: impl Fn(&str) -> Option<&'t str>,
) -> String {
    scan(text, options, KANA_PUNCTUATION, max_unit, lookup)
}

/// Romaji-sourced input is normalized first (trim, lowercase, collapse
/// whitespace runs), so matching is case-insensitive in this direction only.
fn scan_romaji<'t>(
    text: &str,
    options: &ConversionOptions,
    max_unit: usize,
    lookup: impl Fn(&str) -> Option<&'t str>,
) -> String {
    let normalized = normalize_romaji(text);
    scan(&normalized, options, ROMAJI_PUNCTUATION, max_unit, lookup)
}

/// Convert hiragana text to romaji.
pub fn hiragana_to_romaji(text: &str, options: &ConversionOptions) -> String {
    let tables = MappingTables::global();
    scan_kana(text, options, tables.max_hiragana_unit(), |u| {
        tables.hiragana_unit(u)
    })
}

/// Convert katakana text to romaji. Extended digraphs (ファ, トゥ) make this
/// the only direction with a three-character window.
pub fn katakana_to_romaji(text: &str, options: &ConversionOptions) -> String {
    let tables = MappingTables::global();
    scan_kana(text, options, tables.max_katakana_unit(), |u| {
        tables.katakana_unit(u)
    })
}

/// Convert romaji text to hiragana.
pub fn romaji_to_hiragana(text: &str, options: &ConversionOptions) -> String {
    let tables = MappingTables::global();
    scan_romaji(text, options, tables.max_romaji_unit(), |u| {
        tables.romaji_to_hiragana(u)
    })
}

/// Convert romaji text to katakana.
pub fn romaji_to_katakana(text: &str, options: &ConversionOptions) -> String {
    let tables = MappingTables::global();
    scan_romaji(text, options, tables.max_romaji_unit(), |u| {
        tables.romaji_to_katakana(u)
    })
}

/// Convert hiragana to katakana. The scripts are in one-to-one grapheme
/// correspondence, so this is a per-character substitution; unmapped
/// characters (ー, ASCII, punctuation) pass through unchanged.
pub fn hiragana_to_katakana(text: &str) -> String {
    let tables = MappingTables::global();
    text.chars()
        .map(|c| tables.hiragana_to_katakana(c).unwrap_or(c))
        .collect()
}

/// Convert katakana to hiragana. Per-character, like [`hiragana_to_katakana`].
pub fn katakana_to_hiragana(text: &str) -> String {
    let tables = MappingTables::global();
    text.chars()
        .map(|c| tables.katakana_to_hiragana(c).unwrap_or(c))
        .collect()
}

/// Render `text` into all three scripts. Pure and uncached; the cached
/// variant is [`crate::cache::optimized_convert_to_all_formats`].
///
/// Blank input returns a result with all three fields empty. The detected
/// script's own field is the input copied verbatim.
pub fn convert_to_all_formats(text: &str, options: &ConversionOptions) -> ConversionResult {
    if text.trim().is_empty() {
        return ConversionResult::default();
    }

    let input_type = detect_kana_type(text);
    debug!(%input_type, chars = text.chars().count(), "converting to all formats");

    match input_type {
        KanaType::Hiragana => ConversionResult {
            hiragana: text.to_string(),
            katakana: hiragana_to_katakana(text),
            romaji: hiragana_to_romaji(text, options),
        },
        KanaType::Katakana => ConversionResult {
            hiragana: katakana_to_hiragana(text),
            katakana: text.to_string(),
            romaji: katakana_to_romaji(text, options),
        },
        KanaType::Romaji => ConversionResult {
            hiragana: romaji_to_hiragana(text, options),
            katakana: romaji_to_katakana(text, options),
            romaji: text.to_string(),
        },
        KanaType::Mixed => ConversionResult {
            hiragana: mixed::mixed_to_hiragana(text, options),
            katakana: mixed::mixed_to_katakana(text, options),
            romaji: mixed::mixed_to_romaji(text),
        },
    }
}
