//! Character-set validation and sanitization per expected script type.
//!
//! Everything here is pure. Invalid input is reported as a value (a bool or
//! a fixed message), never an error: conversion itself accepts anything.

use crate::detect::KanaType;
use crate::unicode::{
    is_hiragana, is_kanji, is_katakana, is_roman, KANA_PUNCTUATION, ROMAJI_PUNCTUATION,
};

fn permitted_hiragana(c: char) -> bool {
    is_hiragana(c) || c.is_whitespace() || KANA_PUNCTUATION.contains(&c)
}

fn permitted_katakana(c: char) -> bool {
    is_katakana(c) || c.is_whitespace() || KANA_PUNCTUATION.contains(&c)
}

fn permitted_romaji(c: char) -> bool {
    is_roman(c) || c.is_whitespace() || ROMAJI_PUNCTUATION.contains(&c)
}

/// The mixed type permits the union of every recognized class, Kanji
/// included (Kanji is never converted, but it is legitimate mixed input).
fn permitted_mixed(c: char) -> bool {
    permitted_hiragana(c) || permitted_katakana(c) || permitted_romaji(c) || is_kanji(c)
}

/// True when the whole string is hiragana plus whitespace and full-width
/// punctuation. The empty string is valid.
pub fn is_valid_hiragana(text: &str) -> bool {
    text.chars().all(permitted_hiragana)
}

/// True when the whole string is katakana plus whitespace and full-width
/// punctuation. The empty string is valid.
pub fn is_valid_katakana(text: &str) -> bool {
    text.chars().all(permitted_katakana)
}

/// True when the whole string is Roman letters plus whitespace and
/// half-width punctuation. The empty string is valid.
pub fn is_valid_romaji(text: &str) -> bool {
    text.chars().all(permitted_romaji)
}

/// Validate `text` against the character class of `expected`. The mixed
/// type accepts any combination.
pub fn validate_input_for_type(text: &str, expected: KanaType) -> bool {
    match expected {
        KanaType::Hiragana => is_valid_hiragana(text),
        KanaType::Katakana => is_valid_katakana(text),
        KanaType::Romaji => is_valid_romaji(text),
        KanaType::Mixed => true,
    }
}

/// Human-readable validation message, or `None` when `text` is blank or
/// valid for `expected`. The mixed type never errors.
pub fn get_validation_error(text: &str, expected: KanaType) -> Option<&'static str> {
    if text.trim().is_empty() || validate_input_for_type(text, expected) {
        return None;
    }
    match expected {
        KanaType::Hiragana => Some("Please enter only Hiragana characters (ひらがな)"),
        KanaType::Katakana => Some("Please enter only Katakana characters (カタカナ)"),
        KanaType::Romaji => Some("Please enter only Roman letters (a-z, A-Z)"),
        KanaType::Mixed => None,
    }
}

/// Strip every character outside the permitted set for `expected`, using the
/// same character classes as validation.
pub fn sanitize_input(text: &str, expected: KanaType) -> String {
    let permitted: fn(char) -> bool = match expected {
        KanaType::Hiragana => permitted_hiragana,
        KanaType::Katakana => permitted_katakana,
        KanaType::Romaji => permitted_romaji,
        KanaType::Mixed => permitted_mixed,
    };
    text.chars().filter(|&c| permitted(c)).collect()
}

/// True when `text` contains any hiragana, katakana, or kanji character.
pub fn contains_japanese(text: &str) -> bool {
    text.chars()
        .any(|c| is_hiragana(c) || is_katakana(c) || is_kanji(c))
}

/// True when `text` contains any Roman letter.
pub fn contains_roman(text: &str) -> bool {
    text.chars().any(is_roman)
}
