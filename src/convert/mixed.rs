//! Mixed-script input: one pass per target script.
//!
//! Each pass walks the input once. Characters already in the target script
//! copy unchanged; characters of the other kana script map through the
//! direct table; a maximal run of ASCII letters is extracted and fed to the
//! romaji converter as one unit, so multi-letter phonemes keep matching
//! across the run. Everything else (digits, symbols) copies unchanged.

use super::{romaji_to_hiragana, romaji_to_katakana, ConversionOptions};
use crate::table::MappingTables;
use crate::unicode::{is_hiragana, is_katakana, is_roman};

/// Extend `i` past the ASCII-letter run starting at `chars[i]` and return
/// the run as a string.
fn take_roman_run(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while *i < chars.len() && is_roman(chars[*i]) {
        *i += 1;
    }
    chars[start..*i].iter().collect()
}

pub(super) fn mixed_to_hiragana(text: &str, options: &ConversionOptions) -> String {
    let tables = MappingTables::global();
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if is_hiragana(c) {
            out.push(c);
            i += 1;
        } else if is_katakana(c) {
            out.push(tables.katakana_to_hiragana(c).unwrap_or(c));
            i += 1;
        } else if is_roman(c) {
            let run = take_roman_run(&chars, &mut i);
            out.push_str(&romaji_to_hiragana(&run, options));
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

pub(super) fn mixed_to_katakana(text: &str, options: &ConversionOptions) -> String {
    let tables = MappingTables::global();
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if is_katakana(c) {
            out.push(c);
            i += 1;
        } else if is_hiragana(c) {
            out.push(tables.hiragana_to_katakana(c).unwrap_or(c));
            i += 1;
        } else if is_roman(c) {
            let run = take_roman_run(&chars, &mut i);
            out.push_str(&romaji_to_katakana(&run, options));
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

/// The romaji pass maps kana per single character: digraph context is lost
/// at a script boundary, so きょ renders as "ki" + pass-through ょ rather
/// than "kyo". Matches the per-run independence of the other two passes.
pub(super) fn mixed_to_romaji(text: &str) -> String {
    let tables = MappingTables::global();
    let mut out = String::with_capacity(text.len());
    let mut unit = [0u8; 4];

    for c in text.chars() {
        if is_roman(c) {
            out.push(c);
        } else if is_hiragana(c) {
            match tables.hiragana_unit(c.encode_utf8(&mut unit)) {
                Some(romaji) => out.push_str(romaji),
                None => out.push(c),
            }
        } else if is_katakana(c) {
            match tables.katakana_unit(c.encode_utf8(&mut unit)) {
                Some(romaji) => out.push_str(romaji),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }

    out
}
