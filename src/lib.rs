//! Conversion engine for Japanese text: hiragana, katakana, and romaji.
//!
//! The crate is a pure library. Callers hand it a string plus
//! [`ConversionOptions`] and get back a [`ConversionResult`] with all three
//! renderings; no I/O, no global mutable state outside the opt-in result
//! cache in [`cache`].

pub mod cache;
pub mod convert;
pub mod detect;
pub mod table;
pub mod unicode;
pub mod validate;

pub use cache::{clear_conversion_cache, optimized_convert_to_all_formats, ConversionCache};
pub use convert::{
    convert_to_all_formats, hiragana_to_katakana, hiragana_to_romaji, katakana_to_hiragana,
    katakana_to_romaji, romaji_to_hiragana, romaji_to_katakana, ConversionOptions,
    ConversionResult,
};
pub use detect::{detect_kana_type, KanaType};
pub use table::{MappingConfigError, MappingTables};
pub use validate::{
    contains_japanese, contains_roman, get_validation_error, is_valid_hiragana, is_valid_katakana,
    is_valid_romaji, sanitize_input, validate_input_for_type,
};
