use crate::convert::mixed::{mixed_to_hiragana, mixed_to_katakana, mixed_to_romaji};
use crate::convert::{convert_to_all_formats, ConversionOptions};

fn opts() -> ConversionOptions {
    ConversionOptions::default()
}

#[test]
fn each_run_converts_independently() {
    let r = convert_to_all_formats("あイsushi", &opts());
    assert_eq!(r.hiragana, "あいすし");
    assert_eq!(r.katakana, "アイスシ");
    assert_eq!(r.romaji, "aisushi");
}

#[test]
fn target_script_characters_copy_unchanged() {
    assert_eq!(mixed_to_hiragana("あイ", &opts()), "あい");
    assert_eq!(mixed_to_katakana("あイ", &opts()), "アイ");
    assert_eq!(mixed_to_romaji("あイ"), "ai");
}

#[test]
fn roman_runs_feed_the_converter_whole() {
    // "kyo" must stay one phoneme, so the run is extracted before matching.
    assert_eq!(mixed_to_hiragana("アkyou", &opts()), "あきょう");
    assert_eq!(mixed_to_katakana("あkyou", &opts()), "アキョウ");
}

#[test]
fn digits_and_symbols_copy_unchanged() {
    assert_eq!(mixed_to_hiragana("あイ1@", &opts()), "あい1@");
    assert_eq!(mixed_to_katakana("あイ1@", &opts()), "アイ1@");
    assert_eq!(mixed_to_romaji("あイ1@"), "ai1@");
}

#[test]
fn romaji_pass_maps_kana_per_character() {
    // Digraph context is lost at a script boundary: ょ alone has no table
    // entry and passes through.
    assert_eq!(mixed_to_romaji("きょウ"), "kiょu");
    assert_eq!(mixed_to_romaji("キョう"), "kiョu");
}

#[test]
fn kanji_passes_through_every_target() {
    assert_eq!(mixed_to_hiragana("あイ日", &opts()), "あい日");
    assert_eq!(mixed_to_katakana("あイ日", &opts()), "アイ日");
    assert_eq!(mixed_to_romaji("あイ日"), "ai日");
}

#[test]
fn all_formats_dispatches_mixed_input() {
    let r = convert_to_all_formats("コーヒーとmiruku", &opts());
    // Katakana + hiragana と + a roman run: every field is a full-length
    // rendering, not a partial conversion. The prolonged sound mark ー has
    // no table entry and rides along unchanged.
    assert_eq!(r.hiragana, "こーひーとみるく");
    assert_eq!(r.katakana, "コーヒートミルク");
    assert_eq!(r.romaji, "koーhiーtomiruku");
}
