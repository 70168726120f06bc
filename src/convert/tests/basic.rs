use crate::convert::{
    convert_to_all_formats, hiragana_to_katakana, hiragana_to_romaji, katakana_to_hiragana,
    katakana_to_romaji, romaji_to_hiragana, romaji_to_katakana, ConversionOptions,
    ConversionResult,
};

fn opts() -> ConversionOptions {
    ConversionOptions::default()
}

#[test]
fn hiragana_to_romaji_basic() {
    assert_eq!(hiragana_to_romaji("こんにちは", &opts()), "konnichiha");
    assert_eq!(hiragana_to_romaji("ありがとう", &opts()), "arigatou");
    assert_eq!(hiragana_to_romaji("", &opts()), "");
}

#[test]
fn hiragana_digraph_takes_priority() {
    // きょ must match as one unit before き would.
    assert_eq!(hiragana_to_romaji("きょう", &opts()), "kyou");
    assert_eq!(hiragana_to_romaji("しゃしん", &opts()), "shashin");
    assert_eq!(hiragana_to_romaji("りょこう", &opts()), "ryokou");
}

#[test]
fn hiragana_sokuon_maps_like_tsu() {
    // っ carries no gemination logic; it maps through the table like つ.
    assert_eq!(hiragana_to_romaji("きって", &opts()), "kitsute");
}

#[test]
fn katakana_to_romaji_basic() {
    assert_eq!(katakana_to_romaji("コンニチハ", &opts()), "konnichiha");
    assert_eq!(katakana_to_romaji("キョウ", &opts()), "kyou");
}

#[test]
fn katakana_extended_digraphs() {
    assert_eq!(katakana_to_romaji("ファイト", &opts()), "faito");
    assert_eq!(katakana_to_romaji("ディナー", &opts()), "dinaー");
    assert_eq!(katakana_to_romaji("ウォッカ", &opts()), "wotsuka");
    assert_eq!(katakana_to_romaji("ヴ", &opts()), "vu");
}

#[test]
fn unknown_characters_pass_through() {
    assert_eq!(hiragana_to_romaji("あ漢x", &opts()), "a漢x");
    assert_eq!(katakana_to_romaji("アー", &opts()), "aー");
    assert_eq!(romaji_to_hiragana("q", &opts()), "q");
}

#[test]
fn romaji_to_hiragana_greedy_windows() {
    assert_eq!(romaji_to_hiragana("kyou", &opts()), "きょう");
    assert_eq!(romaji_to_hiragana("sushi", &opts()), "すし");
    assert_eq!(romaji_to_hiragana("shashin", &opts()), "しゃしん");
}

#[test]
fn romaji_input_is_normalized() {
    // Case-insensitive and whitespace-tolerant, in this direction only.
    assert_eq!(romaji_to_hiragana("KYOU", &opts()), "きょう");
    assert_eq!(romaji_to_hiragana("  kyou   wa ", &opts()), "きょう わ");
    assert_eq!(romaji_to_katakana("FaItO", &opts()), "ファイト");
}

#[test]
fn kana_input_is_not_normalized() {
    assert_eq!(hiragana_to_romaji(" あ ", &opts()), " a ");
}

#[test]
fn romaji_to_katakana_basic() {
    assert_eq!(romaji_to_katakana("kyou", &opts()), "キョウ");
    assert_eq!(romaji_to_katakana("fa", &opts()), "ファ");
}

#[test]
fn punctuation_and_spacing_pass_through() {
    assert_eq!(hiragana_to_romaji("こんにちは！", &opts()), "konnichiha！");
    assert_eq!(hiragana_to_romaji("あ　い", &opts()), "a　i");
    assert_eq!(romaji_to_hiragana("kyou!?", &opts()), "きょう!?");
    assert_eq!(romaji_to_hiragana("ko-hi", &opts()), "こ-ひ");
}

#[test]
fn punctuation_passes_even_when_not_preserved() {
    // With preservation off the character takes the table path instead,
    // and being absent from every table it still comes out unchanged.
    let raw = ConversionOptions {
        preserve_spacing: false,
        preserve_punctuation: false,
        ..opts()
    };
    assert_eq!(hiragana_to_romaji("こんにちは！", &raw), "konnichiha！");
    assert_eq!(romaji_to_hiragana("kyou !?", &raw), "きょう !?");
}

#[test]
fn direct_script_conversion() {
    assert_eq!(hiragana_to_katakana("こんにちは"), "コンニチハ");
    assert_eq!(hiragana_to_katakana("きょうは"), "キョウハ");
    assert_eq!(katakana_to_hiragana("コンニチハ"), "こんにちは");
    assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
    assert_eq!(hiragana_to_katakana("abc"), "abc");
    assert_eq!(hiragana_to_katakana(""), "");
}

#[test]
fn all_formats_from_hiragana() {
    let r = convert_to_all_formats("こんにちは", &opts());
    assert_eq!(
        r,
        ConversionResult {
            hiragana: "こんにちは".into(),
            katakana: "コンニチハ".into(),
            romaji: "konnichiha".into(),
        }
    );
}

#[test]
fn all_formats_from_katakana() {
    let r = convert_to_all_formats("キョウ", &opts());
    assert_eq!(r.hiragana, "きょう");
    assert_eq!(r.katakana, "キョウ");
    assert_eq!(r.romaji, "kyou");
}

#[test]
fn all_formats_from_romaji() {
    let r = convert_to_all_formats("kyou", &opts());
    assert_eq!(r.hiragana, "きょう");
    assert_eq!(r.katakana, "キョウ");
    assert_eq!(r.romaji, "kyou");
}

#[test]
fn all_formats_blank_input_is_empty() {
    assert_eq!(convert_to_all_formats("", &opts()), ConversionResult::default());
    assert_eq!(
        convert_to_all_formats("   \t", &opts()),
        ConversionResult::default()
    );
}

#[test]
fn detected_field_is_verbatim_input() {
    // The input's own slot is a copy, not a re-rendering.
    let r = convert_to_all_formats("KYOU", &opts());
    assert_eq!(r.romaji, "KYOU");
    assert_eq!(r.hiragana, "きょう");
}
