use crate::kana::tables::{half_char, kana_rule, wide_char};

/// Replaces printable ASCII with its full-width form.
pub fn convert_to_wide(text: &str) -> String {
    text.chars().map(|c| wide_char(c).unwrap_or(c)).collect()
}

/// Replaces full-width characters with their ASCII form.
pub fn convert_to_half(text: &str) -> String {
    text.chars().map(|c| half_char(c).unwrap_or(c)).collect()
}

/// Converts hiragana to katakana, or to half-width katakana when `half` is set.
///
/// Characters without a kana row are copied unchanged.
pub fn convert_to_katakana(hiragana: &str, half: bool) -> String {
    let mut katakana = String::with_capacity(hiragana.len());
    let mut buf = [0u8; 4];
    for c in hiragana.chars() {
        let c: &str = c.encode_utf8(&mut buf);
        match kana_rule(c) {
            Some(rule) if half => katakana.push_str(rule.half_katakana),
            Some(rule) => katakana.push_str(rule.katakana),
            None => katakana.push_str(c),
        }
    }
    katakana
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc", "ａｂｃ")]
    #[case("Hello, World!", "Ｈｅｌｌｏ，\u{3000}Ｗｏｒｌｄ！")]
    #[case("12:30", "１２：３０")]
    #[case("it's", "ｉｔ’ｓ")]
    #[case("かな", "かな")]
    #[case("", "")]
    fn test_convert_to_wide(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_to_wide(input), expected);
    }

    #[rstest]
    #[case("ａｂｃ", "abc")]
    #[case("ｆｏｏ\u{3000}ｂａｒ", "foo bar")]
    #[case("“ｑ”", "“q\"")]
    #[case("漢字ＡＢＣ", "漢字ABC")]
    #[case("", "")]
    fn test_convert_to_half(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(convert_to_half(input), expected);
    }

    #[test]
    fn test_wide_then_half_restores_ascii() {
        let ascii = "The quick brown fox (jumps) over 13 lazy dogs? ~`'\"";
        assert_eq!(convert_to_half(&convert_to_wide(ascii)), ascii);
    }

    #[rstest]
    #[case("ひらがな", false, "ヒラガナ")]
    #[case("ひらがな", true, "ﾋﾗｶﾞﾅ")]
    #[case("きょうは、いい。", false, "キョウハ、イイ。")]
    #[case("きょうは、いい。", true, "ｷｮｳﾊ､ｲｲ｡")]
    #[case("らーめん", true, "ﾗｰﾒﾝ")]
    #[case("ぱぴぷぺぽ", true, "ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ")]
    #[case("abcカナ漢字", false, "abcカナ漢字")]
    #[case("", true, "")]
    fn test_convert_to_katakana(#[case] input: &str, #[case] half: bool, #[case] expected: &str) {
        assert_eq!(convert_to_katakana(input, half), expected);
    }
}
