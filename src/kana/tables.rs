use std::collections::HashMap;
use std::sync::LazyLock;

/// Offset between printable ASCII and the full-width forms block (U+FF01..U+FF5E).
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// ASCII characters whose full-width form lies outside the U+FF01..U+FF5E block.
const WIDE_EXCEPTIONS: [(char, char); 4] = [
    (' ', '\u{3000}'),
    ('"', '\u{201D}'),
    ('\'', '\u{2019}'),
    ('`', '\u{2018}'),
];

/// One row of the kana table: hiragana, katakana and half-width katakana.
#[derive(Debug)]
pub struct KanaRule {
    pub hiragana: &'static str,
    pub katakana: &'static str,
    pub half_katakana: &'static str,
}

const fn rule(
    hiragana: &'static str,
    katakana: &'static str,
    half_katakana: &'static str,
) -> KanaRule {
    KanaRule {
        hiragana,
        katakana,
        half_katakana,
    }
}

pub static HIRAGANA_KATAKANA_TABLE: &[KanaRule] = &[
    rule("ぁ", "ァ", "ｧ"),
    rule("あ", "ア", "ｱ"),
    rule("ぃ", "ィ", "ｨ"),
    rule("い", "イ", "ｲ"),
    rule("ぅ", "ゥ", "ｩ"),
    rule("う", "ウ", "ｳ"),
    rule("ゔ", "ヴ", "ｳﾞ"),
    rule("ぇ", "ェ", "ｪ"),
    rule("え", "エ", "ｴ"),
    rule("ぉ", "ォ", "ｫ"),
    rule("お", "オ", "ｵ"),
    rule("か", "カ", "ｶ"),
    rule("が", "ガ", "ｶﾞ"),
    rule("き", "キ", "ｷ"),
    rule("ぎ", "ギ", "ｷﾞ"),
    rule("く", "ク", "ｸ"),
    rule("ぐ", "グ", "ｸﾞ"),
    rule("け", "ケ", "ｹ"),
    rule("げ", "ゲ", "ｹﾞ"),
    rule("こ", "コ", "ｺ"),
    rule("ご", "ゴ", "ｺﾞ"),
    rule("さ", "サ", "ｻ"),
    rule("ざ", "ザ", "ｻﾞ"),
    rule("し", "シ", "ｼ"),
    rule("じ", "ジ", "ｼﾞ"),
    rule("す", "ス", "ｽ"),
    rule("ず", "ズ", "ｽﾞ"),
    rule("せ", "セ", "ｾ"),
    rule("ぜ", "ゼ", "ｾﾞ"),
    rule("そ", "ソ", "ｿ"),
    rule("ぞ", "ゾ", "ｿﾞ"),
    rule("た", "タ", "ﾀ"),
    rule("だ", "ダ", "ﾀﾞ"),
    rule("ち", "チ", "ﾁ"),
    rule("ぢ", "ヂ", "ﾁﾞ"),
    rule("っ", "ッ", "ｯ"),
    rule("つ", "ツ", "ﾂ"),
    rule("づ", "ヅ", "ﾂﾞ"),
    rule("て", "テ", "ﾃ"),
    rule("で", "デ", "ﾃﾞ"),
    rule("と", "ト", "ﾄ"),
    rule("ど", "ド", "ﾄﾞ"),
    rule("な", "ナ", "ﾅ"),
    rule("に", "ニ", "ﾆ"),
    rule("ぬ", "ヌ", "ﾇ"),
    rule("ね", "ネ", "ﾈ"),
    rule("の", "ノ", "ﾉ"),
    rule("は", "ハ", "ﾊ"),
    rule("ば", "バ", "ﾊﾞ"),
    rule("ぱ", "パ", "ﾊﾟ"),
    rule("ひ", "ヒ", "ﾋ"),
    rule("び", "ビ", "ﾋﾞ"),
    rule("ぴ", "ピ", "ﾋﾟ"),
    rule("ふ", "フ", "ﾌ"),
    rule("ぶ", "ブ", "ﾌﾞ"),
    rule("ぷ", "プ", "ﾌﾟ"),
    rule("へ", "ヘ", "ﾍ"),
    rule("べ", "ベ", "ﾍﾞ"),
    rule("ぺ", "ペ", "ﾍﾟ"),
    rule("ほ", "ホ", "ﾎ"),
    rule("ぼ", "ボ", "ﾎﾞ"),
    rule("ぽ", "ポ", "ﾎﾟ"),
    rule("ま", "マ", "ﾏ"),
    rule("み", "ミ", "ﾐ"),
    rule("む", "ム", "ﾑ"),
    rule("め", "メ", "ﾒ"),
    rule("も", "モ", "ﾓ"),
    rule("ゃ", "ャ", "ｬ"),
    rule("や", "ヤ", "ﾔ"),
    rule("ゅ", "ュ", "ｭ"),
    rule("ゆ", "ユ", "ﾕ"),
    rule("ょ", "ョ", "ｮ"),
    rule("よ", "ヨ", "ﾖ"),
    rule("ら", "ラ", "ﾗ"),
    rule("り", "リ", "ﾘ"),
    rule("る", "ル", "ﾙ"),
    rule("れ", "レ", "ﾚ"),
    rule("ろ", "ロ", "ﾛ"),
    rule("ゎ", "ヮ", "ﾜ"),
    rule("わ", "ワ", "ﾜ"),
    rule("ゐ", "ヰ", "ｲ"),
    rule("ゑ", "ヱ", "ｴ"),
    rule("を", "ヲ", "ｦ"),
    rule("ん", "ン", "ﾝ"),
    rule("ゕ", "ヵ", "ｶ"),
    rule("ゖ", "ヶ", "ｹ"),
    rule("ー", "ー", "ｰ"),
    rule("、", "、", "､"),
    rule("。", "。", "｡"),
    rule("「", "「", "｢"),
    rule("」", "」", "｣"),
    rule("・", "・", "･"),
    rule("゛", "゛", "ﾞ"),
    rule("゜", "゜", "ﾟ"),
];

static WIDE_TO_ASCII: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    (0x20u8..=0x7e)
        .map(char::from)
        .filter_map(|c| wide_char(c).map(|wide| (wide, c)))
        .collect()
});

static HIRAGANA_INDEX: LazyLock<HashMap<&'static str, &'static KanaRule>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(HIRAGANA_KATAKANA_TABLE.len());
    for rule in HIRAGANA_KATAKANA_TABLE {
        index.entry(rule.hiragana).or_insert(rule);
    }
    index
});

/// Full-width form of a printable ASCII character.
pub fn wide_char(c: char) -> Option<char> {
    if let Some((_, wide)) = WIDE_EXCEPTIONS.iter().find(|(ascii, _)| *ascii == c) {
        return Some(*wide);
    }
    match c {
        '!'..='~' => char::from_u32(c as u32 + FULLWIDTH_OFFSET),
        _ => None,
    }
}

/// ASCII form of a full-width character produced by [`wide_char`].
pub fn half_char(c: char) -> Option<char> {
    WIDE_TO_ASCII.get(&c).copied()
}

/// Kana row whose hiragana column is exactly `hiragana`.
pub fn kana_rule(hiragana: &str) -> Option<&'static KanaRule> {
    HIRAGANA_INDEX.get(hiragana).copied()
}
