//! Katakana to Hepburn romaji mapping table.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Longest table symbol, in code points, that the scanner probes for.
pub(crate) const MAX_SYMBOL_CHARS: usize = 3;

/// Katakana symbols and their Hepburn romanization.
///
/// Combinations are listed after the single characters they start with;
/// precedence comes from the scanner probing longer widths first, not from
/// the order here.
#[rustfmt::skip]
pub const MAPPINGS: &[(&str, &str)] = &[
    // seion
    ("ア", "a"), ("イ", "i"), ("ウ", "u"), ("エ", "e"), ("オ", "o"),
    ("カ", "ka"), ("キ", "ki"), ("ク", "ku"), ("ケ", "ke"), ("コ", "ko"),
    ("サ", "sa"), ("シ", "shi"), ("ス", "su"), ("セ", "se"), ("ソ", "so"),
    ("タ", "ta"), ("チ", "chi"), ("ツ", "tsu"), ("テ", "te"), ("ト", "to"),
    ("ナ", "na"), ("ニ", "ni"), ("ヌ", "nu"), ("ネ", "ne"), ("ノ", "no"),
    ("ハ", "ha"), ("ヒ", "hi"), ("フ", "fu"), ("ヘ", "he"), ("ホ", "ho"),
    ("マ", "ma"), ("ミ", "mi"), ("ム", "mu"), ("メ", "me"), ("モ", "mo"),
    ("ヤ", "ya"), ("ユ", "yu"), ("ヨ", "yo"),
    ("ラ", "ra"), ("リ", "ri"), ("ル", "ru"), ("レ", "re"), ("ロ", "ro"),
    ("ワ", "wa"), ("ヲ", "wo"), ("ン", "n"),

    // dakuon
    ("ガ", "ga"), ("ギ", "gi"), ("グ", "gu"), ("ゲ", "ge"), ("ゴ", "go"),
    ("ザ", "za"), ("ジ", "ji"), ("ズ", "zu"), ("ゼ", "ze"), ("ゾ", "zo"),
    ("ダ", "da"), ("ヂ", "ji"), ("ヅ", "zu"), ("デ", "de"), ("ド", "do"),
    ("バ", "ba"), ("ビ", "bi"), ("ブ", "bu"), ("ベ", "be"), ("ボ", "bo"),

    // handakuon
    ("パ", "pa"), ("ピ", "pi"), ("プ", "pu"), ("ペ", "pe"), ("ポ", "po"),

    // yoon
    ("キャ", "kya"), ("キュ", "kyu"), ("キョ", "kyo"),
    ("ギャ", "gya"), ("ギュ", "gyu"), ("ギョ", "gyo"),
    ("シャ", "sha"), ("シュ", "shu"), ("ショ", "sho"),
    ("ジャ", "ja"), ("ジュ", "ju"), ("ジョ", "jo"),
    ("チャ", "cha"), ("チュ", "chu"), ("チョ", "cho"),
    ("ニャ", "nya"), ("ニュ", "nyu"), ("ニョ", "nyo"),
    ("ヒャ", "hya"), ("ヒュ", "hyu"), ("ヒョ", "hyo"),
    ("ビャ", "bya"), ("ビュ", "byu"), ("ビョ", "byo"),
    ("ピャ", "pya"), ("ピュ", "pyu"), ("ピョ", "pyo"),
    ("ミャ", "mya"), ("ミュ", "myu"), ("ミョ", "myo"),
    ("リャ", "rya"), ("リュ", "ryu"), ("リョ", "ryo"),

    // foreign sound combinations
    ("ファ", "fa"), ("フィ", "fi"), ("フェ", "fe"), ("フォ", "fo"),
    ("ウィ", "wi"), ("ウェ", "we"), ("ウォ", "wo"),
    ("ヴァ", "va"), ("ヴィ", "vi"), ("ヴ", "vu"), ("ヴェ", "ve"), ("ヴォ", "vo"),
    ("ティ", "ti"), ("ディ", "di"),
    ("トゥ", "tu"), ("ドゥ", "du"),
    ("ツァ", "tsa"), ("ツィ", "tsi"), ("ツェ", "tse"), ("ツォ", "tso"),
];

/// Process-wide lookup structure built from [`MAPPINGS`].
pub struct KanaTable {
    map: HashMap<&'static str, &'static str>,
}

impl KanaTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTable {
        static INSTANCE: OnceLock<KanaTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut map = HashMap::with_capacity(MAPPINGS.len());
            for &(kana, romaji) in MAPPINGS {
                map.insert(kana, romaji);
            }
            KanaTable { map }
        })
    }

    pub fn lookup(&self, kana: &str) -> Option<&'static str> {
        self.map.get(kana).copied()
    }

    /// Single-character lookup without building a `String`.
    pub fn lookup_char(&self, kana: char) -> Option<&'static str> {
        let mut buf = [0u8; 4];
        self.lookup(kana.encode_utf8(&mut buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode;

    #[test]
    fn test_basic_vowels() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("ア"), Some("a"));
        assert_eq!(table.lookup("オ"), Some("o"));
        assert_eq!(table.lookup("ン"), Some("n"));
    }

    #[test]
    fn test_irregular_hepburn_rows() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("シ"), Some("shi"));
        assert_eq!(table.lookup("チ"), Some("chi"));
        assert_eq!(table.lookup("ツ"), Some("tsu"));
        assert_eq!(table.lookup("フ"), Some("fu"));
    }

    #[test]
    fn test_ji_zu_merge() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("ジ"), Some("ji"));
        assert_eq!(table.lookup("ヂ"), Some("ji"));
        assert_eq!(table.lookup("ズ"), Some("zu"));
        assert_eq!(table.lookup("ヅ"), Some("zu"));
    }

    #[test]
    fn test_youon_combinations() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("シャ"), Some("sha"));
        assert_eq!(table.lookup("チョ"), Some("cho"));
        assert_eq!(table.lookup("リュ"), Some("ryu"));
        assert_eq!(table.lookup("ジャ"), Some("ja"));
    }

    #[test]
    fn test_foreign_combinations() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("ファ"), Some("fa"));
        assert_eq!(table.lookup("ティ"), Some("ti"));
        assert_eq!(table.lookup("ヴ"), Some("vu"));
        assert_eq!(table.lookup("ウォ"), Some("wo"));
        assert_eq!(table.lookup("ツェ"), Some("tse"));
    }

    #[test]
    fn test_lookup_char() {
        let table = KanaTable::global();
        assert_eq!(table.lookup_char('カ'), Some("ka"));
        assert_eq!(table.lookup_char('ヴ'), Some("vu"));
        assert_eq!(table.lookup_char('ー'), None);
        assert_eq!(table.lookup_char('ッ'), None);
    }

    #[test]
    fn test_unknown_symbols() {
        let table = KanaTable::global();
        assert_eq!(table.lookup("漢"), None);
        assert_eq!(table.lookup("a"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_mappings_well_formed() {
        for &(kana, romaji) in MAPPINGS {
            let width = kana.chars().count();
            assert!(
                (1..=MAX_SYMBOL_CHARS).contains(&width),
                "symbol {kana} has width {width}"
            );
            assert!(
                kana.chars().all(unicode::is_katakana),
                "symbol {kana} contains non-katakana"
            );
            assert!(
                !romaji.is_empty() && romaji.chars().all(|c| c.is_ascii_lowercase()),
                "value {romaji} for {kana} is not lowercase ASCII"
            );
        }
    }

    #[test]
    fn test_no_duplicate_symbols() {
        assert_eq!(KanaTable::global().map.len(), MAPPINGS.len());
    }
}
