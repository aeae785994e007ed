//! Character-level Unicode classification and folding for Japanese text.

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Fold a hiragana code point to its katakana counterpart.
///
/// ぁ (U+3041) through ゖ (U+3096) sit exactly 0x60 below ァ..ヶ, so the
/// fold is a fixed offset. Anything outside that range, katakana included,
/// is returned unchanged.
pub fn to_katakana(c: char) -> char {
    if ('\u{3041}'..='\u{3096}').contains(&c) {
        char::from_u32(c as u32 + 0x60).unwrap_or(c)
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(is_hiragana('っ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
        assert!(!is_hiragana('a'));
        assert!(!is_katakana('漢'));
    }

    #[test]
    fn test_to_katakana_folds_hiragana() {
        assert_eq!(to_katakana('あ'), 'ア');
        assert_eq!(to_katakana('ん'), 'ン');
        assert_eq!(to_katakana('っ'), 'ッ');
        assert_eq!(to_katakana('ゃ'), 'ャ');
        assert_eq!(to_katakana('ゔ'), 'ヴ');
    }

    #[test]
    fn test_to_katakana_leaves_the_rest_alone() {
        assert_eq!(to_katakana('ア'), 'ア');
        assert_eq!(to_katakana('ー'), 'ー');
        assert_eq!(to_katakana('a'), 'a');
        assert_eq!(to_katakana('漢'), '漢');
        assert_eq!(to_katakana(' '), ' ');
    }
}
