//! Katakana to romaji transliteration.
//!
//! Scans a reading left to right, matching the longest table symbol at
//! each position and handling sokuon (ッ) gemination, the prolonged sound
//! mark, and ASCII passthrough.

mod table;

pub use table::{KanaTable, MAPPINGS};

use crate::unicode;

const SOKUON: char = 'ッ';
const CHOONPU: char = 'ー';

/// One decision of the scan loop: what to emit and how far to advance.
#[derive(Debug, PartialEq, Eq)]
enum ScanOp {
    /// Emit the doubled leading consonant of the next symbol, advance one.
    Geminate(char),
    /// Emit nothing, advance one.
    Skip,
    /// Emit a table value, advance by the matched symbol width.
    Emit(&'static str, usize),
    /// Pass an ASCII letter or digit through unchanged, advance one.
    Pass(char),
}

/// Decide what to do at position `i`, first match wins.
fn scan_op(table: &KanaTable, chars: &[char], i: usize) -> ScanOp {
    match chars[i] {
        SOKUON => {
            // The mark itself is consumed here; the next character is
            // matched again normally on the following iteration.
            let doubled = chars
                .get(i + 1)
                .and_then(|&next| table.lookup_char(next))
                .and_then(|romaji| romaji.chars().next());
            match doubled {
                Some(c) => ScanOp::Geminate(c),
                None => ScanOp::Skip,
            }
        }
        CHOONPU | ' ' | '\u{3000}' => ScanOp::Skip,
        c => {
            for width in (1..=table::MAX_SYMBOL_CHARS).rev() {
                if i + width > chars.len() {
                    continue;
                }
                let symbol: String = chars[i..i + width].iter().collect();
                if let Some(romaji) = table.lookup(&symbol) {
                    return ScanOp::Emit(romaji, width);
                }
            }
            if c.is_ascii_alphanumeric() {
                ScanOp::Pass(c)
            } else {
                ScanOp::Skip
            }
        }
    }
}

/// Transliterate a kana reading into romaji.
///
/// Hiragana is folded to katakana before scanning. ASCII letters and digits
/// pass through unchanged; characters with no mapping are dropped, so the
/// result may be empty. Never fails.
pub fn transliterate(reading: &str) -> String {
    let table = KanaTable::global();
    let chars: Vec<char> = reading.chars().map(unicode::to_katakana).collect();

    let mut out = String::with_capacity(reading.len());
    let mut i = 0;
    while i < chars.len() {
        match scan_op(table, &chars, i) {
            ScanOp::Geminate(c) => {
                out.push(c);
                i += 1;
            }
            ScanOp::Skip => i += 1,
            ScanOp::Emit(romaji, width) => {
                out.push_str(romaji);
                i += width;
            }
            ScanOp::Pass(c) => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}
