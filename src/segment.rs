//! Word segmentation in front of the transliteration engine.
//!
//! The engine never talks to a morphological analyzer directly; it sees
//! only the `Analyzer` trait and the readings produced here.

use tracing::debug;

/// One token produced by morphological analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedToken {
    /// The text as it appeared in the input.
    pub surface: String,
    /// Katakana reading, when the analyzer's lexicon knows one.
    pub reading: Option<String>,
}

/// Morphological analysis failed.
#[derive(Debug, thiserror::Error)]
#[error("morphological analysis failed: {0}")]
pub struct AnalyzeError(pub String);

/// A word segmentation backend.
///
/// Implementations are shared across threads without locking, so `analyze`
/// takes `&self`.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, AnalyzeError>;
}

/// Split `text` into the readings to transliterate.
///
/// In direct mode (no analyzer, or `use_morphology` off) the whole input
/// is one reading. Otherwise each token contributes its reading when known
/// and its surface form when not; empty entries are dropped.
pub fn segment(
    analyzer: Option<&dyn Analyzer>,
    text: &str,
    use_morphology: bool,
) -> Result<Vec<String>, AnalyzeError> {
    let analyzer = match analyzer {
        Some(a) if use_morphology => a,
        _ => return Ok(vec![text.to_string()]),
    };

    let tokens = analyzer.analyze(text)?;
    let total = tokens.len();
    let readings: Vec<String> = tokens
        .into_iter()
        .map(|token| token.reading.unwrap_or(token.surface))
        .filter(|reading| !reading.is_empty())
        .collect();
    if readings.len() < total {
        debug!(
            dropped = total - readings.len(),
            "tokens without usable readings"
        );
    }
    Ok(readings)
}
