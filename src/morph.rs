//! Morphological analyzer backed by a vibrato dictionary.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use vibrato::{Dictionary, Tokenizer};

use crate::segment::{AnalyzeError, AnalyzedToken, Analyzer};

/// The IPADIC feature CSV carries the katakana reading at this index.
const READING_FIELD: usize = 7;

/// Marks an absent field in IPADIC features (unknown words, symbols).
const NO_READING: &str = "*";

#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to load dictionary: {0}")]
    Dictionary(String),
}

/// Word segmentation via vibrato's Viterbi tokenizer.
///
/// The tokenizer is immutable after construction; `analyze` allocates a
/// fresh worker per call, so one instance can serve many threads.
pub struct MorphAnalyzer {
    tokenizer: Tokenizer,
}

// `vibrato::Tokenizer` is not `Debug`, so the impl cannot be derived.
impl std::fmt::Debug for MorphAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphAnalyzer").finish_non_exhaustive()
    }
}

impl MorphAnalyzer {
    /// Load a system dictionary from disk.
    ///
    /// Dictionaries distributed compressed (`.zst`) are decompressed on the
    /// fly; anything else is read as-is.
    pub fn from_dict_path(path: impl AsRef<Path>) -> Result<Self, MorphError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let loaded = if path.extension().is_some_and(|ext| ext == "zst") {
            Dictionary::read(zstd::Decoder::new(reader)?)
        } else {
            Dictionary::read(reader)
        };
        let dict = loaded.map_err(|e| MorphError::Dictionary(e.to_string()))?;
        Ok(Self {
            tokenizer: Tokenizer::new(dict),
        })
    }
}

impl Analyzer for MorphAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<AnalyzedToken>, AnalyzeError> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();
        Ok(worker
            .token_iter()
            .map(|token| AnalyzedToken {
                surface: token.surface().to_string(),
                reading: reading_from_feature(token.feature()),
            })
            .collect())
    }
}

fn reading_from_feature(feature: &str) -> Option<String> {
    let field = feature.split(',').nth(READING_FIELD)?;
    if field.is_empty() || field == NO_READING {
        return None;
    }
    Some(field.to_string())
}
