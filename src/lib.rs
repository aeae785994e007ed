//! Japanese text to romaji slug conversion.
//!
//! Text flows through three stages: segmentation into word readings
//! (optionally via a morphological analyzer), katakana-to-romaji
//! transliteration, and slug normalization. [`SlugConverter`] ties the
//! stages together behind a resolved configuration.

pub mod config;
#[cfg(feature = "morph")]
pub mod morph;
pub mod romaji;
pub mod segment;
pub mod slug;
pub mod trace_init;
pub mod unicode;


use tracing::{debug, debug_span};

pub use config::{ConfigError, SlugConfig};
pub use segment::{AnalyzeError, AnalyzedToken, Analyzer};

/// Converts Japanese text into romaji slugs.
///
/// Holds the validated configuration and, in morphology mode, the analyzer
/// used for word segmentation. Construction validates once; conversion
/// itself only fails when the analyzer does.
pub struct SlugConverter {
    config: SlugConfig,
    analyzer: Option<Box<dyn Analyzer>>,
}

impl SlugConverter {
    /// Converter that transliterates the raw character stream.
    pub fn new(config: SlugConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            analyzer: None,
        })
    }

    /// Converter that segments words through `analyzer` first.
    ///
    /// The analyzer is consulted only while `use_morphology` is set in the
    /// configuration.
    pub fn with_analyzer(
        config: SlugConfig,
        analyzer: Box<dyn Analyzer>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            analyzer: Some(analyzer),
        })
    }

    pub fn config(&self) -> &SlugConfig {
        &self.config
    }

    /// Convert `text` into a slug.
    ///
    /// Unmappable characters are dropped silently, so the result may be
    /// empty. The only error source is the morphological analyzer.
    pub fn convert(&self, text: &str) -> Result<String, AnalyzeError> {
        let _span = debug_span!("convert", chars = text.chars().count()).entered();

        let readings = segment::segment(
            self.analyzer.as_deref(),
            text,
            self.config.use_morphology,
        )?;
        debug!(readings = readings.len(), "segmented");

        let fragments: Vec<String> = readings
            .iter()
            .map(|reading| romaji::transliterate(reading))
            .collect();
        Ok(slug::normalize(
            &fragments,
            &self.config.separator,
            self.config.max_length,
        ))
    }
}
