use std::sync::Arc;

use cadence_types::{AnalyzedLine, BaselineStats, ConjugationTable, DifficultyReport, VocabWord};

use crate::conjugation::ConjugationGenerator;
use crate::difficulty::DifficultyScorer;
use crate::error::{EngineError, Result};
use crate::morphology::MorphologicalAnalyzer;
use crate::pack::LanguagePack;
use crate::registry::PackRegistry;
use crate::vocabulary::{DEFAULT_UNKNOWN_USEFULNESS, TranslationLookup, VocabularyRanker};

/// Language-code front door over the registered packs.
///
/// Every method is synchronous and only reads the packs, so one `Engine`
/// can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Engine {
    registry: PackRegistry,
    max_lines: Option<usize>,
    unknown_usefulness: f64,
}

impl Engine {
    pub fn new(registry: PackRegistry) -> Self {
        Self {
            registry,
            max_lines: None,
            unknown_usefulness: DEFAULT_UNKNOWN_USEFULNESS,
        }
    }

    /// Reject songs longer than `max_lines`
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    pub fn with_unknown_usefulness(mut self, usefulness: f64) -> Self {
        self.unknown_usefulness = usefulness;
        self
    }

    pub fn registry(&self) -> &PackRegistry {
        &self.registry
    }

    pub fn pack(&self, language: &str) -> Result<Arc<LanguagePack>> {
        self.registry
            .get(language)
            .ok_or_else(|| EngineError::UnsupportedLanguage(language.to_string()))
    }

    pub fn analyze<S: AsRef<str>>(&self, lines: &[S], language: &str) -> Result<Vec<AnalyzedLine>> {
        self.check_size(lines.len())?;
        let pack = self.pack(language)?;
        Ok(MorphologicalAnalyzer::new(&pack).analyze_lines(lines))
    }

    pub fn difficulty<S: AsRef<str>>(
        &self,
        lines: &[S],
        language: &str,
        baseline: &BaselineStats,
    ) -> Result<DifficultyReport> {
        self.check_size(lines.len())?;
        let pack = self.pack(language)?;
        DifficultyScorer::new(&pack).score_lines(lines, baseline)
    }

    pub fn vocabulary<S: AsRef<str>, T: AsRef<str>>(
        &self,
        lyric_lines: &[S],
        translation_lines: &[T],
        language: &str,
        limit: usize,
        lookup: Option<&dyn TranslationLookup>,
    ) -> Result<Vec<VocabWord>> {
        self.check_size(lyric_lines.len())?;
        let pack = self.pack(language)?;
        Ok(VocabularyRanker::new(&pack)
            .with_unknown_usefulness(self.unknown_usefulness)
            .extract_vocabulary(lyric_lines, translation_lines, limit, lookup))
    }

    pub fn conjugations(&self, lemma: &str, language: &str) -> Result<Option<ConjugationTable>> {
        let pack = self.pack(language)?;
        Ok(ConjugationGenerator::new(&pack).conjugations(lemma))
    }

    /// `default` for unknown words and unregistered languages alike
    pub fn usefulness(&self, word: &str, language: &str, default: f64) -> f64 {
        self.registry
            .get(language)
            .map(|pack| pack.frequency().usefulness(word, default))
            .unwrap_or(default)
    }

    fn check_size(&self, lines: usize) -> Result<()> {
        match self.max_lines {
            Some(max) if lines > max => Err(EngineError::InputTooLarge { lines, max }),
            _ => Ok(()),
        }
    }
}
