use std::collections::HashMap;

use cadence_types::{PartOfSpeech, VocabWord};

use crate::morphology::MorphologicalAnalyzer;
use crate::pack::LanguagePack;
use crate::preprocess;

pub const DEFAULT_VOCAB_LIMIT: usize = 15;

/// Usefulness assumed for words missing from the frequency table
pub const DEFAULT_UNKNOWN_USEFULNESS: f64 = 0.5;

/// Pairs a source token with a word from the parallel translation line
pub trait Aligner: Send + Sync {
    /// `position` is the token index within the source line
    fn align(&self, position: usize, translation_line: &str) -> Option<String>;
}

/// Same-index word of the translation line.
///
/// Word order differs between languages, so this is a rough guess, not an
/// alignment model.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalAligner;

impl Aligner for PositionalAligner {
    fn align(&self, position: usize, translation_line: &str) -> Option<String> {
        preprocess::plain_words(translation_line)
            .nth(position)
            .map(str::to_lowercase)
    }
}

/// External dictionary consulted before the aligner
pub trait TranslationLookup: Send + Sync {
    fn lookup(&self, word: &str, language: &str) -> Option<String>;
}

static POSITIONAL: PositionalAligner = PositionalAligner;

struct Candidate {
    count: usize,
    part_of_speech: PartOfSpeech,
    translation: Option<String>,
}

/// Ranks song words by in-song frequency x language-wide usefulness
pub struct VocabularyRanker<'a> {
    pack: &'a LanguagePack,
    aligner: &'a dyn Aligner,
    unknown_usefulness: f64,
}

impl<'a> VocabularyRanker<'a> {
    pub fn new(pack: &'a LanguagePack) -> Self {
        Self {
            pack,
            aligner: &POSITIONAL,
            unknown_usefulness: DEFAULT_UNKNOWN_USEFULNESS,
        }
    }

    pub fn with_aligner(mut self, aligner: &'a dyn Aligner) -> Self {
        self.aligner = aligner;
        self
    }

    pub fn with_unknown_usefulness(mut self, usefulness: f64) -> Self {
        self.unknown_usefulness = usefulness;
        self
    }

    /// Top `limit` vocabulary words, sorted by non-increasing score.
    ///
    /// `translation_lines` is parallel to `lyric_lines`; missing or short
    /// lines just leave `translation` empty.
    pub fn extract_vocabulary<S, T>(
        &self,
        lyric_lines: &[S],
        translation_lines: &[T],
        limit: usize,
        lookup: Option<&dyn TranslationLookup>,
    ) -> Vec<VocabWord>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        if lyric_lines.is_empty() || limit == 0 {
            return Vec::new();
        }
        if !translation_lines.is_empty() && translation_lines.len() != lyric_lines.len() {
            tracing::warn!(
                "translation has {} lines for {} lyric lines, alignment will be partial",
                translation_lines.len(),
                lyric_lines.len()
            );
        }

        let analyzer = MorphologicalAnalyzer::new(self.pack);
        let mut candidates: HashMap<String, Candidate> = HashMap::new();

        for (line_index, line) in lyric_lines.iter().enumerate() {
            let analyzed = analyzer.analyze_line(line.as_ref(), line_index);
            let translation_line = translation_lines.get(line_index).map(|t| t.as_ref());

            for (position, token) in analyzed.tokens.iter().enumerate() {
                let word = token.text.to_lowercase();
                if !self.is_candidate(&word) {
                    continue;
                }

                let candidate = candidates.entry(word).or_insert_with(|| Candidate {
                    count: 0,
                    part_of_speech: token.part_of_speech,
                    translation: None,
                });
                candidate.count += 1;
                if candidate.translation.is_none() {
                    candidate.translation =
                        translation_line.and_then(|t| self.aligner.align(position, t));
                }
            }
        }

        let frequency = self.pack.frequency();
        let mut ranked: Vec<VocabWord> = candidates
            .into_iter()
            .map(|(word, c)| VocabWord {
                score: c.count as f64 * frequency.usefulness(&word, self.unknown_usefulness),
                word,
                translation: c.translation,
                count: c.count,
                part_of_speech: c.part_of_speech,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.count.cmp(&a.count))
                .then_with(|| a.word.cmp(&b.word))
        });
        ranked.truncate(limit);

        if let Some(lookup) = lookup {
            for vocab in &mut ranked {
                if let Some(translation) = lookup.lookup(&vocab.word, self.pack.code()) {
                    vocab.translation = Some(translation);
                }
            }
        }

        ranked
    }

    fn is_candidate(&self, word: &str) -> bool {
        word.chars().count() >= 2
            && word.chars().any(char::is_alphabetic)
            && !self.pack.is_stop_word(word)
    }
}
