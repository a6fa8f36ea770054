//! Corpus-relative difficulty scoring.
//!
//! Raw metrics are standardized against a [`BaselineStats`] and folded into
//! one weighted z-score, which a logistic curve maps onto the 1..10 scale.
//! The baseline is passed in explicitly; the process-wide default instance
//! at the bottom of this module is only a convenience for callers that do
//! not manage their own.

use std::collections::HashSet;
use std::sync::{LazyLock, PoisonError, RwLock};

use cadence_types::{
    AnalyzedLine, BaselineStats, DifficultyMetrics, DifficultyReport, MIN_STD, Metric,
    MetricStats, Tense, Token,
};

use crate::error::{EngineError, Result};
use crate::morphology::MorphologicalAnalyzer;
use crate::pack::LanguagePack;

/// Signed contribution of each standardized metric. Absolute values sum to 1.
/// Lexical diversity and frequency enter inverted.
pub fn metric_weight(metric: Metric) -> f64 {
    match metric {
        Metric::WordCount => 0.12,
        Metric::TypeTokenRatio => -0.18,
        Metric::AvgWordFreqZipf => -0.22,
        Metric::VerbDensity => 0.18,
        Metric::TenseWeights => 0.22,
        Metric::IdiomCount => 0.04,
        Metric::PunctComplexity => 0.04,
    }
}

fn punctuation_weight(c: char) -> f64 {
    match c {
        ';' => 1.0,
        ':' => 0.8,
        '-' | '\u{2013}' | '\u{2014}' | '\u{2026}' => 0.7,
        '(' | ')' | '[' | ']' => 0.6,
        ',' => 0.5,
        '"' | '\u{201C}' | '\u{201D}' | '\u{00AB}' | '\u{00BB}' => 0.4,
        '?' | '!' | '\u{00BF}' | '\u{00A1}' => 0.3,
        '.' => 0.2,
        _ => 0.0,
    }
}

pub struct DifficultyScorer<'a> {
    pack: &'a LanguagePack,
}

impl<'a> DifficultyScorer<'a> {
    pub fn new(pack: &'a LanguagePack) -> Self {
        Self { pack }
    }

    /// Analyze raw lyric lines and score them
    pub fn score_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
        baseline: &BaselineStats,
    ) -> Result<DifficultyReport> {
        if lines.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        let analyzed = MorphologicalAnalyzer::new(self.pack).analyze_lines(lines);
        self.compute_difficulty(&analyzed, baseline)
    }

    /// Score already analyzed lines against `baseline`
    pub fn compute_difficulty(
        &self,
        lines: &[AnalyzedLine],
        baseline: &BaselineStats,
    ) -> Result<DifficultyReport> {
        let metrics = self.metrics(lines)?;
        let difficulty_score = score_metrics(&metrics, baseline);

        tracing::debug!(
            "difficulty {:.2} for {} words ({} unique, {:.3} verb density)",
            difficulty_score,
            metrics.word_count,
            metrics.unique_word_count,
            metrics.verb_density
        );

        Ok(DifficultyReport {
            level: assign_level(difficulty_score),
            difficulty_score,
            metrics,
        })
    }

    /// Convenience wrapper reading the process-wide baseline
    pub fn compute_difficulty_default(&self, lines: &[AnalyzedLine]) -> Result<DifficultyReport> {
        let baseline = global_baseline();
        self.compute_difficulty(lines, &baseline)
    }

    /// Raw metrics for a song. Fails only when there are no lines at all;
    /// lines without a single word token yield neutral metrics.
    pub fn metrics(&self, lines: &[AnalyzedLine]) -> Result<DifficultyMetrics> {
        if lines.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        let tokens: Vec<&Token> = lines.iter().flat_map(|l| l.tokens.iter()).collect();
        if tokens.is_empty() {
            tracing::warn!("No word tokens in {} lines", lines.len());
            return Ok(DifficultyMetrics {
                type_token_ratio: 1.0,
                avg_word_freq_zipf: self.pack.unknown_zipf(),
                punct_complexity: punct_complexity(lines, 0),
                ..Default::default()
            });
        }

        let word_count = tokens.len();
        let unique_word_count = tokens
            .iter()
            .map(|t| t.lemma.to_lowercase())
            .collect::<HashSet<_>>()
            .len();
        let type_token_ratio = unique_word_count as f64 / word_count as f64;

        let avg_word_freq_zipf =
            tokens.iter().map(|t| self.token_zipf(t)).sum::<f64>() / word_count as f64;

        let verbs: Vec<&&Token> = tokens.iter().filter(|t| t.is_verb).collect();
        let verb_density = verbs.len() as f64 / word_count as f64;
        let tense_weights = verbs
            .iter()
            .map(|t| t.tense.map_or(Tense::UNTAGGED_WEIGHT, |tense| tense.weight()))
            .sum();

        Ok(DifficultyMetrics {
            word_count,
            unique_word_count,
            type_token_ratio,
            avg_word_freq_zipf,
            verb_density,
            tense_weights,
            idiom_count: self.count_idioms(&tokens),
            punct_complexity: punct_complexity(lines, word_count),
        })
    }

    fn token_zipf(&self, token: &Token) -> f64 {
        let frequency = self.pack.frequency();
        frequency
            .zipf(&token.text)
            .or_else(|| frequency.zipf(&token.lemma))
            .unwrap_or(self.pack.unknown_zipf())
    }

    /// Non-overlapping idiom matches across the whole song. A token matches
    /// an idiom word by surface form or by lemma, so conjugated idioms
    /// ("te echo de menos") still count.
    fn count_idioms(&self, tokens: &[&Token]) -> usize {
        let words: Vec<(String, String)> = tokens
            .iter()
            .map(|t| (t.text.to_lowercase(), t.lemma.to_lowercase()))
            .collect();

        let mut count = 0;
        for idiom in self.pack.idioms() {
            let mut i = 0;
            while i + idiom.len() <= words.len() {
                let hit = idiom
                    .iter()
                    .zip(&words[i..])
                    .all(|(want, (text, lemma))| want == text || want == lemma);
                if hit {
                    count += 1;
                    i += idiom.len();
                } else {
                    i += 1;
                }
            }
        }
        count
    }
}

/// Weighted punctuation density plus the coefficient of variation of
/// per-line word counts.
fn punct_complexity(lines: &[AnalyzedLine], word_count: usize) -> f64 {
    let weighted: f64 = lines
        .iter()
        .flat_map(|l| l.raw_text.chars())
        .map(punctuation_weight)
        .sum();
    let density = weighted / word_count.max(1) as f64;

    let lengths: Vec<f64> = lines
        .iter()
        .map(|l| l.tokens.len())
        .filter(|&n| n > 0)
        .map(|n| n as f64)
        .collect();

    density + coefficient_of_variation(&lengths)
}

fn coefficient_of_variation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let stats = mean_std(values);
    if stats.mean == 0.0 {
        0.0
    } else {
        stats.std / stats.mean
    }
}

/// Population mean and standard deviation
fn mean_std(values: &[f64]) -> MetricStats {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    MetricStats::new(mean, variance.sqrt())
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Weighted z-score sum, before the logistic mapping
pub fn combined_z(metrics: &DifficultyMetrics, baseline: &BaselineStats) -> f64 {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let z = baseline.get(metric).z_score(metric.value(metrics));
            tracing::trace!("{} z={:.3}", metric.as_str(), z);
            metric_weight(metric) * z
        })
        .sum()
}

/// Map metrics onto the continuous 1..10 scale
pub fn score_metrics(metrics: &DifficultyMetrics, baseline: &BaselineStats) -> f64 {
    let score = 1.0 + 9.0 * sigmoid(combined_z(metrics, baseline));
    if score.is_nan() {
        return 1.0;
    }
    score.clamp(1.0, 10.0)
}

/// Round a continuous score to a 1..=10 level
pub fn assign_level(score: f64) -> u8 {
    if !score.is_finite() {
        return if score == f64::INFINITY { 10 } else { 1 };
    }
    score.round().clamp(1.0, 10.0) as u8
}

/// Fresh baseline from a corpus of previously computed metrics
pub fn update_baselines(all_metrics: &[DifficultyMetrics]) -> Result<BaselineStats> {
    if all_metrics.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let mut baseline = BaselineStats::default();
    for metric in Metric::ALL {
        let values: Vec<f64> = all_metrics.iter().map(|m| metric.value(m)).collect();
        let stats = mean_std(&values);
        *baseline.get_mut(metric) = MetricStats::new(stats.mean, stats.std.max(MIN_STD));
    }

    tracing::info!("Recalibrated baseline from {} songs", all_metrics.len());
    Ok(baseline)
}

static GLOBAL_BASELINE: LazyLock<RwLock<BaselineStats>> =
    LazyLock::new(|| RwLock::new(BaselineStats::default()));

/// Snapshot of the process-wide baseline
pub fn global_baseline() -> BaselineStats {
    GLOBAL_BASELINE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Full replace of the process-wide baseline.
///
/// Scores computed while a replacement is in flight may straddle the old
/// and new baselines; batch callers should take one snapshot up front.
pub fn replace_global_baseline(baseline: BaselineStats) {
    *GLOBAL_BASELINE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = baseline;
}
