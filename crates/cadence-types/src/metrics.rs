use serde::{Deserialize, Serialize};

/// Lowest standard deviation a z-score divides by
pub const MIN_STD: f64 = 0.001;

/// Raw per-song metrics produced by the difficulty scorer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DifficultyMetrics {
    pub word_count: usize,
    /// Distinct lowercased lemmas
    pub unique_word_count: usize,
    pub type_token_ratio: f64,
    pub avg_word_freq_zipf: f64,
    pub verb_density: f64,
    pub tense_weights: f64,
    pub idiom_count: usize,
    pub punct_complexity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyReport {
    pub metrics: DifficultyMetrics,
    /// Continuous score in [1, 10]
    pub difficulty_score: f64,
    /// `difficulty_score` rounded into a 1..=10 level
    pub level: u8,
}

/// Metrics standardized against the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    WordCount,
    TypeTokenRatio,
    AvgWordFreqZipf,
    VerbDensity,
    TenseWeights,
    IdiomCount,
    PunctComplexity,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::WordCount,
        Metric::TypeTokenRatio,
        Metric::AvgWordFreqZipf,
        Metric::VerbDensity,
        Metric::TenseWeights,
        Metric::IdiomCount,
        Metric::PunctComplexity,
    ];

    pub fn value(&self, metrics: &DifficultyMetrics) -> f64 {
        match self {
            Metric::WordCount => metrics.word_count as f64,
            Metric::TypeTokenRatio => metrics.type_token_ratio,
            Metric::AvgWordFreqZipf => metrics.avg_word_freq_zipf,
            Metric::VerbDensity => metrics.verb_density,
            Metric::TenseWeights => metrics.tense_weights,
            Metric::IdiomCount => metrics.idiom_count as f64,
            Metric::PunctComplexity => metrics.punct_complexity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::WordCount => "word_count",
            Metric::TypeTokenRatio => "type_token_ratio",
            Metric::AvgWordFreqZipf => "avg_word_freq_zipf",
            Metric::VerbDensity => "verb_density",
            Metric::TenseWeights => "tense_weights",
            Metric::IdiomCount => "idiom_count",
            Metric::PunctComplexity => "punct_complexity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub mean: f64,
    pub std: f64,
}

impl MetricStats {
    pub const fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    /// Standardize `value`. The spread is floored at [`MIN_STD`] so a
    /// hand-written baseline with `std: 0.0` cannot produce infinities.
    pub fn z_score(&self, value: f64) -> f64 {
        (value - self.mean) / self.std.max(MIN_STD)
    }
}

/// Reference distribution used to standardize a song's raw metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineStats {
    pub word_count: MetricStats,
    pub type_token_ratio: MetricStats,
    pub avg_word_freq_zipf: MetricStats,
    pub verb_density: MetricStats,
    pub tense_weights: MetricStats,
    pub idiom_count: MetricStats,
    pub punct_complexity: MetricStats,
}

impl BaselineStats {
    pub fn get(&self, metric: Metric) -> &MetricStats {
        match metric {
            Metric::WordCount => &self.word_count,
            Metric::TypeTokenRatio => &self.type_token_ratio,
            Metric::AvgWordFreqZipf => &self.avg_word_freq_zipf,
            Metric::VerbDensity => &self.verb_density,
            Metric::TenseWeights => &self.tense_weights,
            Metric::IdiomCount => &self.idiom_count,
            Metric::PunctComplexity => &self.punct_complexity,
        }
    }

    pub fn get_mut(&mut self, metric: Metric) -> &mut MetricStats {
        match metric {
            Metric::WordCount => &mut self.word_count,
            Metric::TypeTokenRatio => &mut self.type_token_ratio,
            Metric::AvgWordFreqZipf => &mut self.avg_word_freq_zipf,
            Metric::VerbDensity => &mut self.verb_density,
            Metric::TenseWeights => &mut self.tense_weights,
            Metric::IdiomCount => &mut self.idiom_count,
            Metric::PunctComplexity => &mut self.punct_complexity,
        }
    }
}

impl Default for BaselineStats {
    /// Curated statistics for a typical pop song lyric sheet
    fn default() -> Self {
        Self {
            word_count: MetricStats::new(220.0, 90.0),
            type_token_ratio: MetricStats::new(0.45, 0.12),
            avg_word_freq_zipf: MetricStats::new(5.2, 0.5),
            verb_density: MetricStats::new(0.18, 0.05),
            tense_weights: MetricStats::new(28.0, 12.0),
            idiom_count: MetricStats::new(1.0, 1.0),
            punct_complexity: MetricStats::new(0.4, 0.2),
        }
    }
}
