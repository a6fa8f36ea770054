pub mod conjugation;
pub mod metrics;
pub mod token;
pub mod vocab;

pub use conjugation::{ConjugationSource, ConjugationTable, Person};
pub use metrics::{
    BaselineStats, DifficultyMetrics, DifficultyReport, MIN_STD, Metric, MetricStats,
};
pub use token::{AnalyzedLine, PartOfSpeech, Tense, Token};
pub use vocab::VocabWord;
