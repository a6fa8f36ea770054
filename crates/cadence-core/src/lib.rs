pub mod conjugation;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod morphology;
pub mod pack;
pub mod preprocess;
pub mod registry;
pub mod vocabulary;

pub use conjugation::ConjugationGenerator;
pub use difficulty::{DifficultyScorer, assign_level, update_baselines};
pub use engine::Engine;
pub use error::{EngineError, PackError};
pub use frequency::{FrequencyTable, usefulness_from_zipf};
pub use morphology::MorphologicalAnalyzer;
pub use pack::LanguagePack;
pub use registry::PackRegistry;
pub use vocabulary::{Aligner, PositionalAligner, TranslationLookup, VocabularyRanker};

#[cfg(test)]
pub(crate) mod test_pack;
