use serde::{Deserialize, Serialize};

use crate::token::PartOfSpeech;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabWord {
    pub word: String,
    /// Best-effort translation, positional unless an external lookup supplied one
    pub translation: Option<String>,
    pub count: usize,
    pub part_of_speech: PartOfSpeech,
    pub score: f64,
}
