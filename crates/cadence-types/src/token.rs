use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag assigned by the rule tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adj,
    Adv,
    Det,
    Pron,
    Adp,
    Conj,
    Intj,
    Other,
}

/// Finite verb paradigms shared by the supported rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Preterite,
    Imperfect,
    Future,
    Conditional,
    PresentSubjunctive,
    ImperfectSubjunctive,
}

impl Tense {
    /// Paradigm order. Reverse lookups prefer the earliest tense.
    pub const ALL: [Tense; 7] = [
        Tense::Present,
        Tense::Preterite,
        Tense::Imperfect,
        Tense::Future,
        Tense::Conditional,
        Tense::PresentSubjunctive,
        Tense::ImperfectSubjunctive,
    ];

    /// Weight used for untagged verbs
    pub const UNTAGGED_WEIGHT: f64 = 0.5;

    /// Difficulty contribution of a single verb in this tense
    pub fn weight(&self) -> f64 {
        match self {
            Tense::Present => 0.5,
            Tense::Preterite => 1.0,
            Tense::Imperfect => 1.1,
            Tense::Future => 1.0,
            Tense::Conditional => 1.3,
            Tense::PresentSubjunctive => 1.5,
            Tense::ImperfectSubjunctive => 1.8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Preterite => "preterite",
            Tense::Imperfect => "imperfect",
            Tense::Future => "future",
            Tense::Conditional => "conditional",
            Tense::PresentSubjunctive => "present_subjunctive",
            Tense::ImperfectSubjunctive => "imperfect_subjunctive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the line
    pub text: String,
    pub lemma: String,
    pub part_of_speech: PartOfSpeech,
    pub is_verb: bool,
    pub tense: Option<Tense>,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedLine {
    pub raw_text: String,
    pub sentence_index: usize,
    pub tokens: Vec<Token>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tense_weights_increase_towards_subjunctive() {
        assert!(Tense::Present.weight() < Tense::Conditional.weight());
        assert!(Tense::PresentSubjunctive.weight() < Tense::ImperfectSubjunctive.weight());
        assert_eq!(Tense::UNTAGGED_WEIGHT, Tense::Present.weight());
    }

    #[test]
    fn tense_keys_match_serde_names() {
        for tense in Tense::ALL {
            let json = serde_json::to_string(&tense).unwrap();
            assert_eq!(json, format!("\"{}\"", tense.as_str()));
        }
    }

    #[test]
    fn pos_serializes_as_upper_tag() {
        let json = serde_json::to_string(&PartOfSpeech::Adp).unwrap();
        assert_eq!(json, "\"ADP\"");
    }
}
