use cadence_types::{AnalyzedLine, PartOfSpeech, Tense, Token};

use crate::conjugation;
use crate::pack::LanguagePack;
use crate::preprocess;

/// Rule tables carry no calibrated certainty, so every tag reports the same
/// coarse confidence.
pub const RULE_CONFIDENCE: f32 = 0.8;

/// Rule-based tagger, lemmatizer and tense detector over a language pack
pub struct MorphologicalAnalyzer<'a> {
    pack: &'a LanguagePack,
}

impl<'a> MorphologicalAnalyzer<'a> {
    pub fn new(pack: &'a LanguagePack) -> Self {
        Self { pack }
    }

    /// Tokenize and tag one lyric line. Total over any input, including "".
    pub fn analyze_line(&self, text: &str, line_index: usize) -> AnalyzedLine {
        let tokens = preprocess::tokenize(text, self.pack.elisions())
            .iter()
            .map(|surface| self.analyze_word(surface))
            .collect();

        AnalyzedLine {
            raw_text: text.to_string(),
            sentence_index: line_index,
            tokens,
        }
    }

    pub fn analyze_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<AnalyzedLine> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| self.analyze_line(line.as_ref(), i))
            .collect()
    }

    pub fn analyze_word(&self, surface: &str) -> Token {
        let word = surface.to_lowercase();
        let part_of_speech = self.tag(&word);
        let is_verb = part_of_speech == PartOfSpeech::Verb;

        let (lemma, tense) = if is_verb {
            self.verb_lemma_and_tense(&word)
        } else {
            (self.lemmatize(&word, part_of_speech), None)
        };

        Token {
            text: surface.to_string(),
            lemma,
            part_of_speech,
            is_verb,
            tense,
            confidence: RULE_CONFIDENCE,
        }
    }

    /// First matching rule wins, NOUN otherwise
    pub fn tag(&self, word: &str) -> PartOfSpeech {
        self.pack
            .pos_rules()
            .iter()
            .find(|rule| rule.predicate.matches(word, self.pack))
            .map(|rule| rule.tag)
            .unwrap_or(PartOfSpeech::Noun)
    }

    /// Lemma for a non-verb token
    pub fn lemmatize(&self, word: &str, part_of_speech: PartOfSpeech) -> String {
        if part_of_speech == PartOfSpeech::Noun {
            if let Some(suffix) = self.pack.plural_suffix() {
                if let Some(singular) = word.strip_suffix(suffix) {
                    if singular.chars().count() >= 2 {
                        return singular.to_string();
                    }
                }
            }
        }
        word.to_string()
    }

    /// Ordered suffix table, first match wins.
    ///
    /// The tables overlap (imperfect and conditional share the -ía family,
    /// present indicative and subjunctive share most endings), so the
    /// answer is a guess rather than an authoritative tag.
    pub fn detect_tense(&self, word: &str) -> Option<Tense> {
        self.candidate_tenses(word).into_iter().next()
    }

    /// Every tense whose suffix table matches, in table order
    pub fn candidate_tenses(&self, word: &str) -> Vec<Tense> {
        let word = word.to_lowercase();
        let mut tenses = Vec::new();
        for rule in self.pack.tense_rules() {
            let hit = rule
                .suffixes
                .iter()
                .any(|s| word.len() > s.len() && word.ends_with(s.as_str()));
            if hit && !tenses.contains(&rule.tense) {
                tenses.push(rule.tense);
            }
        }
        tenses
    }

    fn verb_lemma_and_tense(&self, word: &str) -> (String, Option<Tense>) {
        if let Some(form) = self.pack.verb_form(word) {
            return (form.lemma.clone(), form.tense);
        }

        // Infinitives, gerunds and participles carry no finite tense
        if conjugation::classify(self.pack.paradigms(), word).is_some() {
            return (word.to_string(), None);
        }
        if let Some(lemma) = self.lemma_from_rules(word) {
            return (lemma, None);
        }

        (word.to_string(), self.detect_tense(word))
    }

    /// Non-finite ending -> infinitive, preferring candidates the lexicon knows
    fn lemma_from_rules(&self, word: &str) -> Option<String> {
        let rule = self.pack.lemma_rules().iter().find(|rule| {
            word.strip_suffix(rule.suffix.as_str())
                .is_some_and(|stem| !stem.is_empty())
        })?;
        let stem = &word[..word.len() - rule.suffix.len()];

        let candidates: Vec<String> = rule
            .replacements
            .iter()
            .map(|ending| format!("{stem}{ending}"))
            .collect();

        candidates
            .iter()
            .find(|candidate| self.pack.is_known_verb(candidate))
            .or_else(|| candidates.first())
            .cloned()
    }
}
