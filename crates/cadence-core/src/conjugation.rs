use std::collections::BTreeMap;

use cadence_types::{ConjugationSource, ConjugationTable};

use crate::pack::{LanguagePack, Paradigm, StemBase};

/// Builds full conjugation tables for a lemma
pub struct ConjugationGenerator<'a> {
    pack: &'a LanguagePack,
}

impl<'a> ConjugationGenerator<'a> {
    pub fn new(pack: &'a LanguagePack) -> Self {
        Self { pack }
    }

    /// 7 tenses x 6 persons for `lemma`.
    ///
    /// Irregular verbs come from the curated table. Anything else is
    /// classified by its infinitive ending and spliced with the regular
    /// paradigm, so stem-changing verbs outside the table come out
    /// regularized. Returns `None` when no paradigm ending matches.
    pub fn conjugations(&self, lemma: &str) -> Option<ConjugationTable> {
        let lemma = lemma.trim().to_lowercase();
        if let Some(table) = self.pack.irregular_verb(&lemma) {
            return Some(table.clone());
        }
        splice(self.pack.paradigms(), &lemma)
    }
}

/// First paradigm whose ending leaves a non-empty stem
pub(crate) fn classify<'p, 'l>(
    paradigms: &'p [Paradigm],
    lemma: &'l str,
) -> Option<(&'p Paradigm, &'l str)> {
    paradigms.iter().find_map(|paradigm| {
        lemma
            .strip_suffix(paradigm.ending.as_str())
            .filter(|stem| !stem.is_empty())
            .map(|stem| (paradigm, stem))
    })
}

/// Regular-paradigm table for `lemma`
pub(crate) fn splice(paradigms: &[Paradigm], lemma: &str) -> Option<ConjugationTable> {
    let (paradigm, stem) = classify(paradigms, lemma)?;

    let forms = paradigm
        .tenses
        .iter()
        .map(|(tense, row)| {
            let base = match row.base {
                StemBase::Stem => stem,
                StemBase::Infinitive => lemma,
            };
            let forms: [String; 6] =
                std::array::from_fn(|i| format!("{}{}", base, row.suffixes[i]));
            (*tense, forms)
        })
        .collect::<BTreeMap<_, _>>();

    Some(ConjugationTable {
        lemma: lemma.to_string(),
        source: ConjugationSource::Regular,
        forms,
    })
}
