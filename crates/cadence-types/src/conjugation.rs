use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::token::Tense;

/// Person/number slot inside a paradigm row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    pub fn index(&self) -> usize {
        match self {
            Person::FirstSingular => 0,
            Person::SecondSingular => 1,
            Person::ThirdSingular => 2,
            Person::FirstPlural => 3,
            Person::SecondPlural => 4,
            Person::ThirdPlural => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjugationSource {
    /// Found in the curated irregular table
    Irregular,
    /// Spliced from a regular paradigm
    Regular,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConjugationTable {
    pub lemma: String,
    pub source: ConjugationSource,
    pub forms: BTreeMap<Tense, [String; 6]>,
}

impl ConjugationTable {
    pub fn form(&self, tense: Tense, person: Person) -> Option<&str> {
        self.forms
            .get(&tense)
            .map(|row| row[person.index()].as_str())
    }

    /// Every (tense, form) pair in paradigm order
    pub fn iter_forms(&self) -> impl Iterator<Item = (Tense, &str)> {
        Tense::ALL.into_iter().flat_map(move |tense| {
            self.forms
                .get(&tense)
                .into_iter()
                .flat_map(move |row| row.iter().map(move |f| (tense, f.as_str())))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ConjugationTable {
        let mut forms = BTreeMap::new();
        forms.insert(
            Tense::Present,
            ["canto", "cantas", "canta", "cantamos", "cantáis", "cantan"].map(String::from),
        );
        ConjugationTable {
            lemma: "cantar".to_string(),
            source: ConjugationSource::Regular,
            forms,
        }
    }

    #[test]
    fn form_indexes_by_person() {
        let t = table();
        assert_eq!(t.form(Tense::Present, Person::FirstPlural), Some("cantamos"));
        assert_eq!(t.form(Tense::Future, Person::FirstPlural), None);
    }

    #[test]
    fn iter_forms_skips_missing_tenses() {
        assert_eq!(table().iter_forms().count(), 6);
    }

    #[test]
    fn serializes_tense_keys_as_strings() {
        let json = serde_json::to_value(table()).unwrap();
        assert_eq!(json["forms"]["present"][0], "canto");
        assert_eq!(json["source"], "regular");
    }
}
