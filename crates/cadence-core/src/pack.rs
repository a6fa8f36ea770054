//! Language packs: the per-language rule tables every component runs on.
//!
//! A pack is a versioned JSON asset. Loading compiles it into lookup
//! structures (hash sets, the frequency table, a reverse index of known verb
//! forms) and validates the paradigm shapes, so the analyzers never have to
//! branch on the language code.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use cadence_types::{ConjugationSource, ConjugationTable, PartOfSpeech, Tense};
use serde::{Deserialize, Serialize};

use crate::conjugation;
use crate::error::PackError;
use crate::frequency::FrequencyTable;
use crate::preprocess;

fn default_unknown_zipf() -> f64 {
    3.0
}

fn default_min_stem() -> usize {
    1
}

/// On-disk representation of a language pack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackData {
    pub code: String,
    pub name: String,
    pub version: String,
    /// Zipf value assumed for words missing from `frequencies`
    #[serde(default = "default_unknown_zipf")]
    pub unknown_zipf: f64,
    pub stop_words: Vec<String>,
    pub frequencies: HashMap<String, f64>,
    pub pos_rules: Vec<PosRuleData>,
    pub tense_rules: Vec<TenseRule>,
    #[serde(default)]
    pub lemma_rules: Vec<LemmaRule>,
    #[serde(default)]
    pub plural_suffix: Option<String>,
    #[serde(default)]
    pub verbs: Vec<String>,
    pub paradigms: Vec<Paradigm>,
    #[serde(default)]
    pub irregular_verbs: BTreeMap<String, BTreeMap<Tense, Vec<String>>>,
    #[serde(default)]
    pub idioms: Vec<String>,
    #[serde(default)]
    pub elisions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "match", rename_all = "snake_case")]
pub enum PosRuleData {
    Words {
        tag: PartOfSpeech,
        words: Vec<String>,
    },
    Suffix {
        tag: PartOfSpeech,
        suffixes: Vec<String>,
        #[serde(default = "default_min_stem")]
        min_stem: usize,
        #[serde(default)]
        except: Vec<String>,
    },
    Conjugated {
        tag: PartOfSpeech,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenseRule {
    pub tense: Tense,
    pub suffixes: Vec<String>,
}

/// Maps a non-finite verb ending back to candidate infinitive endings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmaRule {
    pub suffix: String,
    pub replacements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemBase {
    /// Infinitive with the class ending removed
    Stem,
    /// Full infinitive (future/conditional in Romance languages)
    Infinitive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParadigmRow {
    pub base: StemBase,
    pub suffixes: Vec<String>,
}

/// Regular conjugation class, selected by infinitive ending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paradigm {
    pub ending: String,
    pub tenses: BTreeMap<Tense, ParadigmRow>,
}

/// Predicate half of a tagging rule
#[derive(Debug, Clone)]
pub enum Predicate {
    InSet(HashSet<String>),
    Suffix {
        suffixes: Vec<String>,
        min_stem: usize,
        except: HashSet<String>,
    },
    KnownVerbForm,
}

#[derive(Debug, Clone)]
pub struct PosRule {
    pub predicate: Predicate,
    pub tag: PartOfSpeech,
}

/// A conjugated or infinitive form found in the verb lexicon
#[derive(Debug, Clone, PartialEq)]
pub struct VerbForm {
    pub lemma: String,
    /// `None` for the infinitive itself
    pub tense: Option<Tense>,
}

/// Compiled, immutable rule set for one language
#[derive(Debug, Clone)]
pub struct LanguagePack {
    code: String,
    name: String,
    version: String,
    unknown_zipf: f64,
    stop_words: HashSet<String>,
    frequency: FrequencyTable,
    pos_rules: Vec<PosRule>,
    tense_rules: Vec<TenseRule>,
    lemma_rules: Vec<LemmaRule>,
    plural_suffix: Option<String>,
    paradigms: Vec<Paradigm>,
    irregular_verbs: HashMap<String, ConjugationTable>,
    verb_forms: HashMap<String, VerbForm>,
    idioms: Vec<Vec<String>>,
    elisions: Vec<String>,
}

impl LanguagePack {
    /// Parse and compile a pack from its JSON asset
    pub fn from_json(json: &str) -> Result<Self, PackError> {
        let data: PackData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Load pack asset from file path
    pub fn load_from_file(path: &Path) -> Result<Self, PackError> {
        tracing::info!("Loading language pack from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_data(data: PackData) -> Result<Self, PackError> {
        if data.code.trim().is_empty() {
            return Err(PackError::Invalid("empty language code".to_string()));
        }

        for paradigm in &data.paradigms {
            validate_paradigm(paradigm)?;
        }

        let lower = |words: Vec<String>| -> Vec<String> {
            words.into_iter().map(|w| w.to_lowercase()).collect()
        };

        let elisions = lower(data.elisions);

        let mut irregular_verbs = HashMap::new();
        for (lemma, rows) in data.irregular_verbs {
            let table = irregular_table(&lemma, rows)?;
            irregular_verbs.insert(lemma.to_lowercase(), table);
        }

        let paradigms = data.paradigms;
        let verbs = lower(data.verbs);
        let verb_forms = build_verb_index(&irregular_verbs, &verbs, &paradigms);

        let pos_rules = data
            .pos_rules
            .into_iter()
            .map(|rule| match rule {
                PosRuleData::Words { tag, words } => PosRule {
                    predicate: Predicate::InSet(lower(words).into_iter().collect()),
                    tag,
                },
                PosRuleData::Suffix {
                    tag,
                    suffixes,
                    min_stem,
                    except,
                } => PosRule {
                    predicate: Predicate::Suffix {
                        suffixes: lower(suffixes),
                        min_stem,
                        except: lower(except).into_iter().collect(),
                    },
                    tag,
                },
                PosRuleData::Conjugated { tag } => PosRule {
                    predicate: Predicate::KnownVerbForm,
                    tag,
                },
            })
            .collect();

        // Idioms are matched token-by-token, so run them through the same
        // tokenizer as the lyrics.
        let idioms = data
            .idioms
            .iter()
            .map(|phrase| {
                preprocess::tokenize(phrase, &elisions)
                    .into_iter()
                    .map(|w| w.to_lowercase())
                    .collect::<Vec<_>>()
            })
            .filter(|words| !words.is_empty())
            .collect();

        let pack = Self {
            code: data.code.to_lowercase(),
            name: data.name,
            version: data.version,
            unknown_zipf: data.unknown_zipf,
            stop_words: lower(data.stop_words).into_iter().collect(),
            frequency: FrequencyTable::from_entries(data.frequencies),
            pos_rules,
            tense_rules: data.tense_rules,
            lemma_rules: data.lemma_rules,
            plural_suffix: data.plural_suffix.map(|s| s.to_lowercase()),
            paradigms,
            irregular_verbs,
            verb_forms,
            idioms,
            elisions,
        };

        tracing::info!(
            "Compiled language pack {} v{} ({} frequencies, {} verb forms, {} idioms)",
            pack.code,
            pack.version,
            pack.frequency.len(),
            pack.verb_forms.len(),
            pack.idioms.len()
        );

        Ok(pack)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn unknown_zipf(&self) -> f64 {
        self.unknown_zipf
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn frequency(&self) -> &FrequencyTable {
        &self.frequency
    }

    pub fn pos_rules(&self) -> &[PosRule] {
        &self.pos_rules
    }

    pub fn tense_rules(&self) -> &[TenseRule] {
        &self.tense_rules
    }

    pub fn lemma_rules(&self) -> &[LemmaRule] {
        &self.lemma_rules
    }

    pub fn plural_suffix(&self) -> Option<&str> {
        self.plural_suffix.as_deref()
    }

    pub fn paradigms(&self) -> &[Paradigm] {
        &self.paradigms
    }

    pub fn irregular_verb(&self, lemma: &str) -> Option<&ConjugationTable> {
        self.irregular_verbs.get(lemma)
    }

    /// Lookup of a lowercased word in the verb lexicon
    pub fn verb_form(&self, word: &str) -> Option<&VerbForm> {
        self.verb_forms.get(word)
    }

    pub fn is_known_verb(&self, lemma: &str) -> bool {
        self.verb_forms
            .get(lemma)
            .is_some_and(|form| form.tense.is_none() && form.lemma == lemma)
    }

    pub fn idioms(&self) -> &[Vec<String>] {
        &self.idioms
    }

    pub fn elisions(&self) -> &[String] {
        &self.elisions
    }
}

impl Predicate {
    /// Evaluate against a lowercased word
    pub fn matches(&self, word: &str, pack: &LanguagePack) -> bool {
        match self {
            Predicate::InSet(words) => words.contains(word),
            Predicate::Suffix {
                suffixes,
                min_stem,
                except,
            } => {
                !except.contains(word)
                    && suffixes.iter().any(|suffix| {
                        word.strip_suffix(suffix.as_str())
                            .is_some_and(|stem| stem.chars().count() >= *min_stem)
                    })
            }
            Predicate::KnownVerbForm => pack.verb_forms.contains_key(word),
        }
    }
}

fn validate_paradigm(paradigm: &Paradigm) -> Result<(), PackError> {
    if paradigm.ending.is_empty() {
        return Err(PackError::Invalid("paradigm with empty ending".to_string()));
    }
    for tense in Tense::ALL {
        let row = paradigm.tenses.get(&tense).ok_or_else(|| {
            PackError::Invalid(format!(
                "paradigm -{} is missing tense {}",
                paradigm.ending,
                tense.as_str()
            ))
        })?;
        if row.suffixes.len() != 6 {
            return Err(PackError::Invalid(format!(
                "paradigm -{} tense {} has {} slots, expected 6",
                paradigm.ending,
                tense.as_str(),
                row.suffixes.len()
            )));
        }
    }
    Ok(())
}

fn irregular_table(
    lemma: &str,
    rows: BTreeMap<Tense, Vec<String>>,
) -> Result<ConjugationTable, PackError> {
    if let Some(missing) = Tense::ALL.into_iter().find(|t| !rows.contains_key(t)) {
        return Err(PackError::Invalid(format!(
            "irregular verb {lemma} is missing tense {}",
            missing.as_str()
        )));
    }

    let mut forms = BTreeMap::new();
    for (tense, row) in rows {
        let len = row.len();
        let row: [String; 6] = row
            .into_iter()
            .map(|f| f.to_lowercase())
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| {
                PackError::Invalid(format!(
                    "irregular verb {lemma} tense {} has {len} slots, expected 6",
                    tense.as_str()
                ))
            })?;
        forms.insert(tense, row);
    }

    Ok(ConjugationTable {
        lemma: lemma.to_lowercase(),
        source: ConjugationSource::Irregular,
        forms,
    })
}

/// Reverse index from surface form to lemma and tense.
///
/// Infinitives go in first, then irregular tables, then spliced regular
/// verbs. An ambiguous form keeps the first entry, so earlier tenses in
/// `Tense::ALL` win.
fn build_verb_index(
    irregular: &HashMap<String, ConjugationTable>,
    verbs: &[String],
    paradigms: &[Paradigm],
) -> HashMap<String, VerbForm> {
    let mut index = HashMap::new();

    let mut irregular_lemmas: Vec<&String> = irregular.keys().collect();
    irregular_lemmas.sort();

    for lemma in irregular_lemmas.iter().copied().chain(verbs.iter()) {
        index.entry(lemma.clone()).or_insert_with(|| VerbForm {
            lemma: lemma.clone(),
            tense: None,
        });
    }

    let regular_tables = verbs
        .iter()
        .filter(|lemma| !irregular.contains_key(*lemma))
        .filter_map(|lemma| conjugation::splice(paradigms, lemma));

    let irregular_tables = irregular_lemmas
        .iter()
        .filter_map(|lemma| irregular.get(*lemma).cloned());

    for table in irregular_tables.chain(regular_tables) {
        for (tense, form) in table.iter_forms() {
            index.entry(form.to_string()).or_insert_with(|| VerbForm {
                lemma: table.lemma.clone(),
                tense: Some(tense),
            });
        }
    }

    index
}
