//! Small Spanish-flavoured pack shared by the unit tests.

use crate::pack::LanguagePack;

pub const JSON: &str = r#"{
  "code": "xx",
  "name": "Test Spanish",
  "version": "0.0.1",
  "unknown_zipf": 3.0,
  "stop_words": ["el", "la", "los", "las", "un", "una", "yo", "tú", "de", "en", "y", "que", "es", "son", "ser", "me", "te", "a"],
  "frequencies": {
    "yo": 6.6, "tú": 5.9, "hablo": 4.3, "hablas": 3.9, "hablar": 4.8,
    "español": 4.6, "francés": 4.1, "corazón": 4.2, "bien": 5.3,
    "el": 7.3, "de": 7.3, "que": 7.2, "noche": 5.0, "luna": 4.4
  },
  "pos_rules": [
    {"match": "words", "tag": "DET", "words": ["el", "la", "los", "las", "un", "una", "mi", "tu"]},
    {"match": "words", "tag": "PRON", "words": ["yo", "tú", "él", "ella", "me", "te", "se"]},
    {"match": "words", "tag": "ADP", "words": ["a", "de", "en", "con", "por", "para"]},
    {"match": "words", "tag": "CONJ", "words": ["y", "o", "pero", "que", "como"]},
    {"match": "words", "tag": "INTJ", "words": ["ay", "oh"]},
    {"match": "words", "tag": "ADV", "words": ["no", "bien", "menos", "más"]},
    {"match": "suffix", "tag": "VERB", "suffixes": ["ar", "er", "ir", "ando", "iendo", "ado", "ido"], "min_stem": 2, "except": ["lugar", "mujer"]},
    {"match": "conjugated", "tag": "VERB"},
    {"match": "suffix", "tag": "ADV", "suffixes": ["mente"], "min_stem": 2},
    {"match": "suffix", "tag": "ADJ", "suffixes": ["oso", "osa"], "min_stem": 3}
  ],
  "tense_rules": [
    {"tense": "conditional", "suffixes": ["aríamos", "eríamos", "iríamos", "arían", "erían", "irían", "aría", "ería", "iría"]},
    {"tense": "imperfect_subjunctive", "suffixes": ["áramos", "iéramos", "aran", "ieran", "ara", "iera"]},
    {"tense": "future", "suffixes": ["aremos", "arán", "aré", "ará", "erá", "irá"]},
    {"tense": "imperfect", "suffixes": ["ábamos", "aban", "aba", "ían", "ía"]},
    {"tense": "preterite", "suffixes": ["aron", "ieron", "aste", "ió", "ó", "é", "í"]},
    {"tense": "present", "suffixes": ["amos", "emos", "imos", "an", "en", "as", "es", "o", "a", "e"]},
    {"tense": "present_subjunctive", "suffixes": ["emos", "en", "es", "e"]}
  ],
  "lemma_rules": [
    {"suffix": "ando", "replacements": ["ar"]},
    {"suffix": "iendo", "replacements": ["er", "ir"]},
    {"suffix": "ado", "replacements": ["ar"]},
    {"suffix": "ido", "replacements": ["er", "ir"]}
  ],
  "plural_suffix": "s",
  "verbs": ["hablar", "cantar", "vivir", "comer", "echar", "bailar"],
  "paradigms": [
    {"ending": "ar", "tenses": {
      "present": {"base": "stem", "suffixes": ["o", "as", "a", "amos", "áis", "an"]},
      "preterite": {"base": "stem", "suffixes": ["é", "aste", "ó", "amos", "asteis", "aron"]},
      "imperfect": {"base": "stem", "suffixes": ["aba", "abas", "aba", "ábamos", "abais", "aban"]},
      "future": {"base": "infinitive", "suffixes": ["é", "ás", "á", "emos", "éis", "án"]},
      "conditional": {"base": "infinitive", "suffixes": ["ía", "ías", "ía", "íamos", "íais", "ían"]},
      "present_subjunctive": {"base": "stem", "suffixes": ["e", "es", "e", "emos", "éis", "en"]},
      "imperfect_subjunctive": {"base": "stem", "suffixes": ["ara", "aras", "ara", "áramos", "arais", "aran"]}
    }},
    {"ending": "er", "tenses": {
      "present": {"base": "stem", "suffixes": ["o", "es", "e", "emos", "éis", "en"]},
      "preterite": {"base": "stem", "suffixes": ["í", "iste", "ió", "imos", "isteis", "ieron"]},
      "imperfect": {"base": "stem", "suffixes": ["ía", "ías", "ía", "íamos", "íais", "ían"]},
      "future": {"base": "infinitive", "suffixes": ["é", "ás", "á", "emos", "éis", "án"]},
      "conditional": {"base": "infinitive", "suffixes": ["ía", "ías", "ía", "íamos", "íais", "ían"]},
      "present_subjunctive": {"base": "stem", "suffixes": ["a", "as", "a", "amos", "áis", "an"]},
      "imperfect_subjunctive": {"base": "stem", "suffixes": ["iera", "ieras", "iera", "iéramos", "ierais", "ieran"]}
    }},
    {"ending": "ir", "tenses": {
      "present": {"base": "stem", "suffixes": ["o", "es", "e", "imos", "ís", "en"]},
      "preterite": {"base": "stem", "suffixes": ["í", "iste", "ió", "imos", "isteis", "ieron"]},
      "imperfect": {"base": "stem", "suffixes": ["ía", "ías", "ía", "íamos", "íais", "ían"]},
      "future": {"base": "infinitive", "suffixes": ["é", "ás", "á", "emos", "éis", "án"]},
      "conditional": {"base": "infinitive", "suffixes": ["ía", "ías", "ía", "íamos", "íais", "ían"]},
      "present_subjunctive": {"base": "stem", "suffixes": ["a", "as", "a", "amos", "áis", "an"]},
      "imperfect_subjunctive": {"base": "stem", "suffixes": ["iera", "ieras", "iera", "iéramos", "ierais", "ieran"]}
    }}
  ],
  "irregular_verbs": {
    "ser": {
      "present": ["soy", "eres", "es", "somos", "sois", "son"],
      "preterite": ["fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron"],
      "imperfect": ["era", "eras", "era", "éramos", "erais", "eran"],
      "future": ["seré", "serás", "será", "seremos", "seréis", "serán"],
      "conditional": ["sería", "serías", "sería", "seríamos", "seríais", "serían"],
      "present_subjunctive": ["sea", "seas", "sea", "seamos", "seáis", "sean"],
      "imperfect_subjunctive": ["fuera", "fueras", "fuera", "fuéramos", "fuerais", "fueran"]
    }
  },
  "idioms": ["echar de menos", "poco a poco"],
  "elisions": []
}"#;

pub fn pack() -> LanguagePack {
    LanguagePack::from_json(JSON).expect("test pack compiles")
}
