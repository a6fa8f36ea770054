use cadence_core::{ConjugationGenerator, DifficultyScorer, MorphologicalAnalyzer};
use cadence_lang_french::FrenchPackLoader;
use cadence_types::{BaselineStats, ConjugationSource, PartOfSpeech, Person, Tense};

#[test]
fn embedded_pack_compiles() {
    let pack = FrenchPackLoader::load_embedded().unwrap();
    assert_eq!(pack.code(), cadence_lang_french::LANGUAGE_CODE);
    assert!(pack.is_stop_word("l'"));
    assert!(pack.is_stop_word("sont"));
    assert!(!pack.is_stop_word("amour"));
}

#[test]
fn elided_clitics_are_separate_tokens() {
    let pack = FrenchPackLoader::load_embedded().unwrap();
    let line = MorphologicalAnalyzer::new(&pack).analyze_line("J\u{2019}aime la vie", 0);

    let surfaces: Vec<&str> = line.tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(surfaces, vec!["J'", "aime", "la", "vie"]);

    assert_eq!(line.tokens[0].part_of_speech, PartOfSpeech::Pron);
    let aime = &line.tokens[1];
    assert!(aime.is_verb);
    assert_eq!(aime.lemma, "aimer");
    assert_eq!(aime.tense, Some(Tense::Present));
}

#[test]
fn irregular_forms_resolve_to_their_lemma() {
    let pack = FrenchPackLoader::load_embedded().unwrap();
    let analyzer = MorphologicalAnalyzer::new(&pack);

    let suis = analyzer.analyze_word("suis");
    assert_eq!(suis.lemma, "être");
    assert_eq!(suis.tense, Some(Tense::Present));

    let voudrais = analyzer.analyze_word("voudrais");
    assert_eq!(voudrais.lemma, "vouloir");
    assert_eq!(voudrais.tense, Some(Tense::Conditional));

    let a = analyzer.analyze_word("a");
    assert_eq!(a.lemma, "avoir");
}

#[test]
fn participles_map_to_infinitive() {
    let pack = FrenchPackLoader::load_embedded().unwrap();
    let analyzer = MorphologicalAnalyzer::new(&pack);

    let aimee = analyzer.analyze_word("aimée");
    assert!(aimee.is_verb);
    assert_eq!(aimee.lemma, "aimer");
    assert_eq!(aimee.tense, None);

    let chantant = analyzer.analyze_word("chantant");
    assert_eq!(chantant.lemma, "chanter");
    assert_eq!(chantant.tense, None);
}

#[test]
fn suffix_lookalikes_keep_their_class() {
    let pack = FrenchPackLoader::load_embedded().unwrap();
    let analyzer = MorphologicalAnalyzer::new(&pack);
    for word in ["hiver", "enfant", "liberté", "pensée", "moment"] {
        assert_eq!(analyzer.tag(word), PartOfSpeech::Noun, "{word}");
    }
    assert_eq!(analyzer.tag("maintenant"), PartOfSpeech::Adv);
    // closed-class adverbs win over the infinitive suffix rule
    assert_eq!(analyzer.tag("hier"), PartOfSpeech::Adv);
    assert_eq!(analyzer.tag("jamais"), PartOfSpeech::Adv);
    assert_eq!(analyzer.tag("doucement"), PartOfSpeech::Adv);
    assert_eq!(analyzer.tag("heureux"), PartOfSpeech::Adj);
}

#[test]
fn regular_classes_conjugate() {
    let pack = FrenchPackLoader::load_embedded().unwrap();
    let generator = ConjugationGenerator::new(&pack);

    let parler = generator.conjugations("parler").unwrap();
    assert_eq!(parler.source, ConjugationSource::Regular);
    assert_eq!(parler.form(Tense::Present, Person::FirstPlural), Some("parlons"));
    assert_eq!(parler.form(Tense::Future, Person::FirstSingular), Some("parlerai"));

    let finir = generator.conjugations("finir").unwrap();
    assert_eq!(finir.form(Tense::Present, Person::ThirdPlural), Some("finissent"));

    let vendre = generator.conjugations("vendre").unwrap();
    assert_eq!(vendre.form(Tense::Present, Person::ThirdSingular), Some("vend"));
    assert_eq!(vendre.form(Tense::Future, Person::FirstSingular), Some("vendrai"));

    let etre = generator.conjugations("être").unwrap();
    assert_eq!(etre.source, ConjugationSource::Irregular);
    assert_eq!(etre.form(Tense::Present, Person::FirstSingular), Some("suis"));
}

#[test]
fn idioms_match_across_elisions() {
    let pack = FrenchPackLoader::load_embedded().unwrap();
    let analyzed = MorphologicalAnalyzer::new(&pack)
        .analyze_lines(&["C'est la vie, mon amour", "j'ai le cafard ce soir"]);
    let metrics = DifficultyScorer::new(&pack).metrics(&analyzed).unwrap();
    assert_eq!(metrics.idiom_count, 2);
}

#[test]
fn scores_simple_lyrics() {
    let pack = FrenchPackLoader::load_embedded().unwrap();
    let report = DifficultyScorer::new(&pack)
        .score_lines(&["Je parle français", "Tu parles anglais"], &BaselineStats::default())
        .unwrap();
    assert_eq!(report.metrics.word_count, 6);
    assert!(report.difficulty_score < 5.0, "{}", report.difficulty_score);
}
