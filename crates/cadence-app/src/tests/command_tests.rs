//! Subcommands end to end, minus argument parsing and stdout

use cadence_types::{DifficultyMetrics, MetricStats};

use super::{state, temp_file};
use crate::cli::{Command, InputArgs, RecalibrateArgs, VocabArgs};
use crate::commands;

#[tokio::test]
async fn score_reports_easy_song() {
    let state = state();
    let file = temp_file("score.txt", "Yo hablo español\nTú hablas francés\n");

    let value = commands::run(Command::Score(InputArgs { file }), &state, "es")
        .await
        .unwrap();

    assert_eq!(value["metrics"]["word_count"], 6);
    let score = value["difficulty_score"].as_f64().unwrap();
    assert!(score < 5.0, "{score}");
    assert!(value["level"].as_u64().unwrap() <= 5);
}

#[tokio::test]
async fn analyze_emits_tagged_tokens() {
    let state = state();
    let file = temp_file("analyze.txt", "Yo hablo español\n");

    let value = commands::run(Command::Analyze(InputArgs { file }), &state, "es")
        .await
        .unwrap();

    let hablo = &value[0]["tokens"][1];
    assert_eq!(hablo["part_of_speech"], "VERB");
    assert_eq!(hablo["tense"], "present");
    assert_eq!(hablo["lemma"], "hablar");
}

#[tokio::test]
async fn vocab_uses_translation_and_limit() {
    let state = state();
    let lyrics = temp_file("vocab-es.txt", "corazón roto\ncorazón\n");
    let translation = temp_file("vocab-en.txt", "heart broken\nheart\n");

    let value = commands::run(
        Command::Vocab(VocabArgs {
            file: lyrics,
            translation: Some(translation),
            limit: Some(1),
        }),
        &state,
        "es",
    )
    .await
    .unwrap();

    let words = value.as_array().unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0]["word"], "corazón");
    assert_eq!(words[0]["translation"], "heart");
    assert_eq!(words[0]["count"], 2);
}

#[tokio::test]
async fn conjugate_unknown_class_is_null() {
    let state = state();
    let value = commands::run(
        Command::Conjugate {
            lemma: "corazón".to_string(),
        },
        &state,
        "es",
    )
    .await
    .unwrap();
    assert!(value.is_null());

    let value = commands::run(
        Command::Conjugate {
            lemma: "bailar".to_string(),
        },
        &state,
        "es",
    )
    .await
    .unwrap();
    assert_eq!(value["source"], "regular");
    assert_eq!(value["forms"]["present"][0], "bailo");
}

#[tokio::test]
async fn unsupported_language_fails() {
    let state = state();
    let file = temp_file("unsupported.txt", "hello there\n");
    let err = commands::run(Command::Score(InputArgs { file }), &state, "de")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("de"), "{err}");
}

#[tokio::test]
async fn empty_song_fails() {
    let state = state();
    let file = temp_file("empty.txt", "");
    assert!(
        commands::run(Command::Score(InputArgs { file }), &state, "es")
            .await
            .is_err()
    );
}

#[tokio::test]
async fn wordless_song_still_scores() {
    let state = state();
    let file = temp_file("wordless.txt", "\n...\n");

    let value = commands::run(Command::Score(InputArgs { file }), &state, "es")
        .await
        .unwrap();

    assert_eq!(value["metrics"]["word_count"], 0);
    let score = value["difficulty_score"].as_f64().unwrap();
    assert!((1.0..=10.0).contains(&score), "{score}");
}

#[tokio::test]
async fn recalibrate_replaces_and_persists_baseline() {
    let state = state();
    let corpus = vec![
        DifficultyMetrics {
            word_count: 100,
            type_token_ratio: 0.4,
            ..Default::default()
        },
        DifficultyMetrics {
            word_count: 300,
            type_token_ratio: 0.6,
            ..Default::default()
        },
    ];
    let metrics = temp_file("metrics.json", &serde_json::to_string(&corpus).unwrap());
    let output = std::env::temp_dir().join(format!("cadence-{}-baseline.json", std::process::id()));

    commands::run(
        Command::Recalibrate(RecalibrateArgs {
            metrics,
            output: Some(output.clone()),
        }),
        &state,
        "es",
    )
    .await
    .unwrap();

    let baseline = state.baseline_snapshot().await;
    assert_eq!(baseline.word_count, MetricStats::new(200.0, 100.0));
    assert_eq!(crate::io::load_baseline(&output).unwrap(), baseline);
}

#[tokio::test]
async fn recalibrate_rejects_empty_corpus() {
    let state = state();
    let metrics = temp_file("empty-metrics.json", "[]");
    let result = commands::run(
        Command::Recalibrate(RecalibrateArgs {
            metrics,
            output: None,
        }),
        &state,
        "es",
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn languages_lists_embedded_packs() {
    let state = state();
    let value = commands::run(Command::Languages, &state, "es").await.unwrap();
    let codes: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["es", "fr"]);
}
