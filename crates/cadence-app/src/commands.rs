use anyhow::Context;
use cadence_core::update_baselines;
use serde::Serialize;
use serde_json::Value;

use crate::batch;
use crate::cli::{Command, InputArgs, RecalibrateArgs, VocabArgs};
use crate::io;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct LanguageInfo {
    code: String,
    name: String,
    version: String,
}

/// Execute one subcommand and return its JSON result
pub async fn run(command: Command, state: &AppState, language: &str) -> anyhow::Result<Value> {
    let value = match command {
        Command::Analyze(InputArgs { file }) => {
            let lines = io::read_lines(&file)?;
            serde_json::to_value(state.engine.analyze(&lines, language)?)?
        }
        Command::Score(InputArgs { file }) => {
            let lines = io::read_lines(&file)?;
            let baseline = state.baseline_snapshot().await;
            let report = state.engine.difficulty(&lines, language, &baseline)?;
            tracing::info!(
                "{}: score {:.2}, level {}",
                file.display(),
                report.difficulty_score,
                report.level
            );
            serde_json::to_value(report)?
        }
        Command::Vocab(args) => vocab(args, state, language)?,
        Command::Conjugate { lemma } => {
            let table = state.engine.conjugations(&lemma, language)?;
            if table.is_none() {
                tracing::warn!("No conjugation class matches {lemma}");
            }
            serde_json::to_value(table)?
        }
        Command::Recalibrate(args) => recalibrate(args, state).await?,
        Command::Batch(args) => {
            let entries = batch::score_files(state, args.files, language).await;
            serde_json::to_value(entries)?
        }
        Command::Languages => {
            let languages: Vec<LanguageInfo> = state
                .engine
                .registry()
                .packs()
                .map(|pack| LanguageInfo {
                    code: pack.code().to_string(),
                    name: pack.name().to_string(),
                    version: pack.version().to_string(),
                })
                .collect();
            serde_json::to_value(languages)?
        }
    };

    Ok(value)
}

fn vocab(args: VocabArgs, state: &AppState, language: &str) -> anyhow::Result<Value> {
    let lines = io::read_lines(&args.file)?;
    let translation = match &args.translation {
        Some(path) => io::read_lines(path)?,
        None => Vec::new(),
    };
    let limit = args.limit.unwrap_or(state.config.vocab_limit);

    let vocabulary = state
        .engine
        .vocabulary(&lines, &translation, language, limit, None)?;
    Ok(serde_json::to_value(vocabulary)?)
}

async fn recalibrate(args: RecalibrateArgs, state: &AppState) -> anyhow::Result<Value> {
    let corpus = io::load_metrics(&args.metrics)?;
    let baseline = update_baselines(&corpus).context("cannot recalibrate from an empty corpus")?;

    if let Some(path) = &args.output {
        io::save_baseline(path, &baseline)?;
    }
    state.replace_baseline(baseline.clone()).await;

    Ok(serde_json::to_value(baseline)?)
}
