use std::path::PathBuf;
use std::sync::Arc;

use cadence_types::DifficultyReport;
use serde::Serialize;
use tokio::task::JoinSet;

use crate::io;
use crate::state::AppState;

/// Outcome for one file; a failing file does not abort the batch
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<DifficultyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchEntry {
    fn new(path: PathBuf, result: anyhow::Result<DifficultyReport>) -> Self {
        match result {
            Ok(report) => Self {
                path,
                report: Some(report),
                error: None,
            },
            Err(e) => Self {
                path,
                report: None,
                error: Some(format!("{e:#}")),
            },
        }
    }
}

/// Score `files` on the blocking pool. Every file sees the same baseline
/// snapshot, so a concurrent recalibration cannot split a batch. Entries
/// come back in input order.
pub async fn score_files(state: &AppState, files: Vec<PathBuf>, language: &str) -> Vec<BatchEntry> {
    let baseline = Arc::new(state.baseline_snapshot().await);
    let mut tasks = JoinSet::new();

    for (index, path) in files.into_iter().enumerate() {
        let engine = state.engine.clone();
        let baseline = baseline.clone();
        let language = language.to_string();

        tasks.spawn_blocking(move || {
            let result = io::read_lines(&path).and_then(|lines| {
                engine
                    .difficulty(&lines, &language, &baseline)
                    .map_err(anyhow::Error::from)
            });
            (index, BatchEntry::new(path, result))
        });
    }

    let mut entries = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::error!("batch task panicked: {e}"),
        }
    }

    let failed = entries.iter().filter(|(_, e)| e.error.is_some()).count();
    tracing::info!("Scored {} files, {} failed", entries.len(), failed);

    entries.sort_by_key(|(index, _)| *index);
    entries.into_iter().map(|(_, entry)| entry).collect()
}
