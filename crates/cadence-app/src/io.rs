use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use cadence_types::{BaselineStats, DifficultyMetrics};

/// Lyric or translation lines from a file, or stdin for `-`
pub fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };

    Ok(text.lines().map(str::to_string).collect())
}

pub fn load_baseline(path: &Path) -> anyhow::Result<BaselineStats> {
    tracing::info!("Loading baseline from {}", path.display());
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read baseline {}", path.display()))?;
    let baseline = serde_json::from_str(&data)
        .with_context(|| format!("invalid baseline {}", path.display()))?;
    Ok(baseline)
}

pub fn save_baseline(path: &Path, baseline: &BaselineStats) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(baseline)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Baseline written to {}", path.display());
    Ok(())
}

/// JSON array of per-song metrics
pub fn load_metrics(path: &Path) -> anyhow::Result<Vec<DifficultyMetrics>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read metrics {}", path.display()))?;
    let metrics = serde_json::from_str(&data)
        .with_context(|| format!("invalid metrics array {}", path.display()))?;
    Ok(metrics)
}
