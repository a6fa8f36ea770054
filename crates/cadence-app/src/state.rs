use std::sync::Arc;

use anyhow::Context;
use cadence_config::Config;
use cadence_core::{Engine, LanguagePack, PackRegistry, difficulty};
use cadence_lang_french::FrenchPackLoader;
use cadence_lang_spanish::SpanishPackLoader;
use cadence_types::BaselineStats;
use tokio::sync::RwLock;

use crate::io;

pub struct AppState {
    pub config: Config,
    pub engine: Arc<Engine>,
    pub baseline: Arc<RwLock<BaselineStats>>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let registry = build_registry(&config)?;
        let engine = Engine::new(registry)
            .with_max_lines(config.max_lines)
            .with_unknown_usefulness(config.unknown_usefulness);

        let baseline = match &config.baseline_path {
            Some(path) => io::load_baseline(path)?,
            None => BaselineStats::default(),
        };
        difficulty::replace_global_baseline(baseline.clone());

        Ok(Self {
            config,
            engine: Arc::new(engine),
            baseline: Arc::new(RwLock::new(baseline)),
        })
    }

    /// Copy of the current baseline; scoring never holds the lock
    pub async fn baseline_snapshot(&self) -> BaselineStats {
        self.baseline.read().await.clone()
    }

    pub async fn replace_baseline(&self, baseline: BaselineStats) {
        difficulty::replace_global_baseline(baseline.clone());
        *self.baseline.write().await = baseline;
    }
}

/// Embedded packs first, then configured extras, which may replace them
pub fn build_registry(config: &Config) -> anyhow::Result<PackRegistry> {
    let mut registry = PackRegistry::new();
    SpanishPackLoader::register(&mut registry).context("failed to load Spanish pack")?;
    FrenchPackLoader::register(&mut registry).context("failed to load French pack")?;

    for path in &config.extra_packs {
        let pack = LanguagePack::load_from_file(path)
            .with_context(|| format!("failed to load pack {}", path.display()))?;
        registry.register(pack);
    }

    tracing::info!(
        "Registered languages: {}",
        registry.codes().collect::<Vec<_>>().join(", ")
    );
    Ok(registry)
}
