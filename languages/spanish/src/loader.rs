use std::path::Path;

use cadence_core::{LanguagePack, PackError, PackRegistry};

pub struct SpanishPackLoader;

impl SpanishPackLoader {
    /// Load embedded pack data
    pub fn load_embedded() -> Result<LanguagePack, PackError> {
        let json = include_str!("../data/pack.json");
        tracing::info!("Loading embedded Spanish language pack...");
        let pack = LanguagePack::from_json(json)?;
        tracing::info!("Loaded Spanish pack v{}", pack.version());
        Ok(pack)
    }

    /// Load pack from file path, e.g. a locally extended frequency list
    pub fn load_from_file(path: &Path) -> Result<LanguagePack, PackError> {
        let pack = LanguagePack::load_from_file(path)?;
        if pack.code() != crate::LANGUAGE_CODE {
            tracing::warn!(
                "Pack at {} declares code {}, expected {}",
                path.display(),
                pack.code(),
                crate::LANGUAGE_CODE
            );
        }
        Ok(pack)
    }

    pub fn register(registry: &mut PackRegistry) -> Result<(), PackError> {
        registry.register(Self::load_embedded()?);
        Ok(())
    }
}
